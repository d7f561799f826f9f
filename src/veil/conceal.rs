// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Forward obfuscation pipeline.
//!
//! `make_hidden` turns a photograph into a hidden image:
//! 1. Allocate a raster two pixels larger in each dimension and copy the
//!    photograph into the interior at offset `(1, 1)`.
//! 2. Swap every interior pixel with the next target drawn from the
//!    deterministic sequence (row-major order). The swaps are replayed in
//!    reverse by restoration.
//! 3. Per interior pixel: invert RGB where the pixel's brightness and the
//!    logo coverage disagree with the silhouette, then pack the inversion
//!    flag and rounding factor into the alpha channel. After this step the
//!    image shows the logo silhouette, not the photograph.
//! 4. Write the corner words and the hex-encoded border fields. The hash
//!    is mandatory; author, origin and solution failures are logged and
//!    the field is left cleared.
//!
//! The result is intentionally lossy: alpha comes back quantized (see
//! [`crate::veil::alpha`]), so the restored image is near-identical, not
//! bit-identical.

use image::RgbaImage;

use crate::raster::{self, Raster};
use crate::veil::alpha::encode_alpha;
use crate::veil::error::VeilError;
use crate::veil::hexfield;
use crate::veil::logo::LogoMask;
use crate::veil::meta::{self, AuthorRecord, Solution};
use crate::veil::sequence::{ChaChaSequence, SequenceGenerator};

/// Metadata to embed alongside the photograph.
///
/// Only the hash is mandatory: it re-identifies the photograph later and
/// its write failure aborts the transform with
/// [`VeilError::CapacityExceeded`].
#[derive(Debug, Clone, Default)]
pub struct EmbedFields {
    pub hash: String,
    pub author: Option<AuthorRecord>,
    pub origin: Option<String>,
    pub solution: Option<Solution>,
    /// Preferred riddle-type id, echoed through the top-right corner.
    ///
    /// The corner stores 24 bits: ids above `0x00FF_FFFE` are not
    /// representable (`0x00FF_FFFF` is the "no id" sentinel and higher
    /// bits are truncated) and read back as `None` or a truncated id.
    pub preferred_type: Option<u32>,
}

impl EmbedFields {
    /// Fields with only the mandatory hash set.
    pub fn with_hash(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            ..Self::default()
        }
    }
}

/// "Very bright" classification of a pixel's own RGB mean, alpha ignored.
/// Strictly above 0.5: `(r + g + b) / 765 > 0.5`.
fn is_very_bright(word: u32) -> bool {
    let (_, r, g, b) = raster::channels(word);
    r as u32 + g as u32 + b as u32 > 382
}

/// Conceal a photograph behind a logo silhouette using the default
/// deterministic sequence.
///
/// # Errors
/// - [`VeilError::ImageTooSmall`] if either photograph dimension is zero.
/// - [`VeilError::CapacityExceeded`] if the hash does not fit the left
///   border column (`photo_height × 3` bytes).
pub fn make_hidden(
    photo: &RgbaImage,
    logo: &LogoMask,
    fields: &EmbedFields,
) -> Result<RgbaImage, VeilError> {
    make_hidden_with(&ChaChaSequence, photo, logo, fields)
}

/// [`make_hidden`] with an explicit sequence generator.
///
/// Restoration must use the same generator; mixing generators between the
/// two passes produces garbage pixels (but no panic).
pub fn make_hidden_with<G: SequenceGenerator>(
    generator: &G,
    photo: &RgbaImage,
    logo: &LogoMask,
    fields: &EmbedFields,
) -> Result<RgbaImage, VeilError> {
    let (width, height) = (photo.width(), photo.height());
    if width == 0 || height == 0 {
        return Err(VeilError::ImageTooSmall);
    }

    // 1. Border-pad: interior at offset (1, 1).
    let photo_raster = Raster::from_image(photo);
    let mut hidden = Raster::new(width + 2, height + 2);
    for y in 0..height {
        for x in 0..width {
            hidden.set(x + 1, y + 1, photo_raster.get(x, y));
        }
    }

    // 2. Permute the interior.
    let targets = generator.generate(width, height);
    for (i, &(tx, ty)) in targets.iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        hidden.swap(x + 1, y + 1, tx + 1, ty + 1);
    }
    log::debug!("permuted {} interior pixels", targets.len());

    // 3. Logo-driven inversion + alpha packing.
    let logo = logo.resized(width, height);
    for y in 1..=height {
        for x in 1..=width {
            let word = hidden.get(x, y);
            let bright = is_very_bright(word);
            let inside = logo.covers(x - 1, y - 1);
            let inverted = (!bright && inside) || (bright && !inside);
            let word = if inverted { raster::invert_rgb(word) } else { word };
            let packed = encode_alpha(raster::alpha_of(word), inverted);
            hidden.set(x, y, raster::with_alpha(word, packed));
        }
    }

    // 4. Corner words.
    hidden.set(0, 0, meta::VERSION_WORD);
    hidden.set(width + 1, height + 1, meta::HIDDEN_MARKER);
    meta::write_type_id(&mut hidden, fields.preferred_type);

    // 5. Border fields. Hash first: its failure aborts everything.
    let (rows, cols) = meta::hash_region(&hidden);
    if !hexfield::write_field(&hexfield::encode(&fields.hash), &mut hidden, rows, cols) {
        return Err(VeilError::CapacityExceeded);
    }

    let solution = fields.solution.as_ref().map(Solution::compact).unwrap_or_default();
    let (rows, cols) = meta::solution_region(&hidden);
    if !hexfield::write_field(&hexfield::encode(&solution), &mut hidden, rows, cols) {
        log::warn!("solution does not fit its border column; embedding without it");
        let (rows, cols) = meta::solution_region(&hidden);
        hexfield::write_field("", &mut hidden, rows, cols);
    }

    let author = fields.author.as_ref().map(AuthorRecord::compact).unwrap_or_default();
    let (rows, cols) = meta::author_region(&hidden);
    if !hexfield::write_field(&hexfield::encode(&author), &mut hidden, rows, cols) {
        log::warn!("author record does not fit its border row; embedding without it");
        let (rows, cols) = meta::author_region(&hidden);
        hexfield::write_field("", &mut hidden, rows, cols);
    }

    let origin = fields.origin.as_deref().unwrap_or_default();
    let (rows, cols) = meta::origin_region(&hidden);
    if !hexfield::write_field(&hexfield::encode(origin), &mut hidden, rows, cols) {
        log::warn!("origin does not fit its border row; embedding without it");
        let (rows, cols) = meta::origin_region(&hidden);
        hexfield::write_field("", &mut hidden, rows, cols);
    }

    Ok(hidden.to_image())
}
