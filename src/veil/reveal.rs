// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Restoration pipeline: exact inverse of the forward transform.
//!
//! No logo and no key material are needed. The inversion decision and the
//! alpha rounding factor are read back out of each interior pixel's alpha
//! channel, and the permutation is undone by regenerating the identical
//! swap sequence and replaying it in reverse order (each swap is its own
//! inverse).
//!
//! Metadata is extracted from the still-bordered raster before the crop
//! and returned alongside the restored photograph.

use image::RgbaImage;

use crate::raster::{self, Raster};
use crate::veil::alpha::decode_alpha;
use crate::veil::error::VeilError;
use crate::veil::meta::{self, HiddenMetadata};
use crate::veil::sequence::{ChaChaSequence, SequenceGenerator};

/// A restored photograph together with the metadata that was embedded
/// next to it.
pub struct Restored {
    pub image: RgbaImage,
    pub metadata: HiddenMetadata,
}

impl core::fmt::Debug for Restored {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Restored({}x{}, {:?})",
            self.image.width(),
            self.image.height(),
            self.metadata
        )
    }
}

/// Whether an image is a hidden image produced by this codec.
///
/// True iff both dimensions are at least 3 and the bottom-right corner
/// pixel equals the identifier marker exactly.
pub fn is_valid_hidden(image: &RgbaImage) -> bool {
    if image.width() < 3 || image.height() < 3 {
        return false;
    }
    let [r, g, b, a] = image.get_pixel(image.width() - 1, image.height() - 1).0;
    raster::argb(a, r, g, b) == meta::HIDDEN_MARKER
}

/// Restore the original photograph and metadata from a hidden image,
/// using the default deterministic sequence.
///
/// # Errors
/// - [`VeilError::InvalidIdentifier`] if the image is not a hidden image.
/// - [`VeilError::UnsupportedVersion`] if the version word is not one this
///   implementation supports.
/// - [`VeilError::NotRestorable`] if a consistency check fails after
///   validation.
pub fn restore_image(hidden: &RgbaImage) -> Result<Restored, VeilError> {
    restore_image_with(&ChaChaSequence, hidden)
}

/// [`restore_image`] with an explicit sequence generator. Must match the
/// generator used by the forward pass.
pub fn restore_image_with<G: SequenceGenerator>(
    generator: &G,
    hidden: &RgbaImage,
) -> Result<Restored, VeilError> {
    if !is_valid_hidden(hidden) {
        return Err(VeilError::InvalidIdentifier);
    }

    let mut bordered = Raster::from_image(hidden);

    // Version gate: the extension point for future format revisions. A
    // new version selects its algorithm variant here.
    let version = bordered.get(0, 0);
    if !meta::SUPPORTED_VERSIONS.contains(&version) {
        return Err(VeilError::UnsupportedVersion);
    }

    // Extract metadata while the border is still present.
    let metadata = HiddenMetadata::read_from(&bordered);

    let width = bordered.width() - 2;
    let height = bordered.height() - 2;

    // 1. Undo the brightness/alpha encoding per interior pixel.
    for y in 1..=height {
        for x in 1..=width {
            let word = bordered.get(x, y);
            let (restored_alpha, inverted) = decode_alpha(raster::alpha_of(word));
            let word = if inverted { raster::invert_rgb(word) } else { word };
            bordered.set(x, y, raster::with_alpha(word, restored_alpha));
        }
    }

    // 2. Undo the permutation: identical sequence, swaps replayed in
    //    reverse generation order.
    let targets = generator.generate(width, height);
    if targets.len() != width as usize * height as usize {
        return Err(VeilError::NotRestorable);
    }
    for (i, &(tx, ty)) in targets.iter().enumerate().rev() {
        if tx >= width || ty >= height {
            return Err(VeilError::NotRestorable);
        }
        let x = i as u32 % width;
        let y = i as u32 / width;
        bordered.swap(x + 1, y + 1, tx + 1, ty + 1);
    }
    log::debug!("unpermuted {} interior pixels", targets.len());

    // 3. Crop the metadata border off.
    let image = bordered.crop(1, 1, width, height).to_image();
    Ok(Restored { image, metadata })
}
