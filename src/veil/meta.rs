// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Metadata layout and collaborator records for the hidden raster.
//!
//! The one-pixel frame around the permuted interior carries all metadata:
//!
//! ```text
//! version ─┐                              ┌─ preferred type id
//!          v   author (top row) ──────>   v
//!        ┌───┬───────────────────────────┬───┐
//!        │ V │ a  a  a  a  a  a  a  a  a │ T │
//!        ├───┼───────────────────────────┼───┤
//!   hash │ h │                           │ s │ tongue + solution
//! (left  │ h │     permuted interior     │ s │ words (right
//! column)│ h │                           │ s │ column)
//!        ├───┼───────────────────────────┼───┤
//!        │   │ o  o  o  o  o  o  o  o  o │ M │
//!        └───┴───────────────────────────┴───┘
//!              origin (bottom row) ──>     ^
//!                                          └─ identifier marker
//! ```
//!
//! String fields are hex-encoded and packed 3 bytes per cell by
//! [`crate::veil::hexfield`]. The hash is mandatory; author, origin and
//! solution are best-effort.

use std::ops::Range;

use crate::raster::Raster;
use crate::veil::hexfield;

/// Format version word, written to the top-left corner. The high byte is
/// fixed to `0xFF` so the corner stays opaque.
pub const VERSION_WORD: u32 = 0xFF00_0001;

/// Versions this implementation can restore. The designated extension
/// point: a future revision switches on the version word here to pick an
/// algorithm variant.
pub const SUPPORTED_VERSIONS: &[u32] = &[VERSION_WORD];

/// Identifier marker, written to the bottom-right corner. Its presence is
/// the sole validity signal — recognition, not security.
pub const HIDDEN_MARKER: u32 = 0xFF57_E6A0;

/// Sentinel stored in the preferred-type corner when no type id is set.
pub const NO_TYPE_ID: u32 = 0x00FF_FFFF;

/// Field separator for the compact record serializations.
const SEP: char = ';';

// --- Border field regions (hidden-raster coordinates, `(rows, cols)`) ---

/// Left border column: the hash string.
pub(crate) fn hash_region(raster: &Raster) -> (Range<u32>, Range<u32>) {
    (1..raster.height() - 1, 0..1)
}

/// Right border column: tongue code + solution words.
pub(crate) fn solution_region(raster: &Raster) -> (Range<u32>, Range<u32>) {
    (1..raster.height() - 1, raster.width() - 1..raster.width())
}

/// Top border row: the author record.
pub(crate) fn author_region(raster: &Raster) -> (Range<u32>, Range<u32>) {
    (0..1, 1..raster.width() - 1)
}

/// Bottom border row: the origin string.
pub(crate) fn origin_region(raster: &Raster) -> (Range<u32>, Range<u32>) {
    (raster.height() - 1..raster.height(), 1..raster.width() - 1)
}

/// Write the preferred-type corner (top-right), alpha forced to `0xFF`.
///
/// Ids are 24-bit: the high byte is truncated by the mask, and writing
/// [`NO_TYPE_ID`] itself is indistinguishable from `None`.
pub(crate) fn write_type_id(raster: &mut Raster, id: Option<u32>) {
    let id = id.unwrap_or(NO_TYPE_ID);
    raster.set(raster.width() - 1, 0, 0xFF00_0000 | (id & 0x00FF_FFFF));
}

/// Read the preferred-type corner; the sentinel maps back to `None`.
///
/// A corner whose alpha is not `0xFF` was never written by the forward
/// transform and reads as `None`.
pub(crate) fn read_type_id(raster: &Raster) -> Option<u32> {
    let word = raster.get(raster.width() - 1, 0);
    if word >> 24 != 0xFF {
        return None;
    }
    let id = word & 0x00FF_FFFF;
    (id != NO_TYPE_ID).then_some(id)
}

/// Byte capacity of each variable-length field for a given photograph size.
///
/// Lets callers pre-validate before invoking the forward transform,
/// instead of discovering a [`crate::VeilError::CapacityExceeded`] late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCapacity {
    /// Left column: `photo_height × 3` bytes.
    pub hash_bytes: usize,
    /// Right column: `photo_height × 3` bytes.
    pub solution_bytes: usize,
    /// Top row: `photo_width × 3` bytes.
    pub author_bytes: usize,
    /// Bottom row: `photo_width × 3` bytes.
    pub origin_bytes: usize,
}

/// Capacity of the border fields for a `photo_width × photo_height` input.
pub fn hidden_capacity(photo_width: u32, photo_height: u32) -> FieldCapacity {
    let column = photo_height as usize * hexfield::BYTES_PER_CELL;
    let row = photo_width as usize * hexfield::BYTES_PER_CELL;
    FieldCapacity {
        hash_bytes: column,
        solution_bytes: column,
        author_bytes: row,
        origin_bytes: row,
    }
}

/// Strip the separator out of a user-supplied field so the compact
/// serialization stays unambiguous.
fn sanitize(field: &str) -> String {
    field.replace(SEP, ",")
}

/// Author record embedded in the top border row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorRecord {
    pub name: String,
    pub contact: String,
    pub homepage: String,
}

impl AuthorRecord {
    pub fn new(name: &str, contact: &str, homepage: &str) -> Self {
        Self {
            name: name.to_string(),
            contact: contact.to_string(),
            homepage: homepage.to_string(),
        }
    }

    /// Canonical delimiter-safe serialization: `name;contact;homepage`.
    pub fn compact(&self) -> String {
        format!(
            "{}{SEP}{}{SEP}{}",
            sanitize(&self.name),
            sanitize(&self.contact),
            sanitize(&self.homepage)
        )
    }

    /// Inverse of [`compact`](Self::compact). `None` if the field count is
    /// wrong.
    pub fn parse(compact: &str) -> Option<Self> {
        let mut parts = compact.split(SEP);
        let record = Self {
            name: parts.next()?.to_string(),
            contact: parts.next()?.to_string(),
            homepage: parts.next()?.to_string(),
        };
        parts.next().is_none().then_some(record)
    }
}

/// Solution record embedded in the right border column: the tongue
/// (language code) plus the solution words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub tongue: String,
    pub words: Vec<String>,
}

impl Solution {
    pub fn new(tongue: &str, words: &[&str]) -> Self {
        Self {
            tongue: tongue.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Canonical serialization: `tongue;word1;word2;…`.
    ///
    /// Empty words carry no information and are skipped, matching
    /// [`parse`](Self::parse) so the two stay exact inverses.
    pub fn compact(&self) -> String {
        let mut out = sanitize(&self.tongue);
        for word in &self.words {
            if word.is_empty() {
                continue;
            }
            out.push(SEP);
            out.push_str(&sanitize(word));
        }
        out
    }

    /// Inverse of [`compact`](Self::compact). Empty words are dropped;
    /// `None` only for an empty string.
    pub fn parse(compact: &str) -> Option<Self> {
        let mut parts = compact.split(SEP);
        let tongue = parts.next()?.to_string();
        if tongue.is_empty() {
            return None;
        }
        Some(Self {
            tongue,
            words: parts.filter(|w| !w.is_empty()).map(str::to_string).collect(),
        })
    }
}

/// Explicit riddle-type registry: small numeric ids to type names.
///
/// Constructed once by the caller and passed by reference wherever id
/// resolution is needed — no global mutable maps.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<(u32, String)>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an id → name mapping. Later registrations win on lookup.
    pub fn register(&mut self, id: u32, name: &str) {
        self.entries.push((id, name.to_string()));
    }

    /// Resolve a numeric id to its type name.
    pub fn resolve(&self, id: u32) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(i, _)| *i == id)
            .map(|(_, n)| n.as_str())
    }

    /// Reverse lookup: type name to numeric id.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .rev()
            .find(|(_, n)| n == name)
            .map(|(i, _)| *i)
    }
}

/// All metadata extracted from a hidden raster.
///
/// Every field is optional on read: malformed optional fields are logged
/// and left `None`, and even the hash can be absent in a corrupted image
/// (restoration itself does not depend on it).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HiddenMetadata {
    pub hash: Option<String>,
    pub author: Option<AuthorRecord>,
    pub origin: Option<String>,
    pub solution: Option<Solution>,
    pub preferred_type: Option<u32>,
}

impl HiddenMetadata {
    /// Read all embedded fields from a still-bordered hidden raster.
    ///
    /// The raster must be at least 3×3 (caller-validated). Field decode
    /// failures are non-fatal.
    pub fn read_from(raster: &Raster) -> Self {
        let hash = read_text(raster, hash_region(raster), "hash");
        let origin = read_text(raster, origin_region(raster), "origin");
        let author = read_text(raster, author_region(raster), "author")
            .as_deref()
            .and_then(AuthorRecord::parse);
        let solution = read_text(raster, solution_region(raster), "solution")
            .as_deref()
            .and_then(Solution::parse);
        Self {
            hash: hash.filter(|h| !h.is_empty()),
            author,
            origin: origin.filter(|o| !o.is_empty()),
            solution,
            preferred_type: read_type_id(raster),
        }
    }
}

/// Read and decode one border field, logging instead of failing.
fn read_text(raster: &Raster, region: (Range<u32>, Range<u32>), field: &str) -> Option<String> {
    let hex = hexfield::read_field(raster, region.0, region.1);
    match hexfield::decode(&hex) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("ignoring unreadable {field} field: {e}");
            None
        }
    }
}

/// Fallback riddle origin from an origin-prefixed, underscore-separated
/// file name, for when the embedded origin field cannot be parsed.
///
/// `"museum_20260815_0042.png"` yields `"museum"`.
pub fn origin_from_file_name(file_name: &str) -> Option<String> {
    let prefix = file_name.split('_').next()?;
    (!prefix.is_empty() && prefix.len() < file_name.len()).then(|| prefix.to_string())
}
