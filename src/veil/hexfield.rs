// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Hex-encoded string fields packed into runs of raster cells.
//!
//! Each cell carries 3 bytes (6 hex digits, 24 bits) in its RGB channels
//! with alpha forced to `0xFF`. Fields are consumed from the **tail** of
//! the hex string: the first cell of the region receives the last 6
//! digits, and so on. Cells left over once the string is exhausted are
//! cleared to opaque black (`0xFF000000`), so a read-back yields leading
//! zero groups that [`decode`] strips again.
//!
//! A string longer than the region's capacity (`cells × 6` digits) is a
//! hard failure — the caller must treat the field as absent.

use std::ops::Range;

use crate::raster::Raster;
use crate::veil::error::VeilError;

/// Bytes of text stored per raster cell.
pub const BYTES_PER_CELL: usize = 3;

/// Hex digits stored per raster cell.
const DIGITS_PER_CELL: usize = BYTES_PER_CELL * 2;

/// Convert a string to its hexadecimal byte representation.
///
/// Always an even number of digits, two per UTF-8 byte, in big-endian
/// byte order.
pub fn encode(text: &str) -> String {
    hex::encode(text.as_bytes())
}

/// Inverse of [`encode`].
///
/// Leading `00` byte pairs are stripped before decoding: they are the
/// opaque-black padding cells of a field region, not text (text never
/// begins with a NUL byte).
pub fn decode(hex_str: &str) -> Result<String, VeilError> {
    let mut trimmed = hex_str;
    while let Some(rest) = trimmed.strip_prefix("00") {
        trimmed = rest;
    }
    let padded;
    let even = if trimmed.len() % 2 == 1 {
        padded = format!("0{trimmed}");
        padded.as_str()
    } else {
        trimmed
    };
    let bytes = hex::decode(even).map_err(|_| VeilError::InvalidHex)?;
    String::from_utf8(bytes).map_err(|_| VeilError::InvalidHex)
}

/// Number of cells in a rectangular field region.
fn cell_count(rows: &Range<u32>, cols: &Range<u32>) -> usize {
    let rows = rows.end.saturating_sub(rows.start) as usize;
    let cols = cols.end.saturating_sub(cols.start) as usize;
    rows * cols
}

/// Write a hex string into a rectangular region, tail-first.
///
/// Cells are visited in row-major order within the region; each consumes
/// the next 6 digits from the tail of `hex_str`. Once the string is
/// exhausted the remaining cells are cleared to `0xFF000000`.
///
/// Returns `false` (without a full-write guarantee) if the string is
/// longer than the region's capacity or contains anything but hex digits.
/// An empty region with an empty string is a degenerate success.
pub fn write_field(hex_str: &str, raster: &mut Raster, rows: Range<u32>, cols: Range<u32>) -> bool {
    // Non-ASCII input can never be hex, and its multibyte characters must
    // not reach the byte-offset chunk split below.
    if !hex_str.is_ascii() || hex_str.len() > cell_count(&rows, &cols) * DIGITS_PER_CELL {
        return false;
    }
    let mut remaining = hex_str;
    for y in rows {
        for x in cols.clone() {
            if remaining.is_empty() {
                raster.set(x, y, 0xFF00_0000);
                continue;
            }
            let take = remaining.len().min(DIGITS_PER_CELL);
            let split = remaining.len() - take;
            let chunk = &remaining[split..];
            remaining = &remaining[..split];
            let rgb = match u32::from_str_radix(chunk, 16) {
                Ok(v) => v,
                Err(_) => return false,
            };
            raster.set(x, y, 0xFF00_0000 | (rgb & 0x00FF_FFFF));
        }
    }
    true
}

/// Read a rectangular region back into a hex string.
///
/// Each cell's RGB bytes (alpha masked off) are formatted as 6 left-padded
/// hex digits; the groups are concatenated in **reverse** cell order to
/// undo the tail-first write.
pub fn read_field(raster: &Raster, rows: Range<u32>, cols: Range<u32>) -> String {
    let mut groups = Vec::with_capacity(cell_count(&rows, &cols));
    for y in rows {
        for x in cols.clone() {
            groups.push(format!("{:06x}", raster.get(x, y) & 0x00FF_FFFF));
        }
    }
    groups.iter().rev().map(String::as_str).collect()
}
