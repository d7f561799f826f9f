// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Error types for the obfuscation codec.
//!
//! [`VeilError`] covers the fatal failure modes of both pipelines. Optional
//! metadata fields (author, origin, solution) never produce an error: a
//! field that cannot be written or parsed is logged and left empty.

use core::fmt;

/// Errors that can occur while concealing or restoring an image.
#[derive(Debug, PartialEq, Eq)]
pub enum VeilError {
    /// The image is not a hidden image: the identifier marker in the
    /// bottom-right corner is missing or wrong.
    InvalidIdentifier,
    /// The image carries the identifier marker but was produced by a
    /// format revision this implementation does not support.
    UnsupportedVersion,
    /// The image passed validation but failed an internal consistency
    /// check during restoration; treated as corrupt.
    NotRestorable,
    /// A mandatory field (the hash) does not fit its reserved border
    /// region. Aborts the forward transform entirely.
    CapacityExceeded,
    /// The input image has a zero dimension.
    ImageTooSmall,
    /// A hex string could not be decoded back to text.
    InvalidHex,
}

impl fmt::Display for VeilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier => write!(f, "not a hidden image (identifier marker missing)"),
            Self::UnsupportedVersion => write!(f, "hidden image uses an unsupported format version"),
            Self::NotRestorable => write!(f, "hidden image failed consistency checks (corrupt)"),
            Self::CapacityExceeded => write!(f, "mandatory field exceeds border capacity"),
            Self::ImageTooSmall => write!(f, "image has a zero dimension"),
            Self::InvalidHex => write!(f, "field is not valid hex-encoded text"),
        }
    }
}

impl std::error::Error for VeilError {}
