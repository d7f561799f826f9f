// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! # veil-core
//!
//! Pure-Rust steganographic obfuscation codec. Hides a full photograph
//! inside a second, visually distinct "hidden" image that shows only a
//! supplied logo silhouette to casual inspection, and later recovers the
//! photograph and its embedded metadata from the hidden image alone.
//!
//! The codec is deliberately keyless: the pixel permutation is driven by a
//! crate-fixed deterministic sequence, and the logo used for the visual
//! deception is **not** needed for recovery. This is obfuscation, not
//! cryptography — there is no resistance to a motivated attacker.
//!
//! Restoration is near-lossless: RGB channels round-trip exactly, the alpha
//! channel is quantized to carry the codec's own signals (see
//! [`veil::alpha`]). Callers must not expect a bit-identical image or a
//! matching cryptographic hash of the pixel data.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use veil_core::{make_hidden, restore_image, EmbedFields, LogoMask};
//!
//! let logo = LogoMask::new(&logo_image);
//! let fields = EmbedFields::with_hash("a3f09c12");
//! let hidden = make_hidden(&photo, &logo, &fields).unwrap();
//! let restored = restore_image(&hidden).unwrap();
//! assert_eq!(restored.metadata.hash.as_deref(), Some("a3f09c12"));
//! ```

pub mod raster;
pub mod veil;

pub use raster::Raster;
pub use veil::error::VeilError;
pub use veil::conceal::{make_hidden, make_hidden_with, EmbedFields};
pub use veil::logo::LogoMask;
pub use veil::meta::{
    hidden_capacity, origin_from_file_name, AuthorRecord, FieldCapacity, HiddenMetadata,
    Solution, TypeRegistry, HIDDEN_MARKER, NO_TYPE_ID, VERSION_WORD,
};
pub use veil::reveal::{is_valid_hidden, restore_image, restore_image_with, Restored};
pub use veil::sequence::{ChaChaSequence, SequenceGenerator};
