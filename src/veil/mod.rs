// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Steganographic obfuscation and restoration pipelines.
//!
//! The codec works on a bordered "hidden raster": the photograph occupies
//! the interior, a one-pixel frame plus the four corners carry metadata.
//!
//! - **Conceal** ([`conceal::make_hidden`]): border-pad the photograph,
//!   permute the interior with a crate-fixed deterministic sequence, apply
//!   logo-driven brightness inversion with the inversion flag and a 2-bit
//!   rounding factor packed into the alpha channel, then write version,
//!   identifier and the hex-encoded string fields into the frame.
//!
//! - **Reveal** ([`reveal::restore_image`]): validate the identifier and
//!   version, undo the alpha/brightness encoding (no logo required),
//!   replay the identical swap sequence in reverse order, crop the frame.
//!
//! All state is transient: each call owns its rasters and nothing is
//! cached between invocations, so independent images can be processed
//! concurrently from separate threads.

pub mod alpha;
pub mod conceal;
pub mod error;
pub mod hexfield;
pub mod logo;
pub mod meta;
pub mod reveal;
pub mod sequence;

pub use error::VeilError;
