// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Deterministic swap-target sequence for the interior permutation.
//!
//! The permutation needs no key material: both ends regenerate the same
//! sequence from a crate-fixed seed and the interior dimensions alone.
//! The concrete generator is an injectable strategy so a future format
//! revision can switch algorithms behind the version word.
//!
//! # Cross-platform portability
//!
//! All range sampling goes through `u32`, never `usize`. `usize` is 32-bit
//! on WASM but 64-bit on native, which makes `rand::Rng::gen_range` consume
//! different amounts of PRNG entropy per step — the forward and reverse
//! passes would desynchronize across platforms.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Fixed 32-byte seed for the permutation PRNG. Never derived from image
/// content or caller input: same dimensions must yield the same sequence
/// on every run, forever.
pub const PERMUTATION_SEED: [u8; 32] = *b"veil-core interior permutation 1";

/// Strategy producing the swap-target sequence for a given interior size.
///
/// Conformance requires only self-consistency: the same `(width, height)`
/// must yield the identical sequence on every call, across processes and
/// platforms, and the forward and reverse passes must use the same
/// implementation.
pub trait SequenceGenerator {
    /// One `(x, y)` target per interior pixel, in the row-major generation
    /// order of the forward pass. Targets are bounded by
    /// `[0, width) × [0, height)`.
    fn generate(&self, width: u32, height: u32) -> Vec<(u32, u32)>;
}

/// Default generator: ChaCha20 stream keyed with [`PERMUTATION_SEED`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaChaSequence;

impl SequenceGenerator for ChaChaSequence {
    fn generate(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        let count = width as usize * height as usize;
        let mut rng = ChaCha20Rng::from_seed(PERMUTATION_SEED);
        let mut targets = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            targets.push((x, y));
        }
        targets
    }
}
