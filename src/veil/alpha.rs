// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Alpha-channel bit packing for interior pixels.
//!
//! The original alpha of an interior pixel is not preserved. The channel
//! is repurposed to carry two signals while staying visually near-opaque
//! (every encoded value is ≥ 192):
//!
//! 1. **Baseline quantization**: alpha is forced to `≡ 7 (mod 8)`; 255 is
//!    already congruent and stays untouched (the "no transformation"
//!    marker used by the border cells).
//! 2. **Inversion flag**: a pixel whose RGB channels were inverted during
//!    the brightness step records the fact by subtracting 4 (clearing
//!    bit 2). Restoration tests `alpha & 4 == 0` and adds the 4 back.
//! 3. **Rounding factor**: `factor = 3 − alpha/64` (integer division,
//!    factor ∈ {0,1,2,3}); alpha is adjusted by `+ factor*64 − factor`,
//!    which lifts the value near opaque while keeping the factor
//!    recoverable as `3 − alpha mod 4`.
//!
//! All arithmetic is integer-exact. Do not substitute floating-point
//! "equivalents": the invertibility proof below depends on the exact
//! residues, and float rounding at channel boundaries silently breaks the
//! round trip.
//!
//! Invertibility: after quantization `q ≡ 7 (mod 8)`, so `q mod 4 = 3`
//! and `(q − 4·inv) mod 8` is 7 or 3. The factor adjustment adds
//! `63·factor ≡ −factor (mod 8)` with `factor ≤ 3`, so bit 2 still
//! discriminates the inversion flag and `alpha mod 4 = 3 − factor`
//! exactly. The exhaustive test below checks every `(alpha, inverted)`
//! combination.

/// Encode an interior pixel's alpha.
///
/// Returns the packed alpha carrying the quantized original value, the
/// inversion flag, and the rounding factor.
pub fn encode_alpha(alpha: u8, inverted: bool) -> u8 {
    let mut a = (alpha as i32) | 7;
    if inverted {
        a -= 4;
    }
    let factor = 3 - a / 64;
    a += factor * 64 - factor;
    a as u8
}

/// Decode a packed alpha.
///
/// Returns `(alpha, inverted)` where `alpha` is the quantized
/// pre-encoding value (`original | 7`) and `inverted` tells the caller to
/// re-invert the RGB channels.
pub fn decode_alpha(alpha: u8) -> (u8, bool) {
    let mut a = alpha as i32;
    let factor = 3 - a % 4;
    let inverted = a & 4 == 0;
    if inverted {
        a += 4;
    }
    a -= factor * 64 - factor;
    (a as u8, inverted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_invertibility() {
        for alpha in 0..=255u8 {
            for inverted in [false, true] {
                let encoded = encode_alpha(alpha, inverted);
                let (restored, flag) = decode_alpha(encoded);
                assert_eq!(flag, inverted, "flag lost for alpha={alpha} inv={inverted}");
                assert_eq!(
                    restored,
                    alpha | 7,
                    "alpha mismatch for alpha={alpha} inv={inverted} (encoded={encoded})"
                );
            }
        }
    }

    #[test]
    fn encoded_values_near_opaque() {
        for alpha in 0..=255u8 {
            for inverted in [false, true] {
                let encoded = encode_alpha(alpha, inverted);
                assert!(
                    encoded >= 192,
                    "alpha={alpha} inv={inverted} encoded to {encoded}, visibly translucent"
                );
            }
        }
    }

    #[test]
    fn opaque_uninverted_stays_opaque() {
        // 255 is the reserved "no transformation" marker: quantization and
        // factor leave it untouched when the pixel was not inverted.
        assert_eq!(encode_alpha(255, false), 255);
        assert_eq!(decode_alpha(255), (255, false));
    }

    #[test]
    fn opaque_inverted_roundtrip() {
        let encoded = encode_alpha(255, true);
        assert_eq!(encoded, 251);
        assert_eq!(decode_alpha(encoded), (255, true));
    }

    #[test]
    fn factor_covers_all_quadrants() {
        // One representative per 64-wide quadrant, factor 3 down to 0.
        assert_eq!(encode_alpha(0, false), 7 + 189);
        assert_eq!(encode_alpha(64, false), 71 + 126);
        assert_eq!(encode_alpha(128, false), 135 + 63);
        assert_eq!(encode_alpha(192, false), 199);
    }
}
