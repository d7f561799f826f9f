// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Owned 2D grid of 32-bit ARGB pixel words.
//!
//! [`Raster`] is the pixel-domain working type for the whole codec: an
//! explicit `height × width` array with bounds-checked access, converted
//! from and back to [`image::RgbaImage`] at the API boundary. No raw
//! pointer arithmetic, no aliasing — each transform owns its raster for
//! the duration of one call.

use image::RgbaImage;

/// Pack ARGB channels into a 32-bit word: `AARRGGBB`.
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack a 32-bit word into `(a, r, g, b)` channels.
pub const fn channels(word: u32) -> (u8, u8, u8, u8) {
    (
        (word >> 24) as u8,
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
    )
}

/// Alpha channel of an ARGB word.
pub const fn alpha_of(word: u32) -> u8 {
    (word >> 24) as u8
}

/// Replace the alpha channel of an ARGB word, leaving RGB untouched.
pub const fn with_alpha(word: u32, alpha: u8) -> u32 {
    (word & 0x00FF_FFFF) | ((alpha as u32) << 24)
}

/// Invert the RGB channels of an ARGB word (`255 − channel`), alpha untouched.
pub const fn invert_rgb(word: u32) -> u32 {
    (word & 0xFF00_0000) | (!word & 0x00FF_FFFF)
}

/// A mutable `height × width` grid of ARGB words.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Raster {
    /// Create a raster filled with fully transparent black (`0x00000000`).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; width as usize * height as usize],
        }
    }

    /// Extract ARGB words from an RGBA image buffer.
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut raster = Self::new(image.width(), image.height());
        for (x, y, pixel) in image.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            raster.set(x, y, argb(a, r, g, b));
        }
        raster
    }

    /// Render the raster back to an alpha-enabled RGBA image buffer.
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let (a, r, g, b) = channels(self.get(x, y));
            pixel.0 = [r, g, b, a];
        }
        image
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Read the ARGB word at `(x, y)`. Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Write the ARGB word at `(x, y)`. Panics if out of bounds.
    pub fn set(&mut self, x: u32, y: u32, word: u32) {
        let idx = self.index(x, y);
        self.pixels[idx] = word;
    }

    /// Swap the pixels at two coordinates. A swap is its own inverse, which
    /// is what makes the permutation replayable backwards.
    pub fn swap(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        let a = self.index(x1, y1);
        let b = self.index(x2, y2);
        self.pixels.swap(a, b);
    }

    /// Copy a rectangular window into a new raster.
    ///
    /// Used to crop the one-pixel metadata border off a restored image.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        let mut out = Self::new(width, height);
        for oy in 0..height {
            for ox in 0..width {
                out.set(ox, oy, self.get(x + ox, y + oy));
            }
        }
        out
    }
}

impl core::fmt::Debug for Raster {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Raster({}x{})", self.width, self.height)
    }
}
