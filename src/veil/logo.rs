// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Logo brightness mask for the forward transform.
//!
//! The logo decides which regions of the permuted interior get their RGB
//! channels inverted, so that the finished hidden image shows the logo
//! silhouette instead of the photograph. It is sampled only during
//! concealment; restoration reads the inversion decision back from the
//! alpha channel and never touches the logo.
//!
//! Sampling composites the logo pixel over a white background before
//! taking the RGB mean, so fully transparent regions read as brightness
//! 1.0 — outside the silhouette. A pixel is "covered" when its composited
//! brightness is at or below the configured threshold.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Default brightness threshold separating silhouette from background.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// A brightness mask with a coverage threshold.
#[derive(Clone)]
pub struct LogoMask {
    image: RgbaImage,
    threshold: f32,
}

impl LogoMask {
    /// Wrap a logo image with the default threshold of 0.5.
    pub fn new(image: &RgbaImage) -> Self {
        Self::with_threshold(image, DEFAULT_THRESHOLD)
    }

    /// Wrap a logo image with an explicit threshold in `[0, 1]`.
    pub fn with_threshold(image: &RgbaImage, threshold: f32) -> Self {
        Self {
            image: image.clone(),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Resize the mask to the photograph's dimensions, keeping the threshold.
    pub fn resized(&self, width: u32, height: u32) -> Self {
        if self.image.width() == width && self.image.height() == height {
            return self.clone();
        }
        Self {
            image: imageops::resize(&self.image, width, height, FilterType::Triangle),
            threshold: self.threshold,
        }
    }

    /// Brightness at `(x, y)` in `[0, 1]`, alpha composited over white.
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        let [r, g, b, a] = self.image.get_pixel(x, y).0;
        let lum = (r as u32 + g as u32 + b as u32) / 3;
        let over_white = lum * a as u32 + 255 * (255 - a as u32);
        over_white as f32 / (255.0 * 255.0)
    }

    /// Whether the silhouette covers `(x, y)`.
    pub fn covers(&self, x: u32, y: u32) -> bool {
        self.sample(x, y) <= self.threshold
    }
}
