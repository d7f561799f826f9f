// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Round-trip integration tests for the obfuscation codec.

use image::{Rgba, RgbaImage};
use veil_core::{
    hidden_capacity, is_valid_hidden, make_hidden, restore_image, AuthorRecord, EmbedFields,
    LogoMask, Solution, VeilError,
};

/// Synthetic 10×10 opaque photo with a gradient so pixels are distinct.
fn test_photo() -> RgbaImage {
    let mut photo = RgbaImage::new(10, 10);
    for (x, y, pixel) in photo.enumerate_pixels_mut() {
        pixel.0 = [(x * 25) as u8, (y * 25) as u8, ((x + y) * 12) as u8, 255];
    }
    photo
}

/// Logo: black disc on white, threshold 0.5.
fn test_logo() -> LogoMask {
    let mut logo = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
    for y in 2..8 {
        for x in 2..8 {
            logo.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
    }
    LogoMask::with_threshold(&logo, 0.5)
}

fn full_fields() -> EmbedFields {
    EmbedFields {
        hash: "a3f0".to_string(),
        author: Some(AuthorRecord::new("Ada", "", "")),
        origin: Some("museum".to_string()),
        solution: Some(Solution::new("en", &["cat"])),
        preferred_type: Some(2),
    }
}

#[test]
fn end_to_end_scenario() {
    let hidden = make_hidden(&test_photo(), &test_logo(), &full_fields()).unwrap();

    assert!(is_valid_hidden(&hidden), "fresh output must validate");
    assert_eq!(hidden.width(), 12);
    assert_eq!(hidden.height(), 12);

    let restored = restore_image(&hidden).unwrap();
    assert_eq!(restored.image.width(), 10);
    assert_eq!(restored.image.height(), 10);
    assert!(
        !is_valid_hidden(&restored.image),
        "restoration removes the border and markers"
    );
}

#[test]
fn roundtrip_is_exact_for_opaque_input() {
    let original = test_photo();
    let hidden = make_hidden(&original, &test_logo(), &full_fields()).unwrap();
    let restored = restore_image(&hidden).unwrap().image;
    assert_eq!(restored, original);
}

#[test]
fn metadata_survives_roundtrip() {
    let hidden = make_hidden(&test_photo(), &test_logo(), &full_fields()).unwrap();
    let meta = restore_image(&hidden).unwrap().metadata;

    assert_eq!(meta.hash.as_deref(), Some("a3f0"));
    assert_eq!(meta.origin.as_deref(), Some("museum"));
    assert_eq!(meta.author, Some(AuthorRecord::new("Ada", "", "")));
    assert_eq!(meta.solution, Some(Solution::new("en", &["cat"])));
    assert_eq!(meta.preferred_type, Some(2));
}

#[test]
fn hidden_image_differs_from_photo() {
    // The hidden interior must not simply show the photograph.
    let original = test_photo();
    let hidden = make_hidden(&original, &test_logo(), &full_fields()).unwrap();
    let interior_matches = original
        .enumerate_pixels()
        .filter(|&(x, y, p)| *hidden.get_pixel(x + 1, y + 1) == *p)
        .count();
    assert!(
        interior_matches < 20,
        "{interior_matches} of 100 interior pixels unchanged — not obfuscated"
    );
}

#[test]
fn capacity_overflow_on_hash_fails() {
    // 10 rows of hash capacity = 30 bytes; 31 must fail.
    let cap = hidden_capacity(10, 10);
    assert_eq!(cap.hash_bytes, 30);

    let fields = EmbedFields::with_hash(&"x".repeat(31));
    let result = make_hidden(&test_photo(), &test_logo(), &fields);
    assert_eq!(result.unwrap_err(), VeilError::CapacityExceeded);

    let exact = EmbedFields::with_hash(&"x".repeat(30));
    assert!(make_hidden(&test_photo(), &test_logo(), &exact).is_ok());
}

#[test]
fn oversized_author_is_non_fatal() {
    // Author row capacity = 30 bytes; this record is far larger.
    let mut fields = full_fields();
    fields.author = Some(AuthorRecord::new(
        "Someone With A Very Long Name Indeed",
        "someone@example.org",
        "https://example.org/someone",
    ));

    let hidden = make_hidden(&test_photo(), &test_logo(), &fields).unwrap();
    let restored = restore_image(&hidden).unwrap();

    assert_eq!(restored.metadata.author, None, "author field must be absent");
    assert_eq!(
        restored.metadata.hash.as_deref(),
        Some("a3f0"),
        "other fields unaffected"
    );
    assert_eq!(restored.image, test_photo());
}

#[test]
fn restore_does_not_need_the_logo() {
    // Two different logos, same photo: both hidden images restore to the
    // identical original without any logo input.
    let original = test_photo();
    let inverse_logo = {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        for y in 2..8 {
            for x in 2..8 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        LogoMask::new(&img)
    };

    let hidden_a = make_hidden(&original, &test_logo(), &full_fields()).unwrap();
    let hidden_b = make_hidden(&original, &inverse_logo, &full_fields()).unwrap();
    assert_ne!(hidden_a, hidden_b, "different logos must change the hidden image");

    assert_eq!(restore_image(&hidden_a).unwrap().image, original);
    assert_eq!(restore_image(&hidden_b).unwrap().image, original);
}

#[test]
fn logo_dimensions_need_not_match_photo() {
    // The mask is resized to the photograph internally.
    let logo = LogoMask::new(&RgbaImage::from_pixel(64, 32, Rgba([0, 0, 0, 255])));
    let original = test_photo();
    let hidden = make_hidden(&original, &logo, &full_fields()).unwrap();
    assert_eq!(restore_image(&hidden).unwrap().image, original);
}

#[test]
fn single_pixel_photo_roundtrip() {
    let original = RgbaImage::from_pixel(1, 1, Rgba([12, 34, 56, 255]));
    let logo = LogoMask::new(&RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255])));
    let fields = EmbedFields::with_hash("abc"); // exactly one cell
    let hidden = make_hidden(&original, &logo, &fields).unwrap();
    assert_eq!(hidden.width(), 3);
    assert!(is_valid_hidden(&hidden));
    let restored = restore_image(&hidden).unwrap();
    assert_eq!(restored.image, original);
    assert_eq!(restored.metadata.hash.as_deref(), Some("abc"));
}
