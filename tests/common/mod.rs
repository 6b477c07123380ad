#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Opaque checkerboard with cells alternating between two grays.
pub fn checkerboard_rgb(width: u32, height: u32, cell: u32) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    RgbImage::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgb([32, 32, 32])
        } else {
            Rgb([220, 220, 220])
        }
    })
}

/// RGBA image whose left half is opaque blue and right half fully transparent.
pub fn half_transparent(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 255, 255])
        } else {
            Rgba([90, 90, 90, 0])
        }
    })
}

/// Write a checkerboard to `dir/name` in the format implied by its extension.
pub fn write_checkerboard(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    checkerboard_rgb(width, height, 16)
        .save(&path)
        .expect("failed to write synthetic image");
    path
}
