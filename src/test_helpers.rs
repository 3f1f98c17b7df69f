//! Shared test utilities: synthetic images and fixture directories.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixture_dir(&["a.png", "b.txt", "c.JPEG"]);
//! let found = find_images(tmp.path()).unwrap();
//! assert_eq!(sorted_file_names(&found), vec!["a.png", "c.JPEG"]);
//! ```

use image::{DynamicImage, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =========================================================================
// Synthetic images
// =========================================================================

/// A gradient covering dark and bright values so both solarize branches run.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 200])
    })
}

/// A 2x2 image filled with a single color.
pub fn solid_rgb(px: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb(px)))
}

/// Write a gradient image; the encoder is picked from the path's extension.
pub fn create_test_image(path: &Path, width: u32, height: u32) {
    gradient_rgb(width, height).save(path).unwrap();
}

// =========================================================================
// Fixture directories
// =========================================================================

/// Temp directory populated with the given files.
///
/// Names with an image extension get a real 8x8 image; anything else gets
/// a short text body.
pub fn setup_fixture_dir(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        let path = tmp.path().join(name);
        if crate::scan::is_image_file(name) {
            create_test_image(&path, 8, 8);
        } else {
            std::fs::write(&path, "not an image").unwrap();
        }
    }
    tmp
}

// =========================================================================
// Extractors
// =========================================================================

/// File names of the given paths, in the same order.
pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

/// File names of the given paths, sorted (enumeration order is unspecified).
pub fn sorted_file_names(paths: &[PathBuf]) -> Vec<String> {
    let mut names = file_names(paths);
    names.sort();
    names
}

/// Sorted names of everything directly inside `dir`.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
