//! Image discovery.
//!
//! Lists the direct children of a directory (no recursion) and keeps the
//! regular files whose name ends in a known image extension, compared
//! case-insensitively:
//!
//! ```text
//! photos/
//! ├── a.png          # kept
//! ├── b.txt          # ignored
//! ├── c.JPEG         # kept
//! ├── old.gif/       # ignored (directory)
//! └── raw/           # ignored (not descended into)
//!     └── d.png
//! ```
//!
//! Order is whatever the filesystem returns from `read_dir`.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

/// Whether a file name carries one of [`IMAGE_EXTENSIONS`].
///
/// This is a suffix test on the whole name, so a bare `.png` counts.
pub fn is_image_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| {
        lower
            .strip_suffix(*ext)
            .is_some_and(|rest| rest.ends_with('.'))
    })
}

/// Return the image files directly inside `dir`, in enumeration order.
pub fn find_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        // is_file follows symlinks
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .file_name()
            .is_some_and(|name| is_image_file(&name.to_string_lossy()));
        if is_image {
            images.push(path);
        }
    }
    Ok(images)
}
