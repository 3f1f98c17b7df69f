//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, BMP, GIF) | `image::ImageReader` with content sniffing |
//! | Transform | [`Operation::apply`](super::Operation::apply) |
//! | Encode | `DynamicImage::save`, format inferred from the output extension |
//!
//! Encoders run with the `image` crate defaults; no format conversion is done
//! and no compression parameters are exposed.

use super::backend::{BackendError, ImageBackend};
use super::params::TransformParams;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// The extension picks the initial format guess, but the file's magic bytes
/// win when they disagree.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| BackendError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    img.save(path).map_err(|source| BackendError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

impl ImageBackend for RustBackend {
    fn transform(&self, params: &TransformParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let processed = params.operation.apply(img);
        save_image(&processed, &params.output)
    }
}
