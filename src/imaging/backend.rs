//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between the batch runner and the
//! pixel work: one call decodes a file, applies an operation and writes the
//! result.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::TransformParams;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

pub trait ImageBackend {
    /// Decode `params.source`, apply `params.operation`, save to `params.output`.
    fn transform(&self, params: &TransformParams) -> Result<(), BackendError>;
}
