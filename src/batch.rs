//! The batch runner.
//!
//! Applies one [`Operation`] to every image found in the input directory and
//! writes each result into the output directory under its original file
//! name. Files are handled one at a time in directory enumeration order.
//!
//! ## Failure model
//!
//! Fail fast: the first file that cannot be decoded or encoded aborts the
//! run and the error is returned as is. Files already written stay on disk.
//!
//! ## Progress
//!
//! The runner never prints. It reports [`BatchEvent`]s through a callback and
//! the caller decides how to render them (see [`crate::output`]).

use crate::imaging::{BackendError, ImageBackend, Operation, RustBackend, TransformParams};
use crate::paths::ResolvedDirs;
use crate::scan::{self, ScanError};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Found no images in {}", .0.display())]
    NoImages(PathBuf),
}

/// Progress reported while a batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    Started {
        input_dir: PathBuf,
        image_count: usize,
    },
    ImageWritten {
        /// 1-based position in the batch.
        index: usize,
        source: PathBuf,
        output: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub images: usize,
    pub elapsed: Duration,
}

pub fn run(
    operation: Operation,
    dirs: &ResolvedDirs,
    on_event: impl FnMut(&BatchEvent),
) -> Result<BatchSummary, BatchError> {
    run_with_backend(&RustBackend::new(), operation, dirs, on_event)
}

/// Run a batch using a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    operation: Operation,
    dirs: &ResolvedDirs,
    mut on_event: impl FnMut(&BatchEvent),
) -> Result<BatchSummary, BatchError> {
    let images = scan::find_images(&dirs.input)?;
    if images.is_empty() {
        return Err(BatchError::NoImages(dirs.input.clone()));
    }

    let start = Instant::now();
    on_event(&BatchEvent::Started {
        input_dir: dirs.input.clone(),
        image_count: images.len(),
    });

    let mut written = 0;
    for source in images {
        let Some(file_name) = source.file_name() else {
            continue;
        };
        let params = TransformParams {
            output: dirs.output.join(file_name),
            source,
            operation,
        };
        backend.transform(&params)?;

        written += 1;
        on_event(&BatchEvent::ImageWritten {
            index: written,
            source: params.source,
            output: params.output,
        });
    }

    Ok(BatchSummary {
        images: written,
        elapsed: start.elapsed(),
    })
}
