//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. The batch
//! runner builds them; the [`backend`](super::backend) does the pixel work.
//! Keeping the two apart lets the runner be tested against a mock backend.

use super::operations::Operation;
use std::path::PathBuf;

/// One unit of backend work: decode `source`, apply `operation`, encode to `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    pub source: PathBuf,
    /// Encoder is picked from this path's extension.
    pub output: PathBuf,
    pub operation: Operation,
}
