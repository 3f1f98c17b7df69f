//! # ibet
//!
//! Batch image editor: apply one pixel operation to every image in a
//! directory and write the results to an output directory.
//!
//! # Pipeline
//!
//! ```text
//! 1. Resolve   --read-from / --write-to  →  absolute dirs (+ overwrite prompt)
//! 2. Scan      input dir                  →  image files (by extension)
//! 3. Run       each file                  →  decode → operation → encode
//! ```
//!
//! Everything is single-threaded and sequential. One decoded image is held in
//! memory at a time, and the first failing file aborts the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`paths`] | Absolute path resolution, output directory creation, overwrite confirmation |
//! | [`scan`] | Non-recursive image discovery by file extension |
//! | [`imaging`] | The [`Operation`](imaging::Operation) registry and the `image`-backed codec backend |
//! | [`batch`] | Runs an operation over every discovered image, reports progress events |
//! | [`output`] | CLI output formatting |
//!
//! # Operations
//!
//! | Name | Effect per color channel |
//! |------|--------------------------|
//! | `INVERT` | `max - v` |
//! | `SOLARIZE` | `v` below mid-grey (128 of 255), `max - v` otherwise |
//!
//! Alpha is never touched. Output files keep their input's name and
//! container format.

pub mod batch;
pub mod imaging;
pub mod output;
pub mod paths;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
