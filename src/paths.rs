//! Input/output directory resolution and the overwrite guard.
//!
//! Both directories are made absolute against the current working
//! directory and normalized lexically (`.` and `..` collapsed without
//! touching the filesystem), so `photos` and `./photos/../photos` compare
//! equal. The output directory defaults to the input directory and is
//! created if missing, one level only: a missing parent is an error.
//!
//! When input and output are the same directory the user has to confirm
//! before originals get overwritten.

use std::io::{self, BufRead, Write};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Overwrite declined")]
    OverwriteDeclined,
}

pub const OVERWRITE_QUESTION: &str =
    "Input and output directories are the same. Images will be overwritten. Are you sure?";

/// Absolute input and output directories for a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirs {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ResolvedDirs {
    pub fn same_dir(&self) -> bool {
        self.input == self.output
    }
}

/// Make `path` absolute and collapse `.`/`..` components.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    Ok(normalize(&std::path::absolute(path)?))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // pop() is a no-op at the root, matching `/..` == `/`
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Resolve both directories without touching the filesystem.
pub fn resolve(read_from: &Path, write_to: Option<&Path>) -> io::Result<ResolvedDirs> {
    let input = absolutize(read_from)?;
    let output = match write_to {
        Some(dir) => absolutize(dir)?,
        None => input.clone(),
    };
    Ok(ResolvedDirs { input, output })
}

/// Create the output directory if it is not already a directory.
///
/// Single-level: fails when the parent is missing or a file sits at `dir`.
pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if !dir.is_dir() {
        std::fs::create_dir(dir)?;
    }
    Ok(())
}

/// Ask a yes/no question, defaulting to no.
///
/// The reply is trimmed and lowercased; only a reply starting with `y`
/// counts as yes. End of input is an empty reply.
pub fn confirm(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    write!(output, "{question} [y/N]: ")?;
    output.flush()?;

    let mut reply = String::new();
    input.read_line(&mut reply)?;
    Ok(reply.trim().to_lowercase().starts_with('y'))
}

/// Full resolution step: absolutize, create the output directory, then
/// guard against overwriting the inputs.
///
/// The prompt is only shown when both directories are the same.
pub fn resolve_dirs(
    read_from: &Path,
    write_to: Option<&Path>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<ResolvedDirs, PathError> {
    let dirs = resolve(read_from, write_to)?;
    ensure_output_dir(&dirs.output)?;

    if dirs.same_dir() && !confirm(OVERWRITE_QUESTION, input, output)? {
        return Err(PathError::OverwriteDeclined);
    }
    Ok(dirs)
}
