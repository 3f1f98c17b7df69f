//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Running on directory "/home/me/photos" (2 images)
//!     001 a.png → /home/me/out/a.png
//!     002 c.JPEG → /home/me/out/c.JPEG
//! Finished, total processing time: 0.041237 seconds (2 images)
//! ```
//!
//! When nothing matches:
//!
//! ```text
//! Found no images in /home/me/photos
//! ```
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `String` or `Vec<String>`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::batch::{BatchEvent, BatchSummary};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 image`, `2 images`.
fn image_count(n: usize) -> String {
    if n == 1 {
        "1 image".to_string()
    } else {
        format!("{} images", n)
    }
}

pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::Started {
            input_dir,
            image_count: count,
        } => {
            vec![format!(
                "Running on directory \"{}\" ({})",
                input_dir.display(),
                image_count(*count)
            )]
        }
        BatchEvent::ImageWritten {
            index,
            source,
            output,
        } => {
            let filename = source
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.display().to_string());
            vec![format!(
                "{}{} {} → {}",
                indent(1),
                format_index(*index),
                filename,
                output.display()
            )]
        }
    }
}

/// Elapsed seconds with microsecond precision.
pub fn format_summary(summary: &BatchSummary) -> String {
    format!(
        "Finished, total processing time: {:.6} seconds ({})",
        summary.elapsed.as_secs_f64(),
        image_count(summary.images)
    )
}

pub fn format_no_images(dir: &Path) -> String {
    format!("Found no images in {}", dir.display())
}

pub fn print_batch_event(event: &BatchEvent) {
    for line in format_batch_event(event) {
        println!("{}", line);
    }
}

pub fn print_summary(summary: &BatchSummary) {
    println!("{}", format_summary(summary));
}

pub fn print_no_images(dir: &Path) {
    println!("{}", format_no_images(dir));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn started_names_the_directory() {
        let lines = format_batch_event(&BatchEvent::Started {
            input_dir: PathBuf::from("/data/photos"),
            image_count: 3,
        });
        assert_eq!(lines, vec!["Running on directory \"/data/photos\" (3 images)"]);
    }

    #[test]
    fn started_single_image() {
        let lines = format_batch_event(&BatchEvent::Started {
            input_dir: PathBuf::from("/data/photos"),
            image_count: 1,
        });
        assert_eq!(lines, vec!["Running on directory \"/data/photos\" (1 image)"]);
    }

    #[test]
    fn image_written_shows_index_and_filename() {
        let lines = format_batch_event(&BatchEvent::ImageWritten {
            index: 2,
            source: PathBuf::from("/data/photos/c.JPEG"),
            output: PathBuf::from("/data/out/c.JPEG"),
        });
        assert_eq!(lines, vec!["    002 c.JPEG → /data/out/c.JPEG"]);
    }

    #[test]
    fn summary_has_six_decimals() {
        let line = format_summary(&BatchSummary {
            images: 2,
            elapsed: Duration::from_micros(1_234_567),
        });
        assert_eq!(
            line,
            "Finished, total processing time: 1.234567 seconds (2 images)"
        );
    }

    #[test]
    fn summary_zero_elapsed() {
        let line = format_summary(&BatchSummary {
            images: 1,
            elapsed: Duration::ZERO,
        });
        assert_eq!(
            line,
            "Finished, total processing time: 0.000000 seconds (1 image)"
        );
    }

    #[test]
    fn no_images_names_the_directory() {
        assert_eq!(
            format_no_images(Path::new("/data/photos")),
            "Found no images in /data/photos"
        );
    }
}
