use clap::Parser;
use ibet::batch::{self, BatchError};
use ibet::imaging::Operation;
use ibet::output;
use ibet::paths::{self, PathError};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "ibet")]
#[command(about = "Batch edit images.")]
#[command(long_about = "\
Batch edit images.

Applies one operation to every image directly inside --read-from and writes
each result to --write-to under the same file name and format.

Operations:

  INVERT     every color channel v becomes max - v
  SOLARIZE   channels at or above mid-grey (128 of 255) are inverted,
             darker ones are left alone

Recognized files (case-insensitive): .png .jpg .jpeg .tiff .bmp .gif
Subdirectories are not searched.

When --write-to is omitted or points at the input directory, the originals
are overwritten, so you are asked to confirm first.")]
#[command(version = version_string())]
struct Cli {
    /// Operation to perform
    operation: Operation,

    /// Directory containing images to process
    #[arg(long, default_value = ".")]
    read_from: PathBuf,

    /// Directory to save processed images to [default: the --read-from directory]
    #[arg(long)]
    write_to: Option<PathBuf>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let dirs = match paths::resolve_dirs(
        &cli.read_from,
        cli.write_to.as_deref(),
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    ) {
        Ok(dirs) => dirs,
        Err(PathError::OverwriteDeclined) => return Ok(ExitCode::FAILURE),
        Err(e) => return Err(e.into()),
    };

    match batch::run(cli.operation, &dirs, output::print_batch_event) {
        Ok(summary) => {
            output::print_summary(&summary);
            Ok(ExitCode::SUCCESS)
        }
        Err(BatchError::NoImages(dir)) => {
            output::print_no_images(&dir);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
