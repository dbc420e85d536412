use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use thumbgen::config::{DerivativeSpec, RunConfig};
use thumbgen::imaging::RustBackend;
use thumbgen::{output, process};

#[derive(Parser)]
#[command(name = "thumbgen")]
#[command(about = "Batch-generate small/large web derivatives from a folder of photographs")]
#[command(long_about = "\
Batch-generate small/large web derivatives from a folder of photographs

Reads source photos from --src, writes downscaled copies to --small (default
max 1200px longest side) and --large (default max 2400px). Output names match
source names so a gallery can map small → large automatically; HEIC/TIFF and
other non-web formats are converted to JPG. Files whose derivatives are
already newer than the source are skipped, so re-runs only touch what
changed.

    thumbgen
    thumbgen --src photos --small site/small --large site/large
    thumbgen --max-small 800 --max-large 1600

Exits nonzero when any file failed to convert; failed files never stop the
rest of the batch.")]
#[command(version)]
struct Cli {
    /// Source directory of photographs (not recursed into)
    #[arg(long, default_value = "images")]
    src: PathBuf,

    /// Output directory for small derivatives
    #[arg(long, default_value = "images/small")]
    small: PathBuf,

    /// Output directory for large derivatives
    #[arg(long, default_value = "images/large")]
    large: PathBuf,

    /// Maximum longest-edge size of small derivatives, in pixels
    #[arg(long, default_value_t = 1200)]
    max_small: u32,

    /// Maximum longest-edge size of large derivatives, in pixels
    #[arg(long, default_value_t = 2400)]
    max_large: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = RunConfig {
        source: cli.src,
        small: DerivativeSpec::new(cli.small, cli.max_small),
        large: DerivativeSpec::new(cli.large, cli.max_large),
    };

    let backend = RustBackend::new();
    match process::run(&backend, &config, output::print_outcome) {
        Ok(report) => {
            output::print_summary(&report.summary);
            if report.summary.error > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("thumbgen: {e}");
            ExitCode::FAILURE
        }
    }
}
