use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tmx_cli::cli::commands::{build, inspect, merge, segment};
use tmx_cli::cli::{Args, Command};
use tmx_cli::output::{self, OutputConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);
    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Command::Build {
            files,
            output,
            source_locale,
            segmentation,
        } => {
            build::run_build(build::BuildOptions {
                files,
                output: output.output,
                dir: output.dir,
                source_locale,
                segmentation,
            })?;
        }
        Command::Merge { files, output } => {
            merge::run_merge(merge::MergeOptions {
                files,
                output: output.output,
                dir: output.dir,
            })?;
        }
        Command::Inspect { file } => {
            inspect::run_inspect(&file)?;
        }
        Command::Segment {
            text,
            locale,
            segmentation,
        } => {
            segment::run_segment(&text, &locale, &segmentation)?;
        }
    }

    Ok(())
}

/// Logs go to stderr. `-v` flags win over `RUST_LOG`; without either only
/// warnings are shown.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
