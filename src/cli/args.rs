use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::locale::DEFAULT_SOURCE_LOCALE;

#[derive(Parser, Debug)]
#[command(name = "tmx")]
#[command(about = "Build, merge and inspect TMX translation memories")]
#[command(version)]
pub struct Args {
    /// Suppress status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Where a built or merged memory is written.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file, relative to --dir (prints to stdout if not set)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Directory relative output paths resolve against
    #[arg(short = 'd', long, default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Consolidate resource records (JSON) into a translation memory
    Build {
        /// Resource record files (reads stdin if none given)
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,

        /// Source locale of the memory (e.g., en-US)
        #[arg(short = 's', long)]
        source_locale: Option<String>,

        /// Segmentation style: paragraph or sentence
        #[arg(long)]
        segmentation: Option<String>,
    },
    /// Merge TMX files into one translation memory
    Merge {
        /// TMX files to merge, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show a summary of a TMX file
    Inspect {
        /// TMX file to inspect
        file: PathBuf,
    },
    /// Split text into translation segments, one per line
    Segment {
        /// Text to split
        text: String,

        /// Locale of the text
        #[arg(short = 'l', long, default_value = DEFAULT_SOURCE_LOCALE)]
        locale: String,

        /// Segmentation style: paragraph or sentence
        #[arg(long, default_value = "sentence")]
        segmentation: String,
    },
}
