use std::path::PathBuf;

use clap::Parser;

use crate::scrub::OutputMode;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]

/// Holds command line arguments.
pub struct Args {
    #[clap(
        long,
        required = true,
        multiple_values = true,
        parse(from_os_str),
        value_name = "PATH"
    )]
    /// Files to clean.
    pub files: Vec<PathBuf>,

    #[clap(short, long)]
    /// Overwrite originals instead of writing clean copies.
    pub overwrite: bool,

    #[clap(short, long)]
    /// Only print the exiftool commands that would run.
    pub preview: bool,

    #[clap(short, long, parse(from_occurrences))]
    /// Write a log file. Repeat for more detail.
    pub verbose: usize,
}

impl Args {
    /// Output mode selected by `--overwrite`.
    pub fn mode(&self) -> OutputMode {
        if self.overwrite {
            OutputMode::Overwrite
        } else {
            OutputMode::Copy
        }
    }
}

/// Parses arguments
pub(crate) fn parse_args() -> Args {
    Args::parse()
}
