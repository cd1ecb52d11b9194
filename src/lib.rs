#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! Strips metadata tags from files using `exiftool`.
//!
//! Every file is handed to `exiftool -all=`, either in place or as a
//! `_clean` copy next to the original. A failure on one file never stops
//! the rest of the batch.

/// Runs exiftool over a list of files.
pub mod batch;
/// Controls the command line interface
pub mod cli;
/// Error types.
pub mod error;
/// Building and running exiftool commands.
pub mod scrub;
/// Locating the exiftool executable.
pub mod tool;

pub use batch::{Batch, Outcome, Report};
pub use error::ScrubError;
pub use scrub::{clean_path, scrub, Invocation, OutputMode};
pub use tool::Exiftool;
