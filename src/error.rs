use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error from locating or running exiftool.
pub enum ScrubError {
    /// exiftool is not on the search path.
    #[error("exiftool not found. Install it from https://exiftool.org/.")]
    ToolNotFound,

    /// exiftool ran, but exited unsuccessfully.
    #[error("Command `{command}` failed with {status}")]
    ToolFailed {
        /// Rendered command line.
        command: String,
        /// Exit status of the process.
        status: ExitStatus,
    },

    /// exiftool could not be started.
    #[error("Unable to run `{command}`: {source}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Wrapper for std::io::Error.
        source: std::io::Error,
    },
}
