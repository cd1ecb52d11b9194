use crate::error::ScrubError;
use crate::tool::Exiftool;
use log::debug;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where the stripped file ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Replace the original file.
    Overwrite,
    /// Write a `_clean` sibling and leave the original untouched.
    Copy,
}

/// Suffix inserted before the extension of clean copies.
pub const CLEAN_SUFFIX: &str = "_clean";

/// Derives the sibling path a clean copy is written to.
///
/// `photo.jpg` becomes `photo_clean.jpg`, `notes` becomes `notes_clean`.
/// A trailing dot is part of the stem, so `file.` becomes `file._clean`.
pub fn clean_path(path: &Path) -> PathBuf {
    let extension = path.extension().filter(|e| !e.is_empty());

    let mut file_name: OsString = match extension {
        Some(_) => path.file_stem(),
        None => path.file_name(),
    }
    .unwrap_or_default()
    .to_os_string();
    file_name.push(CLEAN_SUFFIX);

    if let Some(extension) = extension {
        file_name.push(".");
        file_name.push(extension);
    }

    path.with_file_name(file_name)
}

/// A single exiftool command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    target: PathBuf,
}

impl Invocation {
    /// Argument that removes all writable tags.
    pub const STRIP_ALL: &'static str = "-all=";
    /// Argument that replaces the original without keeping a backup.
    pub const OVERWRITE_ORIGINAL: &'static str = "-overwrite_original";
    /// Argument that redirects output to a new file.
    pub const OUTPUT: &'static str = "-o";

    /// Builds the command line that strips `path` according to `mode`.
    pub fn new(tool: &Exiftool, path: &Path, mode: OutputMode) -> Self {
        let mut args: Vec<OsString> = vec![Invocation::STRIP_ALL.into()];

        let target = match mode {
            OutputMode::Overwrite => {
                args.push(Invocation::OVERWRITE_ORIGINAL.into());
                path.to_path_buf()
            }
            OutputMode::Copy => {
                let clean = clean_path(path);
                args.push(Invocation::OUTPUT.into());
                args.push(clean.clone().into_os_string());
                clean
            }
        };

        args.push(path.as_os_str().to_os_string());

        Invocation {
            program: tool.program().to_path_buf(),
            args,
            target,
        }
    }

    /// Program to run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments, in order.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// File that holds the stripped result after a successful run.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Creates a `Command` that inherits stdio.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Runs the command to completion.
    pub fn run(&self) -> Result<(), ScrubError> {
        debug!("Running {}", self);

        let status = self.to_command().status().map_err(|source| ScrubError::Spawn {
            command: self.to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ScrubError::ToolFailed {
                command: self.to_string(),
                status,
            })
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(self.program.as_os_str()))?;

        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }

        Ok(())
    }
}

// Only for display, never passed to a shell.
fn quote(arg: &OsStr) -> String {
    let arg = arg.to_string_lossy();

    if arg.is_empty() || arg.contains(char::is_whitespace) {
        format!("\"{arg}\"")
    } else {
        arg.into_owned()
    }
}

/// Strips all metadata from `path`, returning the file that holds the result.
pub fn scrub(tool: &Exiftool, path: &Path, mode: OutputMode) -> Result<PathBuf, ScrubError> {
    let invocation = Invocation::new(tool, path, mode);
    invocation.run()?;

    Ok(invocation.target().to_path_buf())
}
