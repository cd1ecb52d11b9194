use crate::error::ScrubError;
use log::{debug, info};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Handle to an exiftool executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exiftool {
    program: PathBuf,
}

impl Exiftool {
    /// Name of the executable, without platform suffix.
    pub const NAME: &'static str = "exiftool";

    /// Wraps a known exiftool path without checking it.
    pub fn from_path<P: AsRef<Path>>(program: P) -> Self {
        Exiftool {
            program: program.as_ref().to_path_buf(),
        }
    }

    /// Searches the `PATH` environment variable for exiftool.
    pub fn locate() -> Result<Self, ScrubError> {
        let search_path = std::env::var_os("PATH").unwrap_or_default();
        Exiftool::locate_in(&search_path)
    }

    /// Searches a `PATH`-style list of directories for exiftool.
    pub fn locate_in(search_path: &OsStr) -> Result<Self, ScrubError> {
        let file_name = format!("{}{}", Exiftool::NAME, std::env::consts::EXE_SUFFIX);

        for dir in std::env::split_paths(search_path) {
            let candidate = dir.join(&file_name);
            debug!("Looking for {}", candidate.display());

            if is_executable(&candidate) {
                let program = dunce::canonicalize(&candidate).unwrap_or(candidate);
                info!("Found {} at {}", Exiftool::NAME, program.display());

                return Ok(Exiftool { program });
            }
        }

        Err(ScrubError::ToolNotFound)
    }

    /// Path to the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[test]
    fn test_locate_in_empty_search_path() {
        let result = Exiftool::locate_in(OsStr::new(""));

        assert!(matches!(result, Err(ScrubError::ToolNotFound)));
    }

    #[test]
    fn test_locate_in_dir_without_tool() -> Result<()> {
        let dir = TempDir::new()?;
        dir.child("not-exiftool").touch()?;

        let result = Exiftool::locate_in(dir.path().as_os_str());

        assert!(matches!(result, Err(ScrubError::ToolNotFound)));

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_in_skips_non_executable() -> Result<()> {
        let dir = TempDir::new()?;
        dir.child(Exiftool::NAME).write_str("#!/bin/sh\n")?;

        let result = Exiftool::locate_in(dir.path().as_os_str());

        assert!(matches!(result, Err(ScrubError::ToolNotFound)));

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_in_picks_first_match() -> Result<()> {
        let empty = TempDir::new()?;
        let first = test_harness::FakeExiftool::new()?;
        let second = test_harness::FakeExiftool::new()?;

        let first_dir = first.bin_dir();
        let second_dir = second.bin_dir();

        let search_path = std::env::join_paths([
            empty.path(),
            first_dir.as_path(),
            second_dir.as_path(),
        ])?;

        let tool = Exiftool::locate_in(&search_path)?;

        assert_eq!(tool.program(), dunce::canonicalize(first.program())?);

        Ok(())
    }
}
