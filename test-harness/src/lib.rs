#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![cfg(unix)]
//! Provides a stand-in for the `exiftool` executable.
//!
//! The fake records every invocation, copies the input in `-o` mode and can
//! be told to fail on specific paths. It is a POSIX shell script, so it is
//! only available on Unix.

use anyhow::Result;
use assert_fs::TempDir;
use std::ffi::OsString;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// A temporary directory holding a fake `exiftool` script.
pub struct FakeExiftool {
    dir: TempDir,
}

impl FakeExiftool {
    const BIN_DIR: &'static str = "bin";
    const LOG_FILE: &'static str = "invocations.log";
    const PROGRAM: &'static str = "exiftool";

    /// Creates a fake that succeeds for every file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from creating the script.
    pub fn new() -> Result<Self> {
        FakeExiftool::create(None)
    }

    /// Creates a fake that exits with status 1 when any argument contains
    /// `fragment`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from creating the script.
    pub fn failing_on(fragment: &str) -> Result<Self> {
        FakeExiftool::create(Some(fragment))
    }

    fn create(fragment: Option<&str>) -> Result<Self> {
        let dir = TempDir::new()?;
        let fake = FakeExiftool { dir };

        std::fs::create_dir(fake.bin_dir())?;

        let script = fake.script(fragment);
        let program = fake.program();

        std::fs::write(&program, script)?;
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755))?;

        Ok(fake)
    }

    fn script(&self, fragment: Option<&str>) -> String {
        let failure = fragment.map_or_else(String::new, |fragment| {
            format!(
                "case \"$*\" in\n  \
                 *{fragment}*) echo \"fake exiftool: failing on $*\" >&2; exit 1 ;;\n\
                 esac\n"
            )
        });

        format!(
            "#!/bin/sh\n\
             log='{log}'\n\
             for arg in \"$@\"; do printf '%s\\t' \"$arg\" >> \"$log\"; done\n\
             printf '\\n' >> \"$log\"\n\
             {failure}\
             if [ \"$2\" = \"-o\" ]; then\n  \
             if [ -e \"$3\" ]; then echo \"Error: '$3' already exists\" >&2; exit 1; fi\n  \
             cp \"$4\" \"$3\" || exit 1\n\
             fi\n\
             exit 0\n",
            log = self.log_path().display(),
        )
    }

    /// Directory containing the fake executable.
    pub fn bin_dir(&self) -> PathBuf {
        self.dir.path().join(FakeExiftool::BIN_DIR)
    }

    /// Path to the fake executable.
    pub fn program(&self) -> PathBuf {
        self.bin_dir().join(FakeExiftool::PROGRAM)
    }

    /// File every invocation is appended to.
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join(FakeExiftool::LOG_FILE)
    }

    /// A `PATH` value with the fake in front of the current `PATH`.
    ///
    /// # Errors
    ///
    /// Fails if a directory in `PATH` contains the separator character.
    pub fn search_path(&self) -> Result<OsString> {
        let current = std::env::var_os("PATH").unwrap_or_default();

        let dirs = std::iter::once(self.bin_dir()).chain(std::env::split_paths(&current));

        Ok(std::env::join_paths(dirs)?)
    }

    /// Arguments of every recorded invocation, oldest first.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading the log, other than it not existing.
    pub fn invocations(&self) -> Result<Vec<Vec<String>>> {
        let path = self.log_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let invocations = std::fs::read_to_string(path)?
            .lines()
            .map(|line| line.split_terminator('\t').map(String::from).collect())
            .collect();

        Ok(invocations)
    }
}

/// Creates an empty directory to use as a `PATH` without exiftool.
///
/// # Errors
///
/// Returns any I/O error from creating the directory.
pub fn empty_search_path() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Returns whether `invocation` contains `arg`.
pub fn has_arg<P: AsRef<Path>>(invocation: &[String], arg: P) -> bool {
    let arg = arg.as_ref();
    invocation.iter().any(|a| Path::new(a) == arg)
}
