use crate::error::ScrubError;
use crate::scrub::{Invocation, OutputMode};
use crate::tool::Exiftool;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Prefix for lines describing work that was only previewed.
pub const PREVIEW_PREFIX: &str = "[P] ";

/// What happened to a single input.
#[derive(Debug)]
pub enum Outcome {
    /// Input was not an existing regular file.
    Skipped,
    /// Only the command line was printed.
    Previewed(Invocation),
    /// exiftool succeeded; `target` holds the stripped file.
    Cleaned {
        /// Original path or clean copy, depending on the output mode.
        target: PathBuf,
    },
    /// exiftool failed for this input.
    Failed(ScrubError),
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<(PathBuf, Outcome)>,
}

impl Report {
    /// All inputs with their outcome.
    pub fn entries(&self) -> &[(PathBuf, Outcome)] {
        &self.entries
    }

    /// Number of inputs processed.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of inputs that were skipped.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    /// Number of inputs that were previewed.
    pub fn previewed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Previewed(_)))
    }

    /// Number of inputs that were cleaned.
    pub fn cleaned(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Cleaned { .. }))
    }

    /// Number of inputs exiftool failed on.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, predicate: fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| predicate(o)).count()
    }

    /// One-line summary for the end of a run.
    pub fn summary(&self, preview: bool) -> String {
        let (pp, verb, done) = if preview {
            (PREVIEW_PREFIX, "Previewed", self.previewed())
        } else {
            ("", "Cleaned", self.cleaned())
        };

        let mut summary = format!("{pp}{verb} {done} of {} files", self.total());

        let mut extra = Vec::new();

        if self.skipped() > 0 {
            extra.push(format!("{} skipped", self.skipped()));
        }

        if self.failed() > 0 {
            extra.push(format!("{} failed", self.failed()));
        }

        if !extra.is_empty() {
            summary.push_str(&format!(" ({})", extra.join(", ")));
        }

        summary.push('.');
        summary
    }
}

/// Runs exiftool over a list of files, one at a time.
pub struct Batch<'a> {
    tool: &'a Exiftool,
    mode: OutputMode,
    preview: bool,
}

impl<'a> Batch<'a> {
    /// Creates a new batch driver.
    pub fn new(tool: &'a Exiftool, mode: OutputMode, preview: bool) -> Self {
        Batch {
            tool,
            mode,
            preview,
        }
    }

    /// Processes every path, continuing past per-file failures.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P]) -> Report {
        let mut report = Report::default();

        for path in paths {
            let path = path.as_ref();
            let outcome = self.process(path);
            report.entries.push((path.to_path_buf(), outcome));
        }

        info!("{}", report.summary(self.preview));

        report
    }

    fn process(&self, path: &Path) -> Outcome {
        if !path.is_file() {
            info!("Skipping {}", path.display());
            println!("Skipping '{}' (not a file)", path.display());
            return Outcome::Skipped;
        }

        let invocation = Invocation::new(self.tool, path, self.mode);

        if self.preview {
            println!("{PREVIEW_PREFIX}{invocation}");
            return Outcome::Previewed(invocation);
        }

        println!("Cleaning {} \u{2026}", path.display());

        match invocation.run() {
            Ok(()) => Outcome::Cleaned {
                target: invocation.target().to_path_buf(),
            },
            Err(error) => {
                warn!("{}: {}", path.display(), error);
                eprintln!("[error] {}: {}", path.display(), error);
                Outcome::Failed(error)
            }
        }
    }
}
