use anyhow::{bail, Result};
use log::{log, LevelFilter};
use std::fs;
use std::path::PathBuf;

static LOG_LEVELS: [log::LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Directory the log file is written to.
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(env!("CARGO_PKG_NAME"))
}

fn level_for(verbosity: usize) -> Result<LevelFilter> {
    match LOG_LEVELS.get(verbosity) {
        Some(level) => Ok(*level),
        None => bail!(
            "Verbosity must be between 0 and {}, not {}!",
            LOG_LEVELS.len() - 1,
            verbosity
        ),
    }
}

/// Setup logger.
pub fn setup_logger(verbosity: usize, filename: &str) -> Result<()> {
    let level = level_for(verbosity)?;

    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = get_log_dir();

    fs::create_dir_all(&path)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:.1}][{}][{}:{}] {}",
                record.level(),
                chrono::Local::now().format("%H:%M:%S.%6f"),
                record.target().rsplit("::").next().unwrap_or_default(),
                record.line().unwrap_or(0),
                message
            ));
        })
        .level(level)
        .chain(
            fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path.join(format!("{filename}.log")))?,
        )
        .apply()?;

    if let Some(level) = log::max_level().to_level() {
        log!(level, "Log started");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_maps_to_level() -> Result<()> {
        assert_eq!(level_for(0)?, LevelFilter::Off);
        assert_eq!(level_for(1)?, LevelFilter::Error);
        assert_eq!(level_for(5)?, LevelFilter::Trace);

        Ok(())
    }

    #[test]
    fn test_verbosity_out_of_range() {
        assert!(level_for(6).is_err());
        assert!(setup_logger(42, "unused").is_err());
    }

    #[test]
    fn test_zero_verbosity_installs_nothing() -> Result<()> {
        setup_logger(0, "unused")?;

        Ok(())
    }
}
