//! Log subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the level comes from `-v`/`-q`.
//! The TUI owns the terminal, so it only ever logs to a file. `-v` adds
//! event targets and `-vv` adds source locations.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Not written anywhere
    Off,
}

/// Builds the event filter for `verbosity`
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init_logging(verbosity: Verbosity, target: &LogTarget) -> CliResult<()> {
    let filter = env_filter(verbosity);

    let result = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(verbosity.is_verbose())
            .with_file(verbosity.is_debug())
            .with_line_number(verbosity.is_debug())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_file(verbosity.is_debug())
                .with_line_number(verbosity.is_debug())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_off_installs_nothing() {
        assert!(init_logging(Verbosity::Debug, &LogTarget::Off).is_ok());
    }

    #[test]
    fn test_file_target_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("keycalc.log");
        let err = init_logging(Verbosity::Normal, &LogTarget::File(path)).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
