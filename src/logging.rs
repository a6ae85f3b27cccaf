//! File-based tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file. The filter comes from
//! `RUST_LOG` when set, otherwise from the configured level.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Errors raised while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize tracing: {0}")]
    Init(String),
}

/// Default log location: `<cache dir>/pulse-one/pulse-one.log`, or the
/// working directory when no cache dir is known
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("pulse-one"))
        .unwrap_or_default()
        .join("pulse-one.log")
}

/// Build the filter: `RUST_LOG` wins, then `level`
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| LoggingError::Init(e.to_string()))
}

/// Open the log file for appending, creating its directory if needed
fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Install the global subscriber. Returns the path logs are written to.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> Result<PathBuf, LoggingError> {
    let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;
    let filter = build_filter(level)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing_subscriber::filter::LevelFilter;

    /// Run `f` with `RUST_LOG` set to `value` (or unset), restoring it after
    fn with_rust_log<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = std::env::var_os("RUST_LOG");
        // Callers are #[serial], so no other test touches the environment
        unsafe {
            match value {
                Some(v) => std::env::set_var("RUST_LOG", v),
                None => std::env::remove_var("RUST_LOG"),
            }
        }
        let result = f();
        unsafe {
            match saved {
                Some(v) => std::env::set_var("RUST_LOG", v),
                None => std::env::remove_var("RUST_LOG"),
            }
        }
        result
    }

    #[test]
    #[serial]
    fn test_build_filter_uses_level_without_rust_log() {
        let filter = with_rust_log(None, || build_filter("debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    #[serial]
    fn test_build_filter_prefers_rust_log() {
        let filter = with_rust_log(Some("warn"), || build_filter("trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    #[serial]
    fn test_build_filter_ignores_invalid_rust_log() {
        let filter = with_rust_log(Some("pulse_one=loud"), || build_filter("error")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    #[serial]
    fn test_build_filter_rejects_invalid_level() {
        let result = with_rust_log(None, || build_filter("pulse_one=loud"));
        assert!(matches!(result, Err(LoggingError::Init(_))));
    }

    #[test]
    fn test_default_log_path_file_name() {
        let path = default_log_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("pulse-one.log"));
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("pulse-one.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file
        let result = open_log_file(dir.path());
        match result {
            Err(LoggingError::OpenFile { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("expected open error, got {:?}", other),
        }
    }
}
