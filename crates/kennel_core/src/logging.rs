//! Process-wide file logging for kennel.
//!
//! # Responsibility
//! - Resolve logging configuration from explicit values or the environment.
//! - Start rolling file logs at most once per process.
//!
//! # Invariants
//! - Starting twice with an identical config is a no-op.
//! - Starting with a different level or directory is rejected.
//! - Nothing in this module panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable holding the absolute log directory.
pub const LOG_DIR_ENV: &str = "KENNEL_LOG_DIR";
/// Environment variable holding the log level name.
pub const LOG_LEVEL_ENV: &str = "KENNEL_LOG_LEVEL";

const LOG_FILE_BASENAME: &str = "kennel";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;
const PANIC_SUMMARY_MAX_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Supported verbosity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a case-insensitive level name; `warning` is accepted for `warn`.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unsupported log level `{other}`; expected trace|debug|info|warn|error"
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub log_dir: PathBuf,
}

impl LogConfig {
    /// Validates raw level and directory strings.
    ///
    /// # Errors
    /// - `level` is not a known level name.
    /// - `log_dir` is empty or not absolute.
    pub fn new(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: LogLevel::parse(level)?,
            log_dir: parse_log_dir(log_dir)?,
        })
    }

    /// Reads `KENNEL_LOG_DIR` and `KENNEL_LOG_LEVEL`.
    ///
    /// Returns `Ok(None)` when no log directory is configured. A missing
    /// level falls back to [`default_log_level`].
    pub fn from_env() -> Result<Option<Self>, String> {
        Self::from_vars(
            std::env::var(LOG_DIR_ENV).ok().as_deref(),
            std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
        )
    }

    /// Resolves config from already-read `KENNEL_LOG_DIR`/`KENNEL_LOG_LEVEL`
    /// values, with the same fallbacks as [`LogConfig::from_env`].
    pub fn from_vars(log_dir: Option<&str>, level: Option<&str>) -> Result<Option<Self>, String> {
        let Some(log_dir) = log_dir else {
            return Ok(None);
        };
        Self::new(level.unwrap_or(default_log_level()), log_dir).map(Some)
    }
}

/// Starts file logging with the given level name and absolute directory.
///
/// Returns a human-readable error when the config is invalid, conflicts
/// with an already active logger, or the backend cannot start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    start(LogConfig::new(level, log_dir)?)
}

/// Starts file logging from an already validated config.
pub fn start(config: LogConfig) -> Result<(), String> {
    let active = ACTIVE.get_or_try_init(|| launch(config.clone()))?;
    check_compatible(&active.config, &config)
}

/// Returns `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.config.level.as_str(), active.config.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn launch(config: LogConfig) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            config.log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(config.level.as_str())
        .map_err(|err| format!("invalid log level `{}`: {err}", config.level))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_start module=core status=ok level={} log_dir={} version={}",
        config.level,
        config.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        config,
        _handle: handle,
    })
}

fn check_compatible(active: &LogConfig, requested: &LogConfig) -> Result<(), String> {
    if active.log_dir != requested.log_dir {
        return Err(format!(
            "logging already writes to `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            requested.log_dir.display()
        ));
    }
    if active.level != requested.level {
        return Err(format!(
            "logging already runs at level `{}`; refusing to switch to `{}`",
            active.level, requested.level
        ));
    }
    Ok(())
}

fn parse_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        // Payload may carry dog names; keep it on one line and short.
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            one_line_summary(&payload, PANIC_SUMMARY_MAX_CHARS)
        );
        previous(panic_info);
    }));
}

fn one_line_summary(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut summary: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        summary.push_str("...");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::{
        default_log_level, init_logging, logging_status, one_line_summary, LogConfig, LogLevel,
    };
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "kennel-logging-{suffix}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(LogLevel::parse("INFO").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::parse(" warning ").unwrap(), LogLevel::Warn);
        assert!(LogLevel::parse("loud").is_err());
    }

    #[test]
    fn config_rejects_relative_and_empty_dirs() {
        let relative = LogConfig::new("info", "logs/dev").unwrap_err();
        assert!(relative.contains("absolute"));

        let empty = LogConfig::new("info", "   ").unwrap_err();
        assert!(empty.contains("empty"));
    }

    #[test]
    fn from_vars_without_dir_disables_logging() {
        assert_eq!(LogConfig::from_vars(None, None).unwrap(), None);
        assert_eq!(LogConfig::from_vars(None, Some("trace")).unwrap(), None);
    }

    #[test]
    fn from_vars_defaults_level_and_validates_values() {
        let dir = unique_temp_dir("vars");
        let dir_str = dir.to_str().unwrap();

        let config = LogConfig::from_vars(Some(dir_str), None).unwrap().unwrap();
        assert_eq!(config.level, LogLevel::parse(default_log_level()).unwrap());
        assert_eq!(config.log_dir, dir);

        let config = LogConfig::from_vars(Some(dir_str), Some("Error"))
            .unwrap()
            .unwrap();
        assert_eq!(config.level, LogLevel::Error);

        assert!(LogConfig::from_vars(Some("relative/logs"), None).is_err());
        assert!(LogConfig::from_vars(Some(dir_str), Some("loud")).is_err());
    }

    #[test]
    fn one_line_summary_flattens_and_truncates() {
        let summary = one_line_summary("line1\nline2\rline3", 8);
        assert!(!summary.contains('\n'));
        assert!(!summary.contains('\r'));
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let log_dir = unique_temp_dir("idempotent");
        let log_dir_str = log_dir.to_str().unwrap().to_string();
        let other_dir = unique_temp_dir("other");
        let other_dir_str = other_dir.to_str().unwrap().to_string();

        init_logging("info", &log_dir_str).expect("first init should succeed");
        init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

        let level_error = init_logging("debug", &log_dir_str).unwrap_err();
        assert!(level_error.contains("refusing to switch"));

        let dir_error = init_logging("info", &other_dir_str).unwrap_err();
        assert!(dir_error.contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging should be active");
        assert_eq!(level, "info");
        assert_eq!(dir, log_dir);
    }
}
