//! Logger configuration

use multilog_core::{Level, LogOutput};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Informational rotation threshold (20 MiB)
pub const DEFAULT_LOG_ROTATE_SIZE: u64 = 20 * 1024 * 1024;

/// File sink level when none is configured
pub const DEFAULT_FILE_LEVEL: Level = Level::Warn;

/// File sink level when the configured one does not parse
pub const FALLBACK_FILE_LEVEL: Level = Level::Error;

/// Environment variable names read by [`Options::with_env_overrides`]
pub mod env {
    pub const QUIET: &str = "MULTILOG_QUIET";
    pub const VERBOSE: &str = "MULTILOG_VERBOSE";
    pub const FILE: &str = "MULTILOG_FILE";
    pub const LEVEL: &str = "MULTILOG_LEVEL";
    pub const FORCE_COLORS: &str = "MULTILOG_FORCE_COLORS";
    pub const ROTATE_SIZE: &str = "MULTILOG_ROTATE_SIZE";
}

/// Called with the exit status after a fatal record
pub type ExitFunc = Arc<dyn Fn(i32) + Send + Sync>;

/// Options for building a [`crate::MultiLogger`].
#[derive(Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    /// Suppress note output
    pub quiet: bool,

    /// Console verbosity: 0 warn, 1 info, 2 debug, 3+ trace
    pub verbose: u8,

    /// Rotation threshold in bytes. Carried for callers; not acted upon.
    pub log_rotate_size: u64,

    /// Log file path, `~` expanded
    pub log_file: Option<String>,

    /// Minimum level written to the log file
    pub log_level: Option<String>,

    /// Colorize console output even when it is not a terminal
    pub force_colors: bool,

    /// Console output; process stderr when unset
    #[serde(skip)]
    pub stderr: Option<Box<dyn LogOutput>>,

    /// Exit hook for fatal records; `std::process::exit` when unset
    #[serde(skip)]
    pub exit_func: Option<ExitFunc>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: 0,
            log_rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            log_file: None,
            log_level: None,
            force_colors: false,
            stderr: None,
            exit_func: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("quiet", &self.quiet)
            .field("verbose", &self.verbose)
            .field("log_rotate_size", &self.log_rotate_size)
            .field("log_file", &self.log_file)
            .field("log_level", &self.log_level)
            .field("force_colors", &self.force_colors)
            .field("custom_stderr", &self.stderr.is_some())
            .field("custom_exit_func", &self.exit_func.is_some())
            .finish()
    }
}

impl Options {
    /// Defaults overlaid with `MULTILOG_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Overlay `MULTILOG_*` environment variables onto these options
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_env(|key| std::env::var(key).ok());
        self
    }

    /// Write console output to `output` instead of stderr
    pub fn with_stderr(mut self, output: impl LogOutput + 'static) -> Self {
        self.stderr = Some(Box::new(output));
        self
    }

    /// Replace the process exit performed after fatal records
    pub fn with_exit_func<F>(mut self, exit: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.exit_func = Some(Arc::new(exit));
        self
    }

    /// Threshold of the console sink
    pub fn console_level(&self) -> Level {
        Level::from_verbosity(self.verbose)
    }

    /// Threshold of the file sink
    pub fn file_level(&self) -> Level {
        match self.log_level.as_deref() {
            None | Some("") => DEFAULT_FILE_LEVEL,
            Some(name) => name.parse().unwrap_or_else(|e| {
                warn!("[Options] {}, using {}", e, FALLBACK_FILE_LEVEL);
                FALLBACK_FILE_LEVEL
            }),
        }
    }

    pub(crate) fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(env::QUIET) {
            if let Some(quiet) = parse_flag(env::QUIET, &value) {
                self.quiet = quiet;
            }
        }
        if let Some(value) = lookup(env::VERBOSE) {
            match value.trim().parse() {
                Ok(verbose) => self.verbose = verbose,
                Err(e) => warn!("[Options] Ignoring {}={:?}: {}", env::VERBOSE, value, e),
            }
        }
        if let Some(value) = lookup(env::FILE) {
            self.log_file = Some(value).filter(|v| !v.is_empty());
        }
        if let Some(value) = lookup(env::LEVEL) {
            self.log_level = Some(value).filter(|v| !v.is_empty());
        }
        if let Some(value) = lookup(env::FORCE_COLORS) {
            if let Some(force) = parse_flag(env::FORCE_COLORS, &value) {
                self.force_colors = force;
            }
        }
        if let Some(value) = lookup(env::ROTATE_SIZE) {
            match value.trim().parse() {
                Ok(size) => self.log_rotate_size = size,
                Err(e) => warn!("[Options] Ignoring {}={:?}: {}", env::ROTATE_SIZE, value, e),
            }
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => {
            warn!("[Options] Ignoring {}={:?}: not a boolean", key, value);
            None
        }
    }
}
