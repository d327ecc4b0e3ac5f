//! Logging for fieldcheck
//!
//! Small, environment-controlled logging macros used by the validators.
//! Output goes to stderr, either as one JSON object per line or as a
//! compact human-readable line.
//!
//! # Usage
//!
//! ```rust
//! use fieldcheck_log::{debug, info};
//!
//! debug!("checking field {}", "email");
//! info!(target: "fieldcheck::messages", "loaded {} templates", 3);
//! ```
//!
//! # Environment Variables
//!
//! - `FIELDCHECK_DEBUG=1` - Enable debug logging
//! - `FIELDCHECK_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `FIELDCHECK_LOG_FORMAT=json|compact` - Set output format

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// ============================================================================
// Levels and formats
// ============================================================================

/// Log level, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Nothing is written.
    Off = 5,
}

impl Level {
    /// Parse a level name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `HH:MM:SS L target: message`
    Compact,
    /// One JSON object per line
    Json,
}

impl Format {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Global configuration
// ============================================================================

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logging configuration, read once from the environment.
#[derive(Debug)]
pub struct LogConfig {
    pub debug: bool,
    pub level: Level,
    pub format: Format,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl LogConfig {
    /// Build the configuration from `FIELDCHECK_*` variables and publish
    /// the level to the global atomics.
    pub fn from_env() -> Self {
        let debug = env_flag("FIELDCHECK_DEBUG").unwrap_or(false);

        let level = env::var("FIELDCHECK_LOG_LEVEL")
            .ok()
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = env::var("FIELDCHECK_LOG_FORMAT")
            .ok()
            .and_then(|s| Format::parse(&s))
            .unwrap_or(Format::Json);

        DEBUG_ENABLED.store(debug, Ordering::SeqCst);
        LOG_LEVEL.store(level as u8, Ordering::SeqCst);

        Self {
            debug,
            level,
            format,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Read the environment if it has not been read yet. Every query and
/// override goes through this so runtime overrides are never clobbered by
/// a late initialisation.
pub fn init() {
    Lazy::force(&CONFIG);
}

#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Whether a line at `level` is written: the configured level admits it,
/// or it is a debug line and debug mode is on.
#[inline]
pub fn is_enabled(level: Level) -> bool {
    is_level_enabled(level) || (level == Level::Debug && is_debug_enabled())
}

pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Override the level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Toggle debug mode at runtime. Enabling it lowers the level to at
/// least `Debug`.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Output
// ============================================================================

#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if !is_enabled(level) {
        return;
    }

    match config().format {
        Format::Compact => log_compact(level, target, message),
        Format::Json => log_json(level, target, message),
    }
}

fn log_compact(level: Level, target: &str, message: &str) {
    let mut stderr = std::io::stderr().lock();
    let now = chrono::Local::now();
    let initial = level.as_str().chars().next().unwrap_or('?');

    let _ = writeln!(
        stderr,
        "{} {} {}: {}",
        now.format("%H:%M:%S"),
        initial,
        target,
        message
    );
}

#[cfg(feature = "json")]
fn log_json(level: Level, target: &str, message: &str) {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Line<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let line = Line {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    if let Ok(json) = serde_json::to_string(&line) {
        eprintln!("{}", json);
    }
}

#[cfg(not(feature = "json"))]
fn log_json(level: Level, target: &str, message: &str) {
    log_compact(level, target, message);
}

// ============================================================================
// Macros
// ============================================================================

/// Log at trace level.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::trace!(target: module_path!(), $($arg)+)
    };
}

/// Log at debug level. Also emitted when `FIELDCHECK_DEBUG` is set,
/// whatever the configured level.
///
/// ```rust
/// use fieldcheck_log::debug;
///
/// let field = "age";
/// debug!(target: "fieldcheck::validator", "{} failed", field);
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::debug!(target: module_path!(), $($arg)+)
    };
}

/// Log at info level.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::info!(target: module_path!(), $($arg)+)
    };
}

/// Log at warn level.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::warn!(target: module_path!(), $($arg)+)
    };
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::error!(target: module_path!(), $($arg)+)
    };
}
