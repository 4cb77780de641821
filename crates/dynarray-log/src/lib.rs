//! A minimal, zero-dependency leveled logger for the `dynarray` workspace.
//!
//! The container crate uses it to report storage reallocation and element
//! level operations. Output goes to stderr and is silent below `Warn` unless
//! the level is raised, either programmatically or via the `DYNARRAY_LOG`
//! environment variable.
//!
//! # Example
//!
//! ```
//! use dynarray_log::{debug, info, Level};
//!
//! dynarray_log::set_level(Level::Debug);
//!
//! let capacity = 32;
//! info!("array ready");
//! debug!("grew storage to {} slots", capacity);
//! ```

use std::fmt::Arguments;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable read by [`init_from_env`].
pub const ENV_VAR: &str = "DYNARRAY_LOG";

/// Log levels, ordered from most severe (`Error`) to most verbose (`Trace`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Failures the caller must act on.
    Error = 0,
    /// Rejected input and other suspicious situations.
    Warn = 1,
    /// Coarse lifecycle events.
    Info = 2,
    /// Storage reallocation and policy decisions.
    Debug = 3,
    /// Per-element operations.
    Trace = 4,
}

impl Level {
    /// Returns the upper-case name of this level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    /// Parses a level name, ignoring case.
    ///
    /// ```
    /// use dynarray_log::Level;
    ///
    /// assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    /// assert!("loud".parse::<Level>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::Error),
            "WARN" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// Process-wide logger holding the minimum enabled level.
pub struct Logger {
    level: AtomicU8,
}

impl Logger {
    const fn new(level: Level) -> Self {
        Logger {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Sets the minimum level; messages below it are discarded.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Returns the current minimum level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Returns `true` if a message at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.level.load(Ordering::Relaxed)
    }

    /// Applies a level taken from configuration.
    ///
    /// `None` (variable unset) leaves the level untouched. Returns the level
    /// in effect afterwards.
    pub fn configure(&self, value: Option<&str>) -> Result<Level, String> {
        if let Some(raw) = value {
            self.set_level(raw.parse()?);
        }
        Ok(self.level())
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the global logger, initialised at `Level::Warn` on first use.
pub fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(Level::Warn))
}

/// Sets the minimum level of the global logger.
pub fn set_level(level: Level) {
    get_logger().set_level(level);
}

/// Sets the minimum level of the global logger from a level name.
///
/// ```
/// dynarray_log::set_level_from_str("trace").unwrap();
/// assert!(dynarray_log::set_level_from_str("verbose").is_err());
/// ```
pub fn set_level_from_str(s: &str) -> Result<(), String> {
    set_level(s.parse()?);
    Ok(())
}

/// Configures the global logger from the `DYNARRAY_LOG` environment variable.
///
/// An unset variable keeps the current level; an unparsable one is reported
/// and the level is left as it was.
pub fn init_from_env() -> Result<Level, String> {
    let value = std::env::var(ENV_VAR).ok();
    get_logger().configure(value.as_deref())
}

#[doc(hidden)]
pub fn __log_with_target(level: Level, target: &str, args: Arguments) {
    if !get_logger().enabled(level) {
        return;
    }
    eprintln!("[{}] {target}: {args}", level.as_str());
}

/// Logs a message at an explicit level, tagged with the calling module.
///
/// ```
/// use dynarray_log::{log, Level};
///
/// log!(level: Level::Info, "len = {}", 3);
/// ```
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        {
            if $crate::get_logger().enabled($level) {
                $crate::__log_with_target(
                    $level,
                    module_path!(),
                    format_args!($($arg)*)
                );
            }
        }
    };
}

/// Logs at `Level::Error`.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Error, $($arg)*)
    };
}

/// Logs at `Level::Warn`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Warn, $($arg)*)
    };
}

/// Logs at `Level::Info`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Info, $($arg)*)
    };
}

/// Logs at `Level::Debug`.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Debug, $($arg)*)
    };
}

/// Logs at `Level::Trace`.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Trace, $($arg)*)
    };
}
