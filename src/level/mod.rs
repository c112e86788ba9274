//! Verbosity levels shared by every backend.

use std::fmt;
use std::str::FromStr;

/// Ordered least-to-most verbose so a threshold comparison reads naturally:
/// a message passes when it is not more verbose than the configured level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Sentinel that silences everything, including forced debug/trace escalation.
    Off = 0,
    /// Logged right before the caller panics.
    Panic = 1,
    /// Logged right before the process exits.
    Fatal = 2,
    /// Failures that prevent an operation from completing.
    Error = 3,
    /// Anomalies worth a look but not fatal.
    Warn = 4,
    /// Normal operational milestones.
    #[default]
    Info = 5,
    /// Diagnostics too noisy for normal operation.
    Debug = 6,
    /// High-volume instrumentation, additionally gated by trace mode.
    Trace = 7,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Panic => "panic",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Used by help output, the `levels` command, and tests.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Off,
            Self::Panic,
            Self::Fatal,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    /// Whether a threshold of `self` lets a message at `message` through.
    #[must_use]
    pub fn enables(self, message: Self) -> bool {
        message != Self::Off && message <= self
    }

    /// Config strings are user input: anything unparseable degrades to `Info`
    /// instead of failing logger construction.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Off,
            1 => Self::Panic,
            2 => Self::Fatal,
            3 => Self::Error,
            4 => Self::Warn,
            5 => Self::Info,
            6 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can report the offending string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
