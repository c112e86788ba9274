//! Record rendering. Each backend picks one format; splitting them keeps the
//! quoting rules of the text format away from the JSON encoder.

mod json;
mod plain;
mod text;

use crate::level::Level;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::fmt;

/// Ordered key/value annotations carried by derived loggers.
pub type Fields = Vec<(String, Value)>;

/// Label used for records written by `print`, which bypass level filtering.
pub const PRINT_LABEL: &str = "print";

/// One formatted-but-not-yet-rendered log line.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// `None` for `print` records.
    pub level: Option<Level>,
    pub message: &'a str,
    pub fields: &'a [(String, Value)],
    pub time: DateTime<Local>,
}

impl Record<'_> {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.level.map_or(PRINT_LABEL, Level::as_str)
    }
}

/// Supported line formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `time="…" level=info msg="…" key=value`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
    /// `YYYY/MM/DD HH:MM:SS [INFO] msg`
    Plain,
}

impl Format {
    /// Config strings use a few aliases; unknown names yield `None` so the
    /// backend can keep its own default.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "logfmt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "plain" | "std" => Some(Self::Plain),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Plain => "plain",
        }
    }

    /// Renders without a trailing newline.
    #[must_use]
    pub fn render(self, record: &Record<'_>) -> String {
        match self {
            Self::Text => text::render(record),
            Self::Json => json::render(record),
            Self::Plain => plain::render(record),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
