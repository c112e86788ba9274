//! Classic `date time [LEVEL] message` lines.

use super::Record;
use serde_json::Value;
use std::fmt::Write;

pub(super) fn render(record: &Record<'_>) -> String {
    let mut out = record.time.format("%Y/%m/%d %H:%M:%S").to_string();
    if let Some(level) = record.level {
        let _ = write!(out, " [{}]", level.as_str().to_uppercase());
    }
    out.push(' ');
    out.push_str(record.message);

    for (key, value) in record.fields {
        match value {
            Value::String(s) => {
                let _ = write!(out, " {key}={s}");
            }
            other => {
                let _ = write!(out, " {key}={other}");
            }
        }
    }
    out
}
