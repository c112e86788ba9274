//! logfmt-style key/value lines.

use super::Record;
use chrono::SecondsFormat;
use serde_json::Value;
use std::fmt::Write;

pub(super) fn render(record: &Record<'_>) -> String {
    let mut out = String::with_capacity(64 + record.message.len());
    let time = record.time.to_rfc3339_opts(SecondsFormat::Secs, false);

    push_pair(&mut out, "time", &time);
    push_pair(&mut out, "level", record.label());
    push_pair(&mut out, "msg", record.message);

    for (key, value) in record.fields {
        match value {
            Value::String(s) => push_pair(&mut out, key, s),
            other => push_pair(&mut out, key, &other.to_string()),
        }
    }

    out
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(key);
    out.push('=');
    if needs_quoting(value) {
        let _ = write!(out, "{value:?}");
    } else {
        out.push_str(value);
    }
}

/// Bare values stay greppable; anything with spaces, quotes, `=` or other
/// punctuation gets quoted so a line splits unambiguously.
pub(super) fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use chrono::Local;

    #[test]
    fn quotes_only_when_needed() {
        assert!(!needs_quoting("plain-value_1.0"));
        assert!(needs_quoting("two words"));
        assert!(needs_quoting("a=b"));
        assert!(needs_quoting(""));
    }

    #[test]
    fn fields_follow_message() {
        let fields = vec![
            ("skip".to_string(), Value::from(2)),
            ("user".to_string(), Value::from("jo ann")),
        ];
        let record = Record {
            level: Some(Level::Warn),
            message: "disk low",
            fields: &fields,
            time: Local::now(),
        };
        let line = render(&record);
        assert!(line.starts_with("time=\""));
        assert!(line.ends_with("level=warn msg=\"disk low\" skip=2 user=\"jo ann\""));
    }
}
