//! One JSON object per line: `time`, `level`, `msg`, then fields in the
//! order they were attached.

use super::Record;
use chrono::SecondsFormat;
use serde_json::{Map, Value};

const RESERVED: [&str; 3] = ["time", "level", "msg"];

pub(super) fn render(record: &Record<'_>) -> String {
    let mut map = Map::new();
    map.insert(
        "time".to_string(),
        Value::String(record.time.to_rfc3339_opts(SecondsFormat::Millis, false)),
    );
    map.insert("level".to_string(), Value::from(record.label()));
    map.insert("msg".to_string(), Value::from(record.message));

    for (key, value) in record.fields {
        // Fields may not shadow the fixed keys.
        let key = if RESERVED.contains(&key.as_str()) {
            format!("fields.{key}")
        } else {
            key.clone()
        };
        map.insert(key, value.clone());
    }

    Value::Object(map).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use chrono::Local;

    #[test]
    fn reserved_field_names_are_prefixed() {
        let fields = vec![("msg".to_string(), Value::from("shadow"))];
        let record = Record {
            level: Some(Level::Info),
            message: "real",
            fields: &fields,
            time: Local::now(),
        };
        let parsed: Value = serde_json::from_str(&render(&record)).unwrap();
        assert_eq!(parsed["msg"], "real");
        assert_eq!(parsed["fields.msg"], "shadow");
        assert_eq!(parsed["level"], "info");
    }

    #[test]
    fn fixed_keys_come_first_and_fields_keep_their_order() {
        let fields = vec![
            ("zone".to_string(), Value::from("eu")),
            ("attempt".to_string(), Value::from(2)),
        ];
        let record = Record {
            level: Some(Level::Error),
            message: "retrying",
            fields: &fields,
            time: Local::now(),
        };
        let line = render(&record);
        assert!(line.starts_with(r#"{"time":"#), "{line}");

        let pos = |key: &str| line.find(&format!("\"{key}\":")).unwrap();
        assert!(pos("time") < pos("level"));
        assert!(pos("level") < pos("msg"));
        assert!(pos("msg") < pos("zone"));
        assert!(pos("zone") < pos("attempt"));
    }

    #[test]
    fn print_records_use_print_label() {
        let record = Record {
            level: None,
            message: "banner",
            fields: &[],
            time: Local::now(),
        };
        let parsed: Value = serde_json::from_str(&render(&record)).unwrap();
        assert_eq!(parsed["level"], "print");
    }
}
