//! Tests for log level functionality.

use logfacade::Level;

#[test]
fn level_ordering_is_least_to_most_verbose() {
    assert!(Level::Off < Level::Panic);
    assert!(Level::Panic < Level::Fatal);
    assert!(Level::Fatal < Level::Error);
    assert!(Level::Error < Level::Warn);
    assert!(Level::Warn < Level::Info);
    assert!(Level::Info < Level::Debug);
    assert!(Level::Debug < Level::Trace);
}

#[test]
fn level_display() {
    assert_eq!(Level::Off.to_string(), "off");
    assert_eq!(Level::Panic.to_string(), "panic");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Trace.to_string(), "trace");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("none".parse::<Level>().unwrap(), Level::Off);
    assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
}

#[test]
fn level_from_str_invalid() {
    assert!("loud".parse::<Level>().is_err());
}

#[test]
fn unparseable_level_degrades_to_info() {
    assert_eq!(Level::parse_or_default("loud"), Level::Info);
    assert_eq!(Level::parse_or_default(""), Level::Info);
    assert_eq!(Level::parse_or_default("off"), Level::Off);
}

#[test]
fn threshold_enables_less_verbose_levels() {
    assert!(Level::Info.enables(Level::Error));
    assert!(Level::Info.enables(Level::Info));
    assert!(!Level::Info.enables(Level::Debug));
    assert!(!Level::Trace.enables(Level::Off));
}
