//! Tests for backend selection.

use logfacade::{Builtin, DummyLogger, LogContext, Logger, LoggerConfig, StdLogger};

fn config(backend: &str) -> LoggerConfig {
    LoggerConfig {
        backend: backend.to_string(),
        ..LoggerConfig::default()
    }
}

#[test]
fn builtin_names_select_their_family() {
    let ctx = LogContext::new();
    let cases = [
        ("dummy", "dummy"),
        ("none", "dummy"),
        ("off", "dummy"),
        ("std", "std"),
        ("standard", "std"),
        ("go", "std"),
        ("logrus", "logrus"),
        ("sugar", "zap"),
        ("zap", "zap"),
        ("", "zap"),
    ];
    for (name, expected) in cases {
        assert_eq!(ctx.new_logger(&config(name)).backend_name(), expected, "{name}");
    }
}

#[test]
fn unknown_backend_falls_back_to_default() {
    let ctx = LogContext::new();
    let logger = ctx.new_logger(&config("zpa"));
    assert_eq!(logger.backend_name(), Builtin::DEFAULT.as_str());
}

#[test]
fn registered_builder_overrides_builtin_name() {
    let ctx = LogContext::new();
    assert_eq!(ctx.new_logger(&config("logrus")).backend_name(), "logrus");

    ctx.register_builder("logrus", |config, trace| {
        Box::new(StdLogger::from_config(config, trace))
    });

    assert_eq!(ctx.new_logger(&config("logrus")).backend_name(), "std");
}

#[test]
fn override_applies_to_every_spelling_of_the_builtin_name() {
    let ctx = LogContext::new();
    ctx.register_builder("zap", |config, trace| {
        Box::new(StdLogger::from_config(config, trace))
    });

    for name in ["zap", "ZAP", " zap", "Zap\t"] {
        assert_eq!(ctx.new_logger(&config(name)).backend_name(), "std", "{name:?}");
    }
}

#[test]
fn mixed_case_registration_matches_lowercase_config() {
    let ctx = LogContext::new();
    ctx.register_builder("Logrus", |_, _| Box::new(DummyLogger::new()));

    assert_eq!(ctx.new_logger(&config("logrus")).backend_name(), "dummy");
}

#[test]
fn registered_builder_handles_custom_names() {
    let ctx = LogContext::new();
    ctx.register_builder("silent", |_, _| Box::new(DummyLogger::new()));

    assert!(ctx.registry().contains("silent"));
    assert!(ctx.builder("silent").is_some());
    assert_eq!(ctx.new_logger(&config("silent")).backend_name(), "dummy");
}

#[test]
fn off_level_skips_registered_builders() {
    let ctx = LogContext::new();
    ctx.register_builder("custom", |config, trace| {
        Box::new(StdLogger::from_config(config, trace))
    });

    let cfg = LoggerConfig {
        level: "off".to_string(),
        ..config("custom")
    };
    assert_eq!(ctx.new_logger(&cfg).backend_name(), "dummy");
}

#[test]
fn builders_receive_the_context_trace_flag() {
    let ctx = LogContext::new();
    ctx.register_builder("std", |config, trace| {
        Box::new(StdLogger::from_config(config, trace))
    });
    let cfg = LoggerConfig {
        level: "trace".to_string(),
        ..config("std")
    };
    let logger = ctx.new_logger(&cfg);

    assert!(!logger.is_enabled(logfacade::Level::Trace));
    ctx.trace_flag().start();
    assert!(logger.is_enabled(logfacade::Level::Trace));
}

#[test]
fn contexts_are_isolated() {
    let a = LogContext::new();
    let b = LogContext::new();
    a.register_builder("only-in-a", |_, _| Box::new(DummyLogger::new()));
    a.trace_flag().start();

    assert!(b.registry().names().is_empty());
    assert!(!b.trace_flag().is_enabled());
}
