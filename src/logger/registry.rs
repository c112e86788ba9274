//! Name → constructor mapping for logger backends, plus the built-in
//! fallback table consulted when a name isn't registered.

use super::{DummyLogger, Logger, StdLogger, StructuredLogger};
use crate::config::LoggerConfig;
use crate::fmt::Format;
use crate::trace::TraceFlag;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Constructor stored in the registry.
pub type BackendBuilder =
    Arc<dyn Fn(&LoggerConfig, &Arc<TraceFlag>) -> Box<dyn Logger> + Send + Sync>;

/// Canonical form of a backend name: trimmed and lowercased. Registered and
/// built-in names are both matched in this form.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Registered backends. Entries are never removed; re-registering a name
/// replaces the earlier constructor, built-in names included. Names are
/// stored in [`normalize_name`] form.
#[derive(Default)]
pub struct BackendRegistry {
    builders: RwLock<HashMap<String, BackendBuilder>>,
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl BackendRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the constructor for `name`.
    pub fn register_builder<F>(&self, name: impl Into<String>, builder: F)
    where
        F: Fn(&LoggerConfig, &Arc<TraceFlag>) -> Box<dyn Logger> + Send + Sync + 'static,
    {
        let name = normalize_name(&name.into());
        self.builders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, Arc::new(builder));
    }

    /// Cloned out so the lock isn't held while the constructor runs.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<BackendBuilder> {
        self.builders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&normalize_name(name))
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.builders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&normalize_name(name))
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .builders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

/// Built-in backends reachable without registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `dummy`, `none`, `off`
    Dummy,
    /// `std`, `standard`, `go`
    Std,
    /// `logrus`: structured, text lines.
    Logrus,
    /// `zap`, `sugar`, and the default: structured, JSON lines.
    Zap,
}

impl Builtin {
    /// Every name the fallback table recognizes.
    pub const NAMES: [&'static str; 9] = [
        "dummy", "none", "off", "std", "standard", "go", "logrus", "sugar", "zap",
    ];

    /// Backend used for empty and unknown names.
    pub const DEFAULT: Self = Self::Zap;

    /// Looks a name up in the fallback table. `None` means the name is not a
    /// built-in; callers fall back to [`Builtin::DEFAULT`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "dummy" | "none" | "off" => Some(Self::Dummy),
            "std" | "standard" | "go" => Some(Self::Std),
            "logrus" => Some(Self::Logrus),
            "" | "sugar" | "zap" => Some(Self::Zap),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dummy => "dummy",
            Self::Std => "std",
            Self::Logrus => "logrus",
            Self::Zap => "zap",
        }
    }

    #[must_use]
    pub fn build(self, config: &LoggerConfig, trace: &Arc<TraceFlag>) -> Box<dyn Logger> {
        match self {
            Self::Dummy => Box::new(DummyLogger::new()),
            Self::Std => Box::new(StdLogger::from_config(config, trace)),
            Self::Logrus => Box::new(StructuredLogger::from_config(
                "logrus",
                config,
                Format::Text,
                trace,
            )),
            Self::Zap => Box::new(StructuredLogger::from_config(
                "zap",
                config,
                Format::Json,
                trace,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in Builtin::NAMES {
            assert!(Builtin::from_name(name).is_some(), "{name}");
        }
    }

    #[test]
    fn empty_name_is_the_default() {
        assert_eq!(Builtin::from_name(""), Some(Builtin::DEFAULT));
        assert_eq!(Builtin::from_name("zpa"), None);
    }

    #[test]
    fn last_registration_wins() {
        let registry = BackendRegistry::new();
        registry.register_builder("x", |_, _| Box::new(DummyLogger::new()));
        registry.register_builder("x", |config, trace| {
            Box::new(StdLogger::from_config(config, trace))
        });
        let trace = Arc::new(TraceFlag::new());
        let build = registry.get("x").unwrap();
        assert_eq!(build(&LoggerConfig::default(), &trace).backend_name(), "std");
        assert_eq!(registry.names(), vec!["x".to_string()]);
    }

    #[test]
    fn registered_names_are_normalized() {
        let registry = BackendRegistry::new();
        registry.register_builder("  Custom ", |_, _| Box::new(DummyLogger::new()));
        assert!(registry.contains("custom"));
        assert!(registry.get("CUSTOM").is_some());
        assert_eq!(registry.names(), vec!["custom".to_string()]);
    }
}
