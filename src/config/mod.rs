//! Logger configuration record plus TOML and environment loading.
//!
//! The record is only ever borrowed by backend constructors. Level forcing from
//! debug/trace mode is computed by [`LoggerConfig::effective_level`] rather than
//! written back into the record.

use crate::internal;
use crate::level::Level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the single file produced by file-target logging.
pub const LOG_FILE_NAME: &str = "output.log";

/// Target value selecting file output; anything else means console.
pub const TARGET_FILE: &str = "file";

const ENV_PREFIX: &str = "LOGFACADE_";

/// Everything a backend constructor needs. An empty TOML table still yields a
/// working console logger at `info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Backend name looked up in the registry; empty selects the default backend.
    pub backend: String,
    /// Level name; unparseable values degrade to `info`.
    pub level: String,
    /// `"file"` for file output, anything else for console.
    pub target: String,
    /// Directory for `output.log`; `$VARS` and `~` are expanded.
    pub directory: String,
    /// Record format override (`text`, `json`, `plain`); empty uses the backend default.
    pub format: String,
    /// Raises the effective level to `trace`.
    pub trace_mode: bool,
    /// Raises the effective level to `debug`.
    pub debug_mode: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let directory = directories::ProjectDirs::from("", "", "logfacade").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            backend: String::new(),
            level: Level::Info.as_str().to_string(),
            target: "console".to_string(),
            directory,
            format: String::new(),
            trace_mode: false,
            debug_mode: false,
        }
    }
}

impl LoggerConfig {
    /// Loads the user's config file from the default location, falling back to
    /// defaults when it does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or its TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable, or not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Err(crate::Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        internal::debug(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(config)
    }

    /// Parses TOML where the fields sit either at the top level or inside a
    /// `[logger]` table, so the settings can live in a larger application file.
    ///
    /// # Errors
    /// Returns the TOML error for malformed input or mistyped fields.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        let mut table: toml::Table = content.parse()?;
        let section = match table.remove("logger") {
            Some(toml::Value::Table(section)) => section,
            _ => table,
        };
        Ok(toml::Value::Table(section).try_into()?)
    }

    /// `~/.config/logfacade/logfacade.toml` on Linux, the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("logfacade").join("logfacade.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Overrides fields from `LOGFACADE_*` environment variables.
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())
    }

    /// Variable lookup is injected so tests don't have to touch the process environment.
    #[must_use]
    pub fn apply_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup("BACKEND") {
            self.backend = backend;
        }
        if let Some(level) = lookup("LEVEL") {
            self.level = level;
        }
        if let Some(target) = lookup("TARGET") {
            self.target = target;
        }
        if let Some(directory) = lookup("DIR") {
            self.directory = directory;
        }
        if let Some(format) = lookup("FORMAT") {
            self.format = format;
        }
        if let Some(trace) = lookup("TRACE") {
            self.trace_mode = parse_flag(&trace);
        }
        if let Some(debug) = lookup("DEBUG") {
            self.debug_mode = parse_flag(&debug);
        }
        self
    }

    /// Configured level after debug/trace forcing.
    ///
    /// `off` wins over both modes. Debug mode raises anything quieter than
    /// `debug`; trace mode is checked afterwards and can raise further.
    #[must_use]
    pub fn effective_level(&self) -> Level {
        let mut level = Level::parse_or_default(&self.level);
        if level == Level::Off {
            return Level::Off;
        }
        if self.debug_mode && level < Level::Debug {
            level = Level::Debug;
        }
        if self.trace_mode && level < Level::Trace {
            level = Level::Trace;
        }
        level
    }

    #[must_use]
    pub fn wants_file(&self) -> bool {
        self.target.eq_ignore_ascii_case(TARGET_FILE)
    }

    /// Directory with environment variables and `~` expanded. Undefined
    /// variables leave the string untouched.
    #[must_use]
    pub fn resolved_directory(&self) -> PathBuf {
        let expanded = shellexpand::full(&self.directory)
            .map_or_else(|_| self.directory.clone(), std::borrow::Cow::into_owned);
        PathBuf::from(expanded)
    }

    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        self.resolved_directory().join(LOG_FILE_NAME)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing_accepts_common_truthy_values() {
        for value in ["1", "true", "YES", " on "] {
            assert!(parse_flag(value), "{value}");
        }
        for value in ["0", "false", "", "nope"] {
            assert!(!parse_flag(value), "{value}");
        }
    }

    #[test]
    fn target_comparison_ignores_case() {
        let config = LoggerConfig {
            target: "FILE".to_string(),
            ..LoggerConfig::default()
        };
        assert!(config.wants_file());
    }
}
