//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes a logger and its targets and can be loaded
//! from JSON:
//!
//! ```
//! use leveled_logger::core::config::LoggerConfig;
//! use leveled_logger::Logger;
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "name": "core",
//!     "verbose_level": "warning",
//!     "prefix": "[ENGINE]",
//!     "targets": [
//!         { "kind": "console", "add_colors": false }
//!     ]
//! }"#).unwrap();
//!
//! let (logger, handles) = Logger::from_config(&config).unwrap();
//! assert_eq!(logger.verbose_level(), 2);
//! assert_eq!(handles.len(), 1);
//! ```

use super::{
    error::{LoggerError, Result},
    logger::{Logger, TargetHandle},
    severity::SeverityLevel,
    target::Target,
};
use crate::targets::{ConsoleTarget, FileTarget, DEFAULT_LOG_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Threshold given either by name (`"warning"`) or as a raw integer (`2`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Value(i32),
    Name(String),
}

impl Threshold {
    pub fn resolve(&self) -> Result<i32> {
        match self {
            Threshold::Value(value) => Ok(*value),
            Threshold::Name(name) => name
                .parse::<SeverityLevel>()
                .map(SeverityLevel::value)
                .map_err(|e| LoggerError::config("verbose_level", e)),
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Value(SeverityLevel::Verbose.value())
    }
}

impl From<SeverityLevel> for Threshold {
    fn from(level: SeverityLevel) -> Self {
        Threshold::Value(level.value())
    }
}

fn enabled() -> bool {
    true
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

/// One target entry, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetSpec {
    Console {
        #[serde(default)]
        prefix: String,
        #[serde(default = "enabled")]
        add_colors: bool,
        #[serde(default = "enabled")]
        whole_message_color: bool,
        #[serde(default = "enabled")]
        add_time: bool,
        #[serde(default = "enabled")]
        add_thread_id: bool,
    },
    File {
        #[serde(default = "default_log_path")]
        path: PathBuf,
        #[serde(default)]
        append: bool,
        #[serde(default)]
        prefix: String,
        #[serde(default = "enabled")]
        add_time: bool,
        #[serde(default = "enabled")]
        add_thread_id: bool,
    },
}

impl TargetSpec {
    /// Construct the target; file open failures are reported, not returned
    pub fn build(&self) -> Box<dyn Target> {
        match self {
            TargetSpec::Console {
                prefix,
                add_colors,
                whole_message_color,
                add_time,
                add_thread_id,
            } => Box::new(
                ConsoleTarget::with_options(
                    *add_colors,
                    *whole_message_color,
                    *add_time,
                    *add_thread_id,
                )
                .with_prefix(prefix.as_str()),
            ),
            TargetSpec::File {
                path,
                append,
                prefix,
                add_time,
                add_thread_id,
            } => Box::new(
                FileTarget::with_options(path.clone(), *append, *add_time, *add_thread_id)
                    .with_prefix(prefix.as_str()),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub verbose_level: Threshold,
    /// Applied to every target after registration, overriding per-target prefixes
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub targets: Vec<TargetSpec>,
}

impl LoggerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.verbose_level.resolve()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Logger {
    /// Build a logger from a configuration
    ///
    /// Returns the handles of the configured targets in declaration order.
    pub fn from_config(config: &LoggerConfig) -> Result<(Logger, Vec<TargetHandle>)> {
        let threshold = config.verbose_level.resolve()?;
        let logger = match &config.name {
            Some(name) => Logger::named(name.as_str()),
            None => Logger::new(),
        };
        logger.set_verbose_level(threshold);

        let handles = config
            .targets
            .iter()
            .map(|spec| logger.add_boxed_target(spec.build()))
            .collect();

        if let Some(prefix) = &config.prefix {
            logger.set_prefix(prefix);
        }

        Ok((logger, handles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_threshold_forms() {
        assert_eq!(Threshold::Name("Error".into()).resolve().unwrap(), 3);
        assert_eq!(Threshold::Name("verbose".into()).resolve().unwrap(), -2);
        assert_eq!(Threshold::Value(-40).resolve().unwrap(), -40);
        assert!(Threshold::Name("chatty".into()).resolve().is_err());
    }

    #[test]
    fn test_defaults_from_empty_object() {
        let config = LoggerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());

        let (logger, handles) = Logger::from_config(&config).unwrap();
        assert_eq!(logger.verbose_level(), -2);
        assert!(handles.is_empty());
    }

    #[test]
    fn test_target_defaults() {
        let config =
            LoggerConfig::from_json_str(r#"{ "targets": [ { "kind": "file" }, { "kind": "console" } ] }"#)
                .unwrap();

        assert_eq!(
            config.targets[0],
            TargetSpec::File {
                path: PathBuf::from("logs/LogFile.log"),
                append: false,
                prefix: String::new(),
                add_time: true,
                add_thread_id: true,
            }
        );
        assert!(matches!(
            config.targets[1],
            TargetSpec::Console { add_colors: true, whole_message_color: true, .. }
        ));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            LoggerConfig::from_json_str(r#"{ "verbose_level": "loud" }"#),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            LoggerConfig::from_json_str(r#"{ "targets": [ { "kind": "syslog" } ] }"#),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_from_config_builds_targets_in_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("configured.log");

        let config = LoggerConfig {
            name: Some("client".to_string()),
            verbose_level: SeverityLevel::Info.into(),
            prefix: Some("[GAME]".to_string()),
            targets: vec![
                TargetSpec::Console {
                    prefix: String::new(),
                    add_colors: false,
                    whole_message_color: false,
                    add_time: false,
                    add_thread_id: false,
                },
                TargetSpec::File {
                    path: path.clone(),
                    append: false,
                    prefix: "[ignored]".to_string(),
                    add_time: false,
                    add_thread_id: false,
                },
            ],
        };

        let (logger, handles) = Logger::from_config(&config).unwrap();
        assert_eq!(logger.name(), Some("client"));
        assert_eq!(logger.handles(), handles);
        assert_eq!(
            logger.with_target(handles[1], |t| t.name().to_string()).as_deref(),
            Some("file")
        );

        logger.debug("filtered");
        logger.info("kept");
        drop(logger);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[GAME] [  INFO   ] kept\n"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = LoggerConfig {
            name: Some("core".to_string()),
            verbose_level: Threshold::Name("important".to_string()),
            prefix: None,
            targets: vec![TargetSpec::File {
                path: PathBuf::from("logs/core.log"),
                append: true,
                prefix: String::new(),
                add_time: true,
                add_thread_id: false,
            }],
        };

        let json = config.to_json_string().unwrap();
        assert_eq!(LoggerConfig::from_json_str(&json).unwrap(), config);
    }
}
