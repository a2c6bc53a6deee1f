//! Configuration management for resultweb
//!
//! This module handles loading, validation, and management of
//! resultweb configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page title
    #[serde(default = "default_title")]
    pub title: String,
    /// Stylesheet linked from the page head
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            stylesheet: default_stylesheet(),
        }
    }
}

fn default_title() -> String {
    "Exercise Results".to_string()
}

fn default_stylesheet() -> String {
    "css/main.css".to_string()
}

/// How a column turns its cell value into HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Escaped text (the table default)
    #[default]
    Text,
    /// Timestamp in the fixed display format
    Timestamp,
    /// Dotted class name with the module path de-emphasized
    DottedName,
    /// Pass/fail badge
    Grade,
}

impl std::str::FromStr for ColumnKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ColumnKind::Text),
            "timestamp" => Ok(ColumnKind::Timestamp),
            "dotted_name" => Ok(ColumnKind::DottedName),
            "grade" => Ok(ColumnKind::Grade),
            _ => Err(format!("Invalid column kind: {}", s)),
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Timestamp => write!(f, "timestamp"),
            ColumnKind::DottedName => write!(f, "dotted_name"),
            ColumnKind::Grade => write!(f, "grade"),
        }
    }
}

/// One table column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Dotted key path into a result, e.g. `exercise.name`
    pub key: String,
    /// Header text
    pub title: String,
    #[serde(default)]
    pub kind: ColumnKind,
}

impl ColumnConfig {
    pub fn new(key: &str, title: &str, kind: ColumnKind) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            kind,
        }
    }
}

/// Results table settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_columns")]
    pub columns: Vec<ColumnConfig>,
    /// Show the most recent results first
    #[serde(default = "default_true")]
    pub newest_first: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            newest_first: true,
        }
    }
}

fn default_columns() -> Vec<ColumnConfig> {
    vec![
        ColumnConfig::new("create_time", "Time", ColumnKind::Timestamp),
        ColumnConfig::new("exercise.name", "Exercise", ColumnKind::Text),
        ColumnConfig::new("exercise.__class__", "Exercise Class", ColumnKind::DottedName),
        ColumnConfig::new("exercise.grader.__class__", "Grader", ColumnKind::DottedName),
        ColumnConfig::new("grade", "Grade", ColumnKind::Grade),
    ]
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError(e),
        })?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
            message: e.to_string(),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.table.columns.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "table.columns must list at least one column".to_string(),
            });
        }

        for (i, column) in self.table.columns.iter().enumerate() {
            if column.key.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("table.columns[{}].key", i),
                    reason: "Column key must not be empty".to_string(),
                });
            }
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }
}
