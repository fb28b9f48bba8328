//! Configuration file handling: the JSON settings that shape the generated pages.

use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::AppError;
use crate::glossary::DuplicatePolicy;

/// Settings read from the JSON config file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Title and heading of the index page
    #[serde(default = "default_index_title")]
    pub index_title: String,

    /// Font color of the heading on each term page
    #[serde(default = "default_heading_color")]
    pub heading_color: String,

    /// Escape `&`, `<`, `>` and `"` in rendered text
    #[serde(default)]
    pub escape_html: bool,

    /// Handling of terms defined more than once
    #[serde(default)]
    pub duplicate_terms: DuplicatePolicy,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_index_title() -> String {
    "Glossary".to_string()
}

fn default_heading_color() -> String {
    "red".to_string()
}

impl Config {
    /// Load the configuration at `path`, or write and return the default one if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.index_title.trim().is_empty() {
            return Err(AppError::Config("index_title must not be empty".to_string()));
        }

        if self.heading_color.trim().is_empty() {
            return Err(AppError::Config("heading_color must not be empty".to_string()));
        }

        // The color lands inside an attribute value
        if self.heading_color.contains(['"', '<', '>']) {
            return Err(AppError::Config(format!(
                "heading_color contains characters not allowed in an attribute: {}",
                self.heading_color
            )));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            index_title: default_index_title(),
            heading_color: default_heading_color(),
            escape_html: false,
            duplicate_terms: DuplicatePolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}
