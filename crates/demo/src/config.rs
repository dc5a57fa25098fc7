//! Demo configuration loaded from environment variables.

use std::str::FromStr;

/// How log lines are formatted on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// How the final report is printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_format(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "text" => Some(false),
        "json" => Some(true),
        _ => None,
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_format(s) {
            Some(true) => Ok(Self::Json),
            Some(false) => Ok(Self::Text),
            None => Err(format!("unknown log format: {s}")),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_format(s) {
            Some(true) => Ok(Self::Json),
            Some(false) => Ok(Self::Text),
            None => Err(format!("unknown output format: {s}")),
        }
    }
}

/// Demo configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `text` or `json` log lines (default: `text`)
/// - `OUTPUT_FORMAT`: `text` or `json` report (default: `text`)
/// - `PRICE_MARKUP`: multiplier applied to projected prices (default: `1.1`)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub output_format: OutputFormat,
    pub price_markup: f64,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    ///
    /// Missing or unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
            output_format: lookup("OUTPUT_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.output_format),
            price_markup: lookup("PRICE_MARKUP")
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|m| m.is_finite())
                .unwrap_or(defaults.price_markup),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            output_format: OutputFormat::Text,
            price_markup: 1.1,
        }
    }
}
