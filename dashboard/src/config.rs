//! Dashboard configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::DashboardError;
use votelens_utils::LogFormat;

/// Configuration for the dashboard and its components.
///
/// Can be loaded from a TOML file via [`DashboardConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Title above the vote-weight chart.
    #[serde(default = "default_chart_title")]
    pub chart_title: String,

    /// Title above the delegate roster.
    #[serde(default = "default_roster_title")]
    pub roster_title: String,

    /// Category colors handed to the chart renderer, in branch order.
    #[serde(default = "default_chart_colors")]
    pub chart_colors: Vec<String>,

    /// Unit shown in chart tooltips.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Block explorer base URL for roster row links.
    #[serde(default = "default_explorer_base_url")]
    pub explorer_base_url: String,

    /// Placeholder grid rows while the roster loads.
    #[serde(default = "default_placeholder_rows")]
    pub placeholder_rows: usize,

    /// Placeholder grid columns while the roster loads.
    #[serde(default = "default_placeholder_columns")]
    pub placeholder_columns: usize,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_chart_title() -> String {
    "Vote weight distribution".to_string()
}

fn default_roster_title() -> String {
    "Recognized delegates".to_string()
}

fn default_chart_colors() -> Vec<String> {
    ["#1aab9b", "#f4b731", "#447afb", "#9bc7fa", "#ff8237", "#c4c4c4"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_currency_symbol() -> String {
    "MKR".to_string()
}

fn default_explorer_base_url() -> String {
    votelens_roster::DEFAULT_EXPLORER.to_string()
}

fn default_placeholder_rows() -> usize {
    votelens_roster::PLACEHOLDER_ROWS
}

fn default_placeholder_columns() -> usize {
    votelens_roster::PLACEHOLDER_COLUMNS
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DashboardError::Config(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, DashboardError> {
        toml::from_str(s).map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, DashboardError> {
        toml::to_string_pretty(self).map_err(|e| DashboardError::Config(e.to_string()))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            chart_title: default_chart_title(),
            roster_title: default_roster_title(),
            chart_colors: default_chart_colors(),
            currency_symbol: default_currency_symbol(),
            explorer_base_url: default_explorer_base_url(),
            placeholder_rows: default_placeholder_rows(),
            placeholder_columns: default_placeholder_columns(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
