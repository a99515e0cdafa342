//! Dashboard configuration, read from a YAML file.
//!
//! Every key is optional; missing keys take the defaults below.

use crate::error::Result;
use log::info;
use serde::{Deserialize, Serialize};
use shared::{Locale, WeekStart};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Locale for date display and month labels
    pub locale: Locale,
    pub currency_symbol: String,
    /// First column of the picker grid
    pub week_starts_on: WeekStart,
    /// Raise the default log filter to debug
    pub debug_logging: bool,
    /// Prefix of exported CSV file names
    pub export_filename_prefix: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: Locale::PtBr,
            currency_symbol: "R$".to_string(),
            week_starts_on: WeekStart::Sunday,
            debug_logging: false,
            export_filename_prefix: "despesas".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        info!("⚙️ Loading dashboard config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text; an empty document yields the defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Default log filter for this configuration
    pub fn log_filter(&self) -> &'static str {
        if self.debug_logging {
            "debug"
        } else {
            "info"
        }
    }
}
