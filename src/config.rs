//! Configuration management

use std::path::Path;

use app_core::PatientProfile;
use app_ui::Route;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tracing filter, overridden by `RUST_LOG`
pub const DEFAULT_LOG_FILTER: &str = "info,nexo_app=debug";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`AppConfig`]
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// `start_route` names no outer route
    #[error("Invalid start route: {0}")]
    InvalidStartRoute(String),
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Outer route the session starts at
    pub start_route: String,

    /// Patient shown on the dashboard
    pub patient_name: String,

    /// Show labels under the bottom bar icons
    pub show_tab_labels: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            start_route: Route::START.to_string(),
            patient_name: app_core::sample_patient().display_name,
            show_tab_labels: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Load from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.start()?;
        Ok(config)
    }

    /// Resolved start route
    pub fn start(&self) -> Result<Route> {
        Route::from_name(&self.start_route)
            .map_err(|_| ConfigError::InvalidStartRoute(self.start_route.clone()))
    }

    /// Patient profile for the dashboard
    pub fn patient(&self) -> PatientProfile {
        PatientProfile::new(self.patient_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.start().unwrap(), Route::Welcome);
        assert_eq!(config.log_filter, "info,nexo_app=debug");
        assert_eq!(config.patient().greeting(), "Hola, María");
        assert!(config.show_tab_labels);
        assert_eq!(AppConfig::load(None).unwrap(), config);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"patient_name": "Jorge Andrade"}"#).unwrap();
        assert_eq!(config.patient_name, "Jorge Andrade");
        assert_eq!(config.start_route, "welcome");
        assert!(config.show_tab_labels);
    }

    #[test]
    fn test_invalid_start_route_rejected() {
        let err = AppConfig::from_json(r#"{"start_route": "perfil"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStartRoute(ref r) if r == "perfil"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
