//! Site configuration types for folio core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Product name used as the title prefix
pub const DEFAULT_PRODUCT_NAME: &str = "M. Green";

/// Route key used whenever a path cannot be resolved
pub const DEFAULT_ROUTE_KEY: &str = "home";

/// Upper bound accepted for the leave duration
const MAX_LEAVE_DURATION_MS: u64 = 10_000;

const LOCATION_FILE_NAME: &str = "location";
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// A fully resolved site configuration ready for use by core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Product name shown before every page title
    pub product_name: String,
    /// Route key used for empty and unknown paths
    pub default_route: String,
    /// Length of the leaving phase in milliseconds
    pub leave_duration_ms: u64,
    /// File holding the persisted location fragment
    #[serde(default)]
    pub location_file: Option<PathBuf>,
    /// File holding user preferences (theme)
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

impl SiteConfig {
    /// Leave duration as a `Duration`
    pub fn leave_duration(&self) -> Duration {
        Duration::from_millis(self.leave_duration_ms)
    }

    /// Set the product name
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Set the leave duration in milliseconds
    pub fn with_leave_duration_ms(mut self, ms: u64) -> Self {
        self.leave_duration_ms = ms;
        self
    }

    /// Location file, falling back to `<config_dir>/folio/location`
    pub fn location_path(&self) -> PathBuf {
        self.location_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join(LOCATION_FILE_NAME))
    }

    /// Preferences file, falling back to `<config_dir>/folio/preferences.json`
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join(PREFERENCES_FILE_NAME))
    }

    fn data_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("folio");
        path
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.product_name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "product_name".to_string(),
            });
        }

        if self.default_route.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "default_route".to_string(),
            });
        }

        if self.default_route.contains(['/', '?', '#']) {
            return Err(ConfigError::InvalidValue {
                field: "default_route".to_string(),
                value: self.default_route.clone(),
            });
        }

        if self.leave_duration_ms > MAX_LEAVE_DURATION_MS {
            return Err(ConfigError::InvalidValue {
                field: "leave_duration_ms".to_string(),
                value: self.leave_duration_ms.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            default_route: DEFAULT_ROUTE_KEY.to_string(),
            leave_duration_ms: crate::timing::LEAVE_DURATION.as_millis() as u64,
            location_file: None,
            preferences_file: None,
        }
    }
}
