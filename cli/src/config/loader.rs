//! Simple CLI configuration loader for folio
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./folio.json or ./.folio/config.json
//! 3. Git repository root: <repo_root>/.folio/config.json
//! 4. XDG config: $XDG_CONFIG_HOME/folio/config.json or ~/.config/folio/config.json
//! 5. Environment variables only (no files)

use anyhow::{anyhow, Context, Result};
use folio_core::SiteConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration file format (every field optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Product name shown before page titles
    pub product_name: Option<String>,
    /// Route used for empty and unknown paths
    pub default_route: Option<String>,
    /// Leaving phase length in milliseconds
    pub leave_duration_ms: Option<u64>,
    /// Location fragment file (supports ~)
    pub location_file: Option<String>,
    /// Preferences file (supports ~)
    pub preferences_file: Option<String>,
}

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    product_name_override: Option<String>,
    leave_ms_override: Option<u64>,
    location_file_override: Option<String>,
    preferences_file_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set product name override
    pub fn with_product_name_override(mut self, name: String) -> Self {
        self.product_name_override = Some(name);
        self
    }

    /// Set leave duration override
    pub fn with_leave_ms_override(mut self, ms: u64) -> Self {
        self.leave_ms_override = Some(ms);
        self
    }

    /// Set location file override
    pub fn with_location_file_override(mut self, path: String) -> Self {
        self.location_file_override = Some(path);
        self
    }

    /// Set preferences file override
    pub fn with_preferences_file_override(mut self, path: String) -> Self {
        self.preferences_file_override = Some(path);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<SiteConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(name) = &self.product_name_override {
            config.product_name = Some(name.clone());
        }
        if let Some(ms) = self.leave_ms_override {
            config.leave_duration_ms = Some(ms);
        }
        if let Some(path) = &self.location_file_override {
            config.location_file = Some(path.clone());
        }
        if let Some(path) = &self.preferences_file_override {
            config.preferences_file = Some(path.clone());
        }

        // Step 3: Resolve to final site config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. Git repository root
        if let Some(config) = self.try_load_git_root().await? {
            return Ok(config);
        }

        // 3. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 4. Environment variables only
        Ok(self.load_env_only())
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./folio.json first
        let folio_json = cwd.join("folio.json");
        if folio_json.exists() {
            return Ok(Some(self.load_file(&folio_json).await?));
        }

        // Try ./.folio/config.json
        let folio_dir_config = cwd.join(".folio").join("config.json");
        if folio_dir_config.exists() {
            return Ok(Some(self.load_file(&folio_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from git repository root
    async fn try_load_git_root(&self) -> Result<Option<RawConfig>> {
        if let Some(git_root) = self.find_git_root()? {
            let config_path = git_root.join(".folio").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("folio").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Build configuration from environment variables only
    fn load_env_only(&self) -> RawConfig {
        debug!("No config file found, using environment");
        RawConfig {
            product_name: std::env::var("FOLIO_PRODUCT_NAME").ok(),
            default_route: std::env::var("FOLIO_DEFAULT_ROUTE").ok(),
            leave_duration_ms: std::env::var("FOLIO_LEAVE_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok()),
            location_file: std::env::var("FOLIO_LOCATION_FILE").ok(),
            preferences_file: std::env::var("FOLIO_PREFERENCES_FILE").ok(),
        }
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find git repository root
    fn find_git_root(&self) -> Result<Option<PathBuf>> {
        let mut current = std::env::current_dir()?;

        loop {
            if current.join(".git").exists() {
                return Ok(Some(current));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else {
            dirs::home_dir().map(|home| home.join(".config"))
        }
    }

    /// Resolve raw config to SiteConfig
    fn resolve_config(&self, config: RawConfig) -> Result<SiteConfig> {
        let defaults = SiteConfig::default();

        let resolved = SiteConfig {
            product_name: config.product_name.unwrap_or(defaults.product_name),
            default_route: config.default_route.unwrap_or(defaults.default_route),
            leave_duration_ms: config
                .leave_duration_ms
                .unwrap_or(defaults.leave_duration_ms),
            location_file: config.location_file.as_deref().map(expand_path),
            preferences_file: config.preferences_file.as_deref().map(expand_path),
        };

        // Validate
        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

/// Expand `~` and environment variables in a configured path
fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(path).as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_from_config_file_override() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("site.json");
        tokio::fs::write(
            &file,
            r#"{ "product_name": "Studio", "leave_duration_ms": 200, "location_file": "/tmp/folio-loc" }"#,
        )
        .await
        .unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .await
            .unwrap();

        assert_eq!(config.product_name, "Studio");
        assert_eq!(config.leave_duration_ms, 200);
        assert_eq!(config.default_route, "home");
        assert_eq!(config.location_file, Some(PathBuf::from("/tmp/folio-loc")));
    }

    #[tokio::test]
    async fn test_directory_override_reads_config_json() {
        let dir = tempdir().unwrap();
        tokio::fs::write(
            dir.path().join("config.json"),
            r#"{ "product_name": "From Dir" }"#,
        )
        .await
        .unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .load()
            .await
            .unwrap();
        assert_eq!(config.product_name, "From Dir");
    }

    #[tokio::test]
    async fn test_flag_overrides_win() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("site.json");
        tokio::fs::write(&file, r#"{ "product_name": "Studio" }"#)
            .await
            .unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(file)
            .with_product_name_override("Flag".into())
            .with_leave_ms_override(50)
            .load()
            .await
            .unwrap();
        assert_eq!(config.product_name, "Flag");
        assert_eq!(config.leave_duration_ms, 50);
    }

    #[tokio::test]
    async fn test_invalid_values_are_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("site.json");
        tokio::fs::write(&file, r#"{ "default_route": "projects/1" }"#)
            .await
            .unwrap();

        let err = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }

    #[tokio::test]
    async fn test_missing_override_path_fails() {
        let err = CliConfigLoader::new()
            .with_config_override(PathBuf::from("/definitely/not/here.json"))
            .load()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/folio/location");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert_eq!(expand_path("/abs/path"), PathBuf::from("/abs/path"));
    }
}
