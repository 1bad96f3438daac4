//! Theme preference
//!
//! The light/dark preference is stored under a fixed key in a small JSON
//! preferences file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Storage key of the theme preference
pub const THEME_STORAGE_KEY: &str = "THEME";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of the root presentation attribute
    pub fn as_attribute(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attribute())
    }
}

/// Theme preference backed by a preferences file
#[derive(Debug, Clone)]
pub struct ThemeStore {
    theme: Theme,
    path: PathBuf,
}

impl ThemeStore {
    /// Load the preference; a missing or unreadable file yields the default
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let preferences = read_preferences(&path).await?;

        let theme = match preferences.get(THEME_STORAGE_KEY) {
            Some(value) => Theme::from_attribute(value).unwrap_or_else(|| {
                warn!("Ignoring unknown theme '{}'", value);
                Theme::default()
            }),
            None => Theme::default(),
        };
        debug!("Theme preference: {}", theme);

        Ok(Self { theme, path })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flip the theme and persist it
    pub async fn toggle(&mut self) -> Result<Theme> {
        self.set(self.theme.toggled()).await?;
        Ok(self.theme)
    }

    /// Set the theme and persist it, keeping other preferences intact
    pub async fn set(&mut self, theme: Theme) -> Result<()> {
        let mut preferences = read_preferences(&self.path).await?;
        preferences.insert(
            THEME_STORAGE_KEY.to_string(),
            theme.as_attribute().to_string(),
        );

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&preferences)?;
        fs::write(&self.path, content).await?;

        self.theme = theme;
        Ok(())
    }
}

async fn read_preferences(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!("Ignoring unreadable preferences {}: {}", path.display(), e);
        BTreeMap::new()
    }))
}
