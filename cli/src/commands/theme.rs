//! Theme preference command

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use colored::Colorize;
use folio_core::ThemeStore;
use tracing::info;

/// Show the theme preference, flipping it first when `toggle` is set
pub async fn theme_command(config_loader: CliConfigLoader, toggle: bool) -> Result<()> {
    let config = config_loader.load().await?;
    let path = config.preferences_path();
    let mut store = ThemeStore::load(&path)
        .await
        .with_context(|| format!("Failed to load preferences: {}", path.display()))?;

    if toggle {
        let theme = store
            .toggle()
            .await
            .with_context(|| format!("Failed to save preferences: {}", path.display()))?;
        info!("Theme set to {}", theme);
    }

    println!("{}", store.theme().to_string().bold());
    Ok(())
}
