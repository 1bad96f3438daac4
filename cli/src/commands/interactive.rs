//! Interactive mode command

use crate::config::CliConfigLoader;
use crate::interactive::run_interactive;
use anyhow::Result;
use tracing::debug;

/// Start interactive mode
pub async fn interactive_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    debug!("Location file: {}", config.location_path().display());
    debug!("Preferences file: {}", config.preferences_path().display());

    run_interactive(config).await
}
