//! Route listing command

use crate::config::CliConfigLoader;
use crate::site;
use anyhow::Result;
use colored::Colorize;
use tracing::info;

/// List registered routes in navigation order
pub async fn routes_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    let routes = site::route_table(&config)?;
    info!("Listing {} routes", routes.len());

    for (i, route) in routes.iter().enumerate() {
        let icon = route.meta.icon.as_deref().unwrap_or(" ");
        let marker = if route.key == *routes.default_key() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "{} {} {:<10} {}{}",
            (i + 1).to_string().dimmed(),
            icon,
            route.key.to_string().bold(),
            route.title().unwrap_or(&route.name),
            marker
        );
    }

    Ok(())
}
