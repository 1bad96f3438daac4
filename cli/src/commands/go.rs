//! One-shot navigation command

use super::file_backed_machine;
use crate::config::CliConfigLoader;
use anyhow::Result;
use colored::Colorize;
use tracing::info;

/// Navigate to `path`, wait for the transition and report the result
pub async fn go_command(config_loader: CliConfigLoader, path: String) -> Result<()> {
    let config = config_loader.load().await?;
    let machine = file_backed_machine(&config).await?;

    let from = machine.active_path();
    machine.navigate(&path);
    if let Some(pending) = machine.pending_path() {
        info!(
            "Leaving '{}' for '{}' ({}ms)",
            from,
            pending,
            machine.leave_duration().as_millis()
        );
    }
    machine.settled().await;

    println!("{}", machine.active_path().bold());
    println!("{} {}", "title:".dimmed(), machine.title());
    Ok(())
}
