//! Current route command

use super::file_backed_machine;
use crate::config::CliConfigLoader;
use anyhow::Result;
use colored::Colorize;

/// Print the decomposed current route
pub async fn current_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    let machine = file_backed_machine(&config).await?;
    let current = machine.current_route();

    println!("{}", machine.active_path().bold());
    println!("{} {}", "route:".dimmed(), current.key());
    println!("{} {}", "name:".dimmed(), current.descriptor.name);
    if let Some(id) = current.path.id() {
        println!("{} {}", "id:".dimmed(), id);
    }

    let mut query: Vec<_> = current.path.query.iter().collect();
    query.sort();
    for (key, value) in query {
        println!("{} {}={}", "query:".dimmed(), key, value);
    }

    println!("{} {}", "title:".dimmed(), machine.title());
    Ok(())
}
