//! CLI command implementations

pub mod current;
pub mod go;
pub mod interactive;
pub mod routes;
pub mod theme;

pub use current::current_command;
pub use go::go_command;
pub use interactive::interactive_command;
pub use routes::routes_command;
pub use theme::theme_command;

use crate::site::{self, Page};
use anyhow::{Context, Result};
use folio_core::{FileLocation, NavigationStateMachine, SiteConfig};
use std::sync::Arc;

/// Initialize a machine against the persisted location file
async fn file_backed_machine(config: &SiteConfig) -> Result<NavigationStateMachine<Page>> {
    let routes = site::route_table(config)?;
    NavigationStateMachine::builder(routes)
        .config(config)
        .location(Arc::new(FileLocation::new(config.location_path())))
        .initialize()
        .await
        .context("Failed to initialize navigation")
}
