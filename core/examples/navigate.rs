//! Example demonstrating the navigation state machine
//!
//! This example shows:
//! 1. Building a route table with lazily loaded views
//! 2. Seeding the machine from an empty location
//! 3. Overlapping navigations where the last request wins
//! 4. Back navigation through a session history

use folio_core::navigation::{DocumentHost, ScrollBehavior};
use folio_core::{
    MemoryLocation, NavigationStateMachine, RouteDescriptor, RouteTable, SessionHistory,
    ViewLoader,
};
use std::sync::Arc;

/// Document that prints every update
struct PrintDocument;

impl DocumentHost for PrintDocument {
    fn set_title(&self, title: &str) {
        println!("  title  -> {}", title);
    }

    fn scroll_to_origin(&self, behavior: ScrollBehavior) {
        println!("  scroll -> origin ({:?})", behavior);
    }
}

fn page(key: &'static str) -> ViewLoader<String> {
    ViewLoader::new(move || async move { Ok(format!("<{} page>", key)) })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== folio Navigation Example ===\n");

    // Step 1: Route table
    let routes = RouteTable::builder()
        .route(RouteDescriptor::new("home", "Home", page("home")).with_title("Home"))
        .route(RouteDescriptor::new("projects", "Projects", page("projects")).with_title("Projects"))
        .route(RouteDescriptor::new("resume", "Resume", page("resume")).with_title("Resume"))
        .default_route("home")
        .build()?;

    // Step 2: Seed from an empty location
    println!("1. Initializing:");
    let history = Arc::new(SessionHistory::new(Arc::new(MemoryLocation::new())));
    let machine = NavigationStateMachine::builder(Arc::new(routes))
        .location(history.clone())
        .document(Arc::new(PrintDocument))
        .initialize()
        .await?;
    println!("  state  -> {:?}\n", machine.state());

    // Step 3: Overlapping requests
    println!("2. Navigating to projects, then resume before the commit:");
    machine.navigate("projects/42?tab=overview");
    println!("  state  -> {:?}", machine.state());
    machine.navigate("resume");
    println!("  state  -> {:?}", machine.state());
    machine.settled().await;
    println!("  state  -> {:?}", machine.state());

    let route = machine.current_route();
    println!("  view   -> {}\n", route.component().load().await?);

    // Step 4: Back navigation
    println!("3. Going back:");
    if history.back().await? {
        machine.on_external_location_change().await;
        machine.settled().await;
    }
    println!("  state  -> {:?}", machine.state());

    Ok(())
}
