//! # folio Core
//!
//! Core library for folio - a portfolio site with animated page transitions.
//!
//! This library provides the route table, the navigation state machine that
//! sequences exit and enter animations around every route change, the
//! transition timing vocabulary and the theme preference.

// Core modules
pub mod config;
pub mod error;
pub mod navigation;
pub mod route;
pub mod theme;
pub mod timing;

// Re-export commonly used types
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use navigation::{
    CurrentRoute, DocumentHost, FileLocation, LocationStore, MemoryLocation, NavigationState,
    NavigationStateMachine, ScrollBehavior, SessionHistory,
};
pub use route::{PathReference, RouteDescriptor, RouteKey, RouteMeta, RouteTable, ViewLoader};
pub use theme::{Theme, ThemeStore};

/// Current version of the folio-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing on stderr with a filter directive such as `"info"`
///
/// `RUST_LOG` takes precedence when it is set.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
