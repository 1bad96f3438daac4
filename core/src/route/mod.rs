//! Route registry and path parsing
//!
//! This module provides the static route table consumed by the
//! navigation state machine, the deferred view loader and the raw
//! path decomposition.

pub mod loader;
pub mod path;
pub mod route;
pub mod table;

// Re-export commonly used types
pub use loader::ViewLoader;
pub use path::{strip_fragment_prefix, PathReference, ID_PARAM};
pub use route::{RouteDescriptor, RouteKey, RouteMeta};
pub use table::{RouteTable, RouteTableBuilder, RouteTableResult};
