//! Navigation state machine and its collaborators
//!
//! This module provides the machine that owns the active path, the
//! persisted location stores it reads and writes, and the document
//! interface it retitles and scrolls.

pub mod document;
pub mod location;
pub mod machine;
pub mod state;

// Re-export commonly used types
pub use document::{compose_title, DocumentHost, NullDocument, ScrollBehavior};
pub use location::{FileLocation, LocationStore, MemoryLocation, SessionHistory};
pub use machine::{CurrentRoute, NavigationBuilder, NavigationStateMachine};
pub use state::NavigationState;
