//! Minimal configuration module for folio core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{SiteConfig, DEFAULT_PRODUCT_NAME, DEFAULT_ROUTE_KEY};
