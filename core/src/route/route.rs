//! Route definitions and utilities
//!
//! This module defines the route key and descriptor types registered
//! in a [`RouteTable`](super::RouteTable).

use super::loader::ViewLoader;
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier naming a registered view
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey(pub String);

impl RouteKey {
    /// Create a new route key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for RouteKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Presentation metadata attached to a route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Page title, joined with the product name for the document title
    pub title: Option<String>,
    /// Icon shown for the route in its idle state
    pub icon: Option<String>,
    /// Filled icon variant shown while the route is active
    pub icon_fill: Option<String>,
}

/// A registered view: its key, display name, loader and metadata
///
/// Descriptors are immutable after registration.
#[derive(Debug)]
pub struct RouteDescriptor<V> {
    /// Unique key of this route
    pub key: RouteKey,
    /// Human-readable name for navigation UI
    pub name: String,
    /// Deferred view factory
    pub loader: ViewLoader<V>,
    /// Title and icon metadata
    pub meta: RouteMeta,
    /// Whether this route asked to be the default route
    pub is_default: bool,
}

impl<V> RouteDescriptor<V> {
    /// Create a new descriptor with the given key, name and loader
    pub fn new(key: impl Into<RouteKey>, name: impl Into<String>, loader: ViewLoader<V>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            loader,
            meta: RouteMeta::default(),
            is_default: false,
        }
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    /// Set the icon pair (idle, active)
    pub fn with_icons(mut self, icon: impl Into<String>, icon_fill: impl Into<String>) -> Self {
        self.meta.icon = Some(icon.into());
        self.meta.icon_fill = Some(icon_fill.into());
        self
    }

    /// Mark this route as the default route
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Page title, if one is set and non-empty
    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref().filter(|t| !t.is_empty())
    }
}
