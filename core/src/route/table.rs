//! Static route registry
//!
//! A [`RouteTable`] maps route keys to their descriptors and names the
//! default route used for every unresolvable path.

use super::route::{RouteDescriptor, RouteKey};
use crate::error::RouteTableError;
use std::collections::HashMap;
use std::sync::Arc;

/// Type alias for route table construction results
pub type RouteTableResult<T> = Result<T, RouteTableError>;

/// Immutable registry of route descriptors
#[derive(Debug)]
pub struct RouteTable<V> {
    routes: HashMap<RouteKey, Arc<RouteDescriptor<V>>>,
    /// Keys in registration order
    order: Vec<RouteKey>,
    default_route: RouteKey,
}

impl<V> RouteTable<V> {
    /// Start building a route table
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Look up a route by key
    pub fn resolve(&self, key: &str) -> Option<&Arc<RouteDescriptor<V>>> {
        self.routes.get(key)
    }

    /// Look up a route by key, falling back to the default route
    pub fn resolve_or_default(&self, key: &str) -> &Arc<RouteDescriptor<V>> {
        self.resolve(key).unwrap_or_else(|| self.default_route())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.routes.contains_key(key)
    }

    /// Key of the default route
    pub fn default_key(&self) -> &RouteKey {
        &self.default_route
    }

    /// Descriptor of the default route
    pub fn default_route(&self) -> &Arc<RouteDescriptor<V>> {
        // Presence is checked by `RouteTableBuilder::build`
        &self.routes[&self.default_route]
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RouteDescriptor<V>>> + '_ {
        self.order.iter().map(move |key| &self.routes[key])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builder for [`RouteTable`]
pub struct RouteTableBuilder<V> {
    routes: Vec<RouteDescriptor<V>>,
    default_route: Option<RouteKey>,
}

impl<V> RouteTableBuilder<V> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            default_route: None,
        }
    }

    /// Register a route
    pub fn route(mut self, descriptor: RouteDescriptor<V>) -> Self {
        self.routes.push(descriptor);
        self
    }

    /// Set the default route explicitly
    pub fn default_route(mut self, key: impl Into<RouteKey>) -> Self {
        self.default_route = Some(key.into());
        self
    }

    /// Validate and build the table
    pub fn build(self) -> RouteTableResult<RouteTable<V>> {
        if self.routes.is_empty() {
            return Err(RouteTableError::NoRoutes);
        }

        // Explicit default, then the first route marked default, then the first route
        let default_route = self
            .default_route
            .or_else(|| {
                self.routes
                    .iter()
                    .find(|route| route.is_default)
                    .map(|route| route.key.clone())
            })
            .unwrap_or_else(|| self.routes[0].key.clone());

        let mut routes = HashMap::with_capacity(self.routes.len());
        let mut order = Vec::with_capacity(self.routes.len());
        for descriptor in self.routes {
            let key = descriptor.key.clone();
            if routes.contains_key(&key) {
                return Err(RouteTableError::DuplicateKey(key.0));
            }
            order.push(key.clone());
            routes.insert(key, Arc::new(descriptor));
        }

        if !routes.contains_key(&default_route) {
            return Err(RouteTableError::DefaultRouteMissing(default_route.0));
        }

        Ok(RouteTable {
            routes,
            order,
            default_route,
        })
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
