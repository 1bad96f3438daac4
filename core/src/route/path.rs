//! Raw path decomposition
//!
//! A raw navigation string such as `projects/42?tab=overview` decomposes
//! into a base route key, one positional parameter and a query map.
//! Only the second path segment is bound (to `id`); later segments are
//! ignored. Query pairs are form-url-decoded and the last occurrence of a
//! duplicate key wins.

use std::collections::HashMap;

/// Name of the single positional parameter slot
pub const ID_PARAM: &str = "id";

/// Structured view of a raw navigation string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReference {
    /// Route key named by the first segment
    pub base: String,
    /// Positional parameters by slot name
    pub params: HashMap<String, String>,
    /// Decoded query pairs
    pub query: HashMap<String, String>,
}

impl PathReference {
    /// Parse a raw path, using `default_key` when the base segment is empty
    pub fn parse(raw: &str, default_key: &str) -> Self {
        let raw = strip_fragment_prefix(raw);
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let mut segments = path.split('/');
        let base = match segments.next() {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => default_key.to_string(),
        };

        let mut params = HashMap::new();
        if let Some(id) = segments.next().filter(|s| !s.is_empty()) {
            params.insert(ID_PARAM.to_string(), id.to_string());
        }

        let query = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .filter(|(key, _)| !key.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            base,
            params,
            query,
        }
    }

    /// Value of a positional parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Value of the `id` slot
    pub fn id(&self) -> Option<&str> {
        self.param(ID_PARAM)
    }

    /// Value of a query key
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

/// Drop a leading `#` and any leading `/` from a persisted fragment
pub fn strip_fragment_prefix(raw: &str) -> &str {
    let raw = raw.trim();
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    raw.trim_start_matches('/')
}
