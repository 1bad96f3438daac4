//! Document collaborator
//!
//! The state machine touches the hosting document in exactly two ways:
//! it sets the title after each committed change and scrolls the
//! viewport back to the origin before the view swap.

/// How the viewport moves back to the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Host document receiving title and scroll updates
pub trait DocumentHost: Send + Sync {
    /// Replace the document title
    fn set_title(&self, title: &str);

    /// Scroll the viewport to its origin
    fn scroll_to_origin(&self, behavior: ScrollBehavior);
}

/// Document that ignores every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDocument;

impl DocumentHost for NullDocument {
    fn set_title(&self, _title: &str) {}

    fn scroll_to_origin(&self, _behavior: ScrollBehavior) {}
}

/// `<product> | <route title>`, or the bare product name without a title
pub fn compose_title(product_name: &str, route_title: Option<&str>) -> String {
    match route_title.filter(|t| !t.is_empty()) {
        Some(title) => format!("{} | {}", product_name, title),
        None => product_name.to_string(),
    }
}
