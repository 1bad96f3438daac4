//! UI components for interactive mode
//!
//! This module contains reusable UI components for the interactive interface.

pub mod monogram;
pub mod navbar;
pub mod page_view;
pub mod status_line;

pub use monogram::Monogram;
pub use navbar::{NavItem, Navbar};
pub use page_view::PageView;
pub use status_line::StatusLine;
