//! Terminal-backed document host
//!
//! The navigation machine retitles and scrolls through this type. Titles
//! go to the terminal window title; both updates are also broadcast so
//! the UI can react.

use crossterm::{execute, terminal::SetTitle};
use folio_core::{DocumentHost, ScrollBehavior, Theme};
use std::io::{stdout, IsTerminal};
use tokio::sync::broadcast;
use tracing::debug;

/// Events produced outside the component tree
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    TitleChanged(String),
    ScrollToOrigin(ScrollBehavior),
    ThemeChanged(Theme),
    Notice(String),
}

/// Document host writing to the controlling terminal
#[derive(Debug, Clone)]
pub struct TerminalDocument {
    ui_sender: broadcast::Sender<UiEvent>,
    set_window_title: bool,
}

impl TerminalDocument {
    /// Window titles are only written when stdout is a terminal
    pub fn new(ui_sender: broadcast::Sender<UiEvent>) -> Self {
        Self {
            ui_sender,
            set_window_title: stdout().is_terminal(),
        }
    }
}

impl DocumentHost for TerminalDocument {
    fn set_title(&self, title: &str) {
        if self.set_window_title {
            if let Err(e) = execute!(stdout(), SetTitle(title)) {
                debug!("Failed to set terminal title: {}", e);
            }
        }
        // No receivers is fine: the UI may not be mounted yet
        let _ = self.ui_sender.send(UiEvent::TitleChanged(title.to_string()));
    }

    fn scroll_to_origin(&self, behavior: ScrollBehavior) {
        let _ = self.ui_sender.send(UiEvent::ScrollToOrigin(behavior));
    }
}
