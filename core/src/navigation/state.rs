//! Navigation state
//!
//! The state is a tagged value, so a pending path exists only while a
//! transition is in flight.

/// What is rendered, and what is about to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    /// No transition in flight
    Idle { active: String },
    /// Exit animation window; `pending` is committed when it elapses
    Leaving { active: String, pending: String },
}

impl NavigationState {
    /// Create an idle state on the given path
    pub fn idle(active: impl Into<String>) -> Self {
        NavigationState::Idle {
            active: active.into(),
        }
    }

    /// Path currently committed and rendered
    pub fn active_path(&self) -> &str {
        match self {
            NavigationState::Idle { active } | NavigationState::Leaving { active, .. } => active,
        }
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self, NavigationState::Leaving { .. })
    }

    /// Path that will be committed when the leaving phase ends
    pub fn pending_path(&self) -> Option<&str> {
        match self {
            NavigationState::Idle { .. } => None,
            NavigationState::Leaving { pending, .. } => Some(pending),
        }
    }

    /// Pending path while leaving, otherwise the active path
    pub fn target_path(&self) -> &str {
        self.pending_path().unwrap_or_else(|| self.active_path())
    }
}
