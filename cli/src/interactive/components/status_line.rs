//! Status line component
//!
//! Shows the document title, the transition in flight and key hints.

use crate::interactive::palette::{rgb, Palette};
use folio_core::{NavigationState, Theme};
use iocraft::prelude::*;

const NAV_HINTS: &str = "1-4 jump · ←/→ cycle · [/] project";
const APP_HINTS: &str = "t theme · q quit";

/// Key hints, listing history keys only when they can move
pub fn key_hints(can_go_back: bool, can_go_forward: bool) -> String {
    let history = match (can_go_back, can_go_forward) {
        (true, true) => Some("b/f history"),
        (true, false) => Some("b back"),
        (false, true) => Some("f forward"),
        (false, false) => None,
    };
    match history {
        Some(history) => format!("{} · {} · {}", NAV_HINTS, history, APP_HINTS),
        None => format!("{} · {}", NAV_HINTS, APP_HINTS),
    }
}

/// Text describing the machine state
pub fn describe_state(state: &NavigationState) -> String {
    match state {
        NavigationState::Idle { active } => format!("● {}", active),
        NavigationState::Leaving { active, pending } => format!("◐ {} → {}", active, pending),
    }
}

#[derive(Default, Props)]
pub struct StatusLineProps {
    pub title: String,
    pub state: Option<NavigationState>,
    pub theme: Theme,
    /// Last notice, such as a failed history move
    pub notice: Option<String>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub palette: Palette,
}

#[component]
pub fn StatusLine(_hooks: Hooks, props: &StatusLineProps) -> impl Into<AnyElement<'static>> {
    let palette = props.palette;
    let state = props
        .state
        .as_ref()
        .map(describe_state)
        .unwrap_or_default();
    let leaving = props.state.as_ref().is_some_and(NavigationState::is_leaving);

    element! {
        View(key: "status-line", flex_direction: FlexDirection::Column, padding_left: 1, padding_right: 1) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                Text(content: props.title.clone(), color: rgb(palette.foreground), weight: Weight::Bold)
                Text(
                    content: format!("{} · {}", state, props.theme),
                    color: if leaving { rgb(palette.accent) } else { rgb(palette.muted) },
                )
            }
            #(props.notice.as_ref().map(|notice| element! {
                Text(content: notice.clone(), color: Color::Yellow)
            }))
            Text(content: key_hints(props.can_go_back, props.can_go_forward), color: rgb(palette.muted))
        }
    }
}
