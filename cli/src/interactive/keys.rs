//! Key bindings of the interactive mode

use crate::site::PROJECTS_KEY;
use folio_core::PathReference;
use iocraft::prelude::KeyCode;

/// What a key press asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    Back,
    Forward,
    ToggleTheme,
    ScrollUp,
    ScrollDown,
    Quit,
}

/// Navigation facts a key press is interpreted against
#[derive(Debug, Clone, Copy)]
pub struct KeyContext<'a> {
    /// Registered route keys in order
    pub route_keys: &'a [String],
    /// Path the machine is heading to (pending while leaving, else active)
    pub target: &'a PathReference,
    /// Section ids of the projects page, empty until it has loaded
    pub project_ids: &'a [String],
}

pub fn action_for(code: KeyCode, ctx: &KeyContext<'_>) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('b') => Some(Action::Back),
        KeyCode::Char('f') => Some(Action::Forward),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            ctx.route_keys.get(index).cloned().map(Action::Navigate)
        }
        KeyCode::Left => cycle_route(ctx, -1).map(Action::Navigate),
        KeyCode::Right => cycle_route(ctx, 1).map(Action::Navigate),
        KeyCode::Char('[') => Some(Action::Navigate(step_project(ctx, -1))),
        KeyCode::Char(']') => Some(Action::Navigate(step_project(ctx, 1))),
        _ => None,
    }
}

fn cycle_route(ctx: &KeyContext<'_>, delta: isize) -> Option<String> {
    let len = ctx.route_keys.len() as isize;
    if len == 0 {
        return None;
    }
    let current = ctx
        .route_keys
        .iter()
        .position(|k| *k == ctx.target.base)
        .unwrap_or(0) as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    ctx.route_keys.get(next).cloned()
}

/// Next project detail path, wrapping at both ends
fn step_project(ctx: &KeyContext<'_>, delta: isize) -> String {
    let ids = ctx.project_ids;
    if ids.is_empty() {
        return PROJECTS_KEY.to_string();
    }

    let current = if ctx.target.base == PROJECTS_KEY {
        ctx.target.id().and_then(|id| ids.iter().position(|i| i == id))
    } else {
        None
    };
    let len = ids.len() as isize;
    let next = match current {
        Some(index) => (index as isize + delta).rem_euclid(len) as usize,
        None if delta < 0 => ids.len() - 1,
        None => 0,
    };
    format!("{}/{}", PROJECTS_KEY, ids[next])
}
