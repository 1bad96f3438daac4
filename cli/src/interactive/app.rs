//! Interactive application using iocraft
//!
//! The root component owns the UI state. It follows the navigation
//! machine through a watch receiver: entering `Leaving` fades the page
//! out, committing a path loads the new page and fades it in.

use crate::interactive::animation::{FadeDirection, PageFade, ScrollAnimation, UiAnimationConfig};
use crate::interactive::components::{Monogram, NavItem, Navbar, PageView, StatusLine};
use crate::interactive::document::{TerminalDocument, UiEvent};
use crate::interactive::keys::{action_for, Action, KeyContext};
use crate::interactive::palette::{rgb, Palette};
use crate::site::{self, Page, PROJECTS_KEY};
use anyhow::{Context, Result};
use folio_core::{
    FileLocation, LocationStore, NavigationStateMachine, PathReference, ScrollBehavior,
    SessionHistory, SiteConfig, Theme, ThemeStore,
};
use iocraft::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

/// Everything the root component needs, created before the UI mounts
#[derive(Clone)]
pub struct AppContext {
    pub machine: NavigationStateMachine<Page>,
    pub history: Arc<SessionHistory>,
    pub theme_store: Arc<Mutex<ThemeStore>>,
    pub initial_theme: Theme,
    pub ui_sender: broadcast::Sender<UiEvent>,
    pub ui_anim: UiAnimationConfig,
    pub runtime: Handle,
}

/// Run the interactive portfolio until the user quits
pub async fn run_interactive(config: SiteConfig) -> Result<()> {
    let routes = site::route_table(&config)?;
    let (ui_sender, _) = broadcast::channel(64);

    let backing: Arc<dyn LocationStore> = Arc::new(FileLocation::new(config.location_path()));
    let history = Arc::new(SessionHistory::new(backing));
    let machine = NavigationStateMachine::builder(routes)
        .config(&config)
        .location(history.clone())
        .document(Arc::new(TerminalDocument::new(ui_sender.clone())))
        .initialize()
        .await
        .context("Failed to initialize navigation")?;

    let theme_store = ThemeStore::load(config.preferences_path())
        .await
        .context("Failed to load preferences")?;

    let context = AppContext {
        machine: machine.clone(),
        history,
        initial_theme: theme_store.theme(),
        theme_store: Arc::new(Mutex::new(theme_store)),
        ui_sender,
        ui_anim: UiAnimationConfig::from_env(),
        runtime: Handle::current(),
    };

    element!(PortfolioApp(context: Some(context)))
        .render_loop()
        .await?;

    // Let a transition started just before quitting persist its location
    machine.settled().await;
    Ok(())
}

/// Section ids of the projects page, if it has been loaded
fn project_ids(machine: &NavigationStateMachine<Page>) -> Vec<String> {
    machine
        .routes()
        .resolve(PROJECTS_KEY)
        .and_then(|route| route.loader.get())
        .map(|page| page.sections.iter().map(|s| s.id.clone()).collect())
        .unwrap_or_default()
}

/// Move through session history, then let the machine follow the location
fn spawn_history_move(context: &AppContext, back: bool) {
    let history = context.history.clone();
    let machine = context.machine.clone();
    let ui_sender = context.ui_sender.clone();
    context.runtime.spawn(async move {
        let moved = if back {
            history.back().await
        } else {
            history.forward().await
        };
        match moved {
            Ok(true) => machine.on_external_location_change().await,
            Ok(false) => {
                let edge = if back { "start" } else { "end" };
                let _ = ui_sender.send(UiEvent::Notice(format!("Already at the {} of history", edge)));
            }
            Err(e) => {
                warn!("History move failed: {}", e);
                let _ = ui_sender.send(UiEvent::Notice(e.to_string()));
            }
        }
    });
}

/// Load the page of the active route and fade it in
async fn show_current(
    machine: &NavigationStateMachine<Page>,
    mut page: State<Option<Arc<Page>>>,
    mut page_error: State<Option<String>>,
    mut fade: State<PageFade>,
    enter: Duration,
) {
    let current = machine.current_route();
    match current.component().load().await {
        Ok(view) => {
            page.set(Some(view));
            page_error.set(None);
        }
        Err(e) => {
            warn!("Failed to load page '{}': {}", current.key(), e);
            page.set(None);
            page_error.set(Some(e.to_string()));
        }
    }
    fade.set(PageFade::new(FadeDirection::In, enter));
}

#[derive(Default, Props)]
pub struct PortfolioAppProps {
    pub context: Option<AppContext>,
}

/// Root component of the interactive mode
#[component]
pub fn PortfolioApp(mut hooks: Hooks, props: &PortfolioAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();

    let Some(context) = props.context.clone() else {
        return element! {
            View(padding: 1) {
                Text(content: "Navigation is not initialized", color: Color::Red)
            }
        };
    };

    let nav_state = hooks.use_state(|| context.machine.state());
    let title = hooks.use_state(|| context.machine.title());
    let page = hooks.use_state(|| None::<Arc<Page>>);
    let page_error = hooks.use_state(|| None::<String>);
    let fade = hooks.use_state(PageFade::settled);
    let scroll = hooks.use_state(|| 0usize);
    let scroll_anim = hooks.use_state(|| None::<ScrollAnimation>);
    let theme = hooks.use_state(|| context.initial_theme);
    let notice = hooks.use_state(|| None::<String>);
    let frame = hooks.use_state(|| 0u64);
    let should_exit = hooks.use_state(|| false);

    // Follow the navigation machine
    hooks.use_future({
        let machine = context.machine.clone();
        let enter = context.ui_anim.enter.duration();
        let mut nav_state = nav_state;
        let mut fade = fade;
        async move {
            let mut rx = machine.subscribe();
            show_current(&machine, page, page_error, fade, enter).await;

            while rx.changed().await.is_ok() {
                let state = rx.borrow_and_update().clone();
                let was_leaving = nav_state.read().is_leaving();
                let leaving = state.is_leaving();
                nav_state.set(state);

                if leaving && !was_leaving {
                    fade.set(PageFade::new(FadeDirection::Out, machine.leave_duration()));
                } else if !leaving {
                    show_current(&machine, page, page_error, fade, enter).await;
                }
            }
        }
    });

    // Document and background task events
    hooks.use_future({
        let ui_sender = context.ui_sender.clone();
        let scroll_duration = context.ui_anim.scroll.duration();
        let mut title = title;
        let mut scroll = scroll;
        let mut scroll_anim = scroll_anim;
        let mut theme = theme;
        let mut notice = notice;
        async move {
            let mut rx = ui_sender.subscribe();
            loop {
                match rx.recv().await {
                    Ok(UiEvent::TitleChanged(new_title)) => title.set(new_title),
                    Ok(UiEvent::ScrollToOrigin(ScrollBehavior::Smooth)) => {
                        let from = scroll.get();
                        if from > 0 {
                            scroll_anim.set(Some(ScrollAnimation::new(from, scroll_duration)));
                        }
                    }
                    Ok(UiEvent::ScrollToOrigin(ScrollBehavior::Instant)) => {
                        scroll_anim.set(None);
                        scroll.set(0);
                    }
                    Ok(UiEvent::ThemeChanged(new_theme)) => theme.set(new_theme),
                    Ok(UiEvent::Notice(message)) => notice.set(Some(message)),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!("UI event receiver skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    });

    // Frame ticker for fades and smooth scrolling
    hooks.use_future({
        let anim = context.ui_anim.clone();
        let mut scroll = scroll;
        let mut scroll_anim = scroll_anim;
        let mut frame = frame;
        async move {
            loop {
                tokio::time::sleep(anim.frame_interval()).await;

                let slots = page.read().as_ref().map_or(0, |p| p.sections.len());
                let mut animating = !fade.get().is_complete(anim.stagger, slots);

                if let Some(scrolling) = scroll_anim.get() {
                    scroll.set(scrolling.offset(anim.easing));
                    if scrolling.is_complete() {
                        scroll_anim.set(None);
                    } else {
                        animating = true;
                    }
                }

                if animating {
                    frame.set(frame.get().wrapping_add(1));
                }
            }
        }
    });

    hooks.use_terminal_events({
        let context = context.clone();
        let mut scroll = scroll;
        let mut scroll_anim = scroll_anim;
        let mut notice = notice;
        let mut should_exit = should_exit;
        move |event| {
            let TerminalEvent::Key(KeyEvent { code, kind, .. }) = event else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }

            let machine = &context.machine;
            let routes = machine.routes();
            let route_keys: Vec<String> = routes.iter().map(|r| r.key.to_string()).collect();
            let target = PathReference::parse(
                nav_state.read().target_path(),
                routes.default_key().as_str(),
            );
            let project_ids = project_ids(machine);
            let key_context = KeyContext {
                route_keys: &route_keys,
                target: &target,
                project_ids: &project_ids,
            };

            let Some(action) = action_for(code, &key_context) else {
                return;
            };
            notice.set(None);

            match action {
                Action::Navigate(path) => machine.navigate(&path),
                Action::Back => spawn_history_move(&context, true),
                Action::Forward => spawn_history_move(&context, false),
                Action::ToggleTheme => {
                    let theme_store = context.theme_store.clone();
                    let ui_sender = context.ui_sender.clone();
                    context.runtime.spawn(async move {
                        let mut store = theme_store.lock().await;
                        match store.toggle().await {
                            Ok(theme) => {
                                let _ = ui_sender.send(UiEvent::ThemeChanged(theme));
                            }
                            Err(e) => {
                                warn!("Failed to save theme: {}", e);
                                let _ = ui_sender.send(UiEvent::Notice(e.to_string()));
                            }
                        }
                    });
                }
                Action::ScrollUp => {
                    scroll_anim.set(None);
                    scroll.set(scroll.get().saturating_sub(1));
                }
                Action::ScrollDown => {
                    scroll_anim.set(None);
                    let max = page.read().as_ref().map_or(0, |p| p.line_count().saturating_sub(1));
                    scroll.set((scroll.get() + 1).min(max));
                }
                Action::Quit => should_exit.set(true),
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let palette = Palette::for_theme(theme.get());
    let state = nav_state.read().clone();
    let routes = context.machine.routes();
    let default_key = routes.default_key().as_str();
    let active = PathReference::parse(state.active_path(), default_key);
    let pending = state
        .pending_path()
        .map(|p| PathReference::parse(p, default_key).base);

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding: 1,
            background_color: rgb(palette.background),
        ) {
            Monogram(product_name: context.machine.product_name().to_string(), palette: palette)
            Navbar(
                items: NavItem::from_routes(routes.as_ref()),
                active: active.base.clone(),
                pending: pending,
                palette: palette,
            )
            View(flex_grow: 1.0, margin_top: 1, margin_bottom: 1) {
                PageView(
                    page: page.read().clone(),
                    error: page_error.read().clone(),
                    focus: active.id().map(str::to_string),
                    scroll: scroll.get(),
                    fade: Some(fade.get()),
                    animation: context.ui_anim.clone(),
                    palette: palette,
                )
            }
            StatusLine(
                title: title.read().clone(),
                state: Some(state),
                theme: theme.get(),
                notice: notice.read().clone(),
                can_go_back: context.history.can_go_back(),
                can_go_forward: context.history.can_go_forward(),
                palette: palette,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::MemoryLocation;

    async fn machine() -> NavigationStateMachine<Page> {
        let routes = site::route_table(&SiteConfig::default()).unwrap();
        NavigationStateMachine::builder(routes)
            .location(Arc::new(MemoryLocation::new()))
            .initialize()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_project_ids_appear_after_load() {
        let machine = machine().await;
        assert!(project_ids(&machine).is_empty());

        machine
            .routes()
            .resolve(PROJECTS_KEY)
            .unwrap()
            .loader
            .load()
            .await
            .unwrap();
        assert_eq!(project_ids(&machine), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_app_props_default() {
        let props = PortfolioAppProps::default();
        assert!(props.context.is_none());
    }
}
