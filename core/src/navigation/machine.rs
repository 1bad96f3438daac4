//! Navigation state machine
//!
//! Owns the active path and drives the leaving phase around every
//! navigation. A request moves the machine from `Idle` to `Leaving`; a
//! single timer task then waits the leave duration, scrolls the document
//! to its origin, commits the pending path, updates the title and writes
//! the persisted location. Requests arriving while `Leaving` only replace
//! the pending path, so the last one wins.
//!
//! One machine is created per process by the application root and shared
//! by cloning the handle.

use super::document::{compose_title, DocumentHost, NullDocument, ScrollBehavior};
use super::location::{LocationStore, MemoryLocation};
use super::state::NavigationState;
use crate::config::{SiteConfig, DEFAULT_PRODUCT_NAME};
use crate::error::{LocationError, Result};
use crate::route::{
    strip_fragment_prefix, PathReference, RouteDescriptor, RouteKey, RouteMeta, RouteTable,
    ViewLoader,
};
use crate::timing::LEAVE_DURATION;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The active path joined with its route descriptor
pub struct CurrentRoute<V> {
    pub path: PathReference,
    pub descriptor: Arc<RouteDescriptor<V>>,
}

impl<V> CurrentRoute<V> {
    pub fn key(&self) -> &RouteKey {
        &self.descriptor.key
    }

    /// Deferred view of the route
    pub fn component(&self) -> &ViewLoader<V> {
        &self.descriptor.loader
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.descriptor.meta
    }
}

struct Shared<V> {
    routes: Arc<RouteTable<V>>,
    location: Arc<dyn LocationStore>,
    document: Arc<dyn DocumentHost>,
    product_name: String,
    leave_duration: Duration,
    state: watch::Sender<NavigationState>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
    runtime: Handle,
}

impl<V> Shared<V> {
    /// Normalize a raw path: unknown or empty bases become the default key
    ///
    /// Trailing slashes and an empty query are dropped so that `home/` and
    /// `home?` name the same path as `home`.
    fn normalize(&self, raw: &str) -> String {
        let cleaned = strip_fragment_prefix(raw);
        let default_key = self.routes.default_key().as_str();

        let (path, query) = cleaned.split_once('?').unwrap_or((cleaned, ""));
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return default_key.to_string();
        }

        let reference = PathReference::parse(path, default_key);
        if self.routes.contains(&reference.base) {
            if query.is_empty() {
                path.to_string()
            } else {
                format!("{}?{}", path, query)
            }
        } else {
            debug!(
                "Unknown route '{}', falling back to '{}'",
                reference.base, default_key
            );
            default_key.to_string()
        }
    }

    fn title_for(&self, path: &str) -> String {
        let path = PathReference::parse(path, self.routes.default_key().as_str());
        let route = self.routes.resolve_or_default(&path.base);
        compose_title(&self.product_name, route.title())
    }

    fn update_title(&self, path: &str) {
        let title = self.title_for(path);
        debug!("Document title: {}", title);
        self.document.set_title(&title);
    }

    async fn persist(&self, path: &str) {
        if let Err(e) = self.location.write(path).await {
            warn!("Failed to persist location '{}': {}", path, e);
        }
    }

    /// End the leaving phase: scroll, commit, retitle, persist
    async fn complete_transition(&self) {
        self.document.scroll_to_origin(ScrollBehavior::Smooth);

        let mut committed = None;
        self.state.send_if_modified(|state| {
            let NavigationState::Leaving { active, pending } = state else {
                return false;
            };
            let changed = *active != *pending;
            let pending = std::mem::take(pending);
            committed = Some((pending.clone(), changed));
            *state = NavigationState::Idle { active: pending };
            true
        });

        let Some((path, changed)) = committed else {
            return;
        };
        debug!("Committed transition to '{}'", path);

        if changed {
            self.update_title(&path);
        }
        self.persist(&path).await;
    }
}

/// Handle to the navigation state machine
pub struct NavigationStateMachine<V> {
    shared: Arc<Shared<V>>,
}

impl<V> Clone for NavigationStateMachine<V> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<V> NavigationStateMachine<V>
where
    V: Send + Sync + 'static,
{
    /// Start building a machine over a route table
    pub fn builder(routes: Arc<RouteTable<V>>) -> NavigationBuilder<V> {
        NavigationBuilder::new(routes)
    }

    /// Request a transition to `target`
    ///
    /// Never fails: an unknown base is replaced by the default route key.
    /// Returns immediately; the commit happens after the leave duration.
    pub fn navigate(&self, target: &str) {
        let target = self.shared.normalize(target);
        let mut start_timer = false;

        self.shared.state.send_if_modified(|state| match state {
            NavigationState::Idle { active } if *active == target => false,
            NavigationState::Idle { active } => {
                let active = std::mem::take(active);
                *state = NavigationState::Leaving {
                    active,
                    pending: target.clone(),
                };
                start_timer = true;
                true
            }
            NavigationState::Leaving { pending, .. } if *pending == target => false,
            NavigationState::Leaving { pending, .. } => {
                debug!("Replacing pending path '{}' with '{}'", pending, target);
                *pending = target.clone();
                true
            }
        });

        if !start_timer {
            return;
        }

        debug!(
            "Leaving for '{}' ({}ms)",
            target,
            self.shared.leave_duration.as_millis()
        );
        let shared = Arc::clone(&self.shared);
        let task = self.shared.runtime.spawn(async move {
            tokio::time::sleep(shared.leave_duration).await;
            shared.complete_transition().await;
        });

        let mut in_flight = self
            .shared
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        in_flight.retain(|task| !task.is_finished());
        in_flight.push(task);
    }

    /// Re-read the persisted location after it changed outside the application
    ///
    /// A location that differs from the active path goes through the same
    /// transition as [`navigate`](Self::navigate).
    pub async fn on_external_location_change(&self) {
        let candidate = match self.shared.location.read().await {
            Ok(Some(raw)) => {
                let candidate = self.shared.normalize(&raw);
                if candidate != raw {
                    // Store the normalized form so the commit matches it
                    if let Err(e) = self.shared.location.replace(&candidate).await {
                        warn!("Failed to rewrite location '{}': {}", raw, e);
                    }
                }
                candidate
            }
            Ok(None) => self.shared.routes.default_key().to_string(),
            Err(e) => {
                warn!("Failed to read location: {}", e);
                return;
            }
        };

        if candidate == self.active_path() {
            debug!("External location '{}' is already active", candidate);
            return;
        }

        debug!("External location change to '{}'", candidate);
        self.navigate(&candidate);
    }

    /// Wait until every started transition has committed and persisted
    pub async fn settled(&self) {
        loop {
            let tasks = std::mem::take(
                &mut *self
                    .shared
                    .in_flight
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner),
            );
            if tasks.is_empty() {
                return;
            }
            for task in tasks {
                if let Err(e) = task.await {
                    warn!("Transition task failed: {}", e);
                }
            }
        }
    }

    /// The active path joined with its descriptor, recomputed on every call
    pub fn current_route(&self) -> CurrentRoute<V> {
        let default_key = self.shared.routes.default_key().as_str();
        let path = PathReference::parse(&self.active_path(), default_key);
        let descriptor = Arc::clone(self.shared.routes.resolve_or_default(&path.base));
        CurrentRoute { path, descriptor }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> NavigationState {
        self.shared.state.borrow().clone()
    }

    pub fn active_path(&self) -> String {
        self.shared.state.borrow().active_path().to_string()
    }

    pub fn is_leaving(&self) -> bool {
        self.shared.state.borrow().is_leaving()
    }

    pub fn pending_path(&self) -> Option<String> {
        self.shared.state.borrow().pending_path().map(str::to_string)
    }

    /// Observe state changes
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.shared.state.subscribe()
    }

    /// Document title for the active path
    pub fn title(&self) -> String {
        self.shared.title_for(&self.active_path())
    }

    pub fn routes(&self) -> &Arc<RouteTable<V>> {
        &self.shared.routes
    }

    pub fn leave_duration(&self) -> Duration {
        self.shared.leave_duration
    }

    pub fn product_name(&self) -> &str {
        &self.shared.product_name
    }
}

/// Builder for [`NavigationStateMachine`]
pub struct NavigationBuilder<V> {
    routes: Arc<RouteTable<V>>,
    location: Option<Arc<dyn LocationStore>>,
    document: Option<Arc<dyn DocumentHost>>,
    product_name: String,
    leave_duration: Duration,
}

impl<V> NavigationBuilder<V>
where
    V: Send + Sync + 'static,
{
    pub fn new(routes: Arc<RouteTable<V>>) -> Self {
        Self {
            routes,
            location: None,
            document: None,
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            leave_duration: LEAVE_DURATION,
        }
    }

    /// Set the persisted location store (defaults to memory)
    pub fn location(mut self, location: Arc<dyn LocationStore>) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the host document (defaults to [`NullDocument`])
    pub fn document(mut self, document: Arc<dyn DocumentHost>) -> Self {
        self.document = Some(document);
        self
    }

    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    pub fn leave_duration(mut self, duration: Duration) -> Self {
        self.leave_duration = duration;
        self
    }

    /// Take product name and leave duration from a site configuration
    pub fn config(self, config: &SiteConfig) -> Self {
        self.product_name(config.product_name.clone())
            .leave_duration(config.leave_duration())
    }

    /// Seed the machine from the persisted location
    ///
    /// Unknown bases fall back to the default route. The default path is
    /// written back only when nothing was persisted. Location failures are
    /// logged and treated as an empty location.
    pub async fn initialize(self) -> Result<NavigationStateMachine<V>> {
        let runtime = Handle::try_current().map_err(|_| LocationError::NoRuntime)?;
        let location = self
            .location
            .unwrap_or_else(|| Arc::new(MemoryLocation::new()));
        let document = self.document.unwrap_or_else(|| Arc::new(NullDocument));

        let persisted = match location.read().await {
            Ok(fragment) => fragment.filter(|f| !strip_fragment_prefix(f).is_empty()),
            Err(e) => {
                warn!("Failed to read persisted location: {}", e);
                None
            }
        };

        let (state, _) = watch::channel(NavigationState::idle(
            self.routes.default_key().to_string(),
        ));
        let shared = Shared {
            routes: self.routes,
            location,
            document,
            product_name: self.product_name,
            leave_duration: self.leave_duration,
            state,
            in_flight: Mutex::new(Vec::new()),
            runtime,
        };

        let active = match &persisted {
            Some(raw) => shared.normalize(raw),
            None => shared.routes.default_key().to_string(),
        };
        debug!("Initial location: {:?} -> '{}'", persisted, active);

        if persisted.is_none() {
            shared.persist(&active).await;
        }
        shared.update_title(&active);
        shared.state.send_replace(NavigationState::idle(active));

        Ok(NavigationStateMachine {
            shared: Arc::new(shared),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::location::{FileLocation, SessionHistory};
    use crate::route::ViewLoader;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingDocument {
        titles: Mutex<Vec<String>>,
        scrolls: Mutex<Vec<ScrollBehavior>>,
    }

    impl RecordingDocument {
        fn titles(&self) -> Vec<String> {
            self.titles.lock().unwrap().clone()
        }

        fn scrolls(&self) -> usize {
            self.scrolls.lock().unwrap().len()
        }
    }

    impl DocumentHost for RecordingDocument {
        fn set_title(&self, title: &str) {
            self.titles.lock().unwrap().push(title.to_string());
        }

        fn scroll_to_origin(&self, behavior: ScrollBehavior) {
            self.scrolls.lock().unwrap().push(behavior);
        }
    }

    fn routes() -> Arc<RouteTable<&'static str>> {
        let table = RouteTable::builder()
            .route(
                RouteDescriptor::new("home", "Home", ViewLoader::ready("home view"))
                    .with_title("Home")
                    .as_default(),
            )
            .route(
                RouteDescriptor::new("projects", "Projects", ViewLoader::ready("projects view"))
                    .with_title("Projects"),
            )
            .route(
                RouteDescriptor::new("resume", "Resume", ViewLoader::ready("resume view"))
                    .with_title("Resume"),
            )
            .route(RouteDescriptor::new(
                "contact",
                "Contact",
                ViewLoader::ready("contact view"),
            ))
            .build()
            .expect("Failed to build route table");
        Arc::new(table)
    }

    async fn machine(
        location: Arc<MemoryLocation>,
    ) -> (NavigationStateMachine<&'static str>, Arc<RecordingDocument>) {
        let document = Arc::new(RecordingDocument::default());
        let machine = NavigationStateMachine::builder(routes())
            .location(location)
            .document(document.clone())
            .initialize()
            .await
            .expect("Failed to initialize navigation");
        (machine, document)
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_without_location_writes_default() {
        let location = Arc::new(MemoryLocation::new());
        let (machine, document) = machine(location.clone()).await;

        assert_eq!(machine.state(), NavigationState::idle("home"));
        assert_eq!(location.get().as_deref(), Some("home"));
        assert_eq!(document.titles(), ["M. Green | Home"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_keeps_valid_location() {
        let location = Arc::new(MemoryLocation::with_path("#projects/42?tab=overview"));
        let (machine, document) = machine(location.clone()).await;

        assert_eq!(machine.active_path(), "projects/42?tab=overview");
        assert_eq!(document.titles(), ["M. Green | Projects"]);

        let route = machine.current_route();
        assert_eq!(route.key().as_str(), "projects");
        assert_eq!(route.path.id(), Some("42"));
        assert_eq!(route.path.query("tab"), Some("overview"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_unknown_location_falls_back() {
        let location = Arc::new(MemoryLocation::with_path("bogus-route/1"));
        let (machine, _) = machine(location.clone()).await;

        assert_eq!(machine.active_path(), "home");
        // Something was persisted, so it is not overwritten at startup
        assert_eq!(location.get().as_deref(), Some("bogus-route/1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigate_runs_leaving_phase() {
        let location = Arc::new(MemoryLocation::new());
        let (machine, document) = machine(location.clone()).await;

        machine.navigate("projects");
        assert!(machine.is_leaving());
        assert_eq!(machine.active_path(), "home");
        assert_eq!(machine.pending_path().as_deref(), Some("projects"));

        tokio::time::sleep(LEAVE_DURATION / 2).await;
        assert!(machine.is_leaving());
        assert_eq!(document.titles().len(), 1);
        assert_eq!(document.scrolls(), 0);
        assert_eq!(location.get().as_deref(), Some("home"));

        tokio::time::sleep(LEAVE_DURATION).await;
        assert_eq!(machine.state(), NavigationState::idle("projects"));
        assert_eq!(document.titles(), ["M. Green | Home", "M. Green | Projects"]);
        assert_eq!(document.scrolls(), 1);
        assert_eq!(location.get().as_deref(), Some("projects"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_navigations_last_write_wins() {
        let (machine, document) = machine(Arc::new(MemoryLocation::new())).await;

        machine.navigate("projects");
        tokio::time::sleep(Duration::from_millis(100)).await;
        machine.navigate("resume");
        tokio::time::sleep(Duration::from_millis(100)).await;
        machine.navigate("contact");
        assert_eq!(machine.pending_path().as_deref(), Some("contact"));

        machine.settled().await;
        assert_eq!(machine.state(), NavigationState::idle("contact"));
        // Contact has no title, so the bare product name is used
        assert_eq!(document.titles(), ["M. Green | Home", "M. Green"]);
        assert_eq!(document.scrolls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_happens_one_leave_duration_after_first_request() {
        let (machine, _) = machine(Arc::new(MemoryLocation::new())).await;

        machine.navigate("projects");
        tokio::time::sleep(Duration::from_millis(300)).await;
        machine.navigate("resume");
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(machine.state(), NavigationState::idle("resume"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_self_navigation_is_noop() {
        let location = Arc::new(MemoryLocation::new());
        let (machine, document) = machine(location.clone()).await;
        let mut rx = machine.subscribe();

        machine.navigate("home");
        assert!(!machine.is_leaving());
        assert!(!rx.has_changed().unwrap());

        machine.settled().await;
        assert_eq!(document.titles().len(), 1);
        assert_eq!(document.scrolls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_target_commits_default_route() {
        let (machine, document) = machine(Arc::new(MemoryLocation::with_path("projects"))).await;

        machine.navigate("bogus-route");
        assert_eq!(machine.pending_path().as_deref(), Some("home"));

        machine.settled().await;
        assert_eq!(machine.active_path(), "home");
        assert_eq!(document.titles(), ["M. Green | Projects", "M. Green | Home"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_returning_to_active_path_while_leaving_keeps_title() {
        let location = Arc::new(MemoryLocation::new());
        let (machine, document) = machine(location.clone()).await;

        machine.navigate("projects");
        machine.navigate("home");
        assert!(machine.is_leaving());

        machine.settled().await;
        assert_eq!(machine.state(), NavigationState::idle("home"));
        assert_eq!(document.titles().len(), 1);
        assert_eq!(location.get().as_deref(), Some("home"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_trip_through_location() {
        let location = Arc::new(MemoryLocation::new());
        let (machine, _) = machine(location.clone()).await;

        machine.navigate("projects/42?tab=overview");
        machine.settled().await;

        let persisted = location.get().unwrap();
        assert_eq!(persisted, "projects/42?tab=overview");

        let path = PathReference::parse(&persisted, "home");
        assert_eq!(path.base, "projects");
        assert_eq!(path.id(), Some("42"));
        assert_eq!(path.query("tab"), Some("overview"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_current_route_tracks_active_path() {
        let (machine, _) = machine(Arc::new(MemoryLocation::new())).await;

        machine.navigate("resume/3");
        let route = machine.current_route();
        assert_eq!(route.key().as_str(), "home");

        machine.settled().await;
        let route = machine.current_route();
        assert_eq!(route.key().as_str(), "resume");
        assert_eq!(route.path.id(), Some("3"));
        assert_eq!(route.meta().title.as_deref(), Some("Resume"));
        assert!(Arc::ptr_eq(
            &route.descriptor,
            machine.routes().resolve("resume").unwrap()
        ));
        assert_eq!(*route.component().load().await.unwrap(), "resume view");
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_change_uses_same_transition() {
        let location = Arc::new(MemoryLocation::new());
        let (machine, document) = machine(location.clone()).await;
        let mut rx = machine.subscribe();

        location.set("resume");
        machine.on_external_location_change().await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(
            *rx.borrow_and_update(),
            NavigationState::Leaving {
                active: "home".into(),
                pending: "resume".into(),
            }
        );

        machine.settled().await;
        assert_eq!(*rx.borrow_and_update(), NavigationState::idle("resume"));
        assert_eq!(document.titles().last().unwrap(), "M. Green | Resume");
        assert_eq!(document.scrolls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_change_to_active_path_is_ignored() {
        let location = Arc::new(MemoryLocation::with_path("projects"));
        let (machine, _) = machine(location.clone()).await;

        location.set("#projects");
        machine.on_external_location_change().await;
        assert!(!machine.is_leaving());

        location.set("unknown");
        machine.on_external_location_change().await;
        assert_eq!(machine.pending_path().as_deref(), Some("home"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_back_navigation() {
        let history = Arc::new(SessionHistory::new(Arc::new(MemoryLocation::new())));
        let machine = NavigationStateMachine::builder(routes())
            .location(history.clone())
            .initialize()
            .await
            .unwrap();

        machine.navigate("projects/7");
        machine.settled().await;
        assert_eq!(history.entries(), ["home", "projects/7"]);

        assert!(history.back().await.unwrap());
        machine.on_external_location_change().await;
        assert!(machine.is_leaving());
        assert_eq!(machine.pending_path().as_deref(), Some("home"));

        machine.settled().await;
        assert_eq!(machine.active_path(), "home");
        assert!(history.can_go_forward());
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_onto_unnormalized_entry_keeps_forward() {
        let backing = Arc::new(MemoryLocation::with_path("#projects"));
        let history = Arc::new(SessionHistory::new(backing.clone()));
        let machine = NavigationStateMachine::builder(routes())
            .location(history.clone())
            .initialize()
            .await
            .unwrap();
        assert_eq!(machine.active_path(), "projects");

        machine.navigate("home");
        machine.settled().await;

        assert!(history.back().await.unwrap());
        machine.on_external_location_change().await;
        machine.settled().await;

        assert_eq!(machine.active_path(), "projects");
        assert_eq!(history.entries(), ["projects", "home"]);
        assert_eq!(backing.get().as_deref(), Some("projects"));
        assert!(history.can_go_forward());

        assert!(history.forward().await.unwrap());
        machine.on_external_location_change().await;
        machine.settled().await;
        assert_eq!(machine.active_path(), "home");
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_onto_unknown_entry_keeps_forward() {
        let history = Arc::new(SessionHistory::new(Arc::new(MemoryLocation::with_path(
            "bogus",
        ))));
        let machine = NavigationStateMachine::builder(routes())
            .location(history.clone())
            .initialize()
            .await
            .unwrap();

        machine.navigate("resume");
        machine.settled().await;
        assert_eq!(history.entries(), ["bogus", "resume"]);

        assert!(history.back().await.unwrap());
        machine.on_external_location_change().await;
        machine.settled().await;

        assert_eq!(machine.active_path(), "home");
        assert_eq!(history.entries(), ["home", "resume"]);
        assert!(history.can_go_forward());
    }

    #[tokio::test(start_paused = true)]
    async fn test_trailing_separators_name_the_same_path() {
        let location = Arc::new(MemoryLocation::new());
        let (machine, document) = machine(location.clone()).await;

        machine.navigate("home/");
        assert!(!machine.is_leaving());
        machine.navigate("home?");
        assert!(!machine.is_leaving());
        machine.navigate("#/home/?");
        assert!(!machine.is_leaving());

        machine.navigate("projects/42/?tab=overview");
        assert_eq!(
            machine.pending_path().as_deref(),
            Some("projects/42?tab=overview")
        );
        machine.navigate("projects/42?tab=overview");
        machine.settled().await;

        assert_eq!(location.get().as_deref(), Some("projects/42?tab=overview"));
        assert_eq!(document.titles().len(), 2);
    }

    /// Location store whose every operation fails
    struct UnavailableLocation;

    #[async_trait::async_trait]
    impl LocationStore for UnavailableLocation {
        async fn read(&self) -> Result<Option<String>> {
            Err(LocationError::Read {
                path: "unavailable".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            }
            .into())
        }

        async fn write(&self, _path: &str) -> Result<()> {
            Err(LocationError::Write {
                path: "unavailable".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            }
            .into())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_location_failures_do_not_block_navigation() {
        let document = Arc::new(RecordingDocument::default());
        let machine = NavigationStateMachine::builder(routes())
            .location(Arc::new(UnavailableLocation))
            .document(document.clone())
            .initialize()
            .await
            .expect("Location failures must not fail initialization");

        assert_eq!(machine.state(), NavigationState::idle("home"));
        assert_eq!(document.titles(), ["M. Green | Home"]);

        machine.navigate("projects/3");
        machine.settled().await;
        assert_eq!(machine.state(), NavigationState::idle("projects/3"));
        assert_eq!(document.titles().last().unwrap(), "M. Green | Projects");
        assert_eq!(document.scrolls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreadable_external_location_is_ignored() {
        let machine = NavigationStateMachine::builder(routes())
            .location(Arc::new(UnavailableLocation))
            .initialize()
            .await
            .unwrap();
        let mut rx = machine.subscribe();

        machine.on_external_location_change().await;
        assert!(!rx.has_changed().unwrap());
        assert_eq!(machine.active_path(), "home");
    }

    #[tokio::test]
    async fn test_file_location_persists_across_instances() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("location");

        let machine = NavigationStateMachine::builder(routes())
            .location(Arc::new(FileLocation::new(&file)))
            .leave_duration(Duration::from_millis(5))
            .initialize()
            .await
            .unwrap();
        machine.navigate("projects/42?tab=overview");
        machine.settled().await;

        let reloaded = NavigationStateMachine::builder(routes())
            .location(Arc::new(FileLocation::new(&file)))
            .initialize()
            .await
            .unwrap();
        assert_eq!(reloaded.active_path(), "projects/42?tab=overview");
        assert_eq!(reloaded.title(), "M. Green | Projects");
    }

    #[tokio::test(start_paused = true)]
    async fn test_builder_config() {
        let config = SiteConfig::default()
            .with_product_name("Studio")
            .with_leave_duration_ms(120);
        let machine = NavigationStateMachine::builder(routes())
            .config(&config)
            .initialize()
            .await
            .unwrap();

        assert_eq!(machine.product_name(), "Studio");
        assert_eq!(machine.leave_duration(), Duration::from_millis(120));
        assert_eq!(machine.title(), "Studio | Home");
    }
}
