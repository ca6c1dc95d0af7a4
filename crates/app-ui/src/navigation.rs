//! Navigation system for Nexo Paciente
//!
//! This module provides the navigation graph:
//! - Outer routes (`welcome`, `login`, `main`) on a back-stack
//! - A nested tab graph hosted by `main` with five sibling destinations
//! - Navigation options: pop-up-to an anchor (inclusive or not) and single-top
//! - A [`Router`] that is handed explicitly to screens; there is no global
//!   navigation state
//!
//! Every stack entry carries a unique key. Screen-local state is keyed by it,
//! so state disappears exactly when its entry leaves the stack.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Navigation errors. All of them are programming errors in the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No route or tab with this name exists
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// No tab of the `main` graph has this name
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// A tab was selected while `main` is not the current route
    #[error("Tab graph is not active (current route: {0})")]
    TabGraphInactive(&'static str),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Destinations
// =============================================================================

/// A named node of a navigation graph
pub trait Destination: Copy + Eq + fmt::Debug {
    /// Route name used for registration and lookup
    fn name(&self) -> &'static str;
}

/// Outer routes of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Welcome / landing screen
    Welcome,
    /// Login form
    Login,
    /// Authenticated area hosting the tab graph
    Main,
}

impl Route {
    /// Start destination of the outer graph
    pub const START: Route = Route::Welcome;

    /// Get all routes
    pub fn all() -> [Route; 3] {
        [Route::Welcome, Route::Login, Route::Main]
    }

    /// Look up a route by name
    pub fn from_name(name: &str) -> Result<Route> {
        Route::all()
            .into_iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))
    }
}

impl Destination for Route {
    fn name(&self) -> &'static str {
        match self {
            Route::Welcome => "welcome",
            Route::Login => "login",
            Route::Main => "main",
        }
    }
}

impl FromStr for Route {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self> {
        Route::from_name(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Destinations of the tab graph inside `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    /// Dashboard
    #[serde(rename = "home")]
    Home,
    /// Appointments list
    #[serde(rename = "citas")]
    Appointments,
    /// Queue / turn status
    #[serde(rename = "turnos")]
    Turns,
    /// Notifications list
    #[serde(rename = "notificaciones")]
    Notifications,
    /// Profile
    #[serde(rename = "perfil")]
    Profile,
}

impl Tab {
    /// Start destination of the tab graph
    pub const ROOT: Tab = Tab::Home;

    /// Get all tabs in bottom bar order
    pub fn all() -> [Tab; 5] {
        [
            Tab::Home,
            Tab::Appointments,
            Tab::Turns,
            Tab::Notifications,
            Tab::Profile,
        ]
    }

    /// Look up a tab by route name
    pub fn from_name(name: &str) -> Result<Tab> {
        Tab::all()
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| NavigationError::UnknownTab(name.to_string()))
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Appointments => "calendar",
            Tab::Turns => "people",
            Tab::Notifications => "bell",
            Tab::Profile => "person",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Appointments => "Citas",
            Tab::Turns => "Turnos",
            Tab::Notifications => "Notificaciones",
            Tab::Profile => "Perfil",
        }
    }

    /// Bottom bar descriptor
    pub fn nav_route(&self) -> NavRoute {
        NavRoute {
            route: self.name().to_string(),
            label: self.label().to_string(),
            icon: self.icon().to_string(),
        }
    }
}

impl Destination for Tab {
    fn name(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Appointments => "citas",
            Tab::Turns => "turnos",
            Tab::Notifications => "notificaciones",
            Tab::Profile => "perfil",
        }
    }
}

impl FromStr for Tab {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self> {
        Tab::from_name(s)
    }
}

/// Navigation target descriptor rendered in the bottom bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRoute {
    /// Route name
    pub route: String,
    /// Display label
    pub label: String,
    /// Icon reference
    pub icon: String,
}

/// Descriptors for every tab, in bar order
pub fn bottom_nav_routes() -> Vec<NavRoute> {
    Tab::all().iter().map(Tab::nav_route).collect()
}

// =============================================================================
// Navigation Options
// =============================================================================

/// Pop entries down to an anchor before pushing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo<R> {
    /// Anchor route
    pub route: R,
    /// Also pop the anchor itself
    pub inclusive: bool,
}

/// Options for a single navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOptions<R> {
    /// Pop entries down to an anchor first
    pub pop_up_to: Option<PopUpTo<R>>,
    /// Skip the push when the target is already on top
    pub single_top: bool,
}

impl<R> Default for NavOptions<R> {
    fn default() -> Self {
        Self {
            pop_up_to: None,
            single_top: false,
        }
    }
}

impl<R: Destination> NavOptions<R> {
    /// Plain push
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every entry back to and including `anchor`, then push
    pub fn clear_to(anchor: R) -> Self {
        Self::new().pop_up_to(anchor, true)
    }

    /// Pop down to `anchor` before pushing
    pub fn pop_up_to(mut self, anchor: R, inclusive: bool) -> Self {
        self.pop_up_to = Some(PopUpTo {
            route: anchor,
            inclusive,
        });
        self
    }

    /// Do not push a duplicate of the top entry
    pub fn single_top(mut self) -> Self {
        self.single_top = true;
        self
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry<R> {
    /// The route
    pub route: R,
    /// Unique key for this entry
    pub key: String,
}

impl<R> StackEntry<R> {
    /// Create a new stack entry with a fresh key
    pub fn new(route: R) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// What a navigation did to the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationOutcome {
    /// A new entry was pushed
    Pushed,
    /// Entries were popped and the existing target is now on top
    Popped,
    /// The target was already current; nothing changed
    Unchanged,
}

/// Back-stack for one navigation graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack<R> {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry<R>>,
    /// Start destination of the graph
    start: R,
}

impl<R: Destination> NavigationStack<R> {
    /// Create a new navigation stack holding its start destination
    pub fn new(start: R) -> Self {
        Self {
            entries: vec![StackEntry::new(start)],
            start,
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: R) {
        self.entries.push(StackEntry::new(route));
    }

    /// Navigate to a route, applying pop-up-to first and single-top second.
    ///
    /// An anchor that is not on the stack pops nothing.
    pub fn navigate(&mut self, route: R, options: &NavOptions<R>) -> NavigationOutcome {
        let depth = self.entries.len();
        if let Some(pop) = options.pop_up_to {
            match self.entries.iter().rposition(|e| e.route == pop.route) {
                Some(idx) => {
                    let keep = if pop.inclusive { idx } else { idx + 1 };
                    self.entries.truncate(keep);
                }
                None => {
                    tracing::warn!(anchor = pop.route.name(), "pop-up-to anchor not on stack");
                }
            }
        }

        if options.single_top && self.entries.last().map(|e| e.route) == Some(route) {
            return if self.entries.len() < depth {
                NavigationOutcome::Popped
            } else {
                NavigationOutcome::Unchanged
            };
        }

        self.push(route);
        NavigationOutcome::Pushed
    }

    /// Pop the top route (returns true if popped, false if at the last entry)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Get the current (top) route
    pub fn current(&self) -> R {
        self.entries.last().map(|e| e.route).unwrap_or(self.start)
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> Option<&StackEntry<R>> {
        self.entries.last()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry<R>] {
        &self.entries
    }

    /// Routes from bottom to top
    pub fn routes(&self) -> Vec<R> {
        self.entries.iter().map(|e| e.route).collect()
    }

    /// Whether any entry holds `route`
    pub fn contains(&self, route: R) -> bool {
        self.entries.iter().any(|e| e.route == route)
    }

    /// Start destination
    pub fn start(&self) -> R {
        self.start
    }

    /// Route of the bottom entry
    pub fn root(&self) -> R {
        self.entries.first().map(|e| e.route).unwrap_or(self.start)
    }
}

// =============================================================================
// Tab Graph
// =============================================================================

/// Nested graph of sibling tab destinations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabGraph {
    stack: NavigationStack<Tab>,
}

impl Default for TabGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TabGraph {
    /// Create a tab graph showing its root tab
    pub fn new() -> Self {
        Self {
            stack: NavigationStack::new(Tab::ROOT),
        }
    }

    /// Currently shown tab
    pub fn active(&self) -> Tab {
        self.stack.current()
    }

    /// Select a tab.
    ///
    /// Re-selecting the active tab changes nothing. Any other tab resets the
    /// graph to its root and pushes the tab unless it is the root itself.
    pub fn select(&mut self, tab: Tab) -> NavigationOutcome {
        if self.active() == tab {
            return NavigationOutcome::Unchanged;
        }
        let options = NavOptions::new().pop_up_to(Tab::ROOT, false).single_top();
        let outcome = self.stack.navigate(tab, &options);
        tracing::debug!(tab = tab.name(), depth = self.stack.depth(), "tab selected");
        outcome
    }

    /// Pop within the tab graph
    pub fn pop(&mut self) -> bool {
        self.stack.pop()
    }

    /// Underlying stack
    pub fn stack(&self) -> &NavigationStack<Tab> {
        &self.stack
    }

    /// Bottom bar descriptors with the active one marked
    pub fn items(&self) -> Vec<(NavRoute, bool)> {
        let active = self.active();
        Tab::all()
            .iter()
            .map(|tab| (tab.nav_route(), *tab == active))
            .collect()
    }
}

// =============================================================================
// Router
// =============================================================================

/// Target resolved from a route name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Outer route
    Route(Route),
    /// Tab inside `main`
    Tab(Tab),
}

/// Resolve a route name against both graphs
pub fn resolve(name: &str) -> Result<Target> {
    Route::from_name(name)
        .map(Target::Route)
        .or_else(|_| Tab::from_name(name).map(Target::Tab))
        .map_err(|_| NavigationError::UnknownRoute(name.to_string()))
}

/// Tab graph owned by one `main` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct HostedTabs {
    /// Key of the hosting `main` entry
    host: String,
    graph: TabGraph,
}

/// Navigation controller handed to screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Router {
    /// Outer back-stack
    stack: NavigationStack<Route>,
    /// One tab graph per `main` entry on the outer stack
    tabs: Vec<HostedTabs>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router at the welcome screen
    pub fn new() -> Self {
        Self::with_start(Route::START)
    }

    /// Create a router at a custom start route
    pub fn with_start(start: Route) -> Self {
        let mut router = Self {
            stack: NavigationStack::new(start),
            tabs: Vec::new(),
        };
        router.sync_tab_graph();
        router
    }

    /// Navigate to an outer route
    pub fn navigate(&mut self, route: Route, options: NavOptions<Route>) -> NavigationOutcome {
        let from = self.stack.current();
        let outcome = self.stack.navigate(route, &options);
        self.sync_tab_graph();
        tracing::debug!(
            from = from.name(),
            to = route.name(),
            depth = self.stack.depth(),
            ?outcome,
            "navigate"
        );
        outcome
    }

    /// Navigate by route name.
    ///
    /// Outer routes take the given options; tab names select the tab and
    /// ignore them. Unknown names fail.
    pub fn navigate_named(
        &mut self,
        name: &str,
        options: NavOptions<Route>,
    ) -> Result<NavigationOutcome> {
        match resolve(name)? {
            Target::Route(route) => Ok(self.navigate(route, options)),
            Target::Tab(tab) => self.select_tab(tab),
        }
    }

    /// Select a tab of the `main` graph
    pub fn select_tab(&mut self, tab: Tab) -> Result<NavigationOutcome> {
        let current = self.stack.current();
        self.active_tabs_mut()
            .map(|tabs| tabs.select(tab))
            .ok_or(NavigationError::TabGraphInactive(current.name()))
    }

    /// Go back: the tab graph first, then the outer stack.
    ///
    /// Returns false when nothing is left to pop; the host should close.
    pub fn go_back(&mut self) -> bool {
        if self.active_tabs_mut().is_some_and(TabGraph::pop) {
            return true;
        }

        let popped = self.stack.pop();
        if popped {
            self.sync_tab_graph();
            tracing::debug!(to = self.stack.current().name(), "back");
        }
        popped
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
            || self
                .active_tabs()
                .is_some_and(|t| t.stack().can_go_back())
    }

    /// Current outer route
    pub fn current_route(&self) -> Route {
        self.stack.current()
    }

    /// Active tab, when `main` is current
    pub fn current_tab(&self) -> Option<Tab> {
        self.active_tabs().map(TabGraph::active)
    }

    /// Name of the innermost current destination
    pub fn current_name(&self) -> &'static str {
        match self.current_tab() {
            Some(tab) => tab.name(),
            None => self.stack.current().name(),
        }
    }

    /// Outer back-stack routes, bottom to top
    pub fn back_stack(&self) -> Vec<Route> {
        self.stack.routes()
    }

    /// Outer stack
    pub fn stack(&self) -> &NavigationStack<Route> {
        &self.stack
    }

    /// Tab graph of the topmost `main` entry, if any
    pub fn tabs(&self) -> Option<&TabGraph> {
        let host = self.stack.entries().iter().rfind(|e| e.route == Route::Main)?;
        self.graph_for(&host.key)
    }

    /// Key of the innermost current entry
    pub fn current_key(&self) -> Option<&str> {
        if let Some(entry) = self.active_tabs().and_then(|t| t.stack().current_entry()) {
            return Some(entry.key.as_str());
        }
        self.stack.current_entry().map(|e| e.key.as_str())
    }

    /// Keys of every live entry in every graph
    pub fn live_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.stack.entries().iter().map(|e| e.key.as_str()).collect();
        for hosted in &self.tabs {
            keys.extend(hosted.graph.stack().entries().iter().map(|e| e.key.as_str()));
        }
        keys
    }

    fn graph_for(&self, host: &str) -> Option<&TabGraph> {
        self.tabs.iter().find(|t| t.host == host).map(|t| &t.graph)
    }

    /// Graph of the current entry when it is `main`
    fn active_tabs(&self) -> Option<&TabGraph> {
        let entry = self.stack.current_entry()?;
        if entry.route != Route::Main {
            return None;
        }
        self.graph_for(&entry.key)
    }

    fn active_tabs_mut(&mut self) -> Option<&mut TabGraph> {
        let entry = self.stack.current_entry()?;
        if entry.route != Route::Main {
            return None;
        }
        let host = entry.key.as_str();
        self.tabs
            .iter_mut()
            .find(|t| t.host == host)
            .map(|t| &mut t.graph)
    }

    /// Give every `main` entry its own graph and drop graphs whose host left
    fn sync_tab_graph(&mut self) {
        let hosts: Vec<&str> = self
            .stack
            .entries()
            .iter()
            .filter(|e| e.route == Route::Main)
            .map(|e| e.key.as_str())
            .collect();

        self.tabs.retain(|t| hosts.contains(&t.host.as_str()));
        for host in hosts {
            if !self.tabs.iter().any(|t| t.host == host) {
                self.tabs.push(HostedTabs {
                    host: host.to_string(),
                    graph: TabGraph::new(),
                });
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
