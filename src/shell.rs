//! Application shell
//!
//! [`AppShell`] ties the router, the screen registry and the live screen
//! instances together. Instances are keyed by the stack entry they belong to
//! and are dropped as soon as that entry leaves the stack, so local state
//! (such as the login form) never outlives its entry.
//!
//! While `main` is current the shell hosts the tab graph: it renders the
//! active tab's screen inside a scaffold whose bottom bar lists every tab.

use std::collections::HashMap;

use app_ui::components::{Scaffold, TabBar, TabBarItem, ViewNode};
use app_ui::navigation::{NavigationOutcome, Route, Router, Tab};
use app_ui::screens::{EventOutcome, Screen, ScreenError, ScreenRegistry, ScreenServices, UiEvent};
use thiserror::Error;

use crate::config::{AppConfig, ConfigError};

/// Bottom bar press handler; the event key is the tab route name
pub const TAB_SELECT: &str = "tab.select";

/// Shell error types
#[derive(Debug, Error)]
pub enum ShellError {
    /// A screen failed to build or handle an event
    #[error(transparent)]
    Screen(#[from] ScreenError),

    /// Configuration was invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;

/// Router, registry and live screens
pub struct AppShell {
    router: Router,
    registry: ScreenRegistry,
    screens: HashMap<String, Box<dyn Screen>>,
    show_tab_labels: bool,
}

impl AppShell {
    /// Create a shell and build the screen for the router's current entry
    pub fn new(registry: ScreenRegistry, router: Router) -> Result<Self> {
        let mut shell = Self {
            router,
            registry,
            screens: HashMap::new(),
            show_tab_labels: true,
        };
        shell.sync_screens()?;
        Ok(shell)
    }

    /// Shell with the default screens configured from `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let services = ScreenServices {
            patient: config.patient(),
            ..ScreenServices::default()
        };
        let router = Router::with_start(config.start()?);
        let shell = Self::new(ScreenRegistry::with_defaults(services), router)?;
        Ok(shell.with_tab_labels(config.show_tab_labels))
    }

    /// Show or hide bottom bar labels
    pub fn with_tab_labels(mut self, show: bool) -> Self {
        self.show_tab_labels = show;
        self
    }

    /// The router
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Name of the innermost current destination
    pub fn current_name(&self) -> &'static str {
        self.router.current_name()
    }

    /// Number of screen instances alive
    pub fn live_screens(&self) -> usize {
        self.screens.len()
    }

    /// Render the current destination
    pub fn render(&self) -> Result<ViewNode> {
        let screen = self.current_screen()?;
        let tree = screen.render();

        match self.router.tabs() {
            Some(tabs) if self.router.current_route() == Route::Main => {
                let items = tabs
                    .items()
                    .into_iter()
                    .map(|(nav, active)| {
                        TabBarItem::new(nav.route, nav.icon, nav.label).with_active(active)
                    })
                    .collect();
                let bar = TabBar::with_items(items)
                    .with_labels(self.show_tab_labels)
                    .on_press(TAB_SELECT);
                Ok(Scaffold::new(tree).with_bottom_bar(bar).into())
            }
            _ => Ok(tree),
        }
    }

    /// Route a user intent to the tab bar or the current screen
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<EventOutcome> {
        tracing::debug!(screen = self.current_name(), ?event, "dispatch");

        if let UiEvent::Press { handler, key } = event {
            if handler == TAB_SELECT {
                return self.select_tab(key.as_deref());
            }
        }

        let name = self.current_name();
        let key = self.current_key()?;
        let outcome = match self.screens.get_mut(&key) {
            Some(screen) => screen.handle_event(event, &mut self.router)?,
            None => return Err(ScreenError::Unregistered(name.to_string()).into()),
        };

        self.sync_screens()?;
        Ok(outcome)
    }

    /// System back. Returns false when the host should close.
    pub fn back(&mut self) -> Result<bool> {
        let popped = self.router.go_back();
        self.sync_screens()?;
        Ok(popped)
    }

    fn select_tab(&mut self, key: Option<&str>) -> Result<EventOutcome> {
        let Some(name) = key else {
            return Ok(EventOutcome::Ignored);
        };
        let tab = Tab::from_name(name).map_err(ScreenError::from)?;
        let outcome = self.router.select_tab(tab).map_err(ScreenError::from)?;
        self.sync_screens()?;

        Ok(match outcome {
            NavigationOutcome::Unchanged => EventOutcome::Ignored,
            NavigationOutcome::Pushed | NavigationOutcome::Popped => EventOutcome::Navigated,
        })
    }

    fn current_key(&self) -> Result<String> {
        self.router
            .current_key()
            .map(str::to_string)
            .ok_or_else(|| ScreenError::Unregistered(self.current_name().to_string()).into())
    }

    fn current_screen(&self) -> Result<&dyn Screen> {
        let key = self.current_key()?;
        self.screens
            .get(&key)
            .map(|s| s.as_ref())
            .ok_or_else(|| ScreenError::Unregistered(self.current_name().to_string()).into())
    }

    /// Drop instances whose entries are gone and build the current one
    fn sync_screens(&mut self) -> Result<()> {
        let live = self.router.live_keys();
        let before = self.screens.len();
        self.screens.retain(|key, _| live.contains(&key.as_str()));
        let dropped = before - self.screens.len();
        if dropped > 0 {
            tracing::debug!(dropped, "screen instances released");
        }

        let key = self.current_key()?;
        if !self.screens.contains_key(&key) {
            let name = self.current_name();
            let screen = self.registry.build(name)?;
            tracing::debug!(route = name, key = %key, "screen created");
            self.screens.insert(key, screen);
        }
        Ok(())
    }
}

impl std::fmt::Debug for AppShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppShell")
            .field("router", &self.router)
            .field("registry", &self.registry)
            .field("live_screens", &self.screens.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::screens::{login, welcome};

    fn shell() -> AppShell {
        AppShell::from_config(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_at_welcome() {
        let shell = shell();
        assert_eq!(shell.current_name(), "welcome");
        assert_eq!(shell.live_screens(), 1);
        assert!(shell.render().unwrap().contains_text("Bienvenido a Paciente App"));
    }

    #[test]
    fn test_login_state_discarded_after_back() {
        let mut shell = shell();
        shell.dispatch(&UiEvent::press(welcome::LOGIN)).unwrap();
        shell
            .dispatch(&UiEvent::text_changed(login::IDENTIFIER_FIELD, "maria"))
            .unwrap();
        assert_eq!(shell.live_screens(), 2);

        assert!(shell.back().unwrap());
        assert_eq!(shell.live_screens(), 1);

        shell.dispatch(&UiEvent::press(welcome::LOGIN)).unwrap();
        let tree = shell.render().unwrap();
        assert_eq!(tree.find_input(login::IDENTIFIER_FIELD).unwrap().value, "");
    }

    #[test]
    fn test_main_renders_bottom_bar() {
        let config = AppConfig {
            start_route: "main".to_string(),
            show_tab_labels: false,
            ..AppConfig::default()
        };
        let shell = AppShell::from_config(&config).unwrap();
        let tree = shell.render().unwrap();
        let ViewNode::Scaffold(scaffold) = &tree else {
            panic!("expected scaffold");
        };
        let bar = scaffold.bottom_bar.as_ref().unwrap();
        assert_eq!(bar.active_tab(), Some("home"));
        assert_eq!(bar.items.len(), 5);
        assert!(!bar.show_labels);
        assert_eq!(bar.on_tab_press.as_deref(), Some(TAB_SELECT));
    }

    #[test]
    fn test_tab_press_without_key_ignored() {
        let mut config = AppConfig::default();
        config.start_route = "main".to_string();
        let mut shell = AppShell::from_config(&config).unwrap();
        let outcome = shell.dispatch(&UiEvent::press(TAB_SELECT)).unwrap();
        assert_eq!(outcome, EventOutcome::Ignored);
    }

    #[test]
    fn test_unknown_tab_fails() {
        let mut config = AppConfig::default();
        config.start_route = "main".to_string();
        let mut shell = AppShell::from_config(&config).unwrap();
        let err = shell
            .dispatch(&UiEvent::press_key(TAB_SELECT, "ajustes"))
            .unwrap_err();
        assert!(matches!(err, ShellError::Screen(ScreenError::Navigation(_))));
    }
}
