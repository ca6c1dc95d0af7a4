//! Application screens
//!
//! A screen renders its state to a [`ViewNode`] tree and reacts to
//! [`UiEvent`]s sent back by the host. Rendering is pure; the only side
//! effects happen in [`Screen::handle_event`], which receives the [`Router`]
//! explicitly.
//!
//! Screens are created through a [`ScreenRegistry`] keyed by route name.

use std::collections::HashMap;
use std::rc::Rc;

use app_core::{
    sample_patient, AcceptAllAuthenticator, AuthError, Authenticator, PatientProfile,
    ReminderError, ReminderScheduler, UnimplementedReminders,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::ViewNode;
use crate::navigation::{NavigationError, Router};

pub mod appointments;
pub mod home;
pub mod login;
pub mod notifications;
pub mod placeholder;
pub mod turns;
pub mod welcome;

pub use appointments::AppointmentsScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use notifications::NotificationsScreen;
pub use placeholder::PlaceholderScreen;
pub use turns::TurnsScreen;
pub use welcome::WelcomeScreen;

// =============================================================================
// Errors
// =============================================================================

/// Screen error types
#[derive(Debug, Error)]
pub enum ScreenError {
    /// No factory registered for the route
    #[error("No screen registered for route: {0}")]
    Unregistered(String),

    /// Navigation failed
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Reminder scheduling failed
    #[error("Reminder error: {0}")]
    Reminder(#[from] ReminderError),

    /// Authentication failed
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A text change named a field the screen does not have
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Result type for screen operations
pub type Result<T> = std::result::Result<T, ScreenError>;

// =============================================================================
// Events
// =============================================================================

/// User intent sent back by the host renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiEvent {
    /// A button or tab was pressed.
    ///
    /// Presses inside a list row carry that row's key.
    Press {
        /// Handler id from the pressed component
        handler: String,
        /// Row key or tab id
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
    /// A text field changed
    TextChanged {
        /// Field id
        field: String,
        /// New value
        value: String,
    },
}

impl UiEvent {
    /// Press without a key
    pub fn press(handler: impl Into<String>) -> Self {
        UiEvent::Press {
            handler: handler.into(),
            key: None,
        }
    }

    /// Press carrying a row key or tab id
    pub fn press_key(handler: impl Into<String>, key: impl Into<String>) -> Self {
        UiEvent::Press {
            handler: handler.into(),
            key: Some(key.into()),
        }
    }

    /// Text field change
    pub fn text_changed(field: impl Into<String>, value: impl Into<String>) -> Self {
        UiEvent::TextChanged {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "intent", rename_all = "snake_case")]
pub enum EventOutcome {
    /// Local state changed
    Handled,
    /// The router moved
    Navigated,
    /// The screen has no handler for this event
    Ignored,
    /// The intent exists but has no behavior yet
    NotImplemented(String),
}

/// Log and report an intent with no behavior
pub(crate) fn not_implemented(screen: &'static str, intent: &str) -> EventOutcome {
    tracing::warn!(screen, intent, "intent not implemented");
    EventOutcome::NotImplemented(intent.to_string())
}

// =============================================================================
// Screen trait
// =============================================================================

/// A routable screen
pub trait Screen {
    /// Route this screen is registered under
    fn route_name(&self) -> &'static str;

    /// Render the current state
    fn render(&self) -> ViewNode;

    /// React to a user intent
    fn handle_event(&mut self, event: &UiEvent, router: &mut Router) -> Result<EventOutcome>;
}

// =============================================================================
// Registry
// =============================================================================

/// Collaborators injected into the default screens
#[derive(Clone)]
pub struct ScreenServices {
    /// Login credential check
    pub authenticator: Rc<dyn Authenticator>,
    /// Appointment reminders
    pub reminders: Rc<dyn ReminderScheduler>,
    /// Patient shown on the dashboard
    pub patient: PatientProfile,
}

impl Default for ScreenServices {
    fn default() -> Self {
        Self {
            authenticator: Rc::new(AcceptAllAuthenticator),
            reminders: Rc::new(UnimplementedReminders),
            patient: sample_patient(),
        }
    }
}

impl std::fmt::Debug for ScreenServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenServices")
            .field("patient", &self.patient)
            .finish_non_exhaustive()
    }
}

/// Builds a fresh screen instance
pub type ScreenFactory = Box<dyn Fn() -> Box<dyn Screen>>;

/// Route name to screen factory table
#[derive(Default)]
pub struct ScreenRegistry {
    factories: HashMap<String, ScreenFactory>,
}

impl ScreenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every application screen, backed by sample data
    pub fn with_defaults(services: ScreenServices) -> Self {
        let mut registry = Self::new();

        registry.register(welcome::ROUTE, || Box::new(WelcomeScreen));

        let authenticator = Rc::clone(&services.authenticator);
        registry.register(login::ROUTE, move || {
            Box::new(LoginScreen::new(Rc::clone(&authenticator)))
        });

        let patient = services.patient.clone();
        registry.register(home::ROUTE, move || {
            Box::new(HomeScreen::with_sample_data(patient.clone()))
        });

        let reminders = Rc::clone(&services.reminders);
        registry.register(appointments::ROUTE, move || {
            Box::new(AppointmentsScreen::with_sample_data(Rc::clone(&reminders)))
        });

        registry.register(turns::ROUTE, || Box::new(TurnsScreen::default()));
        registry.register(notifications::ROUTE, || {
            Box::new(NotificationsScreen::default())
        });
        registry.register(placeholder::PROFILE_ROUTE, || {
            Box::new(PlaceholderScreen::profile())
        });

        registry
    }

    /// Register (or replace) the factory for a route
    pub fn register<F>(&mut self, route_name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Screen> + 'static,
    {
        let route_name = route_name.into();
        if self.factories.insert(route_name.clone(), Box::new(factory)).is_some() {
            tracing::debug!(route = %route_name, "screen factory replaced");
        }
        self
    }

    /// Build a new instance for a route
    pub fn build(&self, route_name: &str) -> Result<Box<dyn Screen>> {
        self.factories
            .get(route_name)
            .map(|factory| factory())
            .ok_or_else(|| ScreenError::Unregistered(route_name.to_string()))
    }

    /// Whether a factory exists for the route
    pub fn contains(&self, route_name: &str) -> bool {
        self.factories.contains_key(route_name)
    }

    /// Registered route names, sorted
    pub fn route_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ScreenRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenRegistry")
            .field("routes", &self.route_names())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use app_core::{
        Appointment, AuthError, AuthOutcome, Authenticator, Credentials, ReminderError,
        ReminderScheduler,
    };
    use mockall::mock;

    mock! {
        pub Auth {}
        impl Authenticator for Auth {
            fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome, AuthError>;
        }
    }

    mock! {
        pub Reminders {}
        impl ReminderScheduler for Reminders {
            fn schedule(&self, appointment: &Appointment) -> Result<(), ReminderError>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Destination, Route, Tab};

    #[test]
    fn test_defaults_cover_every_leaf_route() {
        let registry = ScreenRegistry::with_defaults(ScreenServices::default());
        for route in [Route::Welcome, Route::Login] {
            assert!(registry.contains(route.name()));
        }
        for tab in Tab::all() {
            let screen = registry.build(tab.name()).unwrap();
            assert_eq!(screen.route_name(), tab.name());
        }
        assert!(!registry.contains("main"));
    }

    #[test]
    fn test_build_unregistered_fails() {
        let registry = ScreenRegistry::new();
        let err = registry.build("welcome").err().unwrap();
        assert!(matches!(err, ScreenError::Unregistered(ref r) if r == "welcome"));
    }

    #[test]
    fn test_register_replaces_factory() {
        let mut registry = ScreenRegistry::with_defaults(ScreenServices::default());
        registry.register("perfil", || Box::new(PlaceholderScreen::new("perfil", "Ajustes")));
        let screen = registry.build("perfil").unwrap();
        assert!(screen.render().contains_text("Pantalla de Ajustes"));
    }

    #[test]
    fn test_ui_event_serialization() {
        let event = UiEvent::press_key("citas.add_reminder", "2");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "press");
        assert_eq!(json["key"], "2");

        let parsed: UiEvent =
            serde_json::from_str(r#"{"kind":"text_changed","field":"password","value":"x"}"#)
                .unwrap();
        assert_eq!(parsed, UiEvent::text_changed("password", "x"));
    }
}
