//! Patient notifications
//!
//! Notification items are display-only records. An item built without an
//! explicit identifier gets a fresh UUID v4.

use serde::{Deserialize, Serialize};

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    /// A lab or exam result is available
    Result,
    /// Upcoming appointment reminder
    Reminder,
    /// Message from the hospital
    Message,
    /// General information
    #[default]
    Info,
}

impl NotificationCategory {
    /// Icon name for this category
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationCategory::Result => "file",
            NotificationCategory::Reminder => "calendar",
            NotificationCategory::Message => "mail",
            NotificationCategory::Info => "info",
        }
    }
}

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    /// Unique identifier, used as the list key
    pub id: String,
    /// Headline
    pub title: String,
    /// Secondary line
    pub subtitle: String,
    /// Category
    #[serde(default)]
    pub category: NotificationCategory,
}

impl NotificationItem {
    /// Create a notification with a freshly generated identifier
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        category: NotificationCategory,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            subtitle: subtitle.into(),
            category,
        }
    }

    /// Create an `Info` notification
    pub fn info(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::new(title, subtitle, NotificationCategory::default())
    }

    /// Replace the generated identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Placeholder notifications used until a real data source is injected.
///
/// Content and order are fixed; identifiers are regenerated on every call.
pub fn sample_notifications() -> Vec<NotificationItem> {
    vec![
        NotificationItem::new(
            "Resultado disponible",
            "Perfil lipídico - 02 May 2025",
            NotificationCategory::Result,
        ),
        NotificationItem::new(
            "Recordatorio de cita",
            "Cita con Dra. Gómez el 02 Oct 2025",
            NotificationCategory::Reminder,
        ),
        NotificationItem::new(
            "Mensaje importante",
            "Cambios en horario de atención",
            NotificationCategory::Message,
        ),
        NotificationItem::new(
            "Actualización de la app",
            "Nuevas funcionalidades disponibles. ¡Actualiza ahora!",
            NotificationCategory::Info,
        ),
    ]
}
