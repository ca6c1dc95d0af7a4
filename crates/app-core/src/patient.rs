//! Patient dashboard data
//!
//! Profile, quick actions and recent activity shown on the home screen.

use serde::{Deserialize, Serialize};

/// The signed-in patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    /// Full display name
    pub display_name: String,
    /// Registration label shown under the name
    pub status_label: String,
}

impl PatientProfile {
    /// Create a registered patient profile
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            status_label: "Paciente registrado".to_string(),
        }
    }

    /// First name, used in the greeting
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.display_name)
    }

    /// Avatar initials: first letter of the first two words, uppercased
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Top bar greeting
    pub fn greeting(&self) -> String {
        format!("Hola, {}", self.first_name())
    }
}

/// Shortcut tile on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    /// Icon name
    pub icon: String,
    /// Title (may contain a line break)
    pub title: String,
    /// Subtitle
    pub subtitle: String,
    /// Icon tint as a hex string
    pub icon_color: String,
}

impl QuickAction {
    /// Create a quick action
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon_color: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            icon_color: icon_color.into(),
        }
    }
}

/// Past visit shown under "Actividad reciente"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    /// Headline
    pub title: String,
    /// Human readable date
    pub date: String,
    /// Specialty
    pub specialty: String,
    /// Outcome label
    pub outcome: String,
}

impl RecentActivity {
    /// Detail line, "{date} • {specialty} • {outcome}"
    pub fn summary(&self) -> String {
        format!("{} • {} • {}", self.date, self.specialty, self.outcome)
    }
}

/// Placeholder patient
pub fn sample_patient() -> PatientProfile {
    PatientProfile::new("María Pérez")
}

/// Placeholder quick actions
pub fn sample_quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("calendar", "Próximas\ncitas", "2 próximas", "#0000FF"),
        QuickAction::new("file", "Resultados", "Últimos disponibles", "#00FF00"),
        QuickAction::new("bell", "Notificaciones", "3 nuevas", "#0000FF"),
    ]
}

/// Placeholder activity feed
pub fn sample_recent_activity() -> Vec<RecentActivity> {
    vec![RecentActivity {
        title: "Consulta con Dr. López".to_string(),
        date: "12 Sep 2025".to_string(),
        specialty: "Cardiología".to_string(),
        outcome: "Completada".to_string(),
    }]
}
