//! Placeholder for destinations without content yet

use crate::components::{Alignment, Container, JustifyContent, Text, ViewNode};
use crate::navigation::Router;
use crate::typography::TypographyVariant;

use super::{EventOutcome, Result, Screen, UiEvent};

/// Profile tab route
pub const PROFILE_ROUTE: &str = "perfil";

/// Centered "Pantalla de {title}" label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderScreen {
    route: &'static str,
    title: String,
}

impl PlaceholderScreen {
    /// Create a placeholder for a route
    pub fn new(route: &'static str, title: impl Into<String>) -> Self {
        Self {
            route,
            title: title.into(),
        }
    }

    /// Profile tab placeholder
    pub fn profile() -> Self {
        Self::new(PROFILE_ROUTE, "Perfil")
    }
}

impl Screen for PlaceholderScreen {
    fn route_name(&self) -> &'static str {
        self.route
    }

    fn render(&self) -> ViewNode {
        Container::column()
            .with_justify(JustifyContent::Center)
            .with_align(Alignment::Center)
            .child(
                Text::new(format!("Pantalla de {}", self.title))
                    .with_variant(TypographyVariant::HeadlineMedium),
            )
            .into()
    }

    fn handle_event(&mut self, _event: &UiEvent, _router: &mut Router) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignored)
    }
}
