//! Queue status ("Turnos")

use app_core::{sample_queue_status, QueueStatus, QUEUE_TIPS};

use crate::components::{Card, Container, Scaffold, Spacing, Text, TopBar, ViewNode};
use crate::navigation::Router;
use crate::theme::brand;
use crate::tokens::{elevation, radius, spacing};
use crate::typography::TypographyVariant;

use super::{EventOutcome, Result, Screen, UiEvent};

/// Route name
pub const ROUTE: &str = "turnos";

/// Current number card and tips card
#[derive(Debug, Clone, PartialEq)]
pub struct TurnsScreen {
    status: QueueStatus,
}

impl Default for TurnsScreen {
    fn default() -> Self {
        Self::new(sample_queue_status())
    }
}

impl TurnsScreen {
    /// Create the screen for a queue snapshot
    pub fn new(status: QueueStatus) -> Self {
        Self { status }
    }

    fn number_card(&self) -> Card {
        Card::new()
            .with_radius(radius::CARD_LG)
            .with_elevation(elevation::HIGH)
            .with_color(brand::WHITE)
            .with_padding(spacing::SPACE_XL)
            .centered()
            .child(Text::new("Número actual").with_color(brand::GRAY))
            .child(
                Text::new(self.status.current_number.clone())
                    .with_variant(TypographyVariant::Display)
                    .bold()
                    .with_color(brand::PRIMARY),
            )
            .child(
                Text::new(format!("Tu posición: {}", self.status.position))
                    .with_variant(TypographyVariant::TitleMedium),
            )
            .child(
                Text::new(format!("Tiempo estimado: {}", self.status.estimated_wait))
                    .with_variant(TypographyVariant::BodyMedium)
                    .with_color(brand::GRAY),
            )
    }

    fn tips_card() -> Card {
        Card::new()
            .with_radius(radius::CARD_LG)
            .with_color(brand::WHITE)
            .child(
                Text::new("💡 Consejos")
                    .with_variant(TypographyVariant::TitleMedium)
                    .bold(),
            )
            .child(Text::new(QUEUE_TIPS).with_variant(TypographyVariant::BodyMedium))
    }
}

impl Screen for TurnsScreen {
    fn route_name(&self) -> &'static str {
        ROUTE
    }

    fn render(&self) -> ViewNode {
        let body = Container::column()
            .with_padding(Spacing::uniform(spacing::SPACE_LG))
            .with_gap(spacing::SPACE_XL)
            .child(self.number_card())
            .child(Self::tips_card());

        Scaffold::new(body)
            .with_top_bar(TopBar::new("Turnos").bold())
            .into()
    }

    fn handle_event(&mut self, _event: &UiEvent, _router: &mut Router) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sample_status() {
        let tree = TurnsScreen::default().render();
        assert_eq!(
            tree.texts(),
            vec![
                "Turnos",
                "Número actual",
                "42",
                "Tu posición: 5",
                "Tiempo estimado: 18 minutos",
                "💡 Consejos",
                QUEUE_TIPS,
            ]
        );
    }

    #[test]
    fn test_render_custom_status() {
        let tree = TurnsScreen::new(QueueStatus::new("7", "1", "2 minutos")).render();
        assert!(tree.contains_text("Tu posición: 1"));
        assert!(tree.contains_text("Tiempo estimado: 2 minutos"));
    }
}
