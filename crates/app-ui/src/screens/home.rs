//! Home dashboard

use app_core::{
    sample_quick_actions, sample_recent_activity, PatientProfile, QuickAction, RecentActivity,
};

use crate::components::{
    Alignment, Button, Card, Container, Dimension, Icon, JustifyContent, Scaffold, Spacer,
    Spacing, StyleProps, Text, TextAlign, TopBar, ViewNode,
};
use crate::navigation::Router;
use crate::theme::brand;
use crate::tokens::{elevation, radius, sizing, spacing};
use crate::typography::{font_weight, TypographyVariant};

use super::{not_implemented, EventOutcome, Result, Screen, UiEvent};

/// Route name
pub const ROUTE: &str = "home";
/// Settings action handler
pub const SETTINGS: &str = "home.settings";

/// Greeting, profile card, quick actions and recent activity
#[derive(Debug, Clone, PartialEq)]
pub struct HomeScreen {
    patient: PatientProfile,
    quick_actions: Vec<QuickAction>,
    recent_activity: Vec<RecentActivity>,
}

impl HomeScreen {
    /// Create a dashboard from explicit data
    pub fn new(
        patient: PatientProfile,
        quick_actions: Vec<QuickAction>,
        recent_activity: Vec<RecentActivity>,
    ) -> Self {
        Self {
            patient,
            quick_actions,
            recent_activity,
        }
    }

    /// Dashboard for `patient` with the sample quick actions and activity
    pub fn with_sample_data(patient: PatientProfile) -> Self {
        Self::new(patient, sample_quick_actions(), sample_recent_activity())
    }

    fn profile_row(&self) -> Container {
        let avatar = Container::column()
            .with_justify(JustifyContent::Center)
            .with_align(Alignment::Center)
            .with_style(StyleProps {
                width: Some(Dimension::Fixed(sizing::AVATAR)),
                height: Some(Dimension::Fixed(sizing::AVATAR)),
                background_color: Some(brand::AVATAR_BACKGROUND.to_string()),
                border_radius: Some(radius::FULL),
                ..Default::default()
            })
            .child(
                Text::new(self.patient.initials())
                    .bold()
                    .with_color(brand::AVATAR_TEXT),
            );

        Container::row()
            .with_align(Alignment::Center)
            .with_gap(spacing::SPACE_LG)
            .with_padding(Spacing::symmetric(spacing::SPACE_SM, spacing::SPACE_LG))
            .child(avatar)
            .child(
                Container::column()
                    .child(Text::new(self.patient.display_name.clone()).bold())
                    .child(
                        Text::new(self.patient.status_label.clone())
                            .with_variant(TypographyVariant::BodyMedium)
                            .with_color(brand::GRAY),
                    ),
            )
    }

    fn quick_actions_card(&self) -> Card {
        let row = self.quick_actions.iter().fold(
            Container::row().with_justify(JustifyContent::SpaceAround),
            |row, action| {
                row.child(
                    Container::column()
                        .with_align(Alignment::Center)
                        .with_gap(spacing::SPACE_XS)
                        .child(Icon::new(action.icon.clone()).with_color(action.icon_color.clone()))
                        .child(
                            Text::new(action.title.clone())
                                .with_variant(TypographyVariant::BodyMedium)
                                .with_weight(font_weight::MEDIUM)
                                .with_align(TextAlign::Center),
                        )
                        .child(
                            Text::new(action.subtitle.clone())
                                .with_variant(TypographyVariant::BodySmall)
                                .with_color(brand::GRAY)
                                .with_align(TextAlign::Center),
                        ),
                )
            },
        );

        Card::new()
            .with_radius(radius::CARD_LG)
            .with_elevation(elevation::LOW)
            .with_color(brand::WHITE)
            .child(row)
    }

    fn activity_card(activity: &RecentActivity) -> Card {
        Card::new()
            .with_radius(radius::CARD)
            .with_color(brand::WHITE)
            .child(Text::new(activity.title.clone()).bold())
            .child(Spacer::fixed(spacing::SPACE_XS))
            .child(
                Text::new(activity.summary())
                    .with_variant(TypographyVariant::BodyMedium)
                    .with_color(brand::GRAY),
            )
    }
}

impl Screen for HomeScreen {
    fn route_name(&self) -> &'static str {
        ROUTE
    }

    fn render(&self) -> ViewNode {
        let top_bar = TopBar::new(self.patient.greeting())
            .with_title_variant(TypographyVariant::HeadlineMedium)
            .bold()
            .with_action(Button::icon_only("settings", "Ajustes").on_press(SETTINGS));

        let section_padding = StyleProps {
            padding: Some(Spacing::symmetric(spacing::SPACE_LG, spacing::SPACE_LG)),
            ..Default::default()
        };

        let mut body = Container::column()
            .scrollable()
            .with_style(StyleProps {
                width: Some(Dimension::Fill),
                height: Some(Dimension::Fill),
                background_color: Some(brand::BACKGROUND_GROUPED.to_string()),
                ..Default::default()
            })
            .child(self.profile_row())
            .child(
                Container::column()
                    .with_padding(Spacing::symmetric(spacing::SPACE_SM, spacing::SPACE_LG))
                    .child(self.quick_actions_card()),
            )
            .child(
                Text::new("Actividad reciente")
                    .with_variant(TypographyVariant::TitleMedium)
                    .bold()
                    .with_style(section_padding),
            );

        for activity in &self.recent_activity {
            body = body.child(
                Container::column()
                    .with_padding(Spacing::symmetric(0.0, spacing::SPACE_LG))
                    .child(Self::activity_card(activity)),
            );
        }

        Scaffold::new(body).with_top_bar(top_bar).into()
    }

    fn handle_event(&mut self, event: &UiEvent, _router: &mut Router) -> Result<EventOutcome> {
        match event {
            UiEvent::Press { handler, .. } if handler == SETTINGS => {
                Ok(not_implemented(ROUTE, "settings"))
            }
            _ => Ok(EventOutcome::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::sample_patient;

    #[test]
    fn test_render_dashboard() {
        let tree = HomeScreen::with_sample_data(sample_patient()).render();
        let texts = tree.texts();
        assert_eq!(texts[0], "Hola, María");
        assert!(tree.contains_text("MP"));
        assert!(tree.contains_text("María Pérez"));
        assert!(tree.contains_text("Paciente registrado"));
        assert!(tree.contains_text("Actividad reciente"));
        assert!(tree.contains_text("Consulta con Dr. López"));
        assert!(tree.contains_text("12 Sep 2025 • Cardiología • Completada"));

        let recent = texts.iter().position(|t| t == "Actividad reciente").unwrap();
        let activity = texts.iter().position(|t| t == "Consulta con Dr. López").unwrap();
        assert!(recent < activity);
    }

    #[test]
    fn test_quick_actions_in_order() {
        let tree = HomeScreen::with_sample_data(sample_patient()).render();
        let texts = tree.texts();
        let titles: Vec<usize> = ["Resultados", "Notificaciones"]
            .iter()
            .map(|t| texts.iter().position(|x| x == *t).unwrap())
            .collect();
        assert!(titles[0] < titles[1]);
        assert!(tree.contains_text("2 próximas"));
        assert!(tree.contains_text("3 nuevas"));
    }

    #[test]
    fn test_avatar_is_fixed_circle() {
        let tree = HomeScreen::with_sample_data(sample_patient()).render();
        let mut avatars = Vec::new();
        tree.walk(&mut |node| {
            if let ViewNode::Container(c) = node {
                if c.style.width == Some(Dimension::Fixed(sizing::AVATAR)) {
                    avatars.push(c);
                }
            }
        });
        assert_eq!(avatars.len(), 1);
        let avatar = avatars[0];
        assert_eq!(avatar.style.height, Some(Dimension::Fixed(48.0)));
        assert_eq!(avatar.style.border_radius, Some(radius::FULL));
        assert_eq!(avatar.style.background_color.as_deref(), Some(brand::AVATAR_BACKGROUND));
    }

    #[test]
    fn test_greeting_uses_configured_patient() {
        let tree = HomeScreen::with_sample_data(PatientProfile::new("Jorge Andrade")).render();
        assert_eq!(tree.texts()[0], "Hola, Jorge");
        assert!(tree.contains_text("JA"));
    }

    #[test]
    fn test_settings_not_implemented() {
        let mut screen = HomeScreen::with_sample_data(sample_patient());
        let mut router = Router::new();
        let outcome = screen
            .handle_event(&UiEvent::press(SETTINGS), &mut router)
            .unwrap();
        assert_eq!(outcome, EventOutcome::NotImplemented("settings".to_string()));
    }
}
