//! Notifications list

use app_core::{sample_notifications, NotificationItem};

use crate::components::{
    Alignment, Button, Card, Container, Icon, JustifyContent, ListView, Scaffold, Spacer,
    Spacing, Text, TopBar, ViewNode,
};
use crate::navigation::Router;
use crate::theme::brand;
use crate::tokens::{elevation, radius, spacing};
use crate::typography::TypographyVariant;

use super::{not_implemented, EventOutcome, Result, Screen, UiEvent};

/// Route name
pub const ROUTE: &str = "notificaciones";
/// Settings action handler
pub const SETTINGS: &str = "notificaciones.settings";
/// Empty state message
pub const EMPTY_MESSAGE: &str = "No tienes notificaciones.";

/// One card per notification, keyed by id
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationsScreen {
    items: Vec<NotificationItem>,
}

impl Default for NotificationsScreen {
    fn default() -> Self {
        Self::new(sample_notifications())
    }
}

impl NotificationsScreen {
    /// Create the list
    pub fn new(items: Vec<NotificationItem>) -> Self {
        Self { items }
    }

    /// Notifications shown
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }
}

fn notification_card(item: &NotificationItem) -> Card {
    Card::new()
        .with_radius(radius::CARD)
        .with_elevation(elevation::MEDIUM)
        .with_color(brand::WHITE)
        .child(
            Container::row()
                .with_align(Alignment::Center)
                .with_gap(spacing::SPACE_MD)
                .child(Icon::new(item.category.icon()).with_color(brand::PRIMARY))
                .child(
                    Container::column()
                        .child(Text::new(item.title.clone()).bold().with_color(brand::BLACK))
                        .child(Spacer::fixed(spacing::SPACE_XS))
                        .child(
                            Text::new(item.subtitle.clone())
                                .with_variant(TypographyVariant::BodyMedium)
                                .with_color(brand::GRAY_MUTED),
                        ),
                ),
        )
}

impl Screen for NotificationsScreen {
    fn route_name(&self) -> &'static str {
        ROUTE
    }

    fn render(&self) -> ViewNode {
        let top_bar = TopBar::new("Notificaciones")
            .with_title_color(brand::BLACK)
            .with_background(brand::WHITE)
            .with_action(
                Button::icon_only("settings", "Ajustes de notificaciones").on_press(SETTINGS),
            );

        let body: ViewNode = if self.items.is_empty() {
            Container::column()
                .with_justify(JustifyContent::Center)
                .with_align(Alignment::Center)
                .with_padding(Spacing::uniform(spacing::SPACE_LG))
                .child(Text::new(EMPTY_MESSAGE).with_color(brand::GRAY_MUTED))
                .into()
        } else {
            let mut list = ListView::new()
                .with_gap(spacing::SPACE_MD)
                .with_content_padding(Spacing::symmetric(spacing::SPACE_LG, spacing::SPACE_LG));
            for item in &self.items {
                list = list.item(item.id.clone(), notification_card(item));
            }
            list.into()
        };

        Scaffold::new(body).with_top_bar(top_bar).into()
    }

    fn handle_event(&mut self, event: &UiEvent, _router: &mut Router) -> Result<EventOutcome> {
        match event {
            UiEvent::Press { handler, .. } if handler == SETTINGS => {
                Ok(not_implemented(ROUTE, "notification_settings"))
            }
            _ => Ok(EventOutcome::Ignored),
        }
    }
}
