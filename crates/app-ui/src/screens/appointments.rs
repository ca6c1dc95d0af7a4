//! Appointments list ("Mis citas")

use std::rc::Rc;

use app_core::{sample_appointments, Appointment, ReminderError, ReminderScheduler};

use crate::components::{
    Alignment, Button, ButtonVariant, Card, Container, Dimension, Icon, JustifyContent, ListView,
    Scaffold, Spacer, Spacing, StyleProps, Text, TopBar, ViewNode,
};
use crate::navigation::Router;
use crate::theme::{brand, status_display};
use crate::tokens::{elevation, sizing, spacing};
use crate::typography::{font_weight, TypographyVariant};

use super::{not_implemented, EventOutcome, Result, Screen, UiEvent};

/// Route name
pub const ROUTE: &str = "citas";
/// Add reminder button handler; the row key is the appointment id
pub const ADD_REMINDER: &str = "citas.add_reminder";
/// Empty state message
pub const EMPTY_MESSAGE: &str = "No tienes citas programadas.";

/// One card per appointment, in input order
pub struct AppointmentsScreen {
    appointments: Vec<Appointment>,
    reminders: Rc<dyn ReminderScheduler>,
}

impl AppointmentsScreen {
    /// Create the list
    pub fn new(appointments: Vec<Appointment>, reminders: Rc<dyn ReminderScheduler>) -> Self {
        Self {
            appointments,
            reminders,
        }
    }

    /// List backed by the sample appointments
    pub fn with_sample_data(reminders: Rc<dyn ReminderScheduler>) -> Self {
        Self::new(sample_appointments(), reminders)
    }

    /// Appointments shown
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    fn add_reminder(&self, key: Option<&str>) -> Result<EventOutcome> {
        let Some(id) = key else {
            tracing::debug!("add reminder press without row key");
            return Ok(EventOutcome::Ignored);
        };
        let appointment = self
            .appointments
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| ReminderError::AppointmentNotFound(id.to_string()))?;

        match self.reminders.schedule(appointment) {
            Ok(()) => Ok(EventOutcome::Handled),
            Err(ReminderError::NotImplemented(_)) => Ok(not_implemented(ROUTE, "add_reminder")),
            Err(e) => Err(e.into()),
        }
    }
}

impl std::fmt::Debug for AppointmentsScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppointmentsScreen")
            .field("appointments", &self.appointments)
            .finish_non_exhaustive()
    }
}

fn info_row(label: &str, value: &str) -> Container {
    Container::row()
        .child(
            Text::new(label)
                .with_variant(TypographyVariant::BodyMedium)
                .with_weight(font_weight::SEMI_BOLD)
                .with_style(StyleProps {
                    width: Some(Dimension::Fixed(sizing::INFO_LABEL_WIDTH)),
                    ..Default::default()
                }),
        )
        .child(Text::new(value).with_variant(TypographyVariant::BodyMedium))
}

fn appointment_card(appointment: &Appointment) -> Card {
    let status = status_display(appointment.status);

    let mut card = Card::new()
        .with_elevation(elevation::LOW)
        .child(
            Text::new(appointment.heading())
                .with_variant(TypographyVariant::TitleMedium)
                .bold(),
        )
        .child(Spacer::fixed(spacing::SPACE_SM));

    for (label, value) in [
        ("Fecha:", &appointment.date),
        ("Hora:", &appointment.time),
        ("Ubicación:", &appointment.location),
    ] {
        card = card
            .child(info_row(label, value))
            .child(Spacer::fixed(spacing::SPACE_XS));
    }

    if let Some(notes) = &appointment.notes {
        card = card.child(
            Text::new(notes.clone())
                .with_variant(TypographyVariant::BodySmall)
                .with_color(brand::GRAY),
        );
    }

    card.child(Spacer::fixed(spacing::SPACE_MD))
        .child(
            Text::new(status.label)
                .with_variant(TypographyVariant::BodyMedium)
                .bold()
                .with_color(status.color),
        )
        .child(Spacer::fixed(spacing::SPACE_MD))
        .child(
            Button::new("Añadir recordatorio")
                .with_variant(ButtonVariant::Outline)
                .with_icon(Icon::new("add_alert").with_size(sizing::icon::SM))
                .align_self(Alignment::End)
                .on_press(ADD_REMINDER),
        )
}

impl Screen for AppointmentsScreen {
    fn route_name(&self) -> &'static str {
        ROUTE
    }

    fn render(&self) -> ViewNode {
        let body: ViewNode = if self.appointments.is_empty() {
            Container::column()
                .with_justify(JustifyContent::Center)
                .with_align(Alignment::Center)
                .with_padding(Spacing::uniform(spacing::SPACE_LG))
                .child(Text::new(EMPTY_MESSAGE))
                .into()
        } else {
            self.appointments
                .iter()
                .fold(
                    ListView::new()
                        .with_gap(spacing::SPACE_LG)
                        .with_content_padding(Spacing::uniform(spacing::SPACE_LG)),
                    |list, a| list.item(a.id.clone(), appointment_card(a)),
                )
                .into()
        };

        Scaffold::new(body)
            .with_top_bar(TopBar::new("Mis citas").bold())
            .into()
    }

    fn handle_event(&mut self, event: &UiEvent, _router: &mut Router) -> Result<EventOutcome> {
        match event {
            UiEvent::Press { handler, key } if handler == ADD_REMINDER => {
                self.add_reminder(key.as_deref())
            }
            _ => Ok(EventOutcome::Ignored),
        }
    }
}
