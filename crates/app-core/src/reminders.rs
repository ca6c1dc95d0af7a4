//! Appointment reminders
//!
//! Reminder creation has no implementation yet. [`UnimplementedReminders`]
//! is the default scheduler and always reports [`ReminderError::NotImplemented`].

use thiserror::Error;

use crate::appointments::Appointment;

/// Reminder error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReminderError {
    /// No reminder backend exists
    #[error("Reminder creation not implemented (appointment {0})")]
    NotImplemented(String),

    /// The referenced appointment is not known
    #[error("Appointment not found: {0}")]
    AppointmentNotFound(String),
}

/// Result type for reminder operations
pub type Result<T> = std::result::Result<T, ReminderError>;

/// Seam for scheduling appointment reminders
pub trait ReminderScheduler {
    /// Schedule a reminder for an appointment
    fn schedule(&self, appointment: &Appointment) -> Result<()>;
}

/// Scheduler used until reminders are built
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedReminders;

impl ReminderScheduler for UnimplementedReminders {
    fn schedule(&self, appointment: &Appointment) -> Result<()> {
        tracing::warn!(appointment = %appointment.id, "reminder creation not implemented");
        Err(ReminderError::NotImplemented(appointment.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::sample_appointments;

    #[test]
    fn test_unimplemented_reminders() {
        let appointment = &sample_appointments()[0];
        assert_eq!(
            UnimplementedReminders.schedule(appointment),
            Err(ReminderError::NotImplemented("1".to_string()))
        );
    }
}
