//! Core domain for Nexo Paciente
//!
//! This crate holds the patient-facing domain records (appointments,
//! notifications, queue status, patient dashboard data), the sample data
//! providers that stand in for a backend, and the stubbed seams for
//! authentication and reminders.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appointments;
pub mod auth;
pub mod notifications;
pub mod patient;
pub mod queue;
pub mod reminders;

pub use appointments::{sample_appointments, Appointment, AppointmentStatus};
pub use auth::{AcceptAllAuthenticator, AuthError, AuthOutcome, Authenticator, Credentials};
pub use notifications::{sample_notifications, NotificationCategory, NotificationItem};
pub use patient::{
    sample_patient, sample_quick_actions, sample_recent_activity, PatientProfile, QuickAction,
    RecentActivity,
};
pub use queue::{sample_queue_status, QueueStatus, QUEUE_TIPS};
pub use reminders::{ReminderError, ReminderScheduler, UnimplementedReminders};
