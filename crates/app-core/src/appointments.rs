//! Medical appointments
//!
//! Appointments are immutable values handed to the appointments screen for a
//! single render pass. The identifier doubles as the list key and is assumed
//! unique; nothing enforces it.

use serde::{Deserialize, Serialize};

/// Status of a scheduled appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Confirmed by the clinic
    Confirmed,
    /// Awaiting confirmation
    Pending,
    /// Cancelled by either party
    Cancelled,
}

impl AppointmentStatus {
    /// Get all statuses in display order
    pub fn all() -> [AppointmentStatus; 3] {
        [
            AppointmentStatus::Confirmed,
            AppointmentStatus::Pending,
            AppointmentStatus::Cancelled,
        ]
    }
}

/// A scheduled medical appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Identifier, used as the list key
    pub id: String,
    /// Doctor display name
    pub doctor_name: String,
    /// Medical specialty
    pub specialty: String,
    /// Human readable date
    pub date: String,
    /// Human readable time
    pub time: String,
    /// Room, office or clinic
    pub location: String,
    /// Current status
    pub status: AppointmentStatus,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    /// Create a new appointment without notes
    pub fn new(
        id: impl Into<String>,
        doctor_name: impl Into<String>,
        specialty: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
        status: AppointmentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            doctor_name: doctor_name.into(),
            specialty: specialty.into(),
            date: date.into(),
            time: time.into(),
            location: location.into(),
            status,
            notes: None,
        }
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Card heading, "{doctor} - {specialty}"
    pub fn heading(&self) -> String {
        format!("{} - {}", self.doctor_name, self.specialty)
    }
}

/// Placeholder appointments used until a real data source is injected
pub fn sample_appointments() -> Vec<Appointment> {
    vec![
        Appointment::new(
            "1",
            "Dra. Ana Gómez",
            "Pediatría",
            "2 de octubre de 2025",
            "9:00 AM",
            "Sala A-201",
            AppointmentStatus::Confirmed,
        ),
        Appointment::new(
            "2",
            "Dr. Carlos Ruiz",
            "Cardiología",
            "15 de noviembre de 2025",
            "11:30 AM",
            "Consultorio 305",
            AppointmentStatus::Pending,
        ),
        Appointment::new(
            "3",
            "Dra. Laura Méndez",
            "Dermatología",
            "28 de noviembre de 2025",
            "03:00 PM",
            "Clínica Piel Sana",
            AppointmentStatus::Confirmed,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_appointments_are_fixed() {
        let first = sample_appointments();
        let second = sample_appointments();
        assert_eq!(first, second);

        let ids: Vec<&str> = first.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sample_statuses() {
        let statuses: Vec<AppointmentStatus> =
            sample_appointments().iter().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Pending,
                AppointmentStatus::Confirmed
            ]
        );
    }

    #[test]
    fn test_heading() {
        let appointment = &sample_appointments()[1];
        assert_eq!(appointment.heading(), "Dr. Carlos Ruiz - Cardiología");
    }

    #[test]
    fn test_notes_are_optional_in_json() {
        let appointment = sample_appointments().remove(0);
        let json = serde_json::to_value(&appointment).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["doctorName"], "Dra. Ana Gómez");

        let with_notes = appointment.with_notes("Traer carnet de vacunas");
        let json = serde_json::to_string(&with_notes).unwrap();
        let parsed: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.notes.as_deref(), Some("Traer carnet de vacunas"));
    }
}
