//! Waiting-room queue status

use serde::{Deserialize, Serialize};

/// Advice shown next to the queue status
pub const QUEUE_TIPS: &str =
    "Mantente atento a las notificaciones del hospital para cuando se acerque tu turno.";

/// Snapshot of the patient's place in the queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatus {
    /// Number currently being served
    pub current_number: String,
    /// Patient position in the queue
    pub position: String,
    /// Estimated wait, already formatted
    pub estimated_wait: String,
}

impl QueueStatus {
    /// Create a queue status
    pub fn new(
        current_number: impl Into<String>,
        position: impl Into<String>,
        estimated_wait: impl Into<String>,
    ) -> Self {
        Self {
            current_number: current_number.into(),
            position: position.into(),
            estimated_wait: estimated_wait.into(),
        }
    }
}

/// Placeholder queue status
pub fn sample_queue_status() -> QueueStatus {
    QueueStatus::new("42", "5", "18 minutos")
}
