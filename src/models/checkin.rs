use serde::{Deserialize, Serialize};

use super::enums::{CheckInStatus, PainSeverity, WorkflowTrack};

/// A patient's pre-visit submission, as it arrives from the patient app.
///
/// The workflow track is admin-side state: `None` until the check-in is
/// confirmed, then defaults to Agenda and toggles freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub insurance: String,
    /// Reported pain on the 0-10 scale.
    pub pain_level: u8,
    pub comments: String,
    /// Insurance verification token, when the carrier requires one.
    pub token: Option<String>,
    /// Arrival time as displayed, e.g. "14:20".
    pub timestamp: String,
    pub treatment_title: String,
    pub status: CheckInStatus,
    pub workflow: Option<WorkflowTrack>,
}

impl CheckIn {
    /// Triage banding for the reported pain level.
    pub fn severity(&self) -> PainSeverity {
        PainSeverity::from_level(self.pain_level)
    }
}
