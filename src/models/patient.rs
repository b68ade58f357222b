use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient profile as held by the portal. Feeds the pre-check-in flow and
/// the context object passed to the AI advice caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub insurance: String,
    pub insurance_plan: String,
    pub treatments: Vec<Treatment>,
    pub medications: Vec<Medication>,
    pub history: Vec<ClinicalRecord>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The treatment a check-in is filed against: the most recently started
    /// one. `None` for patients without an active plan.
    pub fn active_treatment(&self) -> Option<&Treatment> {
        self.treatments.iter().max_by_key(|t| t.start_date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentType {
    Physiotherapy,
    Orthopedics,
    PostOp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub treatment_type: TreatmentType,
    pub title: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
    pub start_date: NaiveDate,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Missed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub date: NaiveDate,
    pub status: SessionStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub last_taken: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub doctor: String,
}
