//! Domain model: check-ins, appointments, requisitions, notifications and
//! the patient profile. All types serialize to JSON for the portal shell.

pub mod appointment;
pub mod checkin;
pub mod enums;
pub mod notification;
pub mod patient;
pub mod requisition;

pub use appointment::Appointment;
pub use checkin::CheckIn;
pub use enums::{
    AppointmentStatus, AppointmentType, CheckInStatus, NotificationKind, PainSeverity,
    PractitionerCategory, PreferredPeriod, RequisitionStatus, RequisitionType, UserRole,
    WorkflowTrack,
};
pub use notification::Notification;
pub use patient::{ClinicalRecord, Medication, Patient, Session, Treatment, TreatmentType};
pub use requisition::Requisition;

/// Errors from model parsing.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
