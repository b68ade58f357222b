use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{PractitionerCategory, PreferredPeriod, RequisitionStatus, RequisitionType};

/// A patient-filed request: exam, certificate, imaging, insurance
/// validation, or an appointment request awaiting admin approval.
///
/// Appointment requests carry the practitioner category and preferred
/// period; other types leave both `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requisition {
    pub id: String,
    #[serde(rename = "type")]
    pub requisition_type: RequisitionType,
    pub status: RequisitionStatus,
    pub date: NaiveDate,
    pub description: String,
    pub file_name: Option<String>,
    pub practitioner_category: Option<PractitionerCategory>,
    pub preferred_period: Option<PreferredPeriod>,
}

impl Requisition {
    pub fn is_appointment_request(&self) -> bool {
        self.requisition_type == RequisitionType::AppointmentRequest
    }
}
