//! Patient pre-check-in: turns a form submission into a Pending [`CheckIn`]
//! record for the admin triage list.
//!
//! Unimed Porto Alegre check-ins must carry the token issued by the
//! carrier's biometric validation; other carriers check in without one.

use rand::Rng;
use uuid::Uuid;

use crate::models::{CheckIn, CheckInStatus, Patient};
use crate::seed::TOKEN_REQUIRED_CARRIER;

/// What the pre-check-in screen collects.
#[derive(Debug, Clone)]
pub struct CheckInForm {
    /// Reported pain on the 0-10 scale.
    pub pain_level: u8,
    pub comments: String,
    /// Carrier verification token, when the patient's insurance issues one.
    pub token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckInError {
    #[error("Pain level {0} is outside the 0-10 scale")]
    PainLevelOutOfRange(u8),
    #[error("{0} requires the carrier verification token to finish check-in")]
    TokenRequired(String),
    #[error("Patient has no active treatment to check in for")]
    NoActiveTreatment,
}

/// Six-digit verification token, zero-padded, as issued by the carrier
/// validation flow in the demo.
pub fn generate_token() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{n:06}")
}

/// Build the Pending check-in record a submission produces. `timestamp` is
/// the arrival time as displayed, e.g. "14:20".
pub fn submit_checkin(
    patient: &Patient,
    form: CheckInForm,
    timestamp: &str,
) -> Result<CheckIn, CheckInError> {
    if form.pain_level > 10 {
        return Err(CheckInError::PainLevelOutOfRange(form.pain_level));
    }
    if patient.insurance == TOKEN_REQUIRED_CARRIER && form.token.is_none() {
        return Err(CheckInError::TokenRequired(patient.insurance.clone()));
    }
    let treatment = patient
        .active_treatment()
        .ok_or(CheckInError::NoActiveTreatment)?;

    let checkin = CheckIn {
        id: Uuid::new_v4().to_string(),
        patient_id: patient.id.clone(),
        patient_name: patient.full_name(),
        insurance: patient.insurance.clone(),
        pain_level: form.pain_level,
        comments: form.comments,
        token: form.token,
        timestamp: timestamp.into(),
        treatment_title: treatment.title.clone(),
        status: CheckInStatus::Pending,
        workflow: None,
    };
    tracing::info!(patient = %checkin.patient_id, "Pre-check-in submitted");
    Ok(checkin)
}
