//! Request center: patient-filed requisitions and the admin decisions on
//! them. Approving an appointment request yields the `Appointment` record
//! the admin panel appends to the matching schedule collection.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    Appointment, AppointmentStatus, AppointmentType, PractitionerCategory, PreferredPeriod,
    Requisition, RequisitionStatus, RequisitionType,
};

/// What the request form collects. Appointment requests carry the
/// practitioner category and preferred period instead of a description.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub requisition_type: RequisitionType,
    pub description: String,
    pub file_name: Option<String>,
    pub practitioner_category: Option<PractitionerCategory>,
    pub preferred_period: Option<PreferredPeriod>,
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Unknown requisition: {0}")]
    UnknownRequisition(String),
    #[error("Requisition {0} was already decided")]
    AlreadyDecided(String),
    #[error("A description is required for this request type")]
    MissingDescription,
    #[error("Appointment requests need a practitioner category and preferred period")]
    MissingAppointmentDetails,
}

/// First slot offered for each preferred period when an appointment
/// request is approved.
fn default_slot_time(period: PreferredPeriod) -> &'static str {
    match period {
        PreferredPeriod::Manha => "09:00",
        PreferredPeriod::Tarde => "14:00",
        PreferredPeriod::Noite => "18:00",
    }
}

pub struct RequestCenter {
    requisitions: Vec<Requisition>,
}

impl RequestCenter {
    pub fn new(seed: Vec<Requisition>) -> Self {
        Self { requisitions: seed }
    }

    pub fn requisitions(&self) -> &[Requisition] {
        &self.requisitions
    }

    /// File a new request. Appointment requests synthesize their
    /// description from the requested category and period.
    pub fn file_request(
        &mut self,
        request: NewRequest,
        date: NaiveDate,
    ) -> Result<&Requisition, RequestError> {
        let requisition = if request.requisition_type == RequisitionType::AppointmentRequest {
            let (category, period) = request
                .practitioner_category
                .zip(request.preferred_period)
                .ok_or(RequestError::MissingAppointmentDetails)?;
            Requisition {
                id: Uuid::new_v4().to_string(),
                requisition_type: RequisitionType::AppointmentRequest,
                status: RequisitionStatus::Pending,
                date,
                description: format!(
                    "Solicitação de agendamento: {} ({})",
                    category.as_str(),
                    period.as_str()
                ),
                file_name: None,
                practitioner_category: Some(category),
                preferred_period: Some(period),
            }
        } else {
            if request.description.trim().is_empty() {
                return Err(RequestError::MissingDescription);
            }
            Requisition {
                id: Uuid::new_v4().to_string(),
                requisition_type: request.requisition_type,
                status: RequisitionStatus::Pending,
                date,
                description: request.description,
                file_name: request.file_name,
                practitioner_category: None,
                preferred_period: None,
            }
        };

        tracing::info!(id = %requisition.id, kind = requisition.requisition_type.as_str(), "Requisition filed");
        self.requisitions.push(requisition);
        let filed = &self.requisitions[self.requisitions.len() - 1];
        Ok(filed)
    }

    fn find_pending_mut(&mut self, id: &str) -> Result<&mut Requisition, RequestError> {
        let req = self
            .requisitions
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RequestError::UnknownRequisition(id.into()))?;
        if req.status != RequisitionStatus::Pending {
            return Err(RequestError::AlreadyDecided(id.into()));
        }
        Ok(req)
    }

    /// Approve a pending requisition. For appointment requests, returns the
    /// schedule collection and the new Pendente appointment (notification
    /// unsent) for the caller to append via
    /// [`crate::panel::AdminPanel::add_appointment`].
    pub fn approve(
        &mut self,
        id: &str,
        patient_name: &str,
        slot_date: NaiveDate,
    ) -> Result<Option<(PractitionerCategory, Appointment)>, RequestError> {
        let req = self.find_pending_mut(id)?;
        req.status = RequisitionStatus::Approved;
        tracing::info!(id = %req.id, "Requisition approved");

        if !req.is_appointment_request() {
            return Ok(None);
        }
        let category = req
            .practitioner_category
            .ok_or(RequestError::MissingAppointmentDetails)?;
        let period = req
            .preferred_period
            .ok_or(RequestError::MissingAppointmentDetails)?;

        let appointment = Appointment::new(
            &Uuid::new_v4().to_string(),
            patient_name,
            default_slot_time(period),
            slot_date,
            AppointmentType::Avaliacao,
            AppointmentStatus::Pendente,
        );
        Ok(Some((category, appointment)))
    }

    /// Decline a pending requisition.
    pub fn reject(&mut self, id: &str) -> Result<(), RequestError> {
        let req = self.find_pending_mut(id)?;
        req.status = RequisitionStatus::Rejected;
        tracing::info!(id = %req.id, "Requisition rejected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_requisitions;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn appointment_request() -> NewRequest {
        NewRequest {
            requisition_type: RequisitionType::AppointmentRequest,
            description: String::new(),
            file_name: None,
            practitioner_category: Some(PractitionerCategory::Fisiatra),
            preferred_period: Some(PreferredPeriod::Manha),
        }
    }

    #[test]
    fn filing_appointment_request_synthesizes_description() {
        let mut center = RequestCenter::new(vec![]);
        let req = center
            .file_request(appointment_request(), date(2024, 5, 19))
            .unwrap();
        assert_eq!(req.description, "Solicitação de agendamento: Fisiatra (Manhã)");
        assert_eq!(req.status, RequisitionStatus::Pending);
    }

    #[test]
    fn filing_document_request_needs_description() {
        let mut center = RequestCenter::new(vec![]);
        let err = center
            .file_request(
                NewRequest {
                    requisition_type: RequisitionType::Certificate,
                    description: "   ".into(),
                    file_name: None,
                    practitioner_category: None,
                    preferred_period: None,
                },
                date(2024, 5, 19),
            )
            .unwrap_err();
        assert!(matches!(err, RequestError::MissingDescription));
    }

    #[test]
    fn appointment_request_without_details_is_rejected() {
        let mut center = RequestCenter::new(vec![]);
        let mut request = appointment_request();
        request.preferred_period = None;
        let err = center.file_request(request, date(2024, 5, 19)).unwrap_err();
        assert!(matches!(err, RequestError::MissingAppointmentDetails));
    }

    #[test]
    fn approving_appointment_request_yields_schedule_entry() {
        let mut center = RequestCenter::new(vec![]);
        let id = center
            .file_request(appointment_request(), date(2024, 5, 19))
            .unwrap()
            .id
            .clone();

        let (category, appointment) = center
            .approve(&id, "Maria Silva", date(2024, 5, 21))
            .unwrap()
            .unwrap();

        assert_eq!(category, PractitionerCategory::Fisiatra);
        assert_eq!(appointment.patient_name, "Maria Silva");
        assert_eq!(appointment.time, "09:00");
        assert_eq!(appointment.date, date(2024, 5, 21));
        assert_eq!(appointment.status, AppointmentStatus::Pendente);
        assert!(!appointment.notification_sent);
    }

    #[test]
    fn approving_document_request_yields_no_appointment() {
        let mut center = RequestCenter::new(demo_requisitions());
        // R2 is the pending certificate in the demo seed
        let decision = center.approve("R2", "Eduardo Oliveira", date(2024, 5, 21)).unwrap();
        assert!(decision.is_none());
        let req = center.requisitions().iter().find(|r| r.id == "R2").unwrap();
        assert_eq!(req.status, RequisitionStatus::Approved);
    }

    #[test]
    fn decided_requisition_cannot_be_reactioned() {
        let mut center = RequestCenter::new(demo_requisitions());
        center.reject("R2").unwrap();

        let err = center.approve("R2", "Eduardo Oliveira", date(2024, 5, 21)).unwrap_err();
        assert!(matches!(err, RequestError::AlreadyDecided(_)));
        // R1 was seeded Approved
        let err = center.reject("R1").unwrap_err();
        assert!(matches!(err, RequestError::AlreadyDecided(_)));
    }

    #[test]
    fn unknown_requisition_is_an_error() {
        let mut center = RequestCenter::new(vec![]);
        let err = center.reject("R99").unwrap_err();
        assert!(matches!(err, RequestError::UnknownRequisition(_)));
    }

    #[test]
    fn period_slot_times() {
        assert_eq!(default_slot_time(PreferredPeriod::Manha), "09:00");
        assert_eq!(default_slot_time(PreferredPeriod::Tarde), "14:00");
        assert_eq!(default_slot_time(PreferredPeriod::Noite), "18:00");
    }
}
