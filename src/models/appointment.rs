use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{AppointmentStatus, AppointmentType};

/// A scheduled slot in one of the two practitioner schedules.
///
/// `notification_sent` is a one-way flag: once the confirmation dispatch
/// delivers, no operation resets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    /// Time of day as displayed, e.g. "08:30".
    pub time: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notification_sent: bool,
}

impl Appointment {
    pub fn new(
        id: &str,
        patient_name: &str,
        time: &str,
        date: NaiveDate,
        appointment_type: AppointmentType,
        status: AppointmentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            patient_name: patient_name.into(),
            time: time.into(),
            date,
            appointment_type,
            status,
            notification_sent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_appointment_is_unnotified() {
        let a = Appointment::new(
            "A1",
            "Carlos Mendonça",
            "08:30",
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            AppointmentType::Avaliacao,
            AppointmentStatus::Confirmado,
        );
        assert!(!a.notification_sent);
    }

    #[test]
    fn notification_sent_defaults_false_when_absent() {
        let json = r#"{
            "id": "A1",
            "patient_name": "Carlos Mendonça",
            "time": "08:30",
            "date": "2024-05-20",
            "type": "Avaliacao",
            "status": "Confirmado"
        }"#;
        let a: Appointment = serde_json::from_str(json).unwrap();
        assert!(!a.notification_sent);
    }
}
