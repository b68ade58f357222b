//! Demo seed data for the portal. Each call builds fresh owned copies, so
//! two mounted panels never alias state.

use chrono::NaiveDate;

use crate::assistant::ClinicStats;
use crate::config;
use crate::models::{
    Appointment, AppointmentStatus, AppointmentType, CheckIn, CheckInStatus, ClinicalRecord,
    Medication, Patient, Requisition, RequisitionStatus, RequisitionType, Session, Treatment,
    TreatmentType,
};
use crate::models::patient::SessionStatus;

/// Insurance carriers accepted at the clinic.
pub const INSURANCE_CARRIERS: &[&str] = &[
    "Unimed Porto Alegre",
    "Unimed (Outras)",
    "Particular",
    "Bradesco Saúde",
    "Bradesco Operadora",
    "Verte Saúde",
    "Doctor Clin",
    "Saúde Pas",
    "Postal Saúde",
    "SulAmérica",
    "Petrobras",
    "Cassi",
];

/// Carrier that requires a biometric verification token at check-in.
pub const TOKEN_REQUIRED_CARRIER: &str = "Unimed Porto Alegre";

/// Initial state handed to an [`crate::panel::AdminPanel`].
#[derive(Debug, Clone)]
pub struct PanelSeed {
    pub seed_date: NaiveDate,
    pub checkins: Vec<CheckIn>,
    pub fisiatra_schedule: Vec<Appointment>,
    pub fisioterapeuta_schedule: Vec<Appointment>,
}

impl PanelSeed {
    /// Empty panel anchored at a date. Useful for shells backed by a real
    /// data source.
    pub fn empty(seed_date: NaiveDate) -> Self {
        Self {
            seed_date,
            checkins: Vec::new(),
            fisiatra_schedule: Vec::new(),
            fisioterapeuta_schedule: Vec::new(),
        }
    }

    /// The demo dataset: three pending check-ins and two four-slot
    /// schedules, all on the seed date.
    pub fn demo() -> Self {
        let day = config::seed_date();

        let checkins = vec![
            checkin(
                "C1",
                "P1024",
                "Eduardo Oliveira",
                "Unimed Porto Alegre",
                4,
                "Sinto leve desconforto ao subir escadas. Joelho inchado.",
                Some("882910"),
                "14:20",
                "Recuperação de LCA - Joelho Esquerdo",
            ),
            checkin(
                "C2",
                "P1025",
                "Juliana Costa",
                "Particular",
                2,
                "Apenas para revisão de mobilidade.",
                None,
                "14:35",
                "Mobilidade Ombro Direito",
            ),
            checkin(
                "C3",
                "P1026",
                "Ricardo Almeida",
                "Bradesco Saúde",
                8,
                "Muita dor na lombar após exercício ontem.",
                None,
                "14:45",
                "Estabilização Lombar",
            ),
        ];

        let fisiatra_schedule = vec![
            slot("A1", "Carlos Mendonça", "08:30", day, AppointmentType::Avaliacao, AppointmentStatus::Confirmado),
            slot("A2", "Ana Paula Silva", "09:15", day, AppointmentType::Avaliacao, AppointmentStatus::Confirmado),
            slot("A3", "Mário Jorge", "10:00", day, AppointmentType::Retorno, AppointmentStatus::Pendente),
            slot("A4", "Beatriz Lemos", "11:30", day, AppointmentType::Avaliacao, AppointmentStatus::Confirmado),
        ];

        let fisioterapeuta_schedule = vec![
            slot("F1", "Eduardo Oliveira", "14:30", day, AppointmentType::Sessao, AppointmentStatus::Confirmado),
            slot("F2", "Juliana Costa", "15:15", day, AppointmentType::Avaliacao, AppointmentStatus::Confirmado),
            slot("F3", "Ricardo Almeida", "16:00", day, AppointmentType::Sessao, AppointmentStatus::Confirmado),
            slot("F4", "Helena Soares", "16:45", day, AppointmentType::Sessao, AppointmentStatus::Pendente),
        ];

        Self {
            seed_date: day,
            checkins,
            fisiatra_schedule,
            fisioterapeuta_schedule,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn checkin(
    id: &str,
    patient_id: &str,
    patient_name: &str,
    insurance: &str,
    pain_level: u8,
    comments: &str,
    token: Option<&str>,
    timestamp: &str,
    treatment_title: &str,
) -> CheckIn {
    CheckIn {
        id: id.into(),
        patient_id: patient_id.into(),
        patient_name: patient_name.into(),
        insurance: insurance.into(),
        pain_level,
        comments: comments.into(),
        token: token.map(Into::into),
        timestamp: timestamp.into(),
        treatment_title: treatment_title.into(),
        status: CheckInStatus::Pending,
        workflow: None,
    }
}

fn slot(
    id: &str,
    patient_name: &str,
    time: &str,
    date: NaiveDate,
    appointment_type: AppointmentType,
    status: AppointmentStatus,
) -> Appointment {
    Appointment::new(id, patient_name, time, date, appointment_type, status)
}

/// Demo patient for the patient-side screens and the advice-caller context.
pub fn demo_patient() -> Patient {
    Patient {
        id: "P1024".into(),
        first_name: "Eduardo".into(),
        last_name: "Oliveira".into(),
        email: "eduardo@email.com".into(),
        phone: "(11) 98765-4321".into(),
        birth_date: NaiveDate::from_ymd_opt(1988, 5, 15).unwrap(),
        insurance: "Unimed Porto Alegre".into(),
        insurance_plan: "Unifácil Regional".into(),
        treatments: vec![Treatment {
            id: "T1".into(),
            treatment_type: TreatmentType::Physiotherapy,
            title: "Recuperação de LCA - Joelho Esquerdo".into(),
            progress: 65,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            sessions: vec![
                Session {
                    id: "S1".into(),
                    date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
                    status: SessionStatus::Completed,
                    notes: None,
                },
                Session {
                    id: "S2".into(),
                    date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
                    status: SessionStatus::Scheduled,
                    notes: None,
                },
                Session {
                    id: "S3".into(),
                    date: NaiveDate::from_ymd_opt(2024, 5, 22).unwrap(),
                    status: SessionStatus::Scheduled,
                    notes: None,
                },
            ],
        }],
        medications: vec![
            Medication {
                id: "M1".into(),
                name: "Ibuprofeno 600mg".into(),
                dosage: "1 comprimido".into(),
                frequency: "A cada 8 horas".into(),
                last_taken: None,
            },
            Medication {
                id: "M2".into(),
                name: "Dipirona 1g".into(),
                dosage: "1 comprimido".into(),
                frequency: "Se houver dor".into(),
                last_taken: None,
            },
        ],
        history: vec![
            ClinicalRecord {
                id: "H1".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                description: "Cirurgia de reconstrução ligamentar".into(),
                doctor: "Fis. Marcos Santos".into(),
            },
            ClinicalRecord {
                id: "H2".into(),
                date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
                description: "Avaliação pós-operatória 30 dias".into(),
                doctor: "Fis. Marcos Santos".into(),
            },
        ],
    }
}

/// Demo requisition history for the request center.
pub fn demo_requisitions() -> Vec<Requisition> {
    vec![
        Requisition {
            id: "R1".into(),
            requisition_type: RequisitionType::Imaging,
            status: RequisitionStatus::Approved,
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            description: "Ressonância Magnética de Joelho".into(),
            file_name: None,
            practitioner_category: None,
            preferred_period: None,
        },
        Requisition {
            id: "R2".into(),
            requisition_type: RequisitionType::Certificate,
            status: RequisitionStatus::Pending,
            date: NaiveDate::from_ymd_opt(2024, 5, 18).unwrap(),
            description: "Atestado para fisioterapia domiciliar".into(),
            file_name: None,
            practitioner_category: None,
            preferred_period: None,
        },
        Requisition {
            id: "R3".into(),
            requisition_type: RequisitionType::InsuranceValidation,
            status: RequisitionStatus::Approved,
            date: NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
            description: "Validação Bradesco - Guia 99283".into(),
            file_name: None,
            practitioner_category: None,
            preferred_period: None,
        },
    ]
}

/// Demo operational stats fed to the strategic-summary caller.
pub fn demo_stats() -> ClinicStats {
    ClinicStats {
        active_users_today: 142,
        conversion_rate: "18.5%".into(),
        api_cost_month: "R$ 42,80".into(),
        nps_score: 72,
    }
}
