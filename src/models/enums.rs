use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(UserRole {
    Patient => "PATIENT",
    Admin => "ADMIN",
});

str_enum!(CheckInStatus {
    Pending => "Pending",
    Confirmed => "Confirmed",
});

/// Post-confirmation handling track for a check-in. Only meaningful once
/// the check-in status is Confirmed.
str_enum!(WorkflowTrack {
    Agenda => "Agenda",
    Requisition => "Requisition",
});

/// The two independent schedule collections. Display strings match the
/// clinic's Portuguese labels.
str_enum!(PractitionerCategory {
    Fisiatra => "Fisiatra",
    Fisioterapeuta => "Fisioterapeuta",
});

str_enum!(AppointmentType {
    Avaliacao => "Avaliação",
    Sessao => "Sessão",
    Retorno => "Retorno",
});

str_enum!(AppointmentStatus {
    Confirmado => "Confirmado",
    Pendente => "Pendente",
    Cancelado => "Cancelado",
});

str_enum!(NotificationKind {
    Request => "request",
    Document => "document",
});

str_enum!(RequisitionType {
    Exam => "Exam",
    Certificate => "Certificate",
    Imaging => "Imaging",
    InsuranceValidation => "InsuranceValidation",
    AppointmentRequest => "AppointmentRequest",
});

str_enum!(RequisitionStatus {
    Pending => "Pending",
    Approved => "Approved",
    Sent => "Sent",
    Rejected => "Rejected",
});

str_enum!(PreferredPeriod {
    Manha => "Manhã",
    Tarde => "Tarde",
    Noite => "Noite",
});

/// Visual triage banding for a reported pain level. Not a state transition,
/// purely a display classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PainSeverity {
    Mild,
    Moderate,
    Critical,
}

impl PainSeverity {
    /// Band a 0-10 pain level: 8 and above is critical, 5-7 moderate,
    /// below 5 mild. Total over the whole scale, exact at the boundaries.
    pub fn from_level(level: u8) -> Self {
        if level >= 8 {
            Self::Critical
        } else if level >= 5 {
            Self::Moderate
        } else {
            Self::Mild
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Critical => "critical",
        }
    }
}
