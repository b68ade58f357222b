use serde::{Deserialize, Serialize};

use super::enums::NotificationKind;

/// An ephemeral toast alert. The panel keeps at most one active at a time;
/// a new notification replaces whatever is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_serializes_kind_string() {
        let n = Notification {
            id: "NOTIF-1".into(),
            title: "Nova Solicitação".into(),
            message: "Eduardo Oliveira solicitou um novo agendamento.".into(),
            kind: NotificationKind::Request,
        };
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains("Request"));
    }
}
