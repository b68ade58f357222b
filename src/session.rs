//! Session gate and role-scoped view routing.
//!
//! The gate holds the authentication flag and the role; the router is a
//! pure mapping from role + path to a screen, so cross-role paths are
//! rejected in one place instead of string checks scattered per view.

use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// The screens the portal shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    PatientDashboard,
    TreatmentPlan,
    MedicationList,
    RequestCenter,
    PreCheckIn,
    PatientProfile,
    AdminDashboard,
    PatientManagement,
}

/// Screens a role may mount, in navigation order.
pub fn allowed_screens(role: UserRole) -> &'static [Screen] {
    match role {
        UserRole::Patient => &[
            Screen::PatientDashboard,
            Screen::TreatmentPlan,
            Screen::MedicationList,
            Screen::RequestCenter,
            Screen::PreCheckIn,
            Screen::PatientProfile,
        ],
        UserRole::Admin => &[Screen::AdminDashboard, Screen::PatientManagement],
    }
}

/// The screen a role lands on after login or on "/".
pub fn home_screen(role: UserRole) -> Screen {
    match role {
        UserRole::Patient => Screen::PatientDashboard,
        UserRole::Admin => Screen::AdminDashboard,
    }
}

/// Resolve a URL path for a role. Returns `None` for unknown paths and for
/// paths belonging to the other role.
pub fn resolve_route(role: UserRole, path: &str) -> Option<Screen> {
    let screen = match path {
        "/" => home_screen(role),
        "/patient" => Screen::PatientDashboard,
        "/patient/treatments" => Screen::TreatmentPlan,
        "/patient/medications" => Screen::MedicationList,
        "/patient/requests" => Screen::RequestCenter,
        "/patient/check-in" => Screen::PreCheckIn,
        "/patient/profile" => Screen::PatientProfile,
        "/admin" => Screen::AdminDashboard,
        "/admin/patients" => Screen::PatientManagement,
        _ => return None,
    };
    allowed_screens(role).contains(&screen).then_some(screen)
}

/// Authentication gate. No real credential check happens here; the shell
/// decides when login succeeds and with which role.
#[derive(Debug, Default)]
pub struct Session {
    role: Option<UserRole>,
}

impl Session {
    pub fn new() -> Self {
        Self { role: None }
    }

    pub fn login(&mut self, role: UserRole) {
        tracing::info!(role = role.as_str(), "Session opened");
        self.role = Some(role);
    }

    pub fn logout(&mut self) {
        if self.role.take().is_some() {
            tracing::info!("Session closed");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    /// Route a path within this session. `None` when unauthenticated or
    /// when the path is outside the role's screen set.
    pub fn route(&self, path: &str) -> Option<Screen> {
        self.role.and_then(|role| resolve_route(role, path))
    }
}
