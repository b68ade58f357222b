//! Admin operations panel: check-in triage, date-filtered schedules,
//! confirmation-dispatch simulation and the one-shot inbound alert.
//!
//! The panel owns independent copies of its collections for the lifetime of
//! the mounted view. All mutations are synchronous; the only deferred work
//! goes through the panel's [`TimerQueue`], which the shell advances from
//! its event loop via [`AdminPanel::tick`].

use std::time::Duration;

use chrono::{Days, NaiveDate};

use crate::audio::Chime;
use crate::config;
use crate::models::{
    Appointment, CheckIn, CheckInStatus, Notification, NotificationKind, PractitionerCategory,
    WorkflowTrack,
};
use crate::scheduler::{TimerHandle, TimerQueue};
use crate::session::Screen;

/// Deferred panel events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// The simulated confirmation message reached the patient.
    ConfirmationDelivered { appointment_id: String },
    /// The simulated inbound request arrived.
    InboundRequest(Notification),
}

/// Errors from the confirmation-dispatch operation. The UI is expected to
/// disable the action in these states; the errors exist so a misbehaving
/// caller cannot corrupt the one-way notification flag.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown appointment: {0}")]
    UnknownAppointment(String),
    #[error("Confirmation already sent for appointment {0}")]
    AlreadyNotified(String),
    #[error("Another confirmation dispatch is in flight ({0})")]
    DispatchInFlight(String),
}

pub struct AdminPanel {
    checkins: Vec<CheckIn>,
    fisiatra_schedule: Vec<Appointment>,
    fisioterapeuta_schedule: Vec<Appointment>,
    active_schedule: PractitionerCategory,
    selected_date: NaiveDate,
    seed_date: NaiveDate,
    /// Single-flight dispatch marker: id of the appointment whose
    /// confirmation is currently being delivered.
    in_flight: Option<String>,
    notification: Option<Notification>,
    timers: TimerQueue<PanelEvent>,
    inbound_alert: Option<TimerHandle>,
    chime: Box<dyn Chime>,
}

impl AdminPanel {
    /// Mount the panel over a seed. Schedules the one-shot inbound-request
    /// alert; nothing fires until the shell starts ticking.
    pub fn new(seed: crate::seed::PanelSeed, chime: Box<dyn Chime>) -> Self {
        let mut timers = TimerQueue::new();
        let inbound_alert = Some(timers.schedule(
            config::INBOUND_ALERT_DELAY,
            PanelEvent::InboundRequest(Notification {
                id: "NOTIF-1".into(),
                title: "Nova Solicitação".into(),
                message: "Eduardo Oliveira solicitou um novo agendamento de Fisio.".into(),
                kind: NotificationKind::Request,
            }),
        ));

        Self {
            checkins: seed.checkins,
            fisiatra_schedule: seed.fisiatra_schedule,
            fisioterapeuta_schedule: seed.fisioterapeuta_schedule,
            active_schedule: PractitionerCategory::Fisiatra,
            selected_date: seed.seed_date,
            seed_date: seed.seed_date,
            in_flight: None,
            notification: None,
            timers,
            inbound_alert,
            chime,
        }
    }

    // ── Schedule filtering & date navigation ────────────────────────────

    pub fn active_schedule(&self) -> PractitionerCategory {
        self.active_schedule
    }

    pub fn set_active_schedule(&mut self, category: PractitionerCategory) {
        self.active_schedule = category;
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Shift the selected date back one calendar day.
    pub fn previous_day(&mut self) {
        if let Some(d) = self.selected_date.checked_sub_days(Days::new(1)) {
            self.selected_date = d;
        }
    }

    /// Shift the selected date forward one calendar day.
    pub fn next_day(&mut self) {
        if let Some(d) = self.selected_date.checked_add_days(Days::new(1)) {
            self.selected_date = d;
        }
    }

    /// Jump back to the seeded day. Offered by the empty-state affordance.
    pub fn reset_to_seed_date(&mut self) {
        self.selected_date = self.seed_date;
    }

    fn schedule_for(&self, category: PractitionerCategory) -> &Vec<Appointment> {
        match category {
            PractitionerCategory::Fisiatra => &self.fisiatra_schedule,
            PractitionerCategory::Fisioterapeuta => &self.fisioterapeuta_schedule,
        }
    }

    fn schedule_for_mut(&mut self, category: PractitionerCategory) -> &mut Vec<Appointment> {
        match category {
            PractitionerCategory::Fisiatra => &mut self.fisiatra_schedule,
            PractitionerCategory::Fisioterapeuta => &mut self.fisioterapeuta_schedule,
        }
    }

    /// Appointments of the active schedule on the selected date, in
    /// insertion order. Exact date equality, no calendar-aware comparison.
    pub fn filtered_schedule(&self) -> Vec<&Appointment> {
        self.schedule_for(self.active_schedule)
            .iter()
            .filter(|a| a.date == self.selected_date)
            .collect()
    }

    /// Distinct empty state for the selected day, not an error.
    pub fn is_empty_day(&self) -> bool {
        self.filtered_schedule().is_empty()
    }

    /// Append an appointment to a schedule collection (e.g. an approved
    /// appointment request from the request center).
    pub fn add_appointment(&mut self, category: PractitionerCategory, appointment: Appointment) {
        self.schedule_for_mut(category).push(appointment);
    }

    // ── Check-in triage ─────────────────────────────────────────────────

    pub fn checkins(&self) -> &[CheckIn] {
        &self.checkins
    }

    /// Move a pending check-in into session: Pending -> Confirmed, workflow
    /// track defaults to Agenda. Repeat calls are ignored; returns whether
    /// state changed.
    pub fn start_session(&mut self, checkin_id: &str) -> bool {
        let Some(c) = self.checkins.iter_mut().find(|c| c.id == checkin_id) else {
            return false;
        };
        if c.status != CheckInStatus::Pending {
            return false;
        }
        c.status = CheckInStatus::Confirmed;
        c.workflow = Some(WorkflowTrack::Agenda);
        tracing::info!(checkin = checkin_id, "Session started");
        true
    }

    /// Retarget a confirmed check-in between the Agenda and Requisition
    /// tracks. Freely reversible; no effect on pending check-ins.
    pub fn set_workflow(&mut self, checkin_id: &str, track: WorkflowTrack) -> bool {
        let Some(c) = self.checkins.iter_mut().find(|c| c.id == checkin_id) else {
            return false;
        };
        if c.status != CheckInStatus::Confirmed {
            return false;
        }
        c.workflow = Some(track);
        true
    }

    // ── Confirmation dispatch simulation ────────────────────────────────

    /// Id of the appointment whose dispatch is pending, if any.
    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    fn find_appointment(&self, id: &str) -> Option<&Appointment> {
        self.fisiatra_schedule
            .iter()
            .chain(self.fisioterapeuta_schedule.iter())
            .find(|a| a.id == id)
    }

    /// Dispatch a confirmation message to an appointment. Marks the slot
    /// in flight immediately; after [`config::CONFIRMATION_DISPATCH_DELAY`]
    /// of ticked time the notification flag flips to sent. One dispatch at
    /// a time; the simulation has no failure path.
    pub fn send_confirmation(&mut self, appointment_id: &str) -> Result<(), DispatchError> {
        if let Some(busy) = &self.in_flight {
            return Err(DispatchError::DispatchInFlight(busy.clone()));
        }
        let appointment = self
            .find_appointment(appointment_id)
            .ok_or_else(|| DispatchError::UnknownAppointment(appointment_id.into()))?;
        if appointment.notification_sent {
            return Err(DispatchError::AlreadyNotified(appointment_id.into()));
        }

        self.in_flight = Some(appointment_id.to_string());
        self.timers.schedule(
            config::CONFIRMATION_DISPATCH_DELAY,
            PanelEvent::ConfirmationDelivered {
                appointment_id: appointment_id.to_string(),
            },
        );
        tracing::debug!(appointment = appointment_id, "Confirmation dispatch queued");
        Ok(())
    }

    // ── Timers & notifications ──────────────────────────────────────────

    /// Advance the panel's virtual clock and apply whatever came due.
    pub fn tick(&mut self, elapsed: Duration) {
        for event in self.timers.advance(elapsed) {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::ConfirmationDelivered { appointment_id } => {
                for schedule in [&mut self.fisiatra_schedule, &mut self.fisioterapeuta_schedule] {
                    if let Some(a) = schedule.iter_mut().find(|a| a.id == appointment_id) {
                        a.notification_sent = true;
                    }
                }
                if self.in_flight.as_deref() == Some(appointment_id.as_str()) {
                    self.in_flight = None;
                }
                tracing::info!(appointment = %appointment_id, "Confirmation delivered");
            }
            PanelEvent::InboundRequest(notification) => {
                tracing::info!(id = %notification.id, "Inbound request alert");
                // Replaces whatever is showing; at most one toast at a time.
                self.notification = Some(notification);
                self.inbound_alert = None;
                self.chime.play();
            }
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Dismiss the toast and navigate to its related screen.
    pub fn open_notification(&mut self) -> Option<Screen> {
        self.notification.take().map(|n| match n.kind {
            NotificationKind::Request | NotificationKind::Document => Screen::PatientManagement,
        })
    }

    /// Unmount the panel: cancel every pending timer so nothing fires on
    /// torn-down state.
    pub fn close(&mut self) {
        self.timers.cancel_all();
        self.inbound_alert = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{CountingChime, SilentChime};
    use crate::models::{AppointmentStatus, AppointmentType};
    use crate::seed::PanelSeed;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn demo_panel() -> AdminPanel {
        AdminPanel::new(PanelSeed::demo(), Box::new(SilentChime))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── Filtering & date navigation ─────────────────────────────────────

    #[test]
    fn filtered_schedule_returns_only_active_category() {
        let mut panel = demo_panel();
        panel.set_active_schedule(PractitionerCategory::Fisioterapeuta);

        let filtered = panel.filtered_schedule();
        assert_eq!(filtered.len(), 4);
        let ids: Vec<&str> = filtered.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["F1", "F2", "F3", "F4"]);
        // No Fisiatra entries leak in
        assert!(ids.iter().all(|id| id.starts_with('F')));
    }

    #[test]
    fn filtered_schedule_preserves_insertion_order() {
        let panel = demo_panel();
        let times: Vec<&str> = panel.filtered_schedule().iter().map(|a| a.time.as_str()).collect();
        assert_eq!(times, vec!["08:30", "09:15", "10:00", "11:30"]);
    }

    #[test]
    fn next_day_empties_seeded_schedule() {
        let mut panel = demo_panel();
        panel.set_active_schedule(PractitionerCategory::Fisioterapeuta);
        assert_eq!(panel.filtered_schedule().len(), 4);

        panel.next_day();
        assert!(panel.filtered_schedule().is_empty());
        assert!(panel.is_empty_day());

        panel.reset_to_seed_date();
        assert_eq!(panel.filtered_schedule().len(), 4);
    }

    #[test]
    fn day_navigation_rolls_over_month_and_year() {
        let mut panel = demo_panel();
        panel.select_date(date(2024, 1, 31));
        panel.next_day();
        assert_eq!(panel.selected_date(), date(2024, 2, 1));

        panel.select_date(date(2024, 12, 31));
        panel.next_day();
        assert_eq!(panel.selected_date(), date(2025, 1, 1));

        panel.previous_day();
        assert_eq!(panel.selected_date(), date(2024, 12, 31));
    }

    #[test]
    fn leap_year_arithmetic_is_exact() {
        let mut panel = demo_panel();
        panel.select_date(date(2024, 1, 1));
        for _ in 0..365 {
            panel.next_day();
        }
        // 2024 is a leap year: 365 steps land on Dec 31, not Jan 1.
        assert_eq!(panel.selected_date(), date(2024, 12, 31));
    }

    #[test]
    fn next_then_previous_is_identity() {
        let mut panel = demo_panel();
        for start in [date(2024, 2, 28), date(2024, 2, 29), date(2023, 12, 31)] {
            panel.select_date(start);
            panel.next_day();
            panel.previous_day();
            assert_eq!(panel.selected_date(), start);
        }
    }

    // ── Check-in triage ─────────────────────────────────────────────────

    #[test]
    fn start_session_confirms_with_agenda_track() {
        let mut panel = demo_panel();
        assert!(panel.start_session("C1"));

        let c = &panel.checkins()[0];
        assert_eq!(c.status, CheckInStatus::Confirmed);
        assert_eq!(c.workflow, Some(WorkflowTrack::Agenda));
    }

    #[test]
    fn start_session_is_idempotent_on_confirmed() {
        let mut panel = demo_panel();
        panel.start_session("C1");
        panel.set_workflow("C1", WorkflowTrack::Requisition);

        // Repeat call changes nothing, including the chosen track
        assert!(!panel.start_session("C1"));
        let c = &panel.checkins()[0];
        assert_eq!(c.status, CheckInStatus::Confirmed);
        assert_eq!(c.workflow, Some(WorkflowTrack::Requisition));
    }

    #[test]
    fn workflow_toggle_round_trips() {
        let mut panel = demo_panel();
        panel.start_session("C2");

        assert!(panel.set_workflow("C2", WorkflowTrack::Requisition));
        assert!(panel.set_workflow("C2", WorkflowTrack::Agenda));
        let c = panel.checkins().iter().find(|c| c.id == "C2").unwrap();
        assert_eq!(c.workflow, Some(WorkflowTrack::Agenda));
    }

    #[test]
    fn workflow_has_no_effect_on_pending() {
        let mut panel = demo_panel();
        assert!(!panel.set_workflow("C3", WorkflowTrack::Requisition));

        let c = panel.checkins().iter().find(|c| c.id == "C3").unwrap();
        assert_eq!(c.status, CheckInStatus::Pending);
        assert!(c.workflow.is_none());
    }

    #[test]
    fn start_session_unknown_id_is_ignored() {
        let mut panel = demo_panel();
        assert!(!panel.start_session("C99"));
    }

    // ── Confirmation dispatch ───────────────────────────────────────────

    #[test]
    fn dispatch_delivers_after_delay() {
        let mut panel = demo_panel();
        panel.send_confirmation("A1").unwrap();
        assert_eq!(panel.in_flight(), Some("A1"));

        // Not yet delivered at 1s
        panel.tick(Duration::from_secs(1));
        assert_eq!(panel.in_flight(), Some("A1"));
        assert!(!panel.filtered_schedule()[0].notification_sent);

        panel.tick(Duration::from_millis(500));
        assert!(panel.in_flight().is_none());
        assert!(panel.filtered_schedule()[0].notification_sent);
    }

    #[test]
    fn dispatch_rejected_when_already_sent() {
        let mut panel = demo_panel();
        panel.send_confirmation("A1").unwrap();
        panel.tick(config::CONFIRMATION_DISPATCH_DELAY);

        let err = panel.send_confirmation("A1").unwrap_err();
        assert!(matches!(err, DispatchError::AlreadyNotified(_)));
        // Flag stays set
        assert!(panel.filtered_schedule()[0].notification_sent);
    }

    #[test]
    fn dispatch_is_single_flight() {
        let mut panel = demo_panel();
        panel.send_confirmation("A1").unwrap();

        let err = panel.send_confirmation("A2").unwrap_err();
        assert!(matches!(err, DispatchError::DispatchInFlight(id) if id == "A1"));

        // After delivery the next dispatch goes through
        panel.tick(config::CONFIRMATION_DISPATCH_DELAY);
        panel.send_confirmation("A2").unwrap();
    }

    #[test]
    fn dispatch_unknown_appointment_is_rejected() {
        let mut panel = demo_panel();
        let err = panel.send_confirmation("A99").unwrap_err();
        assert!(matches!(err, DispatchError::UnknownAppointment(_)));
        assert!(panel.in_flight().is_none());
    }

    #[test]
    fn dispatch_reaches_inactive_schedule_too() {
        let mut panel = demo_panel();
        // F1 lives in the Fisioterapeuta collection while Fisiatra is active
        panel.send_confirmation("F1").unwrap();
        panel.tick(config::CONFIRMATION_DISPATCH_DELAY);

        panel.set_active_schedule(PractitionerCategory::Fisioterapeuta);
        assert!(panel.filtered_schedule()[0].notification_sent);
    }

    // ── Inbound alert & toast lifecycle ─────────────────────────────────

    #[test]
    fn inbound_alert_fires_once_with_chime() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut panel = AdminPanel::new(
            PanelSeed::demo(),
            Box::new(CountingChime(Arc::clone(&count))),
        );

        panel.tick(Duration::from_secs(7));
        assert!(panel.notification().is_none());

        panel.tick(Duration::from_secs(1));
        let n = panel.notification().unwrap();
        assert_eq!(n.id, "NOTIF-1");
        assert_eq!(n.kind, NotificationKind::Request);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // No second alert, ever
        panel.tick(Duration::from_secs(60));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn close_cancels_pending_alert() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut panel = AdminPanel::new(
            PanelSeed::demo(),
            Box::new(CountingChime(Arc::clone(&count))),
        );

        panel.close();
        panel.tick(Duration::from_secs(60));
        assert!(panel.notification().is_none());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dismiss_clears_toast() {
        let mut panel = demo_panel();
        panel.tick(config::INBOUND_ALERT_DELAY);
        assert!(panel.notification().is_some());

        panel.dismiss_notification();
        assert!(panel.notification().is_none());
    }

    #[test]
    fn open_notification_dismisses_and_navigates() {
        let mut panel = demo_panel();
        panel.tick(config::INBOUND_ALERT_DELAY);

        assert_eq!(panel.open_notification(), Some(Screen::PatientManagement));
        assert!(panel.notification().is_none());
        // Nothing left to open
        assert!(panel.open_notification().is_none());
    }

    // ── Seed ownership ──────────────────────────────────────────────────

    #[test]
    fn two_panels_do_not_share_state() {
        let mut a = demo_panel();
        let b = demo_panel();

        a.start_session("C1");
        a.send_confirmation("A1").unwrap();
        a.tick(config::CONFIRMATION_DISPATCH_DELAY);

        assert_eq!(b.checkins()[0].status, CheckInStatus::Pending);
        assert!(!b.filtered_schedule()[0].notification_sent);
    }

    #[test]
    fn added_appointment_shows_up_in_filter() {
        let mut panel = demo_panel();
        panel.add_appointment(
            PractitionerCategory::Fisiatra,
            Appointment::new(
                "A5",
                "Maria Silva",
                "12:15",
                panel.selected_date(),
                AppointmentType::Avaliacao,
                AppointmentStatus::Pendente,
            ),
        );
        assert_eq!(panel.filtered_schedule().len(), 5);
        assert_eq!(panel.filtered_schedule()[4].id, "A5");
    }
}
