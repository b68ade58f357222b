use std::time::Duration;

use chrono::NaiveDate;

/// Application-level constants
pub const APP_NAME: &str = "Urgetrauma";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Day the demo schedules are seeded for. The empty-state affordance in the
/// schedule view offers a jump back to this date.
pub const SEED_DATE: &str = "2024-05-20";

/// Simulated latency of the confirmation-message dispatch.
pub const CONFIRMATION_DISPATCH_DELAY: Duration = Duration::from_millis(1500);

/// Delay before the one-shot inbound-request alert materializes after the
/// admin panel mounts.
pub const INBOUND_ALERT_DELAY: Duration = Duration::from_secs(8);

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "urgetrauma=info".to_string()
}

/// Parsed seed date.
pub fn seed_date() -> NaiveDate {
    NaiveDate::parse_from_str(SEED_DATE, "%Y-%m-%d").expect("SEED_DATE is valid ISO")
}
