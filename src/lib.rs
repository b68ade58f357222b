pub mod assistant; // Remote advice/summary callers (hosted generative API)
pub mod audio; // Best-effort audible cue
pub mod config;
pub mod models;
pub mod panel; // Admin operations panel (triage, schedules, dispatch)
pub mod precheckin; // Patient pre-check-in submission
pub mod requests; // Request center + admin approval
pub mod scheduler; // Delayed-task abstraction with virtual clock
pub mod seed;
pub mod session; // Session gate + role-scoped routing

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a portal shell embedding this crate.
///
/// Respects `RUST_LOG` when set, otherwise falls back to the default
/// filter from [`config::default_log_filter`].
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core starting v{}", config::APP_NAME, config::APP_VERSION);
}
