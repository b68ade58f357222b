//! Best-effort audible cue for inbound alerts.
//!
//! The cue must never surface a failure: if the audio path is unavailable
//! the alert still shows, silently.

use std::io::Write;

/// Plays a short notification cue. Implementations swallow their own
/// failures; `play` has no error channel.
pub trait Chime: Send {
    fn play(&self);
}

/// Rings the terminal bell. Write errors are logged at debug and dropped.
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn play(&self) {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::debug!("Notification chime unavailable: {e}");
        }
    }
}

/// No-op cue for tests and headless shells.
pub struct SilentChime;

impl Chime for SilentChime {
    fn play(&self) {}
}

/// Test cue that counts invocations.
#[cfg(test)]
pub struct CountingChime(pub std::sync::Arc<std::sync::atomic::AtomicUsize>);

#[cfg(test)]
impl Chime for CountingChime {
    fn play(&self) {
        self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}
