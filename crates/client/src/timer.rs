//! Explicit timer resources for the two time-driven behaviours.
//!
//! Both timers uphold the same invariant: arming a new timer deterministically
//! cancels any pending timer of the same kind first, so no two can run
//! concurrently.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::app::Action;

/// Quiet period before a search keystroke burst commits, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Search input debouncer.
///
/// Each keystroke replaces the pending fire and restarts the quiet period;
/// when the period elapses undisturbed, the latest value is committed as a
/// single [`Action::SetSearch`].
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a keystroke: cancel the pending fire, then arm a new one with
    /// this value.
    pub fn input(&mut self, value: String, actions: &UnboundedSender<Action>) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let actions = actions.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the page is being torn down; nothing to do.
            let _ = actions.send(Action::SetSearch(value));
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// Repeating hero auto-advance timer.
///
/// Emits [`Action::HeroTick`] every period until cancelled. `start` cancels
/// the previous run before arming the next, which is how manual navigation
/// resets the rotation cadence.
#[derive(Debug)]
pub struct RotationTimer {
    period: Duration,
    cancel: Option<CancellationToken>,
}

impl RotationTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            cancel: None,
        }
    }

    /// Arm (or re-arm) the timer. Any prior run is cancelled first.
    pub fn start(&mut self, actions: &UnboundedSender<Action>) {
        self.stop();

        let token = CancellationToken::new();
        self.cancel = Some(token.clone());

        let actions = actions.clone();
        let period = self.period;
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    () = tokio::time::sleep(period) => {
                        if actions.send(Action::HeroTick).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }

    /// Cancel the pending run, if any.
    pub fn stop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
