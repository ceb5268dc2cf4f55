//! Timing tests for the debouncer and the rotation timer, on a paused clock.

use std::time::Duration;

use assert_matches::assert_matches;
use marquee_client::app::Action;
use marquee_client::timer::{Debouncer, RotationTimer, SEARCH_DEBOUNCE_MS};
use tokio::sync::mpsc;
use tokio::time;

/// Let spawned timer tasks run up to their next suspension point.
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

// ---------------------------------------------------------------------------
// Debouncer
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn debounce_commits_once_with_the_latest_value() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debouncer = Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS));

    debouncer.input("lo".to_string(), &tx);
    settle().await;
    time::advance(Duration::from_millis(100)).await;

    // Second keystroke inside the quiet period cancels the pending fire.
    debouncer.input("loki".to_string(), &tx);
    settle().await;

    // 299 ms after the second keystroke: still quiet.
    time::advance(Duration::from_millis(299)).await;
    settle().await;
    assert!(rx.try_recv().is_err(), "must not fire inside the quiet period");

    // Crossing the quiet period fires exactly once, with the latest value.
    time::advance(Duration::from_millis(2)).await;
    let action = rx.recv().await.unwrap();
    assert_matches!(action, Action::SetSearch(v) if v == "loki");

    time::advance(Duration::from_millis(1000)).await;
    settle().await;
    assert!(rx.try_recv().is_err(), "must fire only once per burst");
}

#[tokio::test(start_paused = true)]
async fn undisturbed_keystroke_commits_after_the_quiet_period() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debouncer = Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS));

    debouncer.input("mischief".to_string(), &tx);
    settle().await;
    time::advance(Duration::from_millis(SEARCH_DEBOUNCE_MS + 1)).await;

    let action = rx.recv().await.unwrap();
    assert_matches!(action, Action::SetSearch(v) if v == "mischief");
}

// ---------------------------------------------------------------------------
// RotationTimer
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn rotation_timer_ticks_every_period() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RotationTimer::new(Duration::from_millis(5000));

    timer.start(&tx);
    settle().await;

    time::advance(Duration::from_millis(5001)).await;
    assert_matches!(rx.recv().await.unwrap(), Action::HeroTick);

    time::advance(Duration::from_millis(5001)).await;
    assert_matches!(rx.recv().await.unwrap(), Action::HeroTick);
}

#[tokio::test(start_paused = true)]
async fn restarting_the_timer_resets_its_cadence() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RotationTimer::new(Duration::from_millis(5000));

    timer.start(&tx);
    settle().await;
    time::advance(Duration::from_millis(4000)).await;
    settle().await;

    // Manual navigation restarts the timer 4 s in; the old run must not fire.
    timer.start(&tx);
    settle().await;
    time::advance(Duration::from_millis(4000)).await;
    settle().await;
    assert!(
        rx.try_recv().is_err(),
        "8 s wall time but only 4 s since restart: no tick yet"
    );

    time::advance(Duration::from_millis(1001)).await;
    assert_matches!(rx.recv().await.unwrap(), Action::HeroTick);
}

#[tokio::test(start_paused = true)]
async fn stopped_timer_never_fires() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = RotationTimer::new(Duration::from_millis(5000));

    timer.start(&tx);
    settle().await;
    timer.stop();
    settle().await;

    time::advance(Duration::from_millis(20_000)).await;
    settle().await;
    assert!(rx.try_recv().is_err());
}
