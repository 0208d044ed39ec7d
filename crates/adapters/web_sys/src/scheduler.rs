//! `setTimeout` scheduler.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use studsafe_app::ports::TaskScheduler;

/// Longest delay `setTimeout` honours; larger values fire immediately.
const MAX_TIMEOUT_MS: u32 = i32::MAX.unsigned_abs();

/// Schedules tasks with `setTimeout`. Timers are never cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl TaskScheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(timeout_millis(delay), task).forget();
    }
}

/// Delay in milliseconds, saturated at [`MAX_TIMEOUT_MS`].
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis())
        .unwrap_or(MAX_TIMEOUT_MS)
        .min(MAX_TIMEOUT_MS)
}
