//! Scheduler port — fire-and-forget delayed tasks.

use std::time::Duration;

/// Runs a task once after a delay.
///
/// There is no cancellation handle: once scheduled a task always runs, so
/// tasks must tolerate whatever the page looks like by then.
pub trait TaskScheduler {
    /// Run `task` once, `delay` from now.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
