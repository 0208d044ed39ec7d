//! Virtual clock — a [`TaskScheduler`] whose time only moves when told to.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use studsafe_app::ports::TaskScheduler;

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    tasks: Vec<PendingTask>,
}

/// Deterministic scheduler for tests.
///
/// Tasks run during [`advance`](Self::advance) in due-time order, ties broken
/// by scheduling order. A task scheduled while advancing runs in the same
/// call if it falls due before the new time.
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualClock {
    /// Time elapsed since the clock was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks not yet run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Move time forward by `by`, running every task that falls due.
    /// Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let deadline = self.now() + by;
        let mut ran = 0;
        while let Some(next) = self.pop_due(deadline) {
            self.state.borrow_mut().now = next.due;
            (next.task)();
            ran += 1;
        }
        self.state.borrow_mut().now = deadline;
        ran
    }

    /// Advance to an absolute time. Does nothing if `at` is in the past.
    pub fn advance_to(&self, at: Duration) -> usize {
        self.advance(at.saturating_sub(self.now()))
    }

    fn pop_due(&self, deadline: Duration) -> Option<PendingTask> {
        let mut state = self.state.borrow_mut();
        let index = state
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        Some(state.tasks.remove(index))
    }
}

impl TaskScheduler for VirtualClock {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.tasks.push(PendingTask { due, seq, task });
    }
}
