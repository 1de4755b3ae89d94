//! Deterministic scheduler for tests and embedders that own their loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;

use thiserror::Error;

use after_types::{Scheduler, SchedulerSettings, Task, TurnLimit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("scheduler stopped after {limit} turns with {remaining} task(s) still queued")]
    TurnLimitExceeded { limit: NonZeroUsize, remaining: usize },
}

/// FIFO task queue drained explicitly by the caller.
///
/// Clones share one queue. Nothing runs until [`run_next`](Self::run_next) or
/// [`run_until_idle`](Self::run_until_idle) is called, which makes every
/// reaction ordering observable in tests.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<Task>>>,
    settings: SchedulerSettings,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: SchedulerSettings) -> Self {
        Self {
            queue: Rc::default(),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> SchedulerSettings {
        self.settings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Run the oldest queued task. Returns `false` if the queue was empty.
    pub fn run_next(&self) -> bool {
        // Release the borrow before running: tasks enqueue more tasks.
        let task = self.queue.borrow_mut().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run tasks until the queue is empty, including tasks enqueued along the way.
    ///
    /// Returns the number of tasks run. With a bounded turn limit the drain
    /// stops once the limit is reached and the remaining tasks stay queued.
    pub fn run_until_idle(&self) -> Result<usize, SchedulerError> {
        let limit = self.settings.turn_limit();
        let mut turns = 0;
        while !self.is_empty() {
            if let TurnLimit::Bounded(limit) = limit {
                if turns >= limit.get() {
                    let remaining = self.len();
                    tracing::warn!(turns, remaining, "Scheduler turn limit reached");
                    return Err(SchedulerError::TurnLimitExceeded { limit, remaining });
                }
            }
            self.run_next();
            turns += 1;
        }
        Ok(turns)
    }
}

impl Scheduler for ManualScheduler {
    fn enqueue(&self, task: Task) {
        self.queue.borrow_mut().push_back(task);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("queued", &self.len())
            .field("settings", &self.settings)
            .finish()
    }
}
