//! Single-assignment promises for single-threaded, scheduler-driven code.
//!
//! A [`Promise`] is a read-only view of a settlement cell that is either
//! pending, fulfilled with a value, or rejected with a reason. Only the
//! [`Resolver`] returned by [`pending`] can settle it, and only the first
//! settlement counts.
//!
//! Reactions attached with [`Promise::then`] (or [`Promise::and_then`] /
//! [`Promise::catch`]) never run inside the call that attached or triggered
//! them: every firing is handed to a [`Scheduler`]. A handler that returns a
//! thenable is followed, so chains of promises flatten into one settlement.
//!
//! ```
//! use after_core::{ManualScheduler, Outcome, Promise, pending};
//!
//! let scheduler = ManualScheduler::new();
//! let deferred = pending::<i32, String, _>(&scheduler);
//! deferred.resolver.fulfill(10);
//!
//! let doubled: Promise<i32, String> = deferred.promise.and_then(|v| Outcome::Fulfill(v * 2));
//! scheduler.run_until_idle().unwrap();
//! assert!(doubled.state().is_settled());
//! ```

mod cell;
mod factory;
mod promise;
mod scheduler;
mod tokio_local;

pub use after_types::{
    Handler, OnFulfilled, OnRejected, Outcome, PromiseState, Scheduler, SchedulerSettings, Task,
    Thenable, TurnLimit, thenable,
};
pub use factory::{Pending, fulfilled, pending, rejected};
pub use promise::{Promise, Resolver};
pub use scheduler::{ManualScheduler, SchedulerError};
pub use tokio_local::{ReceiverThenable, TokioScheduler};
