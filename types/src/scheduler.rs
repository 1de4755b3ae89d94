//! The deferred-execution seam.

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks in a later turn than the one that enqueued them.
///
/// Implementations must uphold two rules:
/// - `enqueue` never runs `task` before returning.
/// - Tasks enqueued from the same turn run in the order they were enqueued.
///
/// Every reaction the promise core fires goes through this trait, so a
/// synchronous, manually drained implementation makes the core fully
/// deterministic under test.
pub trait Scheduler {
    fn enqueue(&self, task: Task);
}
