//! Tokio-backed scheduling and a oneshot thenable adapter.
//!
//! Both types spawn onto the current [`tokio::task::LocalSet`] and panic if
//! used outside one. Promises are `!Send`, so a local set is the only place
//! a tokio runtime can drive them.

use std::fmt;

use tokio::sync::oneshot;

use after_types::{OnFulfilled, OnRejected, Scheduler, Task, Thenable};

/// Scheduler that runs each task as its own local tokio task.
///
/// The local run queue is FIFO, so tasks enqueued from one turn start in
/// enqueue order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    /// Adapt a oneshot receiver carrying a `Result` into a thenable.
    ///
    /// If the sender is dropped without sending, the thenable rejects with
    /// the converted [`oneshot::error::RecvError`].
    #[must_use]
    pub fn receiver<T, E>(receiver: oneshot::Receiver<Result<T, E>>) -> ReceiverThenable<T, E> {
        ReceiverThenable { receiver }
    }
}

impl Scheduler for TokioScheduler {
    fn enqueue(&self, task: Task) {
        drop(tokio::task::spawn_local(async move { task() }));
    }
}

/// Thenable that settles from a `tokio::sync::oneshot` channel.
pub struct ReceiverThenable<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Thenable<T, E> for ReceiverThenable<T, E>
where
    T: 'static,
    E: From<oneshot::error::RecvError> + 'static,
{
    fn subscribe(self: Box<Self>, on_fulfilled: OnFulfilled<T>, on_rejected: OnRejected<E>) {
        let receiver = self.receiver;
        drop(tokio::task::spawn_local(async move {
            match receiver.await {
                Ok(Ok(value)) => on_fulfilled(value),
                Ok(Err(reason)) => on_rejected(reason),
                Err(closed) => {
                    tracing::debug!("Oneshot sender dropped before sending");
                    on_rejected(E::from(closed));
                }
            }
        }));
    }
}

impl<T, E> fmt::Debug for ReceiverThenable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiverThenable").finish_non_exhaustive()
    }
}
