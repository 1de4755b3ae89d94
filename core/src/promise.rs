//! Promise handles and the resolution procedure used by chaining.

use std::fmt;
use std::rc::Rc;

use after_types::{Handler, OnFulfilled, OnRejected, Outcome, PromiseState, Thenable};

use crate::cell::SettlementCell;

/// Read-only handle to a settlement cell.
///
/// Cloning shares the same cell. A `Promise` can subscribe but never settle:
///
/// ```compile_fail
/// use after_core::{ManualScheduler, Promise, fulfilled};
///
/// let scheduler = ManualScheduler::new();
/// let promise: Promise<i32, String> = fulfilled(&scheduler, 1);
/// promise.fulfill(2);
/// ```
pub struct Promise<T, E> {
    cell: Rc<SettlementCell<T, E>>,
}

/// Owner-only capability to settle a promise.
///
/// Only the first call to [`fulfill`](Resolver::fulfill) or
/// [`reject`](Resolver::reject) has any effect; later calls are ignored.
pub struct Resolver<T, E> {
    cell: Rc<SettlementCell<T, E>>,
}

impl<T, E> Resolver<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    pub(crate) fn new(cell: Rc<SettlementCell<T, E>>) -> Self {
        Self { cell }
    }

    pub fn fulfill(&self, value: T) {
        self.cell.fulfill(value);
    }

    pub fn reject(&self, reason: E) {
        self.cell.reject(reason);
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.cell.state().is_settled()
    }
}

impl<T, E> Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    pub(crate) fn new(cell: Rc<SettlementCell<T, E>>) -> Self {
        Self { cell }
    }

    #[must_use]
    pub fn state(&self) -> PromiseState {
        self.cell.state()
    }

    /// Attach reactions and return the dependent promise.
    ///
    /// A provided handler's [`Outcome`] decides the dependent's settlement:
    /// `Fulfill` and `Reject` settle it directly, `Follow` settles it once the
    /// returned thenable does. An absent handler passes the value or reason
    /// through unchanged.
    ///
    /// Neither handler runs before `then` returns, even when `self` is
    /// already settled.
    pub fn then(
        &self,
        on_fulfilled: Handler<T, T, E>,
        on_rejected: Handler<E, T, E>,
    ) -> Promise<T, E> {
        self.chain(
            move |value, dependent| match on_fulfilled {
                Handler::Provided(handler) => resolve(dependent, handler(value)),
                Handler::Absent => dependent.fulfill(value),
            },
            move |reason, dependent| match on_rejected {
                Handler::Provided(handler) => resolve(dependent, handler(reason)),
                Handler::Absent => dependent.reject(reason),
            },
        )
    }

    /// Chain a fulfillment handler that may change the value type.
    ///
    /// Rejections pass through to the returned promise.
    pub fn and_then<U, F>(&self, on_fulfilled: F) -> Promise<U, E>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> Outcome<U, E> + 'static,
    {
        self.chain(
            move |value, dependent| resolve(dependent, on_fulfilled(value)),
            |reason, dependent| dependent.reject(reason),
        )
    }

    /// Chain a rejection handler. Values pass through to the returned promise.
    pub fn catch<F>(&self, on_rejected: F) -> Promise<T, E>
    where
        F: FnOnce(E) -> Outcome<T, E> + 'static,
    {
        self.chain(
            |value, dependent| dependent.fulfill(value),
            move |reason, dependent| resolve(dependent, on_rejected(reason)),
        )
    }

    fn chain<U, F, R>(&self, on_fulfilled: F, on_rejected: R) -> Promise<U, E>
    where
        U: Clone + 'static,
        F: FnOnce(T, &Rc<SettlementCell<U, E>>) + 'static,
        R: FnOnce(E, &Rc<SettlementCell<U, E>>) + 'static,
    {
        let dependent = Rc::new(SettlementCell::new(Rc::clone(self.cell.scheduler())));
        let fulfill_target = Rc::clone(&dependent);
        let reject_target = Rc::clone(&dependent);
        self.cell.subscribe(
            Box::new(move |value| on_fulfilled(value, &fulfill_target)),
            Box::new(move |reason| on_rejected(reason, &reject_target)),
        );
        Promise::new(dependent)
    }
}

/// Settle `dependent` from a handler's outcome, following thenables.
///
/// Settlement from a followed thenable is always re-deferred through the
/// scheduler, whatever the thenable itself does.
fn resolve<U, E>(dependent: &Rc<SettlementCell<U, E>>, outcome: Outcome<U, E>)
where
    U: Clone + 'static,
    E: Clone + 'static,
{
    match outcome {
        Outcome::Fulfill(value) => dependent.fulfill(value),
        Outcome::Reject(reason) => dependent.reject(reason),
        Outcome::Follow(thenable) => {
            tracing::trace!("Following returned thenable");
            let on_fulfilled: OnFulfilled<U> = {
                let dependent = Rc::clone(dependent);
                Box::new(move |value| {
                    let scheduler = Rc::clone(dependent.scheduler());
                    scheduler.enqueue(Box::new(move || dependent.fulfill(value)));
                })
            };
            let on_rejected: OnRejected<E> = {
                let dependent = Rc::clone(dependent);
                Box::new(move |reason| {
                    let scheduler = Rc::clone(dependent.scheduler());
                    scheduler.enqueue(Box::new(move || dependent.reject(reason)));
                })
            };
            thenable.subscribe(on_fulfilled, on_rejected);
        }
    }
}

impl<T, E> Thenable<T, E> for Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    fn subscribe(self: Box<Self>, on_fulfilled: OnFulfilled<T>, on_rejected: OnRejected<E>) {
        self.cell.subscribe(on_fulfilled, on_rejected);
    }
}

impl<T, E> From<Promise<T, E>> for Outcome<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    fn from(promise: Promise<T, E>) -> Self {
        Outcome::follow(promise)
    }
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Promise").field(&self.cell).finish()
    }
}

impl<T, E> fmt::Debug for Resolver<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Resolver").field(&self.cell).finish()
    }
}
