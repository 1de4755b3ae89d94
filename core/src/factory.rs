//! Constructors for promise/resolver pairs.

use std::rc::Rc;

use after_types::Scheduler;

use crate::cell::SettlementCell;
use crate::promise::{Promise, Resolver};

/// A fresh pending promise together with its only resolver.
#[derive(Debug)]
pub struct Pending<T, E> {
    pub promise: Promise<T, E>,
    pub resolver: Resolver<T, E>,
}

impl<T, E> Pending<T, E> {
    #[must_use]
    pub fn into_parts(self) -> (Promise<T, E>, Resolver<T, E>) {
        (self.promise, self.resolver)
    }
}

/// Create a pending promise whose reactions run on `scheduler`.
///
/// The scheduler is cloned into the cell, so clones must share their queue.
/// Every promise chained from the result inherits the same scheduler.
pub fn pending<T, E, S>(scheduler: &S) -> Pending<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
    S: Scheduler + Clone + 'static,
{
    let scheduler: Rc<dyn Scheduler> = Rc::new(scheduler.clone());
    let cell = Rc::new(SettlementCell::new(scheduler));
    Pending {
        promise: Promise::new(Rc::clone(&cell)),
        resolver: Resolver::new(cell),
    }
}

/// Create a promise already fulfilled with `value`.
pub fn fulfilled<T, E, S>(scheduler: &S, value: T) -> Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
    S: Scheduler + Clone + 'static,
{
    let Pending { promise, resolver } = pending(scheduler);
    resolver.fulfill(value);
    promise
}

/// Create a promise already rejected with `reason`.
pub fn rejected<T, E, S>(scheduler: &S, reason: E) -> Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
    S: Scheduler + Clone + 'static,
{
    let Pending { promise, resolver } = pending(scheduler);
    resolver.reject(reason);
    promise
}
