//! The thenable capability.
//!
//! A thenable is anything that will eventually call exactly one of two
//! callbacks. The promise core follows thenables returned from reaction
//! handlers instead of treating them as plain values, which is what collapses
//! a promise-of-a-promise into a single settlement.
//!
//! The core's own `Promise` implements [`Thenable`]. Foreign future types can
//! be adapted with [`from_fn`] or a dedicated adapter type.

use std::fmt;
use std::marker::PhantomData;

/// Callback invoked with a fulfillment value.
pub type OnFulfilled<T> = Box<dyn FnOnce(T)>;

/// Callback invoked with a rejection reason.
pub type OnRejected<E> = Box<dyn FnOnce(E)>;

/// A deferred value that can be subscribed to once.
///
/// Implementors should call at most one of the callbacks, at most once. The
/// core tolerates misbehaving thenables (the first settlement wins) but does
/// not try to detect them.
pub trait Thenable<T, E> {
    fn subscribe(self: Box<Self>, on_fulfilled: OnFulfilled<T>, on_rejected: OnRejected<E>);
}

/// Thenable built from a closure that receives both callbacks.
pub struct FromFn<F, T, E> {
    subscribe: F,
    _marker: PhantomData<fn(T, E)>,
}

/// Adapt a closure-driven future into a [`Thenable`].
///
/// ```
/// use after_types::thenable::{self, Thenable};
///
/// let source = thenable::from_fn(|on_fulfilled: thenable::OnFulfilled<u8>, _on_rejected: thenable::OnRejected<()>| {
///     on_fulfilled(7);
/// });
/// Box::new(source).subscribe(Box::new(|value| assert_eq!(value, 7)), Box::new(|()| unreachable!()));
/// ```
pub fn from_fn<T, E, F>(subscribe: F) -> FromFn<F, T, E>
where
    F: FnOnce(OnFulfilled<T>, OnRejected<E>),
{
    FromFn {
        subscribe,
        _marker: PhantomData,
    }
}

impl<T, E, F> Thenable<T, E> for FromFn<F, T, E>
where
    F: FnOnce(OnFulfilled<T>, OnRejected<E>),
{
    fn subscribe(self: Box<Self>, on_fulfilled: OnFulfilled<T>, on_rejected: OnRejected<E>) {
        (self.subscribe)(on_fulfilled, on_rejected);
    }
}

impl<F, T, E> fmt::Debug for FromFn<F, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
