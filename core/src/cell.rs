//! The settlement state machine behind every promise.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use after_types::{OnFulfilled, OnRejected, PromiseState, Scheduler};

enum Slot<T, E> {
    Pending {
        fulfill_reactions: Vec<OnFulfilled<T>>,
        reject_reactions: Vec<OnRejected<E>>,
    },
    Fulfilled(T),
    Rejected(E),
}

/// Single-assignment state holder with queued reactions.
///
/// Invariant: once `slot` leaves `Pending` it is never written again, and both
/// reaction queues are dropped in the same write.
pub(crate) struct SettlementCell<T, E> {
    slot: RefCell<Slot<T, E>>,
    scheduler: Rc<dyn Scheduler>,
}

impl<T, E> SettlementCell<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    pub(crate) fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            slot: RefCell::new(Slot::Pending {
                fulfill_reactions: Vec::new(),
                reject_reactions: Vec::new(),
            }),
            scheduler,
        }
    }

    pub(crate) fn scheduler(&self) -> &Rc<dyn Scheduler> {
        &self.scheduler
    }

    pub(crate) fn state(&self) -> PromiseState {
        state_of(&*self.slot.borrow())
    }

    pub(crate) fn fulfill(&self, value: T) {
        let reactions = {
            let mut slot = self.slot.borrow_mut();
            let Slot::Pending {
                fulfill_reactions, ..
            } = &mut *slot
            else {
                tracing::debug!(state = %state_of(&*slot), "Ignoring fulfill on settled cell");
                return;
            };
            let reactions = std::mem::take(fulfill_reactions);
            *slot = Slot::Fulfilled(value.clone());
            reactions
        };
        tracing::trace!(
            state = %PromiseState::Fulfilled,
            reactions = reactions.len(),
            "Cell settled"
        );
        self.dispatch(reactions, &value);
    }

    pub(crate) fn reject(&self, reason: E) {
        let reactions = {
            let mut slot = self.slot.borrow_mut();
            let Slot::Pending {
                reject_reactions, ..
            } = &mut *slot
            else {
                tracing::debug!(state = %state_of(&*slot), "Ignoring reject on settled cell");
                return;
            };
            let reactions = std::mem::take(reject_reactions);
            *slot = Slot::Rejected(reason.clone());
            reactions
        };
        tracing::trace!(
            state = %PromiseState::Rejected,
            reactions = reactions.len(),
            "Cell settled"
        );
        self.dispatch(reactions, &reason);
    }

    /// Register one reaction per outcome.
    ///
    /// While pending, the reactions are queued. Once settled, the matching
    /// reaction is scheduled straight away with the stored value; it still
    /// never runs before this call returns.
    pub(crate) fn subscribe(&self, on_fulfilled: OnFulfilled<T>, on_rejected: OnRejected<E>) {
        let settled = {
            let mut slot = self.slot.borrow_mut();
            match &mut *slot {
                Slot::Pending {
                    fulfill_reactions,
                    reject_reactions,
                } => {
                    fulfill_reactions.push(on_fulfilled);
                    reject_reactions.push(on_rejected);
                    return;
                }
                Slot::Fulfilled(value) => Late::Fulfilled(value.clone(), on_fulfilled),
                Slot::Rejected(reason) => Late::Rejected(reason.clone(), on_rejected),
            }
        };

        match settled {
            Late::Fulfilled(value, reaction) => {
                tracing::trace!(state = %PromiseState::Fulfilled, "Late registration");
                self.scheduler.enqueue(Box::new(move || reaction(value)));
            }
            Late::Rejected(reason, reaction) => {
                tracing::trace!(state = %PromiseState::Rejected, "Late registration");
                self.scheduler.enqueue(Box::new(move || reaction(reason)));
            }
        }
    }

    fn dispatch<V: Clone + 'static>(&self, reactions: Vec<Box<dyn FnOnce(V)>>, value: &V) {
        for reaction in reactions {
            let value = value.clone();
            self.scheduler.enqueue(Box::new(move || reaction(value)));
        }
    }
}

enum Late<T, E> {
    Fulfilled(T, OnFulfilled<T>),
    Rejected(E, OnRejected<E>),
}

fn state_of<T, E>(slot: &Slot<T, E>) -> PromiseState {
    match slot {
        Slot::Pending { .. } => PromiseState::Pending,
        Slot::Fulfilled(_) => PromiseState::Fulfilled,
        Slot::Rejected(_) => PromiseState::Rejected,
    }
}

impl<T, E> fmt::Debug for SettlementCell<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self
            .slot
            .try_borrow()
            .map_or(PromiseState::Pending, |slot| state_of(&*slot));
        f.debug_struct("SettlementCell")
            .field("state", &state)
            .finish_non_exhaustive()
    }
}
