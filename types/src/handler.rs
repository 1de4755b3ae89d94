use std::fmt;

use crate::outcome::Outcome;

/// An optional reaction handler.
///
/// `Absent` is not a no-op: the settled value or reason passes through to the
/// dependent promise unchanged. Rejections are never swallowed by a missing
/// handler.
pub enum Handler<A, T, E> {
    Provided(Box<dyn FnOnce(A) -> Outcome<T, E>>),
    Absent,
}

impl<A, T, E> Handler<A, T, E> {
    pub fn new(handler: impl FnOnce(A) -> Outcome<T, E> + 'static) -> Self {
        Handler::Provided(Box::new(handler))
    }

    #[must_use]
    pub const fn is_provided(&self) -> bool {
        matches!(self, Handler::Provided(_))
    }
}

impl<A, T, E> Default for Handler<A, T, E> {
    fn default() -> Self {
        Handler::Absent
    }
}

impl<A, T, E> fmt::Debug for Handler<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Provided(_) => f.write_str("Provided(..)"),
            Handler::Absent => f.write_str("Absent"),
        }
    }
}
