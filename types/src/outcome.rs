use std::fmt;

use crate::thenable::Thenable;

/// What a reaction handler produces.
///
/// `Reject` is how a handler fails: it rejects the dependent promise instead
/// of escaping into the caller. `Follow` hands back another deferred value;
/// the dependent promise settles when that one does.
pub enum Outcome<T, E> {
    Fulfill(T),
    Reject(E),
    Follow(Box<dyn Thenable<T, E>>),
}

impl<T, E> Outcome<T, E> {
    /// Follow any thenable, boxing it.
    pub fn follow(thenable: impl Thenable<T, E> + 'static) -> Self {
        Outcome::Follow(Box::new(thenable))
    }

    #[must_use]
    pub const fn is_follow(&self) -> bool {
        matches!(self, Outcome::Follow(_))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Fulfill(value),
            Err(reason) => Outcome::Reject(reason),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Fulfill(value) => f.debug_tuple("Fulfill").field(value).finish(),
            Outcome::Reject(reason) => f.debug_tuple("Reject").field(reason).finish(),
            Outcome::Follow(_) => f.write_str("Follow(..)"),
        }
    }
}
