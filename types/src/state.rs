use std::fmt;

/// Settlement tag of a promise, without its value.
///
/// Transitions are one-way: `Pending` moves to exactly one of the settled
/// variants and never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromiseState {
    #[default]
    Pending,
    Fulfilled,
    Rejected,
}

impl PromiseState {
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, PromiseState::Pending)
    }

    #[must_use]
    pub const fn is_settled(self) -> bool {
        !self.is_pending()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PromiseState::Pending => "pending",
            PromiseState::Fulfilled => "fulfilled",
            PromiseState::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PromiseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
