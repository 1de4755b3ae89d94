//! Resolved scheduler settings.
//!
//! Raw TOML structs stay private in `after-config`; the loader resolves them
//! into these types at the parse boundary. Existence of a value is the proof
//! of its validity.

use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("turn_limit must be between 0 and {max}, got {value}")]
    TurnLimitOutOfRange { value: i64, max: usize },
}

/// Upper bound on tasks run by a single scheduler drain.
///
/// Guards against reaction chains that keep re-enqueueing work forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnLimit {
    #[default]
    Unbounded,
    Bounded(NonZeroUsize),
}

impl TurnLimit {
    /// Zero means unbounded.
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(limit) => TurnLimit::Bounded(limit),
            None => TurnLimit::Unbounded,
        }
    }

    /// Whether a drain that has already run `turns` tasks may run another.
    #[must_use]
    pub const fn allows(self, turns: usize) -> bool {
        match self {
            TurnLimit::Unbounded => true,
            TurnLimit::Bounded(limit) => turns < limit.get(),
        }
    }
}

impl TryFrom<i64> for TurnLimit {
    type Error = SettingsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Self::from_count)
            .map_err(|_| SettingsError::TurnLimitOutOfRange {
                value,
                max: usize::MAX,
            })
    }
}

/// Validated scheduler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchedulerSettings {
    turn_limit: TurnLimit,
}

impl SchedulerSettings {
    #[must_use]
    pub const fn new(turn_limit: TurnLimit) -> Self {
        Self { turn_limit }
    }

    #[must_use]
    pub const fn turn_limit(&self) -> TurnLimit {
        self.turn_limit
    }
}
