//! Core domain types for After.
//!
//! This crate contains the vocabulary shared by the promise core and its
//! collaborators: settlement tags, handler outcomes, the thenable capability,
//! the deferred-execution seam, and validated scheduler settings.
//! Nothing here performs IO or owns a settlement cell.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod handler;
mod outcome;
mod scheduler;
mod settings;
mod state;
pub mod thenable;

pub use handler::Handler;
pub use outcome::Outcome;
pub use scheduler::{Scheduler, Task};
pub use settings::{SchedulerSettings, SettingsError, TurnLimit};
pub use state::PromiseState;
pub use thenable::{OnFulfilled, OnRejected, Thenable};
