//! Monty Core Domain
//!
//! Pure domain types for the Monty Hall simulation.
//! This crate contains no randomness, no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{GameLayout, TrialResult};
pub use error::{GameError, GameResult};
pub use values::{Door, Label, Outcome, Strategy};
