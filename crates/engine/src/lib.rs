//! Monty Engine - Single-Game Simulation
//!
//! Plays one round of the three-door game and reports the outcome of both
//! strategies against that round:
//!
//! ```text
//! create_layout ──► select_initial_door ──► reveal_decoy_door
//!                                                 │
//!                         ┌───────────────────────┴───────────────────────┐
//!                         ▼                                               ▼
//!         resolve_final_choice(stay)                      resolve_final_choice(switch)
//!                         │                                               │
//!                         ▼                                               ▼
//!                 determine_outcome                               determine_outcome
//!                         └───────────────────────┬───────────────────────┘
//!                                                 ▼
//!                                            TrialResult
//! ```
//!
//! Every randomized step takes the generator explicitly, so a seeded
//! generator reproduces a game exactly.

pub mod engine;
pub mod game;

pub use engine::GameEngine;
pub use game::{
    create_layout, determine_outcome, final_choice_for, play_one_trial, play_with_layout,
    resolve_final_choice, reveal_decoy_door, select_initial_door,
};

// Re-export domain types for convenience
pub use monty_core::{Door, GameError, GameLayout, GameResult, Label, Outcome, Strategy, TrialResult};
