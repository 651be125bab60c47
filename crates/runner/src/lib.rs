//! Monty Runner - Monte Carlo Simulation
//!
//! Repeats the single-game engine many times and aggregates the outcomes:
//!
//! - **Results**: The trial loop (`run_trials`) and its ordered output
//! - **Summary**: Contingency table, full-precision and rounded proportions
//! - **Simulation**: Config-driven sequential runner
//! - **Parallel**: Worker pool with per-worker generators and merged tallies
//! - **Config**: JSON configuration with defaults and validation
//!
//! ## Architecture
//!
//! ```text
//!                    ┌──────────────────┐
//!                    │   RunnerConfig   │
//!                    │ (trials, seed..) │
//!                    └────────┬─────────┘
//!                             │
//!              ┌──────────────┴──────────────┐
//!              ▼                             ▼
//!    ┌──────────────────┐         ┌──────────────────────┐
//!    │ MonteCarloRunner │         │    ParallelRunner    │
//!    │   (sequential)   │         │ (worker 0..W, merge) │
//!    └────────┬─────────┘         └──────────┬───────────┘
//!             │ play_one_trial × n           │ play_one_trial × n/W
//!             ▼                              ▼
//!    ┌──────────────────┐         ┌──────────────────────┐
//!    │ AggregateResults │         │  ContingencyTable ×W │
//!    └────────┬─────────┘         └──────────┬───────────┘
//!             └──────────────┬───────────────┘
//!                            ▼
//!                  ┌───────────────────┐
//!                  │ Summary/RunReport │
//!                  └───────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod parallel;
pub mod report;
pub mod results;
pub mod simulation;
pub mod summary;

// Re-export main types
pub use config::{ConfigError, RunnerConfig};
pub use error::{Result, RunnerError};
pub use parallel::{ParallelRunner, split_trials};
pub use report::RunReport;
pub use results::{AggregateResults, run_trials};
pub use simulation::MonteCarloRunner;
pub use summary::{ContingencyTable, Proportions, RoundedProportions, Summary, summarize};

// Re-export domain types for convenience
pub use monty_core::{Door, Outcome, Strategy, TrialResult};
