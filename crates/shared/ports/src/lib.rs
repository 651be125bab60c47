//! Monty Ports
//!
//! Port definitions (traits) for the Monty Hall simulation.
//! These define the boundaries between simulation logic and infrastructure.

mod seed;

pub use seed::SeedSource;
