//! Monty RNG Infrastructure
//!
//! Provides seed sources for simulation and demonstration runs:
//!
//! ## Seed Hierarchy
//!
//! ```text
//! master seed (FixedSeed / EntropySeed)
//!     │
//!     └── SeedSequence (SplitMix64 stream)
//!             │
//!             ├── worker 0 → StdRng
//!             ├── worker 1 → StdRng
//!             └── ...
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use monty_rng::{FixedSeed, SeedSequence, SeedSource, seeded_rng};
//!
//! let master = FixedSeed::new(42);
//! let workers = SeedSequence::new(master.next_seed());
//!
//! let mut rng_a = seeded_rng(workers.next_seed());
//! let mut rng_b = seeded_rng(workers.next_seed());
//! ```

mod entropy;
mod fixed;
mod sequence;

pub use entropy::EntropySeed;
pub use fixed::FixedSeed;
pub use sequence::{SeedSequence, splitmix64};

// Re-export the SeedSource trait for convenience
pub use monty_ports::SeedSource;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generator type used throughout the simulation
pub type SimRng = StdRng;

/// Build the simulation generator from a seed
pub fn seeded_rng(seed: u64) -> SimRng {
    StdRng::seed_from_u64(seed)
}

/// Build a generator from whatever seed the source hands out
pub fn rng_from_source(source: &dyn SeedSource) -> SimRng {
    let seed = source.next_seed();
    log::trace!("{} handed out seed {}", source.name(), seed);
    seeded_rng(seed)
}
