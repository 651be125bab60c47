use monty_ports::SeedSource;
use std::sync::atomic::{AtomicU64, Ordering};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer: maps consecutive inputs to well-mixed outputs
pub fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic stream of seeds derived from a master seed
///
/// Each call advances an internal counter, so handing the sequence to
/// several workers gives each one an independent generator while the whole
/// run stays reproducible from the master seed.
pub struct SeedSequence {
    master: u64,
    counter: AtomicU64,
}

impl SeedSequence {
    pub fn new(master: u64) -> Self {
        Self {
            master,
            counter: AtomicU64::new(0),
        }
    }

    pub fn master(&self) -> u64 {
        self.master
    }

    /// Seed for stream `index` without advancing the sequence
    pub fn seed_at(&self, index: u64) -> u64 {
        splitmix64(
            self.master
                .wrapping_add(GOLDEN_GAMMA.wrapping_mul(index.wrapping_add(1))),
        )
    }
}

impl SeedSource for SeedSequence {
    fn next_seed(&self) -> u64 {
        let index = self.counter.fetch_add(1, Ordering::Relaxed);
        self.seed_at(index)
    }

    fn name(&self) -> &str {
        "SeedSequence"
    }
}
