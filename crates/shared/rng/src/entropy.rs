use monty_ports::SeedSource;
use rand::RngCore;
use rand::rngs::OsRng;

/// Fresh seed from the operating system on every call
///
/// This is the default for interactive runs where no seed was requested.
pub struct EntropySeed;

impl EntropySeed {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EntropySeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for EntropySeed {
    fn next_seed(&self) -> u64 {
        OsRng.next_u64()
    }

    fn name(&self) -> &str {
        "EntropySeed"
    }
}
