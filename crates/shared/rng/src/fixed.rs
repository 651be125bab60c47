use monty_ports::SeedSource;

/// Always hands out the same seed
///
/// Use this in tests and for reproducible demonstrations.
pub struct FixedSeed {
    seed: u64,
}

impl FixedSeed {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SeedSource for FixedSeed {
    fn next_seed(&self) -> u64 {
        self.seed
    }

    fn name(&self) -> &str {
        "FixedSeed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_never_changes() {
        let source = FixedSeed::new(42);
        assert_eq!(source.next_seed(), 42);
        assert_eq!(source.next_seed(), 42);
        assert_eq!(source.seed(), 42);
    }
}
