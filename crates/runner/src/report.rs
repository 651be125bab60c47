//! Run report - what a finished run hands back to its caller

use crate::summary::{RoundedProportions, Summary};
use monty_core::Strategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of a complete Monte Carlo run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Trials played
    pub trials: u64,
    /// Workers the trials were split across
    pub workers: usize,
    /// Master seed the run was driven by
    pub seed: u64,
    /// Counts and full-precision proportions
    pub summary: Summary,
    /// Display view of the proportions
    pub rounded: RoundedProportions,
    /// Wall-clock time spent playing
    pub elapsed: Duration,
}

impl RunReport {
    pub fn new(
        seed: u64,
        workers: usize,
        summary: Summary,
        decimal_places: u32,
        elapsed: Duration,
    ) -> Self {
        Self {
            trials: summary.trials(),
            workers,
            seed,
            rounded: summary.rounded(decimal_places),
            summary,
            elapsed,
        }
    }

    /// How many times more often switching wins than staying
    pub fn switch_advantage(&self) -> Option<f64> {
        let stay = self.summary.win_rate(Strategy::Stay);
        if stay == 0.0 {
            None
        } else {
            Some(self.summary.win_rate(Strategy::Switch) / stay)
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Monty Hall: {} trials, {} worker(s), seed {}",
            self.trials, self.workers, self.seed
        )?;
        writeln!(f)?;
        writeln!(f, "Counts")?;
        write!(f, "{}", self.summary.counts)?;
        writeln!(f)?;
        writeln!(f, "Proportions")?;
        write!(f, "{}", self.rounded)?;
        if let Some(advantage) = self.switch_advantage() {
            writeln!(f)?;
            writeln!(f, "Switching wins {:.2}x as often as staying", advantage)?;
        }
        Ok(())
    }
}
