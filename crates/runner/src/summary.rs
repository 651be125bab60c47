//! Summary - contingency table and per-strategy proportions
//!
//! Counts and proportions are kept at full precision. Rounding happens only
//! when a [`RoundedProportions`] view is requested for display.

use crate::results::AggregateResults;
use monty_core::{Outcome, Strategy, TrialResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

fn row(strategy: Strategy) -> usize {
    match strategy {
        Strategy::Stay => 0,
        Strategy::Switch => 1,
    }
}

fn column(outcome: Outcome) -> usize {
    match outcome {
        Outcome::Win => 0,
        Outcome::Lose => 1,
    }
}

/// Raw counts keyed by strategy × outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    counts: [[u64; 2]; 2],
}

impl ContingencyTable {
    /// Count both strategies' outcomes of one trial
    pub fn record(&mut self, trial: &TrialResult) {
        for (strategy, outcome) in trial.records() {
            self.counts[row(strategy)][column(outcome)] += 1;
        }
    }

    /// Add another table's counts into this one
    pub fn merge(&mut self, other: &ContingencyTable) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            for (a, b) in mine.iter_mut().zip(theirs.iter()) {
                *a += b;
            }
        }
    }

    pub fn count(&self, strategy: Strategy, outcome: Outcome) -> u64 {
        self.counts[row(strategy)][column(outcome)]
    }

    /// Trials recorded for one strategy
    pub fn row_total(&self, strategy: Strategy) -> u64 {
        self.counts[row(strategy)].iter().sum()
    }

    /// Trials recorded (each trial adds one entry per strategy)
    pub fn trials(&self) -> u64 {
        self.row_total(Strategy::Stay)
    }

    pub fn is_empty(&self) -> bool {
        self.trials() == 0
    }

    /// Row-normalized proportions at full precision
    pub fn proportions(&self) -> Proportions {
        let mut values = [[0.0; 2]; 2];
        for strategy in Strategy::ALL {
            let total = self.row_total(strategy);
            if total == 0 {
                continue;
            }
            for outcome in Outcome::ALL {
                values[row(strategy)][column(outcome)] =
                    self.count(strategy, outcome) as f64 / total as f64;
            }
        }
        Proportions { values }
    }
}

impl FromIterator<TrialResult> for ContingencyTable {
    fn from_iter<I: IntoIterator<Item = TrialResult>>(iter: I) -> Self {
        let mut table = ContingencyTable::default();
        for trial in iter {
            table.record(&trial);
        }
        table
    }
}

/// Per-strategy fractions of wins and losses; each non-empty row sums to 1.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Proportions {
    values: [[f64; 2]; 2],
}

impl Proportions {
    pub fn get(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        self.values[row(strategy)][column(outcome)]
    }

    /// Win fraction for a strategy
    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.get(strategy, Outcome::Win)
    }

    pub fn row_sum(&self, strategy: Strategy) -> f64 {
        self.values[row(strategy)].iter().sum()
    }

    /// Presentation view rounded to `decimal_places`
    pub fn rounded(&self, decimal_places: u32) -> RoundedProportions {
        let values = self.values.map(|cells| {
            cells.map(|value| {
                Decimal::from_f64_retain(value)
                    .unwrap_or(Decimal::ZERO)
                    .round_dp(decimal_places)
            })
        });
        RoundedProportions {
            decimal_places,
            values,
        }
    }
}

/// Proportions rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedProportions {
    decimal_places: u32,
    values: [[Decimal; 2]; 2],
}

impl RoundedProportions {
    pub fn get(&self, strategy: Strategy, outcome: Outcome) -> Decimal {
        self.values[row(strategy)][column(outcome)]
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }
}

/// Counts plus full-precision proportions for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub counts: ContingencyTable,
    pub proportions: Proportions,
}

impl Summary {
    pub fn from_counts(counts: ContingencyTable) -> Self {
        Self {
            counts,
            proportions: counts.proportions(),
        }
    }

    pub fn trials(&self) -> u64 {
        self.counts.trials()
    }

    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.proportions.win_rate(strategy)
    }

    pub fn rounded(&self, decimal_places: u32) -> RoundedProportions {
        self.proportions.rounded(decimal_places)
    }
}

/// Reduce a run to counts and proportions
///
/// An empty result set yields all-zero counts and proportions.
pub fn summarize(results: &AggregateResults) -> Summary {
    Summary::from_counts(results.tally())
}

const LABEL_WIDTH: usize = 8;
const CELL_WIDTH: usize = 10;

fn write_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:<LABEL_WIDTH$}", "")?;
    for outcome in Outcome::ALL {
        write!(f, "{:>CELL_WIDTH$}", outcome.to_string())?;
    }
    writeln!(f)
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f)?;
        for strategy in Strategy::ALL {
            write!(f, "{:<LABEL_WIDTH$}", strategy.to_string())?;
            for outcome in Outcome::ALL {
                write!(f, "{:>CELL_WIDTH$}", self.count(strategy, outcome))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for RoundedProportions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.decimal_places as usize;
        write_header(f)?;
        for strategy in Strategy::ALL {
            write!(f, "{:<LABEL_WIDTH$}", strategy.to_string())?;
            for outcome in Outcome::ALL {
                let cell = format!("{:.places$}", self.get(strategy, outcome));
                write!(f, "{:>CELL_WIDTH$}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
