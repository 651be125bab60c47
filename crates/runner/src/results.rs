//! Results - the trial loop and its ordered output

use crate::error::{Result, RunnerError};
use crate::summary::ContingencyTable;
use monty_core::TrialResult;
use monty_engine::play_one_trial;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest up-front allocation for the trial vector
const MAX_PREALLOCATED_TRIALS: u64 = 1 << 20;

/// Every trial of a run, in the order played
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResults {
    trials: Vec<TrialResult>,
}

impl AggregateResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trials: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, trial: TrialResult) {
        self.trials.push(trial);
    }

    /// Append another run's trials after this one's
    pub fn extend(&mut self, other: AggregateResults) {
        self.trials.extend(other.trials);
    }

    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrialResult> {
        self.trials.iter()
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Reduce to strategy × outcome counts
    pub fn tally(&self) -> ContingencyTable {
        let mut table = ContingencyTable::default();
        for trial in &self.trials {
            table.record(trial);
        }
        table
    }
}

impl FromIterator<TrialResult> for AggregateResults {
    fn from_iter<I: IntoIterator<Item = TrialResult>>(iter: I) -> Self {
        Self {
            trials: iter.into_iter().collect(),
        }
    }
}

/// Play `n` independent rounds from `rng`
///
/// A zero trial count is rejected. Any engine error aborts the run and is
/// returned as-is; no partial results are handed back.
pub fn run_trials<R: Rng + ?Sized>(rng: &mut R, n: u64) -> Result<AggregateResults> {
    if n == 0 {
        return Err(RunnerError::InvalidArgument(
            "trial count must be at least 1".to_string(),
        ));
    }

    let mut results = AggregateResults::with_capacity(n.min(MAX_PREALLOCATED_TRIALS) as usize);

    for index in 0..n {
        let trial = play_one_trial(rng)?;
        log::trace!(
            "Trial {}: prize={} pick={} opened={} stay={} switch={}",
            index,
            trial.layout.prize_door(),
            trial.initial_choice,
            trial.revealed,
            trial.stay,
            trial.switch
        );
        results.push(trial);
    }

    Ok(results)
}
