//! Parallel runner - trials split across blocking worker tasks
//!
//! Each worker owns a generator seeded from the master seed and its worker
//! index, so no generator is shared. Workers only count outcomes; their
//! partial tables are summed once every worker has joined. Summing is
//! order-independent, so the same master seed, trial count and worker count
//! always produce the same summary.

use crate::{
    config::RunnerConfig,
    error::{Result, RunnerError},
    report::RunReport,
    summary::{ContingencyTable, Summary},
};
use monty_engine::play_one_trial;
use monty_ports::SeedSource;
use monty_rng::{SeedSequence, seeded_rng};
use std::time::Instant;
use tokio::task::JoinSet;

/// Split `trials` into `workers` shares that differ by at most one
pub fn split_trials(trials: u64, workers: usize) -> Vec<u64> {
    if workers == 0 {
        return Vec::new();
    }
    let workers_u64 = workers as u64;
    let base = trials / workers_u64;
    let remainder = trials % workers_u64;

    (0..workers_u64)
        .map(|worker| base + u64::from(worker < remainder))
        .collect()
}

/// Play one worker's share and count the outcomes
fn run_share(worker: usize, seed: u64, share: u64) -> Result<ContingencyTable> {
    let mut rng = seeded_rng(seed);
    let mut table = ContingencyTable::default();

    for _ in 0..share {
        let trial = play_one_trial(&mut rng)?;
        table.record(&trial);
    }

    log::debug!("Worker {} finished {} trials", worker, share);
    Ok(table)
}

/// Monte Carlo runner that fans trials out over worker tasks
pub struct ParallelRunner {
    /// Configuration
    config: RunnerConfig,
    /// Where the master seed comes from
    seeds: Box<dyn SeedSource>,
}

impl ParallelRunner {
    /// Create a runner whose seed source follows `config.seed`
    pub fn new(config: RunnerConfig) -> Result<Self> {
        let seeds = config.seed_source();
        Self::with_seed_source(config, seeds)
    }

    /// Create a runner with an explicit seed source
    pub fn with_seed_source(config: RunnerConfig, seeds: Box<dyn SeedSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, seeds })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every share and merge the partial tables
    pub async fn run(&self) -> Result<RunReport> {
        let workers = self.config.workers;
        let master = self.seeds.next_seed();
        let sequence = SeedSequence::new(master);

        log::info!(
            "Starting Monty Hall simulation ({} trials across {} workers, seed {})...",
            self.config.trials,
            workers,
            master
        );

        let started = Instant::now();
        let mut tasks = JoinSet::new();

        for (worker, share) in split_trials(self.config.trials, workers)
            .into_iter()
            .enumerate()
        {
            if share == 0 {
                continue;
            }
            let seed = sequence.seed_at(worker as u64);
            tasks.spawn_blocking(move || run_share(worker, seed, share));
        }

        let mut counts = ContingencyTable::default();
        while let Some(joined) = tasks.join_next().await {
            let partial = joined.map_err(|e| RunnerError::Worker(e.to_string()))??;
            counts.merge(&partial);
        }

        let elapsed = started.elapsed();
        let summary = Summary::from_counts(counts);

        log::info!(
            "Simulation finished in {:?}: {} trials merged from {} workers",
            elapsed,
            summary.trials(),
            workers
        );

        Ok(RunReport::new(
            master,
            workers,
            summary,
            self.config.decimal_places,
            elapsed,
        ))
    }
}
