//! Simulation - config-driven sequential Monte Carlo run
//!
//! Ties together:
//! - Seed provisioning
//! - The trial loop
//! - Aggregation into a report

use crate::{
    config::RunnerConfig,
    error::Result,
    report::RunReport,
    results::{AggregateResults, run_trials},
    summary::summarize,
};
use monty_core::Strategy;
use monty_ports::SeedSource;
use monty_rng::seeded_rng;
use std::time::Instant;

/// Sequential Monte Carlo runner
pub struct MonteCarloRunner {
    /// Configuration
    config: RunnerConfig,
    /// Where the master seed comes from
    seeds: Box<dyn SeedSource>,
}

impl MonteCarloRunner {
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

    /// Play every trial and keep them all, in order
    ///
    /// Returns the seed used alongside the results so the run can be replayed.
    pub fn collect(&self) -> Result<(u64, AggregateResults)> {
        let seed = self.seeds.next_seed();
        log::debug!("{} handed out master seed {}", self.seeds.name(), seed);

        let mut rng = seeded_rng(seed);
        let results = run_trials(&mut rng, self.config.trials)?;
        Ok((seed, results))
    }

    /// Run the full simulation
    pub fn run(&self) -> Result<RunReport> {
        log::info!("Starting Monty Hall simulation ({} trials)...", self.config.trials);

        let started = Instant::now();
        let (seed, results) = self.collect()?;
        let summary = summarize(&results);
        let elapsed = started.elapsed();

        let report = RunReport::new(seed, 1, summary, self.config.decimal_places, elapsed);

        log::info!(
            "Simulation finished in {:?}: stay wins {:.4}, switch wins {:.4}",
            elapsed,
            summary.win_rate(Strategy::Stay),
            summary.win_rate(Strategy::Switch)
        );

        Ok(report)
    }
}
