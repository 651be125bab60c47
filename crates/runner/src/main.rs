use monty_runner::{MonteCarloRunner, ParallelRunner, RunnerConfig};

fn print_help() {
    eprintln!(
        r#"Monty Hall - stay vs switch Monte Carlo simulation

USAGE:
    monty-hall [OPTIONS]

OPTIONS:
    -n, --trials <N>      Number of games to play (default: 10000)
    -s, --seed <SEED>     Master seed for a reproducible run
    -w, --workers <W>     Split trials across W worker tasks (default: 1)
    -d, --decimals <D>    Decimal places for proportions (default: 2)
    -c, --config <PATH>   Load configuration from JSON file
        --json            Print the report as JSON
    -h, --help            Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG              Log level filter (default: info)

EXAMPLES:
    # Run with defaults
    monty-hall

    # Reproducible run on four workers
    monty-hall --trials 1000000 --seed 42 --workers 4
"#
    );
}

/// Parsed command line; flags override values from the config file
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<String>,
    trials: Option<u64>,
    seed: Option<u64>,
    workers: Option<usize>,
    decimals: Option<u32>,
    json: bool,
    help: bool,
}

impl CliArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut cli = CliArgs::default();

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--help" | "-h" => cli.help = true,
                "--json" => cli.json = true,
                "--config" | "-c" => cli.config_path = Some(value_for(args, &mut i, flag)?),
                "--trials" | "-n" => cli.trials = Some(number_for(args, &mut i, flag)?),
                "--seed" | "-s" => cli.seed = Some(number_for(args, &mut i, flag)?),
                "--workers" | "-w" => cli.workers = Some(number_for(args, &mut i, flag)?),
                "--decimals" | "-d" => cli.decimals = Some(number_for(args, &mut i, flag)?),
                arg => return Err(format!("Unknown argument: {}", arg)),
            }
            i += 1;
        }

        Ok(cli)
    }

    /// Apply command-line overrides on top of a base configuration
    fn apply(&self, mut config: RunnerConfig) -> RunnerConfig {
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(decimals) = self.decimals {
            config.decimal_places = decimals;
        }
        config
    }
}

fn value_for(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn number_for<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<T, String> {
    let raw = value_for(args, i, flag)?;
    raw.parse()
        .map_err(|_| format!("{} expects a non-negative integer, got '{}'", flag, raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_help();
            std::process::exit(1);
        }
    };

    if cli.help {
        print_help();
        return Ok(());
    }

    let base = match &cli.config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            RunnerConfig::from_file(path)?
        }
        None => RunnerConfig::default(),
    };
    let config = cli.apply(base);

    let report = if config.workers > 1 {
        ParallelRunner::new(config)?.run().await?
    } else {
        MonteCarloRunner::new(config)?.run()?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
