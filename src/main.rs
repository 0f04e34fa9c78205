//! u-primepath CLI - answers one prime-position shortest path query.
//!
//! Reads `N M`, `source destination` and `M` edges `u v w1 w2` from a file
//! or stdin and prints the path found.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};

use u_primepath::candidates::RestartConfig;
use u_primepath::io::{format_json, format_plain, parse_problem};
use u_primepath::search::SearchConfig;
use u_primepath::solver::{solve, SolverConfig, Strategy};

/// Largest `--max-depth` accepted; the exact search allocates N × (depth + 1) states.
const MAX_DEPTH_LIMIT: u64 = 1 << 20;

/// Prime-position shortest path solver.
///
/// The k-th edge of a path costs 3 × w2 when k is prime and w1 otherwise.
#[derive(Parser)]
#[command(name = "u-primepath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// Search strategy
    #[arg(long, short, default_value_t = Strategy::StateExpanded)]
    strategy: Strategy,

    /// Longest path (in edges) the exact search explores; defaults to N
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_DEPTH_LIMIT))]
    max_depth: Option<usize>,

    /// Expanded-state ceiling for the exact search
    #[arg(long)]
    state_budget: Option<usize>,

    /// Wall-clock limit in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Number of Yen candidates
    #[arg(long, default_value_t = 100)]
    k: usize,

    /// Number of jittered restart rounds
    #[arg(long, default_value_t = 32)]
    rounds: usize,

    /// Penalty on restart edges into high-degree nodes (0 disables)
    #[arg(long, default_value_t = 0.0)]
    degree_bias: f64,

    /// Seed for restart jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output format
    #[arg(long, default_value = "plain")]
    format: OutputFormat,

    /// Suppress info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Node count, then the node sequence
    #[default]
    Plain,
    /// Machine-readable JSON object
    Json,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        let mut search = SearchConfig::default();
        if let Some(depth) = self.max_depth {
            search = search.with_max_depth(depth);
        }
        if let Some(budget) = self.state_budget {
            search = search.with_state_budget(budget);
        }

        let restarts = RestartConfig::default()
            .with_rounds(self.rounds)
            .with_degree_bias(self.degree_bias)
            .with_seed(self.seed);

        let mut config = SolverConfig::default()
            .with_strategy(self.strategy)
            .with_search(search)
            .with_k(self.k)
            .with_restarts(restarts);
        if let Some(ms) = self.time_limit_ms {
            config = config.with_time_limit(Duration::from_millis(ms));
        }
        config
    }
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input = read_input(cli.input.as_ref())?;
    let problem = parse_problem(&input).context("invalid problem description")?;
    let solution = solve(&problem, &cli.solver_config());

    let output = match cli.format {
        OutputFormat::Plain => format_plain(&solution),
        OutputFormat::Json => format_json(&solution)? + "\n",
    };
    print!("{output}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the answer.
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("u-primepath").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_map_to_solver_config() {
        let cli = parse(&[]).expect("valid");
        let config = cli.solver_config();
        assert_eq!(config.strategy, Strategy::StateExpanded);
        assert_eq!(config.search.max_depth, None);
        assert_eq!(config.k, 100);
        assert_eq!(config.restarts.degree_bias, 0.0);
        assert_eq!(config.time_limit, None);
    }

    #[test]
    fn test_max_depth_within_limit() {
        let cli = parse(&["--max-depth", "12"]).expect("valid");
        assert_eq!(cli.solver_config().search.max_depth, Some(12));
    }

    #[test]
    fn test_max_depth_beyond_limit_rejected() {
        assert!(parse(&["--max-depth", "18446744073709551615"]).is_err());
        assert!(parse(&["--max-depth", "1048577"]).is_err());
    }

    #[test]
    fn test_restart_flags_reach_restart_config() {
        let cli = parse(&["-s", "restarts", "--degree-bias", "2.5", "--rounds", "8", "--seed", "9"])
            .expect("valid");
        let config = cli.solver_config();
        assert_eq!(config.strategy, Strategy::Restarts);
        assert_eq!(config.restarts.degree_bias, 2.5);
        assert_eq!(config.restarts.rounds, 8);
        assert_eq!(config.restarts.seed, 9);
    }

    #[test]
    fn test_time_limit_flag() {
        let cli = parse(&["--time-limit-ms", "250"]).expect("valid");
        assert_eq!(cli.solver_config().time_limit, Some(Duration::from_millis(250)));
    }
}
