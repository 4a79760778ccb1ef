//! Command-line arguments.
//!
//! Every option can also be set from the environment.

use clap::Parser;

/// Demonstrates the case-insensitive string set and prints its statistics.
#[derive(Debug, Parser)]
#[command(name = "caseless-set-demo")]
#[command(about = "Exercise a case-insensitive string hash set and print its statistics")]
pub struct Cli {
    /// Maximum load factor of the sets built by the stress rounds.
    #[arg(long, env = "CASELESS_SET_MAX_LOAD_FACTOR", default_value_t = 25.0)]
    pub max_load_factor: f64,

    /// Stress rounds double the input size from 1000 while it stays below this limit.
    #[arg(long, env = "CASELESS_SET_STRESS_LIMIT", default_value_t = 64_000)]
    pub stress_limit: usize,

    /// Seed of the random string generator.
    #[arg(long, env = "CASELESS_SET_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Skip the stress rounds.
    #[arg(long)]
    pub skip_stress: bool,
}
