//! caseless-set demonstration driver
//!
//! Walks through the public API of `CaseInsensitiveStringSet`: a small set
//! that is cleared and copied, a batch of case variants, a list of cities
//! with a removal, and stress rounds over random strings that check the
//! insertion count against the set size and print the statistics report.

mod cli;
mod scenario;

use std::io::{self, Write};

use anyhow::{Context, Result};
use caseless_set::SetConfig;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = SetConfig::new(cli.max_load_factor).context("invalid --max-load-factor")?;
    tracing::info!(
        max_load_factor = config.max_load_factor(),
        stress_limit = cli.stress_limit,
        seed = cli.seed,
        "starting demonstration"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut small = scenario::small_set(&mut out)?;
    scenario::mixed_case(&mut out)?;
    scenario::cities(&mut small, &mut out)?;

    if cli.skip_stress {
        tracing::info!("stress rounds skipped");
    } else {
        scenario::stress(config, cli.stress_limit, cli.seed, &mut out)?;
    }

    out.flush()?;
    Ok(())
}
