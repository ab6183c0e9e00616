//! CROSSOVER CLI - balanced team assignment for crossover experiments
//!
//! Produces one balanced mapping of teams to ordered condition sequences
//! per invocation:
//!
//!     crossover --teams 6 --conditions Control HPM AIPM --seed 0

use anyhow::Context;
use clap::Parser;

use crossover_core::DesignConfig;

#[derive(Parser)]
#[command(name = "crossover")]
#[command(about = "Assign teams to condition sequences using a Latin-square design")]
struct Cli {
    /// Total number of teams
    #[arg(long)]
    teams: usize,

    /// Condition names in position order (e.g. Control HPM AIPM)
    #[arg(long, num_args = 1.., required = true)]
    conditions: Vec<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Output the assignment as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = DesignConfig::new(cli.teams, cli.conditions);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    tracing::debug!(
        teams = config.num_teams,
        conditions = ?config.conditions,
        seed = ?config.seed,
        "resolved configuration"
    );

    let assignment = config
        .run()
        .context("could not build a balanced assignment")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assignment)?);
    } else {
        for (team, sequence) in assignment.sorted_entries() {
            println!("{}: {}", team, sequence.join(", "));
        }
    }

    Ok(())
}
