// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Motif search CLI.
//!
//! ```bash
//! # Count triangles within the motif window on 16 lanes
//! motif graph.txt triangle.txt --lanes 16
//!
//! # Dynamic schedule, JSON report
//! motif graph.txt triangle.txt --schedule dynamic --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use motif_search::config::SchedulePolicy;
use motif_search::io::{load_config, load_graph, load_motif, write_results};
use motif_search::sim::Orchestrator;
use motif_search::SimConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "motif")]
#[command(about = "Temporal motif search on a simulated accelerator", long_about = None)]
#[command(version)]
struct Cli {
    /// Graph edge file (`u v time` per line)
    graph: PathBuf,

    /// Motif edge file, same format
    motif: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of lanes
    #[arg(short, long)]
    lanes: Option<usize>,

    /// Root task schedule
    #[arg(short, long, value_enum)]
    schedule: Option<SchedulePolicy>,

    /// Disable phase-one memoization
    #[arg(long)]
    no_memo: bool,

    /// Run lanes one after another on the main thread
    #[arg(long)]
    sequential: bool,

    /// Print every occurrence found
    #[arg(long)]
    print_results: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "motif_search=debug"
    } else {
        "motif_search=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(lanes) = cli.lanes {
        config.lanes = lanes;
    }
    if let Some(schedule) = cli.schedule {
        config.schedule = schedule;
    }
    if cli.no_memo {
        config.memo.enabled = false;
    }
    if cli.sequential {
        config.parallel = false;
    }

    let graph = load_graph(&cli.graph).with_context(|| format!("loading {}", cli.graph.display()))?;
    let motif = load_motif(&cli.motif, config.max_motif_len)
        .with_context(|| format!("loading {}", cli.motif.display()))?;

    let orchestrator = Orchestrator::new(config, graph, motif.edges().to_vec())?;
    let outcome = orchestrator.run()?;

    if cli.print_results {
        write_results(&mut std::io::stdout().lock(), &outcome.results)?;
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        println!("Total cycles:      {}", outcome.report.total_cycles);
        println!("End-to-end cycles: {}", outcome.report.end_to_end_cycles);
        println!("Results:           {}", outcome.report.result_count);
    }
    Ok(())
}
