//! dispatch — match drivers to nearby packages and check the grid matcher
//! against the brute-force oracle.
//!
//! By default generates 2 000 drivers and 5 000 packages with integer
//! coordinates on a 1 000 × 1 000 square (seed 42), matches everything
//! closer than 50 units both ways, times each, and fails if the two match
//! sets differ.  Real fixtures can be supplied as CSV instead.
//!
//! ```text
//! cargo run --release -p dispatch -- --agents 20000 --targets 50000
//! cargo run --release -p dispatch -- --agents-csv a.csv --targets-csv t.csv --output m.csv
//! RUST_LOG=debug cargo run -p dispatch -- --clustered --targets 2000
//! ```

mod timing;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pm_core::{FixtureRng, MatchConfig, Point, Scenario, ScenarioSpec, generate_scenario};
use pm_io::{CsvMatchWriter, MatchWriter};
use pm_match::{ProximityMatcher, brute_force_matches, compare_matches};

use timing::PhaseTimer;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "dispatch", about = "Driver/package proximity matching benchmark")]
struct Args {
    /// Generated driver count (ignored with --agents-csv).
    #[arg(long, default_value_t = 2_000)]
    agents: usize,

    /// Generated package count (ignored with --targets-csv).
    #[arg(long, default_value_t = 5_000)]
    targets: usize,

    /// Generated coordinates are integers in 0..=extent.
    #[arg(long, default_value_t = 1_000)]
    extent: u32,

    /// Put every generated package on the centre point.
    #[arg(long)]
    clustered: bool,

    /// Fixture RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Match threshold (exclusive).
    #[arg(long, default_value_t = 50.0)]
    max_distance: f64,

    /// Grid cell size; defaults to --max-distance.
    #[arg(long)]
    cell_size: Option<f64>,

    /// Rayon worker threads; defaults to all logical cores.
    #[arg(long)]
    threads: Option<usize>,

    /// Load drivers from CSV (`id,x,y`).
    #[arg(long, requires = "targets_csv")]
    agents_csv: Option<PathBuf>,

    /// Load packages from CSV (`id,x,y,priority`).
    #[arg(long, requires = "agents_csv")]
    targets_csv: Option<PathBuf>,

    /// Write the generated scenario as agents.csv / targets.csv here.
    #[arg(long)]
    export_fixtures: Option<PathBuf>,

    /// Write grid matches to this CSV file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip the O(N·M) oracle run.
    #[arg(long)]
    skip_oracle: bool,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_scenario(args: &Args) -> Result<Scenario> {
    if let (Some(a), Some(t)) = (&args.agents_csv, &args.targets_csv) {
        let agents = pm_io::load_agents_csv(a)
            .with_context(|| format!("loading agents from {}", a.display()))?;
        let targets = pm_io::load_targets_csv(t)
            .with_context(|| format!("loading targets from {}", t.display()))?;
        return Ok(Scenario { agents, targets });
    }

    let mut spec = ScenarioSpec::uniform(args.agents, args.targets, args.extent);
    if args.clustered {
        let mid = args.extent as f64 / 2.0;
        spec = spec.clustered(Point::new(mid, mid));
    }
    Ok(generate_scenario(&spec, &mut FixtureRng::new(args.seed)))
}

fn match_config(args: &Args) -> MatchConfig {
    let mut config = MatchConfig::new(args.max_distance);
    if let Some(s) = args.cell_size {
        config = config.with_cell_size(s);
    }
    if let Some(n) = args.threads {
        config = config.with_threads(n);
    }
    config
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // 1. Inputs and configuration.  Both fail before any matching runs.
    let scenario = load_scenario(&args)?;
    let matcher = ProximityMatcher::new(match_config(&args))?;
    info!(
        agents = scenario.agents.len(),
        targets = scenario.targets.len(),
        max_distance = args.max_distance,
        cell_size = matcher.config().effective_cell_size(),
        "scenario ready"
    );

    if let Some(dir) = &args.export_fixtures {
        std::fs::create_dir_all(dir)?;
        pm_io::write_agents_csv(&dir.join("agents.csv"), &scenario.agents)?;
        pm_io::write_targets_csv(&dir.join("targets.csv"), &scenario.targets)?;
        info!(dir = %dir.display(), "fixtures exported");
    }

    // 2. Brute-force reference.
    let oracle = if args.skip_oracle {
        None
    } else {
        let t0 = Instant::now();
        let m = brute_force_matches(&scenario.agents, &scenario.targets, args.max_distance)?;
        let elapsed = t0.elapsed();
        println!("Brute force : {:>9} matches in {:.4} s", m.len(), elapsed.as_secs_f64());
        Some(m)
    };

    // 3. Grid pipeline.
    let mut timer = PhaseTimer::start();
    let grid = matcher.find_matches_with(&scenario.agents, &scenario.targets, &mut timer)?;
    let elapsed = timer.elapsed();
    println!("Grid        : {:>9} matches in {:.4} s", grid.len(), elapsed.as_secs_f64());

    if let (Some(index), Some(stats)) = (timer.index, timer.stats) {
        println!(
            "  index {:.4} s | {} cells | {:.2} targets/cell (max {})",
            index.as_secs_f64(),
            stats.cells,
            stats.mean_bucket,
            stats.max_bucket
        );
    }
    if let Some((agent, n)) = timer.busiest {
        println!("  busiest driver {agent}: {n} packages | {} drivers unmatched", timer.unmatched);
    }

    // 4. Equivalence.
    if let Some(oracle) = &oracle {
        let cmp = compare_matches(oracle, &grid);
        if !cmp.is_equivalent() {
            bail!("grid matcher disagrees with brute force: {cmp}");
        }
        println!();
        println!("Both methods found the same {} matches.", grid.len());
    }

    // 5. Output.
    if let Some(path) = &args.output {
        let mut writer = CsvMatchWriter::new(path)
            .with_context(|| format!("creating {}", path.display()))?;
        writer.write_matches(&grid)?;
        writer.finish()?;
        info!(path = %path.display(), rows = grid.len(), "matches written");
    }

    Ok(())
}
