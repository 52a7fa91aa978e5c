//! evacuation — run one crowd-panic scenario and write its output as CSV.
//!
//! Parameters come from built-in defaults (100 agents in a 10 × 10 arena),
//! optionally overridden by a JSON scenario file and then by CLI flags:
//!
//! ```text
//! evacuation --config scenario.json --agents 300 --ticks 500 --stop-when-evacuated
//! RUST_LOG=debug evacuation --bounded
//! ```
//!
//! A scenario file may set any subset of the fields:
//!
//! ```json
//! { "params": { "population": 250, "resilience": 2 },
//!   "config": { "total_ticks": 400, "seed": 7 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use ps_core::{ModelParams, SimConfig, Tick};
use ps_output::render::{self, PanicClass};
use ps_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ps_sim::{SimBuilder, SimObserver, SimView, TickStats};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "evacuation")]
#[command(about = "Crowd panic and evacuation through a single exit")]
struct Args {
    /// JSON scenario file with optional `params` and `config` sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of agents
    #[arg(long)]
    agents: Option<usize>,

    /// Arena width
    #[arg(long)]
    width: Option<f64>,

    /// Arena height
    #[arg(long)]
    height: Option<f64>,

    /// Smallest friend group
    #[arg(long)]
    min_group: Option<usize>,

    /// Largest friend group
    #[arg(long)]
    max_group: Option<usize>,

    /// Ticks of stranger exposure an agent tolerates before panicking
    #[arg(long)]
    resilience: Option<u32>,

    /// Lower bound of the personal-space radius
    #[arg(long)]
    min_radius: Option<f64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Interval between agent snapshots (in ticks, 0 disables)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Measure neighbor distances without wraparound
    #[arg(long)]
    bounded: bool,

    /// End the run once every agent has left
    #[arg(long)]
    stop_when_evacuated: bool,

    /// Directory for the CSV files
    #[arg(long, default_value = "output/evacuation")]
    output: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Scenario {
    params: ModelParams,
    config: SimConfig,
}

impl Scenario {
    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    fn apply(&mut self, args: &Args) {
        let p = &mut self.params;
        if let Some(v) = args.agents {
            p.population = v;
        }
        if let Some(v) = args.width {
            p.width = v;
        }
        if let Some(v) = args.height {
            p.height = v;
        }
        if let Some(v) = args.min_group {
            p.min_group_size = v;
        }
        if let Some(v) = args.max_group {
            p.max_group_size = v;
        }
        if let Some(v) = args.resilience {
            p.resilience = v;
        }
        if let Some(v) = args.min_radius {
            p.min_radius = v;
        }

        let c = &mut self.config;
        if let Some(v) = args.ticks {
            c.total_ticks = v;
        }
        if let Some(v) = args.seed {
            c.seed = v;
        }
        if let Some(v) = args.snapshot_interval {
            c.snapshot_interval_ticks = v;
        }
        if args.bounded {
            c.torus = false;
        }
        if args.stop_when_evacuated {
            c.stop_when_evacuated = true;
        }
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Forwards to the CSV observer and logs progress every `every` ticks.
struct Progress<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    every:         u64,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> SimObserver for Progress<W> {
    fn on_tick_start(&mut self, tick: Tick, stats: &TickStats) {
        self.summary_rows += 1;
        if tick.is_every(self.every) {
            tracing::info!(
                tick = tick.0,
                live = stats.live_agents,
                mean_panic = stats.mean_panic,
                "progress"
            );
        }
        self.inner.on_tick_start(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, view: &SimView<'_>) {
        self.snapshot_rows += view.agents.count;
        self.inner.on_snapshot(tick, view);
    }

    fn on_tick_end(&mut self, tick: Tick, activated: usize) {
        self.inner.on_tick_end(tick, activated);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    // 1. Resolve parameters: defaults < scenario file < flags.
    let mut scenario = match &args.config {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    scenario.apply(&args);
    let Scenario { params, config } = scenario;

    println!("=== evacuation — crowd panic simulation ===");
    println!(
        "Agents: {}  |  Arena: {} × {}  |  Groups: {}..={}  |  Resilience: {}",
        params.population,
        params.width,
        params.height,
        params.min_group_size,
        params.max_group_size,
        params.resilience,
    );
    println!(
        "Ticks: {}  |  Seed: {}  |  Neighbors: {}",
        config.total_ticks,
        config.seed,
        if config.torus { "wraparound" } else { "bounded" },
    );
    println!();

    // 2. Build the model.
    let total_ticks = config.total_ticks;
    let mut sim = SimBuilder::new(config, params)
        .build()
        .context("building the model")?;
    println!("Friend groups: {}", sim.groups().len());

    // 3. Set up output.
    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let writer = CsvWriter::new(&args.output)?;
    let mut obs = Progress {
        inner:         SimOutputObserver::new(writer),
        every:         (total_ticks / 10).max(1),
        snapshot_rows: 0,
        summary_rows:  0,
    };

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let population = sim.agents().count;
    let evacuated = population - sim.live_count();
    let panicked = sim.agents().panic.iter().filter(|&&p| p).count();

    println!("Simulation complete in {:.3} s ({} ticks)", elapsed.as_secs_f64(), sim.current_tick().0);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();
    println!("Evacuated: {evacuated} / {population}");
    println!("Panicked:  {panicked} / {population}");

    let discs = render::discs(&sim.view());
    let red = discs.iter().filter(|d| d.class == PanicClass::Panicked).count();
    println!("Still inside: {} ({} red, {} skyblue)", discs.len(), red, discs.len() - red);
    println!();

    // 6. Panic curve, sampled.
    println!("{:<8} {:<8} {:<10}", "Tick", "Live", "MeanPanic");
    println!("{}", "-".repeat(28));
    let history = sim.history();
    let stride = (history.len() / 10).max(1);
    for s in history.iter().step_by(stride) {
        println!("{:<8} {:<8} {:<10.3}", s.tick.0, s.live_agents, s.mean_panic);
    }

    Ok(())
}
