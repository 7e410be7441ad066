//! Flock Sim - headless host
//!
//! Loads settings, runs the flock at a fixed timestep and reports tick latency.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use flock_sim::{Settings, SettingsError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless CPU boids simulation", long_about = None)]
struct Args {
    /// Settings file (JSON). Defaults are used if it does not exist.
    #[arg(short, long, default_value = "flock.json")]
    config: PathBuf,

    /// Override the number of boids
    #[arg(short, long)]
    boids: Option<usize>,

    /// Override the RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the fixed timestep (seconds)
    #[arg(long)]
    dt: Option<f32>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Write the final snapshot as JSON
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Save the effective settings back to the config path
    #[arg(long)]
    write_config: bool,
}

/// Ticks per report window when simulated time alone would never fill one
const MAX_WINDOW_TICKS: usize = 1000;

/// Per-frame tick timings, summarized once per simulated second or full window
struct TickTimer {
    frames: Vec<Duration>,
    total: Duration,
    worst: Duration,
    count: u64,
}

impl TickTimer {
    fn new() -> Self {
        Self {
            frames: Vec::new(),
            total: Duration::ZERO,
            worst: Duration::ZERO,
            count: 0,
        }
    }

    fn record(&mut self, elapsed: Duration) {
        self.frames.push(elapsed);
        self.total += elapsed;
        self.worst = self.worst.max(elapsed);
        self.count += 1;
    }

    fn window_full(&self) -> bool {
        self.frames.len() >= MAX_WINDOW_TICKS
    }

    /// Log and reset the current window
    fn flush(&mut self, sim_time: f32) {
        if self.frames.is_empty() {
            return;
        }
        let window: Duration = self.frames.iter().sum();
        let avg_ms = window.as_secs_f64() * 1000.0 / self.frames.len() as f64;
        log::info!(
            "t={:.1}s: {} ticks, avg {:.3} ms/tick",
            sim_time,
            self.frames.len(),
            avg_ms
        );
        self.frames.clear();
    }

    fn average_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total.as_secs_f64() * 1000.0 / self.count as f64
        }
    }
}

fn run(args: Args) -> Result<(), SettingsError> {
    let mut settings = Settings::load_or_default(&args.config)?;
    if let Some(boids) = args.boids {
        settings.boid_count = boids;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(dt) = args.dt {
        settings.dt = dt;
    }
    if settings.dt <= 0.0 {
        log::warn!(
            "Non-positive dt {}: reporting every {} ticks",
            settings.dt,
            MAX_WINDOW_TICKS
        );
    }
    if args.write_config {
        settings.save(&args.config)?;
    }

    let mut state = settings.start();
    if state.is_empty() {
        log::warn!("No boids to simulate");
        return Ok(());
    }

    let mut timer = TickTimer::new();
    let mut sim_time = 0.0f32;
    let mut since_report = 0.0f32;
    for _ in 0..args.ticks {
        let start = Instant::now();
        state.tick(settings.dt);
        timer.record(start.elapsed());

        sim_time += settings.dt;
        since_report += settings.dt;
        if since_report >= 1.0 || timer.window_full() {
            timer.flush(sim_time);
            since_report = 0.0;
        }
    }
    timer.flush(sim_time);

    log::info!(
        "Finished {} ticks of {} boids: avg {:.3} ms/tick, worst {:.3} ms",
        state.tick_count(),
        state.len(),
        timer.average_ms(),
        timer.worst.as_secs_f64() * 1000.0
    );

    if let Some(path) = args.dump {
        let snapshot = state.snapshot();
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&path, json).map_err(|source| SettingsError::Dump {
            path: path.clone(),
            source,
        })?;
        log::info!("Snapshot written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flock Sim starting...");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
