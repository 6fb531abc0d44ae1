use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use sensor_tint_core::{
    AppConfig, SampleClock, SampleTrace, SensorKind, SensorSample, TintEngine, UpdatePacer,
};
use tracing_subscriber::EnvFilter;

fn main() -> sensor_tint_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::demo_defaults(),
    };

    match cli.command {
        Commands::Live => run_live(config),
        Commands::Replay { input } => run_replay(config, &input),
    }
}

fn run_live(config: AppConfig) -> sensor_tint_core::Result<()> {
    tracing::info!("starting live mode, reading sample lines from stdin");

    let engine = TintEngine::new(config.mapping, config.sensors);
    for kind in engine.missing_sensors() {
        // Stands in for the on-screen notice; readings for the kind are
        // dropped rather than treated as errors.
        tracing::warn!(sensor = %kind, "sensor not found, its readings will be ignored");
    }

    let handle = engine.start()?;
    let mut pacer = UpdatePacer::from_config(&config.pacing);
    let mut clock = SampleClock::default();
    let mut last_tick = Instant::now();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        clock.advance(last_tick.elapsed().as_secs_f32());
        last_tick = Instant::now();

        if line == "reset" {
            engine.reset()?;
            print_board(&handle)?;
            continue;
        }

        let sample: SensorSample = match line.parse() {
            Ok(sample) => sample,
            Err(error) => {
                tracing::warn!(%error, "skipping sample line");
                continue;
            }
        };

        if !engine.accepts(sample.kind()) {
            tracing::debug!(sensor = %sample.kind(), "dropping reading for absent sensor");
            continue;
        }
        if sample.kind() == SensorKind::Accelerometer && !pacer.admit(clock.time_seconds) {
            continue;
        }

        engine.push_sample(&sample)?;
        print_board(&handle)?;
    }

    Ok(())
}

fn run_replay(config: AppConfig, input: &PathBuf) -> sensor_tint_core::Result<()> {
    tracing::info!(?input, "replaying recorded sample trace");

    let trace = SampleTrace::load(input)?;
    let outcome = trace.replay(&config.mapping, &config.pacing);

    for step in &outcome.steps {
        println!("{:>8.3}s  {}", step.time_seconds, step.color);
    }
    if outcome.paced_out > 0 {
        tracing::info!(
            dropped = outcome.paced_out,
            "acceleration samples fell inside the pacing window"
        );
    }
    for line in outcome.board.lines() {
        println!("{line}");
    }

    Ok(())
}

fn print_board(handle: &sensor_tint_core::TintHandle) -> sensor_tint_core::Result<()> {
    for line in handle.board()?.lines() {
        println!("{line}");
    }
    println!();
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Sensor-driven background tint demo", long_about = None)]
struct Cli {
    /// Optional JSON configuration file overriding the demo defaults.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fold sensor samples read line-by-line from standard input.
    ///
    /// Lines are `acc X Y Z`, `light LUX`, `prox CM` or `reset`.
    Live,
    /// Fold a recorded JSON sample trace deterministically.
    Replay {
        /// Path to the JSON trace file to replay.
        input: PathBuf,
    },
}
