//! Game balance simulator CLI.
//!
//! Runs Monte Carlo play-throughs with a scripted bot to analyze balance.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin simulate                        # 200 runs to level 20
//! cargo run --bin simulate -- -n 100 -l 10        # 100 runs to level 10
//! cargo run --bin simulate -- --seed 42 --json    # Reproducible, save JSON
//! RUST_LOG=debug cargo run --bin simulate -- -n 1 # Watch one run's events
//! ```

use brainrot::build_info::{version_string, BUILD_DATE};
use brainrot::core::constants::TICKS_PER_SECOND;
use brainrot::simulator::{run_simulation, SimConfig};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// 50 short runs to level 10
    Quick,
    /// Never buy pets
    NoPets,
    /// Click three times slower
    Casual,
}

#[derive(Parser)]
#[command(name = "simulate")]
#[command(version, about = "Brainrot Evolution balance simulator")]
struct Args {
    /// Number of simulation runs
    #[arg(long, short = 'n')]
    runs: Option<u32>,

    /// Stop each run at this level
    #[arg(long, short = 'l')]
    level: Option<u32>,

    /// Max seconds of game time per run
    #[arg(long, short = 't')]
    seconds: Option<u64>,

    /// Random seed for reproducibility
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Start from a preset, then apply the other flags
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Show detailed level-up pacing
    #[arg(long)]
    level_curve: bool,

    /// Save a JSON report next to the working directory
    #[arg(long)]
    json: bool,

    /// Print one line per run
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> SimConfig {
        let mut config = match self.preset {
            Some(Preset::Quick) => SimConfig::quick(),
            Some(Preset::NoPets) => SimConfig::no_pets(SimConfig::default().num_runs),
            Some(Preset::Casual) => SimConfig::casual(SimConfig::default().num_runs),
            None => SimConfig::default(),
        };
        if let Some(runs) = self.runs {
            config.num_runs = runs;
        }
        if let Some(level) = self.level {
            config.target_level = level;
        }
        if let Some(seconds) = self.seconds {
            config.max_ticks_per_run = seconds.saturating_mul(TICKS_PER_SECOND as u64);
        }
        config.seed = self.seed;
        if self.verbose {
            config.verbosity = 2;
        }
        config
    }
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let show_level_curve = args.level_curve;
    let save_json = args.json;
    let config = args.into_config();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║           BRAINROT EVOLUTION BALANCE SIMULATOR                ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("  build {} {}", version_string(), BUILD_DATE);
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Target Level:   {}", config.target_level);
    println!("  Max Seconds:    {}", config.max_ticks_per_run / 60);
    println!("  Buy Pets:       {}", config.buy_pets);
    println!("  Click Every:    {} ticks", config.click_interval_ticks);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if show_level_curve {
        println!("{}", report.level_curve_text());
    }

    if save_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
