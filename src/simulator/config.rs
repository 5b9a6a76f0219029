//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated play-throughs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum game ticks per run before timeout (60 ticks = 1 second)
    pub max_ticks_per_run: u64,

    /// Stop a run early once the player reaches this level
    pub target_level: u32,

    /// Whether the bot spends wins on pets
    pub buy_pets: bool,

    /// Ticks between bot clicks (human click rate)
    pub click_interval_ticks: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_ticks_per_run: 60 * 60 * 30,
            target_level: 20,
            buy_pets: true,
            click_interval_ticks: 10,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Short runs for a fast early-game check.
    pub fn quick() -> Self {
        Self {
            num_runs: 50,
            max_ticks_per_run: 60 * 60 * 5,
            target_level: 10,
            ..Default::default()
        }
    }

    /// Baseline without pets, to compare against the default.
    pub fn no_pets(num_runs: u32) -> Self {
        Self {
            num_runs,
            buy_pets: false,
            ..Default::default()
        }
    }

    /// Slower clicking, closer to a casual player.
    pub fn casual(num_runs: u32) -> Self {
        Self {
            num_runs,
            click_interval_ticks: 30,
            ..Default::default()
        }
    }
}
