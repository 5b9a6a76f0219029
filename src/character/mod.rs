//! Player progression: evolution table, stat model and the player itself.

pub mod evolution;
pub mod player;
pub mod stats;

pub use evolution::{evolution_for_level, EvolutionEntry, EvolutionTable, EvolutionTableError};
pub use player::{LevelUp, Player};
pub use stats::{BaseStats, BoostTotals, EffectiveStats};
