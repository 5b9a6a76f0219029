//! Game balance simulator for Monte Carlo analysis.
//!
//! Runs many bot-driven play-throughs to analyze:
//! - How long a player survives at each level
//! - Level-up pacing against enemy scaling
//! - How quickly wins turn into pets
//!
//! The bot plays through [`GameSession`](crate::core::session::GameSession),
//! so simulation results match real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
