//! Core game state and logic.

pub mod clock;
pub mod color;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod scaling;
pub mod session;

pub use clock::{Clock, FixedStepClock, MonotonicClock};
pub use events::{EventLog, GameEvent};
pub use scaling::*;
pub use session::{ClickResult, GameSession, SessionState, SessionStats};
