//! Enemies, collectibles and click resolution.

pub mod collectibles;
pub mod encounter;
pub mod enemy;

pub use collectibles::{GoldenApple, ShieldFruit};
pub use encounter::{resolve_click, ClickOutcome, Field};
pub use enemy::{Appearance, Enemy, EnemyKind};
