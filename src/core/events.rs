//! Events produced by a tick or a click, and the bounded log that mirrors them.
//!
//! Events carry structured data for the presentation layer (which is also
//! responsible for particles, sounds and messages). The [`EventLog`] keeps
//! the last few as text for an on-screen feed.

use super::constants::EVENT_LOG_CAPACITY;
use glam::Vec2;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // ── Spawning ────────────────────────────────────────────────
    EnemySpawned { name: String },
    BossSpawned { health: f64 },
    GoldenAppleSpawned,
    ShieldFruitSpawned,

    // ── Combat ──────────────────────────────────────────────────
    /// An enemy attack landed on the player.
    EnemyAttack { enemy_name: String, damage: u32 },
    /// An enemy attack fired but the shield absorbed it.
    ShieldBlocked { enemy_name: String },
    EnemyHit {
        enemy_name: String,
        damage: f64,
        remaining_health: f64,
    },
    EnemyDefeated {
        enemy_name: String,
        was_boss: bool,
        experience: f64,
    },
    /// Cosmetic explosion at a defeated enemy's position.
    Explosion { position: Vec2 },
    TargetOutOfRange,
    PlayerDied { level: u32, wins: u32 },

    // ── Progression ─────────────────────────────────────────────
    LeveledUp { new_level: u32 },
    Evolved { new_level: u32, name: String },
    AppleCollected { experience: f64 },
    ShieldActivated { seconds: f64 },
    PetPurchased { name: String, cost: u32 },
    PetEquipped { slot: usize, name: Option<String> },
}

impl GameEvent {
    /// One-line text for the event feed. `None` for purely cosmetic events.
    pub fn message(&self) -> Option<String> {
        let text = match self {
            GameEvent::EnemySpawned { name } => format!("{} appeared", name),
            GameEvent::BossSpawned { health } => {
                format!("The Meme King has arrived with {:.0} HP!", health)
            }
            GameEvent::GoldenAppleSpawned => "A golden apple appeared".to_string(),
            GameEvent::ShieldFruitSpawned => "A shield fruit appeared".to_string(),
            GameEvent::EnemyAttack { enemy_name, damage } => {
                format!("{} attacked for {} damage!", enemy_name, damage)
            }
            GameEvent::ShieldBlocked { enemy_name } => {
                format!("Shield blocked {}'s attack", enemy_name)
            }
            GameEvent::EnemyHit {
                enemy_name,
                damage,
                remaining_health,
            } => format!(
                "Hit {} for {} damage! Enemy health: {}",
                enemy_name, damage, remaining_health
            ),
            GameEvent::EnemyDefeated { enemy_name, .. } => format!("Defeated {}!", enemy_name),
            GameEvent::Explosion { .. } => return None,
            GameEvent::TargetOutOfRange => "Too far away!".to_string(),
            GameEvent::PlayerDied { level, wins } => {
                format!("You died at level {} with {} wins", level, wins)
            }
            GameEvent::LeveledUp { new_level } => format!("Level up! Now level {}", new_level),
            GameEvent::Evolved { name, .. } => format!("Evolved into {}!", name),
            GameEvent::AppleCollected { experience } => {
                format!("Golden apple! +{} XP", experience)
            }
            GameEvent::ShieldActivated { seconds } => {
                format!("Shield active for {:.0} seconds", seconds)
            }
            GameEvent::PetPurchased { name, cost } => {
                format!("Bought {} for {} wins", name, cost)
            }
            GameEvent::PetEquipped { slot, name } => match name {
                Some(name) => format!("{} equipped in slot {}", name, slot + 1),
                None => format!("Slot {} cleared", slot + 1),
            },
        };
        Some(text)
    }
}

/// Last [`EVENT_LOG_CAPACITY`] event messages, oldest first.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: VecDeque<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: String) {
        if self.entries.len() >= EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    pub fn record(&mut self, event: &GameEvent) {
        if let Some(message) = event.message() {
            self.push(message);
        }
    }

    pub fn record_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
