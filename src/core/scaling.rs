//! Level-driven scaling formulas for enemies, bosses, spawn cadence and XP.
//!
//! Everything here is a pure function of the level (plus an injected RNG for
//! the boss multiplier draws), so the session, the simulator and the tests all
//! see identical numbers.

use super::constants::*;
use rand::Rng;
use serde::Serialize;

/// Stat ranges for a normal enemy at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnemyStats {
    pub health: u32,
    pub min_speed: u32,
    pub max_speed: u32,
    pub min_damage: u32,
    pub max_damage: u32,
}

/// Stat ranges for a boss, derived from [`EnemyStats`] with two random multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BossStats {
    pub health: f64,
    pub min_speed: u32,
    pub max_speed: u32,
    pub min_damage: f64,
    pub max_damage: f64,
    pub health_multiplier: f64,
    pub damage_multiplier: f64,
}

/// Inclusive multiplier ranges used when rolling a boss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossMultipliers {
    pub health_min: f64,
    pub health_max: f64,
    pub damage_min: f64,
    pub damage_max: f64,
}

impl Default for BossMultipliers {
    fn default() -> Self {
        Self {
            health_min: BOSS_HEALTH_MULTIPLIER_MIN,
            health_max: BOSS_HEALTH_MULTIPLIER_MAX,
            damage_min: BOSS_DAMAGE_MULTIPLIER_MIN,
            damage_max: BOSS_DAMAGE_MULTIPLIER_MAX,
        }
    }
}

/// Linear enemy scaling.
///
/// Health grows by 10 and damage by 5 per level above 1. Speed gains
/// `level / 2` but never more than +2.
pub fn enemy_stats_for_level(level: u32) -> EnemyStats {
    let steps = level.saturating_sub(1);
    let health_bonus = steps * ENEMY_HEALTH_PER_LEVEL;
    let damage_bonus = steps * ENEMY_DAMAGE_PER_LEVEL;
    let speed_bonus = speed_bonus_for_level(level);

    EnemyStats {
        health: ENEMY_HEALTH + health_bonus,
        min_speed: ENEMY_MIN_SPEED + speed_bonus,
        max_speed: ENEMY_MAX_SPEED + speed_bonus,
        min_damage: ENEMY_MIN_DAMAGE + damage_bonus,
        max_damage: ENEMY_MAX_DAMAGE + damage_bonus,
    }
}

/// Speed bonus component of [`enemy_stats_for_level`].
pub fn speed_bonus_for_level(level: u32) -> u32 {
    (level / 2).min(ENEMY_SPEED_BONUS_CAP)
}

/// Boss stat ranges using the default multiplier ranges.
pub fn boss_stats_for_level(level: u32, rng: &mut impl Rng) -> BossStats {
    boss_stats_for_level_with(level, &BossMultipliers::default(), rng)
}

/// Boss stat ranges for a level.
///
/// Health and the damage bounds are scaled by two independent uniform draws;
/// speed passes through unchanged.
pub fn boss_stats_for_level_with(
    level: u32,
    multipliers: &BossMultipliers,
    rng: &mut impl Rng,
) -> BossStats {
    let base = enemy_stats_for_level(level);
    let health_multiplier = roll_multiplier(multipliers.health_min, multipliers.health_max, rng);
    let damage_multiplier = roll_multiplier(multipliers.damage_min, multipliers.damage_max, rng);

    BossStats {
        health: base.health as f64 * health_multiplier,
        min_speed: base.min_speed,
        max_speed: base.max_speed,
        min_damage: base.min_damage as f64 * damage_multiplier,
        max_damage: base.max_damage as f64 * damage_multiplier,
        health_multiplier,
        damage_multiplier,
    }
}

fn roll_multiplier(min: f64, max: f64, rng: &mut impl Rng) -> f64 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Frames between automatic enemy spawns.
pub fn spawn_interval_for_level(level: u32) -> u32 {
    if level >= SPAWN_FAST_LEVEL {
        ENEMY_SPAWN_FRAMES_FAST
    } else if level >= SPAWN_MEDIUM_LEVEL {
        ENEMY_SPAWN_FRAMES_MEDIUM
    } else {
        ENEMY_SPAWN_FRAMES
    }
}

/// XP needed to advance from `level` to `level + 1`: 5 × 2^(level-1).
pub fn experience_needed_for_level(level: u32) -> f64 {
    START_EXP_TO_LEVEL * EXP_MULTIPLIER.powf(level.saturating_sub(1) as f64)
}
