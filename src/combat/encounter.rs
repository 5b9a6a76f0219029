//! Player clicks against enemies and collectibles.
//!
//! One click affects at most one target: enemies are hit-tested first, then
//! golden apples, then shield fruits, each in spawn order. The first target
//! under the cursor is the only candidate, even when it turns out to be out
//! of reach.

use super::collectibles::{GoldenApple, ShieldFruit};
use super::enemy::Enemy;
use crate::character::player::{LevelUp, Player};
use crate::core::constants::EXP_PER_ENEMY_KILL;
use crate::core::geometry::{distance, Rect};
use glam::Vec2;
use log::debug;
use std::time::Duration;

/// Everything a click can land on, plus the static obstacles.
#[derive(Debug, Clone, Default)]
pub struct Field {
    pub enemies: Vec<Enemy>,
    pub apples: Vec<GoldenApple>,
    pub fruits: Vec<ShieldFruit>,
    pub obstacles: Vec<Rect>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_obstacles(obstacles: Vec<Rect>) -> Self {
        Self {
            obstacles,
            ..Self::default()
        }
    }

    pub fn boss_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_boss()).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Nothing under the cursor.
    Missed,
    /// First target under the cursor is beyond the player's reach.
    OutOfRange,
    EnemyHit {
        name: String,
        damage: f64,
        remaining_health: f64,
    },
    EnemyDefeated {
        name: String,
        position: Vec2,
        was_boss: bool,
        experience: f64,
        level_ups: Vec<LevelUp>,
    },
    AppleCollected {
        experience: f64,
        level_ups: Vec<LevelUp>,
    },
    ShieldCollected {
        duration_seconds: f64,
    },
}

impl ClickOutcome {
    pub fn level_ups(&self) -> &[LevelUp] {
        match self {
            ClickOutcome::EnemyDefeated { level_ups, .. }
            | ClickOutcome::AppleCollected { level_ups, .. } => level_ups,
            _ => &[],
        }
    }
}

/// Reach check: center distance within attack range plus half the target width.
pub fn within_reach(player: &Player, target: &Rect) -> bool {
    let gap = distance(player.center(), target.center()) as f64;
    gap <= player.attack_range() + target.width as f64 / 2.0
}

/// Applies a click at `position` to the first target under it.
pub fn resolve_click(
    player: &mut Player,
    field: &mut Field,
    position: Vec2,
    now: Duration,
) -> ClickOutcome {
    if let Some(index) = field
        .enemies
        .iter()
        .position(|e| e.rect().contains_point(position))
    {
        if !within_reach(player, field.enemies[index].rect()) {
            return ClickOutcome::OutOfRange;
        }
        return strike_enemy(player, field, index);
    }

    if let Some(index) = field
        .apples
        .iter()
        .position(|a| a.rect.contains_point(position))
    {
        if !within_reach(player, &field.apples[index].rect) {
            return ClickOutcome::OutOfRange;
        }
        let apple = field.apples.remove(index);
        let level_ups = player.gain_experience(apple.exp_value);
        debug!("golden apple collected for {} xp", apple.exp_value);
        return ClickOutcome::AppleCollected {
            experience: apple.exp_value,
            level_ups,
        };
    }

    if let Some(index) = field
        .fruits
        .iter()
        .position(|f| f.rect.contains_point(position))
    {
        if !within_reach(player, &field.fruits[index].rect) {
            return ClickOutcome::OutOfRange;
        }
        let fruit = field.fruits.remove(index);
        player.activate_shield(fruit.duration_seconds, now);
        return ClickOutcome::ShieldCollected {
            duration_seconds: fruit.duration_seconds,
        };
    }

    ClickOutcome::Missed
}

fn strike_enemy(player: &mut Player, field: &mut Field, index: usize) -> ClickOutcome {
    let damage = player.damage();
    let enemy = &mut field.enemies[index];

    if !enemy.take_damage(damage) {
        return ClickOutcome::EnemyHit {
            name: enemy.name().to_string(),
            damage,
            remaining_health: enemy.health(),
        };
    }

    let enemy = field.enemies.remove(index);
    let level_ups = player.gain_experience(EXP_PER_ENEMY_KILL);
    player.add_win();
    debug!(
        "defeated {} with {} damage, wins now {}",
        enemy.name(),
        damage,
        player.wins()
    );

    ClickOutcome::EnemyDefeated {
        name: enemy.name().to_string(),
        position: enemy.center(),
        was_boss: enemy.is_boss(),
        experience: EXP_PER_ENEMY_KILL,
        level_ups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::enemy::EnemyKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const T0: Duration = Duration::ZERO;

    fn enemy_near(player: &Player, offset: Vec2) -> Enemy {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let top_left = player.center() + offset - Vec2::splat(20.0);
        Enemy::at(EnemyKind::Normal, 1, top_left, &mut rng)
    }

    #[test]
    fn test_click_on_nothing_misses() {
        let mut player = Player::new();
        let mut field = Field::new();
        let outcome = resolve_click(&mut player, &mut field, Vec2::new(10.0, 10.0), T0);
        assert_eq!(outcome, ClickOutcome::Missed);
    }

    #[test]
    fn test_hit_reduces_enemy_health() {
        let mut player = Player::new();
        let mut field = Field::new();
        field.enemies.push(enemy_near(&player, Vec2::new(50.0, 0.0)));
        let click = field.enemies[0].center();

        let outcome = resolve_click(&mut player, &mut field, click, T0);
        assert!(matches!(
            outcome,
            ClickOutcome::EnemyHit { remaining_health, .. } if remaining_health == 4.0
        ));
        assert_eq!(field.enemies.len(), 1);
        assert_eq!(player.wins(), 0);
    }

    #[test]
    fn test_kill_grants_xp_and_win() {
        let mut player = Player::new();
        let mut field = Field::new();
        field.enemies.push(enemy_near(&player, Vec2::new(50.0, 0.0)));
        let click = field.enemies[0].center();

        for _ in 0..4 {
            resolve_click(&mut player, &mut field, click, T0);
        }
        let outcome = resolve_click(&mut player, &mut field, click, T0);
        assert!(matches!(outcome, ClickOutcome::EnemyDefeated { was_boss: false, .. }));
        assert!(field.enemies.is_empty());
        assert_eq!(player.wins(), 1);
        assert!((player.experience() - EXP_PER_ENEMY_KILL).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_enemy_untouched() {
        let mut player = Player::new();
        let mut field = Field::new();
        // 80 range + 20 half-width = 100
        field.enemies.push(enemy_near(&player, Vec2::new(101.0, 0.0)));
        let click = field.enemies[0].center();

        let outcome = resolve_click(&mut player, &mut field, click, T0);
        assert_eq!(outcome, ClickOutcome::OutOfRange);
        assert_eq!(field.enemies[0].health(), 5.0);
    }

    #[test]
    fn test_reach_boundary_is_inclusive() {
        let player = Player::new();
        let enemy = enemy_near(&player, Vec2::new(100.0, 0.0));
        assert!(within_reach(&player, enemy.rect()));
    }

    #[test]
    fn test_only_first_overlapping_enemy_reacts() {
        let mut player = Player::new();
        let mut field = Field::new();
        field.enemies.push(enemy_near(&player, Vec2::new(40.0, 0.0)));
        field.enemies.push(enemy_near(&player, Vec2::new(40.0, 0.0)));
        let click = field.enemies[0].center();

        resolve_click(&mut player, &mut field, click, T0);
        assert_eq!(field.enemies[0].health(), 4.0);
        assert_eq!(field.enemies[1].health(), 5.0);
    }

    #[test]
    fn test_enemy_shadows_apple() {
        let mut player = Player::new();
        let mut field = Field::new();
        field.enemies.push(enemy_near(&player, Vec2::new(40.0, 0.0)));
        let click = field.enemies[0].center();
        field.apples.push(GoldenApple::at(click - Vec2::splat(15.0)));

        resolve_click(&mut player, &mut field, click, T0);
        assert_eq!(field.apples.len(), 1);
        assert_eq!(player.experience(), 0.0);
    }

    #[test]
    fn test_apple_grants_xp() {
        let mut player = Player::new();
        let mut field = Field::new();
        let spot = player.center() + Vec2::new(30.0, 30.0);
        field.apples.push(GoldenApple::at(spot));

        let outcome = resolve_click(&mut player, &mut field, spot + Vec2::splat(5.0), T0);
        assert_eq!(outcome.level_ups().len(), 1);
        assert!(field.apples.is_empty());
        assert_eq!(player.level(), 2);
    }

    #[test]
    fn test_shield_fruit_activates_shield() {
        let mut player = Player::new();
        let mut field = Field::new();
        let spot = player.center() + Vec2::new(-40.0, 10.0);
        field.fruits.push(ShieldFruit::at(spot));

        let now = Duration::from_secs(3);
        let outcome = resolve_click(&mut player, &mut field, spot + Vec2::splat(1.0), now);
        assert_eq!(outcome, ClickOutcome::ShieldCollected { duration_seconds: 10.0 });
        assert!(field.fruits.is_empty());
        assert_eq!(player.shield_time_remaining(now), Duration::from_secs(10));
    }

    #[test]
    fn test_boss_kill_reports_boss() {
        let mut player = Player::new();
        let mut field = Field::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let top_left = player.center() + Vec2::new(20.0, -40.0);
        field.enemies.push(Enemy::at(EnemyKind::Boss, 1, top_left, &mut rng));
        let click = field.enemies[0].center();

        let mut last = ClickOutcome::Missed;
        while !field.enemies.is_empty() {
            last = resolve_click(&mut player, &mut field, click, T0);
        }
        assert!(matches!(last, ClickOutcome::EnemyDefeated { was_boss: true, .. }));
        assert_eq!(field.boss_count(), 0);
    }
}
