//! Enemies and the boss variant.
//!
//! A boss is an [`Enemy`] whose [`EnemyKind`] selected the boss stat roll and
//! the fixed royal appearance at construction. After that both behave the same.

use crate::character::player::Player;
use crate::core::color::Rgb;
use crate::core::constants::*;
use crate::core::geometry::{clamp_value, distance, health_percentage, normalize, Rect};
use crate::core::scaling::{boss_stats_for_level, enemy_stats_for_level};
use glam::Vec2;
use log::trace;
use rand::Rng;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnemyKind {
    Normal,
    Boss,
}

impl EnemyKind {
    pub fn size(&self) -> f32 {
        match self {
            EnemyKind::Normal => ENEMY_SIZE,
            EnemyKind::Boss => BOSS_SIZE,
        }
    }
}

pub const ENEMY_HEADS: [(&str, Rgb); 5] = [
    ("Frog", Rgb(0, 255, 0)),
    ("Cat", Rgb(255, 255, 0)),
    ("Rhino", Rgb(128, 128, 128)),
    ("Duck", Rgb(0, 0, 255)),
    ("Robot", Rgb(0, 255, 255)),
];

pub const ENEMY_BODIES: [(&str, Rgb); 5] = [
    ("Tire", Rgb(255, 0, 0)),
    ("Box", Rgb(139, 69, 19)),
    ("Ball", Rgb(128, 0, 128)),
    ("Shoe", Rgb(0, 0, 0)),
    ("Pizza", Rgb(255, 165, 0)),
];

pub const ENEMY_ACCESSORIES: [(&str, Rgb); 4] = [
    ("Hat", Rgb(255, 0, 255)),
    ("Sword", Rgb(192, 192, 192)),
    ("Cape", Rgb(0, 0, 255)),
    ("Glasses", Rgb(0, 0, 0)),
];

pub const BOSS_NAME: &str = "The Meme King";

/// Cosmetic identity. Has no effect on stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appearance {
    pub head: &'static str,
    pub head_color: Rgb,
    pub body: &'static str,
    pub body_color: Rgb,
    pub accessory: &'static str,
    pub accessory_color: Rgb,
    pub name: String,
}

impl Appearance {
    /// Random head, body and accessory, named `"{head}-{body}-{accessory}"`.
    pub fn random(rng: &mut impl Rng) -> Self {
        let (head, head_color) = ENEMY_HEADS[rng.gen_range(0..ENEMY_HEADS.len())];
        let (body, body_color) = ENEMY_BODIES[rng.gen_range(0..ENEMY_BODIES.len())];
        let (accessory, accessory_color) =
            ENEMY_ACCESSORIES[rng.gen_range(0..ENEMY_ACCESSORIES.len())];

        Self {
            head,
            head_color,
            body,
            body_color,
            accessory,
            accessory_color,
            name: format!("{}-{}-{}", head, body, accessory),
        }
    }

    pub fn boss() -> Self {
        Self {
            head: "Crown",
            head_color: Rgb::GOLD,
            body: "Royal Robe",
            body_color: Rgb::INDIGO,
            accessory: "Scepter",
            accessory_color: Rgb::SILVER,
            name: BOSS_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    kind: EnemyKind,
    appearance: Appearance,
    rect: Rect,
    health: f64,
    max_health: f64,
    speed: u32,
    attack_damage: u32,
    #[serde(skip)]
    last_attack: Duration,
}

impl Enemy {
    /// Spawns just outside a random edge of the gameplay area.
    pub fn spawn(kind: EnemyKind, player_level: u32, rng: &mut impl Rng) -> Self {
        let position = random_spawn_position(kind.size(), rng);
        Self::at(kind, player_level, position, rng)
    }

    /// Builds an enemy with its top-left corner at `position`.
    pub fn at(kind: EnemyKind, player_level: u32, position: Vec2, rng: &mut impl Rng) -> Self {
        let size = kind.size();
        let appearance = match kind {
            EnemyKind::Normal => Appearance::random(rng),
            EnemyKind::Boss => Appearance::boss(),
        };
        let (health, speed, attack_damage) = match kind {
            EnemyKind::Normal => roll_normal_stats(player_level, rng),
            EnemyKind::Boss => roll_boss_stats(player_level, rng),
        };

        Self {
            kind,
            appearance,
            rect: Rect::new(position.x, position.y, size, size),
            health,
            max_health: health,
            speed,
            attack_damage,
            last_attack: Duration::ZERO,
        }
    }

    /// Subtracts `amount` and reports whether the enemy is now dead.
    ///
    /// Rewards and removal are the caller's job.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        self.health = (self.health - amount).max(0.0);
        self.is_dead()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// True when `target` is strictly inside the enemy attack range.
    pub fn can_attack(&self, target: Vec2) -> bool {
        (distance(self.center(), target) as f64) < ENEMY_ATTACK_RANGE
    }

    /// Hits the player if more than `cooldown` has passed since the last hit.
    ///
    /// An attack that fires still consumes the cooldown when the player's
    /// shield absorbs it.
    pub fn attempt_attack(&mut self, now: Duration, cooldown: Duration, player: &mut Player) -> bool {
        if now.saturating_sub(self.last_attack) <= cooldown {
            return false;
        }
        self.last_attack = now;
        let landed = player.take_damage(self.attack_damage as f64, now);
        trace!(
            "{} attacked for {} damage{}",
            self.appearance.name,
            self.attack_damage,
            if landed { "" } else { " (blocked)" }
        );
        true
    }

    /// Walks toward `target`, sliding along obstacles, and stays within a
    /// small margin of the gameplay area.
    pub fn update_movement(&mut self, target: Vec2, obstacles: &[Rect]) {
        let step = normalize(target - self.center()) * self.speed as f32;
        self.attempt_move(step, obstacles);

        self.rect.x = clamp_value(
            self.rect.x,
            GAMEPLAY_LEFT - ENEMY_BOUNDS_MARGIN,
            GAMEPLAY_RIGHT + ENEMY_BOUNDS_MARGIN,
        );
        self.rect.y = clamp_value(
            self.rect.y,
            GAMEPLAY_TOP - ENEMY_BOUNDS_MARGIN,
            GAMEPLAY_BOTTOM + ENEMY_BOUNDS_MARGIN,
        );
    }

    // Full step, then x only, then y only.
    fn attempt_move(&mut self, step: Vec2, obstacles: &[Rect]) {
        let origin = self.rect;

        self.rect.x += step.x;
        self.rect.y += step.y;
        if !self.rect.intersects_any(obstacles) {
            return;
        }

        self.rect = origin;
        self.rect.x += step.x;
        if !self.rect.intersects_any(obstacles) {
            return;
        }

        self.rect = origin;
        self.rect.y += step.y;
        if self.rect.intersects_any(obstacles) {
            self.rect = origin;
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }

    pub fn name(&self) -> &str {
        &self.appearance.name
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn health_percentage(&self) -> f64 {
        health_percentage(self.health, self.max_health)
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn attack_damage(&self) -> u32 {
        self.attack_damage
    }

    pub fn last_attack(&self) -> Duration {
        self.last_attack
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

fn roll_normal_stats(level: u32, rng: &mut impl Rng) -> (f64, u32, u32) {
    let stats = enemy_stats_for_level(level);
    let speed = rng.gen_range(stats.min_speed..=stats.max_speed);
    let damage = rng.gen_range(stats.min_damage..=stats.max_damage);
    (stats.health as f64, speed, damage)
}

// Bosses are slower (bigger target) and use the multiplied health and damage.
fn roll_boss_stats(level: u32, rng: &mut impl Rng) -> (f64, u32, u32) {
    let stats = boss_stats_for_level(level, rng);
    let health = stats.health.floor();
    let speed = rng
        .gen_range(stats.min_speed..=stats.max_speed)
        .saturating_sub(1)
        .max(1);
    let min_damage = stats.min_damage.floor() as u32;
    let max_damage = (stats.max_damage.floor() as u32).max(min_damage);
    let damage = rng.gen_range(min_damage..=max_damage);
    (health, speed, damage)
}

/// Top-left corner just outside one of the four gameplay edges.
pub fn random_spawn_position(size: f32, rng: &mut impl Rng) -> Vec2 {
    let along_x = || GAMEPLAY_LEFT..=(GAMEPLAY_RIGHT - SPAWN_EDGE_OFFSET);
    let along_y = || GAMEPLAY_TOP..=(GAMEPLAY_BOTTOM - SPAWN_EDGE_OFFSET);

    match rng.gen_range(0..4) {
        0 => Vec2::new(rng.gen_range(along_x()), GAMEPLAY_TOP - size),
        1 => Vec2::new(GAMEPLAY_RIGHT, rng.gen_range(along_y())),
        2 => Vec2::new(rng.gen_range(along_x()), GAMEPLAY_BOTTOM),
        _ => Vec2::new(GAMEPLAY_LEFT - size, rng.gen_range(along_y())),
    }
}
