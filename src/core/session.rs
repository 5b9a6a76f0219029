//! One play-through: the player, everything on the field, spawn timers and RNG.
//!
//! The presentation layer owns a [`GameSession`], calls [`GameSession::tick`]
//! once per frame with a single monotonic timestamp, forwards clicks to
//! [`GameSession::click`], and renders from the read-only accessors.

use super::constants::*;
use super::events::{EventLog, GameEvent};
use super::scaling::spawn_interval_for_level;
use crate::character::evolution::EvolutionTable;
use crate::character::player::{LevelUp, Player};
use crate::combat::collectibles::{GoldenApple, ShieldFruit};
use crate::combat::encounter::{resolve_click, ClickOutcome, Field};
use crate::combat::enemy::{Enemy, EnemyKind};
use crate::core::geometry::Rect;
use crate::pets::catalog::PetDefinition;
use crate::pets::roster::PetError;
use glam::Vec2;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// Running totals for the current play-through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub enemies_spawned: u32,
    pub bosses_spawned: u32,
    pub kills: u32,
    pub boss_kills: u32,
    pub apples_collected: u32,
    pub shields_collected: u32,
}

/// Result of a click: what it hit plus the events it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickResult {
    pub outcome: ClickOutcome,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    player: Player,
    field: Field,
    state: SessionState,
    rng: ChaCha8Rng,
    seed: Option<u64>,
    now: Duration,
    movement: Vec2,
    enemy_spawn_timer: u32,
    apple_spawn_timer: u32,
    fruit_spawn_timer: u32,
    stats: SessionStats,
    event_log: EventLog,
}

impl GameSession {
    /// New session. `Some(seed)` makes every random roll reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_table(EvolutionTable::standard(), seed)
    }

    pub fn with_table(table: Arc<EvolutionTable>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            player: Player::with_table(table),
            field: Field::new(),
            state: SessionState::Playing,
            rng,
            seed,
            now: Duration::ZERO,
            movement: Vec2::ZERO,
            enemy_spawn_timer: 0,
            apple_spawn_timer: 0,
            fruit_spawn_timer: 0,
            stats: SessionStats::default(),
            event_log: EventLog::new(),
        }
    }

    /// Replaces the static obstacles enemies and the player collide with.
    pub fn set_obstacles(&mut self, obstacles: Vec<Rect>) {
        self.field.obstacles = obstacles;
    }

    /// Starts over. Obstacles, the evolution table and the RNG stream carry over.
    pub fn reset(&mut self) {
        self.player.reset();
        self.field = Field::with_obstacles(std::mem::take(&mut self.field.obstacles));
        self.state = SessionState::Playing;
        self.movement = Vec2::ZERO;
        self.enemy_spawn_timer = 0;
        self.apple_spawn_timer = 0;
        self.fruit_spawn_timer = 0;
        self.stats = SessionStats::default();
        self.event_log.clear();
        info!("session reset");
    }

    /// Held movement direction, applied every tick until changed.
    pub fn set_movement_intent(&mut self, direction: Vec2) {
        self.movement = direction.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Advances one fixed frame. `now` is sampled once by the caller and used
    /// for every time comparison in the frame.
    pub fn tick(&mut self, now: Duration) -> Vec<GameEvent> {
        self.now = now;
        let mut events = Vec::new();
        if self.state == SessionState::GameOver {
            return events;
        }

        if !self.player.is_alive() {
            self.state = SessionState::GameOver;
            info!(
                "game over at level {} after {} kills",
                self.player.level(),
                self.stats.kills
            );
            events.push(GameEvent::PlayerDied {
                level: self.player.level(),
                wins: self.player.wins(),
            });
            self.event_log.record_all(&events);
            return events;
        }

        self.stats.ticks += 1;
        if self.movement != Vec2::ZERO {
            self.player
                .handle_movement_intent(self.movement, &self.field.obstacles);
        }
        self.player.heal_over_time();

        self.update_spawns(&mut events);
        self.update_enemies(now, &mut events);

        self.event_log.record_all(&events);
        events
    }

    fn update_spawns(&mut self, events: &mut Vec<GameEvent>) {
        let level = self.player.level();

        self.enemy_spawn_timer += 1;
        if self.enemy_spawn_timer >= spawn_interval_for_level(level) {
            self.enemy_spawn_timer = 0;
            events.push(self.spawn_enemy());
        }

        self.apple_spawn_timer += 1;
        if self.apple_spawn_timer >= GOLDEN_APPLE_SPAWN_FRAMES {
            self.apple_spawn_timer = 0;
            self.field.apples.push(GoldenApple::spawn(&mut self.rng));
            events.push(GameEvent::GoldenAppleSpawned);
        }

        self.fruit_spawn_timer += 1;
        if self.fruit_spawn_timer >= SHIELD_FRUIT_SPAWN_FRAMES {
            self.fruit_spawn_timer = 0;
            self.field.fruits.push(ShieldFruit::spawn(&mut self.rng));
            events.push(GameEvent::ShieldFruitSpawned);
        }
    }

    // Every BOSS_SPAWN_EVERY-th spawn is a boss once the player is strong enough.
    fn spawn_enemy(&mut self) -> GameEvent {
        let level = self.player.level();
        self.stats.enemies_spawned += 1;
        let boss_due = self.stats.enemies_spawned % BOSS_SPAWN_EVERY == 0
            && level >= BOSS_MIN_PLAYER_LEVEL;

        if boss_due {
            let boss = Enemy::spawn(EnemyKind::Boss, level, &mut self.rng);
            self.stats.bosses_spawned += 1;
            debug!("boss spawned with {} hp", boss.max_health());
            let event = GameEvent::BossSpawned {
                health: boss.max_health(),
            };
            self.field.enemies.push(boss);
            event
        } else {
            let enemy = Enemy::spawn(EnemyKind::Normal, level, &mut self.rng);
            debug!("spawned {} at level {}", enemy.name(), level);
            let event = GameEvent::EnemySpawned {
                name: enemy.name().to_string(),
            };
            self.field.enemies.push(enemy);
            event
        }
    }

    fn update_enemies(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        let cooldown = Duration::from_millis(ENEMY_ATTACK_COOLDOWN_MS);
        let obstacles = &self.field.obstacles;

        for enemy in self.field.enemies.iter_mut() {
            enemy.update_movement(self.player.center(), obstacles);
            if !enemy.can_attack(self.player.center()) {
                continue;
            }
            let shielded = self.player.has_shield(now);
            if enemy.attempt_attack(now, cooldown, &mut self.player) {
                let enemy_name = enemy.name().to_string();
                events.push(if shielded {
                    GameEvent::ShieldBlocked { enemy_name }
                } else {
                    GameEvent::EnemyAttack {
                        enemy_name,
                        damage: enemy.attack_damage(),
                    }
                });
            }
        }
    }

    /// Resolves a click at `position` using the timestamp of the last tick.
    ///
    /// Clicks after death do nothing.
    pub fn click(&mut self, position: Vec2) -> ClickResult {
        if self.state == SessionState::GameOver || !self.player.is_alive() {
            return ClickResult {
                outcome: ClickOutcome::Missed,
                events: Vec::new(),
            };
        }

        let outcome = resolve_click(&mut self.player, &mut self.field, position, self.now);
        let mut events = Vec::new();
        match &outcome {
            ClickOutcome::Missed => {}
            ClickOutcome::OutOfRange => events.push(GameEvent::TargetOutOfRange),
            ClickOutcome::EnemyHit {
                name,
                damage,
                remaining_health,
            } => events.push(GameEvent::EnemyHit {
                enemy_name: name.clone(),
                damage: *damage,
                remaining_health: *remaining_health,
            }),
            ClickOutcome::EnemyDefeated {
                name,
                position,
                was_boss,
                experience,
                ..
            } => {
                self.stats.kills += 1;
                if *was_boss {
                    self.stats.boss_kills += 1;
                }
                events.push(GameEvent::EnemyDefeated {
                    enemy_name: name.clone(),
                    was_boss: *was_boss,
                    experience: *experience,
                });
                events.push(GameEvent::Explosion {
                    position: *position,
                });
            }
            ClickOutcome::AppleCollected { experience, .. } => {
                self.stats.apples_collected += 1;
                events.push(GameEvent::AppleCollected {
                    experience: *experience,
                });
            }
            ClickOutcome::ShieldCollected { duration_seconds } => {
                self.stats.shields_collected += 1;
                events.push(GameEvent::ShieldActivated {
                    seconds: *duration_seconds,
                });
            }
        }
        events.extend(level_up_events(outcome.level_ups()));

        self.event_log.record_all(&events);
        ClickResult { outcome, events }
    }

    pub fn buy_pet(&mut self, name: &str) -> Result<&'static PetDefinition, PetError> {
        let pet = self.player.buy_pet(name)?;
        self.event_log.record(&GameEvent::PetPurchased {
            name: pet.name.to_string(),
            cost: pet.cost,
        });
        Ok(pet)
    }

    pub fn equip_pet(&mut self, slot: usize, name: Option<&str>) -> Result<(), PetError> {
        self.player.equip_pet(slot, name)?;
        self.event_log.record(&GameEvent::PetEquipped {
            slot,
            name: name.map(str::to_string),
        });
        Ok(())
    }

    // === Debug actions ===

    /// Grants experience outside of combat. Level-ups go to the event log.
    pub fn grant_experience(&mut self, amount: f64) -> Vec<GameEvent> {
        let events = level_up_events(&self.player.gain_experience(amount));
        self.event_log.record_all(&events);
        events
    }

    /// Shields the player for `seconds` from the last tick's timestamp.
    pub fn grant_shield(&mut self, seconds: f64) -> Vec<GameEvent> {
        if seconds.is_nan() || seconds <= 0.0 {
            return Vec::new();
        }
        self.player.activate_shield(seconds, self.now);
        let events = vec![GameEvent::ShieldActivated { seconds }];
        self.event_log.record_all(&events);
        events
    }

    /// Applies damage at the last tick's timestamp, honoring the shield.
    pub fn damage_player(&mut self, amount: f64) -> bool {
        self.player.take_damage(amount, self.now)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.field.enemies
    }

    pub fn apples(&self) -> &[GoldenApple] {
        &self.field.apples
    }

    pub fn fruits(&self) -> &[ShieldFruit] {
        &self.field.fruits
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.field.obstacles
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }
}

fn level_up_events(level_ups: &[LevelUp]) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for up in level_ups {
        events.push(GameEvent::LeveledUp {
            new_level: up.new_level,
        });
        if let Some(name) = &up.evolved_into {
            events.push(GameEvent::Evolved {
                new_level: up.new_level,
                name: name.clone(),
            });
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::{Clock, FixedStepClock};

    fn run_ticks(session: &mut GameSession, clock: &mut FixedStepClock, ticks: u32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..ticks {
            events.extend(session.tick(clock.advance()));
        }
        events
    }

    #[test]
    fn test_first_enemy_spawns_on_interval() {
        let mut session = GameSession::new(Some(1));
        let mut clock = FixedStepClock::per_tick();

        run_ticks(&mut session, &mut clock, ENEMY_SPAWN_FRAMES - 1);
        assert!(session.enemies().is_empty());
        let events = run_ticks(&mut session, &mut clock, 1);
        assert_eq!(session.enemies().len(), 1);
        assert!(matches!(events[0], GameEvent::EnemySpawned { .. }));
    }

    #[test]
    fn test_collectibles_spawn_on_their_timers() {
        let mut session = GameSession::new(Some(2));
        let mut clock = FixedStepClock::per_tick();
        // Keep the player safe so the run is not cut short
        session.player.activate_shield(1000.0, Duration::ZERO);

        run_ticks(&mut session, &mut clock, GOLDEN_APPLE_SPAWN_FRAMES);
        assert_eq!(session.apples().len(), 1);
        assert!(session.fruits().is_empty());

        run_ticks(
            &mut session,
            &mut clock,
            SHIELD_FRUIT_SPAWN_FRAMES - GOLDEN_APPLE_SPAWN_FRAMES,
        );
        assert_eq!(session.fruits().len(), 1);
    }

    #[test]
    fn test_death_ends_session_next_tick() {
        let mut session = GameSession::new(Some(3));
        session.player.take_damage(1000.0, Duration::ZERO);

        let events = session.tick(Duration::from_millis(16));
        assert_eq!(session.state(), SessionState::GameOver);
        assert!(matches!(events[0], GameEvent::PlayerDied { level: 1, .. }));

        // Game over freezes everything
        assert!(session.tick(Duration::from_secs(100)).is_empty());
        assert_eq!(session.stats().ticks, 0);
        assert_eq!(session.click(Vec2::new(500.0, 300.0)).outcome, ClickOutcome::Missed);
    }

    #[test]
    fn test_reset_restores_fresh_session() {
        let mut session = GameSession::new(Some(4));
        let mut clock = FixedStepClock::per_tick();
        session.set_obstacles(vec![Rect::new(320.0, 20.0, 40.0, 40.0)]);
        run_ticks(&mut session, &mut clock, 400);
        session.player.take_damage(1000.0, clock.now());
        session.tick(clock.advance());
        assert!(session.is_game_over());

        session.reset();
        assert_eq!(session.state(), SessionState::Playing);
        assert!(session.enemies().is_empty());
        assert_eq!(session.player().level(), 1);
        assert_eq!(session.player().health(), 10.0);
        assert_eq!(session.obstacles().len(), 1);
        assert!(session.event_log().is_empty());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameSession::new(Some(99));
        let mut b = GameSession::new(Some(99));
        let mut clock_a = FixedStepClock::per_tick();
        let mut clock_b = FixedStepClock::per_tick();
        run_ticks(&mut a, &mut clock_a, 600);
        run_ticks(&mut b, &mut clock_b, 600);

        let names_a: Vec<_> = a.enemies().iter().map(|e| e.name().to_string()).collect();
        let names_b: Vec<_> = b.enemies().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names_a, names_b);
        assert_eq!(a.player().health(), b.player().health());
    }

    #[test]
    fn test_movement_intent_moves_player() {
        let mut session = GameSession::new(Some(5));
        let start = session.player().center();
        session.set_movement_intent(Vec2::new(1.0, 0.0));
        session.tick(Duration::from_millis(16));
        assert_eq!(session.player().center().x, start.x + 5.0);
    }

    #[test]
    fn test_pet_actions_are_logged() {
        let mut session = GameSession::new(Some(6));
        for _ in 0..5 {
            session.player.add_win();
        }
        session.buy_pet("Damage Doggy").unwrap();
        session.equip_pet(0, Some("Damage Doggy")).unwrap();
        assert_eq!(session.event_log().len(), 2);
        assert_eq!(
            session.event_log().latest(),
            Some("Damage Doggy equipped in slot 1")
        );
        assert!(session.buy_pet("Damage Doggy").is_err());
        assert_eq!(session.event_log().len(), 2);
    }

    #[test]
    fn test_debug_actions_record_to_log() {
        let mut session = GameSession::new(Some(7));
        let events = session.grant_experience(15.0);
        assert_eq!(session.player().level(), 3);
        assert!(matches!(events[0], GameEvent::LeveledUp { new_level: 2 }));
        assert!(session.event_log().len() >= 2);

        session.grant_shield(5.0);
        assert_eq!(session.event_log().latest(), Some("Shield active for 5 seconds"));
        assert!(!session.damage_player(100.0));
        assert!(session.grant_shield(f64::NAN).is_empty());

        let mut exposed = GameSession::new(Some(8));
        assert!(exposed.damage_player(4.0));
        assert_eq!(exposed.player().health(), 6.0);
    }
}
