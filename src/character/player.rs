//! Player progression: level, XP, evolution, health, shield, wins and pets.
//!
//! Effective stats are never edited directly. Every mutation that can change
//! them (level-up, equip) ends with [`Player::recompute_effective_stats`], so
//! readers can never observe a stale value.

use super::evolution::{EvolutionEntry, EvolutionTable};
use super::stats::{BaseStats, BoostTotals, EffectiveStats};
use crate::core::constants::*;
use crate::core::geometry::{clamp_value, health_percentage, Rect};
use crate::core::scaling::experience_needed_for_level;
use crate::pets::catalog::PetDefinition;
use crate::pets::roster::{PetError, PetRoster};
use glam::Vec2;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

/// Summary of a single level gained.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelUp {
    pub new_level: u32,
    /// Set when the evolution name changed with this level.
    pub evolved_into: Option<String>,
    pub healed: f64,
}

#[derive(Debug, Clone)]
pub struct Player {
    table: Arc<EvolutionTable>,
    level: u32,
    experience: f64,
    experience_to_next_level: f64,
    wins: u32,
    base: BaseStats,
    roster: PetRoster,
    stats: EffectiveStats,
    health: f64,
    shield_end: Duration,
    rect: Rect,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Fresh level-1 player using the built-in evolution table.
    pub fn new() -> Self {
        Self::with_table(EvolutionTable::standard())
    }

    pub fn with_table(table: Arc<EvolutionTable>) -> Self {
        let base = BaseStats::from_evolution(table.evolution_for_level(1));
        let roster = PetRoster::new();
        let stats = EffectiveStats::compute(&base, &roster.boost_totals());
        let spawn = Vec2::new(
            (GAMEPLAY_LEFT + GAMEPLAY_RIGHT) / 2.0,
            (GAMEPLAY_TOP + GAMEPLAY_BOTTOM) / 2.0,
        );

        Self {
            table,
            level: 1,
            experience: 0.0,
            experience_to_next_level: experience_needed_for_level(1),
            wins: 0,
            base,
            roster,
            health: stats.max_health,
            stats,
            shield_end: Duration::ZERO,
            rect: Rect::centered(spawn, PLAYER_SIZE, PLAYER_SIZE),
        }
    }

    /// Discards all progress, keeping the evolution table.
    pub fn reset(&mut self) {
        *self = Self::with_table(Arc::clone(&self.table));
    }

    // === Progression ===

    /// Adds XP and processes every level-up it pays for.
    ///
    /// Leftover XP carries into the next level. Dead players gain nothing.
    pub fn gain_experience(&mut self, amount: f64) -> Vec<LevelUp> {
        let mut level_ups = Vec::new();
        if !self.is_alive() || !amount.is_finite() || amount <= 0.0 {
            return level_ups;
        }

        self.experience += amount;
        while self.experience >= self.experience_to_next_level {
            level_ups.push(self.level_up());
        }
        level_ups
    }

    fn level_up(&mut self) -> LevelUp {
        let previous_name = self.evolution().name.clone();

        self.experience -= self.experience_to_next_level;
        self.level += 1;
        self.experience_to_next_level = experience_needed_for_level(self.level);
        self.base = BaseStats::from_evolution(self.table.evolution_for_level(self.level));
        self.recompute_effective_stats();

        let before = self.health;
        let heal = self.stats.max_health * LEVEL_UP_HEAL_FRACTION;
        self.health = (self.health + heal).min(self.stats.max_health);

        let name = &self.evolution().name;
        let evolved_into = (*name != previous_name).then(|| name.clone());
        match &evolved_into {
            Some(form) => debug!("level {} reached, evolved into {}", self.level, form),
            None => debug!("level {} reached", self.level),
        }

        LevelUp {
            new_level: self.level,
            evolved_into,
            healed: self.health - before,
        }
    }

    /// Rebuilds effective stats from base stats and the equipped pets.
    pub fn recompute_effective_stats(&mut self) {
        self.stats = EffectiveStats::compute(&self.base, &self.roster.boost_totals());
    }

    // === Health ===

    /// Applies damage unless a shield is active at `now`. Returns true if health changed.
    pub fn take_damage(&mut self, amount: f64, now: Duration) -> bool {
        if self.has_shield(now) || amount.is_nan() || amount <= 0.0 {
            return false;
        }
        let was_alive = self.is_alive();
        self.health = (self.health - amount).max(0.0);
        if was_alive && !self.is_alive() {
            info!("player died at level {}", self.level);
        }
        true
    }

    /// One fixed-tick regeneration step. Only heals living, injured players.
    pub fn heal_over_time(&mut self) {
        if self.health > 0.0 && self.health < self.stats.max_health {
            self.health = (self.health + self.stats.regen_rate).min(self.stats.max_health);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn health_percentage(&self) -> f64 {
        health_percentage(self.health, self.stats.max_health)
    }

    // === Shield ===

    /// Extends the shield to `now + seconds`. A shorter pickup never shortens it.
    pub fn activate_shield(&mut self, seconds: f64, now: Duration) {
        if seconds.is_nan() || seconds <= 0.0 {
            return;
        }
        let duration = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
        let end = now.saturating_add(duration);
        self.shield_end = self.shield_end.max(end);
        debug!("shield active until {:.2}s", self.shield_end.as_secs_f64());
    }

    pub fn has_shield(&self, now: Duration) -> bool {
        now < self.shield_end
    }

    pub fn shield_time_remaining(&self, now: Duration) -> Duration {
        self.shield_end.saturating_sub(now)
    }

    // === Wins and pets ===

    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Spends wins on a pet. Fails without side effects if unaffordable or owned.
    pub fn buy_pet(&mut self, name: &str) -> Result<&'static PetDefinition, PetError> {
        let pet = self.roster.purchase(name, &mut self.wins)?;
        debug!("bought {} for {} wins, {} left", pet.name, pet.cost, self.wins);
        Ok(pet)
    }

    /// Equips an owned pet (or clears the slot) and recomputes stats.
    ///
    /// Health is capped to the new max but never raised.
    pub fn equip_pet(&mut self, slot: usize, name: Option<&str>) -> Result<(), PetError> {
        self.roster.equip(slot, name)?;
        self.recompute_effective_stats();
        self.health = self.health.min(self.stats.max_health);
        debug!("slot {} now holds {}", slot, name.unwrap_or("nothing"));
        Ok(())
    }

    // === Movement ===

    /// Moves by effective speed along `direction`, staying inside the
    /// gameplay area. The whole step is reverted if it lands on an obstacle.
    pub fn handle_movement_intent(&mut self, direction: Vec2, obstacles: &[Rect]) {
        let previous = self.rect;
        let step = direction * self.stats.speed as f32;

        self.rect.x = clamp_value(
            self.rect.x + step.x,
            GAMEPLAY_LEFT,
            GAMEPLAY_RIGHT - self.rect.width,
        );
        self.rect.y = clamp_value(
            self.rect.y + step.y,
            GAMEPLAY_TOP,
            GAMEPLAY_BOTTOM - self.rect.height,
        );

        if self.rect.intersects_any(obstacles) {
            self.rect = previous;
        }
    }

    pub fn set_position(&mut self, center: Vec2) {
        self.rect = Rect::centered(center, self.rect.width, self.rect.height);
    }

    // === Accessors ===

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn experience_to_next_level(&self) -> f64 {
        self.experience_to_next_level
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.stats.max_health
    }

    pub fn speed(&self) -> f64 {
        self.stats.speed
    }

    pub fn damage(&self) -> f64 {
        self.stats.damage
    }

    pub fn attack_range(&self) -> f64 {
        self.stats.attack_range
    }

    pub fn regen_rate(&self) -> f64 {
        self.stats.regen_rate
    }

    pub fn base_max_health(&self) -> f64 {
        self.base.max_health
    }

    pub fn base_speed(&self) -> f64 {
        self.base.speed
    }

    pub fn base_damage(&self) -> f64 {
        self.base.damage
    }

    pub fn base_stats(&self) -> &BaseStats {
        &self.base
    }

    pub fn effective_stats(&self) -> &EffectiveStats {
        &self.stats
    }

    pub fn boost_totals(&self) -> BoostTotals {
        self.roster.boost_totals()
    }

    pub fn pets(&self) -> &PetRoster {
        &self.roster
    }

    pub fn evolution(&self) -> &EvolutionEntry {
        self.table.evolution_for_level(self.level)
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: Duration = Duration::ZERO;

    fn player_with_wins(wins: u32) -> Player {
        let mut player = Player::new();
        for _ in 0..wins {
            player.add_win();
        }
        player
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert_eq!(player.level(), 1);
        assert_eq!(player.experience(), 0.0);
        assert_eq!(player.experience_to_next_level(), 5.0);
        assert_eq!(player.wins(), 0);
        assert_eq!(player.health(), 10.0);
        assert_eq!(player.max_health(), 10.0);
        assert_eq!(player.damage(), 1.0);
        assert_eq!(player.speed(), 5.0);
        assert_eq!(player.attack_range(), PLAYER_ATTACK_RANGE);
        assert_eq!(player.evolution().name, "Tung Tung Sahur");
        assert!(player.is_alive());
    }

    #[test]
    fn test_damage_then_level_up_partial_heal() {
        let mut player = Player::new();
        player.take_damage(4.0, T0);
        assert_eq!(player.health(), 6.0);

        let ups = player.gain_experience(5.0);
        assert_eq!(ups.len(), 1);
        assert_eq!(player.level(), 2);
        assert_eq!(player.max_health(), 20.0);
        // min(20, 6 + 0.5 * 20)
        assert_eq!(player.health(), 16.0);
        assert_eq!(ups[0].evolved_into.as_deref(), Some("Skibidi Bopbop"));
    }

    #[test]
    fn test_level_up_heal_is_capped() {
        let mut player = Player::new();
        player.gain_experience(5.0);
        // 10 + 10 capped at 20
        assert_eq!(player.health(), 20.0);
    }

    #[test]
    fn test_multi_level_gain_carries_remainder() {
        let mut player = Player::new();
        // 5 + 10 + 20 = 35 for three levels, plus 3 left over
        let ups = player.gain_experience(38.0);
        assert_eq!(ups.len(), 3);
        assert_eq!(player.level(), 4);
        assert_eq!(player.experience(), 3.0);
        assert_eq!(player.experience_to_next_level(), 40.0);
        assert_eq!(player.base_max_health(), 80.0);
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let mut player = Player::new();
        player.gain_experience(4.5);
        assert_eq!(player.level(), 1);
        player.gain_experience(0.5);
        assert_eq!(player.level(), 2);
    }

    #[test]
    fn test_non_finite_experience_is_ignored() {
        let mut player = Player::new();
        assert!(player.gain_experience(f64::INFINITY).is_empty());
        assert!(player.gain_experience(f64::NAN).is_empty());
        assert_eq!(player.level(), 1);
        assert_eq!(player.experience(), 0.0);
        assert_eq!(player.experience_to_next_level(), 5.0);
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut player = Player::new();
        assert!(player.take_damage(100.0, T0));
        assert_eq!(player.health(), 0.0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_dead_player_stays_dead() {
        let mut player = Player::new();
        player.take_damage(100.0, T0);
        assert!(player.gain_experience(1000.0).is_empty());
        player.heal_over_time();
        assert_eq!(player.health(), 0.0);
        assert_eq!(player.level(), 1);
    }

    #[test]
    fn test_shield_blocks_damage() {
        let mut player = Player::new();
        player.activate_shield(5.0, T0);
        assert!(player.has_shield(Duration::from_secs(1)));
        assert!(!player.take_damage(100.0, Duration::from_secs(1)));
        assert_eq!(player.health(), 10.0);
    }

    #[test]
    fn test_shield_expires() {
        let mut player = Player::new();
        player.activate_shield(5.0, T0);
        let later = Duration::from_secs(5);
        assert!(!player.has_shield(later));
        assert_eq!(player.shield_time_remaining(later), Duration::ZERO);
        assert!(player.take_damage(3.0, later));
        assert_eq!(player.health(), 7.0);
    }

    #[test]
    fn test_shield_stacking_takes_max() {
        let mut player = Player::new();
        player.activate_shield(5.0, T0);
        player.activate_shield(3.0, T0);
        assert_eq!(player.shield_time_remaining(T0), Duration::from_secs(5));

        player.activate_shield(10.0, Duration::from_secs(2));
        assert_eq!(player.shield_time_remaining(T0), Duration::from_secs(12));
    }

    #[test]
    fn test_huge_shield_durations_saturate() {
        let mut player = Player::new();
        player.activate_shield(1e20, T0);
        assert!(player.has_shield(Duration::from_secs(u32::MAX as u64)));

        let mut player = Player::new();
        player.activate_shield(f64::INFINITY, Duration::from_secs(3));
        assert_eq!(
            player.shield_time_remaining(Duration::from_secs(3)),
            Duration::MAX - Duration::from_secs(3)
        );
        assert!(!player.take_damage(5.0, Duration::from_secs(60)));
    }

    #[test]
    fn test_heal_over_time_adds_regen() {
        let mut player = Player::new();
        player.take_damage(5.0, T0);
        player.heal_over_time();
        assert!((player.health() - (5.0 + 10.0 / 1000.0)).abs() < 1e-12);
    }

    #[test]
    fn test_heal_over_time_caps_at_max() {
        let mut player = Player::new();
        player.take_damage(0.001, T0);
        player.heal_over_time();
        assert_eq!(player.health(), player.max_health());
        // Full health stays untouched
        player.heal_over_time();
        assert_eq!(player.health(), player.max_health());
    }

    #[test]
    fn test_buy_pet_without_wins_fails() {
        let mut player = Player::new();
        let err = player.buy_pet("Damage Doggy").unwrap_err();
        assert!(matches!(err, PetError::InsufficientWins { .. }));
        assert_eq!(player.wins(), 0);
        assert_eq!(player.pets().owned_count(), 0);
    }

    #[test]
    fn test_equip_then_unequip_restores_stats() {
        let mut player = player_with_wins(5);
        let before = *player.effective_stats();
        player.buy_pet("Damage Doggy").unwrap();
        player.equip_pet(0, Some("Damage Doggy")).unwrap();
        assert!((player.damage() - 1.1).abs() < 1e-12);

        player.equip_pet(0, None).unwrap();
        assert_eq!(*player.effective_stats(), before);
    }

    #[test]
    fn test_equip_health_pet_does_not_heal() {
        let mut player = player_with_wins(5);
        player.buy_pet("Health Hamster").unwrap();
        player.take_damage(4.0, T0);
        player.equip_pet(1, Some("Health Hamster")).unwrap();
        assert_eq!(player.max_health(), 12.0);
        assert_eq!(player.health(), 6.0);
    }

    #[test]
    fn test_unequip_health_pet_caps_health() {
        let mut player = player_with_wins(5);
        player.buy_pet("Health Hamster").unwrap();
        player.equip_pet(0, Some("Health Hamster")).unwrap();
        player.gain_experience(5.0);
        assert_eq!(player.max_health(), 24.0);
        assert_eq!(player.health(), 22.0);

        player.equip_pet(0, None).unwrap();
        assert_eq!(player.max_health(), 20.0);
        assert_eq!(player.health(), 20.0);
    }

    #[test]
    fn test_level_up_reapplies_pet_boosts() {
        let mut player = player_with_wins(5);
        player.buy_pet("Damage Doggy").unwrap();
        player.equip_pet(2, Some("Damage Doggy")).unwrap();
        player.gain_experience(15.0);
        assert_eq!(player.level(), 3);
        assert!((player.damage() - 5.0 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_equip_invalid_slot_is_noop() {
        let mut player = player_with_wins(5);
        player.buy_pet("Damage Doggy").unwrap();
        let before = *player.effective_stats();
        assert_eq!(
            player.equip_pet(5, Some("Damage Doggy")),
            Err(PetError::InvalidSlot(5))
        );
        assert_eq!(*player.effective_stats(), before);
    }

    #[test]
    fn test_movement_clamps_to_gameplay_area() {
        let mut player = Player::new();
        for _ in 0..1000 {
            player.handle_movement_intent(Vec2::new(-1.0, -1.0), &[]);
        }
        assert_eq!(player.rect().x, GAMEPLAY_LEFT);
        assert_eq!(player.rect().y, GAMEPLAY_TOP);
    }

    #[test]
    fn test_movement_blocked_by_obstacle() {
        let mut player = Player::new();
        let start = *player.rect();
        let wall = Rect::new(start.right(), start.y, 20.0, start.height);
        player.handle_movement_intent(Vec2::new(1.0, 0.0), &[wall]);
        assert_eq!(*player.rect(), start);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut player = player_with_wins(10);
        player.gain_experience(100.0);
        player.take_damage(3.0, T0);
        player.reset();
        assert_eq!(player.level(), 1);
        assert_eq!(player.wins(), 0);
        assert_eq!(player.health(), 10.0);
    }
}
