use super::evolution::EvolutionEntry;
use crate::core::constants::{PLAYER_ATTACK_RANGE, REGEN_BASELINE_DIVISOR};
use crate::pets::catalog::{BoostType, PetDefinition};
use serde::Serialize;

/// Unboosted stats taken straight from the current evolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseStats {
    pub max_health: f64,
    pub speed: f64,
    pub damage: f64,
    pub attack_range: f64,
}

impl BaseStats {
    pub fn from_evolution(entry: &EvolutionEntry) -> Self {
        Self {
            max_health: entry.stats.health as f64,
            speed: entry.stats.speed as f64,
            damage: entry.stats.damage as f64,
            attack_range: PLAYER_ATTACK_RANGE,
        }
    }

    /// Per-tick regeneration before pet boosts.
    pub fn regen_baseline(&self) -> f64 {
        self.max_health / REGEN_BASELINE_DIVISOR
    }
}

/// Summed fractional boosts, one bucket per [`BoostType`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoostTotals {
    pub damage: f64,
    pub health: f64,
    pub speed: f64,
    pub aura: f64,
    pub regeneration: f64,
}

impl BoostTotals {
    /// Sums boosts across equipped slots. Empty slots contribute nothing.
    pub fn from_slots<'a>(slots: impl IntoIterator<Item = Option<&'a PetDefinition>>) -> Self {
        let mut totals = Self::default();
        for pet in slots.into_iter().flatten() {
            totals.add(pet.boost_type, pet.boost_amount);
        }
        totals
    }

    pub fn add(&mut self, boost_type: BoostType, amount: f64) {
        match boost_type {
            BoostType::Damage => self.damage += amount,
            BoostType::Health => self.health += amount,
            BoostType::Speed => self.speed += amount,
            BoostType::Aura => self.aura += amount,
            BoostType::Regeneration => self.regeneration += amount,
        }
    }

    pub fn get(&self, boost_type: BoostType) -> f64 {
        match boost_type {
            BoostType::Damage => self.damage,
            BoostType::Health => self.health,
            BoostType::Speed => self.speed,
            BoostType::Aura => self.aura,
            BoostType::Regeneration => self.regeneration,
        }
    }
}

/// Stats the rest of the game reads. Always `f(base, boosts)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectiveStats {
    pub max_health: f64,
    pub speed: f64,
    pub damage: f64,
    pub attack_range: f64,
    pub regen_rate: f64,
}

impl EffectiveStats {
    /// Applies each boost bucket as a `(1 + sum)` factor to its base stat.
    pub fn compute(base: &BaseStats, boosts: &BoostTotals) -> Self {
        Self {
            max_health: base.max_health * (1.0 + boosts.health),
            speed: base.speed * (1.0 + boosts.speed),
            damage: base.damage * (1.0 + boosts.damage),
            attack_range: base.attack_range * (1.0 + boosts.aura),
            regen_rate: base.regen_baseline() * (1.0 + boosts.regeneration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::evolution::evolution_for_level;
    use crate::pets::catalog::find_pet;

    #[test]
    fn test_no_boosts_equals_base() {
        let base = BaseStats::from_evolution(&evolution_for_level(1));
        let stats = EffectiveStats::compute(&base, &BoostTotals::default());
        assert_eq!(stats.max_health, 10.0);
        assert_eq!(stats.speed, 5.0);
        assert_eq!(stats.damage, 1.0);
        assert_eq!(stats.attack_range, PLAYER_ATTACK_RANGE);
        assert_eq!(stats.regen_rate, 10.0 / 1000.0);
    }

    #[test]
    fn test_same_type_boosts_add() {
        let mut boosts = BoostTotals::default();
        boosts.add(BoostType::Damage, 0.10);
        boosts.add(BoostType::Damage, 0.50);
        let base = BaseStats::from_evolution(&evolution_for_level(5));
        let stats = EffectiveStats::compute(&base, &boosts);
        assert!((stats.damage - 18.0 * 1.6).abs() < 1e-9);
        // Other buckets untouched
        assert_eq!(stats.max_health, 120.0);
        assert_eq!(stats.speed, 10.0);
    }

    #[test]
    fn test_regen_uses_base_max_health() {
        let mut boosts = BoostTotals::default();
        boosts.add(BoostType::Health, 1.0);
        boosts.add(BoostType::Regeneration, 0.5);
        let base = BaseStats::from_evolution(&evolution_for_level(2));
        let stats = EffectiveStats::compute(&base, &boosts);
        assert_eq!(stats.max_health, 40.0);
        // Health boost does not feed regen
        assert!((stats.regen_rate - 20.0 / 1000.0 * 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_slots_skips_empty() {
        let doggy = find_pet("Damage Doggy");
        let owl = find_pet("Range Owl");
        let totals = BoostTotals::from_slots([doggy, None, owl]);
        assert!(totals.damage > 0.0);
        assert!(totals.aura > 0.0);
        assert_eq!(totals.health, 0.0);
        assert_eq!(totals.get(BoostType::Speed), 0.0);
    }
}
