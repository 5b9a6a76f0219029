//! Static pet catalog.
//!
//! Pets are immutable shared data; the player's roster only ever holds
//! `&'static PetDefinition` references into [`PET_CATALOG`].

use crate::core::color::Rgb;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoostType {
    Damage,
    Health,
    Speed,
    /// Attack range.
    Aura,
    Regeneration,
}

impl BoostType {
    pub fn all() -> [BoostType; 5] {
        [
            BoostType::Damage,
            BoostType::Health,
            BoostType::Speed,
            BoostType::Aura,
            BoostType::Regeneration,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoostType::Damage => "damage",
            BoostType::Health => "max health",
            BoostType::Speed => "speed",
            BoostType::Aura => "attack range",
            BoostType::Regeneration => "health regen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetDefinition {
    pub name: &'static str,
    pub unlock_level: u32,
    /// Price in wins.
    pub cost: u32,
    pub boost_type: BoostType,
    /// Fractional boost, e.g. 0.10 = +10%.
    pub boost_amount: f64,
    pub color: Rgb,
    pub description: &'static str,
}

impl PetDefinition {
    pub fn boost_percent(&self) -> f64 {
        self.boost_amount * 100.0
    }
}

pub static PET_CATALOG: [PetDefinition; 11] = [
    PetDefinition {
        name: "Damage Doggy",
        unlock_level: 1,
        cost: 5,
        boost_type: BoostType::Damage,
        boost_amount: 0.10,
        color: Rgb(255, 100, 100),
        description: "Boosts damage by +10%",
    },
    PetDefinition {
        name: "Health Hamster",
        unlock_level: 1,
        cost: 5,
        boost_type: BoostType::Health,
        boost_amount: 0.20,
        color: Rgb(100, 255, 100),
        description: "Boosts max health by +20%",
    },
    PetDefinition {
        name: "Range Owl",
        unlock_level: 1,
        cost: 8,
        boost_type: BoostType::Aura,
        boost_amount: 0.15,
        color: Rgb(150, 75, 200),
        description: "Increases attack range by +15%",
    },
    PetDefinition {
        name: "Speed Squirrel",
        unlock_level: 4,
        cost: 15,
        boost_type: BoostType::Speed,
        boost_amount: 0.15,
        color: Rgb(100, 100, 255),
        description: "Boosts speed by +15%",
    },
    PetDefinition {
        name: "Regen Rabbit",
        unlock_level: 7,
        cost: 30,
        boost_type: BoostType::Regeneration,
        boost_amount: 0.50,
        color: Rgb(255, 255, 100),
        description: "Boosts health regen by +50%",
    },
    PetDefinition {
        name: "Aura Axolotl",
        unlock_level: 10,
        cost: 50,
        boost_type: BoostType::Aura,
        boost_amount: 0.25,
        color: Rgb(255, 100, 255),
        description: "Increases attack range by +25%",
    },
    PetDefinition {
        name: "Mega Damage Dragon",
        unlock_level: 13,
        cost: 100,
        boost_type: BoostType::Damage,
        boost_amount: 0.50,
        color: Rgb(255, 0, 0),
        description: "Boosts damage by +50%",
    },
    PetDefinition {
        name: "Radar Eagle",
        unlock_level: 16,
        cost: 180,
        boost_type: BoostType::Aura,
        boost_amount: 0.40,
        color: Rgb(75, 200, 200),
        description: "Increases attack range by +40%",
    },
    PetDefinition {
        name: "Ultra Health Unicorn",
        unlock_level: 16,
        cost: 200,
        boost_type: BoostType::Health,
        boost_amount: 1.00,
        color: Rgb(0, 255, 0),
        description: "Boosts max health by +100%",
    },
    PetDefinition {
        name: "Lightning Llama",
        unlock_level: 19,
        cost: 500,
        boost_type: BoostType::Speed,
        boost_amount: 0.50,
        color: Rgb(255, 255, 0),
        description: "Boosts speed by +50%",
    },
    PetDefinition {
        name: "Cosmic Chameleon",
        unlock_level: 19,
        cost: 600,
        boost_type: BoostType::Aura,
        boost_amount: 0.60,
        color: Rgb(200, 50, 255),
        description: "Increases attack range by +60%",
    },
];

/// Looks up a pet by exact name.
pub fn find_pet(name: &str) -> Option<&'static PetDefinition> {
    PET_CATALOG.iter().find(|p| p.name == name)
}

/// Pets unlocked at `level`, in catalog order.
pub fn available_pets_for_level(level: u32) -> Vec<&'static PetDefinition> {
    PET_CATALOG
        .iter()
        .filter(|p| p.unlock_level <= level)
        .collect()
}

pub fn pet_cost(name: &str) -> Option<u32> {
    find_pet(name).map(|p| p.cost)
}
