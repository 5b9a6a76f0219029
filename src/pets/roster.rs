//! Owned pets and the three equip slots.

use super::catalog::{find_pet, PetDefinition};
use crate::character::stats::BoostTotals;
use crate::core::constants::PET_SLOT_COUNT;
use std::collections::HashSet;
use thiserror::Error;

/// Why a roster operation was refused. State is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PetError {
    #[error("no pet named {0:?} exists")]
    UnknownPet(String),
    #[error("{0} is already owned")]
    AlreadyOwned(&'static str),
    #[error("{name} costs {cost} wins but only {wins} are available")]
    InsufficientWins {
        name: &'static str,
        cost: u32,
        wins: u32,
    },
    #[error("{0} has not been purchased")]
    NotOwned(&'static str),
    #[error("pet slot {0} does not exist")]
    InvalidSlot(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetRoster {
    owned: HashSet<&'static str>,
    equipped: [Option<&'static PetDefinition>; PET_SLOT_COUNT],
}

impl PetRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buys a pet if it exists, is not owned yet and `wins` covers the cost.
    /// Deducts the cost from `wins` on success.
    pub fn purchase(
        &mut self,
        name: &str,
        wins: &mut u32,
    ) -> Result<&'static PetDefinition, PetError> {
        let pet = find_pet(name).ok_or_else(|| PetError::UnknownPet(name.to_string()))?;
        if self.owned.contains(pet.name) {
            return Err(PetError::AlreadyOwned(pet.name));
        }
        if *wins < pet.cost {
            return Err(PetError::InsufficientWins {
                name: pet.name,
                cost: pet.cost,
                wins: *wins,
            });
        }
        *wins -= pet.cost;
        self.owned.insert(pet.name);
        Ok(pet)
    }

    /// Puts an owned pet in `slot`, or clears the slot with `None`.
    ///
    /// A pet occupies at most one slot: equipping it elsewhere moves it.
    pub fn equip(&mut self, slot: usize, name: Option<&str>) -> Result<(), PetError> {
        if slot >= PET_SLOT_COUNT {
            return Err(PetError::InvalidSlot(slot));
        }
        let pet = match name {
            None => None,
            Some(name) => {
                let pet = find_pet(name).ok_or_else(|| PetError::UnknownPet(name.to_string()))?;
                if !self.owned.contains(pet.name) {
                    return Err(PetError::NotOwned(pet.name));
                }
                Some(pet)
            }
        };

        if let Some(pet) = pet {
            for other in self.equipped.iter_mut() {
                if other.is_some_and(|p| p.name == pet.name) {
                    *other = None;
                }
            }
        }
        self.equipped[slot] = pet;
        Ok(())
    }

    pub fn owns(&self, name: &str) -> bool {
        self.owned.contains(name)
    }

    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    pub fn owned_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.owned.iter().copied()
    }

    pub fn slot(&self, slot: usize) -> Option<&'static PetDefinition> {
        self.equipped.get(slot).copied().flatten()
    }

    pub fn equipped(&self) -> &[Option<&'static PetDefinition>; PET_SLOT_COUNT] {
        &self.equipped
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.equipped.iter().position(|s| s.is_none())
    }

    pub fn is_equipped(&self, name: &str) -> bool {
        self.equipped.iter().flatten().any(|p| p.name == name)
    }

    pub fn boost_totals(&self) -> BoostTotals {
        BoostTotals::from_slots(self.equipped.iter().copied())
    }
}
