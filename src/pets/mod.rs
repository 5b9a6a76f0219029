//! Pet catalog and the player's owned/equipped roster.

pub mod catalog;
pub mod roster;

pub use catalog::{available_pets_for_level, find_pet, BoostType, PetDefinition, PET_CATALOG};
pub use roster::{PetError, PetRoster};
