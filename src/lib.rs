//! Brainrot Evolution - progression core of a 2D click-combat game.
//!
//! This crate holds the game rules only: scaling formulas, the evolution
//! table, pets, the player state machine, enemies, click resolution and a
//! session object tying them together. Rendering and input capture live in
//! whatever front end drives [`core::session::GameSession`].

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod pets;
pub mod simulator;
