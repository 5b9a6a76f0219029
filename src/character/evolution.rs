//! Evolution table: level → name, colors, specialty and base stats.
//!
//! The table is plain data. The built-in forms live in [`STANDARD_EVOLUTIONS`];
//! any other table can be loaded from JSON with [`EvolutionTable::from_json`].

use crate::core::color::Rgb;
use log::error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Base combat stats granted by an evolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStats {
    pub damage: u32,
    pub health: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionEntry {
    pub level: u32,
    pub name: String,
    pub body_color: Rgb,
    pub head_color: Rgb,
    pub specialty: String,
    pub stats: EvolutionStats,
}

#[derive(Debug, Error)]
pub enum EvolutionTableError {
    #[error("evolution table has no entries")]
    Empty,
    #[error("evolution level {0} is defined more than once")]
    DuplicateLevel(u32),
    #[error("evolution levels start at 1, found level 0")]
    InvalidLevel,
    #[error("failed to parse evolution table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Keyed immutable evolution table. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionTable {
    entries: BTreeMap<u32, EvolutionEntry>,
}

impl EvolutionTable {
    /// Builds a table from entries, rejecting empty tables, level 0 and duplicates.
    pub fn from_entries(
        entries: impl IntoIterator<Item = EvolutionEntry>,
    ) -> Result<Self, EvolutionTableError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            if entry.level == 0 {
                return Err(EvolutionTableError::InvalidLevel);
            }
            let level = entry.level;
            if map.insert(level, entry).is_some() {
                return Err(EvolutionTableError::DuplicateLevel(level));
            }
        }
        if map.is_empty() {
            return Err(EvolutionTableError::Empty);
        }
        Ok(Self { entries: map })
    }

    /// Parses a JSON array of [`EvolutionEntry`] objects.
    pub fn from_json(json: &str) -> Result<Self, EvolutionTableError> {
        let entries: Vec<EvolutionEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let entries: Vec<&EvolutionEntry> = self.entries.values().collect();
        serde_json::to_string_pretty(&entries)
    }

    /// The built-in twenty-form table, built once per process.
    pub fn standard() -> Arc<EvolutionTable> {
        static STANDARD: OnceLock<Arc<EvolutionTable>> = OnceLock::new();
        STANDARD
            .get_or_init(|| match Self::from_entries(standard_entries()) {
                Ok(table) => Arc::new(table),
                Err(err) => {
                    error!("built-in evolution table rejected: {}", err);
                    Arc::new(Self::first_per_level(standard_entries()))
                }
            })
            .clone()
    }

    // Keeps the first entry for each level. Only used if the built-in rows are bad.
    fn first_per_level(entries: impl Iterator<Item = EvolutionEntry>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            map.entry(entry.level).or_insert(entry);
        }
        Self { entries: map }
    }

    /// Entry for a level.
    ///
    /// Exact matches win. Levels past the highest key get the highest entry
    /// (clamp, never extrapolate). A level that falls in a gap gets the
    /// closest entry below it, and levels below the first key get the first.
    pub fn evolution_for_level(&self, level: u32) -> &EvolutionEntry {
        if let Some(entry) = self.entries.range(..=level).next_back() {
            return entry.1;
        }
        self.first()
    }

    pub fn max_level(&self) -> u32 {
        self.last().level
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvolutionEntry> {
        self.entries.values()
    }

    fn first(&self) -> &EvolutionEntry {
        // Non-empty by construction.
        self.entries
            .values()
            .next()
            .unwrap_or_else(|| unreachable!("evolution table is never empty"))
    }

    fn last(&self) -> &EvolutionEntry {
        self.entries
            .values()
            .next_back()
            .unwrap_or_else(|| unreachable!("evolution table is never empty"))
    }
}

/// Looks up a level in the built-in table.
pub fn evolution_for_level(level: u32) -> EvolutionEntry {
    EvolutionTable::standard().evolution_for_level(level).clone()
}

fn standard_entries() -> impl Iterator<Item = EvolutionEntry> {
    STANDARD_EVOLUTIONS.iter().map(
        |&(level, name, body_color, head_color, specialty, damage, health, speed)| EvolutionEntry {
            level,
            name: name.to_string(),
            body_color,
            head_color,
            specialty: specialty.to_string(),
            stats: EvolutionStats {
                damage,
                health,
                speed,
            },
        },
    )
}

/// (level, name, body color, head color, specialty, damage, health, speed)
type EvolutionRow = (u32, &'static str, Rgb, Rgb, &'static str, u32, u32, u32);

#[rustfmt::skip]
pub const STANDARD_EVOLUTIONS: [EvolutionRow; 20] = [
    (1, "Tung Tung Sahur", Rgb(0, 255, 0), Rgb(255, 255, 0), "Balanced starter form", 1, 10, 5),
    (2, "Skibidi Bopbop", Rgb(255, 100, 100), Rgb(100, 255, 255), "Balanced growth", 2, 20, 6),
    (3, "Rizzleroni Pizzini", Rgb(255, 150, 0), Rgb(255, 0, 255), "High damage focus", 5, 35, 7),
    (4, "Gigachadino Chadello", Rgb(128, 0, 128), Rgb(255, 215, 0), "Tank build - massive health", 8, 80, 9),
    (5, "Bombardino Crocodilo", Rgb(0, 128, 0), Rgb(255, 0, 0), "Explosive damage dealer", 18, 120, 10),
    (6, "Ohio Skibadilo", Rgb(75, 0, 130), Rgb(255, 165, 0), "Speed demon - ultra fast", 30, 200, 12),
    (7, "Memeo Ladzini", Rgb(255, 20, 147), Rgb(0, 255, 127), "Meme power activation", 55, 350, 13),
    (8, "TikToki Trappini", Rgb(64, 224, 208), Rgb(139, 0, 139), "Viral damage multiplier", 120, 500, 15),
    (9, "Yeetini Bananello", Rgb(255, 255, 0), Rgb(255, 69, 0), "Potassium-powered chaos", 200, 800, 16),
    (10, "Tralalelo Tralala", Rgb(138, 43, 226), Rgb(50, 205, 50), "Musical destruction", 350, 1500, 17),
    (11, "Skibombini Boomala", Rgb(220, 20, 60), Rgb(255, 215, 0), "Explosive specialist", 750, 2200, 18),
    (12, "Chimpanzini Bananini", Rgb(139, 69, 19), Rgb(255, 255, 0), "Primal banana fury", 1200, 4000, 20),
    (13, "Bombombini Gusini", Rgb(25, 25, 112), Rgb(255, 0, 255), "Gusto overload", 2500, 6500, 21),
    (14, "Burbaloni Luliloli", Rgb(255, 182, 193), Rgb(72, 61, 139), "Cuteness with deadly power", 4000, 12000, 22),
    (15, "Brr Brr Patapim", Rgb(173, 216, 230), Rgb(255, 255, 255), "Ice cold elimination", 8000, 20000, 23),
    (16, "Zoomeroni Glitchilo", Rgb(0, 255, 255), Rgb(255, 0, 128), "Digital reality breaker", 15000, 35000, 25),
    (17, "Lollololo Memezzini", Rgb(255, 105, 180), Rgb(127, 255, 0), "Ultimate meme lord", 30000, 60000, 26),
    (18, "Bruhbruh Bananado", Rgb(255, 215, 0), Rgb(128, 0, 128), "Tornado of bruh energy", 55000, 120000, 28),
    (19, "Skibadilo Ultrapim", Rgb(186, 85, 211), Rgb(255, 20, 147), "Ultra instinct activated", 100000, 200000, 30),
    (20, "Gigaloni Memeotrono", Rgb(255, 255, 255), Rgb(0, 0, 0), "FINAL FORM - Transcendent being", 200000, 500000, 35),
];
