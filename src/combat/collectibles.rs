//! Golden apples (XP) and shield fruits (timed immunity).

use crate::core::constants::*;
use crate::core::geometry::Rect;
use glam::Vec2;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoldenApple {
    pub rect: Rect,
    pub exp_value: f64,
}

impl GoldenApple {
    pub fn at(position: Vec2) -> Self {
        Self {
            rect: Rect::new(position.x, position.y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE),
            exp_value: GOLDEN_APPLE_EXP_VALUE,
        }
    }

    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self::at(random_collectible_position(rng))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShieldFruit {
    pub rect: Rect,
    pub duration_seconds: f64,
}

impl ShieldFruit {
    pub fn at(position: Vec2) -> Self {
        Self {
            rect: Rect::new(position.x, position.y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE),
            duration_seconds: SHIELD_FRUIT_DURATION_SECONDS,
        }
    }

    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self::at(random_collectible_position(rng))
    }
}

/// Top-left corner fully inside the gameplay area, away from the edges.
pub fn random_collectible_position(rng: &mut impl Rng) -> Vec2 {
    let x = rng.gen_range(
        GAMEPLAY_LEFT + COLLECTIBLE_EDGE_MARGIN
            ..=GAMEPLAY_RIGHT - COLLECTIBLE_EDGE_MARGIN - COLLECTIBLE_SIZE,
    );
    let y = rng.gen_range(
        GAMEPLAY_TOP + COLLECTIBLE_EDGE_MARGIN
            ..=GAMEPLAY_BOTTOM - COLLECTIBLE_EDGE_MARGIN - COLLECTIBLE_SIZE,
    );
    Vec2::new(x, y)
}
