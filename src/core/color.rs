use serde::{Deserialize, Serialize};

/// Display color carried by tables and cosmetic identities. Serializes as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GOLD: Rgb = Rgb(255, 215, 0);
    pub const SILVER: Rgb = Rgb(192, 192, 192);
    pub const INDIGO: Rgb = Rgb(75, 0, 130);
}
