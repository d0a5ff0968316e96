//! Color tables for terrain and players.
//!
//! Every lookup has a fallback so a snapshot with unexpected values still paints.

use crate::snapshot::{PlayerId, Terrain};
use serde::{Serialize, Serializer};

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Opaque color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from a `0xRRGGBB` code
    pub const fn from_hex(code: u32) -> Self {
        Self::rgb((code >> 16) as u8, (code >> 8) as u8, code as u8)
    }

    /// `#rrggbb` form, as a canvas fill style
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors serialize as their canvas style string so a display list can be
/// replayed onto a browser canvas as-is.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Outline color for hexes and buildings
pub const STROKE: Color = Color::BLACK;

/// Fill for tiles whose terrain is not recognised
pub const DEFAULT_TILE_FILL: Color = Color::WHITE;

/// Numeral and pip color for the likeliest rolls (6 and 8)
pub const ALERT_TOKEN: Color = Color::RED;

/// Numeral and pip color for every other roll
pub const NEUTRAL_TOKEN: Color = Color::BLACK;

/// Used for owners outside the player table
pub const FALLBACK_PLAYER: Color = Color::GRAY;

/// Fill color for a terrain type
pub fn terrain_color(terrain: Terrain) -> Color {
    match terrain {
        Terrain::Wood => Color::from_hex(0x2D4C1E),
        Terrain::Brick => Color::from_hex(0x8B4513),
        Terrain::Ore => Color::from_hex(0x808080),
        Terrain::Wheat => Color::from_hex(0xFFD700),
        Terrain::Sheep => Color::from_hex(0x90EE90),
        Terrain::Desert => Color::from_hex(0xF4A460),
        Terrain::Unknown => DEFAULT_TILE_FILL,
    }
}

/// Player color for rendering (players are numbered 1 to 4)
pub fn player_color(owner: PlayerId) -> Color {
    match owner {
        1 => Color::RED,
        2 => Color::BLUE,
        3 => Color::GREEN,
        4 => Color::YELLOW,
        _ => FALLBACK_PLAYER,
    }
}
