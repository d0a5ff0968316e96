//! Board snapshot model, as served by the game-state service.
//!
//! This module contains:
//! - `BoardSnapshot`, the full state needed to paint one frame
//! - Tile, road edge and building vertex records
//! - Player and bank summaries
//! - The dice roll result
//!
//! Snapshots are read-only: the renderer paints one and throws it away. Fields
//! that are missing or carry unexpected values deserialize to defaults so a
//! partial snapshot still paints.

use crate::geometry::{Corner, HexCoord, Point};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Player identifier (1-4 in a standard game)
pub type PlayerId = i32;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Malformed board snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Terrain of a hex tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Terrain {
    Wood,
    Brick,
    Ore,
    Wheat,
    Sheep,
    /// Produces nothing and never carries a number token
    Desert,
    /// Any terrain name this client does not know about
    #[default]
    Unknown,
}

impl Terrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Wood => "wood",
            Terrain::Brick => "brick",
            Terrain::Ore => "ore",
            Terrain::Wheat => "wheat",
            Terrain::Sheep => "sheep",
            Terrain::Desert => "desert",
            Terrain::Unknown => "unknown",
        }
    }

    /// Whether tiles of this terrain can show a production number
    pub fn is_productive(&self) -> bool {
        !matches!(self, Terrain::Desert)
    }
}

impl From<Option<String>> for Terrain {
    fn from(name: Option<String>) -> Self {
        match name.as_deref() {
            Some("wood") => Terrain::Wood,
            Some("brick") => Terrain::Brick,
            Some("ore") => Terrain::Ore,
            Some("wheat") => Terrain::Wheat,
            Some("sheep") => Terrain::Sheep,
            Some("desert") => Terrain::Desert,
            _ => Terrain::Unknown,
        }
    }
}

impl From<Terrain> for String {
    fn from(terrain: Terrain) -> Self {
        terrain.as_str().to_string()
    }
}

/// A single hex tile on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Position on the hex grid
    #[serde(flatten)]
    pub coord: HexCoord,
    /// Terrain, which decides the fill color
    #[serde(default)]
    pub resource_type: Terrain,
    /// Dice number that triggers production (2-12; absent or 0 for desert)
    #[serde(default, deserialize_with = "or_default")]
    pub number_token: Option<i32>,
}

impl Tile {
    pub fn new(coord: HexCoord, resource_type: Terrain, number_token: Option<i32>) -> Self {
        Self {
            coord,
            resource_type,
            number_token,
        }
    }

    /// The number token to display, if this tile shows one
    pub fn visible_token(&self) -> Option<i32> {
        if !self.resource_type.is_productive() {
            return None;
        }
        self.number_token.filter(|&n| n > 0)
    }
}

/// One end of a road: a corner of some hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEndpoint {
    pub q: i32,
    pub r: i32,
    /// Raw corner index, validated when the road is drawn
    #[serde(default = "no_corner", deserialize_with = "raw_corner")]
    pub corner: i64,
}

impl EdgeEndpoint {
    pub const fn new(q: i32, r: i32, corner: i64) -> Self {
        Self { q, r, corner }
    }

    /// Pixel position, or `None` if the corner index is out of range
    pub fn point(&self) -> Option<Point> {
        Corner::try_from(self.corner)
            .ok()
            .map(|c| HexCoord::new(self.q, self.r).corner(c))
    }
}

/// A road slot between two corners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub v1: EdgeEndpoint,
    pub v2: EdgeEndpoint,
    #[serde(default, deserialize_with = "or_default")]
    pub owner: Option<PlayerId>,
}

impl Edge {
    /// Owner of the road, if one has been built
    pub fn owner(&self) -> Option<PlayerId> {
        effective_owner(self.owner)
    }
}

/// What's built on a vertex.
///
/// The service has sent both a plain flag and a tier name over time, so both
/// forms are accepted. Anything else is kept as-is and judged by truthiness.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Building {
    /// Nothing built
    #[default]
    Empty,
    Flag(bool),
    Tier(String),
    Other(serde_json::Value),
}

impl Building {
    pub fn is_built(&self) -> bool {
        match self {
            Building::Empty => false,
            Building::Flag(built) => *built,
            Building::Tier(name) => !name.is_empty(),
            Building::Other(value) => is_truthy(value),
        }
    }

    pub fn is_city(&self) -> bool {
        matches!(self, Building::Tier(name) if name.eq_ignore_ascii_case("city"))
    }
}

/// A building slot at a hex corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(flatten)]
    pub coord: HexCoord,
    /// Raw corner index, validated when the building is drawn
    #[serde(default = "no_corner", deserialize_with = "raw_corner")]
    pub corner_index: i64,
    #[serde(default, deserialize_with = "or_default")]
    pub owner: Option<PlayerId>,
    #[serde(default)]
    pub building: Building,
}

impl Vertex {
    /// Pixel position, or `None` if the corner index is out of range
    pub fn point(&self) -> Option<Point> {
        Corner::try_from(self.corner_index)
            .ok()
            .map(|c| self.coord.corner(c))
    }

    /// Owner of the building, if something is built and owned
    pub fn occupant(&self) -> Option<PlayerId> {
        effective_owner(self.owner).filter(|_| self.building.is_built())
    }
}

/// Per-player card counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub pid: PlayerId,
    #[serde(default)]
    pub resources: BTreeMap<String, i64>,
}

impl PlayerSummary {
    /// Total number of resource cards held
    pub fn total_cards(&self) -> i64 {
        self.resources.values().sum()
    }
}

/// Complete board state for one paint cycle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub bank: BTreeMap<String, i64>,
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
    #[serde(default, deserialize_with = "or_default")]
    pub current_player: PlayerId,
}

impl BoardSnapshot {
    /// Parse a snapshot from the service's JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of a dice roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub dice1: i32,
    pub dice2: i32,
    pub dice_sum: i32,
}

/// Zero is how the service spells "nobody".
fn effective_owner(owner: Option<PlayerId>) -> Option<PlayerId> {
    owner.filter(|&pid| pid != 0)
}

/// Stands in for a corner index that is missing or not an integer.
const NO_CORNER: i64 = -1;

fn no_corner() -> i64 {
    NO_CORNER
}

fn raw_corner<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64().unwrap_or(NO_CORNER))
}

/// Decode a field, falling back to its default when the value has the wrong shape.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
