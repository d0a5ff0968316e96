//! Hex coordinate system and the axial-to-pixel projection.
//!
//! This module provides the coordinate types used by every renderer:
//! - `HexCoord`: Identifies individual hex tiles in axial coordinates
//! - `Corner`: Identifies one of the six corners of a hex
//! - `Point`: A position on the canvas in pixels
//!
//! Tiles, roads and buildings never share a vertex data structure. They line up
//! because they all derive their points from the same `(q, r, corner)` projection.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Radius of a hex in pixels (center to corner)
pub const HEX_SIZE: f64 = 40.0;

/// Pixel x of the hex at (0, 0)
pub const CENTER_X: f64 = 450.0;

/// Pixel y of the hex at (0, 0)
pub const CENTER_Y: f64 = 300.0;

/// Corner angles in clockwise screen order (y grows downward).
const CORNER_ANGLES: [f64; 6] = [
    PI / 6.0,        // 0 (lower right)
    PI / 2.0,        // 1 (bottom)
    5.0 * PI / 6.0,  // 2 (lower left)
    7.0 * PI / 6.0,  // 3 (upper left)
    3.0 * PI / 2.0,  // 4 (top)
    11.0 * PI / 6.0, // 5 (upper right)
];

/// A position on the canvas, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One of the six corners of a hex.
///
/// Corner indices arrive over the wire as plain integers, so construction is
/// fallible and everything downstream can rely on the index being in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner(u8);

impl Corner {
    /// All corners in index order
    pub const ALL: [Corner; 6] = [
        Corner(0),
        Corner(1),
        Corner(2),
        Corner(3),
        Corner(4),
        Corner(5),
    ];

    /// Validate a raw corner index
    pub const fn new(index: u8) -> Option<Self> {
        if index < 6 {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Angle of this corner, measured from the positive x axis
    pub fn angle(&self) -> f64 {
        CORNER_ANGLES[self.0 as usize]
    }
}

impl TryFrom<i64> for Corner {
    type Error = i64;

    /// Validate a wire index, handing back the raw value when it is out of range
    fn try_from(index: i64) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(Corner::new)
            .ok_or(index)
    }
}

/// Axial coordinate for hex grid.
///
/// `q` increases going east (right), `r` increases going southeast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Pixel position of the hex center
    pub fn center(&self) -> Point {
        project(self.q, self.r, None)
    }

    /// Pixel position of one corner
    pub fn corner(&self, corner: Corner) -> Point {
        project(self.q, self.r, Some(corner))
    }

    /// All six corners, in index order
    pub fn corners(&self) -> [Point; 6] {
        Corner::ALL.map(|c| self.corner(c))
    }
}

/// Project an axial coordinate (and optionally one of its corners) to pixels.
///
/// Rows are spaced at three quarters of the hex height and shifted half a
/// width per row.
pub fn project(q: i32, r: i32, corner: Option<Corner>) -> Point {
    let size = HEX_SIZE;
    let width = size * 3.0_f64.sqrt();
    let height = size * 2.0;

    let x = CENTER_X + width * (q as f64 + r as f64 / 2.0);
    let y = CENTER_Y + height * (r as f64 * 3.0 / 4.0);

    match corner {
        None => Point::new(x, y),
        Some(corner) => {
            let angle = corner.angle();
            Point::new(x + size * angle.cos(), y + size * angle.sin())
        }
    }
}
