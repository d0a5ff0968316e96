//! Hex tile rendering: terrain fill, outline and the number token.

use crate::geometry::Point;
use crate::palette::{self, ALERT_TOKEN, NEUTRAL_TOKEN, STROKE};
use crate::snapshot::Tile;
use crate::surface::Surface;

/// Font size of the number token
pub const TOKEN_FONT_SIZE: f64 = 14.0;

pub const PIP_RADIUS: f64 = 1.4;

/// Horizontal distance between pip centers
pub const PIP_SPACING: f64 = 5.0;

/// Vertical offset of the pip row below the tile center
pub const PIP_OFFSET_Y: f64 = 8.0;

/// Number of pips shown under a number token.
///
/// Pips count the ways two dice can make the number, less one. 7 has no entry:
/// it never appears on a tile.
pub fn pip_count(token: i32) -> Option<usize> {
    match token {
        2 | 12 => Some(1),
        3 | 11 => Some(2),
        4 | 10 => Some(3),
        5 | 9 => Some(4),
        6 | 8 => Some(5),
        _ => None,
    }
}

/// Color of the numeral and pips; 6 and 8 stand out as the likeliest rolls
pub fn token_color(token: i32) -> palette::Color {
    if token == 6 || token == 8 {
        ALERT_TOKEN
    } else {
        NEUTRAL_TOKEN
    }
}

/// Draw one hex with its terrain and, if it has one, its number token
pub fn draw_tile<S: Surface + ?Sized>(surface: &mut S, tile: &Tile) {
    let corners = tile.coord.corners();
    surface.fill_polygon(&corners, palette::terrain_color(tile.resource_type));
    surface.stroke_polygon(&corners, STROKE);

    let Some(token) = tile.visible_token() else {
        return;
    };
    let Some(pips) = pip_count(token) else {
        return;
    };

    let center = tile.coord.center();
    let color = token_color(token);
    surface.fill_text(&token.to_string(), center, TOKEN_FONT_SIZE, color);

    for pip in pip_positions(center, pips) {
        surface.fill_circle(pip, PIP_RADIUS, color);
    }
}

/// Pip centers: an evenly spaced row centered under the numeral
fn pip_positions(center: Point, pips: usize) -> impl Iterator<Item = Point> {
    let start_x = center.x - (pips.saturating_sub(1) as f64 * PIP_SPACING) / 2.0;
    (0..pips).map(move |i| Point::new(start_x + i as f64 * PIP_SPACING, center.y + PIP_OFFSET_Y))
}
