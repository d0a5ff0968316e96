//! Roads and buildings.
//!
//! Both are positioned purely through hex corners, so they land exactly on the
//! tile outlines drawn underneath them.

use crate::palette::{player_color, STROKE};
use crate::snapshot::{Edge, Vertex};
use crate::surface::{Rect, Surface, DEFAULT_LINE_WIDTH};

/// Stroke width of a road
pub const ROAD_WIDTH: f64 = 4.0;

/// Side of a settlement marker
pub const SETTLEMENT_SIZE: f64 = 8.0;

/// Side of a city marker
pub const CITY_SIZE: f64 = 12.0;

/// Draw an owned road between its two corners.
///
/// Returns `false` without drawing if the road has no owner or an endpoint
/// names a corner that does not exist. The line width is back at its default
/// when this returns.
pub fn draw_road<S: Surface + ?Sized>(surface: &mut S, edge: &Edge) -> bool {
    let Some(owner) = edge.owner() else {
        return false;
    };
    let (Some(start), Some(end)) = (edge.v1.point(), edge.v2.point()) else {
        return false;
    };

    surface.set_line_width(ROAD_WIDTH);
    surface.stroke_line(start, end, player_color(owner));
    surface.set_line_width(DEFAULT_LINE_WIDTH);
    true
}

/// Draw a settlement or city marker centered on its corner.
///
/// Returns `false` without drawing if nothing owned is built there or the
/// corner does not exist.
pub fn draw_settlement<S: Surface + ?Sized>(surface: &mut S, vertex: &Vertex) -> bool {
    let Some(owner) = vertex.occupant() else {
        return false;
    };
    let Some(point) = vertex.point() else {
        return false;
    };

    let side = if vertex.building.is_city() {
        CITY_SIZE
    } else {
        SETTLEMENT_SIZE
    };
    let square = Rect::centered_square(point, side);
    surface.fill_rect(square, player_color(owner));
    surface.stroke_rect(square, STROKE);
    true
}
