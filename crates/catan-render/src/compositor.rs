//! Full-board repaint.
//!
//! Every paint starts from a blank canvas and draws the whole snapshot in three
//! layers: tiles, then roads, then buildings. Nothing is carried over between
//! paints, so painting the same snapshot twice gives the same canvas.

use crate::pieces::{draw_road, draw_settlement};
use crate::snapshot::BoardSnapshot;
use crate::surface::Surface;
use crate::tile::draw_tile;

/// What a paint pass drew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintSummary {
    pub tiles: usize,
    pub roads: usize,
    pub buildings: usize,
    /// Owned roads or buildings dropped because they name a nonexistent corner
    pub skipped: usize,
}

/// Repaint the whole board from a snapshot
pub fn paint<S: Surface + ?Sized>(surface: &mut S, snapshot: &BoardSnapshot) -> PaintSummary {
    let mut summary = PaintSummary::default();
    surface.clear();

    for tile in &snapshot.tiles {
        draw_tile(surface, tile);
        summary.tiles += 1;
    }

    for edge in snapshot.edges.iter().filter(|e| e.owner().is_some()) {
        if draw_road(surface, edge) {
            summary.roads += 1;
        } else {
            summary.skipped += 1;
        }
    }

    for vertex in snapshot.vertices.iter().filter(|v| v.occupant().is_some()) {
        if draw_settlement(surface, vertex) {
            summary.buildings += 1;
        } else {
            summary.skipped += 1;
        }
    }

    summary
}
