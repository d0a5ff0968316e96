//! The drawing surface every renderer paints onto.
//!
//! A `Surface` is handed explicitly to each draw call instead of living in
//! global state, so the same renderers drive a raster canvas, a recorded display
//! list for the browser, or a test double.

use crate::geometry::Point;
use crate::palette::Color;
use serde::Serialize;

/// Line width every stroke uses unless a renderer widens it temporarily
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// An axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Square of side `side` centered on `center`
    pub fn centered_square(center: Point, side: f64) -> Self {
        Self {
            x: center.x - side / 2.0,
            y: center.y - side / 2.0,
            width: side,
            height: side,
        }
    }
}

/// A 2D canvas.
///
/// Like a browser canvas context, the line width is state: strokes use the
/// current width, and a renderer that changes it must put it back.
pub trait Surface {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Current stroke width
    fn line_width(&self) -> f64;

    fn set_line_width(&mut self, width: f64);

    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Outline a closed polygon
    fn stroke_polygon(&mut self, points: &[Point], color: Color);

    /// Stroke a single segment
    fn stroke_line(&mut self, from: Point, to: Point, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Draw text horizontally centered on `anchor.x` with its baseline at `anchor.y`
    fn fill_text(&mut self, text: &str, anchor: Point, size: f64, color: Color);
}
