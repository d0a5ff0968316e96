//! A surface that records draw commands instead of rasterizing them.
//!
//! The browser build replays the recorded list onto an HTML canvas, and tests
//! use it to check what was drawn and in which order.

use crate::geometry::Point;
use crate::palette::Color;
use crate::surface::{Rect, Surface, DEFAULT_LINE_WIDTH};
use serde::Serialize;

/// One recorded drawing operation. Strokes carry the line width in effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillPolygon {
        points: Vec<Point>,
        color: Color,
    },
    StrokePolygon {
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    FillText {
        text: String,
        anchor: Point,
        size: f64,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    line_width: f64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Commands recorded since the last clear, in paint order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Serialize the commands for replay in the browser
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
            width: self.line_width,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            width: self.line_width,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            width: self.line_width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Point, size: f64, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            anchor,
            size,
            color,
        });
    }
}
