//! Raster backend using tiny-skia.
//!
//! Paints into an in-memory RGBA pixmap that can be written out as PNG.

use crate::geometry::Point;
use crate::palette::Color;
use crate::surface::{Rect, Surface, DEFAULT_LINE_WIDTH};
use std::path::Path;
use thiserror::Error;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    Encode(String),
}

/// Seven-segment masks for '0'..='9', bit order: top, upper right, lower right,
/// bottom, lower left, upper left, middle.
const DIGIT_SEGMENTS: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b1111111, // 8
    0b1101111, // 9
];

/// A canvas backed by a tiny-skia pixmap
pub struct PixmapSurface {
    pixmap: Pixmap,
    line_width: f64,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("line_width", &self.line_width)
            .finish()
    }
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidCanvasSize { width, height })?;
        Ok(Self {
            pixmap,
            line_width: DEFAULT_LINE_WIDTH,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw premultiplied RGBA bytes
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Color of a single pixel, if it lies on the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color {
            r: pixel.red(),
            g: pixel.green(),
            b: pixel.blue(),
            a: pixel.alpha(),
        })
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| RenderError::Encode(e.to_string()))
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            width: self.line_width as f32,
            ..Default::default()
        }
    }

    fn stroke_path(&mut self, path: &tiny_skia::Path, color: Color, stroke: &Stroke) {
        self.pixmap
            .stroke_path(path, &paint(color), stroke, Transform::identity(), None);
    }

    /// Draw one seven-segment digit whose bottom-left corner is at (left, bottom)
    fn draw_digit(&mut self, digit: usize, left: f32, bottom: f32, size: f32, color: Color) {
        let w = size * 0.45;
        let h = size * 0.7;
        let mid = bottom - h / 2.0;
        let top = bottom - h;
        let right = left + w;

        let segments = [
            ((left, top), (right, top)),
            ((right, top), (right, mid)),
            ((right, mid), (right, bottom)),
            ((left, bottom), (right, bottom)),
            ((left, mid), (left, bottom)),
            ((left, top), (left, mid)),
            ((left, mid), (right, mid)),
        ];

        let mut pb = PathBuilder::new();
        for (bit, ((x1, y1), (x2, y2))) in segments.iter().enumerate() {
            if DIGIT_SEGMENTS[digit] & (1 << bit) != 0 {
                pb.move_to(*x1, *y1);
                pb.line_to(*x2, *y2);
            }
        }

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: (size / 8.0).max(1.0),
                ..Default::default()
            };
            self.stroke_path(&path, color, &stroke);
        }
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn polygon_path(points: &[Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    pb.finish()
}

fn skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}

impl Surface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if let Some(path) = polygon_path(points) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color) {
        if let Some(path) = polygon_path(points) {
            let stroke = self.stroke();
            self.stroke_path(&path, color, &stroke);
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        if let Some(path) = pb.finish() {
            let stroke = self.stroke();
            self.stroke_path(&path, color, &stroke);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(rect) = skia_rect(rect) {
            self.pixmap
                .fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        if let Some(rect) = skia_rect(rect) {
            let path = PathBuilder::from_rect(rect);
            let stroke = self.stroke();
            self.stroke_path(&path, color, &stroke);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// tiny-skia has no font support, so numerals are drawn as seven-segment
    /// glyphs. Characters other than ASCII digits only take up space.
    fn fill_text(&mut self, text: &str, anchor: Point, size: f64, color: Color) {
        let size = size as f32;
        let advance = size * 0.6;
        let glyph_width = size * 0.45;
        let count = text.chars().count();
        if count == 0 {
            return;
        }

        let total = advance * (count - 1) as f32 + glyph_width;
        let mut left = anchor.x as f32 - total / 2.0;
        for ch in text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                self.draw_digit(digit as usize, left, anchor.y as f32, size, color);
            }
            left += advance;
        }
    }
}
