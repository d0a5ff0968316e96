//! Kopiatan board viewer - hex geometry and canvas rendering
//!
//! This crate turns a board snapshot served by the game-state service into a
//! picture of the board, plus the text shown in the side panels.
//!
//! # Architecture
//!
//! Rendering is stateless: every refresh repaints the whole board from the
//! snapshot it is given. Renderers draw through the [`Surface`] trait, which has
//! two implementations:
//! - [`PixmapSurface`]: a tiny-skia raster canvas, saved as PNG by the native client
//! - [`DisplayList`]: recorded commands, replayed by the browser when built for WebAssembly
//!
//! # Modules
//!
//! - [`geometry`]: Axial hex coordinates and the axial-to-pixel projection
//! - [`snapshot`]: The board snapshot as served over HTTP
//! - [`tile`], [`pieces`]: Tile, road and building renderers
//! - [`compositor`]: Full-board repaint in z-order
//! - [`panel`]: Side-panel text

pub mod compositor;
pub mod display_list;
pub mod geometry;
pub mod palette;
pub mod panel;
pub mod pieces;
pub mod raster;
pub mod snapshot;
pub mod surface;
pub mod tile;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use compositor::{paint, PaintSummary};
pub use display_list::{DisplayList, DrawCommand};
pub use geometry::{project, Corner, HexCoord, Point, CENTER_X, CENTER_Y, HEX_SIZE};
pub use palette::Color;
pub use panel::{dice_text, update_info, InfoPanel, PanelLine};
pub use pieces::{draw_road, draw_settlement};
pub use raster::{PixmapSurface, RenderError};
pub use snapshot::{
    BoardSnapshot, Building, DiceRoll, Edge, EdgeEndpoint, PlayerId, PlayerSummary,
    SnapshotError, Terrain, Tile, Vertex,
};
pub use surface::{Rect, Surface, DEFAULT_LINE_WIDTH};
pub use tile::{draw_tile, pip_count};
