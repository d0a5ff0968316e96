//! WebAssembly bindings for the board renderer.
//!
//! The browser fetches snapshots itself and hands the JSON over; the returned
//! display list is replayed onto the page's canvas.

use wasm_bindgen::prelude::*;

use crate::compositor::paint;
use crate::display_list::DisplayList;
use crate::panel::{dice_text, InfoPanel};
use crate::snapshot::{BoardSnapshot, DiceRoll};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Paint a snapshot, returning the draw commands as a JSON array
#[wasm_bindgen(js_name = paintBoard)]
pub fn paint_board(snapshot_json: &str) -> Result<String, JsValue> {
    let snapshot = BoardSnapshot::from_json(snapshot_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut list = DisplayList::new();
    paint(&mut list, &snapshot);
    list.to_json()
        .map_err(|e| JsValue::from_str(&format!("Failed to encode display list: {}", e)))
}

/// Side-panel contents for a snapshot, as JSON
#[wasm_bindgen(js_name = infoPanel)]
pub fn info_panel(snapshot_json: &str) -> Result<String, JsValue> {
    let snapshot = BoardSnapshot::from_json(snapshot_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&InfoPanel::from_snapshot(&snapshot))
        .map_err(|e| JsValue::from_str(&format!("Failed to encode panel: {}", e)))
}

/// Dice result line for a roll response
#[wasm_bindgen(js_name = diceText)]
pub fn dice_result_text(dice1: i32, dice2: i32, dice_sum: i32) -> String {
    dice_text(&DiceRoll {
        dice1,
        dice2,
        dice_sum,
    })
}
