//! Integration tests for the board renderer.
//!
//! These tests paint complete snapshots, parsed from the service's JSON, and
//! check the resulting frames on both backends.

use catan_render::*;
use pretty_assertions::assert_eq;

/// Standard 19-hex board: every hex within two steps of the origin
fn standard_coords() -> Vec<HexCoord> {
    let mut coords = Vec::new();
    for q in -2_i32..=2 {
        for r in -2_i32..=2 {
            if (q + r).abs() <= 2 {
                coords.push(HexCoord::new(q, r));
            }
        }
    }
    coords
}

fn standard_board_json() -> String {
    let terrains = ["wood", "brick", "ore", "wheat", "sheep"];
    let tokens = [2, 3, 4, 5, 6, 8, 9, 10, 11, 12];
    let tiles: Vec<serde_json::Value> = standard_coords()
        .iter()
        .enumerate()
        .map(|(i, hex)| {
            if hex.q == 0 && hex.r == 0 {
                serde_json::json!({"q": 0, "r": 0, "resource_type": "desert", "number_token": 0})
            } else {
                serde_json::json!({
                    "q": hex.q,
                    "r": hex.r,
                    "resource_type": terrains[i % terrains.len()],
                    "number_token": tokens[i % tokens.len()],
                })
            }
        })
        .collect();

    serde_json::json!({
        "tiles": tiles,
        "edges": [
            {"v1": {"q": 0, "r": 0, "corner": 0}, "v2": {"q": 0, "r": 0, "corner": 1}, "owner": 1},
            {"v1": {"q": 1, "r": 0, "corner": 2}, "v2": {"q": 1, "r": 0, "corner": 3}, "owner": 2},
            {"v1": {"q": -1, "r": 1, "corner": 4}, "v2": {"q": -1, "r": 1, "corner": 5}, "owner": null}
        ],
        "vertices": [
            {"q": 0, "r": 0, "corner_index": 0, "owner": 1, "building": "settlement"},
            {"q": 1, "r": 0, "corner_index": 3, "owner": 2, "building": "city"},
            {"q": 0, "r": -1, "corner_index": 1, "owner": null, "building": null}
        ],
        "bank": {"wood": 19, "brick": 19, "wheat": 19, "sheep": 19, "ore": 19},
        "players": [
            {"pid": 1, "resources": {"wood": 0, "brick": 0}},
            {"pid": 2, "resources": {"wood": 2, "brick": 1}}
        ],
        "current_player": 2
    })
    .to_string()
}

#[test]
fn test_desert_and_wood_scenario() {
    let snapshot = BoardSnapshot::from_json(
        r#"{
            "tiles": [
                {"q": 0, "r": 0, "resource_type": "desert"},
                {"q": 1, "r": 0, "resource_type": "wood", "number_token": 6}
            ],
            "edges": [],
            "vertices": [],
            "bank": {},
            "players": [],
            "current_player": 1
        }"#,
    )
    .unwrap();

    let mut list = DisplayList::new();
    let summary = paint(&mut list, &snapshot);
    assert_eq!(summary.tiles, 2);

    let hexes = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillPolygon { .. }))
        .count();
    assert_eq!(hexes, 2);

    let texts: Vec<(String, Point, Color)> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillText {
                text,
                anchor,
                color,
                ..
            } => Some((text.clone(), *anchor, *color)),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec![("6".to_string(), HexCoord::new(1, 0).center(), Color::RED)]
    );

    let pips = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillCircle { color: Color::RED, .. }))
        .count();
    assert_eq!(pips, 5);
}

#[test]
fn test_standard_board_paints_every_layer() {
    let snapshot = BoardSnapshot::from_json(&standard_board_json()).unwrap();
    let mut list = DisplayList::new();
    let summary = paint(&mut list, &snapshot);

    assert_eq!(
        summary,
        PaintSummary {
            tiles: 19,
            roads: 2,
            buildings: 2,
            skipped: 0,
        }
    );
    assert_eq!(list.line_width(), DEFAULT_LINE_WIDTH);

    // The desert sits at the origin and shows no numeral
    let origin = HexCoord::new(0, 0).center();
    assert!(!list.commands().iter().any(|c| matches!(
        c,
        DrawCommand::FillText { anchor, .. } if *anchor == origin
    )));
}

#[test]
fn test_roads_sit_on_tile_outlines() {
    let snapshot = BoardSnapshot::from_json(&standard_board_json()).unwrap();
    let mut list = DisplayList::new();
    paint(&mut list, &snapshot);

    let outline_points: Vec<Point> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokePolygon { points, .. } => Some(points.clone()),
            _ => None,
        })
        .flatten()
        .collect();

    for command in list.commands() {
        if let DrawCommand::StrokeLine { from, to, .. } = command {
            for end in [from, to] {
                assert!(
                    outline_points.iter().any(|p| p.distance_to(end) < 1e-9),
                    "road end {:?} is off the grid",
                    end
                );
            }
        }
    }
}

#[test]
fn test_shared_vertex_projects_identically_from_each_tile() {
    // The vertex between (0,0), (1,0) and (0,1)
    let a = HexCoord::new(0, 0).corner(Corner::ALL[0]);
    let b = HexCoord::new(1, 0).corner(Corner::ALL[2]);
    let c = HexCoord::new(0, 1).corner(Corner::ALL[4]);
    assert!(a.distance_to(&b) < 1e-9);
    assert!(a.distance_to(&c) < 1e-9);
}

#[test]
fn test_pixmap_paint_is_idempotent() {
    let snapshot = BoardSnapshot::from_json(&standard_board_json()).unwrap();
    let mut surface = PixmapSurface::new(900, 600).unwrap();

    paint(&mut surface, &snapshot);
    let first = surface.data().to_vec();
    paint(&mut surface, &snapshot);

    assert!(first == surface.data(), "second paint changed the canvas");
}

#[test]
fn test_pixmap_layers_buildings_over_roads_over_tiles() {
    let snapshot = BoardSnapshot::from_json(&standard_board_json()).unwrap();
    let mut surface = PixmapSurface::new(900, 600).unwrap();
    paint(&mut surface, &snapshot);

    // Center of player 2's city sits on a road end and three tiles
    let city = HexCoord::new(1, 0).corner(Corner::ALL[3]);
    let pixel = surface.pixel(city.x as u32, city.y as u32).unwrap();
    assert_eq!(pixel, Color::BLUE);

    // Away from its edges the desert shows plain terrain fill
    let desert = HexCoord::new(0, 0).center();
    let pixel = surface
        .pixel(desert.x as u32, (desert.y - 20.0) as u32)
        .unwrap();
    assert_eq!(pixel, Color::from_hex(0xF4A460));
}

#[test]
fn test_info_panel_from_json() {
    let snapshot = BoardSnapshot::from_json(&standard_board_json()).unwrap();
    let panel = InfoPanel::from_snapshot(&snapshot);

    assert_eq!(panel.current_player, "Player 2");
    assert_eq!(panel.bank.len(), 5);
    assert_eq!(
        panel.players[1],
        PanelLine {
            text: "Player 2 - total cards: 3".to_string(),
            emphasized: true,
        }
    );
}

#[test]
fn test_malformed_entities_do_not_block_the_board() {
    let snapshot = BoardSnapshot::from_json(
        r#"{
            "tiles": [
                {"q": 0, "r": 0, "resource_type": "desert"},
                {"q": 1, "r": 0, "resource_type": "wood", "number_token": 6}
            ],
            "edges": [
                {"v1": {"q": 0, "r": 0, "corner": 0}, "v2": {"q": 0, "r": 0, "corner": 5}, "owner": 1},
                {"v1": {"q": 0, "r": 0, "corner": -1}, "v2": {"q": 0, "r": 0, "corner": 1}, "owner": 2}
            ],
            "vertices": [
                {"q": 0, "r": 0, "corner_index": 0, "owner": 1, "building": "settlement"},
                {"q": 1, "r": 0, "corner_index": -1, "owner": 2, "building": true},
                {"q": 1, "r": 0, "corner_index": 3, "owner": 2, "building": 2}
            ],
            "bank": {"wood": 19},
            "players": [{"pid": 1, "resources": {"wood": 1}}],
            "current_player": null
        }"#,
    )
    .unwrap();

    let mut list = DisplayList::new();
    let summary = paint(&mut list, &snapshot);
    assert_eq!(
        summary,
        PaintSummary {
            tiles: 2,
            roads: 1,
            buildings: 2,
            skipped: 2,
        }
    );
    assert_eq!(list.line_width(), DEFAULT_LINE_WIDTH);

    let panel = InfoPanel::from_snapshot(&snapshot);
    assert_eq!(panel.current_player, "Player 0");
    assert_eq!(panel.bank.len(), 1);
}
