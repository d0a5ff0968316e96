//! Side-panel text: current player, bank contents, per-player card totals and
//! the last dice roll.

use crate::snapshot::{BoardSnapshot, DiceRoll};
use serde::Serialize;
use std::fmt;

/// One line of panel text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelLine {
    pub text: String,
    /// Rendered bold
    pub emphasized: bool,
}

impl PanelLine {
    fn plain(text: String) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }
}

/// Text panels shown next to the board
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InfoPanel {
    pub current_player: String,
    pub bank: Vec<PanelLine>,
    pub players: Vec<PanelLine>,
    /// Last roll result; not part of the snapshot, so rebuilds leave it alone
    pub dice: Option<String>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panels for a snapshot, with no dice result
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Self {
        let mut panel = Self::new();
        update_info(&mut panel, snapshot);
        panel
    }

    /// Show the result of a roll
    pub fn show_dice(&mut self, roll: &DiceRoll) {
        self.dice = Some(dice_text(roll));
    }
}

/// Text shown for a dice roll
pub fn dice_text(roll: &DiceRoll) -> String {
    format!("Rolled: {} + {} = {}", roll.dice1, roll.dice2, roll.dice_sum)
}

/// Rebuild the snapshot-derived panels from scratch.
pub fn update_info(panel: &mut InfoPanel, snapshot: &BoardSnapshot) {
    panel.current_player = format!("Player {}", snapshot.current_player);

    panel.bank = snapshot
        .bank
        .iter()
        .map(|(resource, count)| PanelLine::plain(format!("{}: {}", resource, count)))
        .collect();

    panel.players = snapshot
        .players
        .iter()
        .map(|p| PanelLine {
            text: format!("Player {} - total cards: {}", p.pid, p.total_cards()),
            emphasized: p.pid == snapshot.current_player,
        })
        .collect();
}

impl fmt::Display for InfoPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dice) = &self.dice {
            writeln!(f, "{}", dice)?;
        }
        writeln!(f, "Current: {}", self.current_player)?;
        writeln!(f, "Bank")?;
        for line in &self.bank {
            writeln!(f, "  {}", line.text)?;
        }
        writeln!(f, "Players")?;
        for line in &self.players {
            if line.emphasized {
                writeln!(f, "> {}", line.text)?;
            } else {
                writeln!(f, "  {}", line.text)?;
            }
        }
        Ok(())
    }
}
