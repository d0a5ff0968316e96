//! State sync: relays actions to the game service and repaints from the
//! snapshot that follows.
//!
//! Every action ends with a full snapshot fetch, so the controller keeps no game
//! state of its own. If a call fails, the canvas and panels keep showing the last
//! snapshot that was painted.

use crate::api::{ClientError, GameService};
use catan_render::{paint, update_info, InfoPanel, PaintSummary, Surface};
use futures_util::future::LocalBoxFuture;
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub struct Controller<G, S> {
    service: G,
    surface: S,
    panel: InfoPanel,
}

impl<G: GameService, S: Surface> Controller<G, S> {
    pub fn new(service: G, surface: S) -> Self {
        Self {
            service,
            surface,
            panel: InfoPanel::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    /// Fetch the current snapshot and repaint the board and panels
    pub async fn refresh(&mut self) -> Result<PaintSummary, ClientError> {
        let snapshot = self.service.board_state().await?;

        let summary = paint(&mut self.surface, &snapshot);
        update_info(&mut self.panel, &snapshot);

        debug!(
            tiles = summary.tiles,
            roads = summary.roads,
            buildings = summary.buildings,
            "Board repainted"
        );
        if summary.skipped > 0 {
            warn!(
                "Skipped {} pieces placed on nonexistent corners",
                summary.skipped
            );
        }
        Ok(summary)
    }

    pub async fn roll(&mut self) -> Result<(), ClientError> {
        let roll = self.service.roll_dice().await?;
        info!("Rolled {} + {} = {}", roll.dice1, roll.dice2, roll.dice_sum);
        self.panel.show_dice(&roll);
        self.refresh().await?;
        Ok(())
    }

    pub async fn advance_turn(&mut self) -> Result<(), ClientError> {
        self.service.next_player().await?;
        self.refresh().await?;
        Ok(())
    }

    pub async fn retreat_turn(&mut self) -> Result<(), ClientError> {
        self.service.prev_player().await?;
        self.refresh().await?;
        Ok(())
    }

    pub async fn reset(&mut self) -> Result<(), ClientError> {
        self.service.reset_board().await?;
        info!("Board reset");
        self.refresh().await?;
        Ok(())
    }
}

/// An async command handler
pub type Handler<G, S> =
    for<'a> fn(&'a mut Controller<G, S>) -> LocalBoxFuture<'a, Result<(), ClientError>>;

/// Maps command names to controller actions, independent of where the
/// commands come from.
pub struct CommandTable<G, S> {
    handlers: HashMap<&'static str, Handler<G, S>>,
}

impl<G: GameService, S: Surface> CommandTable<G, S> {
    /// `roll`, `next`, `prev`, `reset` and `refresh`
    pub fn standard() -> Self {
        let mut table = Self {
            handlers: HashMap::new(),
        };
        table.register("roll", roll::<G, S>);
        table.register("next", advance_turn::<G, S>);
        table.register("prev", retreat_turn::<G, S>);
        table.register("reset", reset::<G, S>);
        table.register("refresh", refresh::<G, S>);
        table
    }

    pub fn register(&mut self, name: &'static str, handler: Handler<G, S>) {
        self.handlers.insert(name, handler);
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run the named command against the controller
    pub async fn dispatch(
        &self,
        name: &str,
        controller: &mut Controller<G, S>,
    ) -> Result<(), ClientError> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| ClientError::UnknownCommand(name.to_string()))?;
        handler(controller).await
    }
}

fn roll<G: GameService, S: Surface>(
    c: &mut Controller<G, S>,
) -> LocalBoxFuture<'_, Result<(), ClientError>> {
    Box::pin(c.roll())
}

fn advance_turn<G: GameService, S: Surface>(
    c: &mut Controller<G, S>,
) -> LocalBoxFuture<'_, Result<(), ClientError>> {
    Box::pin(c.advance_turn())
}

fn retreat_turn<G: GameService, S: Surface>(
    c: &mut Controller<G, S>,
) -> LocalBoxFuture<'_, Result<(), ClientError>> {
    Box::pin(c.retreat_turn())
}

fn reset<G: GameService, S: Surface>(
    c: &mut Controller<G, S>,
) -> LocalBoxFuture<'_, Result<(), ClientError>> {
    Box::pin(c.reset())
}

fn refresh<G: GameService, S: Surface>(
    c: &mut Controller<G, S>,
) -> LocalBoxFuture<'_, Result<(), ClientError>> {
    Box::pin(async move { c.refresh().await.map(|_| ()) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BOARD_STATE, NEXT_PLAYER, PREV_PLAYER, RESET_BOARD, ROLL_DICE};
    use catan_render::{
        BoardSnapshot, DiceRoll, DisplayList, HexCoord, PlayerSummary, Terrain, Tile,
    };
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;

    /// In-memory stand-in for the game service
    #[derive(Default)]
    struct FakeService {
        snapshot: RefCell<BoardSnapshot>,
        calls: RefCell<Vec<&'static str>>,
        roll: Cell<Option<DiceRoll>>,
        offline: Cell<bool>,
    }

    impl FakeService {
        fn record(&self, path: &'static str) -> Result<(), ClientError> {
            self.calls.borrow_mut().push(path);
            if self.offline.get() {
                return Err(ClientError::Status {
                    path,
                    status: StatusCode::SERVICE_UNAVAILABLE,
                });
            }
            Ok(())
        }
    }

    impl GameService for FakeService {
        async fn board_state(&self) -> Result<BoardSnapshot, ClientError> {
            self.record(BOARD_STATE)?;
            Ok(self.snapshot.borrow().clone())
        }

        async fn roll_dice(&self) -> Result<DiceRoll, ClientError> {
            self.record(ROLL_DICE)?;
            Ok(self.roll.get().unwrap_or(DiceRoll {
                dice1: 1,
                dice2: 1,
                dice_sum: 2,
            }))
        }

        async fn next_player(&self) -> Result<(), ClientError> {
            self.record(NEXT_PLAYER)
        }

        async fn prev_player(&self) -> Result<(), ClientError> {
            self.record(PREV_PLAYER)
        }

        async fn reset_board(&self) -> Result<(), ClientError> {
            self.record(RESET_BOARD)
        }
    }

    fn snapshot(current_player: i32) -> BoardSnapshot {
        BoardSnapshot {
            tiles: vec![
                Tile::new(HexCoord::new(0, 0), Terrain::Desert, None),
                Tile::new(HexCoord::new(1, 0), Terrain::Wood, Some(6)),
            ],
            players: vec![
                PlayerSummary {
                    pid: 1,
                    resources: BTreeMap::new(),
                },
                PlayerSummary {
                    pid: 2,
                    resources: BTreeMap::from([("wood".to_string(), 2), ("brick".to_string(), 1)]),
                },
            ],
            current_player,
            ..Default::default()
        }
    }

    fn controller(service: FakeService) -> Controller<FakeService, DisplayList> {
        Controller::new(service, DisplayList::new())
    }

    #[tokio::test]
    async fn test_refresh_paints_snapshot() {
        let service = FakeService::default();
        *service.snapshot.borrow_mut() = snapshot(1);
        let mut controller = controller(service);

        let summary = controller.refresh().await.unwrap();
        assert_eq!(summary.tiles, 2);
        assert!(!controller.surface().commands().is_empty());
        assert_eq!(controller.panel().current_player, "Player 1");
    }

    #[tokio::test]
    async fn test_roll_shows_dice_then_repaints() {
        let service = FakeService::default();
        service.roll.set(Some(DiceRoll {
            dice1: 3,
            dice2: 4,
            dice_sum: 7,
        }));
        *service.snapshot.borrow_mut() = snapshot(2);
        let mut controller = controller(service);

        controller.roll().await.unwrap();

        assert_eq!(controller.panel().dice.as_deref(), Some("Rolled: 3 + 4 = 7"));
        assert_eq!(
            *controller.service.calls.borrow(),
            vec![ROLL_DICE, BOARD_STATE]
        );
        let line = &controller.panel().players[1];
        assert_eq!(line.text, "Player 2 - total cards: 3");
        assert!(line.emphasized);
    }

    #[tokio::test]
    async fn test_turn_actions_refetch_snapshot() {
        let mut controller = controller(FakeService::default());

        controller.advance_turn().await.unwrap();
        controller.retreat_turn().await.unwrap();
        controller.reset().await.unwrap();

        assert_eq!(
            *controller.service.calls.borrow(),
            vec![
                NEXT_PLAYER,
                BOARD_STATE,
                PREV_PLAYER,
                BOARD_STATE,
                RESET_BOARD,
                BOARD_STATE
            ]
        );
    }

    #[tokio::test]
    async fn test_each_refresh_shows_latest_snapshot() {
        let service = FakeService::default();
        *service.snapshot.borrow_mut() = snapshot(1);
        let mut controller = controller(service);
        controller.refresh().await.unwrap();

        *controller.service.snapshot.borrow_mut() = snapshot(2);
        controller.advance_turn().await.unwrap();

        assert_eq!(controller.panel().current_player, "Player 2");
    }

    #[tokio::test]
    async fn test_failed_call_keeps_last_frame() {
        let service = FakeService::default();
        *service.snapshot.borrow_mut() = snapshot(1);
        let mut controller = controller(service);
        controller.refresh().await.unwrap();

        let frame = controller.surface().clone();
        let panel = controller.panel().clone();

        controller.service.offline.set(true);
        *controller.service.snapshot.borrow_mut() = BoardSnapshot::default();
        let err = controller.roll().await.unwrap_err();

        assert!(matches!(err, ClientError::Status { path: ROLL_DICE, .. }));
        assert_eq!(controller.surface(), &frame);
        assert_eq!(controller.panel(), &panel);
    }

    #[tokio::test]
    async fn test_dispatch_table() {
        let table = CommandTable::standard();
        assert_eq!(table.names(), vec!["next", "prev", "refresh", "reset", "roll"]);

        let mut controller = controller(FakeService::default());
        table.dispatch("next", &mut controller).await.unwrap();
        table.dispatch("refresh", &mut controller).await.unwrap();
        assert_eq!(
            *controller.service.calls.borrow(),
            vec![NEXT_PLAYER, BOARD_STATE, BOARD_STATE]
        );
    }

    #[tokio::test]
    async fn test_unknown_command_touches_nothing() {
        let table = CommandTable::standard();
        let mut controller = controller(FakeService::default());

        let err = table.dispatch("build", &mut controller).await.unwrap_err();
        assert!(matches!(err, ClientError::UnknownCommand(ref name) if name == "build"));
        assert!(controller.service.calls.borrow().is_empty());
    }
}
