//! HTTP contract of the game-state service.
//!
//! The service owns the game; this client only reads snapshots and asks for
//! actions. Acknowledgement bodies are awaited and otherwise ignored.

use catan_render::{BoardSnapshot, DiceRoll};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub const BOARD_STATE: &str = "/api/getBoardState";
pub const ROLL_DICE: &str = "/api/rollDice";
pub const NEXT_PLAYER: &str = "/api/nextPlayer";
pub const PREV_PLAYER: &str = "/api/prevPlayer";
pub const RESET_BOARD: &str = "/api/resetBoard";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned HTTP {status}")]
    Status {
        path: &'static str,
        status: StatusCode,
    },

    #[error("Invalid response from {path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// The remote authority that owns the game state.
#[allow(async_fn_in_trait)]
pub trait GameService {
    async fn board_state(&self) -> Result<BoardSnapshot, ClientError>;

    async fn roll_dice(&self) -> Result<DiceRoll, ClientError>;

    async fn next_player(&self) -> Result<(), ClientError>;

    async fn prev_player(&self) -> Result<(), ClientError>;

    async fn reset_board(&self) -> Result<(), ClientError>;
}

/// `GameService` over HTTP
#[derive(Debug, Clone)]
pub struct HttpGameService {
    client: Client,
    base_url: String,
}

impl HttpGameService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|source| ClientError::Transport { path, source })?;
        decode(path, response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ClientError> {
        let response = self
            .client
            .post(self.url(path))
            .send()
            .await
            .map_err(|source| ClientError::Transport { path, source })?;
        decode(path, response).await
    }

    async fn post_ack(&self, path: &'static str) -> Result<(), ClientError> {
        let ack: serde_json::Value = self.post_json(path).await?;
        debug!("{} acknowledged: {}", path, ack);
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(
    path: &'static str,
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status { path, status });
    }
    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::Decode { path, source })
}

impl GameService for HttpGameService {
    async fn board_state(&self) -> Result<BoardSnapshot, ClientError> {
        self.get_json(BOARD_STATE).await
    }

    async fn roll_dice(&self) -> Result<DiceRoll, ClientError> {
        self.post_json(ROLL_DICE).await
    }

    async fn next_player(&self) -> Result<(), ClientError> {
        self.post_ack(NEXT_PLAYER).await
    }

    async fn prev_player(&self) -> Result<(), ClientError> {
        self.post_ack(PREV_PLAYER).await
    }

    async fn reset_board(&self) -> Result<(), ClientError> {
        self.post_ack(RESET_BOARD).await
    }
}
