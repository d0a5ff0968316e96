//! Client settings, read from the environment.

use anyhow::{bail, Context};
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_OUTPUT: &str = "board.png";
const DEFAULT_CANVAS_SIZE: (u32, u32) = (900, 600);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the game-state service (`BOARD_API_URL`)
    pub api_url: String,
    /// Where each painted frame is written (`BOARD_OUTPUT`)
    pub output: PathBuf,
    /// Canvas size in pixels (`BOARD_CANVAS_SIZE`, e.g. `900x600`)
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = lookup("BOARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let output = lookup("BOARD_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.into());
        let (canvas_width, canvas_height) = match lookup("BOARD_CANVAS_SIZE") {
            Some(size) => parse_size(&size).context("Invalid BOARD_CANVAS_SIZE")?,
            None => DEFAULT_CANVAS_SIZE,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            output: PathBuf::from(output),
            canvas_width,
            canvas_height,
        })
    }
}

/// Parse `WIDTHxHEIGHT`
fn parse_size(size: &str) -> anyhow::Result<(u32, u32)> {
    let Some((width, height)) = size.trim().split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got {:?}", size);
    };
    let width: u32 = width.parse().with_context(|| format!("bad width {:?}", width))?;
    let height: u32 = height
        .parse()
        .with_context(|| format!("bad height {:?}", height))?;
    if width == 0 || height == 0 {
        bail!("canvas must not be empty");
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ClientConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert_eq!(config.output, PathBuf::from("board.png"));
        assert_eq!((config.canvas_width, config.canvas_height), (900, 600));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BOARD_API_URL", "http://game.local:8000/"),
            ("BOARD_OUTPUT", "/tmp/frame.png"),
            ("BOARD_CANVAS_SIZE", "1200x800"),
        ])
        .unwrap();
        assert_eq!(config.api_url, "http://game.local:8000");
        assert_eq!(config.output, PathBuf::from("/tmp/frame.png"));
        assert_eq!((config.canvas_width, config.canvas_height), (1200, 800));
    }

    #[test]
    fn test_bad_canvas_size() {
        assert!(config(&[("BOARD_CANVAS_SIZE", "wide")]).is_err());
        assert!(config(&[("BOARD_CANVAS_SIZE", "0x600")]).is_err());
        assert!(config(&[("BOARD_CANVAS_SIZE", "900x")]).is_err());
    }
}
