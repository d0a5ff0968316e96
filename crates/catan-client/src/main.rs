//! Kopiatan board viewer client.
//!
//! Paints the board served by the game-state service into a PNG and relays
//! commands typed on stdin (`roll`, `next`, `prev`, `reset`, `refresh`).
//!
//! Each command finishes, including its refetch, before the next line is read,
//! so the frame on disk is always the last completed refresh.

use catan_render::PixmapSurface;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod controller;

use api::{GameService, HttpGameService};
use config::ClientConfig;
use controller::{CommandTable, Controller};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    info!("Using game service at {}", config.api_url);

    let surface = PixmapSurface::new(config.canvas_width, config.canvas_height)?;
    let mut controller = Controller::new(HttpGameService::new(&config.api_url), surface);
    let commands = CommandTable::standard();

    match controller.refresh().await {
        Ok(_) => present(&controller, &config),
        Err(e) => error!("Initial load failed: {}", e),
    }

    println!("Commands: {} (quit to exit)", commands.names().join(", "));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let name = line.trim();
        match name {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        match commands.dispatch(name, &mut controller).await {
            Ok(()) => present(&controller, &config),
            Err(e) => error!("{} failed: {}", name, e),
        }
    }

    Ok(())
}

/// Write the latest frame to disk and print the side panels
fn present<G: GameService>(controller: &Controller<G, PixmapSurface>, config: &ClientConfig) {
    let surface = controller.surface();
    match surface.save_png(&config.output) {
        Ok(()) => info!(
            "Wrote {}x{} frame to {}",
            surface.width(),
            surface.height(),
            config.output.display()
        ),
        Err(e) => error!("Could not save frame: {}", e),
    }
    print!("{}", controller.panel());
}
