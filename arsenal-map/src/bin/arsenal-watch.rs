//! arsenal-watch - follow the live seat map from a terminal
//!
//! Connects to the backend named by `ARSENAL_API_URL`, activates a seat
//! map and logs a summary line for every redrawn frame until Ctrl+C.

use arsenal_client::ClientConfig;
use arsenal_map::{MapConfig, Phase, SeatFill, SeatMapView, logger};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger("info", false)?;

    let client = Arc::new(ClientConfig::from_env().build_http_client()?);
    if let (Ok(user), Ok(password)) = (
        std::env::var("ARSENAL_USERNAME"),
        std::env::var("ARSENAL_PASSWORD"),
    ) {
        client.login(&user, &password).await?;
    } else if client.session().is_logged_in() {
        // Token came from ARSENAL_API_TOKEN; fetch the profile it belongs to
        let user = client.verify().await?;
        tracing::info!(user_id = user.id, "Token accepted");
    }

    let view = SeatMapView::new(client.clone(), client, MapConfig::from_env());
    let mut frames = view.frames();

    if view.activate().await? == Phase::Error {
        anyhow::bail!("could not load the arsenal");
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = frames.borrow_and_update().clone();
                let mine = frame
                    .scene
                    .seats
                    .iter()
                    .filter(|s| s.fill == SeatFill::Mine)
                    .count();
                tracing::info!(
                    revision = frame.revision,
                    seats = frame.scene.seat_count(),
                    available = view.available_count(),
                    occupied = view.occupied_count(),
                    mine,
                    scale = frame.viewport.scale,
                    "Frame"
                );
            }
        }
    }

    view.deactivate();
    Ok(())
}
