//! RSVP web server entry point

use rsvp_web::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fixed listening address; the service carries no configuration surface.
const BIND_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("rsvp-web v{}", env!("CARGO_PKG_VERSION"));

    // Template compile errors abort here, before the listener is bound.
    let state = Arc::new(AppState::new()?);
    let app = rsvp_web::build_router(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    tracing::info!("listening on http://{BIND_ADDR}");
    axum::serve(listener, app).await?;

    Ok(())
}
