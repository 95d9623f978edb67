//! AGROMET_RCI - Bulletin Server
//!
//! Serves daily weather, rainfall, seasonal, crop, soil and advice
//! bulletins for the N'ZI and GOH regions of Côte d'Ivoire.

use agromet_backend::{create_app, AppState, Config};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "agromet_server=debug,agromet_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AGROMET_RCI Bulletin Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        seed = config.generator.seed,
        default_days = config.generator.default_days,
        "Synthetic climate generator ready"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Build application
    let app = create_app(AppState::new(config));

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
