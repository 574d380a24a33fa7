//! Taskroast Server
//!
//! Binds the roast pipeline to its production collaborators (Postgres,
//! Gemini, Resend) and serves the scheduled trigger.

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use taskroast_gemini::{GeminiClient, GeminiConfig};
use taskroast_resend::{ResendClient, ResendConfig};
use taskroast_server::config::Config;
use taskroast_server::http;
use taskroast_server::service::RoastService;
use taskroast_server::state::AppState;
use taskroast_server::store::PgStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load config
    let config = Config::from_env()?;
    let addr: SocketAddr = config.bind_addr.parse()?;

    // Connect to Postgres. The pipeline only reads, so a small pool is fine.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // Build collaborators
    let mut gemini_config = GeminiConfig::new(config.gemini_api_key.clone());
    if let Some(model) = &config.gemini_model {
        gemini_config = gemini_config.with_model(model.clone());
    }
    let gemini = GeminiClient::new(gemini_config)?;
    let resend = ResendClient::new(ResendConfig::new(
        config.resend_api_key.clone(),
        config.from_address.clone(),
    ))?;

    let roaster = RoastService::new(
        Arc::new(PgStore::new(pool)),
        Arc::new(gemini),
        Arc::new(resend),
    );

    let state = AppState::new(config.cron_secret.clone(), roaster);
    let router = http::create_router(state);

    info!(addr = %addr, "Starting taskroast server");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
