use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting autotrade bot (paper trading)...");

    let app_state = AppState::new().await?;

    for strategy in app_state.engine.strategies() {
        tracing::info!("Strategy available: {} - {}", strategy.key, strategy.description);
    }

    app_state.engine.start().await?;
    tracing::info!("Bot is running, press Ctrl-C to stop...");

    tokio::signal::ctrl_c().await?;
    app_state.engine.shutdown().await;

    let performance = app_state.engine.performance().await;
    let orders = app_state.venue.orders().await;
    tracing::info!(
        "Session finished: {} orders placed, {} positions still open",
        orders.len(),
        app_state.engine.positions().await.len()
    );
    tracing::info!("Performance: {}", serde_json::to_string_pretty(&performance)?);

    Ok(())
}
