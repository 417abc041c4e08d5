use std::sync::Arc;

use autotrade_engine::prelude::*;

/// Simulated candles generated before the first pass
const WARM_UP_CANDLES: usize = DEFAULT_CANDLE_LOOKBACK;

pub struct AppState {
    pub engine: TradingEngine,
    pub venue: Arc<PaperVenue>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let config = EngineConfig::from_env()?;
        tracing::info!(
            "Loaded configuration: strategy={:?}, instruments={:?}",
            config.active_strategy,
            config.selected_instruments
        );

        let feed = Arc::new(SimulatedFeed::new());
        for instrument in &config.selected_instruments {
            feed.warm_up(instrument, WARM_UP_CANDLES).await;
        }
        tracing::info!("Simulated feed warmed up");

        let venue = Arc::new(PaperVenue::new());
        let engine = TradingEngine::new(config, feed, venue.clone());

        Ok(AppState { engine, venue })
    }
}
