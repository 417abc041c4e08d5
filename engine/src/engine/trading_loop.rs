//! Trading loop - drives the coordinator over all selected instruments

use std::collections::BTreeSet;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::config::{EngineConfig, Settings};
use crate::data::SnapshotStore;
use crate::engine::{
    spawn_periodic, EngineState, EngineStatus, ExecutionCoordinator, FeedPoller, PassContext,
    ScheduleHandle, SharedState,
};
use crate::error::{EngineError, Result};
use crate::exchange::{MarketFeed, RecommendationService, TradingVenue};
use crate::portfolio::{Performance, Position, TradeRecord};
use crate::strategy::{Strategy, StrategyInfo, StrategyKind};

/// Outcome of one pass over the selected instruments
#[derive(Debug, Clone, Default)]
pub struct PassReport {
    pub evaluated: usize,
    pub trades: Vec<TradeRecord>,
    pub failures: usize,
}

struct SessionHandles {
    trading: ScheduleHandle,
    feed: ScheduleHandle,
}

impl SessionHandles {
    fn cancel(&self) {
        for handle in [&self.trading, &self.feed] {
            debug!("Cancelling {}", handle.name());
            handle.cancel();
        }
    }

    /// Wait until neither task can touch the state again
    async fn join(self) {
        self.trading.join().await;
        self.feed.join().await;
    }
}

struct Inner {
    state: SharedState,
    coordinator: ExecutionCoordinator,
}

impl Inner {
    async fn run_pass(&self) -> PassReport {
        let mut report = PassReport::default();

        let ctx = {
            let state = self.state.read().await;
            if !state.is_trading {
                return report;
            }
            PassContext::capture(&state.config)
        };

        for instrument in &ctx.instruments {
            if !self.state.read().await.is_trading {
                break;
            }
            report.evaluated += 1;

            let outcome = AssertUnwindSafe(self.coordinator.execute(instrument, &ctx))
                .catch_unwind()
                .await;

            match outcome {
                Ok(Ok(Some(record))) => report.trades.push(record),
                Ok(Ok(None)) => {}
                Ok(Err(e)) if e.is_transient() => {
                    report.failures += 1;
                    warn!("⚠️ {}: {}", instrument, e);
                }
                Ok(Err(e)) => {
                    report.failures += 1;
                    error!("❌ {}: ledger inconsistency: {}", instrument, e);
                }
                Err(_) => {
                    report.failures += 1;
                    error!("❌ {}: evaluation panicked", instrument);
                }
            }
        }

        report
    }

    async fn interval(&self) -> Duration {
        let seconds = self.state.read().await.config.settings.interval_seconds;
        Duration::from_secs(seconds.max(1))
    }
}

/// Session lifecycle: `Idle -> Running -> Idle`
///
/// While running, one pass over every selected instrument starts each
/// `interval_seconds`, and the feed poller refreshes snapshots independently.
pub struct TradingEngine {
    inner: Arc<Inner>,
    snapshots: SnapshotStore,
    poller: FeedPoller,
    recommender: Option<Arc<dyn RecommendationService>>,
    session: Mutex<Option<SessionHandles>>,
}

impl TradingEngine {
    pub fn new(
        config: EngineConfig,
        feed: Arc<dyn MarketFeed>,
        venue: Arc<dyn TradingVenue>,
    ) -> Self {
        let state = EngineState::shared(config);
        let snapshots = SnapshotStore::new();
        let coordinator =
            ExecutionCoordinator::new(state.clone(), snapshots.clone(), feed.clone(), venue);
        let poller = FeedPoller::new(state.clone(), snapshots.clone(), feed);

        Self {
            inner: Arc::new(Inner { state, coordinator }),
            snapshots,
            poller,
            recommender: None,
            session: Mutex::new(None),
        }
    }

    pub fn with_recommendations(mut self, service: Arc<dyn RecommendationService>) -> Self {
        self.recommender = Some(service);
        self
    }

    /// Validate the configuration and start trading; no-op when already running
    ///
    /// A pass left over from a previous session is drained first, so passes of
    /// two sessions never overlap.
    pub async fn start(&self) -> Result<()> {
        let mut session = self.session.lock().await;

        {
            let state = self.inner.state.read().await;
            if state.is_trading {
                return Ok(());
            }
            validate_for_start(&state.config)?;
        }

        if let Some(previous) = session.take() {
            previous.join().await;
        }

        let feed_period = {
            // config may have changed while the previous session drained
            let mut state = self.inner.state.write().await;
            let strategy = validate_for_start(&state.config)?;
            state.is_trading = true;

            info!(
                "🚀 Trading started: strategy={}, instruments={:?}, interval={}s",
                strategy, state.config.selected_instruments, state.config.settings.interval_seconds
            );
            Duration::from_millis(state.config.feed_interval_ms)
        };

        // first pass must not act on snapshots from an earlier session
        self.snapshots.clear().await;
        self.poller.poll_once().await;

        let feed = self.poller.clone().spawn(feed_period);
        let inner = self.inner.clone();
        let trading = spawn_periodic("trading-loop", move || {
            let inner = inner.clone();
            async move {
                let report = inner.run_pass().await;
                if !report.trades.is_empty() || report.failures > 0 {
                    info!(
                        "Pass finished: {} evaluated, {} trades, {} failures",
                        report.evaluated,
                        report.trades.len(),
                        report.failures
                    );
                }
                inner.interval().await
            }
        });

        *session = Some(SessionHandles { trading, feed });
        Ok(())
    }

    /// Stop trading and cancel both timers; no-op when idle
    ///
    /// A pass already running finishes, but nothing it does after this point
    /// reaches the ledger. The next `start` waits for it.
    pub async fn stop(&self) {
        let session = self.session.lock().await;
        if !self.halt().await {
            return;
        }
        if let Some(handles) = session.as_ref() {
            handles.cancel();
        }
    }

    /// Stop and wait for the in-flight pass and poll to drain
    pub async fn shutdown(&self) {
        let mut session = self.session.lock().await;
        self.halt().await;
        if let Some(handles) = session.take() {
            handles.join().await;
        }
    }

    async fn halt(&self) -> bool {
        {
            let mut state = self.inner.state.write().await;
            if !state.is_trading {
                return false;
            }
            state.is_trading = false;
        }
        info!("🛑 Trading stopped");
        true
    }

    /// Run one pass right now, outside the schedule
    pub async fn run_pass(&self) -> PassReport {
        self.inner.run_pass().await
    }

    /// Refresh snapshots right now, outside the schedule
    pub async fn poll_feed(&self) -> usize {
        self.poller.poll_once().await
    }

    pub async fn is_trading(&self) -> bool {
        self.inner.state.read().await.is_trading
    }

    pub async fn status(&self) -> EngineStatus {
        self.inner.state.read().await.status()
    }

    /// Select the strategy for subsequent passes
    pub async fn set_active_strategy(&self, key: &str) -> Result<StrategyKind> {
        let kind: StrategyKind = key.parse()?;
        self.inner.state.write().await.config.active_strategy = Some(kind.key().to_string());
        info!("Active strategy set to {}", kind);
        Ok(kind)
    }

    /// Replace the tracked instruments for subsequent passes
    pub async fn set_selected_instruments<I, S>(&self, instruments: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selected: BTreeSet<String> = instruments.into_iter().map(Into::into).collect();
        if selected.is_empty() {
            return Err(EngineError::config("no instruments selected"));
        }
        self.inner.state.write().await.config.selected_instruments = selected;
        Ok(())
    }

    /// Replace the settings for subsequent passes
    pub async fn update_settings(&self, settings: Settings) -> Result<()> {
        settings.validate()?;
        self.inner.state.write().await.config.settings = settings;
        Ok(())
    }

    pub async fn positions(&self) -> Vec<Position> {
        self.inner.state.read().await.ledger.positions().cloned().collect()
    }

    pub async fn position(&self, instrument: &str) -> Option<Position> {
        self.inner.state.read().await.ledger.position(instrument).cloned()
    }

    /// Trade history, newest first
    pub async fn history(&self) -> Vec<TradeRecord> {
        self.inner.state.read().await.ledger.history().cloned().collect()
    }

    pub async fn performance(&self) -> Performance {
        self.inner.state.read().await.ledger.performance()
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn strategies(&self) -> Vec<StrategyInfo> {
        StrategyKind::catalog()
    }

    /// Instruments suggested by the recommendation service; empty on failure
    pub async fn refresh_recommendations(&self) -> Vec<String> {
        let Some(service) = &self.recommender else {
            return Vec::new();
        };
        match service.recommendations().await {
            Ok(instruments) => instruments,
            Err(e) => {
                warn!("⚠️ Failed to refresh recommendations: {}", e);
                Vec::new()
            }
        }
    }
}

fn validate_for_start(config: &EngineConfig) -> Result<StrategyKind> {
    config.validate().map_err(|e| {
        error!("❌ Failed to start trading: {}", e);
        e
    })
}
