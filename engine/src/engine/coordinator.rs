//! Execution Coordinator - evaluates one instrument and trades on the result

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::data::{Candle, SnapshotStore};
use crate::engine::{PassContext, SharedState};
use crate::error::{EngineError, Result};
use crate::exchange::{MarketFeed, Order, OrderSide, TradingVenue};
use crate::indicators::IndicatorSet;
use crate::portfolio::{Position, RiskManager, TradeRecord};
use crate::strategy::{Strategy, StrategyKind};

/// Runs the evaluate-then-trade cycle for a single instrument
///
/// The ledger is only touched after the venue confirms a fill, and only while
/// the session is still trading.
pub struct ExecutionCoordinator {
    state: SharedState,
    snapshots: SnapshotStore,
    feed: Arc<dyn MarketFeed>,
    venue: Arc<dyn TradingVenue>,
}

impl ExecutionCoordinator {
    pub fn new(
        state: SharedState,
        snapshots: SnapshotStore,
        feed: Arc<dyn MarketFeed>,
        venue: Arc<dyn TradingVenue>,
    ) -> Self {
        Self {
            state,
            snapshots,
            feed,
            venue,
        }
    }

    /// Evaluate `instrument` and place at most one order
    ///
    /// Returns the trade that was recorded, if any.
    pub async fn execute(
        &self,
        instrument: &str,
        ctx: &PassContext,
    ) -> Result<Option<TradeRecord>> {
        let Some(snapshot) = self.snapshots.get(instrument).await else {
            debug!("⏭️ {}: no market snapshot yet, skipping", instrument);
            return Ok(None);
        };

        let candles = self
            .feed
            .recent_candles(instrument, ctx.candle_lookback)
            .await
            .map_err(|e| EngineError::feed(instrument, e))?;
        let indicators = IndicatorSet::compute(&candles);

        self.evaluate(instrument, &snapshot.candle, &indicators, ctx)
            .await
    }

    /// Decide on `candle` with precomputed `indicators` and trade on the result
    pub async fn evaluate(
        &self,
        instrument: &str,
        candle: &Candle,
        indicators: &IndicatorSet,
        ctx: &PassContext,
    ) -> Result<Option<TradeRecord>> {
        let Some(strategy) = ctx.strategy else {
            return Ok(None);
        };

        let price = candle.close;
        if !price.is_finite() || price <= 0.0 {
            return Err(EngineError::feed(
                instrument,
                format!("invalid price {}", price),
            ));
        }

        let (position, open_positions) = {
            let state = self.state.read().await;
            (
                state.ledger.position(instrument).cloned(),
                state.ledger.open_positions(),
            )
        };

        let risk = RiskManager::new(&ctx.settings);

        match position {
            None => {
                if !strategy.should_enter(candle, indicators) {
                    return Ok(None);
                }
                if !risk.can_open_position(open_positions) {
                    info!(
                        "⚠️ {}: buy signal ignored, {} positions already open (max {})",
                        instrument, open_positions, ctx.settings.max_positions
                    );
                    return Ok(None);
                }
                let quantity = ctx.settings.allocation_per_instrument(ctx.instruments.len()) / price;
                self.buy(instrument, price, quantity, strategy).await
            }
            Some(position) => {
                self.mark(instrument, price).await?;

                if !strategy.should_exit(candle, indicators, &position) {
                    return Ok(None);
                }
                self.sell(instrument, price, &position, strategy).await
            }
        }
    }

    async fn buy(
        &self,
        instrument: &str,
        price: f64,
        quantity: f64,
        strategy: StrategyKind,
    ) -> Result<Option<TradeRecord>> {
        let order = self.venue.submit_buy(instrument, price, quantity).await;
        let order = confirmed(instrument, OrderSide::Buy, order)?;

        let record = TradeRecord::buy(instrument, price, quantity, strategy);

        let mut state = self.state.write().await;
        if !state.is_trading {
            warn!(
                "🛑 {}: buy order {} filled after trading stopped, not recorded",
                instrument, order.id
            );
            return Ok(None);
        }
        state.ledger.open_position(instrument, &record)?;
        state.ledger.append_trade(record.clone());

        info!(
            "✅ BUY {} @ {:.2}, qty {:.8} ({})",
            instrument, price, quantity, strategy
        );
        Ok(Some(record))
    }

    async fn sell(
        &self,
        instrument: &str,
        price: f64,
        position: &Position,
        strategy: StrategyKind,
    ) -> Result<Option<TradeRecord>> {
        let order = self
            .venue
            .submit_sell(instrument, price, position.quantity)
            .await;
        let order = confirmed(instrument, OrderSide::Sell, order)?;

        let mut state = self.state.write().await;
        if !state.is_trading {
            warn!(
                "🛑 {}: sell order {} filled after trading stopped, not recorded",
                instrument, order.id
            );
            return Ok(None);
        }
        let closed = state.ledger.close_position(instrument)?;
        let profit = closed.profit_percent(price);
        let record = TradeRecord::sell(instrument, price, closed.quantity, profit, strategy);
        state.ledger.append_trade(record.clone());

        info!(
            "✅ SELL {} @ {:.2} ({:+.2}%) ({})",
            instrument, price, profit, strategy
        );
        Ok(Some(record))
    }

    async fn mark(&self, instrument: &str, price: f64) -> Result<()> {
        let mut state = self.state.write().await;
        if state.is_trading {
            state.ledger.mark_position(instrument, price)?;
        }
        Ok(())
    }
}

/// Map a venue response onto the error taxonomy; only a fill confirms
fn confirmed(instrument: &str, side: OrderSide, order: anyhow::Result<Order>) -> Result<Order> {
    let rejection = |reason: String| EngineError::VenueRejection {
        instrument: instrument.to_string(),
        side,
        reason,
    };

    match order {
        Ok(order) if order.is_filled() => Ok(order),
        Ok(order) => Err(rejection(
            order.reason.unwrap_or_else(|| format!("{:?}", order.status)),
        )),
        Err(e) => Err(rejection(e.to_string())),
    }
}
