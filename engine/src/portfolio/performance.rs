//! Performance summary derived from the trade history

use serde::Serialize;

use crate::portfolio::TradeRecord;

/// Realized results over the retained history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Buys and sells
    pub total_trades: usize,
    /// Sells, i.e. round trips closed
    pub closed_trades: usize,
    pub winning_trades: usize,
    /// Sum of realized profit percentages
    pub total_profit_percent: f64,
    /// Winning sells as a percentage of all sells
    pub win_rate: f64,
    pub avg_profit_percent: f64,
}

impl Performance {
    pub fn from_history<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TradeRecord>,
    {
        let mut summary = Self::default();

        for record in records {
            summary.total_trades += 1;
            if let Some(profit) = record.profit_percent {
                summary.closed_trades += 1;
                summary.total_profit_percent += profit;
                if profit > 0.0 {
                    summary.winning_trades += 1;
                }
            }
        }

        if summary.closed_trades > 0 {
            let closed = summary.closed_trades as f64;
            summary.win_rate = (summary.winning_trades as f64 / closed) * 100.0;
            summary.avg_profit_percent = summary.total_profit_percent / closed;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    #[test]
    fn test_empty_history() {
        let history: Vec<TradeRecord> = Vec::new();
        assert_eq!(Performance::from_history(&history), Performance::default());
    }

    #[test]
    fn test_summary() {
        let kind = StrategyKind::MeanReversion;
        let history = vec![
            TradeRecord::sell("BTC_KRW", 110.0, 1.0, 10.0, kind),
            TradeRecord::buy("BTC_KRW", 100.0, 1.0, kind),
            TradeRecord::sell("ETH_KRW", 95.0, 1.0, -5.0, kind),
            TradeRecord::buy("ETH_KRW", 100.0, 1.0, kind),
        ];

        let summary = Performance::from_history(&history);
        assert_eq!(summary.total_trades, 4);
        assert_eq!(summary.closed_trades, 2);
        assert_eq!(summary.winning_trades, 1);
        assert_eq!(summary.total_profit_percent, 5.0);
        assert_eq!(summary.win_rate, 50.0);
        assert_eq!(summary.avg_profit_percent, 2.5);
    }
}
