use rust_decimal::Decimal;

use crate::models::{Holding, PortfolioMetrics};

/// Derives the full metrics snapshot from the current holdings. Pure; the
/// store calls it after every mutation rather than patching incrementally.
pub fn portfolio_metrics(holdings: &[Holding]) -> PortfolioMetrics {
    let total_value = holdings
        .iter()
        .fold(Decimal::ZERO, |sum, holding| sum + holding.market_value());

    let total_gain_loss = holdings
        .iter()
        .fold(Decimal::ZERO, |sum, holding| sum + holding.gain_loss());

    // Stable sort, so equal returns keep their insertion order.
    let mut by_performance: Vec<Holding> = holdings.to_vec();
    by_performance.sort_by(|a, b| b.fractional_return().cmp(&a.fractional_return()));

    let top_performer = by_performance.first().cloned();
    let worst_performer = by_performance.last().cloned();

    PortfolioMetrics::new(total_value, total_gain_loss, top_performer, worst_performer)
}
