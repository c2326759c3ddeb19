use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Holding;

/// Aggregate statistics over all holdings, recomputed in full on every
/// store change. Performers are `None` when the store is empty.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct PortfolioMetrics {
    total_value: Decimal,
    total_gain_loss: Decimal,
    top_performer: Option<Holding>,
    worst_performer: Option<Holding>,
}

impl Default for PortfolioMetrics {
    fn default() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO, None, None)
    }
}
