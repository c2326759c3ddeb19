use chrono::Local;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    app::calc,
    models::{Holding, HoldingDraft, PortfolioMetrics},
    pricing::PriceProvider,
};

/// The in-memory holdings store. Every mutation recomputes the metrics
/// snapshot, so readers always see the two in sync.
pub struct Portfolio {
    holdings: Vec<Holding>,
    metrics: PortfolioMetrics,
    pricer: Box<dyn PriceProvider>,
}

impl Portfolio {
    pub fn new(pricer: Box<dyn PriceProvider>) -> Self {
        Self {
            holdings: Vec::new(),
            metrics: PortfolioMetrics::default(),
            pricer,
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn metrics(&self) -> &PortfolioMetrics {
        &self.metrics
    }

    pub fn holding(&self, id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|holding| holding.id() == id)
    }

    /// Appends a new holding with a fresh id and a mock current price.
    pub fn add(&mut self, draft: HoldingDraft) {
        let current_price = self.quote(&draft.symbol, draft.buy_price);
        let holding = Holding::new(
            Uuid::new_v4().to_string(),
            draft.symbol,
            draft.quantity,
            draft.buy_price,
            current_price,
            Local::now(),
        );
        self.holdings.push(holding);
        self.refresh_metrics();
    }

    /// Replaces the editable fields of the matching holding; `id`,
    /// `current_price` and `added_at` carry over. Unknown ids are ignored —
    /// editing a vanished record is not an error.
    pub fn update(&mut self, id: &str, draft: HoldingDraft) {
        let Some(index) = self.holdings.iter().position(|h| h.id() == id) else {
            return;
        };
        self.holdings[index] = self.holdings[index].with_draft(draft);
        self.refresh_metrics();
    }

    /// Deletes the matching holding; unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        let Some(index) = self.holdings.iter().position(|h| h.id() == id) else {
            return;
        };
        self.holdings.remove(index);
        self.refresh_metrics();
    }

    fn quote(&self, symbol: &str, buy_price: Decimal) -> Decimal {
        self.pricer.current_price(symbol, buy_price)
    }

    fn refresh_metrics(&mut self) {
        self.metrics = calc::portfolio_metrics(&self.holdings);
    }
}
