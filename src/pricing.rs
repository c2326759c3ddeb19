use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Source of current prices. There is no real feed; implementations quote a
/// price from whatever the caller knows at purchase time.
pub trait PriceProvider {
    fn current_price(&self, symbol: &str, buy_price: Decimal) -> Decimal;
}

/// Mock provider: quotes the buy price plus a fixed percentage markup.
#[derive(Clone, Debug)]
pub struct FixedMarkup {
    markup_percent: Decimal,
}

impl FixedMarkup {
    pub fn new(markup_percent: Decimal) -> Self {
        Self { markup_percent }
    }
}

impl Default for FixedMarkup {
    fn default() -> Self {
        Self::new(dec!(10))
    }
}

impl PriceProvider for FixedMarkup {
    fn current_price(&self, _symbol: &str, buy_price: Decimal) -> Decimal {
        buy_price * (Decimal::ONE + self.markup_percent / dec!(100))
    }
}
