use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One owned position. `id` and `current_price` are fixed at creation;
/// edits replace the remaining fields only.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct Holding {
    id: String,
    symbol: String,
    quantity: Decimal,
    buy_price: Decimal,
    current_price: Decimal,
    added_at: DateTime<Local>,
}

impl Holding {
    pub fn market_value(&self) -> Decimal {
        self.current_price * self.quantity
    }

    pub fn gain_loss(&self) -> Decimal {
        (self.current_price - self.buy_price) * self.quantity
    }

    /// `(current_price - buy_price) / buy_price`. A zero buy price would
    /// make `Decimal` division panic, so it ranks as a zero return instead.
    pub fn fractional_return(&self) -> Decimal {
        if self.buy_price.is_zero() {
            return Decimal::ZERO;
        }
        (self.current_price - self.buy_price) / self.buy_price
    }

    /// Applies an edit, carrying over `id`, `current_price` and `added_at`.
    pub fn with_draft(&self, draft: HoldingDraft) -> Holding {
        Holding::new(
            self.id.clone(),
            draft.symbol,
            draft.quantity,
            draft.buy_price,
            self.current_price,
            self.added_at,
        )
    }
}

/// The editable subset of a holding, as produced by the form.
#[derive(Clone, Debug, PartialEq, new)]
pub struct HoldingDraft {
    pub symbol: String,
    pub quantity: Decimal,
    pub buy_price: Decimal,
}
