use rust_decimal_macros::dec;

use crate::models::HoldingDraft;

/// Seed holdings for a fresh start. Fed through `Portfolio::add` so ids and
/// current prices come from the same path as user-entered holdings.
pub fn sample_drafts() -> Vec<HoldingDraft> {
    vec![
        HoldingDraft::new(String::from("AAPL"), dec!(10), dec!(150.00)),
        HoldingDraft::new(String::from("GOOGL"), dec!(5), dec!(2750.00)),
        HoldingDraft::new(String::from("MSFT"), dec!(15), dec!(305.50)),
        HoldingDraft::new(String::from("AMZN"), dec!(8), dec!(128.25)),
    ]
}
