pub mod holding;
pub mod metrics;

pub use holding::{Holding, HoldingDraft};
pub use metrics::PortfolioMetrics;
