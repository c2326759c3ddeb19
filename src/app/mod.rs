pub mod app;
pub mod calc;
pub mod form;
pub mod portfolio;
pub mod ui;

pub use app::App;
pub use portfolio::Portfolio;
