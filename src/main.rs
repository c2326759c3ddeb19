use anyhow::Result;
use clap::Parser;
use portfolio_dashboard_tui::{
    app::{App, Portfolio},
    data,
    pricing::FixedMarkup,
};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(about = "A terminal-based stock portfolio dashboard")]
struct Args {
    /// Markup percentage the mock price provider adds to the buy price
    #[arg(long, default_value = "10")]
    markup: Decimal,

    /// Start with an empty portfolio instead of the sample holdings
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut portfolio = Portfolio::new(Box::new(FixedMarkup::new(args.markup)));
    if !args.empty {
        for draft in data::sample_drafts() {
            portfolio.add(draft);
        }
    }

    let mut app = App::new(portfolio);
    app.run()?;

    Ok(())
}
