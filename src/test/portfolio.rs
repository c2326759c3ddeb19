#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::app::Portfolio;
    use crate::models::HoldingDraft;
    use crate::pricing::FixedMarkup;

    fn set_portfolio() -> Portfolio {
        let mut portfolio = Portfolio::new(Box::new(FixedMarkup::default()));
        portfolio.add(HoldingDraft::new(String::from("AAPL"), dec!(10), dec!(100)));
        portfolio.add(HoldingDraft::new(String::from("MSFT"), dec!(5), dec!(50)));
        portfolio
    }

    #[test]
    fn add_applies_the_mock_markup() {
        let portfolio = set_portfolio();
        let holding = &portfolio.holdings()[0];

        assert_eq!(*holding.buy_price(), dec!(100));
        assert_eq!(*holding.current_price(), dec!(110));
    }

    #[test]
    fn add_assigns_unique_ids() {
        let mut portfolio = set_portfolio();
        for _ in 0..10 {
            portfolio.add(HoldingDraft::new(String::from("X"), dec!(1), dec!(1)));
        }

        let mut ids: Vec<String> = portfolio
            .holdings()
            .iter()
            .map(|h| h.id().clone())
            .collect();
        let len_before = ids.len();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), len_before);
    }

    #[test]
    fn update_replaces_fields_but_keeps_id_and_price() {
        let mut portfolio = set_portfolio();
        let original = portfolio.holdings()[0].clone();

        portfolio.update(
            original.id(),
            HoldingDraft::new(String::from("TSLA"), dec!(3), dec!(200)),
        );

        let updated = &portfolio.holdings()[0];
        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.current_price(), original.current_price());
        assert_eq!(updated.added_at(), original.added_at());
        assert_eq!(updated.symbol(), "TSLA");
        assert_eq!(*updated.quantity(), dec!(3));
        assert_eq!(*updated.buy_price(), dec!(200));
    }

    #[test]
    fn update_of_unknown_id_is_a_noop() {
        let mut portfolio = set_portfolio();
        let before: Vec<_> = portfolio.holdings().to_vec();

        portfolio.update(
            "no-such-id",
            HoldingDraft::new(String::from("TSLA"), dec!(3), dec!(200)),
        );

        assert_eq!(portfolio.holdings(), &before[..]);
    }

    #[test]
    fn remove_shrinks_the_store_by_one() {
        let mut portfolio = set_portfolio();
        let id = portfolio.holdings()[0].id().clone();

        portfolio.remove(&id);

        assert_eq!(portfolio.holdings().len(), 1);
        assert!(portfolio.holding(&id).is_none());
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut portfolio = set_portfolio();

        portfolio.remove("no-such-id");

        assert_eq!(portfolio.holdings().len(), 2);
    }

    #[test]
    fn metrics_are_refreshed_on_every_mutation() {
        let mut portfolio = set_portfolio();

        // 10 * 110 + 5 * 55, both at the default 10% markup.
        assert_eq!(*portfolio.metrics().total_value(), dec!(1375));
        assert_eq!(*portfolio.metrics().total_gain_loss(), dec!(125));

        let id = portfolio.holdings()[1].id().clone();
        portfolio.remove(&id);

        assert_eq!(*portfolio.metrics().total_value(), dec!(1100));
        assert_eq!(*portfolio.metrics().total_gain_loss(), dec!(100));

        let last_id = portfolio.holdings()[0].id().clone();
        portfolio.remove(&last_id);

        assert_eq!(*portfolio.metrics().total_value(), dec!(0));
        assert!(portfolio.metrics().top_performer().is_none());
    }
}
