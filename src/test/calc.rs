#[cfg(test)]
mod tests {
    use chrono::Local;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::app::calc::portfolio_metrics;
    use crate::models::Holding;

    fn holding(id: &str, symbol: &str, quantity: Decimal, buy: Decimal, current: Decimal) -> Holding {
        Holding::new(
            id.to_string(),
            symbol.to_string(),
            quantity,
            buy,
            current,
            Local::now(),
        )
    }

    fn set_sample_data() -> Vec<Holding> {
        vec![
            holding("1", "A", dec!(10), dec!(100), dec!(110)),
            holding("2", "B", dec!(5), dec!(50), dec!(40)),
        ]
    }

    #[test]
    fn totals_match_independent_sums() {
        let holdings = set_sample_data();
        let metrics = portfolio_metrics(&holdings);

        assert_eq!(*metrics.total_value(), dec!(1300));
        assert_eq!(*metrics.total_gain_loss(), dec!(50));
    }

    #[test]
    fn performers_are_ranked_by_fractional_return() {
        let holdings = set_sample_data();
        let metrics = portfolio_metrics(&holdings);

        // A returns +10%, B returns -20%.
        assert_eq!(metrics.top_performer().as_ref().unwrap().symbol(), "A");
        assert_eq!(metrics.worst_performer().as_ref().unwrap().symbol(), "B");
    }

    #[test]
    fn empty_holdings_produce_zero_metrics() {
        let metrics = portfolio_metrics(&[]);

        assert_eq!(*metrics.total_value(), Decimal::ZERO);
        assert_eq!(*metrics.total_gain_loss(), Decimal::ZERO);
        assert!(metrics.top_performer().is_none());
        assert!(metrics.worst_performer().is_none());
    }

    #[test]
    fn single_holding_is_both_top_and_worst() {
        let holdings = vec![holding("1", "A", dec!(2), dec!(10), dec!(12))];
        let metrics = portfolio_metrics(&holdings);

        assert_eq!(metrics.top_performer().as_ref().unwrap().id(), "1");
        assert_eq!(metrics.worst_performer().as_ref().unwrap().id(), "1");
    }

    #[test]
    fn equal_returns_keep_insertion_order() {
        // All three return exactly +10%.
        let holdings = vec![
            holding("1", "A", dec!(1), dec!(100), dec!(110)),
            holding("2", "B", dec!(1), dec!(200), dec!(220)),
            holding("3", "C", dec!(1), dec!(50), dec!(55)),
        ];
        let metrics = portfolio_metrics(&holdings);

        assert_eq!(metrics.top_performer().as_ref().unwrap().id(), "1");
        assert_eq!(metrics.worst_performer().as_ref().unwrap().id(), "3");
    }

    #[test]
    fn zero_buy_price_ranks_as_zero_return() {
        let holdings = vec![
            holding("1", "FREE", dec!(3), dec!(0), dec!(5)),
            holding("2", "UP", dec!(1), dec!(100), dec!(120)),
            holding("3", "DOWN", dec!(1), dec!(100), dec!(80)),
        ];
        let metrics = portfolio_metrics(&holdings);

        assert_eq!(holdings[0].fractional_return(), Decimal::ZERO);
        assert_eq!(metrics.top_performer().as_ref().unwrap().symbol(), "UP");
        assert_eq!(metrics.worst_performer().as_ref().unwrap().symbol(), "DOWN");
    }
}
