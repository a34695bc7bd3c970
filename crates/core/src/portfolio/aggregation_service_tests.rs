//! Tests for portfolio aggregation.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::funds::{CategoryField, FundRecord, PortfolioView};
    use crate::portfolio::{compute, weight_distribution, AggregationError};

    fn fund(name: &str, weight: f64, ret: f64, risk: u8, fee: f64) -> FundRecord {
        FundRecord {
            isin: format!("LU{:010}", name.len()),
            name: name.to_string(),
            manager: "DWS".to_string(),
            weight_pct: weight,
            return_pct: ret,
            risk_level: risk,
            fee_pct: fee,
            top_holdings: String::new(),
            geo_split: String::new(),
            asset_split: None,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_compute_concrete_scenario() {
        // records = [{w:60, r:10, risk:2, fee:1.0}, {w:40, r:5, risk:4, fee:2.0}]
        let view = PortfolioView::new(vec![
            fund("Alpha", 60.0, 10.0, 2, 1.0),
            fund("Beta", 40.0, 5.0, 4, 2.0),
        ]);

        let result = compute(&view).unwrap();
        assert_close(result.weighted_return_pct, 8.0);
        assert_close(result.weighted_risk, 2.8);
        assert_close(result.mean_fee_pct, 1.5);
        assert_eq!(result.fund_count, 2);
    }

    #[test]
    fn test_compute_empty_view_fails_with_empty_input() {
        let view = PortfolioView::default();
        assert_eq!(compute(&view).unwrap_err(), AggregationError::EmptyInput);
    }

    #[test]
    fn test_compute_all_zero_weights_fails_with_zero_total_weight() {
        let view = PortfolioView::new(vec![
            fund("Alpha", 0.0, 10.0, 2, 1.0),
            fund("Beta", 0.0, 5.0, 4, 2.0),
        ]);
        assert_eq!(
            compute(&view).unwrap_err(),
            AggregationError::ZeroTotalWeight
        );
    }

    #[test]
    fn test_zero_weight_record_contributes_nothing_to_weighted_averages() {
        let weighted = PortfolioView::new(vec![
            fund("Alpha", 60.0, 10.0, 2, 1.0),
            fund("Beta", 0.0, -50.0, 7, 9.9),
        ]);

        let result = compute(&weighted).unwrap();
        assert_close(result.weighted_return_pct, 10.0);
        assert_close(result.weighted_risk, 2.0);
        // The fee mean is unweighted, so the zero-weight record still counts.
        assert_close(result.mean_fee_pct, (1.0 + 9.9) / 2.0);
    }

    #[test]
    fn test_weighted_average_stays_within_input_extremes() {
        let samples = vec![
            vec![fund("A", 5.83, 2.56, 2, 0.26), fund("B", 22.62, 7.0, 5, 1.56)],
            vec![
                fund("A", 1.0, -3.0, 1, 0.5),
                fund("B", 2.0, 12.5, 6, 1.5),
                fund("C", 3.0, 4.25, 3, 1.0),
            ],
            vec![fund("A", 99.0, -1.0, 7, 2.0), fund("B", 1.0, 30.0, 1, 0.1)],
        ];

        for records in samples {
            let min = records.iter().map(|r| r.return_pct).fold(f64::MAX, f64::min);
            let max = records.iter().map(|r| r.return_pct).fold(f64::MIN, f64::max);

            let result = compute(&PortfolioView::new(records)).unwrap();
            assert!(result.weighted_return_pct >= min);
            assert!(result.weighted_return_pct <= max);
        }
    }

    #[test]
    fn test_equal_weights_equal_arithmetic_mean() {
        let view = PortfolioView::new(vec![
            fund("Alpha", 25.0, 2.0, 2, 1.0),
            fund("Beta", 25.0, 4.0, 3, 1.2),
            fund("Gamma", 25.0, 9.0, 5, 0.8),
            fund("Delta", 25.0, 5.0, 4, 1.4),
        ]);

        let result = compute(&view).unwrap();
        assert_close(result.weighted_return_pct, (2.0 + 4.0 + 9.0 + 5.0) / 4.0);
        assert_close(result.weighted_risk, (2.0 + 3.0 + 5.0 + 4.0) / 4.0);
    }

    #[test]
    fn test_filtering_to_nothing_then_compute_fails_with_empty_input() {
        let view = PortfolioView::new(vec![fund("Alpha", 60.0, 10.0, 2, 1.0)]);
        let empty = view.filter_by(CategoryField::Manager, &HashSet::new());

        assert!(empty.is_empty());
        assert_eq!(compute(&empty).unwrap_err(), AggregationError::EmptyInput);
    }

    #[test]
    fn test_weight_distribution_sums_to_one_hundred() {
        let view = PortfolioView::new(vec![
            fund("Alpha", 5.83, 2.56, 2, 0.26),
            fund("Beta", 22.62, 7.0, 5, 1.56),
            fund("Gamma", 11.42, 10.5, 4, 1.3),
        ]);

        let slices = weight_distribution(&view).unwrap();
        assert_eq!(slices.len(), 3);

        let total: f64 = slices.iter().map(|s| s.share_pct).sum();
        assert_close(total, 100.0);

        // Order and proportions follow the view.
        assert_eq!(slices[0].name, "Alpha");
        assert_close(slices[0].share_pct, 5.83 / (5.83 + 22.62 + 11.42) * 100.0);
    }

    #[test]
    fn test_weight_distribution_edge_cases_match_compute() {
        assert_eq!(
            weight_distribution(&PortfolioView::default()).unwrap_err(),
            AggregationError::EmptyInput
        );

        let zeroed = PortfolioView::new(vec![fund("Alpha", 0.0, 1.0, 1, 0.1)]);
        assert_eq!(
            weight_distribution(&zeroed).unwrap_err(),
            AggregationError::ZeroTotalWeight
        );
    }
}
