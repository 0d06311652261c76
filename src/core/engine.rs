//! Pricing derivation: closed-form formulas over a clamped scenario.
//!
//! Everything here is a pure function. Nothing is cached between calls.

use crate::core::tiers::TierSchedule;
use crate::domain::model::{
    DerivedTotals, PricingReport, PricingTierRow, RawScenario, ScenarioInput, DAYS_PER_MONTH,
    MIN_TIME_FRAME_MONTHS, MONTHS_PER_YEAR,
};

/// Coerces raw input into a valid scenario. Never fails.
///
/// Missing or non-numeric values fall back to the nearest valid boundary:
/// a goal of 0, a margin of 0%, and the minimum time frame. Goals above
/// `MAX_REVENUE_GOAL` are capped there. Months take precedence over years
/// when both are given.
pub fn clamp_input(raw: &RawScenario) -> ScenarioInput {
    let revenue_goal = raw
        .revenue_goal
        .as_ref()
        .and_then(|n| n.value())
        .unwrap_or(0.0);

    let time_frame_months = raw
        .time_frame_months
        .as_ref()
        .and_then(|n| n.value())
        .or_else(|| {
            raw.time_frame_years
                .as_ref()
                .and_then(|n| n.value())
                .map(|years| years * MONTHS_PER_YEAR)
        })
        .unwrap_or(MIN_TIME_FRAME_MONTHS);

    let profit_margin_percent = raw
        .profit_margin_percent
        .as_ref()
        .and_then(|n| n.value())
        .unwrap_or(0.0);

    ScenarioInput::new(revenue_goal, time_frame_months, profit_margin_percent)
}

/// Gross revenue needed so that `net_revenue` remains after the margin.
///
/// A margin of 100% or more returns `net_revenue` unchanged. Clamped
/// scenarios never get there, but direct callers might.
pub fn gross_up(net_revenue: f64, profit_margin_percent: f64) -> f64 {
    if profit_margin_percent >= 100.0 {
        return net_revenue;
    }
    net_revenue / (1.0 - profit_margin_percent / 100.0)
}

pub fn derive_totals(scenario: &ScenarioInput) -> DerivedTotals {
    let gross_revenue = gross_up(scenario.revenue_goal(), scenario.profit_margin_percent());
    let monthly_revenue = gross_revenue / scenario.time_frame_months();
    let daily_revenue = monthly_revenue / DAYS_PER_MONTH;
    let yearly_revenue = gross_revenue * (MONTHS_PER_YEAR / scenario.time_frame_months());

    DerivedTotals {
        gross_revenue,
        yearly_revenue,
        monthly_revenue,
        daily_revenue,
    }
}

/// One row per count: the price each customer pays once to reach `gross_revenue`.
pub fn build_one_time_tiers(gross_revenue: f64, tier_customer_counts: &[u32]) -> Vec<PricingTierRow> {
    tier_customer_counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| PricingTierRow {
            customer_count: count,
            price_per_customer: gross_revenue / f64::from(count),
            total_revenue: gross_revenue,
        })
        .collect()
}

/// One row per count: the flat monthly price each subscriber pays over the
/// whole time frame. No churn is modelled.
pub fn build_subscription_tiers(
    gross_revenue: f64,
    time_frame_months: f64,
    tier_customer_counts: &[u32],
) -> Vec<PricingTierRow> {
    tier_customer_counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| PricingTierRow {
            customer_count: count,
            price_per_customer: gross_revenue / (f64::from(count) * time_frame_months),
            total_revenue: gross_revenue,
        })
        .collect()
}

pub fn evaluate(scenario: ScenarioInput, tiers: &TierSchedule) -> PricingReport {
    let totals = derive_totals(&scenario);
    let one_time_tiers = build_one_time_tiers(totals.gross_revenue, &tiers.one_time);
    let subscription_tiers = build_subscription_tiers(
        totals.gross_revenue,
        scenario.time_frame_months(),
        &tiers.subscription,
    );

    PricingReport {
        scenario,
        totals,
        one_time_tiers,
        subscription_tiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RawNumber, MAX_PROFIT_MARGIN_PERCENT, MAX_REVENUE_GOAL};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    fn raw(goal: &str, months: &str, margin: &str) -> RawScenario {
        RawScenario {
            revenue_goal: Some(RawNumber::from(goal)),
            time_frame_months: Some(RawNumber::from(months)),
            time_frame_years: None,
            profit_margin_percent: Some(RawNumber::from(margin)),
        }
    }

    #[test]
    fn test_clamp_input_coerces_invalid_text() {
        let scenario = clamp_input(&raw("abc", "zero", "n/a"));
        assert_eq!(scenario.revenue_goal(), 0.0);
        assert_eq!(scenario.time_frame_months(), MIN_TIME_FRAME_MONTHS);
        assert_eq!(scenario.profit_margin_percent(), 0.0);
    }

    #[test]
    fn test_clamp_input_bounds() {
        let scenario = clamp_input(&raw("-500", "0", "100"));
        assert_eq!(scenario.revenue_goal(), 0.0);
        assert_eq!(scenario.time_frame_months(), MIN_TIME_FRAME_MONTHS);
        assert_eq!(scenario.profit_margin_percent(), MAX_PROFIT_MARGIN_PERCENT);

        let scenario = clamp_input(&raw("$2,500", "0.5", "250%"));
        assert_eq!(scenario.revenue_goal(), 2500.0);
        assert_eq!(scenario.time_frame_months(), MIN_TIME_FRAME_MONTHS);
        assert_eq!(scenario.profit_margin_percent(), MAX_PROFIT_MARGIN_PERCENT);
    }

    #[test]
    fn test_clamp_input_missing_fields() {
        let scenario = clamp_input(&RawScenario::default());
        assert_eq!(scenario.revenue_goal(), 0.0);
        assert_eq!(scenario.time_frame_months(), MIN_TIME_FRAME_MONTHS);
        assert_eq!(scenario.profit_margin_percent(), 0.0);
    }

    #[test]
    fn test_clamp_input_years_and_months() {
        let mut input = RawScenario {
            time_frame_years: Some(RawNumber::from(2.0)),
            ..RawScenario::default()
        };
        assert_eq!(clamp_input(&input).time_frame_months(), 24.0);

        // 0.05 years is below the 0.1 year floor
        input.time_frame_years = Some(RawNumber::from(0.05));
        assert_eq!(clamp_input(&input).time_frame_months(), MIN_TIME_FRAME_MONTHS);

        input.time_frame_months = Some(RawNumber::from(6.0));
        assert_eq!(clamp_input(&input).time_frame_months(), 6.0);
    }

    #[test]
    fn test_gross_up_never_below_net() {
        let net = 100_000.0;
        assert_eq!(gross_up(net, 0.0), net);
        for margin in 1..=99 {
            let gross = gross_up(net, f64::from(margin));
            assert!(gross > net, "margin {} gave {}", margin, gross);
        }
    }

    #[test]
    fn test_gross_up_degenerate_margin_returns_net() {
        assert_eq!(gross_up(1000.0, 100.0), 1000.0);
        assert_eq!(gross_up(1000.0, 150.0), 1000.0);
    }

    #[test]
    fn test_gross_up_at_max_margin_is_finite() {
        let gross = gross_up(1_000_000.0, MAX_PROFIT_MARGIN_PERCENT);
        assert!(gross.is_finite());
        assert!(approx_eq(gross, 100_000_000.0));
    }

    #[test]
    fn test_largest_goal_at_max_margin_stays_finite() {
        for goal in ["1e307", "1e309", "999999999999999999999"] {
            let scenario = clamp_input(&raw(goal, "1.2", "99"));
            assert_eq!(scenario.revenue_goal(), MAX_REVENUE_GOAL);

            let report = evaluate(scenario, &TierSchedule::default());
            let totals = report.totals;
            assert!(totals.gross_revenue.is_finite());
            assert!(totals.yearly_revenue.is_finite());
            assert!(totals.monthly_revenue.is_finite());
            assert!(totals.daily_revenue.is_finite());
            assert!(report
                .one_time_tiers
                .iter()
                .chain(report.subscription_tiers.iter())
                .all(|row| row.price_per_customer.is_finite() && row.total_revenue.is_finite()));
        }
    }

    #[test]
    fn test_derive_totals_one_year_no_margin() {
        let totals = derive_totals(&ScenarioInput::new(100_000.0, 12.0, 0.0));
        assert_eq!(totals.gross_revenue, 100_000.0);
        assert!(approx_eq(totals.monthly_revenue, 100_000.0 / 12.0));
        assert!((totals.monthly_revenue - 8333.33).abs() < 0.01);
        assert!((totals.daily_revenue - 277.78).abs() < 0.01);
        assert!(approx_eq(totals.yearly_revenue, 100_000.0));
    }

    #[test]
    fn test_yearly_matches_monthly_times_twelve() {
        for months in [1.2, 3.0, 6.0, 12.0, 18.0, 24.0, 60.0] {
            let totals = derive_totals(&ScenarioInput::new(750_000.0, months, 35.0));
            assert!(approx_eq(
                totals.yearly_revenue,
                totals.gross_revenue * 12.0 / months
            ));
            assert!(approx_eq(totals.yearly_revenue, totals.monthly_revenue * 12.0));
            assert!(approx_eq(totals.daily_revenue * 30.0, totals.monthly_revenue));
        }
    }

    #[test]
    fn test_one_time_tiers_round_trip() {
        let gross = 1_250_000.0;
        let rows = build_one_time_tiers(gross, &crate::core::tiers::ONE_TIME_TIER_COUNTS);
        assert_eq!(rows.len(), 11);
        for row in &rows {
            assert!(approx_eq(row.price_per_customer * f64::from(row.customer_count), gross));
            assert_eq!(row.total_revenue, gross);
        }
        let thousand = rows.iter().find(|r| r.customer_count == 1000).unwrap();
        assert!(approx_eq(thousand.price_per_customer, 1250.0));
    }

    #[test]
    fn test_subscription_tiers_round_trip() {
        let gross = 1_250_000.0;
        let months = 24.0;
        let rows =
            build_subscription_tiers(gross, months, &crate::core::tiers::SUBSCRIPTION_TIER_COUNTS);
        assert_eq!(rows.len(), 11);
        for row in &rows {
            assert!(approx_eq(
                row.price_per_customer * f64::from(row.customer_count) * months,
                gross
            ));
            assert_eq!(row.total_revenue, gross);
        }
        let thousand = rows.iter().find(|r| r.customer_count == 1000).unwrap();
        assert!((thousand.price_per_customer - 52.08).abs() < 0.01);
    }

    #[test]
    fn test_tiers_skip_zero_counts_and_keep_order() {
        let rows = build_one_time_tiers(1000.0, &[10, 0, 100]);
        let counts: Vec<u32> = rows.iter().map(|r| r.customer_count).collect();
        assert_eq!(counts, vec![10, 100]);

        let rows = build_subscription_tiers(1000.0, 12.0, &[0]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let scenario = ScenarioInput::new(1_000_000.0, 24.0, 20.0);
        let tiers = TierSchedule::default();
        let first = evaluate(scenario, &tiers);
        let second = evaluate(scenario, &tiers);
        assert_eq!(first, second);
        assert!(approx_eq(first.totals.gross_revenue, 1_250_000.0));
        assert_eq!(first.one_time_tiers.len(), tiers.one_time.len());
        assert_eq!(first.subscription_tiers.len(), tiers.subscription.len());
    }

    #[test]
    fn test_evaluate_zero_goal() {
        let report = evaluate(ScenarioInput::new(0.0, 12.0, 50.0), &TierSchedule::default());
        assert_eq!(report.totals.gross_revenue, 0.0);
        assert!(report
            .one_time_tiers
            .iter()
            .chain(report.subscription_tiers.iter())
            .all(|row| row.price_per_customer == 0.0));
    }
}
