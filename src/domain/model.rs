use serde::{Deserialize, Serialize};

/// Smallest accepted time frame: 0.1 years.
pub const MIN_TIME_FRAME_MONTHS: f64 = 1.2;
/// Highest accepted profit margin. 100% would make gross revenue infinite.
pub const MAX_PROFIT_MARGIN_PERCENT: f64 = 99.0;
/// Largest accepted net goal (one quadrillion). Grossed up at the maximum
/// margin it stays far below `f64::MAX`.
pub const MAX_REVENUE_GOAL: f64 = 1e15;
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Fixed month length used for daily targets.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// A user-supplied number that may still be free text, e.g. `"$1,000,000"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Returns `None` for text that does not read as a number.
    ///
    /// Currency symbols, thousands separators, underscores, a trailing `%`
    /// and surrounding whitespace are ignored.
    pub fn value(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(text) => {
                let cleaned: String = text
                    .trim()
                    .trim_end_matches('%')
                    .chars()
                    .filter(|&c| !matches!(c, ',' | '_' | '$' | '€' | '£' | '¥') && !c.is_whitespace())
                    .collect();
                if cleaned.is_empty() {
                    return None;
                }
                cleaned.parse::<f64>().ok()
            }
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}

/// Unclamped scenario as collected from configuration and flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScenario {
    #[serde(default)]
    pub revenue_goal: Option<RawNumber>,
    #[serde(default)]
    pub time_frame_months: Option<RawNumber>,
    #[serde(default)]
    pub time_frame_years: Option<RawNumber>,
    #[serde(default)]
    pub profit_margin_percent: Option<RawNumber>,
}

/// A clamped scenario. Every constructor enforces the bounds, so the engine
/// never sees a negative goal, a margin above 99% or a near-zero time frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioInput {
    revenue_goal: f64,
    time_frame_months: f64,
    profit_margin_percent: f64,
}

impl ScenarioInput {
    pub fn new(revenue_goal: f64, time_frame_months: f64, profit_margin_percent: f64) -> Self {
        let revenue_goal = if revenue_goal.is_nan() {
            0.0
        } else {
            revenue_goal.clamp(0.0, MAX_REVENUE_GOAL)
        };

        let time_frame_months = if time_frame_months.is_finite() {
            time_frame_months.max(MIN_TIME_FRAME_MONTHS)
        } else {
            MIN_TIME_FRAME_MONTHS
        };

        let profit_margin_percent = if profit_margin_percent.is_nan() {
            0.0
        } else {
            profit_margin_percent.clamp(0.0, MAX_PROFIT_MARGIN_PERCENT)
        };

        Self {
            revenue_goal,
            time_frame_months,
            profit_margin_percent,
        }
    }

    pub fn revenue_goal(&self) -> f64 {
        self.revenue_goal
    }

    pub fn time_frame_months(&self) -> f64 {
        self.time_frame_months
    }

    pub fn time_frame_years(&self) -> f64 {
        self.time_frame_months / MONTHS_PER_YEAR
    }

    pub fn profit_margin_percent(&self) -> f64 {
        self.profit_margin_percent
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedTotals {
    pub gross_revenue: f64,
    pub yearly_revenue: f64,
    pub monthly_revenue: f64,
    pub daily_revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingTierRow {
    pub customer_count: u32,
    pub price_per_customer: f64,
    pub total_revenue: f64,
}

/// Everything derived from one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    pub scenario: ScenarioInput,
    pub totals: DerivedTotals,
    pub one_time_tiers: Vec<PricingTierRow>,
    pub subscription_tiers: Vec<PricingTierRow>,
}
