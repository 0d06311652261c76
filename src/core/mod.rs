pub mod engine;
pub mod planner;
pub mod tiers;

pub use crate::domain::model::{
    DerivedTotals, PricingReport, PricingTierRow, RawNumber, RawScenario, ScenarioInput,
};
pub use crate::domain::ports::{ConfigProvider, ReportRenderer, Storage};
pub use crate::utils::error::Result;
