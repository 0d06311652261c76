pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, Settings};

pub use crate::core::engine::{
    build_one_time_tiers, build_subscription_tiers, clamp_input, derive_totals, evaluate, gross_up,
};
pub use crate::core::planner::PricingPlanner;
pub use crate::core::tiers::{TierSchedule, ONE_TIME_TIER_COUNTS, SUBSCRIPTION_TIER_COUNTS};
pub use domain::model::{
    DerivedTotals, PricingReport, PricingTierRow, RawNumber, RawScenario, ScenarioInput,
};
pub use output::OutputFormat;
pub use utils::error::{PlannerError, Result};
