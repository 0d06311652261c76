pub mod cli;
pub mod toml_config;

use crate::core::tiers::TierSchedule;
use crate::core::{ConfigProvider, RawNumber, RawScenario};
use crate::output::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_REVENUE_GOAL: f64 = 100_000.0;
pub const DEFAULT_TIME_FRAME_MONTHS: f64 = 12.0;
pub const DEFAULT_PROFIT_MARGIN_PERCENT: f64 = 20.0;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "revenue-planner")]
#[command(about = "Turn a revenue goal into monthly targets and per-customer prices")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Net revenue goal, e.g. 250000 or "$250,000"
    #[arg(long, allow_hyphen_values = true)]
    pub revenue_goal: Option<String>,

    /// Time frame in months
    #[arg(long, allow_hyphen_values = true, conflicts_with = "years")]
    pub months: Option<String>,

    /// Time frame in years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Profit margin in percent
    #[arg(long, allow_hyphen_values = true)]
    pub margin: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Currency symbol used in table output
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long)]
    pub decimals: Option<usize>,

    /// Write the report into this directory instead of stdout
    #[arg(long)]
    pub output_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

/// Effective settings: built-in defaults, then the config file, then flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    scenario: RawScenario,
    tiers: TierSchedule,
    format: OutputFormat,
    currency_symbol: String,
    decimals: usize,
    output_directory: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let output = toml_config::OutputConfig::default();
        Self {
            scenario: RawScenario {
                revenue_goal: Some(RawNumber::Number(DEFAULT_REVENUE_GOAL)),
                time_frame_months: Some(RawNumber::Number(DEFAULT_TIME_FRAME_MONTHS)),
                time_frame_years: None,
                profit_margin_percent: Some(RawNumber::Number(DEFAULT_PROFIT_MARGIN_PERCENT)),
            },
            tiers: TierSchedule::default(),
            format: output.format,
            currency_symbol: output.currency_symbol,
            decimals: output.decimals,
            output_directory: output.directory,
        }
    }
}

impl Settings {
    /// Layers a parsed config file over the built-in defaults.
    pub fn from_file(file: TomlConfig) -> Self {
        let mut settings = Self::default();
        let TomlConfig {
            scenario,
            tiers,
            output,
        } = file;

        if let Some(goal) = scenario.revenue_goal {
            settings.scenario.revenue_goal = Some(goal);
        }
        settings.override_time_frame(scenario.time_frame_months, scenario.time_frame_years);
        if let Some(margin) = scenario.profit_margin_percent {
            settings.scenario.profit_margin_percent = Some(margin);
        }

        settings.tiers = tiers;
        settings.format = output.format;
        settings.currency_symbol = output.currency_symbol;
        settings.decimals = output.decimals;
        settings.output_directory = output.directory;
        settings
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &CliConfig) {
        if let Some(goal) = &cli.revenue_goal {
            self.scenario.revenue_goal = Some(RawNumber::from(goal.as_str()));
        }
        self.override_time_frame(
            cli.months.as_deref().map(RawNumber::from),
            cli.years.as_deref().map(RawNumber::from),
        );
        if let Some(margin) = &cli.margin {
            self.scenario.profit_margin_percent = Some(RawNumber::from(margin.as_str()));
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(currency) = &cli.currency {
            self.currency_symbol = currency.clone();
        }
        if let Some(decimals) = cli.decimals {
            self.decimals = decimals;
        }
        if let Some(directory) = &cli.output_dir {
            self.output_directory = Some(directory.clone());
        }
    }

    /// A time frame from a later layer replaces both units from earlier layers.
    fn override_time_frame(&mut self, months: Option<RawNumber>, years: Option<RawNumber>) {
        if months.is_some() {
            self.scenario.time_frame_months = months;
            self.scenario.time_frame_years = None;
        } else if years.is_some() {
            self.scenario.time_frame_months = None;
            self.scenario.time_frame_years = years;
        }
    }
}

impl ConfigProvider for Settings {
    fn scenario(&self) -> &RawScenario {
        &self.scenario
    }

    fn tiers(&self) -> &TierSchedule {
        &self.tiers
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn decimals(&self) -> usize {
        self.decimals
    }

    fn output_directory(&self) -> Option<&str> {
        self.output_directory.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        toml_config::validate_structure(
            &self.tiers,
            self.decimals,
            self.output_directory.as_deref(),
        )
    }
}
