use crate::core::tiers::TierSchedule;
use crate::core::{ConfigProvider, RawScenario};
use crate::output::OutputFormat;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_tier_counts, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const MAX_DECIMALS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub scenario: RawScenario,
    #[serde(default)]
    pub tiers: TierSchedule,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    pub directory: Option<String>,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
            directory: None,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

/// Scenario numbers are clamped, never rejected; only the structural
/// settings around them are validated.
pub(crate) fn validate_structure(
    tiers: &TierSchedule,
    decimals: usize,
    directory: Option<&str>,
) -> Result<()> {
    validate_tier_counts("tiers.one_time", &tiers.one_time)?;
    validate_tier_counts("tiers.subscription", &tiers.subscription)?;
    validate_range("output.decimals", decimals, 0, MAX_DECIMALS)?;

    if let Some(directory) = directory {
        validate_path("output.directory", directory)?;
    }

    Ok(())
}

impl ConfigProvider for TomlConfig {
    fn scenario(&self) -> &RawScenario {
        &self.scenario
    }

    fn tiers(&self) -> &TierSchedule {
        &self.tiers
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn currency_symbol(&self) -> &str {
        &self.output.currency_symbol
    }

    fn decimals(&self) -> usize {
        self.output.decimals
    }

    fn output_directory(&self) -> Option<&str> {
        self.output.directory.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_structure(
            &self.tiers,
            self.output.decimals,
            self.output.directory.as_deref(),
        )
    }
}
