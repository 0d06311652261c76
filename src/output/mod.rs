pub mod format;
pub mod render;

use crate::domain::ports::ReportRenderer;
use serde::{Deserialize, Serialize};

pub use render::{DelimitedRenderer, JsonRenderer, TableRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

/// Display settings shared by every renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    pub currency_symbol: String,
    pub decimals: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

pub fn renderer_for(format: OutputFormat, style: RenderStyle) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Table => Box::new(TableRenderer::new(style)),
        OutputFormat::Csv => Box::new(DelimitedRenderer::csv(style)),
        OutputFormat::Tsv => Box::new(DelimitedRenderer::tsv(style)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
