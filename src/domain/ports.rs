use crate::core::tiers::TierSchedule;
use crate::domain::model::{PricingReport, RawScenario};
use crate::output::OutputFormat;
use crate::utils::error::Result;

pub trait Storage {
    /// Writes `data` under `path` and returns the full location written.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn scenario(&self) -> &RawScenario;
    fn tiers(&self) -> &TierSchedule;
    fn output_format(&self) -> OutputFormat;
    fn currency_symbol(&self) -> &str;
    fn decimals(&self) -> usize;
    fn output_directory(&self) -> Option<&str>;
}

pub trait ReportRenderer {
    fn render(&self, report: &PricingReport) -> Result<String>;
}
