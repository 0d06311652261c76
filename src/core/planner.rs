use crate::core::engine::{clamp_input, evaluate};
use crate::core::{ConfigProvider, PricingReport, Storage};
use crate::output::{renderer_for, RenderStyle};
use crate::utils::error::Result;

pub struct PricingPlanner<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> PricingPlanner<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn plan(&self) -> PricingReport {
        let scenario = clamp_input(self.config.scenario());
        tracing::debug!(
            revenue_goal = scenario.revenue_goal(),
            time_frame_months = scenario.time_frame_months(),
            profit_margin_percent = scenario.profit_margin_percent(),
            "Scenario after clamping"
        );

        let report = evaluate(scenario, self.config.tiers());
        tracing::info!(
            "Gross revenue {:.2} over {} months ({} one-time tiers, {} subscription tiers)",
            report.totals.gross_revenue,
            scenario.time_frame_months(),
            report.one_time_tiers.len(),
            report.subscription_tiers.len()
        );

        report
    }

    pub fn render(&self, report: &PricingReport) -> Result<String> {
        let style = RenderStyle {
            currency_symbol: self.config.currency_symbol().to_string(),
            decimals: self.config.decimals(),
        };
        let format = self.config.output_format();
        tracing::debug!("Rendering report as {:?}", format);
        renderer_for(format, style).render(report)
    }

    pub fn run(&self) -> Result<String> {
        let report = self.plan();
        self.render(&report)
    }

    /// Renders the plan and writes it as `revenue_plan.<ext>`; returns the written path.
    pub fn run_to_storage<S: Storage>(&self, storage: &S) -> Result<String> {
        let rendered = self.run()?;
        let file_name = format!("revenue_plan.{}", self.config.output_format().extension());
        let written = storage.write_file(&file_name, rendered.as_bytes())?;
        tracing::info!("Report written to {}", written);
        Ok(written)
    }
}
