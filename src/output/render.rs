use crate::domain::model::{PricingReport, PricingTierRow};
use crate::domain::ports::ReportRenderer;
use crate::output::format::{format_count, format_currency, format_plain};
use crate::output::RenderStyle;
use crate::utils::error::{PlannerError, Result};

/// Human-readable summary followed by the two tier tables.
pub struct TableRenderer {
    style: RenderStyle,
}

impl TableRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    fn money(&self, value: f64) -> String {
        format_currency(value, &self.style.currency_symbol, self.style.decimals)
    }

    fn tier_table(
        &self,
        title: &str,
        count_header: &str,
        price_header: &str,
        rows: &[PricingTierRow],
    ) -> Vec<String> {
        let headers = [count_header, price_header, "Total revenue"];
        let cells: Vec<[String; 3]> = rows
            .iter()
            .map(|row| {
                [
                    format_count(row.customer_count),
                    self.money(row.price_per_customer),
                    self.money(row.total_revenue),
                ]
            })
            .collect();

        let mut widths = headers.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = vec![title.to_string(), "-".repeat(title.chars().count())];
        lines.push(format!(
            "{:>w0$}  {:>w1$}  {:>w2$}",
            headers[0],
            headers[1],
            headers[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        ));
        for row in &cells {
            lines.push(format!(
                "{:>w0$}  {:>w1$}  {:>w2$}",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            ));
        }
        lines
    }
}

impl ReportRenderer for TableRenderer {
    fn render(&self, report: &PricingReport) -> Result<String> {
        let scenario = &report.scenario;
        let totals = &report.totals;

        let summary = [
            ("Net revenue goal", self.money(scenario.revenue_goal())),
            (
                "Time frame",
                format!(
                    "{} months ({} years)",
                    format_plain(scenario.time_frame_months()),
                    format_plain(scenario.time_frame_years())
                ),
            ),
            (
                "Profit margin",
                format!("{}%", format_plain(scenario.profit_margin_percent())),
            ),
            ("Gross revenue", self.money(totals.gross_revenue)),
            ("Yearly revenue target", self.money(totals.yearly_revenue)),
            ("Monthly revenue target", self.money(totals.monthly_revenue)),
            ("Daily revenue target", self.money(totals.daily_revenue)),
        ];
        let label_width = summary
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec!["Revenue plan".to_string(), "=".repeat(12)];
        for (label, value) in &summary {
            lines.push(format!("{:<width$}  {}", label, value, width = label_width));
        }

        lines.push(String::new());
        lines.extend(self.tier_table(
            "One-time purchase",
            "Customers",
            "Price per customer",
            &report.one_time_tiers,
        ));

        lines.push(String::new());
        lines.extend(self.tier_table(
            "Subscription",
            "Subscribers",
            "Monthly price",
            &report.subscription_tiers,
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

/// One row per tier; used for both CSV and TSV.
pub struct DelimitedRenderer {
    style: RenderStyle,
    delimiter: u8,
}

impl DelimitedRenderer {
    pub fn csv(style: RenderStyle) -> Self {
        Self {
            style,
            delimiter: b',',
        }
    }

    pub fn tsv(style: RenderStyle) -> Self {
        Self {
            style,
            delimiter: b'\t',
        }
    }
}

impl ReportRenderer for DelimitedRenderer {
    fn render(&self, report: &PricingReport) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(["model", "customer_count", "price_per_customer", "total_revenue"])?;

        let decimals = self.style.decimals;
        let sections = [
            ("one_time", &report.one_time_tiers),
            ("subscription", &report.subscription_tiers),
        ];
        for (model, rows) in sections {
            for row in rows {
                writer.write_record([
                    model.to_string(),
                    row.customer_count.to_string(),
                    format!("{:.*}", decimals, row.price_per_customer),
                    format!("{:.*}", decimals, row.total_revenue),
                ])?;
            }
        }

        let bytes = writer.into_inner().map_err(|e| PlannerError::RenderError {
            message: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| PlannerError::RenderError {
            message: e.to_string(),
        })
    }
}

pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &PricingReport) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        Ok(out)
    }
}
