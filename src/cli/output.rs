//! Report rendering.
//!
//! Supports two modes: a human-readable table (default) and JSON (--json).

use tabled::{Table, Tabled};

use crate::cooperative::CooperativeReport;
use crate::error::Result;

/// Output mode for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl ReportRow {
    fn new(metric: impl Into<String>, value: impl ToString) -> Self {
        Self {
            metric: metric.into(),
            value: value.to_string(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Render `report` as a string in the chosen mode
pub fn render_report(report: &CooperativeReport, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputMode::Table => {
            let rows = vec![
                ReportRow::new("Farmers registered", report.farmers),
                ReportRow::new("Sales registered", report.sales),
                ReportRow::new("Total subsidies", report.total_subsidies.normalize()),
                ReportRow::new("Total commissions", report.total_commissions.normalize()),
                ReportRow::new("Operating at a loss", yes_no(report.operating_at_loss)),
                ReportRow::new(
                    format!(
                        "Stratum-1 subsidies in {}",
                        report.subsidy_cities.join(", ")
                    ),
                    report.subsidies_for_cities.normalize(),
                ),
                ReportRow::new(
                    format!(
                        "Commissions on {} in {}",
                        report.commission_crop, report.commission_city
                    ),
                    report.commissions_for_city_and_crop.normalize(),
                ),
            ];
            Ok(Table::new(rows).to_string())
        }
    }
}

/// Print `report` to stdout
pub fn print_report(report: &CooperativeReport, mode: OutputMode) -> Result<()> {
    let rendered = render_report(report, mode)?;
    println!("{rendered}");
    Ok(())
}
