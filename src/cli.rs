use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ReportConfig;

pub mod batch;
pub mod output;
pub mod prompt;
pub mod session;

#[derive(Parser, Debug)]
#[command(name = "agrocoop")]
#[command(version)]
#[command(about = "Farming cooperative subsidy and commission ledger", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config directory (default.toml plus an optional per-environment file)
    #[arg(short, long, default_value = "config", global = true)]
    pub config: PathBuf,

    /// Print the report as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Enter farmers and sales at the prompt, then print the report (default)
    Interactive,
    /// Load farmers and sales from a JSON file and print the report
    Report {
        /// Path to the ledger file
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Overrides for the report's per-city and per-crop queries
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// City to include in the stratum-1 subsidy total (repeatable)
    #[arg(long = "subsidy-city", global = true)]
    pub subsidy_cities: Vec<String>,

    /// City for the commission query
    #[arg(long, global = true)]
    pub city: Option<String>,

    /// Crop for the commission query
    #[arg(long, global = true)]
    pub crop: Option<String>,
}

impl QueryArgs {
    /// Replace configured query values with any given on the command line
    pub fn apply(&self, report: &mut ReportConfig) {
        if !self.subsidy_cities.is_empty() {
            report.subsidy_cities = self.subsidy_cities.clone();
        }
        if let Some(city) = &self.city {
            report.commission_city = city.clone();
        }
        if let Some(crop) = &self.crop {
            report.commission_crop = crop.clone();
        }
    }
}
