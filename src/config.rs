use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::{CoopError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub cooperative: CooperativeConfig,
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CooperativeConfig {
    /// Cities whose farmers receive the higher subsidy rate
    pub vulnerable_cities: Vec<String>,
}

/// Parameters for the per-city and per-crop lines of the report
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Cities summed by the stratum-1 subsidy query
    pub subsidy_cities: Vec<String>,
    pub commission_city: String,
    pub commission_crop: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cities() -> Vec<String> {
    vec![
        "Manizales".to_string(),
        "Barranquilla".to_string(),
        "Pereira".to_string(),
    ]
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> std::result::Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("cooperative.vulnerable_cities", default_cities())?
            .set_default("report.subsidy_cities", default_cities())?
            .set_default("report.commission_city", "Cartagena")?
            .set_default("report.commission_crop", "Yuca")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("AGROCOOP_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (AGROCOOP_REPORT__COMMISSION_CITY, etc.)
            .add_source(
                Environment::with_prefix("AGROCOOP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cooperative.vulnerable_cities")
                    .with_list_parse_key("report.subsidy_cities")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Load from `config_dir` and reject invalid values
    pub fn load_validated<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config = Self::load_from(config_dir)?;
        config.validate().map_err(CoopError::InvalidConfig)?;
        Ok(config)
    }

    /// Built-in configuration, no files or environment consulted
    pub fn default_config() -> Self {
        Self {
            cooperative: CooperativeConfig {
                vulnerable_cities: default_cities(),
            },
            report: ReportConfig {
                subsidy_cities: default_cities(),
                commission_city: "Cartagena".to_string(),
                commission_crop: "Yuca".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self
            .cooperative
            .vulnerable_cities
            .iter()
            .any(|c| c.trim().is_empty())
        {
            errors.push("cooperative.vulnerable_cities must not contain blank names".to_string());
        }

        if self.report.subsidy_cities.iter().any(|c| c.trim().is_empty()) {
            errors.push("report.subsidy_cities must not contain blank names".to_string());
        }

        if self.report.commission_city.trim().is_empty() {
            errors.push("report.commission_city must not be blank".to_string());
        }

        if self.report.commission_crop.trim().is_empty() {
            errors.push("report.commission_crop must not be blank".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
