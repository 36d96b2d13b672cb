pub mod cli;
pub mod config;
pub mod cooperative;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod rules;

pub use config::AppConfig;
pub use cooperative::{Cooperative, CooperativeReport};
pub use domain::{Farmer, Sale, Transaction};
pub use error::{CoopError, Result};
pub use ledger::Ledger;
pub use rules::VulnerableCities;
