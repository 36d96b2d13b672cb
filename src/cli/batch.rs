//! JSON ledger input for non-interactive runs.
//!
//! ```json
//! {
//!   "farmers": [{ "stratum": 1, "city": "Manizales", "crop": "cafe", "hectares": 10 }],
//!   "sales": [{ "city": "Bogota", "crop": "frutas", "value": 1000 }]
//! }
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::cooperative::Cooperative;
use crate::domain::{Farmer, Sale};
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerFile {
    #[serde(default)]
    pub farmers: Vec<Farmer>,
    #[serde(default)]
    pub sales: Vec<Sale>,
}

impl LedgerFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let file = Self::parse(&raw)?;
        info!(
            path = %path.display(),
            farmers = file.farmers.len(),
            sales = file.sales.len(),
            "ledger file loaded"
        );
        Ok(file)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Hand every record to `coop`, farmers first, in file order
    pub fn apply(self, coop: &mut Cooperative) {
        for farmer in self.farmers {
            coop.add_farmer(farmer);
        }
        for sale in self.sales {
            coop.add_sale(sale);
        }
    }
}
