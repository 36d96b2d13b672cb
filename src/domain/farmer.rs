use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A farmer registered with the cooperative.
///
/// Fields are fixed at construction. `stratum` is the socioeconomic class
/// (1 or 2 carry a subsidy rate; any other value earns nothing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farmer {
    stratum: i32,
    city: String,
    crop: String,
    hectares: Decimal,
}

impl Farmer {
    pub fn new(
        stratum: i32,
        city: impl Into<String>,
        crop: impl Into<String>,
        hectares: Decimal,
    ) -> Self {
        Self {
            stratum,
            city: city.into(),
            crop: crop.into(),
            hectares,
        }
    }

    pub fn stratum(&self) -> i32 {
        self.stratum
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn crop(&self) -> &str {
        &self.crop
    }

    /// Cultivated area in hectares
    pub fn hectares(&self) -> Decimal {
        self.hectares
    }
}

impl std::fmt::Display for Farmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stratum {} farmer in {} ({} ha of {})",
            self.stratum, self.city, self.hectares, self.crop
        )
    }
}
