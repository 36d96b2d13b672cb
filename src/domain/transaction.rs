use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules;

/// A transaction the cooperative earns a commission on.
///
/// Each transaction kind supplies its own commission rule; a kind that
/// does not implement `commission` is rejected at compile time.
pub trait Transaction {
    /// City the transaction took place in
    fn city(&self) -> &str;

    fn crop(&self) -> &str;

    /// Gross value of the transaction
    fn value(&self) -> Decimal;

    /// Commission retained by the cooperative
    fn commission(&self) -> Result<Decimal>;
}

/// A sale of a farmer's produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    city: String,
    crop: String,
    value: Decimal,
}

impl Sale {
    pub fn new(city: impl Into<String>, crop: impl Into<String>, value: Decimal) -> Self {
        Self {
            city: city.into(),
            crop: crop.into(),
            value,
        }
    }
}

impl Transaction for Sale {
    fn city(&self) -> &str {
        &self.city
    }

    fn crop(&self) -> &str {
        &self.crop
    }

    fn value(&self) -> Decimal {
        self.value
    }

    fn commission(&self) -> Result<Decimal> {
        rules::sale_commission(&self.city, &self.crop, self.value)
    }
}

impl std::fmt::Display for Sale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sale of {} in {} for {}", self.crop, self.city, self.value)
    }
}
