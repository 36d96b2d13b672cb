//! Subsidy and commission rule tables
//!
//! Subsidy is a fraction of cultivated hectares, chosen by the farmer's
//! stratum and by whether the farmer's city is on the vulnerable list:
//!
//! | stratum | vulnerable city | other city |
//! |---------|-----------------|------------|
//! | 1       | 0.20            | 0.05       |
//! | 2       | 0.10            | 0.04       |
//! | other   | 0               | 0          |
//!
//! Commission is a fraction of a sale's value: fruit sales pay 0.05 anywhere,
//! export sales (city `extranjero`) pay 0.25, everything else pays 0.07.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::Farmer;
use crate::error::{CoopError, Result};

pub const VULNERABLE_STRATUM_1_RATE: Decimal = dec!(0.20);
pub const VULNERABLE_STRATUM_2_RATE: Decimal = dec!(0.10);
pub const STRATUM_1_RATE: Decimal = dec!(0.05);
pub const STRATUM_2_RATE: Decimal = dec!(0.04);

pub const FRUIT_COMMISSION_RATE: Decimal = dec!(0.05);
pub const EXPORT_COMMISSION_RATE: Decimal = dec!(0.25);
pub const DOMESTIC_COMMISSION_RATE: Decimal = dec!(0.07);

/// Crop name that always earns the fruit rate
pub const FRUIT_CROP: &str = "frutas";
/// City name used for sales abroad
pub const EXPORT_CITY: &str = "extranjero";

// ---------------------------------------------------------------------------
// Vulnerable cities
// ---------------------------------------------------------------------------

/// Ordered set of cities whose farmers qualify for the higher subsidy rate.
///
/// Duplicate names keep their first position. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VulnerableCities(Vec<String>);

impl VulnerableCities {
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for city in cities {
            let city = city.into();
            if !unique.contains(&city) {
                unique.push(city);
            }
        }
        Self(unique)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.0.iter().any(|c| c == city)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Subsidy owed to `farmer`.
///
/// Unknown strata pay nothing. Inputs are not range-checked, so negative
/// hectares give a negative subsidy.
pub fn subsidy(farmer: &Farmer, vulnerable: &VulnerableCities) -> Result<Decimal> {
    let rate = if vulnerable.contains(farmer.city()) {
        match farmer.stratum() {
            2 => VULNERABLE_STRATUM_2_RATE,
            1 => VULNERABLE_STRATUM_1_RATE,
            _ => return Ok(Decimal::ZERO),
        }
    } else {
        match farmer.stratum() {
            2 => STRATUM_2_RATE,
            1 => STRATUM_1_RATE,
            _ => return Ok(Decimal::ZERO),
        }
    };
    farmer
        .hectares()
        .checked_mul(rate)
        .ok_or_else(|| CoopError::Overflow(format!("subsidy for {farmer}")))
}

/// Commission rate for a sale of `crop` in `city`.
///
/// The fruit rule wins over the export rule.
pub fn sale_commission_rate(city: &str, crop: &str) -> Decimal {
    if crop == FRUIT_CROP {
        FRUIT_COMMISSION_RATE
    } else if city == EXPORT_CITY {
        EXPORT_COMMISSION_RATE
    } else {
        DOMESTIC_COMMISSION_RATE
    }
}

/// Commission on a sale worth `value`
pub fn sale_commission(city: &str, crop: &str, value: Decimal) -> Result<Decimal> {
    value
        .checked_mul(sale_commission_rate(city, crop))
        .ok_or_else(|| CoopError::Overflow(format!("commission on {crop} sale worth {value}")))
}

/// Add up `amounts`, failing instead of panicking when the running total
/// leaves `Decimal`'s range.
pub fn checked_total<I>(amounts: I, what: &str) -> Result<Decimal>
where
    I: IntoIterator<Item = Result<Decimal>>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount?)
            .ok_or_else(|| CoopError::Overflow(what.to_string()))
    })
}
