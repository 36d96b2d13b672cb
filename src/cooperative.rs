//! Cooperative ledger and aggregate queries
//!
//! The cooperative keeps every farmer and every sale it is handed, in
//! arrival order, and answers aggregate questions by walking the full
//! ledgers on each call. Nothing is cached, so results always reflect
//! every record added so far.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{CooperativeConfig, ReportConfig};
use crate::domain::{Farmer, Sale, Transaction};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::rules::{self, VulnerableCities};

#[derive(Debug, Clone, Default)]
pub struct Cooperative {
    farmers: Ledger<Farmer>,
    sales: Ledger<Sale>,
    vulnerable_cities: VulnerableCities,
}

impl Cooperative {
    pub fn new(vulnerable_cities: VulnerableCities) -> Self {
        Self {
            farmers: Ledger::new(),
            sales: Ledger::new(),
            vulnerable_cities,
        }
    }

    pub fn from_config(config: &CooperativeConfig) -> Self {
        Self::new(VulnerableCities::new(config.vulnerable_cities.iter().cloned()))
    }

    pub fn vulnerable_cities(&self) -> &VulnerableCities {
        &self.vulnerable_cities
    }

    pub fn farmers(&self) -> &Ledger<Farmer> {
        &self.farmers
    }

    pub fn sales(&self) -> &Ledger<Sale> {
        &self.sales
    }

    pub fn add_farmer(&mut self, farmer: Farmer) {
        debug!(farmer = %farmer, count = self.farmers.len() + 1, "farmer added");
        self.farmers.append(farmer);
    }

    pub fn add_sale(&mut self, sale: Sale) {
        debug!(sale = %sale, count = self.sales.len() + 1, "sale added");
        self.sales.append(sale);
    }

    /// Subsidy owed to a single farmer under this cooperative's city list
    pub fn subsidy_for(&self, farmer: &Farmer) -> Result<Decimal> {
        rules::subsidy(farmer, &self.vulnerable_cities)
    }

    /// Sum of every farmer's subsidy
    pub fn total_subsidies(&self) -> Result<Decimal> {
        rules::checked_total(
            self.farmers.iter().map(|f| self.subsidy_for(f)),
            "total subsidies",
        )
    }

    /// Sum of every sale's commission
    pub fn total_commissions(&self) -> Result<Decimal> {
        rules::checked_total(self.sales.iter().map(Transaction::commission), "total commissions")
    }

    /// True when subsidies paid out exceed commissions collected
    pub fn is_operating_at_loss(&self) -> Result<bool> {
        Ok(self.total_commissions()? < self.total_subsidies()?)
    }

    /// Subsidies owed to stratum-1 farmers living in any of `cities`.
    ///
    /// Stratum-2 farmers are not counted here even though `total_subsidies`
    /// includes them.
    pub fn subsidies_for_cities<S: AsRef<str>>(&self, cities: &[S]) -> Result<Decimal> {
        let owed = self
            .farmers
            .iter()
            .filter(|f| f.stratum() == 1)
            .filter(|f| cities.iter().any(|c| c.as_ref() == f.city()))
            .map(|f| self.subsidy_for(f));
        rules::checked_total(owed, "subsidies for cities")
    }

    /// Commissions on sales of exactly `crop` in exactly `city`
    pub fn commissions_for_city_and_crop(&self, city: &str, crop: &str) -> Result<Decimal> {
        let earned = self
            .sales
            .iter()
            .filter(|s| s.city() == city && s.crop() == crop)
            .map(Transaction::commission);
        rules::checked_total(earned, "commissions for city and crop")
    }

    /// Run every aggregate query and collect the answers
    pub fn report(&self, query: &ReportConfig) -> Result<CooperativeReport> {
        let total_subsidies = self.total_subsidies()?;
        let total_commissions = self.total_commissions()?;
        let report = CooperativeReport {
            farmers: self.farmers.len(),
            sales: self.sales.len(),
            total_subsidies,
            total_commissions,
            operating_at_loss: total_commissions < total_subsidies,
            subsidy_cities: query.subsidy_cities.clone(),
            subsidies_for_cities: self.subsidies_for_cities(&query.subsidy_cities)?,
            commission_city: query.commission_city.clone(),
            commission_crop: query.commission_crop.clone(),
            commissions_for_city_and_crop: self
                .commissions_for_city_and_crop(&query.commission_city, &query.commission_crop)?,
        };

        info!(
            farmers = report.farmers,
            sales = report.sales,
            total_subsidies = %report.total_subsidies,
            total_commissions = %report.total_commissions,
            operating_at_loss = report.operating_at_loss,
            "cooperative report assembled"
        );

        Ok(report)
    }
}

/// Snapshot of every aggregate the cooperative answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CooperativeReport {
    pub farmers: usize,
    pub sales: usize,
    pub total_subsidies: Decimal,
    pub total_commissions: Decimal,
    pub operating_at_loss: bool,
    pub subsidy_cities: Vec<String>,
    pub subsidies_for_cities: Decimal,
    pub commission_city: String,
    pub commission_crop: String,
    pub commissions_for_city_and_crop: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoopError;
    use rust_decimal_macros::dec;

    fn cooperative() -> Cooperative {
        Cooperative::new(VulnerableCities::new(["Manizales", "Barranquilla", "Pereira"]))
    }

    fn sample_farmers() -> Vec<Farmer> {
        vec![
            Farmer::new(1, "Manizales", "cafe", dec!(10)), // 2.0
            Farmer::new(2, "Bogota", "papa", dec!(50)),    // 2.0
            Farmer::new(2, "Pereira", "platano", dec!(80)), // 8.0
            Farmer::new(1, "Cali", "maiz", dec!(800)),     // 40.0
        ]
    }

    fn sample_sales() -> Vec<Sale> {
        vec![
            Sale::new("Bogota", "frutas", dec!(1000)),     // 50.0
            Sale::new("extranjero", "cafe", dec!(1000)),   // 250.0
            Sale::new("Bogota", "cafe", dec!(1000)),       // 70.0
        ]
    }

    #[test]
    fn test_empty_cooperative_totals_are_zero() {
        let coop = cooperative();

        assert_eq!(coop.total_subsidies().unwrap(), Decimal::ZERO);
        assert_eq!(coop.total_commissions().unwrap(), Decimal::ZERO);
        assert!(!coop.is_operating_at_loss().unwrap());
    }

    #[test]
    fn test_add_operations_grow_ledgers() {
        let mut coop = cooperative();
        coop.add_farmer(Farmer::new(1, "Cali", "maiz", dec!(1)));
        coop.add_sale(Sale::new("Cali", "maiz", dec!(1)));
        coop.add_sale(Sale::new("Cali", "maiz", dec!(1)));

        assert_eq!(coop.farmers().len(), 1);
        assert_eq!(coop.sales().len(), 2);
    }

    #[test]
    fn test_totals_and_loss_verdict() {
        let mut coop = cooperative();
        sample_farmers().into_iter().for_each(|f| coop.add_farmer(f));
        sample_sales().into_iter().for_each(|s| coop.add_sale(s));

        assert_eq!(coop.total_subsidies().unwrap(), dec!(52.0));
        assert_eq!(coop.total_commissions().unwrap(), dec!(370.0));
        assert!(!coop.is_operating_at_loss().unwrap());
    }

    #[test]
    fn test_loss_when_subsidies_exceed_commissions() {
        let mut coop = cooperative();
        coop.add_farmer(Farmer::new(1, "Manizales", "cafe", dec!(1000))); // 200
        coop.add_sale(Sale::new("Bogota", "cafe", dec!(1000))); // 70

        assert!(coop.is_operating_at_loss().unwrap());
    }

    #[test]
    fn test_equal_totals_are_not_a_loss() {
        let mut coop = cooperative();
        coop.add_farmer(Farmer::new(1, "Cali", "maiz", dec!(1400))); // 70
        coop.add_sale(Sale::new("Bogota", "cafe", dec!(1000))); // 70

        assert!(!coop.is_operating_at_loss().unwrap());
    }

    #[test]
    fn test_subsidies_for_cities_counts_only_stratum_one() {
        let mut coop = cooperative();
        sample_farmers().into_iter().for_each(|f| coop.add_farmer(f));

        // Pereira only holds a stratum-2 farmer
        assert_eq!(coop.subsidies_for_cities(&["Pereira"]).unwrap(), Decimal::ZERO);
        assert_eq!(coop.subsidies_for_cities(&["Manizales", "Pereira"]).unwrap(), dec!(2.0));
        assert_eq!(coop.subsidies_for_cities(&["Manizales", "Cali"]).unwrap(), dec!(42.0));
    }

    #[test]
    fn test_subsidies_for_no_cities_is_zero() {
        let mut coop = cooperative();
        sample_farmers().into_iter().for_each(|f| coop.add_farmer(f));

        let none: [&str; 0] = [];
        assert_eq!(coop.subsidies_for_cities(&none).unwrap(), Decimal::ZERO);
        assert_eq!(coop.subsidies_for_cities(&["Medellin"]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_commissions_for_city_and_crop_exact_match() {
        let mut coop = cooperative();
        sample_sales().into_iter().for_each(|s| coop.add_sale(s));
        coop.add_sale(Sale::new("Bogota", "cafe", dec!(500))); // 35

        assert_eq!(coop.commissions_for_city_and_crop("Bogota", "cafe").unwrap(), dec!(105.0));
        assert_eq!(coop.commissions_for_city_and_crop("bogota", "cafe").unwrap(), Decimal::ZERO);
        assert_eq!(coop.commissions_for_city_and_crop("Bogota", "caf").unwrap(), Decimal::ZERO);
        assert_eq!(coop.commissions_for_city_and_crop("Cartagena", "Yuca").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_report_matches_individual_queries() {
        let mut coop = cooperative();
        sample_farmers().into_iter().for_each(|f| coop.add_farmer(f));
        sample_sales().into_iter().for_each(|s| coop.add_sale(s));

        let query = ReportConfig {
            subsidy_cities: vec!["Manizales".to_string(), "Cali".to_string()],
            commission_city: "extranjero".to_string(),
            commission_crop: "cafe".to_string(),
        };
        let report = coop.report(&query).unwrap();

        assert_eq!(report.farmers, 4);
        assert_eq!(report.sales, 3);
        assert_eq!(report.total_subsidies, coop.total_subsidies().unwrap());
        assert_eq!(report.total_commissions, coop.total_commissions().unwrap());
        assert_eq!(report.operating_at_loss, coop.is_operating_at_loss().unwrap());
        assert_eq!(report.subsidies_for_cities, dec!(42.0));
        assert_eq!(report.commissions_for_city_and_crop, dec!(250.0));
    }

    #[test]
    fn test_from_config_uses_configured_cities() {
        let config = CooperativeConfig {
            vulnerable_cities: vec!["Cali".to_string()],
        };
        let mut coop = Cooperative::from_config(&config);
        coop.add_farmer(Farmer::new(1, "Cali", "maiz", dec!(10)));

        assert!(coop.vulnerable_cities().contains("Cali"));
        assert_eq!(coop.total_subsidies().unwrap(), dec!(2.0));
    }

    #[test]
    fn test_commission_total_overflow_is_an_error() {
        let mut coop = cooperative();
        // 0.25 each, five of them pass Decimal::MAX
        for _ in 0..5 {
            coop.add_sale(Sale::new("extranjero", "cafe", dec!(70000000000000000000000000000)));
        }

        let err = coop.total_commissions().unwrap_err();
        assert!(matches!(err, CoopError::Overflow(ref what) if what == "total commissions"));
        assert!(coop.is_operating_at_loss().is_err());
        assert!(coop.commissions_for_city_and_crop("extranjero", "cafe").is_err());

        let query = ReportConfig {
            subsidy_cities: Vec::new(),
            commission_city: "Cartagena".to_string(),
            commission_crop: "Yuca".to_string(),
        };
        let err = coop.report(&query).unwrap_err();
        assert!(matches!(err, CoopError::Overflow(_)));
    }

    #[test]
    fn test_subsidy_total_overflow_is_an_error() {
        let mut coop = cooperative();
        // 0.20 each, six of them pass Decimal::MAX
        for _ in 0..6 {
            coop.add_farmer(Farmer::new(1, "Manizales", "cafe", dec!(70000000000000000000000000000)));
        }

        let err = coop.total_subsidies().unwrap_err();
        assert!(matches!(err, CoopError::Overflow(ref what) if what == "total subsidies"));
        assert!(coop.subsidies_for_cities(&["Manizales"]).is_err());
        // a single subsidy is still in range
        assert!(coop.subsidy_for(coop.farmers().iter().next().unwrap()).is_ok());
    }
}
