//! Interactive data entry.
//!
//! Asks how many farmers to register and collects each one, then does the
//! same for sales. Numeric answers that fail to parse are asked again; text
//! answers are taken exactly as typed, so names must match character for
//! character in later queries.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use super::prompt::Prompter;
use crate::cooperative::Cooperative;
use crate::domain::{Farmer, Sale};
use crate::error::Result;

/// Collect farmers and sales from `prompter` into `coop`
pub fn run<P: Prompter + ?Sized>(prompter: &mut P, coop: &mut Cooperative) -> Result<()> {
    let farmers: usize = ask_parsed(prompter, "Number of farmers: ", "a whole number")?;
    for i in 1..=farmers {
        let farmer = ask_farmer(prompter, i)?;
        coop.add_farmer(farmer);
    }

    let sales: usize = ask_parsed(prompter, "Number of sales: ", "a whole number")?;
    for _ in 0..sales {
        let sale = ask_sale(prompter)?;
        coop.add_sale(sale);
    }

    Ok(())
}

fn ask_farmer<P: Prompter + ?Sized>(prompter: &mut P, index: usize) -> Result<Farmer> {
    let stratum: i32 = ask_parsed(
        prompter,
        &format!("Stratum of farmer {index}: "),
        "a whole number",
    )?;
    let city = ask_text(prompter, "Farmer's city: ")?;
    let crop = ask_text(prompter, "Farmer's crop: ")?;
    let hectares: Decimal = ask_parsed(prompter, "Hectares cultivated: ", "a number")?;

    Ok(Farmer::new(stratum, city, crop, hectares))
}

fn ask_sale<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Sale> {
    let city = ask_text(prompter, "City of the sale: ")?;
    let crop = ask_text(prompter, "Crop sold: ")?;
    let value: Decimal = ask_parsed(prompter, "Value of the sale: ", "a number")?;

    Ok(Sale::new(city, crop, value))
}

fn ask_text<P: Prompter + ?Sized>(prompter: &mut P, prompt: &str) -> Result<String> {
    prompter.read_line(prompt)
}

/// Ask until the answer parses as `T`
fn ask_parsed<T, P>(prompter: &mut P, prompt: &str, expected: &str) -> Result<T>
where
    T: FromStr,
    P: Prompter + ?Sized,
{
    loop {
        let line = prompter.read_line(prompt)?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                warn!(input = %line, expected, "unparseable answer, asking again");
                prompter.notice(&format!("Please enter {expected}."));
            }
        }
    }
}
