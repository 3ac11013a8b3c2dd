// demos/implied_vol.rs

//! Round-trip the implied-vol solver across a strike ladder: price every
//! contract at a known vol, solve the vol back from the price, and report
//! the recovery error.
//!
//! Usage:
//!     cargo run --example implied_vol

use anyhow::Result;
use greekbook::models::bs;
use greekbook::{OptionType, SolverConfig};

fn main() -> Result<()> {
    let config = SolverConfig::default();
    let (spot, rate, div_yield, tte) = (100.0, 0.05, 0.01, 0.5);
    let true_vol = 0.25;

    println!(
        "{:>8}{:>6}{:>12}{:>12}{:>14}",
        "Strike", "Type", "Price", "Solved", "Error"
    );
    for strike in (70..=130).step_by(5) {
        let strike = strike as f64;
        for option_type in [OptionType::Call, OptionType::Put] {
            let marker = match option_type {
                OptionType::Call => "C",
                OptionType::Put => "P",
            };
            let price = bs::price(option_type, spot, strike, rate, div_yield, tte, true_vol);
            let solved =
                bs::implied_vol(option_type, price, spot, strike, rate, div_yield, tte, &config)?;
            println!(
                "{strike:>8.1}{marker:>6}{price:>12.4}{solved:>12.6}{:>14.2e}",
                (solved - true_vol).abs()
            );
        }
    }
    Ok(())
}
