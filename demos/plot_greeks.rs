// demos/plot_greeks.rs

//! Sweep spot for a single long call quoted at a constant 25% vol and plot
//! the book's delta and gamma profiles.
//!
//! Usage:
//!     cargo run --example plot_greeks
//!
//! The output image is written to greek_profile.svg in the working directory.

use std::error::Error;

use chrono::NaiveDate;
use plotters::prelude::*;

use greekbook::models::bs;
use greekbook::{year_fraction, OptionType, PositionBook, Side};

fn main() -> Result<(), Box<dyn Error>> {
    let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let expiry = NaiveDate::from_ymd_opt(2024, 6, 21).expect("valid date");
    let (rate, div_yield, strike, vol) = (0.05, 0.0, 100.0, 0.25);
    let symbol = "XYZ240621C00100000";
    let tte = year_fraction(expiry, as_of);

    let mut book = PositionBook::new("XYZ", 100.0, rate, div_yield, as_of);

    let mut delta_curve = Vec::new();
    let mut gamma_curve = Vec::new();
    for step in 0..=120 {
        let spot = 70.0 + 0.5 * step as f64;
        book.set_market_environment(spot, rate, div_yield);
        // Re-quote at the fixed vol; re-adding the symbol replaces the
        // position and recomputes the whole book.
        let quote = bs::price(OptionType::Call, spot, strike, rate, div_yield, tte, vol);
        book.add_position(symbol, quote, Side::Buy)?;

        let totals = book.aggregate_greeks();
        delta_curve.push((spot, totals.delta));
        gamma_curve.push((spot, totals.gamma));
    }

    let root = SVGBackend::new("greek_profile.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Long {strike:.0} call at {:.0}% vol | delta and scaled gamma vs spot",
                vol * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(70.0..130.0, 0.0..1.05_f64)?;

    chart
        .configure_mesh()
        .x_desc("Spot ($)")
        .y_desc("Delta / scaled Gamma")
        .draw()?;

    chart.draw_series(vec![PathElement::new(delta_curve, RED)])?;

    // Gamma rescaled to its peak so both curves share one axis.
    let gamma_peak = gamma_curve.iter().map(|(_, g)| *g).fold(f64::MIN, f64::max);
    let scaled_gamma: Vec<(f64, f64)> = gamma_curve
        .iter()
        .map(|(spot, gamma)| (*spot, gamma / gamma_peak))
        .collect();
    chart.draw_series(vec![PathElement::new(scaled_gamma, BLUE)])?;

    println!("Chart saved to greek_profile.svg");
    Ok(())
}
