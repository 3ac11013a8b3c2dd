// demos/book_report.rs

//! Build a small option book and print its per-position and aggregate
//! Greeks, before and after a market move.
//!
//! Usage:
//!     cargo run --example book_report

use anyhow::Result;
use chrono::NaiveDate;
use greekbook::{PositionBook, Side, GREEK_COLUMNS};

fn main() -> Result<()> {
    let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let mut book = PositionBook::new("XYZ", 100.0, 0.05, 0.01, as_of);

    book.add_position("XYZ240621C00100000", 6.50, Side::Buy)?;
    book.add_position("XYZ240621P00095000", 3.10, Side::Buy)?;
    book.add_position("XYZ240920C00110000", 4.20, Side::Sell)?;

    println!(
        "Position book: {} | spot {:.2} | as of {}",
        book.ticker(),
        book.spot(),
        book.as_of()
    );
    print_report(&book);

    // Spot gaps up two points; the report is stale until recomputed.
    book.set_market_environment(102.0, 0.05, 0.01);
    println!("\nSpot -> 102.00 (report stale: {})", book.is_stale());
    book.recompute_greeks()?;
    print_report(&book);

    Ok(())
}

fn print_report(book: &PositionBook) {
    print!("{:<22}", "Contract");
    for name in GREEK_COLUMNS {
        print!("{name:>12}");
    }
    println!();

    for row in book.per_position_greeks() {
        print!("{:<22}", row.symbol);
        for value in row.greeks.to_array() {
            print!("{value:>12.6}");
        }
        println!();
    }

    print!("{:<22}", "TOTAL");
    for value in book.aggregate_greeks().to_array() {
        print!("{value:>12.6}");
    }
    println!();
}
