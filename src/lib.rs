//! # GreekBook: Option Position Books with a Greeks Engine
//!
//! `greekbook` tracks a book of option positions on a single underlying and
//! keeps a signed risk summary current. For every position, and for the book
//! as a whole, it reports implied volatility, Delta, Gamma, Vega, Volga,
//! Vanna, and Theta under the Black-Scholes-Merton model with a continuous
//! dividend yield.
//!
//! ## Core Features
//!
//! - **OCC-style symbols**: positions are keyed by contract identifiers like
//!   `XYZ240621C00100000` (ticker, YYMMDD expiry, C/P, strike x 1000)
//! - **Implied volatility**: Newton-Raphson with analytic vega, falling back
//!   to a bracketed Brent solve; degenerate quotes fail with typed errors
//! - **Signed aggregation**: Buy adds a position's Greek vector, Sell
//!   subtracts it; the book total is the sum over positions
//! - **Full recompute**: every successful edit rebuilds the whole report, so
//!   published numbers never drift from the stored positions
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use greekbook::{PositionBook, Side};
//!
//! # fn main() -> Result<(), greekbook::BookError> {
//! let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut book = PositionBook::new("XYZ", 100.0, 0.05, 0.0, as_of);
//!
//! book.add_position("XYZ240621C00100000", 6.50, Side::Buy)?;
//!
//! let totals = book.aggregate_greeks();
//! assert!(totals.implied_vol > 0.0);
//! assert!(totals.delta > 0.0 && totals.delta < 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Recompute Contract
//!
//! [`PositionBook::add_position`] and [`PositionBook::remove_position`]
//! recompute the whole book and roll themselves back if any position fails
//! to solve. [`PositionBook::set_market_environment`] only marks the report
//! stale; call [`PositionBook::recompute_greeks`] to refresh it.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod book;
pub mod contract;
pub mod error;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Book types: positions, rows, configuration
pub use book::{Position, PositionBook, PositionGreeks, Side, SolverConfig, GREEK_COLUMNS};

// Contract terms and the symbol grammar
pub use contract::{occ_symbol, year_fraction, ContractTerms, OptionType};

// Error taxonomy
pub use error::{BookError, BookResult};

// Greek engine output
pub use models::bs::GreekVector;
