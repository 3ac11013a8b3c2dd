//! Position book: storage, signed aggregation, and the full-recompute rule.

pub mod config;
pub mod position_book;
pub mod types;

pub use config::SolverConfig;
pub use position_book::PositionBook;
pub use types::{Position, PositionGreeks, Side, GREEK_COLUMNS};
