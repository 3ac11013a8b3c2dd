//! Row and position types for the book.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contract::ContractTerms;
use crate::models::bs::GreekVector;

/// Direction of a position. Determines the sign its Greeks carry in the
/// book aggregate: Buy contributes +1 times the vector, Sell -1 times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Aggregation sign: +1.0 for Buy, -1.0 for Sell.
    pub fn sign(&self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }
}

/// A single option position held in the book.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Terms decoded from the contract symbol.
    pub terms: ContractTerms,
    /// Quoted premium, in the same currency unit as the strike.
    pub market_price: f64,
    /// Long or short.
    pub side: Side,
}

/// One row of the per-position Greek report.
///
/// The vector is already signed: a Sell position shows negated Greeks here,
/// and the book aggregate is the plain sum over rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionGreeks {
    /// Contract symbol, the book key.
    pub symbol: String,
    /// Signed Greek vector for the position.
    pub greeks: GreekVector,
}

/// Column names for the numeric part of the per-position report, in
/// [`GreekVector::to_array`] order.
pub const GREEK_COLUMNS: [&str; 7] = [
    "Implied Vol",
    "Delta",
    "Gamma",
    "Vega",
    "Volga",
    "Vanna",
    "Theta",
];
