//! Contract terms and the OCC-style symbol grammar.

pub mod symbol;

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::BookResult;

pub use symbol::occ_symbol;

/// Option type (Call or Put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Exercise value at the given spot level.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Year fraction from `as_of` to `expiry` on an ACT/365-fixed basis.
///
/// Whole calendar days divided by 365; intraday precision is not modeled.
/// An expiry on or before `as_of` yields zero or a negative value, which the
/// solver rejects as degenerate rather than silently clamping.
pub fn year_fraction(expiry: NaiveDate, as_of: NaiveDate) -> f64 {
    (expiry - as_of).num_days() as f64 / 365.0
}

/// Terms decoded from a contract symbol, plus the year fraction to expiry.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContractTerms {
    /// Original symbol as supplied, including any ignored trailing characters.
    /// This is the unique key under which the book holds the position.
    pub symbol: String,
    /// Underlying ticker, upper-cased.
    pub underlying: String,
    /// Expiration date.
    pub expiry: NaiveDate,
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price (symbol digits / 1000).
    pub strike: f64,
    /// Years from the book's as-of date to expiry, ACT/365.
    pub time_to_exp: f64,
}

impl ContractTerms {
    /// Parse an OCC-style symbol and attach the year fraction from `as_of`.
    pub fn parse(symbol: &str, as_of: NaiveDate) -> BookResult<Self> {
        let (underlying, expiry, option_type, strike) = symbol::decode(symbol)?;
        Ok(ContractTerms {
            symbol: symbol.to_string(),
            underlying,
            expiry,
            option_type,
            strike,
            time_to_exp: year_fraction(expiry, as_of),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_fraction_act_365() {
        // 2024-01-01 to 2024-06-21 spans 172 days, leap year included.
        let yf = year_fraction(date(2024, 6, 21), date(2024, 1, 1));
        assert!(
            (yf - 172.0 / 365.0).abs() < 1e-12,
            "expected 172/365, got {yf}"
        );
    }

    #[test]
    fn test_year_fraction_past_expiry_is_negative() {
        let yf = year_fraction(date(2024, 1, 1), date(2024, 6, 21));
        assert!(yf < 0.0, "past expiry should be negative, got {yf}");
        assert_eq!(year_fraction(date(2024, 6, 21), date(2024, 6, 21)), 0.0);
    }

    #[test]
    fn test_parse_attaches_time_to_exp() {
        let terms = ContractTerms::parse("XYZ240621C00100000", date(2024, 1, 1)).unwrap();
        assert_eq!(terms.symbol, "XYZ240621C00100000");
        assert_eq!(terms.underlying, "XYZ");
        assert_eq!(terms.expiry, date(2024, 6, 21));
        assert_eq!(terms.option_type, OptionType::Call);
        assert_eq!(terms.strike, 100.0);
        assert!((terms.time_to_exp - 172.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(105.0, 100.0), 5.0);
        assert_eq!(OptionType::Call.intrinsic(95.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(95.0, 100.0), 5.0);
        assert_eq!(OptionType::Put.intrinsic(105.0, 100.0), 0.0);
    }
}
