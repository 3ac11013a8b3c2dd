//! OCC-style contract symbol encoding and decoding.
//!
//! Symbols follow `<TICKER><YYMMDD><C|P><STRIKE>`, e.g. `XYZ240621C00100000`
//! is an XYZ call expiring 2024-06-21 struck at 100.0. The ticker is one to
//! five ASCII letters, the two-digit year maps into 2000..=2099, and the
//! strike digits carry three implied decimal places (digits / 1000). Matching
//! is anchored at the start of the string and stops after the last strike
//! digit; trailing characters are ignored.

use chrono::NaiveDate;

use crate::error::{BookError, BookResult};

use super::OptionType;

/// Decode a symbol into `(underlying, expiry, option_type, strike)`.
///
/// The underlying comes back upper-cased; the call/put marker is accepted in
/// either case. Six date digits that do not form a real calendar date (e.g.
/// month 13) are rejected as malformed.
pub(crate) fn decode(symbol: &str) -> BookResult<(String, NaiveDate, OptionType, f64)> {
    let bytes = symbol.as_bytes();

    let ticker_len = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
    if ticker_len == 0 || ticker_len > 5 {
        return Err(BookError::malformed_identifier(symbol));
    }
    let underlying = symbol[..ticker_len].to_ascii_uppercase();

    let date_end = ticker_len + 6;
    if bytes.len() < date_end || !bytes[ticker_len..date_end].iter().all(u8::is_ascii_digit) {
        return Err(BookError::malformed_identifier(symbol));
    }
    let yy: i32 = parse_digits(&symbol[ticker_len..ticker_len + 2], symbol)?;
    let mm: u32 = parse_digits(&symbol[ticker_len + 2..ticker_len + 4], symbol)?;
    let dd: u32 = parse_digits(&symbol[ticker_len + 4..date_end], symbol)?;
    let expiry = NaiveDate::from_ymd_opt(2000 + yy, mm, dd)
        .ok_or_else(|| BookError::malformed_identifier(symbol))?;

    let option_type = match bytes.get(date_end) {
        Some(b'C') | Some(b'c') => OptionType::Call,
        Some(b'P') | Some(b'p') => OptionType::Put,
        _ => return Err(BookError::malformed_identifier(symbol)),
    };

    let strike_start = date_end + 1;
    let strike_len = bytes[strike_start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if strike_len == 0 {
        return Err(BookError::malformed_identifier(symbol));
    }
    let raw: u64 = parse_digits(&symbol[strike_start..strike_start + strike_len], symbol)?;
    let strike = raw as f64 / 1000.0;

    Ok((underlying, expiry, option_type, strike))
}

/// Canonical OCC-style symbol for the given terms, strike padded to 8 digits.
pub fn occ_symbol(
    underlying: &str,
    expiry: NaiveDate,
    option_type: OptionType,
    strike: f64,
) -> String {
    let marker = match option_type {
        OptionType::Call => 'C',
        OptionType::Put => 'P',
    };
    format!(
        "{}{}{}{:08}",
        underlying.to_ascii_uppercase(),
        expiry.format("%y%m%d"),
        marker,
        (strike * 1000.0).round() as u64
    )
}

fn parse_digits<T: std::str::FromStr>(digits: &str, symbol: &str) -> BookResult<T> {
    digits
        .parse()
        .map_err(|_| BookError::malformed_identifier(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decode_canonical_call() {
        let (underlying, expiry, option_type, strike) = decode("XYZ240621C00100000").unwrap();
        assert_eq!(underlying, "XYZ");
        assert_eq!(expiry, date(2024, 6, 21));
        assert_eq!(option_type, OptionType::Call);
        assert_eq!(strike, 100.0);
    }

    #[test]
    fn test_decode_put_with_fractional_strike() {
        // 00072500 / 1000 = 72.5
        let (_, _, option_type, strike) = decode("SPY241220P00072500").unwrap();
        assert_eq!(option_type, OptionType::Put);
        assert_eq!(strike, 72.5);
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        let (underlying, _, option_type, strike) = decode("xyz240621c00100000").unwrap();
        assert_eq!(underlying, "XYZ");
        assert_eq!(option_type, OptionType::Call);
        assert_eq!(strike, 100.0);
    }

    #[test]
    fn test_decode_ignores_trailing_characters() {
        let (_, expiry, _, strike) = decode("XYZ240621C00100000-weekly").unwrap();
        assert_eq!(expiry, date(2024, 6, 21));
        assert_eq!(strike, 100.0);
    }

    #[test]
    fn test_decode_short_strike_block() {
        // Variable-width strike digits are accepted: 95000 / 1000 = 95.
        let (_, _, _, strike) = decode("AB250117P95000").unwrap();
        assert_eq!(strike, 95.0);
    }

    #[test]
    fn test_decode_rejects_bad_symbols() {
        // No ticker, ticker too long, truncated date, bad marker, no strike,
        // and a date that does not exist on the calendar.
        for symbol in [
            "240621C00100000",
            "TOOLONGTICKER240621C00100000",
            "XYZ2406C00100000",
            "XYZ240621X00100000",
            "XYZ240621C",
            "XYZ241321C00100000",
        ] {
            let err = decode(symbol).unwrap_err();
            assert!(
                matches!(err, BookError::MalformedContractIdentifier(_)),
                "expected malformed-identifier error for {symbol}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_occ_symbol_round_trip() {
        let symbol = occ_symbol("xyz", date(2024, 6, 21), OptionType::Call, 100.0);
        assert_eq!(symbol, "XYZ240621C00100000");
        let (underlying, expiry, option_type, strike) = decode(&symbol).unwrap();
        assert_eq!(underlying, "XYZ");
        assert_eq!(expiry, date(2024, 6, 21));
        assert_eq!(option_type, OptionType::Call);
        assert_eq!(strike, 100.0);
    }
}
