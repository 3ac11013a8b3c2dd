//! Error types for contract parsing, implied-vol solving, and book edits.

use thiserror::Error;

/// Errors surfaced by the position book and its supporting machinery.
#[derive(Error, Debug)]
pub enum BookError {
    /// The contract identifier does not match the OCC-style grammar
    /// `<TICKER><YYMMDD><C|P><STRIKE>` or encodes an invalid calendar date.
    #[error("malformed contract identifier `{0}`")]
    MalformedContractIdentifier(String),

    /// Removal referenced a contract the book does not hold.
    #[error("position `{0}` not found in book")]
    PositionNotFound(String),

    /// No volatility reproduces the quoted price: the price sits outside the
    /// attainable range, an input is degenerate (non-positive time, price,
    /// spot, or strike), or the root search did not converge.
    #[error("implied volatility not found: {0}")]
    ImpliedVolNotFound(String),
}

/// Result alias used throughout the crate.
pub type BookResult<T> = Result<T, BookError>;

impl BookError {
    pub fn malformed_identifier(symbol: impl Into<String>) -> Self {
        BookError::MalformedContractIdentifier(symbol.into())
    }

    pub fn position_not_found(symbol: impl Into<String>) -> Self {
        BookError::PositionNotFound(symbol.into())
    }

    pub fn implied_vol_not_found(reason: impl Into<String>) -> Self {
        BookError::ImpliedVolNotFound(reason.into())
    }
}
