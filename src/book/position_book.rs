//! The position book: holds positions on one underlying and keeps their
//! Greeks current by full recomputation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::contract::ContractTerms;
use crate::error::{BookError, BookResult};
use crate::models::bs;
use crate::models::bs::GreekVector;

use super::config::SolverConfig;
use super::types::{Position, PositionGreeks, Side};

/// A book of option positions sharing one underlying and one market
/// environment (spot, flat rate, flat dividend yield, valuation date).
///
/// Every successful edit recomputes implied vol and Greeks for the whole
/// book from scratch; there is no incremental path, so reported numbers can
/// never drift from the stored positions. If any position fails to solve,
/// the edit is rolled back and the previous report stays in place.
///
/// [`PositionBook::set_market_environment`] is the one mutator that does
/// not recompute: it only marks the report stale, and the caller decides
/// when to pay for [`PositionBook::recompute_greeks`].
#[derive(Debug, Clone)]
pub struct PositionBook {
    ticker: String,
    spot: f64,
    rate: f64,
    div_yield: f64,
    as_of: NaiveDate,
    solver: SolverConfig,
    positions: BTreeMap<String, Position>,
    aggregate: GreekVector,
    per_position: Vec<PositionGreeks>,
    stale: bool,
}

impl PositionBook {
    /// Empty book with default solver settings.
    pub fn new(
        ticker: impl Into<String>,
        spot: f64,
        rate: f64,
        div_yield: f64,
        as_of: NaiveDate,
    ) -> Self {
        Self::with_solver_config(ticker, spot, rate, div_yield, as_of, SolverConfig::default())
    }

    /// Empty book with explicit solver settings.
    pub fn with_solver_config(
        ticker: impl Into<String>,
        spot: f64,
        rate: f64,
        div_yield: f64,
        as_of: NaiveDate,
        solver: SolverConfig,
    ) -> Self {
        PositionBook {
            ticker: ticker.into(),
            spot,
            rate,
            div_yield,
            as_of,
            solver,
            positions: BTreeMap::new(),
            aggregate: GreekVector::default(),
            per_position: Vec::new(),
            stale: false,
        }
    }

    /// Add a position and recompute the book.
    ///
    /// Re-adding a symbol already in the book replaces that position. If the
    /// new position fails to solve (or any existing one does, after an
    /// environment change), the book is restored to its prior state and the
    /// error is returned.
    pub fn add_position(&mut self, symbol: &str, market_price: f64, side: Side) -> BookResult<()> {
        let terms = ContractTerms::parse(symbol, self.as_of)?;
        let position = Position {
            terms,
            market_price,
            side,
        };
        let previous = self.positions.insert(symbol.to_string(), position);
        if let Err(err) = self.recompute_greeks() {
            // Failed rebuild must leave the book exactly as it was.
            match previous {
                Some(prior) => self.positions.insert(symbol.to_string(), prior),
                None => self.positions.remove(symbol),
            };
            return Err(err);
        }
        Ok(())
    }

    /// Remove a position by symbol and recompute the book.
    pub fn remove_position(&mut self, symbol: &str) -> BookResult<()> {
        let removed = self
            .positions
            .remove(symbol)
            .ok_or_else(|| BookError::position_not_found(symbol))?;
        if let Err(err) = self.recompute_greeks() {
            self.positions.insert(symbol.to_string(), removed);
            return Err(err);
        }
        Ok(())
    }

    /// Rebuild implied vols, per-position rows, and the aggregate from the
    /// stored positions under the current market environment.
    ///
    /// All-or-nothing: on any solve failure the previously published rows
    /// and aggregate remain untouched and the error identifies the symbol
    /// that failed.
    pub fn recompute_greeks(&mut self) -> BookResult<()> {
        let mut aggregate = GreekVector::default();
        let mut rows = Vec::with_capacity(self.positions.len());

        for (symbol, position) in &self.positions {
            let terms = &position.terms;
            let sigma = bs::implied_vol(
                terms.option_type,
                position.market_price,
                self.spot,
                terms.strike,
                self.rate,
                self.div_yield,
                terms.time_to_exp,
                &self.solver,
            )
            .map_err(|err| match err {
                BookError::ImpliedVolNotFound(reason) => {
                    BookError::implied_vol_not_found(format!("{symbol}: {reason}"))
                }
                other => other,
            })?;

            let signed = bs::greeks(
                terms.option_type,
                self.spot,
                terms.strike,
                self.rate,
                self.div_yield,
                terms.time_to_exp,
                sigma,
            )
            .scale(position.side.sign());

            aggregate = aggregate.add(&signed);
            rows.push(PositionGreeks {
                symbol: symbol.clone(),
                greeks: signed,
            });
        }

        self.aggregate = aggregate;
        self.per_position = rows;
        self.stale = false;
        Ok(())
    }

    /// Replace spot, rate, and dividend yield in one step.
    ///
    /// Deliberately does not recompute; the published report keeps its old
    /// values and [`PositionBook::is_stale`] turns true until the caller
    /// runs [`PositionBook::recompute_greeks`].
    pub fn set_market_environment(&mut self, spot: f64, rate: f64, div_yield: f64) {
        self.spot = spot;
        self.rate = rate;
        self.div_yield = div_yield;
        self.stale = true;
    }

    /// Book-level Greek totals from the last successful recompute.
    pub fn aggregate_greeks(&self) -> GreekVector {
        self.aggregate
    }

    /// Per-position rows from the last successful recompute, ordered by
    /// symbol.
    pub fn per_position_greeks(&self) -> &[PositionGreeks] {
        &self.per_position
    }

    /// True when the market environment changed after the last recompute.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The stored position for `symbol`, if held.
    pub fn position(&self, symbol: &str) -> Option<&Position> {
        self.positions.get(symbol)
    }

    /// True when `symbol` is held.
    pub fn contains(&self, symbol: &str) -> bool {
        self.positions.contains_key(symbol)
    }

    /// Number of positions held.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no positions are held.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Underlying ticker this book was opened on.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Valuation date used for every year-fraction in the book.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Current spot level.
    pub fn spot(&self) -> f64 {
        self.spot
    }
}
