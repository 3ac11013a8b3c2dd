//! Implied-volatility solver: Newton-Raphson with a bracketed fallback.
//!
//! Newton iterates on the analytic vega from a Brenner-Subrahmanyam seed and
//! handles the vast majority of quotes in a handful of steps. Whenever it
//! stalls (tiny vega deep in or out of the money, or a step escaping the
//! volatility bracket) the solve falls back to Brent's method over
//! `[vol_lower, vol_upper]`. Both stages are deterministic: the same inputs
//! always produce the same volatility or the same error.

use roots::find_root_brent;

use crate::book::SolverConfig;
use crate::contract::OptionType;
use crate::error::{BookError, BookResult};

use super::{d1_d2, norm_pdf, price};

/// Solve for the volatility that reproduces `market_price`.
///
/// Degenerate inputs (non-positive price, time, spot, or strike) and prices
/// outside the range attainable by any positive volatility are rejected with
/// [`BookError::ImpliedVolNotFound`] before any iteration runs.
#[allow(non_snake_case)]
pub fn implied_vol(
    option_type: OptionType,
    market_price: f64,
    S: f64,
    K: f64,
    r: f64,
    q: f64,
    T: f64,
    config: &SolverConfig,
) -> BookResult<f64> {
    if market_price <= 0.0 {
        return Err(BookError::implied_vol_not_found(format!(
            "non-positive market price {market_price}"
        )));
    }
    if T <= 0.0 {
        return Err(BookError::implied_vol_not_found(format!(
            "non-positive time to expiration {T}"
        )));
    }
    if S <= 0.0 || K <= 0.0 {
        return Err(BookError::implied_vol_not_found(format!(
            "non-positive spot {S} or strike {K}"
        )));
    }

    // Attainable price range over sigma in (0, inf): the sigma -> 0 limit is
    // the discounted intrinsic value, the sigma -> inf limit is the value of
    // the long leg.
    let discounted_spot = S * (-q * T).exp();
    let discounted_strike = K * (-r * T).exp();
    let floor = option_type.intrinsic(discounted_spot, discounted_strike);
    let ceiling = match option_type {
        OptionType::Call => discounted_spot,
        OptionType::Put => discounted_strike,
    };
    if market_price <= floor || market_price >= ceiling {
        return Err(BookError::implied_vol_not_found(format!(
            "market price {market_price} outside attainable range ({floor:.6}, {ceiling:.6})"
        )));
    }

    // Newton-Raphson from the Brenner-Subrahmanyam ATM approximation.
    let mut vol = (market_price / (0.4 * S * T.sqrt())).clamp(0.01, 3.0);
    for _ in 0..config.max_iterations {
        let diff = price(option_type, S, K, r, q, T, vol) - market_price;
        if diff.abs() < config.price_tolerance {
            return Ok(vol);
        }

        let (d1, _) = d1_d2(S, K, r, q, T, vol);
        let vega = S * (-q * T).exp() * norm_pdf(d1) * T.sqrt();
        if vega.abs() < 1e-12 {
            break; // flat objective, hand over to the bracketed solve
        }

        let next = vol - diff / vega;
        if next <= config.vol_lower || next >= config.vol_upper {
            break; // step escaped the bracket
        }
        vol = next;
    }

    // Bracketed fallback. Price is strictly increasing in sigma, so a root in
    // [vol_lower, vol_upper] is unique when the bracket straddles it.
    let objective = |sigma: f64| price(option_type, S, K, r, q, T, sigma) - market_price;
    let mut tol = config.price_tolerance;
    match find_root_brent(config.vol_lower, config.vol_upper, &objective, &mut tol) {
        Ok(sigma) => Ok(sigma),
        Err(_) => Err(BookError::implied_vol_not_found(format!(
            "no volatility in [{}, {}] reproduces price {market_price}",
            config.vol_lower, config.vol_upper
        ))),
    }
}
