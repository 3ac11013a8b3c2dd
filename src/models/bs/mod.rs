// Black-Scholes-Merton pricing with a continuous dividend yield. Callers are
// expected to pass T > 0 and sigma > 0; the implied-vol solver in `implied`
// is the gate that rejects degenerate inputs with a typed error.

pub mod greeks;
pub mod implied;

pub use greeks::{greeks, GreekVector};
pub use implied::implied_vol;

use crate::contract::OptionType;

fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

pub(crate) fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// The d1 and d2 terms shared by the price, Greek, and implied-vol formulas.
#[allow(non_snake_case)]
pub(crate) fn d1_d2(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> (f64, f64) {
    let sqrt_t = T.sqrt();
    let d1 = ((S / K).ln() + (r - q + 0.5 * sigma.powi(2)) * T) / (sigma * sqrt_t);
    (d1, d1 - sigma * sqrt_t)
}

/// Price of a European call option under Black-Scholes-Merton assumptions.
#[allow(non_snake_case)]
pub fn call_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, q, T, sigma);
    S * (-q * T).exp() * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes-Merton assumptions.
#[allow(non_snake_case)]
pub fn put_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, q, T, sigma);
    K * (-r * T).exp() * norm_cdf(-d2) - S * (-q * T).exp() * norm_cdf(-d1)
}

/// Price dispatched on option type.
#[allow(non_snake_case)]
pub fn price(option_type: OptionType, S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> f64 {
    match option_type {
        OptionType::Call => call_price(S, K, r, q, T, sigma),
        OptionType::Put => put_price(S, K, r, q, T, sigma),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_call_parity() {
        // C - P = S e^{-qT} - K e^{-rT}
        let (s, k, r, q, t, sigma) = (100.0, 105.0, 0.05, 0.02, 0.75, 0.3);
        let call = call_price(s, k, r, q, t, sigma);
        let put = put_price(s, k, r, q, t, sigma);
        let forward = s * (-q * t).exp() - k * (-r * t).exp();
        assert!(
            (call - put - forward).abs() < 1e-10,
            "parity violated: C-P = {}, forward = {}",
            call - put,
            forward
        );
    }

    #[test]
    fn test_call_price_atm_reference() {
        // S=K=100, r=5%, q=0, T=1, sigma=20%: the textbook value is 10.4506.
        let call = call_price(100.0, 100.0, 0.05, 0.0, 1.0, 0.2);
        assert!(
            (call - 10.4506).abs() < 1e-3,
            "ATM call should be ~10.4506, got {call}"
        );
    }

    #[test]
    fn test_price_dispatches_on_type() {
        let (s, k, r, q, t, sigma) = (100.0, 95.0, 0.03, 0.01, 0.5, 0.25);
        assert_eq!(
            price(OptionType::Call, s, k, r, q, t, sigma),
            call_price(s, k, r, q, t, sigma)
        );
        assert_eq!(
            price(OptionType::Put, s, k, r, q, t, sigma),
            put_price(s, k, r, q, t, sigma)
        );
    }
}
