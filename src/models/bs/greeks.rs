//! Closed-form Greeks for European options under Black-Scholes-Merton.
//!
//! Conventions: vega is per unit of volatility (a full 1.00 move in sigma,
//! not per percentage point) and theta is the decay per year. Callers that
//! want per-day theta divide by 365 themselves.

use statrs::distribution::{ContinuousCDF, Normal};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contract::OptionType;

use super::{d1_d2, norm_pdf};

/// Greek vector for a single contract, per unit of notional.
///
/// Field order matches [`GreekVector::to_array`] and the book's reporting
/// columns: implied vol, delta, gamma, vega, volga, vanna, theta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GreekVector {
    /// Volatility backed out of the quoted price.
    pub implied_vol: f64,
    /// dV/dS.
    pub delta: f64,
    /// d2V/dS2.
    pub gamma: f64,
    /// dV/dsigma, per unit of volatility.
    pub vega: f64,
    /// d2V/dsigma2 (also called vomma).
    pub volga: f64,
    /// d2V/dS dsigma.
    pub vanna: f64,
    /// dV/dt, decay per year (negative for long vanilla positions).
    pub theta: f64,
}

impl GreekVector {
    /// Component-wise sum.
    pub fn add(&self, other: &GreekVector) -> GreekVector {
        GreekVector {
            implied_vol: self.implied_vol + other.implied_vol,
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            vega: self.vega + other.vega,
            volga: self.volga + other.volga,
            vanna: self.vanna + other.vanna,
            theta: self.theta + other.theta,
        }
    }

    /// Every component scaled by `factor`, e.g. a position sign or lot size.
    pub fn scale(&self, factor: f64) -> GreekVector {
        GreekVector {
            implied_vol: self.implied_vol * factor,
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            volga: self.volga * factor,
            vanna: self.vanna * factor,
            theta: self.theta * factor,
        }
    }

    /// The components in reporting order:
    /// implied vol, delta, gamma, vega, volga, vanna, theta.
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.implied_vol,
            self.delta,
            self.gamma,
            self.vega,
            self.volga,
            self.vanna,
            self.theta,
        ]
    }
}

/// Full Greek vector for a European option.
///
/// `sigma` is typically the output of [`super::implied_vol`]; inputs must
/// satisfy `T > 0` and `sigma > 0`, which that solver guarantees.
#[allow(non_snake_case)]
pub fn greeks(
    option_type: OptionType,
    S: f64,
    K: f64,
    r: f64,
    q: f64,
    T: f64,
    sigma: f64,
) -> GreekVector {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let (d1, d2) = d1_d2(S, K, r, q, T, sigma);
    let sqrt_t = T.sqrt();
    let df_r = (-r * T).exp();
    let df_q = (-q * T).exp();
    let pdf_d1 = norm_pdf(d1);

    let delta = match option_type {
        OptionType::Call => df_q * normal.cdf(d1),
        OptionType::Put => -df_q * normal.cdf(-d1),
    };
    let gamma = df_q * pdf_d1 / (S * sigma * sqrt_t);
    let vega = S * df_q * pdf_d1 * sqrt_t;

    // Theta per year: option value bleed plus carry on strike and spot legs.
    let bleed = -S * df_q * pdf_d1 * sigma / (2.0 * sqrt_t);
    let theta = match option_type {
        OptionType::Call => bleed - r * K * df_r * normal.cdf(d2) + q * S * df_q * normal.cdf(d1),
        OptionType::Put => bleed + r * K * df_r * normal.cdf(-d2) - q * S * df_q * normal.cdf(-d1),
    };

    let volga = vega * d1 * d2 / sigma;
    let vanna = -df_q * pdf_d1 * d2 / sigma;

    GreekVector {
        implied_vol: sigma,
        delta,
        gamma,
        vega,
        volga,
        vanna,
        theta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atm_call_greeks_sanity() {
        let g = greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.5, 0.2);
        assert!(
            g.delta > 0.5 && g.delta < 0.7,
            "ATM call delta should sit just above 0.5, got {}",
            g.delta
        );
        assert!(g.gamma > 0.0, "gamma should be positive, got {}", g.gamma);
        assert!(g.vega > 0.0, "vega should be positive, got {}", g.vega);
        assert!(g.theta < 0.0, "long ATM call bleeds, got theta {}", g.theta);
        assert_eq!(g.implied_vol, 0.2);
    }

    #[test]
    fn test_delta_parity() {
        // delta_call - delta_put = e^{-qT}
        let (s, k, r, q, t, sigma) = (100.0, 110.0, 0.04, 0.02, 1.25, 0.35);
        let call = greeks(OptionType::Call, s, k, r, q, t, sigma);
        let put = greeks(OptionType::Put, s, k, r, q, t, sigma);
        let expected = (-q * t).exp();
        assert!(
            (call.delta - put.delta - expected).abs() < 1e-12,
            "delta parity violated: {} vs {}",
            call.delta - put.delta,
            expected
        );
        // Second-order Greeks do not depend on the option type.
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
        assert_eq!(call.volga, put.volga);
        assert_eq!(call.vanna, put.vanna);
    }

    #[test]
    fn test_scale_and_add() {
        let g = greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.5, 0.2);
        let flat = g.add(&g.scale(-1.0));
        for (i, component) in flat.to_array().iter().enumerate() {
            assert!(
                component.abs() < 1e-15,
                "component {i} of long+short should cancel, got {component}"
            );
        }
    }
}
