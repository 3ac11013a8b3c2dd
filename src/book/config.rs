//! Solver tuning knobs, loadable from TOML.

#[cfg(feature = "serde")]
use anyhow::Context;
#[cfg(feature = "serde")]
use serde::Deserialize;

/// Configuration for the implied-volatility solver.
///
/// Every field has a default, so a TOML file only needs to name the knobs it
/// overrides.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct SolverConfig {
    /// Newton-Raphson iteration cap before the bracketed fallback takes over.
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,

    /// Convergence tolerance on |model price - market price|.
    #[cfg_attr(feature = "serde", serde(default = "default_price_tolerance"))]
    pub price_tolerance: f64,

    /// Lower edge of the volatility bracket for the fallback solve.
    #[cfg_attr(feature = "serde", serde(default = "default_vol_lower"))]
    pub vol_lower: f64,

    /// Upper edge of the volatility bracket for the fallback solve.
    #[cfg_attr(feature = "serde", serde(default = "default_vol_upper"))]
    pub vol_upper: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            price_tolerance: default_price_tolerance(),
            vol_lower: default_vol_lower(),
            vol_upper: default_vol_upper(),
        }
    }
}

impl SolverConfig {
    /// Parse solver settings from a TOML string.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).context("parsing solver config")
    }

    /// Load solver settings from a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_toml_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading solver config {}", path.as_ref().display()))?;
        Self::from_toml_str(&raw)
    }
}

fn default_max_iterations() -> usize {
    100
}

fn default_price_tolerance() -> f64 {
    1e-8
}

fn default_vol_lower() -> f64 {
    1e-6
}

fn default_vol_upper() -> f64 {
    5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.price_tolerance, 1e-8);
        assert_eq!(config.vol_lower, 1e-6);
        assert_eq!(config.vol_upper, 5.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SolverConfig::from_toml_str("max_iterations = 25\n").unwrap();
        assert_eq!(config.max_iterations, 25);
        assert_eq!(config.price_tolerance, 1e-8);
        assert_eq!(config.vol_upper, 5.0);
    }
}
