//! Pricing models. `bs` hosts the Black-Scholes-Merton engine the position
//! book prices and differentiates with.

pub mod bs;
