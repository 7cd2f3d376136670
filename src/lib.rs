//! # bsm-pricer: Closed-Form European Option Pricing
//!
//! `bsm-pricer` evaluates the Black-Scholes-Merton closed form for European
//! calls and puts from five scalars: spot, strike, time to expiry, risk-free
//! rate and volatility.
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_pricer::black_scholes;
//!
//! let (call, put) = black_scholes(100.0, 100.0, 1.0, 0.05, 0.2);
//! assert_eq!(format!("{:.2}", call), "10.45");
//! assert_eq!(format!("{:.2}", put), "5.57");
//! ```
//!
//! ## Degenerate inputs
//!
//! The formula is evaluated as written. `T = 0` or `sigma = 0` divide by zero
//! and non-positive spot or strike take the log of a non-positive number; the
//! resulting NaN or infinity is returned rather than trapped. Use
//! [`price_checked`] when inputs need validating first.
//!
//! ## Standard normal CDF
//!
//! Φ is `0.5 * (1 + erf(x / sqrt(2)))` with `libm::erf`, accurate to double
//! precision. [`price_with`] accepts any other [`StandardNormal`].

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use models::bs::{bs_call_price, bs_put_price, d_terms, price, price_with};
pub use models::normal::{norm_cdf, ErfNormal, StandardNormal};
pub use pricing::{
    config::{DisplayConfig, PricerConfig, MAX_DECIMALS},
    report::{format_price, format_report},
    types::{DTerms, MarketInputs, PricingResult},
};

/// Price a European call and put under Black-Scholes-Merton.
///
/// # Arguments
///
/// * `s0` - Spot price of the underlying
/// * `k` - Strike price
/// * `t` - Time to expiration in years
/// * `r` - Continuously compounded risk-free rate
/// * `sigma` - Annualized volatility
///
/// # Returns
///
/// `(call_price, put_price)`. For `s0 > 0`, `k > 0`, `t > 0`, `sigma > 0` both
/// are finite, non-negative and satisfy put-call parity
/// `call - put = s0 - k * exp(-r * t)` up to rounding.
///
/// Inputs are not validated; see the crate docs for what degenerate inputs
/// produce.
pub fn black_scholes(s0: f64, k: f64, t: f64, r: f64, sigma: f64) -> (f64, f64) {
    price(&MarketInputs::new(s0, k, t, r, sigma)).into()
}

/// Validate `inputs`, then price them with the erf-based CDF.
///
/// # Errors
///
/// Returns the first failed precondition from [`MarketInputs::validate`].
pub fn price_checked(inputs: &MarketInputs) -> Result<PricingResult> {
    inputs.validate()?;
    Ok(price(inputs))
}

/// Price the inputs described by `config`, re-checking its display settings.
pub fn price_with_config(config: &PricerConfig) -> Result<PricingResult> {
    config.display.validate()?;
    Ok(price(&config.inputs))
}
