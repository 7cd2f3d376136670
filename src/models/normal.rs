//! Standard normal cumulative distribution function.
//!
//! The pricer only needs Φ, so the distribution is exposed behind a small
//! trait. [`ErfNormal`] evaluates Φ through `libm::erf` and is what every
//! pricing entry point uses.

use std::fmt::Debug;

/// Standard normal CDF, Φ(x) for N(0, 1).
pub trait StandardNormal: Send + Sync + Debug {
    fn cdf(&self, x: f64) -> f64;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Φ(x) = 0.5 * [1 + erf(x / sqrt(2))]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Φ via the double-precision error function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErfNormal;

impl StandardNormal for ErfNormal {
    fn cdf(&self, x: f64) -> f64 {
        norm_cdf(x)
    }

    fn name(&self) -> &'static str {
        "erf"
    }
}
