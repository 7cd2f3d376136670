use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Contract and market parameters for a single European option evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Spot price of the underlying (S0)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiration in years (T)
    pub years_to_exp: f64,
    /// Continuously compounded annual risk-free rate (r)
    pub rate: f64,
    /// Annualized volatility of log-returns (sigma)
    pub vol: f64,
}

impl MarketInputs {
    pub fn new(spot: f64, strike: f64, years_to_exp: f64, rate: f64, vol: f64) -> Self {
        Self {
            spot,
            strike,
            years_to_exp,
            rate,
            vol,
        }
    }

    /// At-the-money one-year example: S0=100, K=100, T=1, r=5%, sigma=20%.
    pub fn reference() -> Self {
        Self::new(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    /// Discount factor exp(-rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.years_to_exp).exp()
    }

    /// Checks the preconditions under which the closed form is well defined.
    ///
    /// Pricing never calls this on its own; use [`crate::price_checked`] or call
    /// it explicitly before pricing untrusted inputs.
    pub fn validate(&self) -> Result<()> {
        if self.spot <= 0.0 || !self.spot.is_finite() {
            return Err(anyhow!(
                "MarketInputs validation: spot (S0={}) must be > 0 and finite",
                self.spot
            ));
        }
        if self.strike <= 0.0 || !self.strike.is_finite() {
            return Err(anyhow!(
                "MarketInputs validation: strike (K={}) must be > 0 and finite",
                self.strike
            ));
        }
        if self.years_to_exp <= 0.0 || !self.years_to_exp.is_finite() {
            return Err(anyhow!(
                "MarketInputs validation: time to expiry (T={}) must be > 0 and finite",
                self.years_to_exp
            ));
        }
        if !self.rate.is_finite() {
            return Err(anyhow!(
                "MarketInputs validation: rate (r={}) must be finite",
                self.rate
            ));
        }
        if self.vol <= 0.0 || !self.vol.is_finite() {
            return Err(anyhow!(
                "MarketInputs validation: volatility (sigma={}) must be > 0 and finite",
                self.vol
            ));
        }
        Ok(())
    }
}

impl Default for MarketInputs {
    fn default() -> Self {
        Self::reference()
    }
}

/// The d1/d2 terms of the closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DTerms {
    pub d1: f64,
    pub d2: f64,
}

/// Call and put prices for one set of [`MarketInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
}

impl PricingResult {
    /// `(C - P) - (S0 - K e^{-rT})`, zero up to rounding when parity holds.
    pub fn parity_gap(&self, inputs: &MarketInputs) -> f64 {
        let forward_gap = inputs.spot - inputs.strike * inputs.discount_factor();
        (self.call_price - self.put_price) - forward_gap
    }

    pub fn is_finite(&self) -> bool {
        self.call_price.is_finite() && self.put_price.is_finite()
    }
}

impl From<PricingResult> for (f64, f64) {
    fn from(result: PricingResult) -> Self {
        (result.call_price, result.put_price)
    }
}
