// Closed-form Black-Scholes-Merton pricing of European calls and puts.
// Degenerate inputs (T = 0, sigma = 0, non-positive S0 or K) are not
// special-cased: NaN and infinities flow straight out of the arithmetic.

use log::{trace, warn};

use crate::models::normal::{norm_cdf, ErfNormal, StandardNormal};
use crate::pricing::types::{DTerms, MarketInputs, PricingResult};

/// d1 = (ln(S0/K) + (r + sigma^2/2) T) / (sigma sqrt(T)), d2 = d1 - sigma sqrt(T)
pub fn d_terms(inputs: &MarketInputs) -> DTerms {
    let vol_sqrt_t = inputs.vol * inputs.years_to_exp.sqrt();
    let d1 = ((inputs.spot / inputs.strike).ln()
        + (inputs.rate + 0.5 * inputs.vol.powi(2)) * inputs.years_to_exp)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    DTerms { d1, d2 }
}

/// Price both legs with a caller-supplied Φ.
pub fn price_with<N: StandardNormal + ?Sized>(inputs: &MarketInputs, normal: &N) -> PricingResult {
    let DTerms { d1, d2 } = d_terms(inputs);
    let df = inputs.discount_factor();
    trace!("bs[{}]: d1={} d2={} df={}", normal.name(), d1, d2, df);

    let call_price = inputs.spot * normal.cdf(d1) - inputs.strike * df * normal.cdf(d2);
    let put_price = inputs.strike * df * normal.cdf(-d2) - inputs.spot * normal.cdf(-d1);

    let result = PricingResult {
        call_price,
        put_price,
    };
    if !result.is_finite() {
        warn!(
            "bs: non-finite prices for {:?}: call={} put={}",
            inputs, call_price, put_price
        );
    }
    result
}

/// Price both legs with the erf-based Φ.
pub fn price(inputs: &MarketInputs) -> PricingResult {
    price_with(inputs, &ErfNormal)
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let DTerms { d1, d2 } = d_terms(&MarketInputs::new(S, K, T, r, sigma));
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let DTerms { d1, d2 } = d_terms(&MarketInputs::new(S, K, T, r, sigma));
    K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}
