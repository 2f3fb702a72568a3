// Closed-form Black-Scholes pricing for European options on a non-dividend
// paying underlying. The decimal-unit kernel is exposed for callers that
// already hold fractions; `price` is the validated entry point that takes
// percent-scaled rate and volatility via `OptionParameters`.

use crate::error::{PricingError, PricingResult};
use crate::models::types::{OptionParameters, PricePair};

/// Standard normal cumulative distribution function.
pub fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// The `d1` and `d2` terms of the Black-Scholes formula (decimal units).
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// `r` and `sigma` are decimal fractions. For `T <= 0` or `sigma <= 0` the
/// limiting value `max(S - K e^{-rT}, 0)` is returned.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 || sigma <= 0.0 {
        return (S - K * (-r * T).exp()).max(0.0);
    }
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// Same units and limiting behaviour as [`bs_call_price`].
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 || sigma <= 0.0 {
        return (K * (-r * T).exp() - S).max(0.0);
    }
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Prices the call and the put for one parameter set.
///
/// Rate and volatility are read in percent and divided by 100 here, so every
/// caller passes the same units. Out-of-domain inputs are rejected with
/// [`PricingError::InvalidInput`] before any arithmetic; a non-finite result
/// from finite inputs is reported as [`PricingError::NumericDegeneracy`].
pub fn price(params: &OptionParameters) -> PricingResult<PricePair> {
    params.validate()?;

    let s = params.spot;
    let k = params.strike;
    let t = params.time;
    let r = params.rate_decimal();
    let sigma = params.volatility_decimal();

    let (d1, d2) = d1_d2(s, k, r, t, sigma);
    let discount = (-r * t).exp();
    let call = s * norm_cdf(d1) - k * discount * norm_cdf(d2);
    let put = k * discount * norm_cdf(-d2) - s * norm_cdf(-d1);

    if !call.is_finite() || !put.is_finite() {
        return Err(PricingError::NumericDegeneracy {
            sample: None,
            reason: format!("call={call}, put={put} (d1={d1}, d2={d2})"),
        });
    }

    // Rounding can leave deep out-of-the-money prices a hair below zero.
    Ok(PricePair {
        call: call.max(0.0),
        put: put.max(0.0),
    })
}
