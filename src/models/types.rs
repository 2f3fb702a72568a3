// src/models/types.rs

//! Value types exchanged between the caller and the pricing core.
//!
//! Rates and volatilities are carried in **percent** (4.5 means 4.5%) on
//! [`OptionParameters`]. The only conversion to decimal fractions happens in
//! [`OptionParameters::rate_decimal`] and [`OptionParameters::volatility_decimal`].

use crate::error::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five scalar inputs of the Black-Scholes model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time: f64,
    /// Annualized risk-free rate, in percent
    pub rate: f64,
    /// Annualized implied volatility, in percent
    pub volatility: f64,
}

impl Default for OptionParameters {
    /// The placeholder set shown when nothing has been submitted yet.
    fn default() -> Self {
        Self {
            spot: 52.5,
            strike: 55.0,
            time: 0.5,
            rate: 4.5,
            volatility: 27.0,
        }
    }
}

impl OptionParameters {
    /// Creates a parameter set with validation.
    pub fn new(
        spot: f64,
        strike: f64,
        time: f64,
        rate: f64,
        volatility: f64,
    ) -> PricingResult<Self> {
        let params = Self {
            spot,
            strike,
            time,
            rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks the domain of every field. `rate` may be zero or negative.
    pub fn validate(&self) -> PricingResult<()> {
        positive("spot", self.spot)?;
        positive("strike", self.strike)?;
        positive("time", self.time)?;
        if !self.rate.is_finite() {
            return Err(PricingError::invalid("rate", self.rate, "must be finite"));
        }
        positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Risk-free rate as a decimal fraction.
    pub fn rate_decimal(&self) -> f64 {
        self.rate / 100.0
    }

    /// Volatility as a decimal fraction.
    pub fn volatility_decimal(&self) -> f64 {
        self.volatility / 100.0
    }

    /// Strike discounted to today, `K * exp(-r T)`.
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate_decimal() * self.time).exp()
    }

    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    pub fn with_time(self, time: f64) -> Self {
        Self { time, ..self }
    }

    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }
}

fn positive(field: &'static str, value: f64) -> PricingResult<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(field, value, "must be > 0"));
    }
    Ok(())
}

impl fmt::Display for OptionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S={:.2}, K={:.2}, T={:.2}, sigma={:.2}%, r={:.2}%",
            self.spot, self.strike, self.time, self.volatility, self.rate
        )
    }
}

/// Call and put prices for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    pub call: f64,
    pub put: f64,
}

impl PricePair {
    /// `call - put`, which put-call parity ties to `S - K exp(-rT)`.
    pub fn parity_spread(&self) -> f64 {
        self.call - self.put
    }
}

impl fmt::Display for PricePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call: {:.2}  Put: {:.2}", self.call, self.put)
    }
}

/// Raw calculator form. Any field may still be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputForm {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub time: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
}

impl InputForm {
    /// Returns true once every field has a value.
    pub fn is_complete(&self) -> bool {
        self.spot.is_some()
            && self.strike.is_some()
            && self.time.is_some()
            && self.rate.is_some()
            && self.volatility.is_some()
    }
}

impl From<OptionParameters> for InputForm {
    fn from(p: OptionParameters) -> Self {
        Self {
            spot: Some(p.spot),
            strike: Some(p.strike),
            time: Some(p.time),
            rate: Some(p.rate),
            volatility: Some(p.volatility),
        }
    }
}

impl TryFrom<InputForm> for OptionParameters {
    type Error = PricingError;

    fn try_from(form: InputForm) -> PricingResult<Self> {
        let require = |field: &'static str, value: Option<f64>| {
            value.ok_or(PricingError::MissingInput { field })
        };
        OptionParameters::new(
            require("spot", form.spot)?,
            require("strike", form.strike)?,
            require("time", form.time)?,
            require("rate", form.rate)?,
            require("volatility", form.volatility)?,
        )
    }
}
