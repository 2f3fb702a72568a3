use crate::error::{PricingError, PricingResult};
use crate::sweep::types::SweepVariable;
use serde::{Deserialize, Serialize};

/// Upper limit on samples per sweep.
pub const MAX_SAMPLES: usize = 100_000;

/// Range and resolution of a single sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    /// Distance from the current value to either end of the range
    pub half_width: f64,
    /// Spacing between samples
    pub step: f64,
    /// Extra room added to both ends of the x-axis hint
    #[serde(default)]
    pub axis_padding: f64,
}

impl SweepSpec {
    pub fn new(half_width: f64, step: f64, axis_padding: f64) -> Self {
        Self {
            half_width,
            step,
            axis_padding,
        }
    }

    pub fn validate(&self, variable: SweepVariable) -> PricingResult<()> {
        let fail = |reason| PricingError::InvalidSweep {
            variable: variable.label(),
            reason,
        };
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(fail("step must be > 0 and finite"));
        }
        if !self.half_width.is_finite() || self.half_width <= 0.0 {
            return Err(fail("half_width must be > 0 and finite"));
        }
        if !self.axis_padding.is_finite() || self.axis_padding < 0.0 {
            return Err(fail("axis_padding must be >= 0 and finite"));
        }
        if 2.0 * self.half_width / self.step > MAX_SAMPLES as f64 {
            return Err(fail("step too small for half_width"));
        }
        Ok(())
    }

    fn scaled_step(self, factor: f64) -> Self {
        Self {
            step: self.step * factor,
            ..self
        }
    }
}

/// Sweep settings for all four variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_strike")]
    pub strike: SweepSpec,

    #[serde(default = "default_volatility")]
    pub volatility: SweepSpec,

    #[serde(default = "default_time")]
    pub time: SweepSpec,

    #[serde(default = "default_rate")]
    pub rate: SweepSpec,

    /// Whole-unit margin added around the price range of each panel
    #[serde(default = "default_y_margin")]
    pub y_margin: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl SweepConfig {
    /// Strike ±10 by 0.5, volatility ±15 by 0.75, time ±0.5 by 0.025,
    /// rate ±5 by 0.25.
    pub fn standard() -> Self {
        Self {
            strike: default_strike(),
            volatility: default_volatility(),
            time: default_time(),
            rate: default_rate(),
            y_margin: default_y_margin(),
        }
    }

    /// Same ranges at twice the resolution.
    pub fn fine() -> Self {
        Self::standard().scale_steps(0.5)
    }

    /// Same ranges at half the resolution.
    pub fn coarse() -> Self {
        Self::standard().scale_steps(2.0)
    }

    fn scale_steps(self, factor: f64) -> Self {
        Self {
            strike: self.strike.scaled_step(factor),
            volatility: self.volatility.scaled_step(factor),
            time: self.time.scaled_step(factor),
            rate: self.rate.scaled_step(factor),
            y_margin: self.y_margin,
        }
    }

    pub fn spec(&self, variable: SweepVariable) -> &SweepSpec {
        match variable {
            SweepVariable::Strike => &self.strike,
            SweepVariable::Volatility => &self.volatility,
            SweepVariable::Time => &self.time,
            SweepVariable::Rate => &self.rate,
        }
    }

    pub fn validate(&self) -> PricingResult<()> {
        for variable in SweepVariable::ALL {
            self.spec(variable).validate(variable)?;
        }
        if !self.y_margin.is_finite() || self.y_margin < 0.0 {
            return Err(PricingError::InvalidSweep {
                variable: "y_axis",
                reason: "y_margin must be >= 0 and finite",
            });
        }
        Ok(())
    }
}

fn default_strike() -> SweepSpec {
    SweepSpec::new(10.0, 0.5, 2.0)
}

fn default_volatility() -> SweepSpec {
    SweepSpec::new(15.0, 0.75, 2.0)
}

fn default_time() -> SweepSpec {
    SweepSpec::new(0.5, 0.025, 0.1)
}

fn default_rate() -> SweepSpec {
    SweepSpec::new(5.0, 0.25, 0.5)
}

fn default_y_margin() -> f64 {
    1.0
}
