use crate::error::PricingError;
use crate::models::types::OptionParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four inputs a sensitivity sweep can vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepVariable {
    Strike,
    Volatility,
    Time,
    Rate,
}

impl SweepVariable {
    /// Panel order of the 2×2 chart: strike, volatility, time, rate.
    pub const ALL: [SweepVariable; 4] = [
        SweepVariable::Strike,
        SweepVariable::Volatility,
        SweepVariable::Time,
        SweepVariable::Rate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SweepVariable::Strike => "strike",
            SweepVariable::Volatility => "volatility",
            SweepVariable::Time => "time",
            SweepVariable::Rate => "rate",
        }
    }

    /// Panel title.
    pub fn title(&self) -> &'static str {
        match self {
            SweepVariable::Strike => "Variable Strike Price",
            SweepVariable::Volatility => "Variable Volatility",
            SweepVariable::Time => "Variable Time to Expiry",
            SweepVariable::Rate => "Variable Risk-Free Rate",
        }
    }

    /// X-axis description, with units.
    pub fn axis_label(&self) -> &'static str {
        match self {
            SweepVariable::Strike => "Strike Price ($ USD)",
            SweepVariable::Volatility => "Implied Volatility (%)",
            SweepVariable::Time => "Time to Expiry (Years)",
            SweepVariable::Rate => "Risk-Free Rate (%)",
        }
    }

    /// Current value of this variable in `params`.
    pub fn current(&self, params: &OptionParameters) -> f64 {
        match self {
            SweepVariable::Strike => params.strike,
            SweepVariable::Volatility => params.volatility,
            SweepVariable::Time => params.time,
            SweepVariable::Rate => params.rate,
        }
    }

    /// `params` with this variable replaced by `x`, all else held fixed.
    pub fn apply(&self, params: OptionParameters, x: f64) -> OptionParameters {
        match self {
            SweepVariable::Strike => params.with_strike(x),
            SweepVariable::Volatility => params.with_volatility(x),
            SweepVariable::Time => params.with_time(x),
            SweepVariable::Rate => params.with_rate(x),
        }
    }

    /// Whether the sample range includes its upper end.
    ///
    /// Only the rate sweep is closed on both ends; its lower end is also
    /// floored at zero when the range is built.
    pub fn inclusive_upper(&self) -> bool {
        matches!(self, SweepVariable::Rate)
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub x: f64,
    pub y: f64,
}

/// Ordered (x, price) points for one option type, x ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    pub points: Vec<SweepPoint>,
}

impl SweepSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            points: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, x: f64, y: f64) {
        self.points.push(SweepPoint { x, y });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SweepPoint> {
        self.points.iter()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// `[x, y]` pairs, the shape charting front-ends usually take.
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Smallest and largest y, or None for an empty series.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
        })
    }
}

/// A sample omitted from a sweep because pricing failed at that x.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGap {
    pub x: f64,
    pub error: PricingError,
}

/// Recommended display range for one chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Call and put curves for one varied input.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSweep {
    pub variable: SweepVariable,
    /// Value of the varied input in the base parameters (the marker line).
    pub current: f64,
    /// First sample of the range.
    pub low: f64,
    /// Upper end of the range; sampled only for the rate sweep.
    pub high: f64,
    pub call: SweepSeries,
    pub put: SweepSeries,
    /// Samples dropped from both series, in ascending x.
    pub gaps: Vec<SweepGap>,
    pub x_axis: AxisRange,
    pub y_axis: AxisRange,
}

impl ParameterSweep {
    /// Number of grid samples, priced or not.
    pub fn sample_count(&self) -> usize {
        self.call.len() + self.gaps.len()
    }

    pub fn has_gaps(&self) -> bool {
        !self.gaps.is_empty()
    }
}

/// All four sweeps for one base parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityReport {
    pub params: OptionParameters,
    pub strike: ParameterSweep,
    pub volatility: ParameterSweep,
    pub time: ParameterSweep,
    pub rate: ParameterSweep,
}

impl SensitivityReport {
    pub fn get(&self, variable: SweepVariable) -> &ParameterSweep {
        match variable {
            SweepVariable::Strike => &self.strike,
            SweepVariable::Volatility => &self.volatility,
            SweepVariable::Time => &self.time,
            SweepVariable::Rate => &self.rate,
        }
    }

    /// Sweeps in panel order.
    pub fn sweeps(&self) -> [&ParameterSweep; 4] {
        [&self.strike, &self.volatility, &self.time, &self.rate]
    }

    pub fn total_gaps(&self) -> usize {
        self.sweeps().iter().map(|s| s.gaps.len()).sum()
    }
}
