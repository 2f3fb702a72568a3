// src/sweep/generator.rs

//! All-else-equal sensitivity sweeps.
//!
//! For each varied input the generator lays an evenly spaced grid around the
//! current value, prices every grid point with the other four inputs held
//! fixed, and splits the results into a call series and a put series. Grid
//! points are computed by index (`low + i * step`), so long sweeps do not
//! accumulate rounding drift.
//!
//! A grid point the pricer rejects (a zero expiry at the bottom of the time
//! sweep, a non-positive strike or volatility) is left out of both series and
//! recorded as a [`SweepGap`] whose error is a
//! [`PricingError::NumericDegeneracy`] naming the sample. The rest of the
//! sweep is unaffected.

use crate::error::{PricingError, PricingResult};
use crate::models::traits::{BlackScholes, OptionPricer};
use crate::models::types::OptionParameters;
use crate::sweep::config::{SweepConfig, SweepSpec};
use crate::sweep::types::{
    AxisRange, ParameterSweep, SensitivityReport, SweepGap, SweepSeries, SweepVariable,
};

/// Relative slack when counting grid points, so `[45, 65)` by 0.5 holds
/// exactly 40 points regardless of representation error in the quotient.
const GRID_EPS: f64 = 1e-9;

/// Evenly spaced sample positions for one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    pub low: f64,
    pub high: f64,
    pub xs: Vec<f64>,
}

/// Builds the sample grid for `variable` around `current`.
///
/// Strike, volatility and time sweep `[current - half_width, current + half_width)`.
/// The rate sweep covers `[max(0, current - half_width), current + half_width]`.
///
/// A step too fine to separate neighbouring samples at the magnitude of
/// `current` fails with [`PricingError::InvalidSweep`].
pub fn sample_grid(
    variable: SweepVariable,
    current: f64,
    spec: &SweepSpec,
) -> PricingResult<SampleGrid> {
    spec.validate(variable)?;

    let low = match variable {
        SweepVariable::Rate => (current - spec.half_width).max(0.0),
        _ => current - spec.half_width,
    };
    let high = current + spec.half_width;

    let magnitude = low.abs().max(high.abs());
    if spec.step <= 4.0 * f64::EPSILON * magnitude {
        return Err(PricingError::InvalidSweep {
            variable: variable.label(),
            reason: "step below floating-point resolution at this magnitude",
        });
    }

    let span = (high - low) / spec.step;
    let slack = GRID_EPS * span.abs().max(1.0);
    let count = if variable.inclusive_upper() {
        (span + slack).floor() + 1.0
    } else {
        (span - slack).ceil()
    };
    let count = count.max(0.0) as usize;

    let snap = GRID_EPS * spec.step;
    let xs = (0..count)
        .map(|i| {
            let x = low + i as f64 * spec.step;
            // Land exactly on zero so a boundary sample is rejected, not priced at 1e-17
            if x.abs() < snap {
                0.0
            } else {
                x
            }
        })
        .collect();
    Ok(SampleGrid { low, high, xs })
}

/// Sweeps one input of `params` with the default Black-Scholes pricer.
pub fn sweep_parameter(
    params: &OptionParameters,
    variable: SweepVariable,
    spec: &SweepSpec,
    y_margin: f64,
) -> PricingResult<ParameterSweep> {
    sweep_parameter_with(&BlackScholes, params, variable, spec, y_margin)
}

/// Sweeps one input of `params` with an arbitrary pricer.
pub fn sweep_parameter_with<P: OptionPricer>(
    pricer: &P,
    params: &OptionParameters,
    variable: SweepVariable,
    spec: &SweepSpec,
    y_margin: f64,
) -> PricingResult<ParameterSweep> {
    params.validate()?;

    let current = variable.current(params);
    let grid = sample_grid(variable, current, spec)?;

    let mut call = SweepSeries::with_capacity(grid.xs.len());
    let mut put = SweepSeries::with_capacity(grid.xs.len());
    let mut gaps = Vec::new();

    for &x in &grid.xs {
        match pricer.price(&variable.apply(*params, x)) {
            Ok(prices) => {
                call.push(x, prices.call);
                put.push(x, prices.put);
            }
            Err(error) => {
                let error = error.at_sample(variable.label(), x);
                tracing::debug!(
                    variable = %variable,
                    x,
                    error = %error,
                    "skipping sweep sample"
                );
                gaps.push(SweepGap { x, error });
            }
        }
    }

    let x_axis = x_axis_hint(grid.low, grid.high, spec.axis_padding);
    let y_axis = y_axis_hint(&call, &put, y_margin);

    tracing::debug!(
        variable = %variable,
        model = pricer.name(),
        points = call.len(),
        gaps = gaps.len(),
        "sweep complete"
    );

    Ok(ParameterSweep {
        variable,
        current,
        low: grid.low,
        high: grid.high,
        call,
        put,
        gaps,
        x_axis,
        y_axis,
    })
}

/// Computes all four sweeps for `params` with the default Black-Scholes pricer.
pub fn sensitivity(
    params: &OptionParameters,
    config: &SweepConfig,
) -> PricingResult<SensitivityReport> {
    sensitivity_with(&BlackScholes, params, config)
}

/// Computes all four sweeps for `params` with an arbitrary pricer.
///
/// Invalid base parameters or sweep settings fail the whole request. Failures
/// at individual grid points only produce gaps.
pub fn sensitivity_with<P: OptionPricer>(
    pricer: &P,
    params: &OptionParameters,
    config: &SweepConfig,
) -> PricingResult<SensitivityReport> {
    params.validate()?;
    config.validate()?;

    let run = |variable: SweepVariable| {
        sweep_parameter_with(pricer, params, variable, config.spec(variable), config.y_margin)
    };

    Ok(SensitivityReport {
        params: *params,
        strike: run(SweepVariable::Strike)?,
        volatility: run(SweepVariable::Volatility)?,
        time: run(SweepVariable::Time)?,
        rate: run(SweepVariable::Rate)?,
    })
}

/// `[max(0, low - pad), high + pad]`, never narrower than `[min, min + pad]`.
///
/// The upper bound only matters for an empty rate grid, whose `high` lies
/// below the zero floor.
pub fn x_axis_hint(low: f64, high: f64, padding: f64) -> AxisRange {
    let min = (low - padding).max(0.0);
    AxisRange {
        min,
        max: (high + padding).max(min + padding),
    }
}

/// Whole-unit range around the prices of both series, floored at zero.
///
/// With no priced points at all the range is `[0, margin]`.
pub fn y_axis_hint(call: &SweepSeries, put: &SweepSeries, margin: f64) -> AxisRange {
    let bounds = match (call.y_bounds(), put.y_bounds()) {
        (Some((a_lo, a_hi)), Some((b_lo, b_hi))) => Some((a_lo.min(b_lo), a_hi.max(b_hi))),
        (Some(b), None) | (None, Some(b)) => Some(b),
        (None, None) => None,
    };
    match bounds {
        Some((lo, hi)) => AxisRange {
            min: (lo.floor() - margin).max(0.0),
            max: hi.ceil() + margin,
        },
        None => AxisRange {
            min: 0.0,
            max: margin,
        },
    }
}
