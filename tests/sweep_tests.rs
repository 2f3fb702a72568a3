
use bs_sensitivity::sweep::{x_axis_hint, y_axis_hint};
use bs_sensitivity::{
    default_configs, price, sensitivity, sweep_parameter, AxisRange, OptionParameters,
    PricingError, SweepVariable,
};
use test_utils::{random_params, seeded_rng};

/// Strike sweep around K=55 covers [45, 65) in 0.5 steps.
#[test]
fn test_strike_sweep_length_and_order() {
    let params = OptionParameters::default();
    let report = sensitivity(&params, &default_configs::standard()).unwrap();
    let xs = report.strike.call.xs();

    assert_eq!(xs.len(), 40);
    assert_eq!(xs[0], 45.0);
    assert_eq!(xs[39], 64.5);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(report.strike.put.xs(), xs);
    assert!(report.strike.gaps.is_empty());
}

/// The rate sweep floors its low end at zero; the others subtract plainly.
#[test]
fn test_rate_sweep_lower_clamp() {
    let params = OptionParameters::default().with_rate(3.0);
    let report = sensitivity(&params, &default_configs::standard()).unwrap();

    assert_eq!(report.rate.low, 0.0);
    assert_eq!(report.rate.call.points[0].x, 0.0);
    assert_eq!(report.rate.call.points.last().unwrap().x, 8.0);
    assert_eq!(report.strike.low, 45.0);
    assert_eq!(report.volatility.low, 12.0);
    assert!((report.time.low - 0.0).abs() < 1e-15);
}

/// Every sweep point is the pricing function evaluated with one input replaced.
#[test]
fn test_sweep_points_match_point_prices() {
    let params = OptionParameters::new(101.0, 95.0, 1.2, 2.5, 33.0).unwrap();
    let report = sensitivity(&params, &default_configs::standard()).unwrap();

    for sweep in report.sweeps() {
        for (c, p) in sweep.call.iter().zip(sweep.put.iter()) {
            assert_eq!(c.x, p.x);
            let expected = price(&sweep.variable.apply(params, c.x)).unwrap();
            assert_eq!(c.y, expected.call);
            assert_eq!(p.y, expected.put);
        }
    }
}

/// Samples at or below zero become degenerate gaps; the rest of the sweep survives.
#[test]
fn test_gaps_at_domain_boundary() {
    let config = default_configs::standard();

    // T=0.2: samples -0.3, -0.275, ..., 0.0 are dropped (13 of them)
    let sweep = sweep_parameter(
        &OptionParameters::default().with_time(0.2),
        SweepVariable::Time,
        &config.time,
        config.y_margin,
    )
    .unwrap();
    assert_eq!(sweep.gaps.len(), 13);
    assert_eq!(sweep.gaps.last().unwrap().x, 0.0);
    assert_eq!(sweep.call.len(), 27);
    assert!(sweep.call.iter().all(|p| p.x > 0.0));

    // K=8: samples -2.0 ..= 0.0 are dropped
    let sweep = sweep_parameter(
        &OptionParameters::default().with_strike(8.0),
        SweepVariable::Strike,
        &config.strike,
        config.y_margin,
    )
    .unwrap();
    assert_eq!(sweep.gaps.len(), 5);
    assert_eq!(sweep.call.len(), 35);
    assert_eq!(sweep.x_axis.min, 0.0);
    assert!(sweep.gaps.iter().all(|g| matches!(
        g.error,
        PricingError::NumericDegeneracy {
            sample: Some(("strike", x)),
            ..
        } if x == g.x
    )));

    // sigma=10%: samples -5.0 ..= -0.5 are dropped
    let sweep = sweep_parameter(
        &OptionParameters::default().with_volatility(10.0),
        SweepVariable::Volatility,
        &config.volatility,
        config.y_margin,
    )
    .unwrap();
    assert_eq!(sweep.gaps.len(), 7);
    assert_eq!(sweep.call.points[0].x, 0.25);
}

/// Axis hints can be rebuilt from the sweep bounds and series alone.
#[test]
fn test_axis_hints_are_reproducible() {
    let config = default_configs::standard();
    let mut rng = seeded_rng();
    for _ in 0..25 {
        let params = random_params(&mut rng);
        let report = sensitivity(&params, &config).unwrap();
        for sweep in report.sweeps() {
            let spec = config.spec(sweep.variable);
            assert_eq!(sweep.x_axis, x_axis_hint(sweep.low, sweep.high, spec.axis_padding));
            assert_eq!(sweep.y_axis, y_axis_hint(&sweep.call, &sweep.put, config.y_margin));
            assert!(sweep.x_axis.min >= 0.0 && sweep.y_axis.min >= 0.0);
            assert!(sweep.x_axis.min <= sweep.x_axis.max, "inverted x axis: {sweep:?}");
            if sweep.current >= 0.0 {
                assert!(sweep.x_axis.contains(sweep.current));
            }
            for p in sweep.call.iter().chain(sweep.put.iter()) {
                assert!(sweep.y_axis.contains(p.y));
            }
        }
    }
}

/// Put-call parity holds at every sample of every sweep.
#[test]
fn test_parity_along_sweeps() {
    let params = OptionParameters::default();
    let report = sensitivity(&params, &default_configs::standard()).unwrap();
    for sweep in report.sweeps() {
        for (c, p) in sweep.call.iter().zip(sweep.put.iter()) {
            let at = sweep.variable.apply(params, c.x);
            assert!((c.y - p.y - (at.spot - at.discounted_strike())).abs() < 1e-6);
        }
    }
}

#[test]
fn test_curve_shapes() {
    let report = sensitivity(&OptionParameters::default(), &default_configs::standard()).unwrap();

    // Call falls and put rises with strike
    assert!(report.strike.call.ys().windows(2).all(|w| w[1] <= w[0]));
    assert!(report.strike.put.ys().windows(2).all(|w| w[1] >= w[0]));

    // Both rise with volatility
    assert!(report.volatility.call.ys().windows(2).all(|w| w[1] >= w[0]));
    assert!(report.volatility.put.ys().windows(2).all(|w| w[1] >= w[0]));

    // Call rises and put falls with the rate
    assert!(report.rate.call.ys().windows(2).all(|w| w[1] >= w[0]));
    assert!(report.rate.put.ys().windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn test_resolution_presets() {
    let params = OptionParameters::default();
    let fine = sensitivity(&params, &default_configs::fine()).unwrap();
    let coarse = sensitivity(&params, &default_configs::coarse()).unwrap();
    assert_eq!(fine.strike.sample_count(), 80);
    assert_eq!(coarse.strike.sample_count(), 20);
    assert_eq!(fine.volatility.sample_count(), 80);
    assert_eq!(coarse.volatility.sample_count(), 20);
}

#[test]
fn test_default_report_gap_count() {
    // Only the T=0 sample of the time sweep is dropped for the default set
    let report = sensitivity(&OptionParameters::default(), &default_configs::standard()).unwrap();
    assert_eq!(report.total_gaps(), 1);
    assert!(report.time.has_gaps());
    assert_eq!(report.get(SweepVariable::Rate).variable, SweepVariable::Rate);
}

/// A rate far enough below zero empties the rate sweep without inverting its axes.
#[test]
fn test_deeply_negative_rate_report() {
    let params = OptionParameters::default().with_rate(-6.0);
    let report = sensitivity(&params, &default_configs::standard()).unwrap();

    assert_eq!(report.rate.sample_count(), 0);
    assert_eq!(report.rate.x_axis, AxisRange { min: 0.0, max: 0.5 });
    for sweep in report.sweeps() {
        assert!(sweep.x_axis.min <= sweep.x_axis.max, "{:?}", sweep.variable);
        assert!(sweep.y_axis.min <= sweep.y_axis.max, "{:?}", sweep.variable);
    }
    assert_eq!(report.strike.call.len(), 40);
}

/// Grids that cannot hold distinct samples at the given magnitude are refused.
#[test]
fn test_unresolvable_step_fails_request() {
    let params = OptionParameters::new(1.0e16, 1.0e16, 0.5, 4.5, 27.0).unwrap();
    let err = sensitivity(&params, &default_configs::standard()).unwrap_err();
    assert!(matches!(err, PricingError::InvalidSweep { variable: "strike", .. }), "{err}");
}
