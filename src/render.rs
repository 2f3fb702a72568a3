//! SVG rendering of the sensitivity panels.
//!
//! Four panels in a 2×2 grid (strike, volatility, time, rate). Calls are green
//! dots, puts red dots, and a grey vertical line marks the current value of
//! the varied input. Axis ranges come from the sweep's axis hints.

use crate::sweep::{ParameterSweep, SensitivityReport};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const CALL_COLOR: RGBColor = RGBColor(0, 170, 0);
const PUT_COLOR: RGBColor = RGBColor(220, 0, 0);
const MARKER_COLOR: RGBColor = RGBColor(120, 120, 120);

/// Draws all four panels into the SVG file at `path`.
pub fn render_svg(
    report: &SensitivityReport,
    path: impl AsRef<Path>,
    size: (u32, u32),
) -> Result<()> {
    let path = path.as_ref();
    {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_report(report, &root)?;
        root.present()?;
    }
    tracing::info!(path = %path.display(), "sensitivity chart written");
    Ok(())
}

/// Renders all four panels to an SVG document in memory.
pub fn render_svg_string(report: &SensitivityReport, size: (u32, u32)) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_report(report, &root)?;
        root.present()?;
    }
    Ok(svg)
}

fn draw_report<DB: DrawingBackend>(
    report: &SensitivityReport,
    root: &DrawingArea<DB, Shift>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let root = root.titled(
        &format!("How Are Option Prices Affected by Changes in Parameters? ({})", report.params),
        ("sans-serif", 22.0),
    )?;

    for (area, sweep) in root.split_evenly((2, 2)).iter().zip(report.sweeps()) {
        draw_panel(sweep, area)?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    sweep: &ParameterSweep,
    area: &DrawingArea<DB, Shift>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let x = sweep.x_axis;
    let y = sweep.y_axis;

    let mut chart = ChartBuilder::on(area)
        .margin(12)
        .caption(sweep.variable.title(), ("sans-serif", 18))
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(x.min..x.max, y.min..y.max)?;

    chart
        .configure_mesh()
        .x_desc(sweep.variable.axis_label())
        .y_desc("Option Price ($ USD)")
        .draw()?;

    chart.draw_series(
        sweep
            .call
            .iter()
            .map(|p| Circle::new((p.x, p.y), 2, CALL_COLOR.filled())),
    )?;
    chart.draw_series(
        sweep
            .put
            .iter()
            .map(|p| Circle::new((p.x, p.y), 2, PUT_COLOR.filled())),
    )?;

    if x.contains(sweep.current) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(sweep.current, y.min), (sweep.current, y.max)],
            MARKER_COLOR.stroke_width(1),
        )))?;
    }
    Ok(())
}
