// Command-line driver: prices the configured option and, with --visualize,
// computes the sensitivity sweeps and writes the configured CSV/SVG outputs.
//
// Usage:
//     bs-sensitivity [config.toml] [--visualize]
//
// Without a config file (or without a [parameters] table) the default set
// S=52.50, K=55.00, T=0.5, r=4.5%, sigma=27% is used.

use anyhow::Result;
use bs_sensitivity::{export, render, AppConfig, InputForm, Session, View};
use std::env;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("{e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut config_path = None;
    let mut visualize = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--visualize" | "-v" => visualize = true,
            "--help" | "-h" => {
                eprintln!("Usage: bs-sensitivity [config.toml] [--visualize]");
                return Ok(());
            }
            _ => config_path = Some(arg),
        }
    }

    let config = match &config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let mut session = Session::new();
    if let Some(params) = config.parameters {
        let prices = session.submit(InputForm::from(params))?;
        println!("For {params}:");
        println!("  Call Option Price ($ USD): {:.2}", prices.call);
        println!("  Put Option Price ($ USD):  {:.2}", prices.put);
    }

    if !visualize {
        if session.inputs().is_none() {
            println!("No [parameters] configured; pass --visualize to chart the default values.");
        }
        return Ok(());
    }

    session.switch_to(View::Visualize);
    let vis = session.visualize(&config.sweep)?;
    if vis.used_defaults {
        println!("Visualizing default values: {}", vis.report.params);
    } else {
        println!("Visualizing values: {}", vis.report.params);
    }

    for sweep in vis.report.sweeps() {
        println!(
            "  {:<10} {:>3} points, {} skipped, x in [{:.3}, {:.3}], price in [{:.0}, {:.0}]",
            sweep.variable.label(),
            sweep.call.len(),
            sweep.gaps.len(),
            sweep.x_axis.min,
            sweep.x_axis.max,
            sweep.y_axis.min,
            sweep.y_axis.max
        );
        for gap in &sweep.gaps {
            println!("      skipped x={:.4}: {}", gap.x, gap.error);
        }
    }

    if let Some(path) = &config.output.csv_path {
        let rows = export::write_csv(&vis.report, path)?;
        println!("Wrote {rows} rows to {}", path.display());
    }
    if let Some(path) = &config.output.svg_path {
        render::render_svg(&vis.report, path, (config.output.width, config.output.height))?;
        println!("Chart saved to {}", path.display());
    }
    Ok(())
}
