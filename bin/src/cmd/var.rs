//! Var command implementation.

use crate::data;
use anyhow::Result;
use ronda_data::ReturnKind;
use ronda_var::{EstimatorKind, build_estimator};
use std::path::Path;

/// Estimate VaR and ES from the latest trailing window of a return series.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn estimate_var(
    estimator_name: &str,
    file: Option<&Path>,
    symbol: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    kind: &str,
    alpha: f64,
    horizon: u32,
    window: usize,
    lambda: f64,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      VaR Estimation                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let estimator_kind: EstimatorKind = estimator_name
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let return_kind: ReturnKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let estimator = build_estimator(estimator_kind, lambda);

    println!("Estimator:  {} ({})", estimator.name(), estimator_name);
    println!("Confidence: {:.1}%", alpha * 100.0);
    println!("Horizon:    {} day(s)", horizon);
    println!("Window:     {} observations", window);
    println!();

    let series = data::load_returns(file, symbol, from, to, return_kind).await?;
    println!(
        "Loaded {} daily returns ({} to {})",
        series.len(),
        series.dates().first().map_or_else(String::new, |d| d.to_string()),
        series.dates().last().map_or_else(String::new, |d| d.to_string()),
    );
    println!();

    if series.len() < window {
        return Err(anyhow::anyhow!(
            "series has {} returns, need {} for the requested window",
            series.len(),
            window
        ));
    }

    let start = series.len() - window;
    let trailing = series.window(start, series.len())?;
    let forecast = estimator.estimate(trailing, alpha, horizon)?;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("FORECAST");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!(
        "  VaR {:.0}% ({}d):        {:>8.4}%",
        alpha * 100.0,
        horizon,
        forecast.value * 100.0
    );
    match forecast.expected_shortfall {
        Some(es) => println!(
            "  ES  {:.0}% ({}d):        {:>8.4}%",
            alpha * 100.0,
            horizon,
            es * 100.0
        ),
        None => println!("  ES:                   N/A"),
    }
    println!();
    println!("A loss worse than the VaR figure is expected on {:.1}% of periods.",
        (1.0 - alpha) * 100.0);
    println!();

    Ok(())
}
