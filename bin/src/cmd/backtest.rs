//! Backtest command implementation.

use crate::data;
use anyhow::Result;
use ronda_backtest::{BacktestConfig, RollingBacktester};
use ronda_data::ReturnKind;
use ronda_traits::TestResult;
use ronda_var::{EstimatorKind, build_estimator};
use std::path::Path;

/// Run a rolling-window backtest and report the coverage tests.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn run_backtest(
    estimator_name: &str,
    file: Option<&Path>,
    symbol: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    kind: &str,
    alpha: f64,
    window: usize,
    significance: f64,
    lambda: f64,
    format: &str,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Backtesting                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let estimator_kind: EstimatorKind = estimator_name
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let return_kind: ReturnKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let estimator = build_estimator(estimator_kind, lambda);

    println!("Estimator:    {} ({})", estimator.name(), estimator_name);
    println!("Confidence:   {:.1}%", alpha * 100.0);
    println!("Window:       {} observations", window);
    println!("Significance: {:.1}%", significance * 100.0);
    println!("Format:       {}", format);
    println!();

    let series = data::load_returns(file, symbol, from, to, return_kind).await?;
    println!(
        "Loaded {} daily returns ({} to {})",
        series.len(),
        series.dates().first().map_or_else(String::new, |d| d.to_string()),
        series.dates().last().map_or_else(String::new, |d| d.to_string()),
    );
    println!();

    let config = BacktestConfig {
        window,
        alpha,
        horizon: 1,
        significance,
    };
    let backtester = RollingBacktester::new(config)?;

    println!("Stepping {} out-of-sample forecasts...", series.len().saturating_sub(window));
    let result = backtester.run(&series, estimator.as_ref())?;
    let summary = result.summarize()?;
    println!();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("BACKTEST RESULTS");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    if format == "json" {
        // JSON output
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| anyhow::anyhow!("JSON serialization error: {}", e))?;
        println!("{}", json);
    } else {
        // Text output
        println!("Coverage:");
        println!("  Observations:      {:>10}", summary.observations);
        println!("  Breaches:          {:>10}", summary.breach_count);
        println!(
            "  Observed Rate:     {:>10.2}%",
            summary.observed_rate * 100.0
        );
        println!(
            "  Expected Rate:     {:>10.2}%",
            summary.expected_rate * 100.0
        );
        println!();

        println!("Kupiec (unconditional coverage):");
        print_test(&summary.kupiec);

        match summary.independence {
            Some(ref independence) => {
                println!("Christoffersen (independence):");
                print_test(independence);
            }
            None => {
                println!("Christoffersen (independence):");
                println!("  Not testable for this breach sequence.");
                println!();
            }
        }

        if let Some(ref cc) = summary.conditional_coverage {
            println!("Conditional coverage (joint):");
            print_test(cc);
        }
    }

    Ok(())
}

fn print_test(test: &TestResult) {
    println!("  LR Statistic:      {:>10.4}", test.statistic);
    println!("  p-value:           {:>10.4}", test.p_value);
    println!(
        "  Verdict:           {:>10}",
        if test.reject_null { "REJECT" } else { "PASS" }
    );
    println!();
}
