//! Rolling VaR backtest comparing all three estimators on one symbol.
//!
//! This example demonstrates:
//! - Fetching historical price data from FMP API
//! - Differencing prices into a log-return series
//! - Running a rolling 99% VaR backtest for each estimator
//! - Judging every breach sequence with Kupiec, Christoffersen, and the
//!   joint conditional-coverage test

use ronda::backtest::{BacktestConfig, RollingBacktester};
use ronda::var::{EstimatorKind, build_estimator};
use ronda_data::{MarketDataClient, ReturnKind, returns_from_prices};

/// Symbol to backtest.
const SYMBOL: &str = "SPY";

/// Backtest period.
const START_DATE: &str = "2018-01-01";
const END_DATE: &str = "2024-12-01";

/// Trailing-window length in trading days.
const WINDOW: usize = 250;

/// VaR confidence level.
const ALPHA: f64 = 0.99;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize data client
    let client = MarketDataClient::from_env()
        .map_err(|_| "Failed to initialize data client. Set FMP_API_KEY environment variable.")?;

    println!("Fetching {SYMBOL} prices ({START_DATE} to {END_DATE})...");
    let prices = client
        .historical_prices(SYMBOL, Some(START_DATE), Some(END_DATE))
        .await?;
    let returns = returns_from_prices(&prices, ReturnKind::Log)?;
    println!("{} daily returns\n", returns.len());

    let backtester = RollingBacktester::new(BacktestConfig {
        window: WINDOW,
        alpha: ALPHA,
        ..BacktestConfig::default()
    })?;

    println!(
        "{:<12} {:>9} {:>9} {:>10} {:>10} {:>10}",
        "Estimator", "Breaches", "Rate", "Kupiec p", "Indep p", "Joint p"
    );
    println!("{}", "-".repeat(64));

    for kind in EstimatorKind::all() {
        let estimator = build_estimator(kind, 0.94);
        let result = backtester.run(&returns, estimator.as_ref())?;
        let summary = result.summarize()?;

        let fmt_p = |t: Option<ronda::TestResult>| {
            t.map_or_else(|| "n/a".to_string(), |t| format!("{:.4}", t.p_value))
        };

        println!(
            "{:<12} {:>9} {:>8.2}% {:>10.4} {:>10} {:>10}",
            summary.estimator,
            summary.breach_count,
            summary.observed_rate * 100.0,
            summary.kupiec.p_value,
            fmt_p(summary.independence),
            fmt_p(summary.conditional_coverage),
        );
    }

    println!(
        "\nExpected breach rate at {:.0}% confidence: {:.2}%",
        ALPHA * 100.0,
        (1.0 - ALPHA) * 100.0
    );

    Ok(())
}
