//! Point-in-time VaR and ES for one symbol, all three estimators.
//!
//! This example demonstrates:
//! - Fetching a trailing year of prices from FMP API
//! - Estimating 1-day and 10-day 99% VaR and Expected Shortfall
//! - Comparing the three estimation strategies side by side

use ronda::var::{EstimatorKind, build_estimator};
use ronda_data::{MarketDataClient, ReturnKind, returns_from_prices};

/// Symbol to estimate.
const SYMBOL: &str = "SPY";

/// VaR confidence level.
const ALPHA: f64 = 0.99;

/// EWMA decay factor.
const LAMBDA: f64 = 0.94;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = MarketDataClient::from_env()
        .map_err(|_| "Failed to initialize data client. Set FMP_API_KEY environment variable.")?;

    println!("Fetching trailing {SYMBOL} prices...");
    let prices = client
        .historical_prices(SYMBOL, Some("2024-01-01"), None)
        .await?;
    let returns = returns_from_prices(&prices, ReturnKind::Log)?;
    println!("{} daily returns\n", returns.len());

    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>12}",
        "Estimator", "VaR 1d", "ES 1d", "VaR 10d", "ES 10d"
    );
    println!("{}", "-".repeat(64));

    for kind in EstimatorKind::all() {
        let estimator = build_estimator(kind, LAMBDA);
        let one_day = estimator.estimate(returns.values(), ALPHA, 1)?;
        let ten_day = estimator.estimate(returns.values(), ALPHA, 10)?;

        let fmt_es = |es: Option<f64>| {
            es.map_or_else(|| "n/a".to_string(), |es| format!("{:.4}%", es * 100.0))
        };

        println!(
            "{:<12} {:>11.4}% {:>12} {:>11.4}% {:>12}",
            estimator.name(),
            one_day.value * 100.0,
            fmt_es(one_day.expected_shortfall),
            ten_day.value * 100.0,
            fmt_es(ten_day.expected_shortfall),
        );
    }

    println!(
        "\nFigures are loss magnitudes at {:.0}% confidence.",
        ALPHA * 100.0
    );

    Ok(())
}
