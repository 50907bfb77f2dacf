//! Fetch command implementation.

use crate::data;
use anyhow::Result;
use ronda_data::MarketDataClient;
use std::path::Path;

/// Fetch a daily price history and save it as CSV.
pub(crate) async fn fetch_prices(
    symbol: &str,
    from: Option<&str>,
    to: Option<&str>,
    output: &Path,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Price Download                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Symbol: {}", symbol.to_uppercase());
    if let Some(f) = from {
        // Validate early so a typo fails before the network round-trip.
        data::parse_date(f)?;
        println!("From:   {}", f);
    }
    if let Some(t) = to {
        data::parse_date(t)?;
        println!("To:     {}", t);
    }
    println!("Output: {}", output.display());
    println!();

    let client = MarketDataClient::from_env()?;
    println!("Fetching price history...");
    let prices = client.historical_prices(symbol, from, to).await?;
    println!("Fetched {} daily bars", prices.len());

    data::write_prices_csv(output, &prices)?;
    println!("Wrote {}", output.display());
    println!();

    Ok(())
}
