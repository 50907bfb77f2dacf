//! Data loading utilities for the Ronda CLI.

use chrono::NaiveDate;
use ronda_data::{HistoricalPrice, MarketDataClient, ReturnKind, returns_from_prices};
use ronda_traits::{ReturnSeries, RondaError};
use std::path::Path;

/// Load a return series either from a CSV file or from the FMP API.
///
/// Exactly one of `file` and `symbol` must be given. CSV files carry
/// pre-computed returns (`date,return` columns); fetched price histories are
/// differenced with `kind`.
pub(crate) async fn load_returns(
    file: Option<&Path>,
    symbol: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    kind: ReturnKind,
) -> anyhow::Result<ReturnSeries> {
    match (file, symbol) {
        (Some(path), None) => load_returns_csv(path),
        (None, Some(sym)) => {
            let client = MarketDataClient::from_env()?;
            let prices = client.historical_prices(sym, from, to).await?;
            Ok(returns_from_prices(&prices, kind)?)
        }
        (Some(_), Some(_)) => Err(anyhow::anyhow!(
            "--file and --symbol are mutually exclusive"
        )),
        (None, None) => Err(anyhow::anyhow!(
            "either --file or --symbol must be provided"
        )),
    }
}

/// Load a `date,return` CSV file into a return series.
///
/// The header row is optional; rows whose first field does not parse as a
/// date are skipped, so a `date,return` header works transparently.
pub(crate) fn load_returns_csv(path: &Path) -> anyhow::Result<ReturnSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(date_field) = record.get(0) else {
            continue;
        };
        let Ok(date) = parse_date(date_field) else {
            continue; // header or comment row
        };
        let value_field = record
            .get(1)
            .ok_or_else(|| anyhow::anyhow!("row for {date} has no return column"))?;
        let value: f64 = value_field
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("bad return '{value_field}' on {date}: {e}"))?;
        pairs.push((date, value));
    }

    if pairs.is_empty() {
        return Err(anyhow::anyhow!(
            "{} contains no parsable date,return rows",
            path.display()
        ));
    }

    Ok(ReturnSeries::from_pairs(pairs)?)
}

/// Write a fetched price history as a CSV file, oldest first.
pub(crate) fn write_prices_csv(path: &Path, prices: &[HistoricalPrice]) -> anyhow::Result<()> {
    let mut sorted: Vec<&HistoricalPrice> = prices.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| anyhow::anyhow!("cannot write {}: {e}", path.display()))?;
    writer.write_record(["date", "open", "high", "low", "close", "adjClose", "volume"])?;
    for price in sorted {
        writer.write_record([
            price.date.clone(),
            price.open.to_string(),
            price.high.to_string(),
            price.low.to_string(),
            price.close.to_string(),
            price.adj_close.to_string(),
            price.volume.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate, RondaError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| RondaError::InvalidDate(format!("Invalid date format: {}", e)))
}
