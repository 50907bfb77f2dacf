//! Return-series construction from historical prices.

use chrono::NaiveDate;
use ronda_traits::ReturnSeries;

use crate::{Result, error::DataError, types::HistoricalPrice, types::ReturnKind};

/// Differences a price history into a daily [`ReturnSeries`].
///
/// Prices are re-sorted into ascending date order first (the FMP feed
/// delivers most-recent-first), and each return is stamped with the date it
/// was realized on, so a history of `n` closes yields `n - 1` returns. The
/// adjusted close is used when present.
///
/// # Errors
///
/// - [`DataError::NoData`] with fewer than 2 usable prices
/// - [`DataError::InvalidPrice`] for an unparsable date, a non-positive
///   close, or duplicate dates
pub fn returns_from_prices(prices: &[HistoricalPrice], kind: ReturnKind) -> Result<ReturnSeries> {
    if prices.len() < 2 {
        return Err(DataError::NoData(format!(
            "need at least 2 prices to compute returns, got {}",
            prices.len()
        )));
    }

    let mut dated: Vec<(NaiveDate, f64)> = Vec::with_capacity(prices.len());
    for price in prices {
        let date = price
            .parsed_date()
            .ok_or_else(|| DataError::InvalidPrice(format!("unparsable date '{}'", price.date)))?;
        let close = price.effective_close();
        if close <= 0.0 || !close.is_finite() {
            return Err(DataError::InvalidPrice(format!(
                "non-positive close {close} on {date}"
            )));
        }
        dated.push((date, close));
    }
    dated.sort_by_key(|(date, _)| *date);

    let mut pairs = Vec::with_capacity(dated.len() - 1);
    for window in dated.windows(2) {
        let (prev_date, prev_close) = window[0];
        let (date, close) = window[1];
        if date == prev_date {
            return Err(DataError::InvalidPrice(format!("duplicate date {date}")));
        }
        let value = match kind {
            ReturnKind::Simple => close / prev_close - 1.0,
            ReturnKind::Log => (close / prev_close).ln(),
        };
        pairs.push((date, value));
    }

    ReturnSeries::from_pairs(pairs).map_err(|e| DataError::InvalidPrice(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ronda_traits::Date;

    fn price(date: &str, close: f64) -> HistoricalPrice {
        HistoricalPrice {
            date: date.to_string(),
            open: close,
            high: close,
            low: close,
            close,
            adj_close: close,
            volume: 1_000.0,
        }
    }

    #[test]
    fn test_simple_returns() {
        let prices = vec![
            price("2024-01-02", 100.0),
            price("2024-01-03", 102.0),
            price("2024-01-04", 96.9),
        ];
        let series = returns_from_prices(&prices, ReturnKind::Simple).unwrap();

        assert_eq!(series.len(), 2);
        assert_relative_eq!(series.values()[0], 0.02, epsilon = 1e-12);
        assert_relative_eq!(series.values()[1], -0.05, epsilon = 1e-12);
        assert_eq!(series.dates()[0], Date::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_log_returns() {
        let prices = vec![price("2024-01-02", 100.0), price("2024-01-03", 102.0)];
        let series = returns_from_prices(&prices, ReturnKind::Log).unwrap();
        assert_relative_eq!(series.values()[0], 1.02_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_feed_order_is_normalized() {
        // Most-recent-first input, as the API delivers it.
        let prices = vec![
            price("2024-01-04", 96.9),
            price("2024-01-03", 102.0),
            price("2024-01-02", 100.0),
        ];
        let series = returns_from_prices(&prices, ReturnKind::Simple).unwrap();
        assert_relative_eq!(series.values()[0], 0.02, epsilon = 1e-12);
        assert!(series.dates().windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn test_too_few_prices_fails() {
        let err = returns_from_prices(&[price("2024-01-02", 100.0)], ReturnKind::Simple)
            .unwrap_err();
        assert!(matches!(err, DataError::NoData(_)));
    }

    #[test]
    fn test_bad_price_fails() {
        let prices = vec![price("2024-01-02", 100.0), price("2024-01-03", 0.0)];
        let err = returns_from_prices(&prices, ReturnKind::Log).unwrap_err();
        assert!(matches!(err, DataError::InvalidPrice(_)));
    }

    #[test]
    fn test_duplicate_date_fails() {
        let prices = vec![
            price("2024-01-02", 100.0),
            price("2024-01-02", 101.0),
            price("2024-01-03", 102.0),
        ];
        let err = returns_from_prices(&prices, ReturnKind::Simple).unwrap_err();
        assert!(matches!(err, DataError::InvalidPrice(_)));
    }

    #[test]
    fn test_unparsable_date_fails() {
        let prices = vec![price("02/01/2024", 100.0), price("2024-01-03", 102.0)];
        let err = returns_from_prices(&prices, ReturnKind::Simple).unwrap_err();
        assert!(matches!(err, DataError::InvalidPrice(_)));
    }
}
