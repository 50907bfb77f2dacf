//! Common types used throughout the Ronda framework.
//!
//! This module defines the core data model: the [`ReturnSeries`] a whole
//! backtest is driven from, the [`VaRForecast`] estimators produce, the
//! [`BreachRecord`]/[`BreachSeries`] the hypothesis tests consume, and the
//! [`TestResult`] they emit.
//!
//! # Sign convention
//!
//! VaR and ES are expressed as non-negative loss magnitudes. A forecast of
//! `0.02` means "a loss of more than 2% is expected with probability
//! `1 - confidence`". A breach occurs when `realized_return < -value`
//! (strict comparison).

use serde::{Deserialize, Serialize};

use crate::error::{Result, RondaError};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, e.g. "SPY" or "^GSPC".
pub type Symbol = String;

/// An ordered series of daily returns with aligned dates.
///
/// Dates are strictly increasing and every return is finite; both are
/// enforced at construction, after which the series is immutable. Rolling
/// windows are read-only slices into the series, so no component can
/// accidentally use information from a date at or after the forecast date.
///
/// # Example
///
/// ```
/// use ronda_traits::{Date, ReturnSeries};
///
/// let dates: Vec<Date> = (1..=3)
///     .map(|d| Date::from_ymd_opt(2024, 1, d).unwrap())
///     .collect();
/// let series = ReturnSeries::new(dates, vec![0.01, -0.02, 0.005]).unwrap();
/// assert_eq!(series.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Creates a return series from aligned date and value vectors.
    ///
    /// # Errors
    ///
    /// - [`RondaError::InvalidDate`] when `dates` and `values` differ in
    ///   length or the dates are not strictly increasing.
    /// - [`RondaError::InvalidParameter`] when any return is non-finite.
    pub fn new(dates: Vec<Date>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(RondaError::InvalidDate(format!(
                "{} dates but {} returns",
                dates.len(),
                values.len()
            )));
        }
        for pair in dates.windows(2) {
            if pair[1] <= pair[0] {
                return Err(RondaError::InvalidDate(format!(
                    "dates must be strictly increasing, found {} after {}",
                    pair[1], pair[0]
                )));
            }
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite()) {
            return Err(RondaError::InvalidParameter(format!(
                "return series contains non-finite value {v}"
            )));
        }
        Ok(Self { dates, values })
    }

    /// Creates a return series from `(date, return)` pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ReturnSeries::new`].
    pub fn from_pairs(pairs: Vec<(Date, f64)>) -> Result<Self> {
        let (dates, values) = pairs.into_iter().unzip();
        Self::new(dates, values)
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the ordered dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the ordered return values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the `(date, return)` observation at `index`, if any.
    pub fn get(&self, index: usize) -> Option<(Date, f64)> {
        Some((*self.dates.get(index)?, *self.values.get(index)?))
    }

    /// Returns the half-open window `values[start..end]` as a read-only slice.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InsufficientData`] when the range is empty or
    /// extends past the end of the series.
    pub fn window(&self, start: usize, end: usize) -> Result<&[f64]> {
        if start >= end || end > self.values.len() {
            return Err(RondaError::InsufficientData(format!(
                "window [{start}, {end}) is not a valid range into a series of length {}",
                self.values.len()
            )));
        }
        Ok(&self.values[start..end])
    }
}

/// A single Value-at-Risk forecast.
///
/// `value` (and `expected_shortfall`, when present) follow the loss
/// convention documented at the [module level](self): non-negative loss
/// magnitudes, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaRForecast {
    /// Forecast loss threshold, as a positive magnitude.
    pub value: f64,
    /// Expected Shortfall beyond the VaR threshold, when the strategy
    /// provides one.
    pub expected_shortfall: Option<f64>,
    /// Confidence level the forecast was computed under, in `(0, 1)`.
    pub confidence: f64,
    /// Forecast horizon in trading days.
    pub horizon: u32,
}

/// One out-of-sample observation of a VaR forecast against reality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreachRecord {
    /// The test date the forecast applied to.
    pub date: Date,
    /// Return realized on `date`.
    pub realized_return: f64,
    /// VaR forecast made strictly before `date`, as a positive loss magnitude.
    pub var: f64,
    /// Whether `realized_return < -var`.
    pub breached: bool,
}

/// An ordered sequence of [`BreachRecord`]s.
///
/// This is the sole input to the coverage and independence tests. Ordering
/// matters: the Christoffersen test counts consecutive-pair transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachSeries {
    records: Vec<BreachRecord>,
}

impl BreachSeries {
    /// Creates a breach series, enforcing strictly increasing dates.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidDate`] when records are out of order or
    /// share a date.
    pub fn new(records: Vec<BreachRecord>) -> Result<Self> {
        for pair in records.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(RondaError::InvalidDate(format!(
                    "breach records must have strictly increasing dates, found {} after {}",
                    pair[1].date, pair[0].date
                )));
            }
        }
        Ok(Self { records })
    }

    /// Returns the records in date order.
    pub fn records(&self) -> &[BreachRecord] {
        &self.records
    }

    /// Returns the number of out-of-sample observations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of breaches.
    pub fn breach_count(&self) -> usize {
        self.records.iter().filter(|r| r.breached).count()
    }

    /// Returns the breach indicators as an ordered boolean sequence.
    pub fn flags(&self) -> Vec<bool> {
        self.records.iter().map(|r| r.breached).collect()
    }

    /// Observed breach rate `x / n`, or `NaN` for an empty series.
    pub fn observed_rate(&self) -> f64 {
        if self.records.is_empty() {
            f64::NAN
        } else {
            self.breach_count() as f64 / self.records.len() as f64
        }
    }
}

/// Outcome of a likelihood-ratio hypothesis test.
///
/// Produced fresh per invocation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Likelihood-ratio statistic, non-negative.
    pub statistic: f64,
    /// Degrees of freedom of the reference chi-squared distribution.
    pub df: u32,
    /// p-value in `[0, 1]`.
    pub p_value: f64,
    /// Whether the null hypothesis is rejected at `significance`.
    pub reject_null: bool,
    /// Significance threshold the rejection decision used.
    pub significance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Date {
        Date::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_return_series_new() {
        let series = ReturnSeries::new(vec![day(2), day(3)], vec![0.01, -0.02]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), &[0.01, -0.02]);
        assert_eq!(series.get(1), Some((day(3), -0.02)));
    }

    #[test]
    fn test_return_series_rejects_unordered_dates() {
        let err = ReturnSeries::new(vec![day(3), day(2)], vec![0.01, -0.02]).unwrap_err();
        assert!(matches!(err, RondaError::InvalidDate(_)));

        let err = ReturnSeries::new(vec![day(2), day(2)], vec![0.01, -0.02]).unwrap_err();
        assert!(matches!(err, RondaError::InvalidDate(_)));
    }

    #[test]
    fn test_return_series_rejects_length_mismatch() {
        let err = ReturnSeries::new(vec![day(2)], vec![0.01, -0.02]).unwrap_err();
        assert!(matches!(err, RondaError::InvalidDate(_)));
    }

    #[test]
    fn test_return_series_rejects_non_finite() {
        let err = ReturnSeries::new(vec![day(2), day(3)], vec![0.01, f64::NAN]).unwrap_err();
        assert!(matches!(err, RondaError::InvalidParameter(_)));
    }

    #[test]
    fn test_return_series_window() {
        let dates: Vec<Date> = (1..=5).map(day).collect();
        let series = ReturnSeries::new(dates, vec![0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();

        assert_eq!(series.window(1, 4).unwrap(), &[0.2, 0.3, 0.4]);
        assert!(series.window(3, 3).is_err());
        assert!(series.window(2, 6).is_err());
    }

    #[test]
    fn test_from_pairs() {
        let series =
            ReturnSeries::from_pairs(vec![(day(2), 0.01), (day(5), -0.03)]).unwrap();
        assert_eq!(series.dates(), &[day(2), day(5)]);
    }

    #[test]
    fn test_breach_series_counts() {
        let records = vec![
            BreachRecord {
                date: day(2),
                realized_return: -0.03,
                var: 0.02,
                breached: true,
            },
            BreachRecord {
                date: day(3),
                realized_return: 0.01,
                var: 0.02,
                breached: false,
            },
        ];
        let series = BreachSeries::new(records).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.breach_count(), 1);
        assert_eq!(series.flags(), vec![true, false]);
        assert!((series.observed_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_breach_series_rejects_unordered() {
        let record = |d: u32| BreachRecord {
            date: day(d),
            realized_return: 0.0,
            var: 0.01,
            breached: false,
        };
        let err = BreachSeries::new(vec![record(3), record(2)]).unwrap_err();
        assert!(matches!(err, RondaError::InvalidDate(_)));
    }

    #[test]
    fn test_empty_breach_series_rate_is_nan() {
        let series = BreachSeries::new(Vec::new()).unwrap();
        assert!(series.observed_rate().is_nan());
    }
}
