//! Statistical utility functions shared across the framework.
//!
//! Window moments used by the parametric estimators plus the annualization
//! and performance helpers that accompany a risk report.

use crate::error::{Result, RondaError};

/// Minimum threshold for standard deviation to be treated as non-zero.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Arithmetic mean of a slice, `NaN` when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with N-1 denominator (Bessel's correction).
///
/// Returns `NaN` for fewer than 2 observations.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation with N-1 denominator.
pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Rolling sample standard deviation over fixed-size windows.
///
/// Output has length `returns.len() - window + 1`; entry `i` is the
/// standard deviation of `returns[i..i + window]`.
///
/// # Errors
///
/// - [`RondaError::InvalidParameter`] when `window < 2`
/// - [`RondaError::InsufficientData`] when `window > returns.len()`
pub fn rolling_volatility(returns: &[f64], window: usize) -> Result<Vec<f64>> {
    if window < 2 {
        return Err(RondaError::InvalidParameter(format!(
            "rolling window must be >= 2, got {window}"
        )));
    }
    if window > returns.len() {
        return Err(RondaError::InsufficientData(format!(
            "rolling window {window} exceeds series length {}",
            returns.len()
        )));
    }
    Ok(returns.windows(window).map(sample_std).collect())
}

/// Annualizes a daily volatility by the square-root-of-time rule.
pub fn annualize_volatility(daily_volatility: f64, trading_days: usize) -> f64 {
    daily_volatility * (trading_days as f64).sqrt()
}

/// Annualizes a mean daily return.
pub const fn annualize_return(daily_return: f64, trading_days: usize) -> f64 {
    daily_return * trading_days as f64
}

/// Annualized Sharpe ratio of a daily return series.
///
/// `risk_free_rate` is annualized; it is de-annualized to a daily excess
/// before the ratio is formed.
///
/// # Errors
///
/// - [`RondaError::InsufficientData`] for fewer than 2 observations
/// - [`RondaError::InvalidParameter`] when volatility is zero and the ratio
///   is undefined
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64, trading_days: usize) -> Result<f64> {
    if returns.len() < 2 {
        return Err(RondaError::InsufficientData(format!(
            "Sharpe ratio needs at least 2 returns, got {}",
            returns.len()
        )));
    }
    let daily_rf = risk_free_rate / trading_days as f64;
    let excess: Vec<f64> = returns.iter().map(|r| r - daily_rf).collect();

    let annualized_excess = annualize_return(mean(&excess), trading_days);
    let annualized_vol = annualize_volatility(sample_std(&excess), trading_days);

    if annualized_vol < MIN_STD_THRESHOLD {
        return Err(RondaError::InvalidParameter(
            "volatility is zero, Sharpe ratio undefined".to_string(),
        ));
    }
    Ok(annualized_excess / annualized_vol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_variance() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(mean(&values), 3.0);
        assert_relative_eq!(sample_variance(&values), 2.5);
        assert_relative_eq!(sample_std(&values), 2.5_f64.sqrt());
    }

    #[test]
    fn test_degenerate_inputs_are_nan() {
        assert!(mean(&[]).is_nan());
        assert!(sample_variance(&[1.0]).is_nan());
    }

    #[test]
    fn test_rolling_volatility_shape() {
        let returns = [0.01, -0.02, 0.03, 0.0, 0.01];
        let vols = rolling_volatility(&returns, 3).unwrap();
        assert_eq!(vols.len(), 3);
        assert_relative_eq!(vols[0], sample_std(&returns[0..3]));
        assert_relative_eq!(vols[2], sample_std(&returns[2..5]));
    }

    #[test]
    fn test_rolling_volatility_rejects_bad_window() {
        assert!(rolling_volatility(&[0.01, 0.02], 1).is_err());
        assert!(rolling_volatility(&[0.01, 0.02], 3).is_err());
    }

    #[test]
    fn test_annualization() {
        assert_relative_eq!(annualize_volatility(0.01, 252), 0.01 * 252.0_f64.sqrt());
        assert_relative_eq!(annualize_return(0.001, 252), 0.252);
    }

    #[test]
    fn test_sharpe_ratio_positive_drift() {
        let returns = [0.002, 0.001, 0.003, 0.002, 0.001, 0.002];
        let sharpe = sharpe_ratio(&returns, 0.0, TRADING_DAYS_PER_YEAR).unwrap();
        assert!(sharpe > 0.0);
    }

    #[test]
    fn test_sharpe_ratio_zero_vol_fails() {
        let returns = [0.001; 10];
        let err = sharpe_ratio(&returns, 0.0, TRADING_DAYS_PER_YEAR).unwrap_err();
        assert!(matches!(err, RondaError::InvalidParameter(_)));
    }

    #[test]
    fn test_sharpe_ratio_short_series_fails() {
        assert!(sharpe_ratio(&[0.01], 0.0, TRADING_DAYS_PER_YEAR).is_err());
    }
}
