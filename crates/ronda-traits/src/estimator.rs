//! The `VaREstimator` trait shared by all estimation strategies.
//!
//! The three strategies (historical, parametric-Gaussian, EWMA) implement a
//! single contract so the rolling backtester can drive any of them
//! interchangeably.

use crate::{Result, VaRForecast};

/// A Value-at-Risk estimation strategy.
///
/// Implementations must be thread-safe (`Send + Sync`): every estimate is a
/// pure function of its window, so rolling-window steps can in principle be
/// evaluated in parallel.
///
/// # Contract
///
/// Given a trailing return window, a confidence level `alpha ∈ (0, 1)` and a
/// horizon `h ≥ 1` trading days, produce a [`VaRForecast`] under the loss
/// convention fixed in [`ronda_traits::types`](crate::types): VaR is a
/// non-negative loss magnitude and a breach means
/// `realized_return < -value`.
///
/// # Example
///
/// ```
/// use ronda_traits::{Result, VaREstimator, VaRForecast};
///
/// struct Flat;
///
/// impl VaREstimator for Flat {
///     fn name(&self) -> &str {
///         "flat"
///     }
///
///     fn min_window(&self) -> usize {
///         1
///     }
///
///     fn estimate(&self, _window: &[f64], alpha: f64, horizon: u32) -> Result<VaRForecast> {
///         Ok(VaRForecast {
///             value: 0.02,
///             expected_shortfall: None,
///             confidence: alpha,
///             horizon,
///         })
///     }
/// }
/// ```
pub trait VaREstimator: Send + Sync {
    /// Returns the name of this strategy.
    ///
    /// The name should be unique and descriptive; it is used for CLI
    /// selection and in backtest reports.
    fn name(&self) -> &str;

    /// Returns the minimum window length this strategy accepts.
    ///
    /// Calling [`estimate`](Self::estimate) with a shorter window fails with
    /// `InsufficientData`. The rolling backtester uses this to validate its
    /// window length up front.
    fn min_window(&self) -> usize;

    /// Estimates VaR (and optionally ES) from a trailing return window.
    ///
    /// # Arguments
    ///
    /// * `window` - Trailing daily returns, oldest first, strictly
    ///   excluding the period being forecast
    /// * `alpha` - Confidence level in `(0, 1)`, e.g. `0.99`
    /// * `horizon` - Forecast horizon in trading days, `>= 1`
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` when `alpha` or `horizon` is out of range, or
    ///   the window is degenerate for this strategy (e.g. zero variance)
    /// - `InsufficientData` when `window.len() < self.min_window()`
    fn estimate(&self, window: &[f64], alpha: f64, horizon: u32) -> Result<VaRForecast>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEstimator {
        value: f64,
    }

    impl VaREstimator for FixedEstimator {
        fn name(&self) -> &str {
            "fixed"
        }

        fn min_window(&self) -> usize {
            2
        }

        fn estimate(&self, window: &[f64], alpha: f64, horizon: u32) -> Result<VaRForecast> {
            if window.len() < self.min_window() {
                return Err(crate::RondaError::InsufficientData(
                    "window too short".to_string(),
                ));
            }
            Ok(VaRForecast {
                value: self.value,
                expected_shortfall: None,
                confidence: alpha,
                horizon,
            })
        }
    }

    #[test]
    fn test_estimator_contract() {
        let estimator = FixedEstimator { value: 0.015 };
        assert_eq!(estimator.name(), "fixed");
        assert_eq!(estimator.min_window(), 2);

        let forecast = estimator.estimate(&[0.01, -0.02], 0.99, 1).unwrap();
        assert_eq!(forecast.value, 0.015);
        assert_eq!(forecast.confidence, 0.99);
        assert_eq!(forecast.horizon, 1);
    }

    #[test]
    fn test_short_window_fails() {
        let estimator = FixedEstimator { value: 0.015 };
        assert!(estimator.estimate(&[0.01], 0.99, 1).is_err());
    }

    #[test]
    fn test_estimator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn VaREstimator>>();
    }
}
