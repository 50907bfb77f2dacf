//! EWMA conditional-variance estimation (RiskMetrics recursion).

use ndarray::Array1;
use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};

/// EWMA volatility estimator.
///
/// Runs the RiskMetrics recursion
///
/// ```text
/// sigma_t^2 = lambda * sigma_{t-1}^2 + (1 - lambda) * r_{t-1}^2
/// ```
///
/// for `t = 1..n-1`, seeded at `sigma_0^2`. Index `t` of the output is the
/// variance forecast for period `t` using information strictly through
/// `t - 1`, so the path is causal by construction: altering `r_t` or any
/// later return never changes `sigma_t^2`.
///
/// When no explicit seed is supplied, `sigma_0^2 = r_0^2` — the only
/// data-driven seed that preserves causality. Seeding with the sample
/// variance of the full series (common in textbook presentations) would
/// leak future returns into early forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EwmaVolatility {
    lambda: f64,
    seed: Option<f64>,
}

impl EwmaVolatility {
    /// Creates an estimator with the given decay factor.
    ///
    /// `lambda` is validated when a path is computed, not here, so that
    /// configuration can be deserialized and reported before use.
    #[must_use]
    pub const fn new(lambda: f64) -> Self {
        Self { lambda, seed: None }
    }

    /// Creates an estimator with an explicit initial variance seed,
    /// typically the sample variance of a window that precedes the series.
    #[must_use]
    pub const fn with_seed(lambda: f64, seed: f64) -> Self {
        Self {
            lambda,
            seed: Some(seed),
        }
    }

    /// The decay factor.
    #[must_use]
    pub const fn lambda(&self) -> f64 {
        self.lambda
    }

    fn validate(&self, returns: &[f64]) -> Result<()> {
        if !(self.lambda > 0.0 && self.lambda < 1.0) {
            return Err(RondaError::InvalidParameter(format!(
                "EWMA decay factor must be in (0, 1), got {}",
                self.lambda
            )));
        }
        if let Some(seed) = self.seed {
            if !seed.is_finite() || seed < 0.0 {
                return Err(RondaError::InvalidParameter(format!(
                    "variance seed must be finite and non-negative, got {seed}"
                )));
            }
        }
        if returns.len() < 2 {
            return Err(RondaError::InsufficientData(format!(
                "EWMA recursion needs at least 2 returns, got {}",
                returns.len()
            )));
        }
        Ok(())
    }

    fn seed_variance(&self, returns: &[f64]) -> f64 {
        self.seed.unwrap_or_else(|| returns[0].powi(2))
    }

    /// Computes the conditional-variance path `sigma_1^2 .. sigma_{n-1}^2`.
    ///
    /// Output length is `n - 1`; entry `i` is the variance forecast for
    /// return index `i + 1`.
    ///
    /// # Errors
    ///
    /// - [`RondaError::InvalidParameter`] when `lambda` is outside `(0, 1)`
    ///   or an explicit seed is negative or non-finite
    /// - [`RondaError::InsufficientData`] for fewer than 2 observations
    pub fn variance_path(&self, returns: &[f64]) -> Result<Array1<f64>> {
        self.validate(returns)?;

        let mut path = Array1::zeros(returns.len() - 1);
        let mut variance = self.seed_variance(returns);
        for (t, value) in path.iter_mut().enumerate() {
            variance = self.lambda * variance + (1.0 - self.lambda) * returns[t].powi(2);
            *value = variance;
        }
        Ok(path)
    }

    /// One-step-ahead variance forecast past the end of the series:
    /// `sigma_n^2 = lambda * sigma_{n-1}^2 + (1 - lambda) * r_{n-1}^2`.
    ///
    /// This is the variance the EWMA VaR strategy uses for the first
    /// out-of-sample period.
    ///
    /// # Errors
    ///
    /// Same conditions as [`variance_path`](Self::variance_path).
    pub fn forecast_variance(&self, returns: &[f64]) -> Result<f64> {
        let path = self.variance_path(returns)?;
        let last = path[path.len() - 1];
        Ok(self.lambda * last + (1.0 - self.lambda) * returns[returns.len() - 1].powi(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_path_length_and_recursion() {
        let returns = [0.01, -0.02, 0.015, 0.0];
        let estimator = EwmaVolatility::with_seed(0.94, 0.0001);
        let path = estimator.variance_path(&returns).unwrap();

        assert_eq!(path.len(), 3);
        let s1 = 0.94 * 0.0001 + 0.06 * 0.01_f64.powi(2);
        let s2 = 0.94 * s1 + 0.06 * 0.02_f64.powi(2);
        assert_relative_eq!(path[0], s1, epsilon = 1e-15);
        assert_relative_eq!(path[1], s2, epsilon = 1e-15);
    }

    #[test]
    fn test_path_is_strictly_causal() {
        let base = [0.01, -0.02, 0.015, 0.005, -0.01];
        let mut tampered = base;
        tampered[3] = 0.5;
        tampered[4] = -0.5;

        let estimator = EwmaVolatility::new(0.9);
        let path_base = estimator.variance_path(&base).unwrap();
        let path_tampered = estimator.variance_path(&tampered).unwrap();

        // sigma_t^2 depends on returns up to t-1 only: entries 0..3 forecast
        // periods 1..3 and must be untouched by changes at index >= 3.
        for t in 0..3 {
            assert_relative_eq!(path_base[t], path_tampered[t], epsilon = 1e-15);
        }
    }

    #[test]
    fn test_forecast_variance_extends_recursion() {
        let returns = [0.01, -0.02, 0.015];
        let estimator = EwmaVolatility::with_seed(0.94, 0.0001);
        let path = estimator.variance_path(&returns).unwrap();
        let expected = 0.94 * path[1] + 0.06 * 0.015_f64.powi(2);
        assert_relative_eq!(
            estimator.forecast_variance(&returns).unwrap(),
            expected,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_lambda_out_of_range_fails() {
        for lambda in [0.0, 1.0, -0.5, 1.5] {
            let err = EwmaVolatility::new(lambda)
                .variance_path(&[0.01, 0.02])
                .unwrap_err();
            assert!(matches!(err, RondaError::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_short_series_fails() {
        let err = EwmaVolatility::new(0.94).variance_path(&[0.01]).unwrap_err();
        assert!(matches!(err, RondaError::InsufficientData(_)));
    }

    #[test]
    fn test_negative_seed_fails() {
        let err = EwmaVolatility::with_seed(0.94, -1.0)
            .variance_path(&[0.01, 0.02])
            .unwrap_err();
        assert!(matches!(err, RondaError::InvalidParameter(_)));
    }
}
