//! EWMA-volatility VaR with square-root-of-time horizon scaling.

use ronda_traits::{Result, RondaError, VaREstimator, VaRForecast};
use serde::{Deserialize, Serialize};

use crate::math::{inverse_normal_cdf, normal_pdf, validate_confidence, validate_horizon};
use crate::volatility::EwmaVolatility;

/// Default RiskMetrics decay factor for daily data.
pub const DEFAULT_LAMBDA: f64 = 0.94;

/// EWMA VaR estimator.
///
/// Obtains the one-step-ahead conditional variance `sigma^2` from
/// [`EwmaVolatility`] and reads the Gaussian loss quantile under a
/// zero-mean assumption:
///
/// ```text
/// VaR = -z * sqrt(h * sigma^2),    z = Phi^-1(1 - alpha)
/// ES  = sqrt(h * sigma^2) * phi(z) / (1 - alpha)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EwmaVaR {
    volatility: EwmaVolatility,
}

impl EwmaVaR {
    /// Creates an estimator with the given decay factor.
    #[must_use]
    pub const fn new(lambda: f64) -> Self {
        Self {
            volatility: EwmaVolatility::new(lambda),
        }
    }

    /// Creates an estimator with an explicit initial variance seed.
    #[must_use]
    pub const fn with_seed(lambda: f64, seed: f64) -> Self {
        Self {
            volatility: EwmaVolatility::with_seed(lambda, seed),
        }
    }

    /// The decay factor.
    #[must_use]
    pub const fn lambda(&self) -> f64 {
        self.volatility.lambda()
    }
}

impl Default for EwmaVaR {
    fn default() -> Self {
        Self::new(DEFAULT_LAMBDA)
    }
}

impl VaREstimator for EwmaVaR {
    fn name(&self) -> &str {
        "ewma"
    }

    fn min_window(&self) -> usize {
        2
    }

    fn estimate(&self, window: &[f64], alpha: f64, horizon: u32) -> Result<VaRForecast> {
        validate_confidence(alpha)?;
        validate_horizon(horizon)?;

        let variance = self.volatility.forecast_variance(window)?;
        if !(variance > 0.0) {
            return Err(RondaError::InvalidParameter(format!(
                "conditional variance {variance} is not positive"
            )));
        }

        let sigma_h = (f64::from(horizon) * variance).sqrt();
        let z = inverse_normal_cdf(1.0 - alpha)?;

        Ok(VaRForecast {
            value: (-z * sigma_h).max(0.0),
            expected_shortfall: Some((sigma_h * normal_pdf(z) / (1.0 - alpha)).max(0.0)),
            confidence: alpha,
            horizon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_var_matches_forecast_variance() {
        let window = [0.01, -0.02, 0.015, 0.005, -0.01];
        let estimator = EwmaVaR::with_seed(0.94, 0.0001);

        let sigma = estimator
            .volatility
            .forecast_variance(&window)
            .unwrap()
            .sqrt();
        let z = inverse_normal_cdf(0.01).unwrap();

        let forecast = estimator.estimate(&window, 0.99, 1).unwrap();
        assert_relative_eq!(forecast.value, -z * sigma, epsilon = 1e-12);
    }

    #[test]
    fn test_horizon_scales_by_sqrt_time() {
        let window = [0.01, -0.02, 0.015, 0.005, -0.01];
        let estimator = EwmaVaR::default();
        let one_day = estimator.estimate(&window, 0.99, 1).unwrap().value;
        let ten_day = estimator.estimate(&window, 0.99, 10).unwrap().value;
        assert_relative_eq!(ten_day, one_day * 10.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_calm_window_yields_lower_var_than_volatile() {
        let calm = [0.001, -0.001, 0.002, -0.002, 0.001, -0.001];
        let volatile = [0.03, -0.04, 0.05, -0.03, 0.04, -0.05];

        let estimator = EwmaVaR::default();
        let var_calm = estimator.estimate(&calm, 0.99, 1).unwrap().value;
        let var_volatile = estimator.estimate(&volatile, 0.99, 1).unwrap().value;
        assert!(var_calm < var_volatile);
    }

    #[test]
    fn test_es_exceeds_var() {
        let window = [0.01, -0.02, 0.015, 0.005, -0.01];
        let forecast = EwmaVaR::default().estimate(&window, 0.95, 1).unwrap();
        assert!(forecast.expected_shortfall.unwrap() > forecast.value);
    }

    #[test]
    fn test_propagates_volatility_errors() {
        let err = EwmaVaR::new(1.5)
            .estimate(&[0.01, 0.02], 0.99, 1)
            .unwrap_err();
        assert!(matches!(err, RondaError::InvalidParameter(_)));

        let err = EwmaVaR::default().estimate(&[0.01], 0.99, 1).unwrap_err();
        assert!(matches!(err, RondaError::InsufficientData(_)));
    }

    #[test]
    fn test_bad_alpha_fails() {
        let window = [0.01, -0.02, 0.015];
        assert!(EwmaVaR::default().estimate(&window, 0.0, 1).is_err());
    }
}
