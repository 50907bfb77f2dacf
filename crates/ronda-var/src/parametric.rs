//! Parametric (Gaussian) VaR from window mean and standard deviation.

use ronda_traits::stats::{MIN_STD_THRESHOLD, mean, sample_std};
use ronda_traits::{Result, RondaError, VaREstimator, VaRForecast};
use serde::{Deserialize, Serialize};

use crate::math::{inverse_normal_cdf, normal_pdf, validate_confidence, validate_horizon};

/// Parametric-Gaussian VaR estimator.
///
/// Fits a normal distribution to the window via its sample mean `mu` and
/// sample standard deviation `sigma`, then reads the loss quantile off the
/// fitted distribution:
///
/// ```text
/// VaR = -(mu * h + z * sigma * sqrt(h)),    z = Phi^-1(1 - alpha)
/// ES  = sigma * sqrt(h) * phi(z) / (1 - alpha) - mu * h
/// ```
///
/// Both are floored at zero per the loss convention. Drift scales linearly
/// with the horizon, dispersion by the square-root-of-time rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParametricVaR;

impl ParametricVaR {
    /// Creates the estimator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VaREstimator for ParametricVaR {
    fn name(&self) -> &str {
        "parametric"
    }

    fn min_window(&self) -> usize {
        2
    }

    fn estimate(&self, window: &[f64], alpha: f64, horizon: u32) -> Result<VaRForecast> {
        validate_confidence(alpha)?;
        validate_horizon(horizon)?;
        if window.len() < self.min_window() {
            return Err(RondaError::InsufficientData(format!(
                "parametric VaR needs at least 2 observations, got {}",
                window.len()
            )));
        }

        let sigma = sample_std(window);
        if !(sigma > MIN_STD_THRESHOLD) {
            return Err(RondaError::InvalidParameter(format!(
                "window is degenerate: standard deviation {sigma} is not positive"
            )));
        }

        let h = f64::from(horizon);
        let mu_h = mean(window) * h;
        let sigma_h = sigma * h.sqrt();
        let z = inverse_normal_cdf(1.0 - alpha)?;

        let value = (-(mu_h + z * sigma_h)).max(0.0);
        let expected_shortfall =
            (sigma_h * normal_pdf(z) / (1.0 - alpha) - mu_h).max(0.0);

        Ok(VaRForecast {
            value,
            expected_shortfall: Some(expected_shortfall),
            confidence: alpha,
            horizon,
        })
    }
}
