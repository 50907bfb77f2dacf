//! Normal-distribution helpers shared by the parametric strategies.

use ronda_traits::{Result, RondaError};
use statrs::distribution::{ContinuousCDF, Normal};

/// Inverse standard-normal CDF at probability `p`.
///
/// Accurate to well below 1e-6 absolute, which breach classification
/// requires: the quantile feeds straight into the VaR threshold.
///
/// # Errors
///
/// Returns [`RondaError::InvalidParameter`] when `p` is outside `(0, 1)`.
pub fn inverse_normal_cdf(p: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(RondaError::InvalidParameter(format!(
            "probability must be in (0, 1), got {p}"
        )));
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| RondaError::Other(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}

/// Standard normal density at `z`.
pub fn normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Validates a confidence level `alpha ∈ (0, 1)`.
pub(crate) fn validate_confidence(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(RondaError::InvalidParameter(format!(
            "confidence level must be in (0, 1), got {alpha}"
        )))
    }
}

/// Validates a forecast horizon of at least one trading day.
pub(crate) fn validate_horizon(horizon: u32) -> Result<()> {
    if horizon >= 1 {
        Ok(())
    } else {
        Err(RondaError::InvalidParameter(
            "horizon must be at least 1 trading day".to_string(),
        ))
    }
}
