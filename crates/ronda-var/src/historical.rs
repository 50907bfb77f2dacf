//! Historical-simulation VaR from empirical return quantiles.

use ronda_traits::{Result, RondaError, VaREstimator, VaRForecast};
use serde::{Deserialize, Serialize};

use crate::math::{validate_confidence, validate_horizon};

/// Default minimum window length.
///
/// Empirical tail quantiles become unstable below roughly 30 points, so the
/// estimator refuses shorter windows unless configured otherwise.
pub const DEFAULT_MIN_WINDOW: usize = 30;

/// Historical-simulation VaR estimator.
///
/// VaR is the negated empirical `(1 - alpha)`-quantile of the window, with
/// linear interpolation between order statistics (numpy `percentile`
/// semantics). ES is the negated mean of returns at or below that quantile.
/// No distributional assumption is made; multi-day horizons are scaled by
/// the square-root-of-time rule.
///
/// # Example
///
/// ```ignore
/// use ronda_var::HistoricalVaR;
/// use ronda_traits::VaREstimator;
///
/// let estimator = HistoricalVaR::default();
/// let forecast = estimator.estimate(&window, 0.99, 1)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalVaR {
    min_window: usize,
}

impl HistoricalVaR {
    /// Creates an estimator with a custom window floor.
    #[must_use]
    pub const fn new(min_window: usize) -> Self {
        Self { min_window }
    }
}

impl Default for HistoricalVaR {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WINDOW)
    }
}

/// Empirical quantile with linear interpolation between order statistics.
///
/// `p` must be in `[0, 1]`; `values` must be non-empty.
fn empirical_quantile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + frac * (sorted[hi] - sorted[lo])
    }
}

impl VaREstimator for HistoricalVaR {
    fn name(&self) -> &str {
        "historical"
    }

    fn min_window(&self) -> usize {
        self.min_window
    }

    fn estimate(&self, window: &[f64], alpha: f64, horizon: u32) -> Result<VaRForecast> {
        validate_confidence(alpha)?;
        validate_horizon(horizon)?;
        if window.len() < self.min_window {
            return Err(RondaError::InsufficientData(format!(
                "historical VaR needs at least {} observations, got {}",
                self.min_window,
                window.len()
            )));
        }

        let scale = f64::from(horizon).sqrt();
        let quantile = empirical_quantile(window, 1.0 - alpha);
        let value = (-quantile).max(0.0) * scale;

        let tail: Vec<f64> = window.iter().copied().filter(|r| *r <= quantile).collect();
        let expected_shortfall = if tail.is_empty() {
            value
        } else {
            let tail_mean = tail.iter().sum::<f64>() / tail.len() as f64;
            (-tail_mean).max(0.0) * scale
        };

        Ok(VaRForecast {
            value,
            expected_shortfall: Some(expected_shortfall),
            confidence: alpha,
            horizon,
        })
    }
}
