//! Kupiec proportion-of-failures (unconditional coverage) test.

use ronda_traits::{BreachSeries, Result, RondaError, TestResult};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Default significance threshold for null rejection.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Chi-squared survival function `1 - CDF(statistic)`.
pub(crate) fn chi_squared_p_value(statistic: f64, df: f64) -> Result<f64> {
    let chi = ChiSquared::new(df).map_err(|e| RondaError::Other(e.to_string()))?;
    Ok(1.0 - chi.cdf(statistic))
}

/// Kupiec proportion-of-failures test.
///
/// Tests whether the observed breach rate `x / n` is consistent with the
/// nominal exceedance probability `p = 1 - alpha`:
///
/// ```text
/// LR_POF = -2 ln[ (1-p)^(n-x) p^x / ((1-phat)^(n-x) phat^x) ] ~ chi2(1)
/// ```
///
/// The degenerate observed likelihoods are reduced explicitly rather than
/// left to produce `NaN`: `x = 0` gives `-2 n ln(1-p)` and `x = n` gives
/// `-2 n ln(p)`, so an all-clear breach series is a valid input reporting
/// `phat = 0`, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KupiecTest {
    significance: f64,
}

impl KupiecTest {
    /// Creates a test with the given significance threshold.
    #[must_use]
    pub const fn new(significance: f64) -> Self {
        Self { significance }
    }

    /// The significance threshold.
    #[must_use]
    pub const fn significance(&self) -> f64 {
        self.significance
    }

    /// Runs the test on a breach series at confidence level `alpha`.
    ///
    /// # Errors
    ///
    /// - [`RondaError::InsufficientData`] for an empty series (the test is
    ///   undefined at `n = 0`)
    /// - [`RondaError::InvalidParameter`] when `alpha` or the significance
    ///   threshold is outside `(0, 1)`
    pub fn evaluate(&self, breaches: &BreachSeries, alpha: f64) -> Result<TestResult> {
        self.evaluate_counts(breaches.len(), breaches.breach_count(), alpha)
    }

    /// Runs the test directly on observation and breach counts.
    ///
    /// # Errors
    ///
    /// Same conditions as [`evaluate`](Self::evaluate), plus
    /// [`RondaError::InvalidParameter`] when `x > n`.
    pub fn evaluate_counts(&self, n: usize, x: usize, alpha: f64) -> Result<TestResult> {
        validate_probability(alpha, "confidence level")?;
        validate_probability(self.significance, "significance threshold")?;
        if n == 0 {
            return Err(RondaError::InsufficientData(
                "Kupiec test is undefined on an empty breach series".to_string(),
            ));
        }
        if x > n {
            return Err(RondaError::InvalidParameter(format!(
                "breach count {x} exceeds observation count {n}"
            )));
        }

        let p = 1.0 - alpha;
        let nf = n as f64;
        let xf = x as f64;

        let statistic = if x == 0 {
            -2.0 * nf * (1.0 - p).ln()
        } else if x == n {
            -2.0 * nf * p.ln()
        } else {
            let p_hat = xf / nf;
            let ll_null = (nf - xf) * (1.0 - p).ln() + xf * p.ln();
            let ll_obs = (nf - xf) * (1.0 - p_hat).ln() + xf * p_hat.ln();
            (-2.0 * (ll_null - ll_obs)).max(0.0)
        };

        let p_value = chi_squared_p_value(statistic, 1.0)?;
        Ok(TestResult {
            statistic,
            df: 1,
            p_value,
            reject_null: p_value < self.significance,
            significance: self.significance,
        })
    }
}

impl Default for KupiecTest {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANCE)
    }
}

pub(crate) fn validate_probability(value: f64, what: &str) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(RondaError::InvalidParameter(format!(
            "{what} must be in (0, 1), got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_breaches_reduces_to_closed_form() {
        // x = 0, n = 250, p = 0.01: LR = -2 * 250 * ln(0.99) ~ 5.03,
        // p-value ~ 0.025 -> reject at 5%.
        let result = KupiecTest::default().evaluate_counts(250, 0, 0.99).unwrap();
        assert_relative_eq!(result.statistic, -2.0 * 250.0 * 0.99_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(result.statistic, 5.0252, epsilon = 1e-3);
        assert_relative_eq!(result.p_value, 0.025, epsilon = 1e-3);
        assert!(result.reject_null);
    }

    #[test]
    fn test_all_breaches_reduces_to_closed_form() {
        let result = KupiecTest::default().evaluate_counts(50, 50, 0.99).unwrap();
        assert_relative_eq!(result.statistic, -2.0 * 50.0 * 0.01_f64.ln(), epsilon = 1e-12);
        assert!(result.reject_null);
    }

    #[test]
    fn test_perfect_calibration_is_zero() {
        // x = n * p exactly: the two likelihoods coincide.
        let result = KupiecTest::default().evaluate_counts(100, 5, 0.95).unwrap();
        assert_relative_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.p_value, 1.0, epsilon = 1e-12);
        assert!(!result.reject_null);
    }

    #[test]
    fn test_excess_breaches_reject() {
        // 25 breaches out of 250 at 99% is a 10x exceedance.
        let result = KupiecTest::default().evaluate_counts(250, 25, 0.99).unwrap();
        assert!(result.statistic > 10.0);
        assert!(result.reject_null);
    }

    #[test]
    fn test_empty_series_is_undefined() {
        let err = KupiecTest::default().evaluate_counts(0, 0, 0.99).unwrap_err();
        assert!(matches!(err, RondaError::InsufficientData(_)));
    }

    #[test]
    fn test_breach_count_cannot_exceed_n() {
        let err = KupiecTest::default().evaluate_counts(10, 11, 0.99).unwrap_err();
        assert!(matches!(err, RondaError::InvalidParameter(_)));
    }

    #[test]
    fn test_bad_alpha_fails() {
        assert!(KupiecTest::default().evaluate_counts(100, 1, 0.0).is_err());
        assert!(KupiecTest::new(1.5).evaluate_counts(100, 1, 0.99).is_err());
    }

    #[test]
    fn test_df_is_one() {
        let result = KupiecTest::default().evaluate_counts(100, 3, 0.95).unwrap();
        assert_eq!(result.df, 1);
    }
}
