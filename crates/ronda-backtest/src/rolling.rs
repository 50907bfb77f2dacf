//! Rolling-window walk-forward backtest harness.

use ronda_traits::{BreachSeries, Result, ReturnSeries, RondaError, VaREstimator};
use serde::{Deserialize, Serialize};

use crate::breach;
use crate::christoffersen::ChristoffersenTest;
use crate::kupiec::{DEFAULT_SIGNIFICANCE, KupiecTest};

/// Default trailing-window length, roughly one trading year.
pub const DEFAULT_WINDOW: usize = 250;

/// Parameters of a rolling backtest run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Trailing-window length in observations.
    pub window: usize,
    /// VaR confidence level in `(0, 1)`.
    pub alpha: f64,
    /// Forecast horizon in trading days.
    pub horizon: u32,
    /// Significance threshold for the coverage tests.
    pub significance: f64,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            alpha: 0.99,
            horizon: 1,
            significance: DEFAULT_SIGNIFICANCE,
        }
    }
}

/// Walk-forward backtester stepping a single estimator over a return series.
///
/// At each step `t` the estimator sees exactly the trailing window
/// `[t - W, t)` and its forecast is scored against the return at `t`, so no
/// forecast ever uses the observation it is tested on. The first `W`
/// observations seed the initial window and produce no records; a series of
/// length `n` yields exactly `n - W` out-of-sample records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingBacktester {
    config: BacktestConfig,
}

impl RollingBacktester {
    /// Creates a backtester from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidParameter`] when the window is zero,
    /// `alpha` or `significance` is outside `(0, 1)`, or the horizon is zero.
    pub fn new(config: BacktestConfig) -> Result<Self> {
        if config.window == 0 {
            return Err(RondaError::InvalidParameter(
                "window length must be at least 1".to_string(),
            ));
        }
        if !(config.alpha > 0.0 && config.alpha < 1.0) {
            return Err(RondaError::InvalidParameter(format!(
                "confidence level must be in (0, 1), got {}",
                config.alpha
            )));
        }
        if !(config.significance > 0.0 && config.significance < 1.0) {
            return Err(RondaError::InvalidParameter(format!(
                "significance threshold must be in (0, 1), got {}",
                config.significance
            )));
        }
        if config.horizon == 0 {
            return Err(RondaError::InvalidParameter(
                "horizon must be at least 1 trading day".to_string(),
            ));
        }
        Ok(Self { config })
    }

    /// The run configuration.
    #[must_use]
    pub const fn config(&self) -> &BacktestConfig {
        &self.config
    }

    /// Steps the estimator over the series and collects breach records.
    ///
    /// Any estimator failure mid-run aborts the whole backtest; a partial
    /// breach series is never returned.
    ///
    /// # Errors
    ///
    /// - [`RondaError::InsufficientData`] when the series has no
    ///   out-of-sample observations (`n <= window`) or the window is shorter
    ///   than the estimator's minimum
    /// - Any error from [`VaREstimator::estimate`]
    pub fn run(
        &self,
        series: &ReturnSeries,
        estimator: &dyn VaREstimator,
    ) -> Result<BacktestResult> {
        let w = self.config.window;
        if series.len() <= w {
            return Err(RondaError::InsufficientData(format!(
                "series of length {} leaves no out-of-sample observations after a {w}-day window",
                series.len()
            )));
        }
        if w < estimator.min_window() {
            return Err(RondaError::InsufficientData(format!(
                "window of {w} is below the {} minimum of the {} estimator",
                estimator.min_window(),
                estimator.name()
            )));
        }

        let mut records = Vec::with_capacity(series.len() - w);
        for t in w..series.len() {
            let window = series.window(t - w, t)?;
            let forecast = estimator.estimate(window, self.config.alpha, self.config.horizon)?;
            let (date, realized) = series
                .get(t)
                .ok_or_else(|| RondaError::Other(format!("missing observation at index {t}")))?;
            records.push(breach::evaluate(date, realized, &forecast));
        }

        Ok(BacktestResult {
            estimator: estimator.name().to_string(),
            config: self.config,
            breaches: BreachSeries::new(records)?,
        })
    }
}

/// Outcome of a rolling backtest run: the out-of-sample breach series plus
/// the configuration and estimator that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Name of the estimator that produced the forecasts.
    pub estimator: String,
    /// Run configuration.
    pub config: BacktestConfig,
    /// Out-of-sample breach records in date order.
    pub breaches: BreachSeries,
}

impl BacktestResult {
    /// Nominal exceedance rate `1 - alpha`.
    #[must_use]
    pub fn expected_rate(&self) -> f64 {
        1.0 - self.config.alpha
    }

    /// Runs the coverage tests and condenses the run into a summary.
    ///
    /// The independence and joint tests are skipped (reported as `None`)
    /// when the breach sequence makes them untestable, e.g. a run with no
    /// breaches at all; the Kupiec test still applies there.
    ///
    /// # Errors
    ///
    /// Any test failure other than untestable independence.
    pub fn summarize(&self) -> Result<BacktestSummary> {
        let kupiec = KupiecTest::new(self.config.significance)
            .evaluate(&self.breaches, self.config.alpha)?;

        let christoffersen = ChristoffersenTest::new(self.config.significance);
        let (independence, conditional_coverage) =
            match christoffersen.conditional_coverage(&self.breaches, self.config.alpha) {
                Ok(cc) => (Some(cc.independence), Some(cc.combined)),
                Err(RondaError::InsufficientData(_)) => (None, None),
                Err(e) => return Err(e),
            };

        Ok(BacktestSummary {
            estimator: self.estimator.clone(),
            observations: self.breaches.len(),
            breach_count: self.breaches.breach_count(),
            observed_rate: self.breaches.observed_rate(),
            expected_rate: self.expected_rate(),
            kupiec,
            independence,
            conditional_coverage,
        })
    }
}

/// Condensed backtest report: breach statistics plus the hypothesis tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSummary {
    /// Name of the estimator under test.
    pub estimator: String,
    /// Number of out-of-sample observations.
    pub observations: usize,
    /// Number of breaches.
    pub breach_count: usize,
    /// Observed breach rate `x / n`.
    pub observed_rate: f64,
    /// Nominal exceedance rate `1 - alpha`.
    pub expected_rate: f64,
    /// Unconditional-coverage test.
    pub kupiec: ronda_traits::TestResult,
    /// Independence test; `None` when the breach sequence is untestable.
    pub independence: Option<ronda_traits::TestResult>,
    /// Joint conditional-coverage test; `None` alongside `independence`.
    pub conditional_coverage: Option<ronda_traits::TestResult>,
}
