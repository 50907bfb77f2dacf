#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # ronda
//!
//! Value-at-Risk forecasting and backtesting.
//!
//! ronda is an umbrella crate that re-exports all ronda sub-crates for
//! convenience. It provides a unified API for estimating VaR and Expected
//! Shortfall, rolling those forecasts forward out of sample, and judging
//! the results with coverage tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ronda::prelude::*;
//! use ronda::var::EwmaVaR;
//! use ronda::backtest::{BacktestConfig, RollingBacktester};
//!
//! # fn main() -> Result<()> {
//! // A daily return series with aligned dates
//! let returns = ReturnSeries::from_pairs(pairs)?;
//!
//! // Walk an estimator forward, one forecast per out-of-sample day
//! let backtester = RollingBacktester::new(BacktestConfig::default())?;
//! let result = backtester.run(&returns, &EwmaVaR::default())?;
//!
//! // Kupiec, Christoffersen, and joint conditional coverage
//! let summary = result.summarize()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types and the [`VaREstimator`] contract
//! - [`var`] - Estimation strategies (historical, parametric, EWMA)
//! - [`backtest`] - Breach detection, coverage tests, rolling harness
//! - [`data`] - Market data client and return-series construction
//!
//! ## Architecture
//!
//! ronda follows a modular architecture:
//!
//! 1. **Estimators** turn a trailing return window into a [`VaRForecast`]
//! 2. **The rolling harness** steps an estimator over a series with strict
//!    no-look-ahead alignment, producing a breach series
//! 3. **Coverage tests** judge whether the breach sequence is consistent
//!    with the nominal confidence level

/// Version information for the ronda crate.
///
/// This constant contains the current version of ronda as specified in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits and Types
// ============================================================================

/// Core type and trait definitions for ronda.
///
/// This module re-exports the foundational pieces that define the ronda API:
///
/// - [`VaREstimator`] - The contract every estimation strategy implements
/// - [`ReturnSeries`] - Date-aligned daily returns, validated at construction
/// - [`VaRForecast`] - One VaR (and optional ES) forecast
/// - [`BreachSeries`] / [`TestResult`] - Backtest inputs and outputs
pub mod traits {
    pub use ronda_traits::*;
}

// Re-export the estimator contract at top level for convenience
pub use ronda_traits::VaREstimator;

// Re-export error types
pub use ronda_traits::{Result, RondaError};

// Re-export common types
pub use ronda_traits::{BreachSeries, Date, ReturnSeries, Symbol, TestResult, VaRForecast};

// ============================================================================
// Estimation Strategies
// ============================================================================

/// Value-at-Risk estimation strategies.
///
/// Three implementations of the [`VaREstimator`] trait plus the EWMA
/// variance recursion they share:
///
/// - **HistoricalVaR**: empirical window quantile with linear interpolation
/// - **ParametricVaR**: Gaussian fit to window mean and standard deviation
/// - **EwmaVaR**: zero-mean Gaussian on the RiskMetrics EWMA variance
///
/// The [`var::EstimatorKind`](ronda_var::EstimatorKind) registry maps CLI
/// names to boxed estimators.
///
/// # Example
///
/// ```ignore
/// use ronda::var::{EstimatorKind, build_estimator};
///
/// let estimator = build_estimator(EstimatorKind::Ewma, 0.94);
/// let forecast = estimator.estimate(&window, 0.99, 1)?;
/// ```
pub mod var {
    pub use ronda_var::*;
}

// ============================================================================
// Backtesting
// ============================================================================

/// Backtesting and coverage tests.
///
/// ## Key Components
///
/// - **RollingBacktester**: walk-forward harness with strict no-look-ahead
/// - **KupiecTest**: unconditional coverage (proportion of failures)
/// - **ChristoffersenTest**: breach independence and joint conditional
///   coverage
///
/// ## Test Statistics
///
/// ### Kupiec proportion of failures
///
/// Is the observed breach rate consistent with `1 - alpha`?
///
/// ```text
/// LR_POF ~ chi2(1)
/// ```
///
/// ### Christoffersen independence
///
/// Do breaches cluster? Compares a first-order Markov model of the breach
/// sequence against a single pooled breach probability:
///
/// ```text
/// LR_Ind ~ chi2(1)
/// ```
///
/// ### Conditional coverage
///
/// The joint test, rejecting a model that is miscalibrated or clustered:
///
/// ```text
/// LR_CC = LR_POF + LR_Ind ~ chi2(2)
/// ```
pub mod backtest {
    pub use ronda_backtest::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) market data client.
///
/// Fetches daily price histories and differences them into the
/// [`ReturnSeries`] the rest of the framework consumes.
///
/// ## Setup
///
/// 1. Get a free API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add to `.env` file
///
/// ## Example
///
/// ```ignore
/// use ronda::data::{MarketDataClient, ReturnKind, returns_from_prices};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MarketDataClient::from_env()?;
///     let prices = client.historical_prices("SPY", Some("2020-01-01"), None).await?;
///     let returns = returns_from_prices(&prices, ReturnKind::Log)?;
///     Ok(())
/// }
/// ```
pub mod data {
    pub use ronda_data::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits for
/// working with ronda. Import it with:
///
/// ```ignore
/// use ronda::prelude::*;
/// ```
///
/// This brings into scope:
/// - The estimator contract: [`VaREstimator`]
/// - Common types: [`ReturnSeries`], [`VaRForecast`], [`BreachSeries`],
///   [`TestResult`], [`Date`]
/// - Error types: [`Result`], [`RondaError`]
pub mod prelude {
    pub use crate::{BreachSeries, Date, ReturnSeries, TestResult, VaRForecast};
    pub use crate::{Result, RondaError};
    pub use crate::VaREstimator;
}

// ============================================================================
// Tests
// ============================================================================
