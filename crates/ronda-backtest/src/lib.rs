//! Backtesting for Value-at-Risk models.
//!
//! This crate scores VaR forecasts out of sample and judges the resulting
//! breach sequence with the standard coverage tests:
//!
//! - [`RollingBacktester`] — walk-forward harness stepping any
//!   [`VaREstimator`](ronda_traits::VaREstimator) over a return series with
//!   strict no-look-ahead alignment
//! - [`KupiecTest`] — unconditional coverage (proportion of failures)
//! - [`ChristoffersenTest`] — breach independence, plus the joint
//!   conditional-coverage composition
//!
//! # Example
//!
//! ```rust,ignore
//! use ronda_backtest::{BacktestConfig, RollingBacktester};
//! use ronda_var::HistoricalVaR;
//!
//! let backtester = RollingBacktester::new(BacktestConfig::default())?;
//! let result = backtester.run(&returns, &HistoricalVaR::default())?;
//! let summary = result.summarize()?;
//! println!(
//!     "{}: {} breaches in {} days (Kupiec p = {:.3})",
//!     summary.estimator, summary.breach_count, summary.observations,
//!     summary.kupiec.p_value
//! );
//! ```

pub mod breach;
pub mod christoffersen;
pub mod kupiec;
pub mod rolling;

// Re-export main types
pub use breach::{evaluate, is_breach};
pub use christoffersen::{
    ChristoffersenTest, ConditionalCoverage, TransitionCounts, transition_counts,
};
pub use kupiec::{DEFAULT_SIGNIFICANCE, KupiecTest};
pub use rolling::{
    BacktestConfig, BacktestResult, BacktestSummary, DEFAULT_WINDOW, RollingBacktester,
};
