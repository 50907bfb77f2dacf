//! Value-at-Risk estimation strategies for the Ronda risk framework.
//!
//! This crate implements the three estimation strategies behind the shared
//! [`VaREstimator`](ronda_traits::VaREstimator) contract, plus the EWMA
//! conditional-variance recursion they build on:
//!
//! - [`HistoricalVaR`] — empirical window quantile, no distributional
//!   assumption
//! - [`ParametricVaR`] — Gaussian fit to window mean and standard deviation
//! - [`EwmaVaR`] — zero-mean Gaussian on the RiskMetrics EWMA variance
//!
//! # Example
//!
//! ```rust,ignore
//! use ronda_traits::VaREstimator;
//! use ronda_var::{EstimatorKind, build_estimator};
//!
//! let estimator = build_estimator(EstimatorKind::Historical, 0.94);
//! let forecast = estimator.estimate(&window, 0.99, 1)?;
//! println!("99% 1-day VaR: {:.4}", forecast.value);
//! ```

pub mod ewma;
pub mod historical;
pub mod math;
pub mod parametric;
pub mod registry;
pub mod volatility;

// Re-export main types
pub use ewma::{DEFAULT_LAMBDA, EwmaVaR};
pub use historical::{DEFAULT_MIN_WINDOW, HistoricalVaR};
pub use math::{inverse_normal_cdf, normal_pdf};
pub use parametric::ParametricVaR;
pub use registry::{EstimatorInfo, EstimatorKind, available_estimators, build_estimator};
pub use volatility::EwmaVolatility;
