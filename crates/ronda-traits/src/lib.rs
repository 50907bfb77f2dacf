#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type and trait definitions for the Ronda risk framework.
//!
//! This crate provides the foundational abstractions for Value-at-Risk
//! estimation and backtesting: the return-series data model, the estimator
//! contract, breach records, and hypothesis-test results.

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod estimator;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{Result, RondaError};
pub use estimator::VaREstimator;
pub use types::{BreachRecord, BreachSeries, Date, ReturnSeries, Symbol, TestResult, VaRForecast};
