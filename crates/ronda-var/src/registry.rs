//! Estimator registry for discovering and constructing VaR strategies.

use std::str::FromStr;

use ronda_traits::VaREstimator;
use serde::{Deserialize, Serialize};

use crate::ewma::{DEFAULT_LAMBDA, EwmaVaR};
use crate::historical::HistoricalVaR;
use crate::parametric::ParametricVaR;

/// The VaR estimation strategies this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatorKind {
    /// Empirical-quantile historical simulation.
    Historical,
    /// Gaussian fit to window mean and standard deviation.
    Parametric,
    /// Zero-mean Gaussian on EWMA conditional variance.
    Ewma,
}

impl EstimatorKind {
    /// Stable identifier, also accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Historical => "historical",
            Self::Parametric => "parametric",
            Self::Ewma => "ewma",
        }
    }

    /// Human-readable description of the strategy.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Historical => "Empirical return quantile, no distributional assumption",
            Self::Parametric => "Gaussian quantile from window mean and standard deviation",
            Self::Ewma => "Gaussian quantile on exponentially weighted conditional variance",
        }
    }

    /// All known strategies.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Historical, Self::Parametric, Self::Ewma]
    }
}

impl FromStr for EstimatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "historical" | "hist" => Ok(Self::Historical),
            "parametric" | "normal" | "gaussian" => Ok(Self::Parametric),
            "ewma" | "riskmetrics" => Ok(Self::Ewma),
            other => Err(format!(
                "unknown estimator '{other}', expected one of: historical, parametric, ewma"
            )),
        }
    }
}

impl std::fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata about an estimation strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorInfo {
    /// Unique identifier for the strategy.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Minimum window length the strategy accepts.
    pub min_window: usize,
    /// Whether the strategy takes an EWMA decay factor.
    pub uses_lambda: bool,
}

/// Get information about all available estimators.
#[must_use]
pub fn available_estimators() -> Vec<EstimatorInfo> {
    EstimatorKind::all()
        .into_iter()
        .map(|kind| {
            let estimator = build_estimator(kind, DEFAULT_LAMBDA);
            EstimatorInfo {
                name: kind.as_str(),
                description: kind.description(),
                min_window: estimator.min_window(),
                uses_lambda: kind == EstimatorKind::Ewma,
            }
        })
        .collect()
}

/// Construct an estimator by kind.
///
/// `lambda` is only consulted by the EWMA strategy.
#[must_use]
pub fn build_estimator(kind: EstimatorKind, lambda: f64) -> Box<dyn VaREstimator> {
    match kind {
        EstimatorKind::Historical => Box::new(HistoricalVaR::default()),
        EstimatorKind::Parametric => Box::new(ParametricVaR::new()),
        EstimatorKind::Ewma => Box::new(EwmaVaR::new(lambda)),
    }
}
