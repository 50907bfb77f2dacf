//! Data types for market data responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How consecutive closes are differenced into returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReturnKind {
    /// Simple returns `p_t / p_{t-1} - 1`.
    #[default]
    Simple,
    /// Log returns `ln(p_t / p_{t-1})`.
    Log,
}

impl ReturnKind {
    /// Get the CLI/display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Log => "log",
        }
    }
}

impl std::str::FromStr for ReturnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" | "arithmetic" => Ok(Self::Simple),
            "log" | "continuous" => Ok(Self::Log),
            other => Err(format!("unknown return kind '{other}' (simple, log)")),
        }
    }
}

impl std::fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Historical price data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Date.
    pub date: String,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Adjusted close.
    #[serde(rename = "adjClose", default)]
    pub adj_close: f64,
    /// Volume.
    #[serde(default)]
    pub volume: f64,
}

impl HistoricalPrice {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Split- and dividend-adjusted close, falling back to the raw close
    /// when the feed omits the adjusted field.
    #[must_use]
    pub fn effective_close(&self) -> f64 {
        if self.adj_close > 0.0 {
            self.adj_close
        } else {
            self.close
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(date: &str, close: f64, adj_close: f64) -> HistoricalPrice {
        HistoricalPrice {
            date: date.to_string(),
            open: close,
            high: close,
            low: close,
            close,
            adj_close,
            volume: 1_000.0,
        }
    }

    #[test]
    fn test_parsed_date() {
        assert_eq!(
            price("2024-03-15", 100.0, 100.0).parsed_date(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert!(price("15/03/2024", 100.0, 100.0).parsed_date().is_none());
    }

    #[test]
    fn test_effective_close_prefers_adjusted() {
        assert_eq!(price("2024-03-15", 100.0, 98.5).effective_close(), 98.5);
        assert_eq!(price("2024-03-15", 100.0, 0.0).effective_close(), 100.0);
    }

    #[test]
    fn test_return_kind_parsing() {
        assert_eq!("log".parse::<ReturnKind>().unwrap(), ReturnKind::Log);
        assert_eq!("Simple".parse::<ReturnKind>().unwrap(), ReturnKind::Simple);
        assert!("quadratic".parse::<ReturnKind>().is_err());
    }
}
