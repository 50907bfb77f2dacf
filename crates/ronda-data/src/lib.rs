//! Market data acquisition for Ronda.
//!
//! This crate fetches daily price histories from the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API and
//! differences them into the [`ReturnSeries`](ronda_traits::ReturnSeries)
//! the rest of the framework consumes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ronda_data::{MarketDataClient, ReturnKind, returns_from_prices};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketDataClient::from_env()?;
//!     let prices = client
//!         .historical_prices("SPY", Some("2020-01-01"), None)
//!         .await?;
//!     let returns = returns_from_prices(&prices, ReturnKind::Log)?;
//!     println!("{} daily returns", returns.len());
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod returns;
mod types;

pub use client::MarketDataClient;
pub use error::DataError;
pub use returns::returns_from_prices;
pub use types::{HistoricalPrice, ReturnKind};

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
