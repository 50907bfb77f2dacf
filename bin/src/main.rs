//! Ronda CLI binary.
//!
//! Provides command-line interface for the Ronda VaR framework.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Value-at-Risk forecasting and backtesting", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available VaR estimators
    Estimators {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Estimate VaR and ES from the latest window of a return series
    Var {
        /// Estimator name (historical, parametric, ewma)
        estimator: String,

        /// CSV file with date,return rows
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Ticker symbol to fetch instead of a file
        #[arg(short, long)]
        symbol: Option<String>,

        /// Start date for fetched data (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date for fetched data (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Return kind for fetched prices (simple or log)
        #[arg(short, long, default_value = "log")]
        kind: String,

        /// Confidence level
        #[arg(short, long, default_value = "0.99")]
        alpha: f64,

        /// Forecast horizon in trading days
        #[arg(short = 'H', long, default_value = "1")]
        horizon: u32,

        /// Trailing window length
        #[arg(short, long, default_value = "250")]
        window: usize,

        /// EWMA decay factor
        #[arg(short, long, default_value = "0.94")]
        lambda: f64,
    },

    /// Run a rolling-window backtest with coverage tests
    Backtest {
        /// Estimator name (historical, parametric, ewma)
        estimator: String,

        /// CSV file with date,return rows
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Ticker symbol to fetch instead of a file
        #[arg(short, long)]
        symbol: Option<String>,

        /// Start date for fetched data (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date for fetched data (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Return kind for fetched prices (simple or log)
        #[arg(short, long, default_value = "log")]
        kind: String,

        /// Confidence level
        #[arg(short, long, default_value = "0.99")]
        alpha: f64,

        /// Trailing window length
        #[arg(short, long, default_value = "250")]
        window: usize,

        /// Significance threshold for the coverage tests
        #[arg(long, default_value = "0.05")]
        significance: f64,

        /// EWMA decay factor
        #[arg(short, long, default_value = "0.94")]
        lambda: f64,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Fetch a daily price history and save it as CSV
    Fetch {
        /// Ticker symbol
        symbol: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimators { verbose } => {
            cmd::estimators::list_estimators(verbose)?;
        }
        Commands::Var {
            estimator,
            file,
            symbol,
            from,
            to,
            kind,
            alpha,
            horizon,
            window,
            lambda,
        } => {
            cmd::var::estimate_var(
                &estimator,
                file.as_deref(),
                symbol.as_deref(),
                from.as_deref(),
                to.as_deref(),
                &kind,
                alpha,
                horizon,
                window,
                lambda,
            )
            .await?;
        }
        Commands::Backtest {
            estimator,
            file,
            symbol,
            from,
            to,
            kind,
            alpha,
            window,
            significance,
            lambda,
            format,
        } => {
            cmd::backtest::run_backtest(
                &estimator,
                file.as_deref(),
                symbol.as_deref(),
                from.as_deref(),
                to.as_deref(),
                &kind,
                alpha,
                window,
                significance,
                lambda,
                &format,
            )
            .await?;
        }
        Commands::Fetch {
            symbol,
            from,
            to,
            output,
        } => {
            cmd::fetch::fetch_prices(&symbol, from.as_deref(), to.as_deref(), &output).await?;
        }
    }

    Ok(())
}
