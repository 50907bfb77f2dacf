//! CLI subcommand modules.
//!
//! This module contains the implementations for all ronda CLI subcommands.

pub(crate) mod backtest;
pub(crate) mod estimators;
pub(crate) mod fetch;
pub(crate) mod var;
