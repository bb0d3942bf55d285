//! Shared utilities for the market data tool crates
//!
//! This crate provides logging setup and its configuration.

pub mod config;
pub mod logging;

pub use config::{LogFormat, LoggingConfig};
pub use logging::{init_tracing, init_tracing_with};
