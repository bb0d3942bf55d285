//! Core abstractions shared across the market data tool crates
//!
//! This crate defines the error type that flows across the tool boundary.

pub mod error;

pub use error::{Error, Result};
