//! gastrend: natural gas price estimation from monthly settlement history
//!
//! This library provides the core components for:
//! - Loading cleaned monthly (date, price) observations from CSV
//! - Degree-3 polynomial trend regression over elapsed days
//! - Monthly seasonal adjustments from mean residuals against the trend
//! - Point-in-time price estimates for arbitrary calendar dates
//! - Forward extrapolation at month-start dates
//! - Summary statistics (mean, dispersion, annualized volatility, seasons)
//! - Structured logging

pub mod cli;
pub mod config;
pub mod data;
pub mod decompose;
pub mod estimate;
pub mod telemetry;
