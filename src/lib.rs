//! Contractor Wage Estimator
//!
//! This crate maps a free-text location to an estimated hourly wage for data
//! center contractors, using a fixed Country → State → City wage table, and
//! serves the estimate over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod resolution;
