//! Core data models for the wage estimator.
//!
//! This module contains the wage table, the caller's location query and the
//! outcome of resolving one against the other.

mod location;
mod wage_match;
mod wage_table;

pub use location::LocationQuery;
pub use wage_match::{MatchLevel, WageMatch};
pub use wage_table::{City, Country, State, USD, WageTable};
