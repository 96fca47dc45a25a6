//! Resolution of caller locations to hourly wages.
//!
//! This module contains the table scan that maps a location token to a
//! city wage, a state average or a country average, and the averaging it
//! relies on.

mod average;
mod matcher;

pub use average::{WageAverage, mean_wage};
pub use matcher::{resolve, resolve_token};
