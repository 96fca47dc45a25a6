//! Wage table loading for the wage estimator.
//!
//! The built-in table is embedded into the binary from
//! `config/wage_table.yaml`. An alternative table with the same layout can
//! be loaded from disk.
//!
//! # Example
//!
//! ```
//! use wage_estimator::config::WageTableLoader;
//!
//! let table = WageTableLoader::builtin().unwrap();
//! println!("Loaded {} wages effective {}", table.leaf_count(), table.effective_date());
//! ```

mod loader;
mod types;

pub use loader::{BUILTIN_TABLE_YAML, WageTableLoader};
pub use types::{CityEntry, CountryEntry, StateEntry, WageTableFile};
