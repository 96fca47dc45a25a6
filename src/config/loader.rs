//! Wage table loading functionality.
//!
//! This module provides the [`WageTableLoader`] type for building a
//! validated [`WageTable`] from YAML.

use std::fs;
use std::path::Path;

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{USD, WageTable};

use super::types::WageTableFile;

/// The built-in wage table, embedded at compile time.
pub const BUILTIN_TABLE_YAML: &str = include_str!("../../config/wage_table.yaml");

const BUILTIN_SOURCE: &str = "<builtin>";

/// Loads wage tables from YAML.
///
/// # File Layout
///
/// ```text
/// effective_date: 2024-01-01
/// currency: USD
/// countries:
///   - name: US
///     states:
///       - name: Texas
///         cities:
///           - name: Austin
///             hourly: 37.50
/// ```
///
/// Countries, states and cities are kept in file order, which is the order
/// resolution scans them in.
///
/// # Example
///
/// ```no_run
/// use wage_estimator::config::WageTableLoader;
///
/// let table = WageTableLoader::load("./config/wage_table.yaml")?;
/// println!("{} countries", table.countries().len());
/// # Ok::<(), wage_estimator::error::EstimatorError>(())
/// ```
pub struct WageTableLoader;

impl WageTableLoader {
    /// Builds the table embedded in the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded YAML is broken, which the test suite rules
    /// out.
    pub fn builtin() -> EstimatorResult<WageTable> {
        Self::from_yaml_str(BUILTIN_TABLE_YAML, BUILTIN_SOURCE)
    }

    /// Loads a wage table from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns the validated table, or an error if:
    /// - The file is missing or unreadable (`TableNotFound`)
    /// - The file is not valid YAML for the table layout (`TableParseError`)
    /// - The table breaks a structural invariant (`InvalidTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EstimatorResult<WageTable> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EstimatorError::TableNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses and validates a wage table from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> EstimatorResult<WageTable> {
        let file: WageTableFile =
            serde_yaml::from_str(content).map_err(|e| EstimatorError::TableParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        if !file.currency.eq_ignore_ascii_case(USD) {
            return Err(EstimatorError::InvalidTable {
                message: format!("unsupported currency '{}', expected {}", file.currency, USD),
            });
        }

        WageTable::new(
            file.effective_date,
            file.countries.into_iter().map(Into::into).collect(),
        )
    }
}
