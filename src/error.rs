//! Error types for the wage estimator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while loading the wage table
//! or answering a wage request.

use thiserror::Error;

/// The main error type for the wage estimator.
///
/// Table loading, location parsing and resolution all return this error
/// type, and the HTTP layer maps each variant onto a status code.
///
/// # Example
///
/// ```
/// use wage_estimator::error::EstimatorError;
///
/// let error = EstimatorError::LocationNotFound {
///     location: "Atlantis".to_string(),
/// };
/// assert_eq!(error.to_string(), "Location not found: Atlantis");
/// ```
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Wage table file was not found at the specified path.
    #[error("Wage table not found: {path}")]
    TableNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Wage table file could not be parsed.
    #[error("Failed to parse wage table '{path}': {message}")]
    TableParseError {
        /// The path (or source name) of the table that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The wage table parsed but breaks a structural invariant.
    #[error("Invalid wage table: {message}")]
    InvalidTable {
        /// What is wrong with the table.
        message: String,
    },

    /// The caller supplied an empty or whitespace-only location.
    #[error("Location is required")]
    LocationRequired,

    /// No city, state or country in the table matched the location.
    #[error("Location not found: {location}")]
    LocationNotFound {
        /// The trimmed location as supplied by the caller.
        location: String,
    },

    /// The request body could not be decoded.
    #[error("{message}")]
    MalformedBody {
        /// The decoder's failure message.
        message: String,
    },
}

/// A type alias for Results that return EstimatorError.
pub type EstimatorResult<T> = Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_found_displays_path() {
        let error = EstimatorError::TableNotFound {
            path: "/missing/wages.yaml".to_string(),
        };
        assert_eq!(error.to_string(), "Wage table not found: /missing/wages.yaml");
    }

    #[test]
    fn test_table_parse_error_displays_path_and_message() {
        let error = EstimatorError::TableParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse wage table '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_table_displays_message() {
        let error = EstimatorError::InvalidTable {
            message: "state 'Texas' has no cities".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid wage table: state 'Texas' has no cities"
        );
    }

    #[test]
    fn test_location_required_display() {
        assert_eq!(
            EstimatorError::LocationRequired.to_string(),
            "Location is required"
        );
    }

    #[test]
    fn test_malformed_body_displays_raw_message() {
        let error = EstimatorError::MalformedBody {
            message: "EOF while parsing a value at line 1 column 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "EOF while parsing a value at line 1 column 0"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EstimatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_location_required() -> EstimatorResult<()> {
            Err(EstimatorError::LocationRequired)
        }

        fn propagates_error() -> EstimatorResult<()> {
            returns_location_required()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EstimatorError::LocationRequired)
        ));
    }
}
