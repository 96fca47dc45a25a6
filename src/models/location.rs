//! Location query model.
//!
//! Callers supply free text such as `"Austin, Texas"`. Only the first
//! comma-separated segment takes part in matching; the full trimmed text is
//! kept so it can be echoed back in the response.

use serde::Serialize;

use crate::error::{EstimatorError, EstimatorResult};

/// A validated location supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationQuery {
    location: String,
    token: String,
}

impl LocationQuery {
    /// Parses raw caller input into a location query.
    ///
    /// Surrounding whitespace is trimmed. The matching token is the first
    /// comma-separated segment, itself trimmed; later segments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::LocationRequired`] if the input is empty or
    /// only whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_estimator::models::LocationQuery;
    ///
    /// let query = LocationQuery::parse("  Austin, Texas ").unwrap();
    /// assert_eq!(query.location(), "Austin, Texas");
    /// assert_eq!(query.token(), "Austin");
    /// ```
    pub fn parse(input: &str) -> EstimatorResult<Self> {
        let location = input.trim();
        if location.is_empty() {
            return Err(EstimatorError::LocationRequired);
        }

        let token = location.split(',').next().unwrap_or_default().trim();

        Ok(Self {
            location: location.to_string(),
            token: token.to_string(),
        })
    }

    /// Returns the full trimmed location, including any ignored segments.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the segment used for matching.
    ///
    /// This may be empty when the input starts with a comma.
    pub fn token(&self) -> &str {
        &self.token
    }
}
