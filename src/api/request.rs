//! Request types for the wage estimator API.
//!
//! `GET` callers pass `location` in the query string and `POST` callers
//! pass it in a JSON body. Every other method is treated as carrying no
//! location at all.

use axum::http::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EstimatorError, EstimatorResult};

/// Query string for `GET /api/wage`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WageQuery {
    /// The free-text location.
    #[serde(default)]
    pub location: Option<String>,
}

impl WageQuery {
    /// Builds a query from decoded query-string pairs.
    ///
    /// When `location` is repeated the first value wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let location = pairs
            .into_iter()
            .find(|(key, _)| key == "location")
            .map(|(_, value)| value);
        Self { location }
    }
}

/// JSON body for `POST /api/wage`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WageRequest {
    /// The free-text location.
    #[serde(default)]
    pub location: Option<String>,
}

impl WageRequest {
    /// Decodes a request body.
    ///
    /// Any valid JSON is accepted. A body that is not an object, or whose
    /// `location` is missing, `null`, `false`, `0` or `""`, carries no
    /// location.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::MalformedBody`] if the body is not valid
    /// JSON, is `null`, or has a `location` that is neither a string nor
    /// one of the empty values above.
    pub fn from_body(body: &[u8]) -> EstimatorResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| malformed(e.to_string()))?;

        let location = match value {
            Value::Null => return Err(malformed("request body is null")),
            Value::Object(mut fields) => fields.remove("location").unwrap_or(Value::Null),
            _ => Value::Null,
        };

        let location = match location {
            Value::String(text) => Some(text),
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => {
                return Err(malformed(format!(
                    "location must be a string, got {}",
                    other
                )));
            }
        };

        Ok(Self { location })
    }
}

fn malformed(message: impl Into<String>) -> EstimatorError {
    EstimatorError::MalformedBody {
        message: message.into(),
    }
}

/// How an `/api/wage` request is handled, decided by its HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WageMethod {
    /// `OPTIONS`: answer the CORS preflight with an empty body.
    Preflight,
    /// `GET`: read the location from the query string.
    Query,
    /// `POST`: read the location from the JSON body.
    Body,
    /// Anything else: no location is read.
    Other,
}

impl From<&Method> for WageMethod {
    fn from(method: &Method) -> Self {
        match *method {
            Method::OPTIONS => WageMethod::Preflight,
            Method::GET => WageMethod::Query,
            Method::POST => WageMethod::Body,
            _ => WageMethod::Other,
        }
    }
}

impl WageMethod {
    /// Extracts the raw, untrimmed location for this method.
    ///
    /// A missing or null `location` yields an empty string, which later
    /// fails validation.
    pub fn extract_location(self, query: Option<WageQuery>, body: &[u8]) -> EstimatorResult<String> {
        match self {
            WageMethod::Query => Ok(query.and_then(|q| q.location).unwrap_or_default()),
            WageMethod::Body => Ok(WageRequest::from_body(body)?.location.unwrap_or_default()),
            WageMethod::Preflight | WageMethod::Other => Ok(String::new()),
        }
    }
}
