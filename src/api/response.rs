//! Response types for the wage estimator API.
//!
//! This module defines the success and error bodies returned by
//! `/api/wage`, and the CORS headers every API response carries.

use axum::{
    Json,
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;
use crate::models::{LocationQuery, USD, WageMatch};

/// Permissive CORS headers attached to every API response.
pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET,HEAD,POST,OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Success body for `/api/wage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageResponse {
    /// The caller's trimmed location, including ignored segments.
    pub location: String,
    /// The resolved hourly wage, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_wage: Decimal,
    /// Always "USD".
    pub currency: String,
}

impl WageResponse {
    /// Builds the response for a resolved query.
    pub fn new(query: &LocationQuery, found: &WageMatch) -> Self {
        Self {
            location: query.location().to_string(),
            hourly_wage: found.hourly_wage,
            currency: USD.to_string(),
        }
    }
}

impl IntoResponse for WageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, CORS_HEADERS, Json(self)).into_response()
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Short error title (e.g. "Location not found").
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Creates the error returned for an empty location.
    pub fn location_required() -> Self {
        Self::new(
            "Location is required",
            "Please provide a specific city, state/province, or country",
        )
    }

    /// Creates the error returned when no table entry matches.
    pub fn location_not_found(location: &str) -> Self {
        Self::new(
            "Location not found",
            format!(
                "No wage data available for {}. Try a different location or level of detail.",
                location
            ),
        )
    }

    /// Creates the error returned for unexpected failures.
    ///
    /// The failure text is passed through to the caller unchanged.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("Internal Server Error", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, CORS_HEADERS, Json(self.error)).into_response()
    }
}

impl From<EstimatorError> for ApiErrorResponse {
    fn from(error: EstimatorError) -> Self {
        match error {
            EstimatorError::LocationRequired => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::location_required(),
            },
            EstimatorError::LocationNotFound { location } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::location_not_found(&location),
            },
            EstimatorError::MalformedBody { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::internal(message),
            },
            other @ (EstimatorError::TableNotFound { .. }
            | EstimatorError::TableParseError { .. }
            | EstimatorError::InvalidTable { .. }) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::internal(other.to_string()),
            },
        }
    }
}
