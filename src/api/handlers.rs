//! HTTP request handlers for the wage estimator API.
//!
//! This module contains the router and the `/api/wage` handler.

use std::time::Instant;

use axum::{
    Router,
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{LocationQuery, WageMatch, WageTable};
use crate::resolution::resolve;

use super::page;
use super::request::{WageMethod, WageQuery};
use super::response::{ApiErrorResponse, CORS_HEADERS, WageResponse};
use super::state::AppState;

/// Path of the wage endpoint.
pub const WAGE_PATH: &str = "/api/wage";

/// Creates the API router.
///
/// `/api/wage` accepts every method and dispatches on it explicitly; any
/// other path serves the estimator page.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(WAGE_PATH, any(wage_handler))
        .fallback(page::index)
        .with_state(state)
}

/// Handler for `/api/wage`.
///
/// `OPTIONS` answers the CORS preflight. `GET` and `POST` resolve the
/// location from the query string or JSON body respectively.
async fn wage_handler(
    State(state): State<AppState>,
    method: Method,
    query: Option<Query<Vec<(String, String)>>>,
    body: Bytes,
) -> Response {
    let wage_method = WageMethod::from(&method);
    if wage_method == WageMethod::Preflight {
        return (StatusCode::OK, CORS_HEADERS).into_response();
    }

    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, method = %method, "Processing wage request");

    let start_time = Instant::now();
    let query = query.map(|Query(pairs)| WageQuery::from_pairs(pairs));

    match estimate(state.table(), wage_method, query, &body) {
        Ok((location, found)) => {
            info!(
                correlation_id = %correlation_id,
                location = %location.location(),
                level = %found.level,
                matched = %found.name,
                averaged = found.is_average(),
                wage_count = found.wage_count,
                hourly_wage = %found.hourly_wage,
                duration_us = start_time.elapsed().as_micros(),
                "Wage resolved"
            );
            WageResponse::new(&location, &found).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                duration_us = start_time.elapsed().as_micros(),
                "Wage request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Extracts, validates and resolves the location for one request.
fn estimate(
    table: &WageTable,
    method: WageMethod,
    query: Option<WageQuery>,
    body: &[u8],
) -> EstimatorResult<(LocationQuery, WageMatch)> {
    let raw = method.extract_location(query, body)?;
    let location = LocationQuery::parse(&raw)?;

    let found = resolve(table, &location).ok_or_else(|| EstimatorError::LocationNotFound {
        location: location.location().to_string(),
    })?;

    Ok((location, found))
}
