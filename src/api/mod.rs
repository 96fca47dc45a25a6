//! HTTP API module for the wage estimator.
//!
//! This module provides the `/api/wage` endpoint and the static estimator
//! page served on every other path.

mod handlers;
mod page;
mod request;
mod response;
mod state;

pub use handlers::{WAGE_PATH, create_router};
pub use page::INDEX_HTML;
pub use request::{WageMethod, WageQuery, WageRequest};
pub use response::{ApiError, ApiErrorResponse, CORS_HEADERS, WageResponse};
pub use state::AppState;
