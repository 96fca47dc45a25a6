//! Application state for the wage estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::models::WageTable;

/// Shared application state.
///
/// Holds the wage table. The table is never mutated after startup, so
/// handlers read it through a shared `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    table: Arc<WageTable>,
}

impl AppState {
    /// Creates a new application state around the given wage table.
    pub fn new(table: WageTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns a reference to the wage table.
    pub fn table(&self) -> &WageTable {
        &self.table
    }
}
