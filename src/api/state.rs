//! Application state for the rate service.

use std::sync::Arc;

use crate::table::EmbeddedRateTable;

/// Shared application state.
///
/// Holds the validated bracket table every request handler resolves
/// against.
#[derive(Debug, Clone)]
pub struct AppState {
    table: Arc<EmbeddedRateTable>,
}

impl AppState {
    /// Creates a new application state over a bracket table.
    pub fn new(table: EmbeddedRateTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns a reference to the bracket table.
    pub fn table(&self) -> &EmbeddedRateTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
