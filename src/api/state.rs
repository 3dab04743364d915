use std::sync::Arc;

use crate::services::MovieSearch;

/// Shared application state
///
/// The search service holds no mutable state, so this is a cheap clone with
/// no interior locking; concurrent requests run independently.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<MovieSearch>,
}

impl AppState {
    pub fn new(search: MovieSearch) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}
