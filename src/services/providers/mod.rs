//! Remote search backend abstraction
//!
//! Keeps the orchestration layer independent of the concrete endpoint so the
//! backend can be swapped out or stood in for during tests.

use crate::{error::SearchError, models::Movie};

pub mod tmdb;

/// Trait for remote movie search backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Issue one search request against the remote endpoint.
    ///
    /// Returns the endpoint's results in its own ranking order. Transport
    /// failures, undecodable bodies and non-success statuses surface as
    /// errors; an empty results list is a legitimate `Ok` value here, and
    /// the caller decides what to make of it.
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, SearchError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
