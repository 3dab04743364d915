use std::sync::Arc;

use crate::{
    error::SearchError,
    models::Movie,
    services::{fallback, providers::SearchProvider},
};

/// Shortest trimmed query worth a remote round-trip.
pub const MIN_QUERY_LEN: usize = 2;

/// Decides whether a query justifies hitting the remote endpoint.
///
/// This predicate is the sole boundary between the remote and local paths:
/// anything below the threshold resolves against the embedded catalog with
/// no network attempt.
pub fn should_attempt_remote(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Movie search with local degradation
///
/// Wraps a remote search backend and guarantees a result list on every call:
/// short queries, transport failures, remote rejections and empty upstream
/// answers all resolve to the embedded catalog filter. The remote endpoint
/// is tried at most once per call; there is no retry.
pub struct MovieSearch {
    provider: Arc<dyn SearchProvider>,
}

impl MovieSearch {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Search for movies. Never fails.
    ///
    /// A successful remote answer is returned verbatim in the endpoint's
    /// ranking order, untruncated; only the fallback path is capped.
    pub async fn search(&self, query: &str) -> Vec<Movie> {
        if !should_attempt_remote(query) {
            tracing::debug!(query = %query, "Query below length threshold, serving fallback");
            return fallback::filter(query);
        }

        let outcome = self
            .provider
            .search_movies(query)
            .await
            .and_then(|movies| {
                if movies.is_empty() {
                    Err(SearchError::EmptyResults)
                } else {
                    Ok(movies)
                }
            });

        match outcome {
            Ok(movies) => {
                tracing::info!(
                    query = %query,
                    results = movies.len(),
                    provider = self.provider.name(),
                    "Remote search completed"
                );
                movies
            }
            Err(error) => {
                if error.is_upstream_fault() {
                    tracing::warn!(
                        query = %query,
                        classification = error.classification(),
                        error = %error,
                        provider = self.provider.name(),
                        "Remote search failed, serving fallback"
                    );
                } else {
                    tracing::info!(
                        query = %query,
                        classification = error.classification(),
                        provider = self.provider.name(),
                        "Remote search found nothing, serving fallback"
                    );
                }
                fallback::filter(query)
            }
        }
    }
}
