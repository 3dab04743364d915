use reqwest::StatusCode;

/// Failure modes of a remote search attempt.
///
/// None of these ever reach the caller of the search service: every variant
/// resolves to the embedded catalog. The taxonomy exists so the recovery
/// path can report what actually went wrong.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// Network unreachable, request timed out, or the response body could
    /// not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("remote endpoint returned status {0}")]
    RemoteRejection(StatusCode),

    /// Well-formed success response carrying an empty or missing results
    /// list.
    #[error("remote endpoint returned no results")]
    EmptyResults,
}

impl SearchError {
    /// Stable label for log fields and metrics.
    pub fn classification(&self) -> &'static str {
        match self {
            SearchError::Transport(_) => "transport_failure",
            SearchError::RemoteRejection(_) => "remote_rejection",
            SearchError::EmptyResults => "empty_result",
        }
    }

    /// Whether the upstream service itself is at fault. An empty result set
    /// may just mean the query matched nothing.
    pub fn is_upstream_fault(&self) -> bool {
        !matches!(self, SearchError::EmptyResults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_labels() {
        assert_eq!(
            SearchError::RemoteRejection(StatusCode::INTERNAL_SERVER_ERROR).classification(),
            "remote_rejection"
        );
        assert_eq!(SearchError::EmptyResults.classification(), "empty_result");
    }

    #[test]
    fn test_empty_results_is_not_an_upstream_fault() {
        assert!(SearchError::RemoteRejection(StatusCode::BAD_GATEWAY).is_upstream_fault());
        assert!(!SearchError::EmptyResults.is_upstream_fault());
    }
}
