//! TMDB search provider
//!
//! One GET per search against the `/search/movie` endpoint, authenticated
//! with a bearer read-access token. The query rides as a single URL-escaped
//! parameter; reqwest's query serializer does the escaping. The client-wide
//! timeout configured at construction is the only bound on request duration.

use std::time::Duration;

use reqwest::{header, Client as HttpClient};

use crate::{
    config::Config,
    error::SearchError,
    models::{Movie, SearchPage},
    services::providers::SearchProvider,
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_url: String,
    read_access_token: String,
}

impl TmdbProvider {
    /// Creates a provider from configuration, building the HTTP client with
    /// the configured request timeout.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.tmdb_api_url.clone(),
            read_access_token: config.tmdb_read_access_token.clone(),
        })
    }
}

#[async_trait::async_trait]
impl SearchProvider for TmdbProvider {
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, SearchError> {
        let url = format!("{}/search/movie", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.read_access_token)
            .header(header::ACCEPT, "application/json")
            .query(&[("query", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = %status, body = %body, "TMDB rejected search request");
            return Err(SearchError::RemoteRejection(status));
        }

        let page: SearchPage = response.json().await?;
        Ok(page.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use crate::models::SearchPage;

    #[test]
    fn test_search_page_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 155,
                    "title": "The Dark Knight",
                    "poster_path": "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
                    "release_date": "2008-07-18",
                    "vote_average": 9.0,
                    "overview": "Batman raises the stakes in his war on crime.",
                    "popularity": 100.0
                }
            ],
            "total_pages": 1,
            "total_results": 1
        }"#;

        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 155);
        assert_eq!(page.results[0].title, "The Dark Knight");
        assert_eq!(
            page.results[0].poster_path.as_deref(),
            Some("/qJ2tW6WMUDux911r6m7haRef0WH.jpg")
        );
    }

    #[test]
    fn test_sparse_record_decodes_with_defaults() {
        // Unreleased or obscure titles come back with most fields absent or
        // null; only id and title are required.
        let json = r#"{
            "results": [{ "id": 999, "title": "Untitled Project", "poster_path": null }]
        }"#;

        let page: SearchPage = serde_json::from_str(json).unwrap();
        let movie = &page.results[0];
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.release_date, "");
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.overview, "");
        assert_eq!(movie.popularity, 0.0);
    }

    #[test]
    fn test_missing_results_field_decodes_empty() {
        let page: SearchPage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
    }
}
