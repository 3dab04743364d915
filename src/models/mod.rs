use serde::{Deserialize, Serialize};

/// A movie record, decoded verbatim from the remote endpoint or drawn from
/// the embedded fallback catalog.
///
/// Field names follow the TMDB wire format (`poster_path`, `release_date`,
/// `vote_average`), so no renaming happens at this layer. Optional and
/// frequently-absent fields default instead of failing the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// ISO date string; TMDB sends an empty string for unreleased titles,
    /// so this stays an unparsed passthrough value.
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
}

/// Success shape of the remote search endpoint: an object carrying a
/// `results` array. Paging counters and other extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<Movie>,
}
