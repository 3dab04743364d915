pub mod fallback;
pub mod movie_search;
pub mod providers;

pub use movie_search::MovieSearch;
pub use providers::tmdb::TmdbProvider;
pub use providers::SearchProvider;
