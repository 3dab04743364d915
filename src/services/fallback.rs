//! Embedded catalog served whenever the remote endpoint cannot answer.
//!
//! The catalog is process-wide constant state: built once on first use,
//! never mutated, never persisted. Insertion order is the presentation
//! order for the default ("trending") listing.

use std::sync::LazyLock;

use crate::models::Movie;

/// Fallback output never exceeds this many records.
pub const FALLBACK_RESULT_CAP: usize = 6;

static CATALOG: LazyLock<Vec<Movie>> = LazyLock::new(|| {
    vec![
        Movie {
            id: 27205,
            title: "Inception".to_string(),
            poster_path: Some("/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg".to_string()),
            release_date: "2010-07-15".to_string(),
            vote_average: 8.4,
            overview: "Dom Cobb is a skilled thief who steals corporate secrets through the use of dream-sharing technology.".to_string(),
            popularity: 151.0,
        },
        Movie {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string()),
            release_date: "1999-03-30".to_string(),
            vote_average: 8.5,
            overview: "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.".to_string(),
            popularity: 140.0,
        },
        Movie {
            id: 550,
            title: "Fight Club".to_string(),
            poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
            release_date: "1999-10-15".to_string(),
            vote_average: 8.4,
            overview: "An insomniac office worker and a devil-may-care soapmaker form an underground fight club.".to_string(),
            popularity: 122.7,
        },
        Movie {
            id: 497,
            title: "The Green Mile".to_string(),
            poster_path: Some("/velWPhVMQeQKcxggNEU8YmIo52R.jpg".to_string()),
            release_date: "1999-12-10".to_string(),
            vote_average: 8.5,
            overview: "The lives of guards on Death Row are affected by one of their charges: a black man accused of child murder and rape, yet who has a mysterious gift.".to_string(),
            popularity: 110.0,
        },
        Movie {
            id: 680,
            title: "Pulp Fiction".to_string(),
            poster_path: Some("/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg".to_string()),
            release_date: "1994-09-10".to_string(),
            vote_average: 8.5,
            overview: "A burger-loving hit man, his philosophical partner, a drug-addled gangster's moll and a washed-up boxer converge in this sprawling, comedic crime caper.".to_string(),
            popularity: 105.0,
        },
        Movie {
            id: 155,
            title: "The Dark Knight".to_string(),
            poster_path: Some("/qJ2tW6WMUDux911r6m7haRef0WH.jpg".to_string()),
            release_date: "2008-07-18".to_string(),
            vote_average: 9.0,
            overview: "Batman raises the stakes in his war on crime. With the help of Lt. Jim Gordon and District Attorney Harvey Dent, Batman sets out to dismantle the remaining criminal organizations that plague the streets.".to_string(),
            popularity: 100.0,
        },
    ]
});

/// Case-insensitive title filter over the embedded catalog.
///
/// A non-empty query selects every record whose title contains it as a
/// substring, insertion order preserved. When nothing matches (or the query
/// is empty) the catalog's leading entries are served instead, so the caller
/// always has something to show. The query is matched as-is: no trimming
/// happens here.
pub fn filter(query: &str) -> Vec<Movie> {
    let needle = query.to_lowercase();

    if !needle.is_empty() {
        let matched: Vec<Movie> = CATALOG
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .take(FALLBACK_RESULT_CAP)
            .cloned()
            .collect();
        if !matched.is_empty() {
            return matched;
        }
    }

    CATALOG.iter().take(FALLBACK_RESULT_CAP).cloned().collect()
}
