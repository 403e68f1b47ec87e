//! TMDB entities and response wrappers.
//!
//! Wire names are snake_case and map 1:1 onto the field names below.
//! Different endpoints return different projections of a movie, so every
//! `Movie` field is optional; absent fields are skipped on re-encode.

use serde::{Deserialize, Serialize};

// --- Entities ---

/// A movie as returned by details, list and search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// TMDB movie ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Localized title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Original title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    /// Overview text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Release date (YYYY-MM-DD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Poster image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Vote average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    /// Genres (details endpoint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
    /// Genre IDs (list endpoints).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<u32>>,
    /// Production countries (details endpoint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_countries: Option<Vec<ProductionCountry>>,
}

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Production country entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountry {
    /// Country code (ISO 3166-1).
    pub iso_3166_1: String,
    /// Country name.
    pub name: String,
}

/// A video associated with a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// TMDB video ID.
    pub id: String,
    /// Provider-specific key (e.g. the `YouTube` video ID).
    pub key: String,
    /// Hosting site (e.g. "YouTube").
    pub site: String,
    /// Video type (e.g. "Trailer", "Teaser").
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    pub name: String,
}

// --- Response wrappers ---

/// Paged movie list from `discover/movie`, `search/movie` and
/// `movie/{id}/recommendations`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MoviePage {
    /// Current page number.
    #[allow(dead_code)]
    pub page: Option<u32>,
    /// Movies on this page.
    pub results: Vec<Movie>,
}

/// Response from `movie/{id}/videos`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VideoList {
    /// Movie ID the videos belong to.
    #[allow(dead_code)]
    pub id: Option<u64>,
    /// Videos in provider order.
    pub results: Vec<Video>,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TmdbErrorResponse {
    /// TMDB error code.
    #[allow(dead_code)]
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
}
