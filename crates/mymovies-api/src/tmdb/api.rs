//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use super::envelope::{MovieDetailsResult, MoviesResult, VideosResult};

/// TMDB movie operations.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Fetches full details of one movie.
    ///
    /// # Errors
    ///
    /// Returns a transport, HTTP status or decode error.
    async fn movie_details(&self, movie_id: u64) -> MovieDetailsResult;

    /// Discovers movies, optionally filtered by genre.
    ///
    /// # Errors
    ///
    /// Returns a transport, HTTP status or decode error.
    async fn discover_movies(&self, page: u32, genre: Option<u32>) -> MoviesResult;

    /// Fetches movies recommended for `movie_id`.
    ///
    /// # Errors
    ///
    /// Returns a transport, HTTP status or decode error.
    async fn movie_recommendations(&self, movie_id: u64, page: Option<u32>) -> MoviesResult;

    /// Fetches the videos attached to `movie_id`, in provider order.
    ///
    /// # Errors
    ///
    /// Returns a transport, HTTP status or decode error.
    async fn movie_videos(&self, movie_id: u64) -> VideosResult;

    /// Searches movies by free text. The query is forwarded unvalidated.
    ///
    /// # Errors
    ///
    /// Returns a transport, HTTP status or decode error.
    async fn search_movies(&self, query: &str) -> MoviesResult;
}
