//! `MovieClient` - binds each TMDB operation to its decoder.

use tracing::instrument;

use super::api::LocalMovieApi;
use super::endpoint::Endpoint;
use super::envelope::{Decode, MovieDetailsResult, MoviesResult, VideosResult};
use super::transport::LocalTransport;
use super::types::{Movie, Video};

/// TMDB movie client.
///
/// Stateless apart from the injected transport, so concurrent calls
/// never share mutable state.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieClient<T> {
    /// Transport used for every round trip.
    transport: T,
}

impl<T> MovieClient<T> {
    /// Creates a client over `transport`.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: LocalTransport> LocalMovieApi for MovieClient<T> {
    #[instrument(skip(self))]
    async fn movie_details(&self, movie_id: u64) -> MovieDetailsResult {
        let outcome = self
            .transport
            .fetch(&Endpoint::MovieDetails { movie_id })
            .await;
        Movie::from_transport(outcome)
    }

    #[instrument(skip(self))]
    async fn discover_movies(&self, page: u32, genre: Option<u32>) -> MoviesResult {
        let outcome = self
            .transport
            .fetch(&Endpoint::DiscoverMovies { page, genre })
            .await;
        Vec::<Movie>::from_transport(outcome)
    }

    #[instrument(skip(self))]
    async fn movie_recommendations(&self, movie_id: u64, page: Option<u32>) -> MoviesResult {
        let outcome = self
            .transport
            .fetch(&Endpoint::MovieRecommendations { movie_id, page })
            .await;
        Vec::<Movie>::from_transport(outcome)
    }

    #[instrument(skip(self))]
    async fn movie_videos(&self, movie_id: u64) -> VideosResult {
        let outcome = self
            .transport
            .fetch(&Endpoint::MovieVideos { movie_id })
            .await;
        Vec::<Video>::from_transport(outcome)
    }

    #[instrument(skip(self))]
    async fn search_movies(&self, query: &str) -> MoviesResult {
        let outcome = self
            .transport
            .fetch(&Endpoint::SearchMovies {
                query: String::from(query),
            })
            .await;
        Vec::<Movie>::from_transport(outcome)
    }
}
