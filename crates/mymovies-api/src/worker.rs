//! Movie details screen worker.
//!
//! Combines the TMDB operations a details screen needs and applies the
//! trailer-selection rule on top of the decoded video list.
#![allow(clippy::future_not_send)]

use thiserror::Error;
use tracing::instrument;

use crate::tmdb::{ApiError, LocalMovieApi, Movie, Video};

/// Site a playable trailer must be hosted on.
pub const TRAILER_SITE: &str = "YouTube";

/// Video type a trailer must have.
pub const TRAILER_TYPE: &str = "Trailer";

/// A classified error annotated for the screen that received it.
///
/// The classified error is exposed through `source()`, not repeated in
/// the message.
#[derive(Debug, Error)]
#[error("{} request failed", failed_part(.terminal))]
#[allow(clippy::module_name_repetitions)]
pub struct ScreenError {
    /// Underlying classified error.
    source: ApiError,
    /// Whether the screen cannot continue without this result.
    terminal: bool,
}

impl ScreenError {
    /// The screen cannot be shown without the failed content.
    #[must_use]
    pub const fn terminal(source: ApiError) -> Self {
        Self {
            source,
            terminal: true,
        }
    }

    /// The screen stays usable; only a section is affected.
    #[must_use]
    pub const fn recoverable(source: ApiError) -> Self {
        Self {
            source,
            terminal: false,
        }
    }

    /// Alert title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.source.title()
    }

    /// Alert message.
    #[must_use]
    pub fn message(&self) -> String {
        self.source.to_string()
    }

    /// Whether the failure ends the current screen.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The classified error.
    #[must_use]
    pub const fn error(&self) -> &ApiError {
        &self.source
    }

    /// Consumes `self`, returning the classified error.
    #[must_use]
    pub fn into_error(self) -> ApiError {
        self.source
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn failed_part(terminal: &bool) -> &'static str {
    if *terminal { "screen" } else { "section" }
}

/// Whether `video` is a `YouTube` trailer.
#[must_use]
pub fn is_youtube_trailer(video: &Video) -> bool {
    video.site == TRAILER_SITE && video.kind == TRAILER_TYPE
}

/// Selects the first `YouTube` trailer in response order.
#[must_use]
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|video| is_youtube_trailer(video))
}

/// Worker for the movie details screen.
#[derive(Debug)]
pub struct MovieDetailsWorker<A> {
    api: A,
}

impl<A: LocalMovieApi> MovieDetailsWorker<A> {
    /// Creates a worker over an injected API client.
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetches the movie shown by the screen. Failure is terminal.
    ///
    /// # Errors
    ///
    /// Returns a terminal `ScreenError` wrapping the API error.
    #[instrument(skip(self))]
    pub async fn fetch_details(&self, movie_id: u64) -> Result<Movie, ScreenError> {
        self.api
            .movie_details(movie_id)
            .await
            .map_err(ScreenError::terminal)
    }

    /// Fetches recommendations for the movie.
    ///
    /// # Errors
    ///
    /// Returns a recoverable `ScreenError` wrapping the API error.
    #[instrument(skip(self))]
    pub async fn fetch_recommendations(&self, movie_id: u64) -> Result<Vec<Movie>, ScreenError> {
        let movies = self
            .api
            .movie_recommendations(movie_id, None)
            .await
            .map_err(ScreenError::recoverable)?;
        tracing::debug!(count = movies.len(), "recommendations fetched");
        Ok(movies)
    }

    /// Fetches the movie's trailer.
    ///
    /// # Errors
    ///
    /// Returns a recoverable `ScreenError`: the API error, or
    /// `ApiError::MissingData` when no `YouTube` trailer is listed.
    #[instrument(skip(self))]
    pub async fn fetch_trailer(&self, movie_id: u64) -> Result<Video, ScreenError> {
        let videos = self
            .api
            .movie_videos(movie_id)
            .await
            .map_err(ScreenError::recoverable)?;
        if let Some(trailer) = select_trailer(&videos) {
            return Ok(trailer.clone());
        }

        tracing::warn!(total = videos.len(), "no YouTube trailer among videos");
        Err(ScreenError::recoverable(ApiError::MissingData {
            what: format!("{TRAILER_SITE} trailer for movie {movie_id}"),
        }))
    }
}
