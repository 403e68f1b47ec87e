//! TMDB API client module.
//!
//! Builds endpoint descriptors, performs the HTTP round trip and
//! decodes movie, video and genre payloads.

mod api;
mod client;
mod endpoint;
mod envelope;
mod error;
mod transport;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
pub use client::MovieClient;
pub use endpoint::Endpoint;
pub use envelope::{Decode, Envelope, MovieDetailsResult, MoviesResult, RawPayload, VideosResult};
pub use error::{ApiError, ErrorKind};
pub use transport::{HttpTransport, HttpTransportBuilder, LocalTransport, Transport};
pub use types::{Genre, Movie, ProductionCountry, Video};
