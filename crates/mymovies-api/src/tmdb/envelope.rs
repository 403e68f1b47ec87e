//! Response envelope and per-operation decoding.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;
use super::types::{Movie, MoviePage, Video, VideoList};

/// Outcome of one operation: the decoded value or a classified error.
pub type Envelope<T> = Result<T, ApiError>;

/// Result of `movie/{id}`.
pub type MovieDetailsResult = Envelope<Movie>;

/// Result of the paged movie list operations.
pub type MoviesResult = Envelope<Vec<Movie>>;

/// Result of `movie/{id}/videos`.
pub type VideosResult = Envelope<Vec<Video>>;

/// Raw body of a successful HTTP round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload(Vec<u8>);

impl RawPayload {
    /// Returns the body bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Body length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for RawPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

/// Turns a raw payload into the value a specific operation produces.
pub trait Decode: Sized {
    /// Decodes `raw`. Any decode problem becomes `ApiError::Decode`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the payload is not a JSON object of
    /// the expected shape.
    fn parse(raw: &RawPayload) -> Envelope<Self>;

    /// Wraps an error that happened before decoding.
    ///
    /// # Errors
    ///
    /// Always returns `error`.
    fn failed(error: ApiError) -> Envelope<Self> {
        Err(error)
    }

    /// Decodes a transport outcome, passing transport errors through.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged, or a decode error.
    fn from_transport(outcome: Envelope<RawPayload>) -> Envelope<Self> {
        match outcome {
            Ok(raw) => Self::parse(&raw),
            Err(error) => Self::failed(error),
        }
    }
}

impl Decode for Movie {
    fn parse(raw: &RawPayload) -> Envelope<Self> {
        decode_object(raw)
    }
}

impl Decode for Vec<Movie> {
    fn parse(raw: &RawPayload) -> Envelope<Self> {
        decode_object::<MoviePage>(raw).map(|page| page.results)
    }
}

impl Decode for Vec<Video> {
    fn parse(raw: &RawPayload) -> Envelope<Self> {
        decode_object::<VideoList>(raw).map(|list| list.results)
    }
}

/// Decodes a payload whose top level must be a JSON object.
///
/// serde accepts sequences for structs, so the object shape is checked
/// first to keep arrays from decoding into an entity.
fn decode_object<T: DeserializeOwned>(raw: &RawPayload) -> Envelope<T> {
    let object: Map<String, Value> = serde_json::from_slice(raw.as_bytes())?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::tmdb::error::ErrorKind;

    #[test]
    fn test_parse_movie() {
        // Arrange
        let raw = RawPayload::from(include_str!(
            "../../../../fixtures/tmdb/movie_details_27205.json"
        ));

        // Act
        let movie = Movie::parse(&raw).unwrap();

        // Assert
        assert_eq!(movie.id, Some(27_205));
        assert_eq!(movie.title.as_deref(), Some("Inception"));
    }

    #[test]
    fn test_parse_movie_rejects_array() {
        // Arrange
        let raw = RawPayload::from(r#"[27205, "Inception"]"#);

        // Act
        let result = Movie::parse(&raw);

        // Assert
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_parse_movie_rejects_garbage() {
        // Arrange
        let raw = RawPayload::from("<html>Bad Gateway</html>");

        // Act
        let result = Movie::parse(&raw);

        // Assert
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_parse_movie_wrong_field_type_fails_whole_decode() {
        // Arrange
        let raw = RawPayload::from(r#"{"id": "not-a-number", "title": "Inception"}"#);

        // Act
        let result = Movie::parse(&raw);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_movie_list() {
        // Arrange
        let raw = RawPayload::from(include_str!(
            "../../../../fixtures/tmdb/discover_movies_page_1.json"
        ));

        // Act
        let movies = Vec::<Movie>::parse(&raw).unwrap();

        // Assert
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, Some(693_134));
        assert!(movies[1].poster_path.is_none());
        assert_eq!(movies[1].overview.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_movie_list_without_results_fails() {
        // Arrange
        let raw = RawPayload::from(r#"{"page": 1, "total_results": 0}"#);

        // Act
        let result = Vec::<Movie>::parse(&raw);

        // Assert
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_parse_movie_list_bare_array_fails() {
        // Arrange
        let raw = RawPayload::from(r#"[{"id": 1}]"#);

        // Act
        let result = Vec::<Movie>::parse(&raw);

        // Assert
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_parse_videos_in_response_order() {
        // Arrange
        let raw = RawPayload::from(include_str!(
            "../../../../fixtures/tmdb/movie_videos_27205.json"
        ));

        // Act
        let videos = Vec::<Video>::parse(&raw).unwrap();

        // Assert
        assert_eq!(videos.len(), 3);
        assert_eq!(videos[0].site, "Vimeo");
        assert_eq!(videos[2].key, "YoHD9XEInc0");
    }

    #[test]
    fn test_parse_videos_malformed_element_fails() {
        // Arrange
        let raw = RawPayload::from(r#"{"id": 1, "results": [{"id": "x", "key": "k"}]}"#);

        // Act
        let result = Vec::<Video>::parse(&raw);

        // Assert
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_from_transport_passes_error_through() {
        // Arrange
        let outcome: Envelope<RawPayload> = Err(ApiError::HttpStatus {
            operation: String::from("movie/1"),
            status: 500,
            message: String::from("boom"),
        });

        // Act
        let result = Movie::from_transport(outcome);

        // Assert
        assert_eq!(result.unwrap_err().kind(), ErrorKind::HttpStatus);
    }

    #[test]
    fn test_failed_does_not_decode() {
        // Arrange
        let error = ApiError::MissingData {
            what: String::from("anything"),
        };

        // Act
        let result = Vec::<Video>::failed(error);

        // Assert
        assert_eq!(result.unwrap_err().kind(), ErrorKind::MissingData);
    }
}
