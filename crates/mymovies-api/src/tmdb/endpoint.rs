//! Endpoint descriptors for the supported TMDB operations.

/// A remote operation together with its parameters.
///
/// Independent of transport mechanics: it only knows the relative path
/// and the query parameters of each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `movie/{movie_id}`
    MovieDetails {
        /// TMDB movie ID.
        movie_id: u64,
    },
    /// `discover/movie`
    DiscoverMovies {
        /// Result page (1-based).
        page: u32,
        /// Genre filter, omitted from the query when absent.
        genre: Option<u32>,
    },
    /// `movie/{movie_id}/recommendations`
    MovieRecommendations {
        /// TMDB movie ID.
        movie_id: u64,
        /// Result page, omitted from the query when absent.
        page: Option<u32>,
    },
    /// `movie/{movie_id}/videos`
    MovieVideos {
        /// TMDB movie ID.
        movie_id: u64,
    },
    /// `search/movie`
    SearchMovies {
        /// Free-text query, forwarded as-is.
        query: String,
    },
}

impl Endpoint {
    /// Short operation name used in logs and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MovieDetails { .. } => "movie_details",
            Self::DiscoverMovies { .. } => "discover_movies",
            Self::MovieRecommendations { .. } => "movie_recommendations",
            Self::MovieVideos { .. } => "movie_videos",
            Self::SearchMovies { .. } => "search_movies",
        }
    }

    /// Path relative to the API base URL (no leading slash).
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::MovieDetails { movie_id } => format!("movie/{movie_id}"),
            Self::DiscoverMovies { .. } => String::from("discover/movie"),
            Self::MovieRecommendations { movie_id, .. } => {
                format!("movie/{movie_id}/recommendations")
            }
            Self::MovieVideos { movie_id } => format!("movie/{movie_id}/videos"),
            Self::SearchMovies { .. } => String::from("search/movie"),
        }
    }

    /// Query parameters for this operation.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::MovieDetails { .. } | Self::MovieVideos { .. } => Vec::new(),
            Self::DiscoverMovies { page, genre } => {
                let mut query = vec![("page", page.to_string())];
                if let Some(genre) = genre {
                    query.push(("with_genres", genre.to_string()));
                }
                query
            }
            Self::MovieRecommendations { page, .. } => page
                .map(|p| vec![("page", p.to_string())])
                .unwrap_or_default(),
            Self::SearchMovies { query } => vec![("query", query.clone())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_details_path() {
        // Arrange
        let endpoint = Endpoint::MovieDetails { movie_id: 27_205 };

        // Act & Assert
        assert_eq!(endpoint.path(), "movie/27205");
        assert!(endpoint.query().is_empty());
    }

    #[test]
    fn test_discover_without_genre_omits_param() {
        // Arrange
        let endpoint = Endpoint::DiscoverMovies {
            page: 3,
            genre: None,
        };

        // Act
        let query = endpoint.query();

        // Assert
        assert_eq!(endpoint.path(), "discover/movie");
        assert_eq!(query, vec![("page", String::from("3"))]);
    }

    #[test]
    fn test_discover_with_genre() {
        // Arrange
        let endpoint = Endpoint::DiscoverMovies {
            page: 1,
            genre: Some(28),
        };

        // Act
        let query = endpoint.query();

        // Assert
        assert_eq!(
            query,
            vec![("page", String::from("1")), ("with_genres", String::from("28"))]
        );
    }

    #[test]
    fn test_recommendations_page_is_optional() {
        // Arrange
        let without_page = Endpoint::MovieRecommendations {
            movie_id: 155,
            page: None,
        };
        let with_page = Endpoint::MovieRecommendations {
            movie_id: 155,
            page: Some(2),
        };

        // Act & Assert
        assert_eq!(without_page.path(), "movie/155/recommendations");
        assert!(without_page.query().is_empty());
        assert_eq!(with_page.query(), vec![("page", String::from("2"))]);
    }

    #[test]
    fn test_videos_path() {
        // Arrange
        let endpoint = Endpoint::MovieVideos { movie_id: 7 };

        // Act & Assert
        assert_eq!(endpoint.path(), "movie/7/videos");
        assert_eq!(endpoint.name(), "movie_videos");
    }

    #[test]
    fn test_search_passes_empty_query_through() {
        // Arrange
        let endpoint = Endpoint::SearchMovies {
            query: String::new(),
        };

        // Act
        let query = endpoint.query();

        // Assert
        assert_eq!(endpoint.path(), "search/movie");
        assert_eq!(query, vec![("query", String::new())]);
    }
}
