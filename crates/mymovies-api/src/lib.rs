//! Data-access layer for mymovies.
//!
//! Fetches catalog metadata from the TMDB API, decodes it into typed
//! entities and applies the per-screen business rules.

/// TMDB API client.
pub mod tmdb;

/// Screen-level orchestration on top of the TMDB client.
pub mod worker;
