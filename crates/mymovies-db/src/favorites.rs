//! Favorites store: stringified movie ID -> (title, poster path).

use std::path::PathBuf;

use anyhow::{Context, Result};
use mymovies_api::tmdb::Movie;
use rusqlite::{Connection, OptionalExtension};

use super::connection::open_db;
use super::migrations::run_migrations;

/// One persisted favorite.
///
/// A reduced projection of `Movie` kept only for list display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct FavoriteEntry {
    /// Stringified TMDB movie ID.
    pub key: String,
    /// Movie title.
    pub title: String,
    /// Poster image path (nullable).
    pub poster_path: Option<String>,
}

impl FavoriteEntry {
    /// Parses the key back into a movie ID.
    #[must_use]
    pub fn movie_id(&self) -> Option<u64> {
        self.key.parse().ok()
    }
}

impl From<FavoriteEntry> for Movie {
    fn from(entry: FavoriteEntry) -> Self {
        Self {
            id: entry.movie_id(),
            title: Some(entry.title),
            poster_path: entry.poster_path,
            ..Self::default()
        }
    }
}

/// Persisted favorites collection.
///
/// Owns its connection; `rusqlite::Connection` is not `Sync`, so writers
/// are serialized by ownership.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct FavoritesStore {
    conn: Connection,
}

impl FavoritesStore {
    /// Opens the store in `dir` (or the default data directory).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open(dir: Option<&PathBuf>) -> Result<Self> {
        let conn = open_db(dir)?;
        Ok(Self { conn })
    }

    /// Opens a throwaway in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` fails to initialize.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        run_migrations(&conn).context("database migration failed")?;
        Ok(Self { conn })
    }

    /// Adds a favorite. Re-adding an ID overwrites its title and poster
    /// but keeps its position in the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub fn add(&self, movie_id: u64, title: &str, poster_path: Option<&str>) -> Result<()> {
        let key = movie_id.to_string();
        self.conn
            .execute(
                "INSERT INTO favorites (movie_id, title, poster_path, added_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(movie_id) DO UPDATE SET
                    title = excluded.title,
                    poster_path = excluded.poster_path",
                rusqlite::params![key, title, poster_path, chrono::Utc::now().timestamp_millis()],
            )
            .with_context(|| format!("failed to add favorite {key}"))?;
        tracing::debug!(movie_id, "favorite added");
        Ok(())
    }

    /// Removes a favorite. Returns whether an entry existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub fn remove(&self, movie_id: u64) -> Result<bool> {
        let key = movie_id.to_string();
        let rows = self
            .conn
            .execute("DELETE FROM favorites WHERE movie_id = ?1", [&key])
            .with_context(|| format!("failed to remove favorite {key}"))?;
        tracing::debug!(movie_id, removed = rows > 0, "favorite removed");
        Ok(rows > 0)
    }

    /// Whether `movie_id` is a favorite.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn contains(&self, movie_id: u64) -> Result<bool> {
        let key = movie_id.to_string();
        let found: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM favorites WHERE movie_id = ?1", [&key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("failed to look up favorite {key}"))?;
        Ok(found.is_some())
    }

    /// Whether the collection has no entries.
    ///
    /// Distinguishes "no favorites" (`Ok(true)`) from an unavailable
    /// store (`Err`).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn is_empty(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM favorites", [], |row| row.get(0))
            .context("failed to count favorites")?;
        Ok(count == 0)
    }

    /// Loads all entries in first-insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn entries(&self) -> Result<Vec<FavoriteEntry>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT movie_id, title, poster_path
                 FROM favorites
                 ORDER BY rowid",
            )
            .context("failed to prepare favorites query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(FavoriteEntry {
                    key: row.get(0)?,
                    title: row.get(1)?,
                    poster_path: row.get(2)?,
                })
            })
            .context("failed to query favorites")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .context("failed to read favorites rows")
    }

    /// Loads all favorites as partial movies: only `id`, `title` and
    /// `poster_path` are set. Empty when there are no favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list(&self) -> Result<Vec<Movie>> {
        Ok(self.entries()?.into_iter().map(Movie::from).collect())
    }
}
