//! Local persistence for mymovies.
//!
//! Uses `rusqlite` (bundled `SQLite`) to keep the user's favorite
//! movies across restarts.

mod connection;
/// Favorites store.
pub mod favorites;
mod migrations;

pub use connection::{open_db, resolve_db_path};
#[allow(clippy::module_name_repetitions)]
pub use favorites::{FavoriteEntry, FavoritesStore};
