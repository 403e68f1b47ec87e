//! Database connection management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rusqlite::Connection;

use super::migrations::run_migrations;

/// Database file name.
const DB_FILE_NAME: &str = "mymovies.db";

/// Application directory name under the data home.
const APP_DIR: &str = "mymovies";

/// Opens (or creates) the favorites database and runs migrations.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved, the database cannot
/// be opened, or migrations fail.
pub fn open_db(dir: Option<&PathBuf>) -> Result<Connection> {
    let db_path = resolve_db_path(dir)?;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(&db_path)
        .with_context(|| format!("failed to open database {}", db_path.display()))?;
    run_migrations(&conn).context("database migration failed")?;

    tracing::debug!(path = %db_path.display(), "database opened");
    Ok(conn)
}

/// Resolves the database file path.
///
/// Lookup order: `{dir}/mymovies.db`, then `$XDG_DATA_HOME/mymovies/mymovies.db`,
/// then `$HOME/.local/share/mymovies/mymovies.db`.
///
/// # Errors
///
/// Returns an error if none of `dir`, `XDG_DATA_HOME` or `HOME` is available.
pub fn resolve_db_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    db_path_from(
        dir.map(PathBuf::as_path),
        std::env::var_os("XDG_DATA_HOME").as_deref().map(Path::new),
        std::env::var_os("HOME").as_deref().map(Path::new),
    )
}

fn db_path_from(
    dir: Option<&Path>,
    data_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(DB_FILE_NAME));
    }
    // XDG requires an absolute path; relative values are ignored.
    if let Some(data_home) = data_home.filter(|p| p.is_absolute()) {
        return Ok(data_home.join(APP_DIR).join(DB_FILE_NAME));
    }
    match home {
        Some(home) => Ok(home
            .join(".local")
            .join("share")
            .join(APP_DIR)
            .join(DB_FILE_NAME)),
        None => bail!("neither XDG_DATA_HOME nor HOME is set"),
    }
}
