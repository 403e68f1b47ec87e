//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves the config file path.
///
/// Lookup order: `{dir}/config.toml`, then `$XDG_CONFIG_HOME/mymovies/config.toml`,
/// then `$HOME/.config/mymovies/config.toml`.
///
/// # Errors
///
/// Returns an error if none of `dir`, `XDG_CONFIG_HOME` or `HOME` is available.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    config_path_from(
        dir.map(PathBuf::as_path),
        std::env::var_os("XDG_CONFIG_HOME").as_deref().map(Path::new),
        std::env::var_os("HOME").as_deref().map(Path::new),
    )
}

fn config_path_from(
    dir: Option<&Path>,
    config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE_NAME));
    }
    let base = match (config_home.filter(|p| p.is_absolute()), home) {
        (Some(config_home), _) => config_home.to_path_buf(),
        (None, Some(home)) => home.join(".config"),
        (None, None) => bail!("neither XDG_CONFIG_HOME nor HOME is set"),
    };
    Ok(base.join("mymovies").join(CONFIG_FILE_NAME))
}
