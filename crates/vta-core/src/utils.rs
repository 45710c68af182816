//! Shared utility functions for vta crates

use crate::error::{Error, Result};
use camino::Utf8PathBuf;

/// Get the user's home directory
///
/// The HOME environment variable wins over `dirs::home_dir()` so that
/// overrides in containers and tests are respected.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Ok(Utf8PathBuf::from(home));
    }

    let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
    Utf8PathBuf::from_path_buf(home).map_err(|p| Error::non_utf8_path(p.display().to_string()))
}

/// Get the vta configuration directory (~/.vta)
pub fn get_vta_dir() -> Result<Utf8PathBuf> {
    Ok(get_home_dir()?.join(".vta"))
}

/// Get the cache directory (~/.vta/cache)
pub fn get_cache_dir() -> Result<Utf8PathBuf> {
    Ok(get_vta_dir()?.join("cache"))
}

/// Default location for the downloaded template (~/.vta/cache/__temp__)
pub fn default_temp_dir() -> Result<Utf8PathBuf> {
    Ok(get_cache_dir()?.join("__temp__"))
}

/// Get the current working directory as a UTF-8 path
pub fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|p| Error::non_utf8_path(p.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_home_dir_from_env() {
        // HOME is typically set in CI/test environments
        if std::env::var("HOME").is_ok() {
            let home = get_home_dir().unwrap();
            assert!(!home.as_str().is_empty());
        }
    }

    #[test]
    fn test_default_temp_dir_lives_under_cache() {
        if std::env::var("HOME").is_ok() {
            let temp = default_temp_dir().unwrap();
            assert!(temp.ends_with(".vta/cache/__temp__"));
        }
    }

    #[test]
    fn test_current_dir_is_absolute() {
        let cwd = current_dir().unwrap();
        assert!(cwd.is_absolute());
    }
}
