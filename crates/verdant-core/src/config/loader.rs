//! Options file discovery and loading

use super::ParseOptions;
use crate::error::VerdantError;
use crate::result::{Result, ResultExt};
use std::path::{Path, PathBuf};

/// File names searched by [`ConfigLoader::auto_discover`], in priority order
const CONFIG_FILE_NAMES: &[&str] = &[".verdantrc.json", "verdant.json"];

/// Loader for discovering and loading options files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover an options file by traversing upward from start_path
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| VerdantError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found options file: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load options from a specific file
    pub fn load_from_file(path: &Path) -> Result<ParseOptions> {
        let content =
            std::fs::read_to_string(path).map_err(|e| VerdantError::io_error(path, e))?;
        ParseOptions::from_json_str(&content).map_err(|e| {
            VerdantError::config_error(format!(
                "Failed to load options from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load options discovered from start_dir, falling back to defaults
    ///
    /// Problems with the file are logged, never returned: an editor must be
    /// able to open a document even when its options file is broken.
    pub fn load_or_default(start_dir: &Path) -> ParseOptions {
        Self::auto_discover(start_dir)
            .log_and_continue()
            .flatten()
            .and_then(|path| Self::load_from_file(&path).log_and_continue())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), "verdant.json", r#"{ "allowComments": false }"#);

        let options = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(!options.allow_comments);
    }

    #[test]
    fn test_auto_discover() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();

        create_temp_config(temp_dir.path(), ".verdantrc.json", "{}");

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_from_file(Path::new("nonexistent.json"));
        assert!(matches!(result, Err(VerdantError::IoError { .. })));
    }

    #[test]
    fn test_load_or_default_with_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "verdant.json", "{ not json");

        assert_eq!(
            ConfigLoader::load_or_default(temp_dir.path()),
            ParseOptions::default()
        );
    }
}
