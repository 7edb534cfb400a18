//! Configuration file discovery.
//!
//! Finds the `.hub.toml` that governs a directory by walking up the directory tree. The
//! closest file wins; there is no merging across levels.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".hub.toml";

/// The preferences filename inside the platform data directory.
pub const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Returns the closest `.hub.toml` at or above `cwd`, if any.
pub fn discover_config_file(cwd: &Path) -> Option<PathBuf> {
    cwd.ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// Returns the default location of the persisted preferences file.
///
/// Returns `None` if no home directory can be determined for the current user.
pub fn preferences_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "learning-hub", "hub")
        .map(|dirs| dirs.data_dir().join(PREFERENCES_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn finds_config_in_cwd() {
        let dir = TestDir::new();
        let config = dir.create_config("", "");

        assert_eq!(discover_config_file(dir.path()), Some(config));
    }

    #[test]
    fn finds_config_in_ancestor() {
        let dir = TestDir::new();
        let config = dir.create_config("site", "");
        let nested = dir.create_dir("site/assets/data");

        assert_eq!(discover_config_file(&nested), Some(config));
    }

    #[test]
    fn closest_config_wins() {
        let dir = TestDir::new();
        dir.create_config("", "");
        let inner = dir.create_config("site", "");

        assert_eq!(discover_config_file(&dir.path().join("site")), Some(inner));
    }

    #[test]
    fn ignores_directory_named_like_config() {
        let dir = TestDir::new();
        dir.create_dir(CONFIG_FILENAME);
        let nested = dir.create_dir("a");

        let found = discover_config_file(&nested);
        assert!(found.is_none_or(|path| !path.starts_with(dir.path())));
    }

    #[test]
    fn preferences_path_uses_fixed_filename() {
        if let Some(path) = preferences_path() {
            assert!(path.ends_with(PREFERENCES_FILENAME));
        }
    }
}
