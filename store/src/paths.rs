//! Data directory resolution.
//!
//! Precedence:
//! 1. COURTSIDE_DATA_DIR environment variable
//! 2. Platform data dir (e.g. ~/.local/share/courtside on Linux)
//! 3. ./data (fallback for development)

use std::path::PathBuf;

const ENV_DATA_DIR: &str = "COURTSIDE_DATA_DIR";
const DEV_DATA_DIR: &str = "./data";

/// Get the directory the preference store persists under.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return PathBuf::from(dir);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "courtside") {
        return dirs.data_dir().to_path_buf();
    }

    PathBuf::from(DEV_DATA_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_is_never_empty() {
        // Whichever branch wins (env var, platform dir, ./data), the result
        // must be usable as-is.
        let dir = data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    // No test for the env-var branch to avoid polluting the process
    // environment of parallel tests.
}
