use std::path::Path;

use crate::{Error, Result};
use meeple_client::Credentials;

/// Load stored credentials. A missing or unreadable file means the user
/// has not logged in on this machine.
pub fn load(path: &Path) -> Result<Credentials> {
    let raw = std::fs::read_to_string(path).map_err(|_| Error::NotLoggedIn)?;
    serde_json::from_str(&raw).map_err(|_| Error::NotLoggedIn)
}

pub fn store(path: &Path, credentials: &Credentials) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let encoded = serde_json::to_string_pretty(credentials)
        .map_err(|err| Error::Config(err.to_string()))?;
    std::fs::write(path, encoded)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_means_not_logged_in() {
        let temp_dir = TempDir::new().unwrap();
        let result = load(&temp_dir.path().join("credentials.json"));
        assert!(matches!(result, Err(Error::NotLoggedIn)));
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credentials.json");

        let credentials = Credentials {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        store(&path, &credentials).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.username, "alice");
        assert_eq!(loaded.password, "hunter2");
    }
}
