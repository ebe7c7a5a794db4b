use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::Result;
use meeple_types::GameSummary;

/// One remembered pick for a search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub id: u64,
    pub name: String,
    pub year: Option<String>,
    /// How many times this query resolved to this game in a row.
    pub count: u32,
}

impl CacheEntry {
    pub fn to_summary(&self) -> GameSummary {
        GameSummary {
            id: self.id,
            name: self.name.clone(),
            year: self.year.clone(),
        }
    }
}

/// JSON memo of previous search picks, keyed by lowercased query.
///
/// Keys written by other versions of the tool are loaded and rewritten
/// as-is, so an upgrade never drops memo state.
#[derive(Debug)]
pub struct SearchCache {
    path: PathBuf,
    entries: HashMap<String, CacheEntry>,
}

impl SearchCache {
    /// Load the memo. A missing file is an empty memo; an unreadable one is
    /// replaced after a warning rather than blocking the command.
    pub fn load_from(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    eprintln!(
                        "Warning: ignoring corrupt search cache at {}: {}",
                        path.display(),
                        err
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(&self.entries)?)?;
        Ok(())
    }

    pub fn get(&self, query: &str) -> Option<&CacheEntry> {
        self.entries.get(&normalize(query))
    }

    /// Entry for a query once it has been picked at least `threshold`
    /// times in a row.
    pub fn auto_select(&self, query: &str, threshold: u32) -> Option<&CacheEntry> {
        self.get(query).filter(|entry| entry.count >= threshold)
    }

    /// Record a confirmed pick. A different game under the same query
    /// restarts the count at one.
    pub fn record_pick(&mut self, query: &str, game: &GameSummary) {
        let key = normalize(query);
        match self.entries.get_mut(&key) {
            Some(entry) if entry.id == game.id => entry.count += 1,
            _ => {
                self.entries.insert(
                    key,
                    CacheEntry {
                        id: game.id,
                        name: game.name.clone(),
                        year: game.year.clone(),
                        count: 1,
                    },
                );
            }
        }
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
