use std::path::PathBuf;

use chrono::NaiveDate;

use crate::cache::SearchCache;
use crate::config::Config;
use crate::credentials;
use crate::Result;
use meeple_client::{BggClient, ClientOptions, Credentials};
use meeple_types::{tags, CollectionItem, GameSummary, Play, TagId, TagValue};

/// Everything a command needs: the resolved data directory, loaded
/// configuration, and a constructed client.
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
    client: BggClient,
}

impl Workspace {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&data_dir.join("config.toml"))?;
        let client = BggClient::new(ClientOptions {
            api_root: config.service.api_root.clone(),
            site_root: config.service.site_root.clone(),
        })?;

        Ok(Self {
            data_dir,
            config,
            client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &BggClient {
        &self.client
    }

    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("cache.json")
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.data_dir.join("credentials.json")
    }

    pub fn open_cache(&self) -> SearchCache {
        SearchCache::load_from(&self.cache_path())
    }

    pub fn credentials(&self) -> Result<Credentials> {
        credentials::load(&self.credentials_path())
    }

    pub fn store_credentials(&self, credentials: &Credentials) -> Result<()> {
        credentials::store(&self.credentials_path(), credentials)
    }

    pub fn username(&self) -> Result<String> {
        Ok(self.credentials()?.username)
    }

    /// Log plays against a game under the stored account.
    pub fn log_play(
        &self,
        game: &GameSummary,
        date: NaiveDate,
        quantity: u32,
        comment: &str,
    ) -> Result<()> {
        let creds = self.credentials()?;
        self.client.login(&creds)?;
        self.client.log_play(game.id, date, quantity, comment)?;
        Ok(())
    }

    /// Aggregate play counts, optionally limited to the last `days` days.
    pub fn play_summary(&self, days: Option<u32>) -> Result<Vec<(String, u32)>> {
        let username = self.username()?;
        let since = days.map(|days| {
            chrono::Local::now().date_naive() - chrono::Duration::days(i64::from(days))
        });
        let plays = self.client.plays(&username, since)?;
        Ok(summarize_plays(&plays))
    }

    /// Fetch the stored account's collection (owned games or wishlist).
    pub fn collection(&self, wishlist: bool) -> Result<Vec<CollectionItem>> {
        let username = self.username()?;
        Ok(self.client.collection(&username, wishlist)?)
    }

    /// Apply tag updates to an item's comment and persist the result.
    /// Returns the new comment string.
    pub fn edit_tags(
        &self,
        item: &CollectionItem,
        updates: Vec<(TagId, TagValue)>,
    ) -> Result<String> {
        let creds = self.credentials()?;
        self.client.login(&creds)?;

        let comment = tags::update_tags(item.comment.as_deref(), updates);
        self.client.set_comment(item, &comment)?;
        Ok(comment)
    }
}

/// Aggregate play quantities by game, ordered by name with a leading
/// "The " ignored.
pub fn summarize_plays(plays: &[Play]) -> Vec<(String, u32)> {
    let mut totals: Vec<(String, u32)> = Vec::new();
    for play in plays {
        match totals.iter_mut().find(|(name, _)| *name == play.game_name) {
            Some((_, count)) => *count += play.quantity,
            None => totals.push((play.game_name.clone(), play.quantity)),
        }
    }

    totals.sort_by_key(|(name, _)| sort_key(name));
    totals
}

fn sort_key(name: &str) -> String {
    let lowered = name.to_lowercase();
    lowered
        .strip_prefix("the ")
        .map(str::to_string)
        .unwrap_or(lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(name: &str, quantity: u32) -> Play {
        Play {
            date: None,
            quantity,
            game_name: name.to_string(),
        }
    }

    #[test]
    fn test_summary_aggregates_quantities() {
        let plays = [play("Catan", 2), play("Azul", 1), play("Catan", 3)];
        let totals = summarize_plays(&plays);
        assert_eq!(
            totals,
            vec![("Azul".to_string(), 1), ("Catan".to_string(), 5)]
        );
    }

    #[test]
    fn test_summary_sorts_ignoring_leading_the() {
        let plays = [
            play("The Crew", 1),
            play("Azul", 1),
            play("Wingspan", 1),
        ];
        let totals = summarize_plays(&plays);
        let names: Vec<&str> = totals.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Azul", "The Crew", "Wingspan"]);
    }

    #[test]
    fn test_summary_of_no_plays_is_empty() {
        assert!(summarize_plays(&[]).is_empty());
    }
}
