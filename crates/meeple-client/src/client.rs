use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, Result};
use crate::parse;
use meeple_types::{CollectionItem, GameSummary, Play};

pub const DEFAULT_API_ROOT: &str = "https://api.geekdo.com/xmlapi2";
pub const DEFAULT_SITE_ROOT: &str = "https://boardgamegeek.com";

/// Characters the search endpoint chokes on; stripped before encoding.
static QUERY_SANITIZER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s]").unwrap());

/// Collection exports are prepared asynchronously; the endpoint answers
/// 202 until the export is ready.
const COLLECTION_RETRIES: usize = 10;
const COLLECTION_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Account credentials for the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Endpoint roots, overridable from configuration.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Root of the read-only XML API
    pub api_root: String,
    /// Root of the site itself, used for authenticated writes
    pub site_root: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            site_root: DEFAULT_SITE_ROOT.to_string(),
        }
    }
}

/// Blocking client for the remote board game service. Holds a cookie jar
/// so a `login` call authenticates the writes that follow it.
pub struct BggClient {
    http: reqwest::blocking::Client,
    options: ClientOptions,
}

impl BggClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .cookie_store(true)
            .user_agent(concat!("meeple/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, options })
    }

    /// Search the game database by title.
    pub fn search(&self, query: &str, exact: bool) -> Result<Vec<GameSummary>> {
        let sanitized = QUERY_SANITIZER.replace_all(query, "");
        let url = format!("{}/search", self.options.api_root);
        let body = self
            .http
            .get(&url)
            .query(&[
                ("query", sanitized.as_ref()),
                ("exact", if exact { "1" } else { "0" }),
                ("type", "boardgame"),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        parse::parse_search(&body)
    }

    /// Fetch a user's plays feed, following pagination until a page comes
    /// back empty. `since` narrows the window server-side.
    pub fn plays(&self, username: &str, since: Option<NaiveDate>) -> Result<Vec<Play>> {
        let url = format!("{}/plays", self.options.api_root);
        let mut all = Vec::new();
        let mut page = 1u32;

        loop {
            let mut query = vec![
                ("username".to_string(), username.to_string()),
                ("played".to_string(), "1".to_string()),
                ("page".to_string(), page.to_string()),
            ];
            if let Some(date) = since {
                query.push(("mindate".to_string(), date.format("%Y-%m-%d").to_string()));
            }

            let body = self
                .http
                .get(&url)
                .query(&query)
                .send()?
                .error_for_status()?
                .text()?;

            if body.to_lowercase().contains("invalid object or user") {
                return Err(Error::UnknownUser(username.to_string()));
            }

            let plays = parse::parse_plays_page(&body)?;
            if plays.is_empty() {
                break;
            }
            all.extend(plays);
            page += 1;
        }

        Ok(all)
    }

    /// Establish a session; the cookie jar carries it afterwards.
    pub fn login(&self, credentials: &Credentials) -> Result<()> {
        let url = format!("{}/login/api/v1", self.options.site_root);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "credentials": credentials }))
            .send()?;

        if !response.status().is_success() {
            return Err(Error::AuthRequired);
        }
        Ok(())
    }

    /// Log `quantity` plays of a game on `date`. The endpoint answers 200
    /// even on failure; the outcome is classified from the body.
    pub fn log_play(
        &self,
        game_id: u64,
        date: NaiveDate,
        quantity: u32,
        comment: &str,
    ) -> Result<()> {
        let url = format!("{}/geekplay.php", self.options.site_root);
        let payload = json!({
            "playdate": date.format("%Y-%m-%d").to_string(),
            "objectid": game_id.to_string(),
            "objecttype": "thing",
            "action": "save",
            "quantity": quantity.to_string(),
            "comments": comment,
        });

        let body = self.http.post(&url).json(&payload).send()?.text()?;
        parse::classify_write_response(&body)
    }

    /// Fetch a user's collection, either owned games or the wishlist.
    pub fn collection(&self, username: &str, wishlist: bool) -> Result<Vec<CollectionItem>> {
        let url = format!("{}/collection", self.options.api_root);
        let subtype_filter = if wishlist { ("wishlist", "1") } else { ("own", "1") };
        let query = [
            ("username", username),
            ("stats", "0"),
            subtype_filter,
        ];

        for _ in 0..COLLECTION_RETRIES {
            let response = self.http.get(&url).query(&query).send()?;
            if response.status() == reqwest::StatusCode::ACCEPTED {
                thread::sleep(COLLECTION_RETRY_DELAY);
                continue;
            }

            let body = response.error_for_status()?.text()?;
            if body.to_lowercase().contains("invalid username") {
                return Err(Error::UnknownUser(username.to_string()));
            }
            return parse::parse_collection(&body);
        }

        Err(Error::QueueTimeout)
    }

    /// Persist a new comment string on a collection entry. Requires a
    /// logged-in session.
    pub fn set_comment(&self, item: &CollectionItem, comment: &str) -> Result<()> {
        let url = format!("{}/geekcollection.php", self.options.site_root);
        let object_id = item.object_id.to_string();
        let collection_id = item.collection_id.to_string();

        let body = self
            .http
            .post(&url)
            .form(&[
                ("action", "savedata"),
                ("fieldname", "comment"),
                ("objecttype", "thing"),
                ("objectid", object_id.as_str()),
                ("collid", collection_id.as_str()),
                ("value", comment),
            ])
            .send()?
            .text()?;
        parse::classify_write_response(&body)
    }
}
