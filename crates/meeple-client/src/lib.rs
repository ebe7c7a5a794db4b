pub mod client;
pub mod error;
pub mod schema;

mod parse;

pub use client::{BggClient, ClientOptions, Credentials, DEFAULT_API_ROOT, DEFAULT_SITE_ROOT};
pub use error::{Error, Result};
pub use parse::{classify_write_response, parse_collection, parse_plays_page, parse_search};
