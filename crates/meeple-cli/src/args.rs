use crate::types::OutputFormat;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "meeple")]
#[command(about = "Search the game database, log plays, and manage a collection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config, credentials, and the search cache
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store credentials for the remote service
    Login,

    /// Search the game database by title
    Search {
        query: String,

        /// Only return exact title matches
        #[arg(long)]
        exact: bool,
    },

    Play {
        #[command(subcommand)]
        command: PlayCommand,
    },

    Collection {
        #[command(subcommand)]
        command: CollectionCommand,
    },
}

#[derive(Subcommand)]
pub enum PlayCommand {
    /// Log one or more plays of a game
    Add {
        title: String,

        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Play date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Free-text comment attached to the logged play
        #[arg(long, default_value = "")]
        comment: String,

        /// Ignore the search memo when resolving the title
        #[arg(long)]
        no_cache: bool,

        /// Take the first search hit without asking
        #[arg(long)]
        first: bool,
    },

    /// Aggregate play counts per game
    Summary {
        /// Only count plays from the last N days (whole history if omitted)
        #[arg(long)]
        days: Option<u32>,
    },
}

#[derive(Subcommand)]
pub enum CollectionCommand {
    /// List collection entries
    List {
        /// Show the wishlist instead of owned games
        #[arg(long)]
        wishlist: bool,

        /// Only show entries carrying structured tags
        #[arg(long)]
        tagged: bool,
    },

    /// Edit the structured tags on a collection entry
    Tag {
        title: String,

        #[command(flatten)]
        tags: TagArgs,

        /// Take the first collection match without asking
        #[arg(long)]
        first: bool,
    },
}

/// Tag edits. They are applied in the order the fields are listed here,
/// so a single invocation stays deterministic.
#[derive(Args)]
pub struct TagArgs {
    /// Mark the game as loaned out to someone
    #[arg(long, value_name = "NAME")]
    pub loan: Option<String>,

    /// Clear the loan marker
    #[arg(long = "return", conflicts_with = "loan")]
    pub return_loan: bool,

    /// Flag the game for audit
    #[arg(long, conflicts_with = "giveaway")]
    pub audit: bool,

    /// Mark the game as an audit giveaway
    #[arg(long)]
    pub giveaway: bool,

    /// Clear the audit marker
    #[arg(long, conflicts_with_all = ["audit", "giveaway"])]
    pub clear_audit: bool,

    /// Set an arbitrary tag, NAME=VALUE (repeatable)
    #[arg(long, value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Remove an arbitrary tag by name (repeatable)
    #[arg(long, value_name = "NAME")]
    pub unset: Vec<String>,
}
