use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged play session from the plays feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Date the play was logged for. The feed occasionally carries
    /// placeholder dates that do not parse; those come through as None.
    pub date: Option<NaiveDate>,
    pub quantity: u32,
    pub game_name: String,
}
