use serde::{Deserialize, Serialize};

/// Ownership status flags attached to a collection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionStatus {
    pub own: bool,
    pub wishlist: bool,
    pub want_to_play: bool,
    pub preordered: bool,
}

/// One game in a user's collection.
///
/// The `comment` field is an opaque string owned by the remote service.
/// Structured annotations inside it are handled by [`crate::tags`]; nothing
/// here mutates the comment directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub object_id: u64,
    pub collection_id: u64,
    pub name: String,
    pub year: Option<String>,
    pub status: CollectionStatus,
    pub comment: Option<String>,
}
