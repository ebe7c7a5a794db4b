//! Wire schemas for the XML API responses.
//!
//! Field names mirror the documents the service actually returns; `@`
//! prefixes mark attributes and `$text` element text. Fields the client
//! does not consume (thumbnails, stats blocks, subtype lists) are simply
//! not declared and get skipped during deserialization.

use serde::Deserialize;

/// `<items total="N">` envelope returned by the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchDoc {
    #[serde(rename = "@total")]
    pub total: u32,

    #[serde(default, rename = "item")]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(rename = "@id")]
    pub id: u64,

    pub name: Option<AttrValue>,
    pub yearpublished: Option<AttrValue>,
}

/// `<name value="..."/>`-style element carrying its payload in an attribute.
#[derive(Debug, Deserialize)]
pub struct AttrValue {
    #[serde(rename = "@value")]
    pub value: String,
}

/// One page of the `<plays>` feed.
#[derive(Debug, Deserialize)]
pub struct PlaysDoc {
    #[serde(default, rename = "play")]
    pub plays: Vec<PlayRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PlayRecord {
    #[serde(rename = "@date")]
    pub date: String,

    #[serde(rename = "@quantity")]
    pub quantity: u32,

    pub item: PlayItem,
}

#[derive(Debug, Deserialize)]
pub struct PlayItem {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@objectid")]
    pub object_id: u64,
}

/// `<items totalitems="N">` envelope returned by the collection endpoint.
#[derive(Debug, Deserialize)]
pub struct CollectionDoc {
    #[serde(rename = "@totalitems")]
    pub total_items: u32,

    #[serde(default, rename = "item")]
    pub items: Vec<CollectionRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionRecord {
    #[serde(rename = "@objectid")]
    pub object_id: u64,

    #[serde(rename = "@collid")]
    pub collection_id: u64,

    pub name: TextValue,
    pub yearpublished: Option<TextValue>,
    pub status: StatusRecord,
    pub comment: Option<TextValue>,
}

/// Element carrying its payload as text content, e.g. `<name>Catan</name>`.
#[derive(Debug, Deserialize)]
pub struct TextValue {
    #[serde(default, rename = "$text")]
    pub value: String,
}

/// `<status own="1" wishlist="0" .../>`; the service encodes booleans as
/// `0`/`1` attribute strings.
#[derive(Debug, Deserialize)]
pub struct StatusRecord {
    #[serde(default, rename = "@own")]
    pub own: u8,

    #[serde(default, rename = "@wishlist")]
    pub wishlist: u8,

    #[serde(default, rename = "@wanttoplay")]
    pub want_to_play: u8,

    #[serde(default, rename = "@preordered")]
    pub preordered: u8,
}
