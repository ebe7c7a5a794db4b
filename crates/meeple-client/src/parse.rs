use chrono::NaiveDate;
use quick_xml::de::from_str;

use crate::error::{Error, Result};
use crate::schema;
use meeple_types::{CollectionItem, CollectionStatus, GameSummary, Play};

/// Decode a search response into summaries. A document declaring zero
/// results is valid and yields an empty list.
pub fn parse_search(body: &str) -> Result<Vec<GameSummary>> {
    let doc: schema::SearchDoc = from_str(body)?;
    if doc.total == 0 {
        return Ok(Vec::new());
    }

    Ok(doc
        .items
        .into_iter()
        .map(|item| GameSummary {
            id: item.id,
            name: item.name.map(|name| name.value).unwrap_or_default(),
            year: item.yearpublished.map(|year| year.value),
        })
        .collect())
}

/// Decode one page of the plays feed. An empty page signals the end of
/// pagination to the caller.
pub fn parse_plays_page(body: &str) -> Result<Vec<Play>> {
    let doc: schema::PlaysDoc = from_str(body)?;
    Ok(doc
        .plays
        .into_iter()
        .map(|play| Play {
            date: NaiveDate::parse_from_str(&play.date, "%Y-%m-%d").ok(),
            quantity: play.quantity,
            game_name: play.item.name,
        })
        .collect())
}

/// Decode a collection export. Empty comment elements come through as no
/// comment at all.
pub fn parse_collection(body: &str) -> Result<Vec<CollectionItem>> {
    let doc: schema::CollectionDoc = from_str(body)?;
    Ok(doc
        .items
        .into_iter()
        .map(|record| CollectionItem {
            object_id: record.object_id,
            collection_id: record.collection_id,
            name: record.name.value,
            year: record.yearpublished.map(|year| year.value),
            status: CollectionStatus {
                own: record.status.own != 0,
                wishlist: record.status.wishlist != 0,
                want_to_play: record.status.want_to_play != 0,
                preordered: record.status.preordered != 0,
            },
            comment: record
                .comment
                .map(|comment| comment.value)
                .filter(|comment| !comment.is_empty()),
        })
        .collect())
}

/// Classify the HTML body of a write endpoint. These endpoints answer 200
/// even on failure; the outcome is only visible in the body text.
pub fn classify_write_response(body: &str) -> Result<()> {
    let lowered = body.to_lowercase();
    if lowered.contains("you must login") {
        return Err(Error::AuthRequired);
    }
    if lowered.contains("invalid action") {
        return Err(Error::Rejected("invalid action".to_string()));
    }
    Ok(())
}
