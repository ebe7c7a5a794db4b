use owo_colors::OwoColorize;
use serde_json::json;

use meeple_types::{CollectionItem, TagId, TagSet, TagValue};

/// Plain listing row: title, year, and any structured tags as badges.
pub fn row(item: &CollectionItem) -> String {
    let mut out = match &item.year {
        Some(year) => format!("- {} ({})", item.name.yellow(), year),
        None => format!("- {}", item.name.yellow()),
    };

    let tags = TagSet::parse(item.comment.as_deref());
    for (id, value) in tags.iter() {
        if !value.is_set() {
            continue;
        }
        out.push(' ');
        out.push_str(&badge(id, value));
    }

    out
}

fn badge(id: &TagId, value: &TagValue) -> String {
    match value {
        TagValue::Value(text) => format!("[{}: {}]", id.as_str().cyan(), text),
        TagValue::Flag(_) => format!("[{}]", id.as_str().cyan()),
    }
}

/// JSON listing row, with the comment's tags parsed out alongside the raw
/// comment string.
pub fn json_row(item: &CollectionItem) -> serde_json::Value {
    let tags: Vec<serde_json::Value> = TagSet::parse(item.comment.as_deref())
        .iter()
        .filter(|(_, value)| value.is_set())
        .map(|(id, value)| match value {
            TagValue::Value(text) => json!({ "name": id.as_str(), "value": text }),
            TagValue::Flag(_) => json!({ "name": id.as_str(), "value": true }),
        })
        .collect();

    json!({
        "id": item.object_id,
        "name": item.name,
        "year": item.year,
        "own": item.status.own,
        "wishlist": item.status.wishlist,
        "comment": item.comment,
        "tags": tags,
    })
}
