use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::args::TagArgs;
use crate::ui::picker;
use meeple_runtime::Workspace;
use meeple_types::{CollectionItem, TagId, TagKind, TagValue};

pub fn handle(workspace: &Workspace, title: &str, tags: &TagArgs, first: bool) -> Result<()> {
    let updates = build_updates(tags)?;
    if updates.is_empty() {
        bail!("nothing to change: pass at least one tag option (see `meeple collection tag --help`)");
    }

    let items = workspace.collection(false)?;
    let Some(item) = resolve_item(&items, title, first)? else {
        return Ok(());
    };

    let comment = workspace.edit_tags(&item, updates)?;
    if comment.is_empty() {
        println!("Cleared all tags on {}.", item.name.yellow());
    } else {
        println!("{} now carries {}", item.name.yellow(), comment.cyan());
    }

    Ok(())
}

/// Translate CLI flags into the ordered update sequence handed to the tag
/// codec. Clearing flags come after their setting counterparts so an
/// invocation mixing both nets out to a removal.
fn build_updates(tags: &TagArgs) -> Result<Vec<(TagId, TagValue)>> {
    let mut updates = Vec::new();

    if let Some(name) = &tags.loan {
        updates.push((TagId::Known(TagKind::Loaned), TagValue::Value(name.clone())));
    }
    if tags.return_loan {
        updates.push((TagId::Known(TagKind::Loaned), TagValue::Flag(false)));
    }
    if tags.audit {
        updates.push((TagId::Known(TagKind::Audit), TagValue::Flag(true)));
    }
    if tags.giveaway {
        updates.push((
            TagId::Known(TagKind::Audit),
            TagValue::Value("Giveaway".to_string()),
        ));
    }
    if tags.clear_audit {
        updates.push((TagId::Known(TagKind::Audit), TagValue::Flag(false)));
    }

    for pair in &tags.set {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("--set expects NAME=VALUE, got '{}'", pair);
        };
        if name.is_empty() || value.is_empty() {
            bail!("--set expects a non-empty NAME=VALUE, got '{}'", pair);
        }
        updates.push((TagId::from_text(name), TagValue::Value(value.to_string())));
    }
    for name in &tags.unset {
        updates.push((TagId::from_text(name), TagValue::Flag(false)));
    }

    Ok(updates)
}

/// Resolve a title against the collection: exact case-insensitive match
/// first, then substring matches with a pick when ambiguous.
fn resolve_item(
    items: &[CollectionItem],
    title: &str,
    first: bool,
) -> Result<Option<CollectionItem>> {
    let lowered = title.to_lowercase();

    if let Some(exact) = items.iter().find(|item| item.name.to_lowercase() == lowered) {
        return Ok(Some(exact.clone()));
    }

    let matches: Vec<&CollectionItem> = items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&lowered))
        .collect();

    match matches.as_slice() {
        [] => bail!("no collection entry matches '{}'", title),
        [only] => Ok(Some((*only).clone())),
        _ if first => Ok(Some(matches[0].clone())),
        _ => {
            let rows: Vec<String> = matches.iter().map(|item| row_label(item)).collect();
            Ok(picker::select("Select a collection entry", &rows)?
                .map(|index| matches[index].clone()))
        }
    }
}

fn row_label(item: &CollectionItem) -> String {
    match &item.year {
        Some(year) => format!("-> {} ({})", item.name, year),
        None => format!("-> {}", item.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meeple_types::CollectionStatus;

    fn no_tags() -> TagArgs {
        TagArgs {
            loan: None,
            return_loan: false,
            audit: false,
            giveaway: false,
            clear_audit: false,
            set: Vec::new(),
            unset: Vec::new(),
        }
    }

    fn item(name: &str) -> CollectionItem {
        CollectionItem {
            object_id: 1,
            collection_id: 1,
            name: name.to_string(),
            year: None,
            status: CollectionStatus::default(),
            comment: None,
        }
    }

    #[test]
    fn test_no_flags_builds_no_updates() {
        assert!(build_updates(&no_tags()).unwrap().is_empty());
    }

    #[test]
    fn test_loan_and_giveaway_mapping() {
        let args = TagArgs {
            loan: Some("Alice".to_string()),
            giveaway: true,
            ..no_tags()
        };
        let updates = build_updates(&args).unwrap();
        assert_eq!(
            updates,
            vec![
                (
                    TagId::Known(TagKind::Loaned),
                    TagValue::Value("Alice".to_string())
                ),
                (
                    TagId::Known(TagKind::Audit),
                    TagValue::Value("Giveaway".to_string())
                ),
            ]
        );
    }

    #[test]
    fn test_clear_flags_map_to_falsy_values() {
        let args = TagArgs {
            return_loan: true,
            clear_audit: true,
            unset: vec!["Shelf".to_string()],
            ..no_tags()
        };
        let updates = build_updates(&args).unwrap();
        assert_eq!(
            updates,
            vec![
                (TagId::Known(TagKind::Loaned), TagValue::Flag(false)),
                (TagId::Known(TagKind::Audit), TagValue::Flag(false)),
                (TagId::Unknown("Shelf".to_string()), TagValue::Flag(false)),
            ]
        );
    }

    #[test]
    fn test_set_resolves_known_names_to_known_kinds() {
        let args = TagArgs {
            set: vec!["Loaned=Bob".to_string(), "Shelf=B3".to_string()],
            ..no_tags()
        };
        let updates = build_updates(&args).unwrap();
        assert_eq!(
            updates[0],
            (
                TagId::Known(TagKind::Loaned),
                TagValue::Value("Bob".to_string())
            )
        );
        assert_eq!(
            updates[1],
            (
                TagId::Unknown("Shelf".to_string()),
                TagValue::Value("B3".to_string())
            )
        );
    }

    #[test]
    fn test_set_without_equals_is_an_error() {
        let args = TagArgs {
            set: vec!["Shelf".to_string()],
            ..no_tags()
        };
        assert!(build_updates(&args).is_err());
    }

    #[test]
    fn test_resolve_prefers_exact_match() {
        let items = [item("Catan"), item("Catan Card Game")];
        let resolved = resolve_item(&items, "catan", false).unwrap().unwrap();
        assert_eq!(resolved.name, "Catan");
    }

    #[test]
    fn test_resolve_unique_substring_match() {
        let items = [item("Catan"), item("Azul")];
        let resolved = resolve_item(&items, "azu", false).unwrap().unwrap();
        assert_eq!(resolved.name, "Azul");
    }

    #[test]
    fn test_resolve_no_match_is_an_error() {
        let items = [item("Catan")];
        assert!(resolve_item(&items, "wingspan", false).is_err());
    }

    #[test]
    fn test_resolve_ambiguous_with_first_takes_first() {
        let items = [item("Catan"), item("Catan Card Game")];
        let resolved = resolve_item(&items, "cata", true).unwrap().unwrap();
        assert_eq!(resolved.name, "Catan");
    }
}
