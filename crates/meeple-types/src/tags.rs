// Tags give the free-text comment field on a collection entry a structured
// use: tracking loaned games, flagging games for audit, and whatever else a
// user encodes. A tag is either a bare flag or carries a value, and each
// identity appears at most once per comment.
//
// The encoding of a tag is one of: [Tag] | [Tag: Value]

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Matches one bracketed tag token. The inner text cannot contain a closing
/// bracket, so tokens never overlap.
static TAG_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());

/// Well-known tag kinds with a fixed display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Loaned,
    Audit,
}

impl TagKind {
    pub const ALL: [TagKind; 2] = [TagKind::Loaned, TagKind::Audit];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Loaned => "Loaned",
            TagKind::Audit => "Audit",
        }
    }
}

/// Identity of a tag: a well-known kind, or free-form text for tags written
/// by other tools. Unknown identities survive a round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagId {
    Known(TagKind),
    Unknown(String),
}

impl TagId {
    /// Map raw identity text to a known kind by exact, case-sensitive match.
    pub fn from_text(text: &str) -> Self {
        TagKind::ALL
            .iter()
            .find(|kind| kind.as_str() == text)
            .map(|kind| TagId::Known(*kind))
            .unwrap_or_else(|| TagId::Unknown(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            TagId::Known(kind) => kind.as_str(),
            TagId::Unknown(text) => text,
        }
    }
}

impl From<TagKind> for TagId {
    fn from(kind: TagKind) -> Self {
        TagId::Known(kind)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a tag. `Flag(false)` and the empty string both encode
/// removal: the entry stays in the set during an update pass but emits no
/// token when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Flag(bool),
    Value(String),
}

impl TagValue {
    /// Whether this entry emits a token when serialized.
    pub fn is_set(&self) -> bool {
        match self {
            TagValue::Flag(set) => *set,
            TagValue::Value(text) => !text.is_empty(),
        }
    }
}

impl From<bool> for TagValue {
    fn from(set: bool) -> Self {
        TagValue::Flag(set)
    }
}

impl From<&str> for TagValue {
    fn from(text: &str) -> Self {
        TagValue::Value(text.to_string())
    }
}

impl From<String> for TagValue {
    fn from(text: String) -> Self {
        TagValue::Value(text)
    }
}

/// Ordered tag set parsed out of a collection comment.
///
/// Insertion order is preserved: assigning to an identity that is already
/// present keeps its slot, new identities append at the end. Re-serializing
/// a freshly parsed set reproduces the source comment byte-for-byte, as long
/// as the source contained nothing but well-formed tokens.
///
/// Values must not contain `[` or `]` and must not begin with `:`;
/// `serialize` does not validate this and such values will not round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    entries: Vec<(TagId, TagValue)>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-effort parse of a comment string. Text outside bracketed tokens
    /// is dropped, and a later duplicate of an identity overwrites the
    /// earlier value in place. Never fails.
    pub fn parse(comment: Option<&str>) -> Self {
        let mut tags = TagSet::new();
        let Some(comment) = comment else {
            return tags;
        };

        for token in TAG_TOKEN.captures_iter(comment) {
            let inner = &token[1];
            match inner.split_once(':') {
                None => tags.insert(TagId::from_text(inner), TagValue::Flag(true)),
                Some((name, value)) => tags.insert(
                    TagId::from_text(name),
                    TagValue::Value(value.trim().to_string()),
                ),
            }
        }

        tags
    }

    /// Insert or overwrite. An existing identity keeps its position; a new
    /// one appends at the end.
    pub fn insert(&mut self, id: TagId, value: TagValue) {
        match self.entries.iter().position(|(existing, _)| *existing == id) {
            Some(slot) => self.entries[slot].1 = value,
            None => self.entries.push((id, value)),
        }
    }

    pub fn get(&self, id: &TagId) -> Option<&TagValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(TagId, TagValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render back to the flat comment encoding. Cleared entries emit
    /// nothing, which is how tag removal reaches the wire.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (id, value) in &self.entries {
            match value {
                TagValue::Value(text) if !text.is_empty() => {
                    out.push_str(&format!("[{}: {}]", id, text));
                }
                TagValue::Flag(true) => {
                    out.push_str(&format!("[{}]", id));
                }
                _ => {}
            }
        }
        out
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Merge `updates` into the tags already present in `existing` and return
/// the new comment string. Existing identities keep their slot, new ones
/// append in the order given. Applying the same updates twice yields the
/// same string as applying them once.
///
/// This is the only tag-mutation entry point; callers never hand-edit a
/// comment string.
pub fn update_tags(
    existing: Option<&str>,
    updates: impl IntoIterator<Item = (TagId, TagValue)>,
) -> String {
    let mut tags = TagSet::parse(existing);
    for (id, value) in updates {
        tags.insert(id, value);
    }
    tags.serialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn loaned_to(name: &str) -> (TagId, TagValue) {
        (TagKind::Loaned.into(), TagValue::Value(name.to_string()))
    }

    #[test]
    fn test_empty_input() {
        assert!(TagSet::parse(None).is_empty());
        assert!(TagSet::parse(Some("")).is_empty());
        assert_eq!(TagSet::new().serialize(), "");
    }

    #[test]
    fn test_flag_round_trip() {
        let tags = TagSet::parse(Some("[Audit]"));
        assert_eq!(tags.get(&TagKind::Audit.into()), Some(&TagValue::Flag(true)));
        assert_snapshot!(tags.serialize(), @"[Audit]");
    }

    #[test]
    fn test_valued_round_trip() {
        let tags = TagSet::parse(Some("[Loaned: Alice]"));
        assert_eq!(
            tags.get(&TagKind::Loaned.into()),
            Some(&TagValue::Value("Alice".to_string()))
        );
        assert_snapshot!(tags.serialize(), @"[Loaned: Alice]");
    }

    #[test]
    fn test_round_trip_well_formed() {
        let source = "[Audit][Loaned: Alice][Shelf: B3]";
        let tags = TagSet::parse(Some(source));
        assert_eq!(tags.serialize(), source);
        assert_eq!(TagSet::parse(Some(&tags.serialize())), tags);
    }

    #[test]
    fn test_value_whitespace_is_trimmed() {
        let tags = TagSet::parse(Some("[Loaned:   Alice  ]"));
        assert_eq!(
            tags.get(&TagKind::Loaned.into()),
            Some(&TagValue::Value("Alice".to_string()))
        );
    }

    #[test]
    fn test_removal_via_update() {
        let updated = update_tags(
            Some("[Loaned: Alice][Audit]"),
            [(TagId::Known(TagKind::Loaned), TagValue::Flag(false))],
        );
        assert_snapshot!(updated, @"[Audit]");
    }

    #[test]
    fn test_update_preserves_position() {
        let updated = update_tags(
            Some("[Audit][Loaned: Alice]"),
            [(TagId::Known(TagKind::Audit), TagValue::Value("Giveaway".to_string()))],
        );
        assert_snapshot!(updated, @"[Audit: Giveaway][Loaned: Alice]");
    }

    #[test]
    fn test_new_identities_append_in_update_order() {
        let updated = update_tags(
            Some("[Audit]"),
            vec![
                loaned_to("Alice"),
                (TagId::Unknown("Shelf".to_string()), TagValue::Value("B3".to_string())),
            ],
        );
        assert_eq!(updated, "[Audit][Loaned: Alice][Shelf: B3]");
    }

    #[test]
    fn test_unknown_tags_survive_unrelated_updates() {
        let tags = TagSet::parse(Some("[Custom: Foo][Audit]"));
        assert_eq!(
            tags.get(&TagId::Unknown("Custom".to_string())),
            Some(&TagValue::Value("Foo".to_string()))
        );

        let updated = update_tags(Some("[Custom: Foo][Audit]"), [loaned_to("Alice")]);
        assert_eq!(updated, "[Custom: Foo][Audit][Loaned: Alice]");
    }

    #[test]
    fn test_garbage_around_tags_is_dropped() {
        let tags = TagSet::parse(Some("random text [Audit] more text"));
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get(&TagKind::Audit.into()), Some(&TagValue::Flag(true)));
        assert_eq!(tags.serialize(), "[Audit]");
    }

    #[test]
    fn test_update_is_idempotent() {
        let updates = || {
            vec![
                loaned_to("Alice"),
                (TagId::Known(TagKind::Audit), TagValue::Flag(false)),
            ]
        };
        let once = update_tags(Some("stray [Audit] text [Shelf: B3]"), updates());
        let twice = update_tags(Some(&once), updates());
        assert_eq!(once, twice);
        assert_eq!(once, "[Shelf: B3][Loaned: Alice]");
    }

    #[test]
    fn test_duplicate_identity_keeps_first_position() {
        let tags = TagSet::parse(Some("[Loaned: Alice][Audit][Loaned: Bob]"));
        assert_eq!(tags.serialize(), "[Loaned: Bob][Audit]");
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let tags = TagSet::parse(Some("[Note: due: friday]"));
        assert_eq!(
            tags.get(&TagId::Unknown("Note".to_string())),
            Some(&TagValue::Value("due: friday".to_string()))
        );
    }

    #[test]
    fn test_known_mapping_is_case_sensitive() {
        let tags = TagSet::parse(Some("[loaned: Alice]"));
        assert_eq!(tags.get(&TagKind::Loaned.into()), None);
        assert_eq!(
            tags.get(&TagId::Unknown("loaned".to_string())),
            Some(&TagValue::Value("Alice".to_string()))
        );
    }

    #[test]
    fn test_empty_value_emits_nothing() {
        let cleared = update_tags(
            None,
            [(TagId::Known(TagKind::Loaned), TagValue::Value(String::new()))],
        );
        assert_eq!(cleared, "");
        assert_eq!(TagSet::parse(Some("[Loaned:]")).serialize(), "");
    }

    #[test]
    fn test_unmatched_brackets_are_ignored() {
        assert!(TagSet::parse(Some("[unclosed")).is_empty());
        assert_eq!(TagSet::parse(Some("stray] [Audit]")).serialize(), "[Audit]");
    }
}
