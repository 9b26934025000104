//! User badge parsing.
//!
//! The `badges` and `badge-info` tags carry a comma-separated list of
//! `name/revision` pairs, e.g. `moderator/1,subscriber/12`. Wire order is
//! preserved: the first entry is the primary badge.

/// A named, revisioned user-status marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BadgeEntry {
    /// Badge name, e.g. `moderator`.
    pub name: String,
    /// Badge revision. For the `subscriber` entry of `badge-info` this is
    /// the month count.
    pub revision: String,
}

impl BadgeEntry {
    /// Create a badge entry.
    pub fn new(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revision: revision.into(),
        }
    }
}

/// Parse a `name/revision[,name/revision...]` badge list.
///
/// An entry without a `/` separator keeps an empty revision; empty entries
/// are skipped.
pub fn parse_badges(value: &str) -> Vec<BadgeEntry> {
    value
        .split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('/') {
            Some((name, revision)) => BadgeEntry::new(name, revision),
            None => BadgeEntry::new(entry, ""),
        })
        .collect()
}

/// Format a badge list back to wire form.
pub fn format_badges(entries: &[BadgeEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}/{}", entry.name, entry.revision))
        .collect::<Vec<_>>()
        .join(",")
}

/// Whether the list contains a badge with the given name.
pub fn has_badge(entries: &[BadgeEntry], name: &str) -> bool {
    entries.iter().any(|entry| entry.name == name)
}

/// Revision of the named badge, if present.
pub fn badge_revision<'a>(entries: &'a [BadgeEntry], name: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.revision.as_str())
}
