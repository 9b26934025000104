//! Tag block decoding and encoding.
//!
//! A line may begin with an `@key=value;...` metadata block. Values use the
//! escape table in [`escape`], and a handful of keys have structured
//! sub-grammars of their own (`badges`, `badge-info`, `emotes`,
//! `emote-sets`). Everything else decodes to a string, an integer when the
//! whole value is digits, or nil when empty.

pub mod escape;

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::badge::{self, BadgeEntry};
use crate::emote::{self, EmoteSpan};

pub use self::escape::escape_tag_value;

/// Decoded tag map, keyed by tag name. Built once per line and never
/// mutated after it is attached to a parsed message.
pub type TagMap = BTreeMap<String, TagValue>;

/// A decoded tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagValue {
    /// Unescaped text.
    Str(String),
    /// Value whose entire decoded text was digits.
    Int(i64),
    /// Empty or absent value.
    Nil,
    /// `badges` / `badge-info` entries in wire order.
    Badges(Vec<BadgeEntry>),
    /// `emotes` ranges.
    Emotes(Vec<EmoteSpan>),
    /// `emote-sets` ids.
    EmoteSets(Vec<i64>),
}

impl TagValue {
    /// Text form of the value. `Int` renders back to its digits, so an
    /// all-digit login or id survives integer coercion.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            TagValue::Str(s) => Some(Cow::Borrowed(s)),
            TagValue::Int(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    /// Integer form, for `Int` values.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            TagValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean view of the `0`/`1` flag tags.
    pub fn is_truthy(&self) -> bool {
        matches!(self, TagValue::Int(n) if *n != 0)
    }

    /// Badge entries, for `Badges` values.
    pub fn badges(&self) -> Option<&[BadgeEntry]> {
        match self {
            TagValue::Badges(entries) => Some(entries),
            _ => None,
        }
    }

    /// Emote spans, for `Emotes` values.
    pub fn emotes(&self) -> Option<&[EmoteSpan]> {
        match self {
            TagValue::Emotes(spans) => Some(spans),
            _ => None,
        }
    }
}

/// Decode the tag block (the substring after `@`, before the first space).
pub fn decode_tags(raw: &str) -> TagMap {
    let mut tags = TagMap::new();
    for pair in raw.split(';') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (pair, None),
        };
        let decoded = match value {
            Some(value) => decode_value(key, value),
            None => TagValue::Nil,
        };
        tags.insert(key.to_string(), decoded);
    }
    tags
}

fn decode_value(key: &str, raw: &str) -> TagValue {
    match key {
        "badges" | "badge-info" => TagValue::Badges(badge::parse_badges(raw)),
        "emotes" => TagValue::Emotes(emote::parse_emote_tag(raw)),
        "emote-sets" => TagValue::EmoteSets(
            raw.split(',')
                .filter_map(|set| set.parse().ok())
                .collect(),
        ),
        _ => {
            let text = escape::unescape_tag_value(raw);
            if text.is_empty() {
                TagValue::Nil
            } else if text.bytes().all(|b| b.is_ascii_digit()) {
                // An over-long digit run falls back to text.
                text.parse()
                    .map(TagValue::Int)
                    .unwrap_or(TagValue::Str(text))
            } else {
                TagValue::Str(text)
            }
        }
    }
}

/// Encode a single value back to its wire text (without the key).
pub fn encode_tag_value(value: &TagValue) -> String {
    match value {
        TagValue::Str(s) => escape::escape_tag_value(s),
        TagValue::Int(n) => n.to_string(),
        TagValue::Nil => String::new(),
        TagValue::Badges(entries) => badge::format_badges(entries),
        TagValue::Emotes(spans) => emote::format_emote_tag(spans),
        TagValue::EmoteSets(sets) => sets
            .iter()
            .map(|set| set.to_string())
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Encode a full tag map into the `key=value;...` wire block (without the
/// leading `@`).
pub fn encode_tags(tags: &TagMap) -> String {
    let mut out = String::new();
    for (key, value) in tags {
        if !out.is_empty() {
            out.push(';');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(&encode_tag_value(value));
    }
    out
}

/// Reconcile badge membership with the explicit boolean tags.
///
/// The wire carries two independent signals for the same facts: the
/// `mod`/`subscriber` flag tags and the badge list. A `broadcaster` badge
/// implies `broadcaster=1` and `mod=1`, a `moderator` badge implies
/// `mod=1`, a `subscriber` badge implies `subscriber=1`. Applied to every
/// chat-class tag map so downstream accessors see one consistent view.
pub fn reconcile_badges(tags: &mut TagMap) {
    let mut caster = false;
    let mut moderator = false;
    let mut subscriber = false;
    if let Some(TagValue::Badges(entries)) = tags.get("badges") {
        for entry in entries {
            match entry.name.as_str() {
                "broadcaster" => caster = true,
                "moderator" => moderator = true,
                "subscriber" => subscriber = true,
                _ => {}
            }
        }
    }

    if caster {
        tags.insert("broadcaster".to_string(), TagValue::Int(1));
        tags.insert("mod".to_string(), TagValue::Int(1));
    }
    if moderator {
        tags.insert("mod".to_string(), TagValue::Int(1));
    }
    if subscriber {
        tags.insert("subscriber".to_string(), TagValue::Int(1));
    }
}
