//! Emote range parsing and message scanning.
//!
//! The `emotes` tag maps emote ids to character ranges inside the message
//! text: `id:start-end[,start-end...][/id:...]`. Both offsets are inclusive,
//! which is the wire convention even though it is off by one from the usual
//! half-open ranges.

use regex::Regex;

/// A character range in a chat message corresponding to a known emote id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmoteSpan {
    /// Emote id as carried on the wire.
    pub emote_id: String,
    /// Offset of the first character of the emote name.
    pub start: usize,
    /// Offset of the last character of the emote name (inclusive).
    pub end: usize,
}

impl EmoteSpan {
    /// Create an emote span. `end` is inclusive.
    pub fn new(emote_id: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            emote_id: emote_id.into(),
            start,
            end,
        }
    }
}

/// Parse an `emotes` tag value into one span per range.
///
/// Malformed groups or ranges are skipped with a warning; the rest of the
/// value is still parsed.
pub fn parse_emote_tag(value: &str) -> Vec<EmoteSpan> {
    let mut spans = Vec::new();
    for group in value.split('/') {
        if group.is_empty() {
            continue;
        }
        let Some((id, ranges)) = group.split_once(':') else {
            tracing::warn!(group, "emote group missing id separator");
            continue;
        };
        for range in ranges.split(',') {
            let parsed = range
                .split_once('-')
                .and_then(|(start, end)| Some((start.parse().ok()?, end.parse().ok()?)));
            match parsed {
                Some((start, end)) => spans.push(EmoteSpan::new(id, start, end)),
                None => tracing::warn!(range, "unparseable emote range"),
            }
        }
    }
    spans
}

/// Format spans back to an `emotes` tag value.
///
/// Groups preserve encounter order; spans without an id are dropped since
/// the wire form cannot carry them.
pub fn format_emote_tag(spans: &[EmoteSpan]) -> String {
    let mut groups: Vec<(&str, Vec<String>)> = Vec::new();
    for span in spans {
        if span.emote_id.is_empty() {
            continue;
        }
        let range = format!("{}-{}", span.start, span.end);
        match groups
            .iter_mut()
            .find(|(id, _)| *id == span.emote_id.as_str())
        {
            Some((_, ranges)) => ranges.push(range),
            None => groups.push((span.emote_id.as_str(), vec![range])),
        }
    }
    groups
        .iter()
        .map(|(id, ranges)| format!("{}:{}", id, ranges.join(",")))
        .collect::<Vec<_>>()
        .join("/")
}

/// Find every occurrence of the known emote names in an outgoing message.
///
/// Server-delivered messages already carry the `emotes` tag; this exists for
/// locally-sent messages, where the tag has to be derived from the session's
/// emote table. Each name is matched on word boundaries (whitespace, `\b`,
/// or start/end of string on both sides). Emote names are trusted regex
/// fragments per the wire convention; a name that does not compile is
/// skipped with a warning.
pub fn scan_emotes(message: &str, emotes: &[(String, String)]) -> Vec<EmoteSpan> {
    let mut spans = Vec::new();
    for (id, name) in emotes {
        if name.is_empty() {
            continue;
        }
        let pattern = format!(r"(?:^|\s|\b)({})(?:\b|\s|$)", name);
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(error) => {
                tracing::warn!(%error, name = name.as_str(), "emote name is not a valid pattern");
                continue;
            }
        };
        for caps in re.captures_iter(message) {
            if let Some(m) = caps.get(1) {
                if m.end() > m.start() {
                    spans.push(EmoteSpan::new(id.clone(), m.start(), m.end() - 1));
                }
            }
        }
    }
    spans
}
