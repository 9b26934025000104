//! Typed, immutable events.
//!
//! An [`Event`] pairs a routed [`ParsedMessage`] with the raw line it came
//! from. Two specialized read-only views exist on top of it:
//! [`ChatEvent`](crate::ChatEvent) for chat-class commands and
//! [`SubEvent`](crate::SubEvent) for classified `USERNOTICE`s. Every event
//! is constructed once — per incoming line, or per outgoing synthetic
//! message — and never mutated.

mod chat;
mod sub;

pub use self::chat::ChatEvent;
pub use self::sub::SubEvent;

use std::borrow::Cow;

use crate::chan::ChannelLocator;
use crate::command::CommandKind;
use crate::router::ParsedMessage;
use crate::tags::{TagMap, TagValue};
use crate::user::UserRef;

/// A routed line as delivered to consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    command: CommandKind,
    raw_line: String,
    parsed: ParsedMessage,
}

impl Event {
    /// Wrap a routed message with the line it was parsed from. The
    /// command is taken from the parse; [`CommandKind`] being a closed
    /// enum, an out-of-enumeration command cannot be represented.
    pub fn new(raw_line: String, parsed: ParsedMessage) -> Self {
        Self {
            command: parsed.command,
            raw_line,
            parsed,
        }
    }

    /// The matched command.
    pub fn command(&self) -> CommandKind {
        self.command
    }

    /// The raw wire line this event was built from.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// The full router output.
    pub fn parsed(&self) -> &ParsedMessage {
        &self.parsed
    }

    /// Decoded tags.
    pub fn tags(&self) -> &TagMap {
        &self.parsed.tags
    }

    /// Channel the event is anchored to, when the grammar has one.
    pub fn channel(&self) -> Option<&ChannelLocator> {
        self.parsed.channel.as_ref()
    }

    /// Sender or target user.
    pub fn user(&self) -> Option<&UserRef> {
        self.parsed.user.as_ref()
    }

    /// Trailing free-text payload.
    pub fn message(&self) -> Option<&str> {
        self.parsed.message.as_deref()
    }

    /// A tag by name.
    pub fn tag(&self, key: &str) -> Option<&TagValue> {
        self.parsed.tags.get(key)
    }

    /// Text form of a tag.
    pub fn tag_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.tag(key).and_then(TagValue::as_text)
    }

    /// Boolean view of a `0`/`1` flag tag. Absent counts as false.
    pub fn tag_truthy(&self, key: &str) -> bool {
        self.tag(key).is_some_and(TagValue::is_truthy)
    }

    /// Non-negative count tag. Absent or out of range counts as zero.
    pub fn tag_count(&self, key: &str) -> u32 {
        self.tag(key)
            .and_then(TagValue::as_int)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0)
    }
}
