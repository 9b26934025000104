//! Line routing.
//!
//! [`route`] matches one raw line against the known command grammars and
//! extracts its captures into a [`ParsedMessage`]. Dispatch is keyed on the
//! command token (the second whitespace token when a prefix is present,
//! `PING` by its first); the tag block, channel token, sender token and
//! trailing payload are decoded by their interpreter modules while still
//! inside routing, so callers only ever see normalized values.
//!
//! [`FrameRouter`] drives whole frames: lines are processed strictly in
//! order, and one unroutable line never aborts the rest of its frame.

mod tokenizer;

use std::collections::BTreeMap;

use crate::chan::{self, ChannelLocator};
use crate::command::CommandKind;
use crate::ctcp;
use crate::error::RouteError;
use crate::event::Event;
use crate::metrics::ParseMetrics;
use crate::tags::{self, TagMap};
use crate::user::{self, UserRef};

use self::tokenizer::RawParts;

/// The router's output for one matched line, before any event
/// classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMessage {
    /// The matched command.
    pub command: CommandKind,
    /// Decoded tag block; empty when the line carried none.
    pub tags: TagMap,
    /// Channel locator, for commands anchored to a channel.
    pub channel: Option<ChannelLocator>,
    /// Sender or target user, already reduced to a login.
    pub user: Option<UserRef>,
    /// Trailing free-text payload.
    pub message: Option<String>,
    /// Whether the message was a CTCP `ACTION` (`/me`).
    pub action: bool,
    /// Remaining command-specific captures by name.
    pub fields: BTreeMap<&'static str, String>,
}

impl ParsedMessage {
    fn new(command: CommandKind) -> Self {
        Self {
            command,
            tags: TagMap::new(),
            channel: None,
            user: None,
            message: None,
            action: false,
            fields: BTreeMap::new(),
        }
    }

    /// A named command-specific capture.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// A named capture holding a space-separated list (ACK flags, NAMES
    /// logins).
    pub fn field_list(&self, name: &str) -> Vec<&str> {
        self.field(name)
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// Outcome of routing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Routed {
    /// The line matched a command grammar.
    Event(ParsedMessage),
    /// The line is a recognized list marker (375/376/366) with nothing to
    /// deliver.
    Ignored,
}

/// Match one raw line against the known grammars.
///
/// Returns [`Routed::Ignored`] for the start/end-of-list numerics and
/// [`RouteError::UnknownGrammar`] for anything unmatched; the caller skips
/// failed lines and continues.
pub fn route(line: &str) -> Result<Routed, RouteError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(parts) = RawParts::tokenize(line) else {
        return Err(RouteError::UnknownGrammar {
            line: line.to_string(),
        });
    };

    let tags = parts.tags.map(tags::decode_tags).unwrap_or_default();
    let p = &parts.params;

    let mut msg = match parts.command {
        "PING" => {
            let mut m = ParsedMessage::new(CommandKind::PING);
            if let Some(server) = p.first() {
                m.fields.insert("server", server.to_string());
            }
            m
        }

        "CAP" if p.get(1).copied() == Some("ACK") => {
            let mut m = ParsedMessage::new(CommandKind::ACK);
            if let Some(server) = parts.prefix {
                m.fields.insert("server", server.to_string());
            }
            if let Some(flags) = p.get(2) {
                m.fields.insert("flags", flags.to_string());
            }
            m
        }

        // Welcome and MOTD text lines share one shape.
        "001" | "002" | "003" | "004" | "005" | "006" | "007" | "008" | "009" | "372" => {
            let mut m = ParsedMessage::new(CommandKind::TOPIC);
            m.fields.insert("code", parts.command.to_string());
            if let Some(server) = parts.prefix {
                m.fields.insert("server", server.to_string());
            }
            if let Some(username) = p.first() {
                m.fields.insert("username", username.to_string());
            }
            m.message = p.get(1).map(|s| s.to_string());
            m
        }

        // Start/end-of-list markers carry nothing consumers need.
        "375" | "376" | "366" => return Ok(Routed::Ignored),

        "353" => {
            let mut m = ParsedMessage::new(CommandKind::NAMES);
            if let Some(mode) = p.get(1) {
                m.fields.insert("mode", mode.to_string());
            }
            m.channel = p.get(2).map(|token| chan::parse_channel(token));
            if let Some(names) = p.get(3) {
                m.fields.insert("names", names.to_string());
            }
            m
        }

        "JOIN" | "PART" => {
            let kind = if parts.command == "JOIN" {
                CommandKind::JOIN
            } else {
                CommandKind::PART
            };
            let mut m = ParsedMessage::new(kind);
            m.user = parts.prefix.map(user::parse_user);
            m.channel = p.first().map(|token| chan::parse_channel(token));
            m
        }

        "MODE" => {
            let mut m = ParsedMessage::new(CommandKind::MODE);
            if let Some(sender) = parts.prefix {
                m.fields.insert("sender", sender.to_string());
            }
            m.channel = p.first().map(|token| chan::parse_channel(token));
            if let Some(modeflag) = p.get(1) {
                m.fields.insert("modeflag", modeflag.to_string());
            }
            m.user = p.get(2).map(|token| user::parse_user(token));
            m
        }

        "PRIVMSG" => {
            let mut m = ParsedMessage::new(CommandKind::PRIVMSG);
            m.user = parts.prefix.map(user::parse_user);
            m.channel = p.first().map(|token| chan::parse_channel(token));
            if let Some(text) = p.get(1) {
                match ctcp::unwrap_action(text) {
                    Some(inner) => {
                        m.action = true;
                        m.message = Some(inner.to_string());
                    }
                    None => m.message = Some(text.to_string()),
                }
            }
            m
        }

        "WHISPER" => {
            let mut m = ParsedMessage::new(CommandKind::WHISPER);
            m.user = parts.prefix.map(user::parse_user);
            if let Some(recipient) = p.first() {
                m.fields.insert("recipient", recipient.to_string());
            }
            m.message = p.get(1).map(|s| s.to_string());
            m
        }

        "USERSTATE" | "ROOMSTATE" => {
            let kind = if parts.command == "USERSTATE" {
                CommandKind::USERSTATE
            } else {
                CommandKind::ROOMSTATE
            };
            let mut m = ParsedMessage::new(kind);
            m.channel = p.first().map(|token| chan::parse_channel(token));
            m
        }

        "USERNOTICE" => {
            let mut m = ParsedMessage::new(CommandKind::USERNOTICE);
            m.channel = p.first().map(|token| chan::parse_channel(token));
            m.message = p.get(1).map(|s| s.to_string());
            m
        }

        "GLOBALUSERSTATE" => ParsedMessage::new(CommandKind::GLOBALUSERSTATE),

        "CLEARCHAT" => {
            let mut m = ParsedMessage::new(CommandKind::CLEARCHAT);
            m.channel = p.first().map(|token| chan::parse_channel(token));
            m.user = p.get(1).map(|token| user::parse_user(token));
            m
        }

        "CLEARMSG" => {
            let mut m = ParsedMessage::new(CommandKind::CLEARMSG);
            m.channel = p.first().map(|token| chan::parse_channel(token));
            m.message = p.get(1).map(|s| s.to_string());
            m
        }

        "HOSTTARGET" => {
            let mut m = ParsedMessage::new(CommandKind::HOSTTARGET);
            m.channel = p.first().map(|token| chan::parse_channel(token));
            m.user = p
                .get(1)
                .and_then(|trailing| trailing.split_whitespace().next())
                .map(user::parse_user);
            m
        }

        "NOTICE" => {
            let mut m = ParsedMessage::new(CommandKind::NOTICE);
            m.channel = p.first().map(|token| chan::parse_channel(token));
            m.message = p.get(1).map(|s| s.to_string());
            m
        }

        "421" => {
            let mut m = ParsedMessage::new(CommandKind::ERR_UNKNOWNCOMMAND);
            if let Some(username) = p.first() {
                m.fields.insert("username", username.to_string());
            }
            if let Some(command) = p.get(1) {
                m.fields.insert("command", command.to_string());
            }
            m.message = p.get(2).map(|s| s.to_string());
            m
        }

        _ => {
            return Err(RouteError::UnknownGrammar {
                line: line.to_string(),
            })
        }
    };

    msg.tags = tags;
    if msg.command.is_chat_class() {
        tags::reconcile_badges(&mut msg.tags);
    }
    Ok(Routed::Event(msg))
}

/// Frame-level driver over [`route`].
///
/// A frame holds one or more CRLF-terminated lines. Lines are routed in
/// arrival order; a failed line is reported to the warning log and the
/// optional metrics sink, then skipped, and processing continues with the
/// next line.
#[derive(Default)]
pub struct FrameRouter<'m> {
    metrics: Option<&'m mut dyn ParseMetrics>,
}

impl<'m> FrameRouter<'m> {
    /// Router with no observation sink.
    pub fn new() -> FrameRouter<'static> {
        FrameRouter { metrics: None }
    }

    /// Router reporting observations to `metrics`.
    pub fn with_metrics(metrics: &'m mut dyn ParseMetrics) -> Self {
        FrameRouter {
            metrics: Some(metrics),
        }
    }

    /// Route every line of a frame, in order.
    pub fn route_frame(&mut self, frame: &str) -> Vec<Event> {
        let mut events = Vec::new();
        for line in frame.lines() {
            if line.is_empty() {
                continue;
            }
            match route(line) {
                Ok(Routed::Event(parsed)) => {
                    if let Some(metrics) = self.metrics.as_deref_mut() {
                        for (key, value) in &parsed.tags {
                            metrics.observe_tag(key, value);
                        }
                    }
                    events.push(Event::new(line.to_string(), parsed));
                }
                Ok(Routed::Ignored) => {
                    tracing::trace!(line, "dropping list marker");
                }
                Err(error) => {
                    tracing::warn!(%error, "skipping unroutable line");
                    if let Some(metrics) = self.metrics.as_deref_mut() {
                        metrics.unknown_grammar(line);
                    }
                }
            }
        }
        events
    }
}
