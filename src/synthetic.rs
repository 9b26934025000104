//! Synthetic chat events for locally-sent messages.
//!
//! The server does not echo messages back to their sender, so sending a
//! message has to produce an event shaped exactly like a server `PRIVMSG`
//! delivery: same tag set, same accessors, same re-parseable wire line.
//! The tag set is re-derived from the session's cached state for the
//! channel; the session layer owns that state and this module only reads
//! it.

use crate::badge::{self, BadgeEntry};
use crate::chan::{self, ChannelLocator};
use crate::command::CommandKind;
use crate::ctcp;
use crate::emote;
use crate::event::{ChatEvent, Event};
use crate::msgid;
use crate::router::ParsedMessage;
use crate::tags::{self, TagMap, TagValue};
use crate::user::UserRef;

/// Marker tag carried by locally synthesized events.
pub const LOCAL_ECHO_TAG: &str = "local-echo";

/// Read-only snapshot of the session state a synthetic event is derived
/// from.
#[derive(Debug, Clone, Default)]
pub struct SelfState {
    /// Own login name.
    pub login: String,
    /// Own display name.
    pub display_name: String,
    /// Own user id.
    pub user_id: String,
    /// Chat color, when one is set.
    pub color: Option<String>,
    /// Badges granted in the channel, wire order.
    pub badges: Vec<BadgeEntry>,
    /// `badge-info` entries for the channel.
    pub badge_info: Vec<BadgeEntry>,
    /// Whether we moderate the channel.
    pub is_moderator: bool,
    /// Whether we are subscribed to the channel.
    pub is_subscriber: bool,
    /// Whether we are a VIP in the channel.
    pub is_vip: bool,
    /// Whether we own the channel.
    pub is_broadcaster: bool,
    /// Room id of the channel, when known.
    pub room_id: Option<String>,
    /// Known emote table as `(id, name)` pairs.
    pub emotes: Vec<(String, String)>,
}

/// Build a chat event for an outgoing message, shaped like a server
/// delivery.
///
/// Every [`ChatEvent`] accessor answers identically to a real delivery:
/// the badge list is layered with the session's caster/mod/sub/vip flags,
/// emote spans are scanned from the text, and the raw line is the fully
/// re-serialized wire form (so routing it again reproduces the event).
pub fn build_chat_event(
    channel: &ChannelLocator,
    message: &str,
    state: &SelfState,
) -> ChatEvent {
    let (text, action) = match ctcp::unwrap_action(message) {
        Some(inner) => (inner, true),
        None => (message, false),
    };

    let mut badges = state.badges.clone();
    if state.is_broadcaster && !badge::has_badge(&badges, "broadcaster") {
        badges.insert(0, BadgeEntry::new("broadcaster", "1"));
    }
    if state.is_moderator && !state.is_broadcaster && !badge::has_badge(&badges, "moderator") {
        badges.push(BadgeEntry::new("moderator", "1"));
    }
    if state.is_vip && !badge::has_badge(&badges, "vip") {
        badges.push(BadgeEntry::new("vip", "1"));
    }
    if state.is_subscriber && !badge::has_badge(&badges, "subscriber") {
        badges.push(BadgeEntry::new("subscriber", "1"));
    }

    let mut tag_map = TagMap::new();
    tag_map.insert("badges".to_string(), TagValue::Badges(badges));
    if !state.badge_info.is_empty() {
        tag_map.insert(
            "badge-info".to_string(),
            TagValue::Badges(state.badge_info.clone()),
        );
    }
    tag_map.insert(
        "color".to_string(),
        match &state.color {
            Some(color) => TagValue::Str(color.clone()),
            None => TagValue::Nil,
        },
    );
    tag_map.insert(
        "display-name".to_string(),
        TagValue::Str(state.display_name.clone()),
    );
    tag_map.insert(
        "emotes".to_string(),
        TagValue::Emotes(emote::scan_emotes(text, &state.emotes)),
    );
    tag_map.insert("id".to_string(), TagValue::Str(msgid::generate_msgid()));
    tag_map.insert(
        "mod".to_string(),
        TagValue::Int(i64::from(state.is_moderator || state.is_broadcaster)),
    );
    if let Some(room_id) = &state.room_id {
        tag_map.insert("room-id".to_string(), TagValue::Str(room_id.clone()));
    }
    tag_map.insert(
        "subscriber".to_string(),
        TagValue::Int(i64::from(state.is_subscriber)),
    );
    tag_map.insert(
        "tmi-sent-ts".to_string(),
        TagValue::Int(chrono::Utc::now().timestamp_millis()),
    );
    tag_map.insert("turbo".to_string(), TagValue::Int(0));
    tag_map.insert("user-id".to_string(), TagValue::Str(state.user_id.clone()));
    tag_map.insert("user-type".to_string(), TagValue::Nil);
    if state.is_vip {
        tag_map.insert("vip".to_string(), TagValue::Int(1));
    }
    tag_map.insert(LOCAL_ECHO_TAG.to_string(), TagValue::Int(1));
    tags::reconcile_badges(&mut tag_map);

    let login = state.display_name.to_lowercase();
    let wire_text = if action {
        ctcp::wrap_action(text)
    } else {
        text.to_string()
    };
    let raw_line = format!(
        "@{} :{}!{}@{}.tmi.twitch.tv PRIVMSG {} :{}",
        tags::encode_tags(&tag_map),
        login,
        login,
        login,
        chan::format_channel(channel),
        wire_text,
    );

    let parsed = ParsedMessage {
        command: CommandKind::PRIVMSG,
        tags: tag_map,
        channel: Some(channel.clone()),
        user: Some(UserRef::new(login)),
        message: Some(text.to_string()),
        action,
        fields: Default::default(),
    };

    ChatEvent::new_unchecked(Event::new(raw_line, parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SelfState {
        SelfState {
            login: "kaedenn".to_string(),
            display_name: "Kaedenn".to_string(),
            user_id: "128831052".to_string(),
            color: Some("#1E90FF".to_string()),
            badges: vec![BadgeEntry::new("subscriber", "12")],
            badge_info: vec![BadgeEntry::new("subscriber", "14")],
            is_moderator: true,
            is_subscriber: true,
            is_vip: false,
            is_broadcaster: false,
            room_id: Some("578762718".to_string()),
            emotes: vec![("25".to_string(), "Kappa".to_string())],
        }
    }

    #[test]
    fn test_event_shape() {
        let channel = ChannelLocator::new("#chan");
        let ev = build_chat_event(&channel, "hello Kappa", &state());

        assert_eq!(ev.event().command(), CommandKind::PRIVMSG);
        assert_eq!(ev.channel(), Some(&channel));
        assert_eq!(ev.message(), Some("hello Kappa"));
        assert_eq!(ev.user().map(|u| u.login()), Some("kaedenn"));
        assert!(ev.is_moderator());
        assert!(ev.is_subscriber());
        assert!(!ev.is_caster());
        assert_eq!(ev.subscriber_months(), 14);
        assert!(ev.id().is_some());
        assert!(ev.event().tag_truthy(LOCAL_ECHO_TAG));
    }

    #[test]
    fn test_emotes_scanned_from_text() {
        let ev = build_chat_event(&ChannelLocator::new("#chan"), "Kappa hi", &state());
        let spans = ev.event().tag("emotes").and_then(TagValue::emotes).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].emote_id, "25");
        assert_eq!((spans[0].start, spans[0].end), (0, 4));
    }

    #[test]
    fn test_me_prefix_becomes_action() {
        let ev = build_chat_event(&ChannelLocator::new("#chan"), "/me waves", &state());
        assert!(ev.is_action());
        assert_eq!(ev.message(), Some("waves"));
        assert!(ev.raw_line().contains("\u{1}ACTION waves\u{1}"));
    }

    #[test]
    fn test_moderator_badge_layered_in() {
        let mut s = state();
        s.badges.clear();
        let ev = build_chat_event(&ChannelLocator::new("#chan"), "hi", &s);
        assert!(ev.is_moderator());
        assert!(ev.badges().iter().any(|b| b.name == "moderator"));
    }

    #[test]
    fn test_broadcaster_badge_is_primary() {
        let mut s = state();
        s.is_broadcaster = true;
        let ev = build_chat_event(&ChannelLocator::new("#kaedenn"), "hi", &s);
        assert_eq!(ev.primary_badge().map(|b| b.name.as_str()), Some("broadcaster"));
        assert!(ev.is_caster());
        assert!(ev.is_moderator());
    }

    #[test]
    fn test_raw_line_shape() {
        let ev = build_chat_event(&ChannelLocator::new("#Chan"), "hello", &state());
        assert!(ev.raw_line().starts_with('@'));
        assert!(ev
            .raw_line()
            .contains(":kaedenn!kaedenn@kaedenn.tmi.twitch.tv PRIVMSG #chan :hello"));
    }
}
