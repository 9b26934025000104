//! Round-trip tests for synthetic chat events.
//!
//! A locally built event must be indistinguishable from a server delivery:
//! routing its re-serialized wire line has to reproduce the same channel,
//! message and badge-derived flags.

use slirc_tmi::{
    build_chat_event, BadgeEntry, ChannelLocator, ChatEvent, Event, Routed, SelfState,
    LOCAL_ECHO_TAG,
};

fn default_state() -> SelfState {
    SelfState {
        login: "kaedenn".to_string(),
        display_name: "Kaedenn".to_string(),
        user_id: "128831052".to_string(),
        color: Some("#1E90FF".to_string()),
        badges: vec![BadgeEntry::new("subscriber", "12")],
        badge_info: vec![BadgeEntry::new("subscriber", "14")],
        is_moderator: false,
        is_subscriber: true,
        is_vip: false,
        is_broadcaster: false,
        room_id: Some("578762718".to_string()),
        emotes: vec![
            ("25".to_string(), "Kappa".to_string()),
            ("88".to_string(), "PogChamp".to_string()),
        ],
    }
}

fn reroute(built: &ChatEvent) -> ChatEvent {
    let routed = slirc_tmi::route(built.raw_line()).expect("synthetic line must route");
    let Routed::Event(parsed) = routed else {
        panic!("synthetic line routed to ignore");
    };
    ChatEvent::try_from(Event::new(built.raw_line().to_string(), parsed))
        .expect("synthetic line must be chat-class")
}

#[test]
fn test_round_trip_preserves_channel_and_message() {
    let channel = ChannelLocator::new("#chan");
    let built = build_chat_event(&channel, "hello world", &default_state());
    let rerouted = reroute(&built);

    assert_eq!(rerouted.channel(), Some(&channel));
    assert_eq!(rerouted.message(), Some("hello world"));
    assert_eq!(rerouted.user().map(|u| u.login()), Some("kaedenn"));
}

#[test]
fn test_round_trip_preserves_flags() {
    let mut state = default_state();
    state.is_moderator = true;
    let built = build_chat_event(&ChannelLocator::new("#chan"), "hi", &state);
    let rerouted = reroute(&built);

    assert_eq!(rerouted.is_moderator(), built.is_moderator());
    assert_eq!(rerouted.is_subscriber(), built.is_subscriber());
    assert_eq!(rerouted.is_caster(), built.is_caster());
    assert_eq!(rerouted.is_vip(), built.is_vip());
    assert!(rerouted.is_moderator());
    assert!(rerouted.is_subscriber());
}

#[test]
fn test_round_trip_broadcaster() {
    let mut state = default_state();
    state.is_broadcaster = true;
    let built = build_chat_event(&ChannelLocator::new("#kaedenn"), "my own channel", &state);
    let rerouted = reroute(&built);

    assert!(rerouted.is_caster());
    assert!(rerouted.is_moderator());
    assert_eq!(
        rerouted.primary_badge().map(|b| b.name.as_str()),
        Some("broadcaster")
    );
}

#[test]
fn test_round_trip_action() {
    let built = build_chat_event(&ChannelLocator::new("#chan"), "/me waves", &default_state());
    assert!(built.is_action());

    let rerouted = reroute(&built);
    assert!(rerouted.is_action());
    assert_eq!(rerouted.message(), Some("waves"));
}

#[test]
fn test_round_trip_emote_spans() {
    let built = build_chat_event(
        &ChannelLocator::new("#chan"),
        "Kappa and PogChamp",
        &default_state(),
    );
    let rerouted = reroute(&built);

    let spans = rerouted
        .event()
        .tag("emotes")
        .and_then(slirc_tmi::TagValue::emotes)
        .expect("emotes tag");
    let message = rerouted.message().expect("message");
    for span in spans {
        let name = &message[span.start..=span.end];
        assert!(name == "Kappa" || name == "PogChamp", "bad span {:?}", span);
    }
    assert_eq!(spans.len(), 2);
}

#[test]
fn test_round_trip_subscriber_months() {
    let built = build_chat_event(&ChannelLocator::new("#chan"), "hi", &default_state());
    let rerouted = reroute(&built);
    assert_eq!(rerouted.subscriber_months(), 14);
}

#[test]
fn test_synthetic_event_is_marked() {
    let built = build_chat_event(&ChannelLocator::new("#chan"), "hi", &default_state());
    assert!(built.event().tag_truthy(LOCAL_ECHO_TAG));

    let rerouted = reroute(&built);
    assert!(rerouted.event().tag_truthy(LOCAL_ECHO_TAG));
}

#[test]
fn test_display_name_and_id_survive() {
    let built = build_chat_event(&ChannelLocator::new("#chan"), "hi", &default_state());
    let rerouted = reroute(&built);

    assert_eq!(rerouted.display_name().as_deref(), Some("Kaedenn"));
    assert_eq!(rerouted.color().as_deref(), Some("#1E90FF"));
    assert_eq!(rerouted.id(), built.id());
}
