//! Property-based round-trip tests.
//!
//! These verify the stability properties the wire formats promise: decoding
//! an encoded form never loses information that a second round would
//! change.

use proptest::collection::vec;
use proptest::prelude::*;

use slirc_tmi::tags::escape::escape_tag_value;
use slirc_tmi::{
    decode_tags, encode_tags, format_channel, format_emote_tag, parse_channel, parse_emote_tag,
    scan_emotes, ChannelLocator, EmoteSpan,
};

proptest! {
    /// decode(encode(decode(t))) == decode(t) for any decodable tag block.
    #[test]
    fn prop_tag_decode_is_stable(
        key in "[a-z][a-z0-9-]{0,15}",
        value in "[ -~]{0,30}",
    ) {
        let wire = format!("{}={}", key, escape_tag_value(&value));
        let once = decode_tags(&wire);
        let twice = decode_tags(&encode_tags(&once));
        prop_assert_eq!(once, twice);
    }

    /// Multi-pair blocks stay stable too.
    #[test]
    fn prop_tag_block_decode_is_stable(
        values in vec(("[a-z][a-z0-9-]{0,10}", "[ -~]{0,20}"), 0..6),
    ) {
        let wire = values
            .iter()
            .map(|(key, value)| format!("{}={}", key, escape_tag_value(value)))
            .collect::<Vec<_>>()
            .join(";");
        let once = decode_tags(&wire);
        let twice = decode_tags(&encode_tags(&once));
        prop_assert_eq!(once, twice);
    }

    /// parse(format(parse(e))) == parse(e) for formatter output.
    #[test]
    fn prop_emote_tag_round_trip(
        raw in vec(("[a-zA-Z0-9_]{1,8}", 0usize..500, 0usize..20), 0..8),
    ) {
        let spans: Vec<EmoteSpan> = raw
            .into_iter()
            .map(|(id, start, len)| EmoteSpan::new(id, start, start + len))
            .collect();
        let wire = format_emote_tag(&spans);
        let parsed = parse_emote_tag(&wire);
        prop_assert_eq!(parse_emote_tag(&format_emote_tag(&parsed)), parsed);
    }

    /// parse(format(c)) == c for well-formed locators.
    #[test]
    fn prop_channel_round_trip(
        name in "[a-z0-9_]{1,15}",
        scope in prop::option::of(("[a-z0-9_]{1,10}", "[0-9]{1,8}")),
    ) {
        let (room, room_id) = match scope {
            Some((room, room_id)) => (Some(room), Some(room_id)),
            None => (None, None),
        };
        let locator = ChannelLocator {
            name: format!("#{name}"),
            room,
            room_id,
        };
        prop_assert_eq!(parse_channel(&format_channel(&locator)), locator);
    }

    /// Every scanned span covers exactly the emote name it claims.
    #[test]
    fn prop_scan_offsets_match_names(
        words in vec(
            prop_oneof![
                Just("Kappa".to_string()),
                Just("PogChamp".to_string()),
                Just("hello".to_string()),
                Just("KappaHD".to_string()),
                Just("xKappa".to_string()),
            ],
            0..10,
        ),
    ) {
        let message = words.join(" ");
        let table = vec![
            ("25".to_string(), "Kappa".to_string()),
            ("88".to_string(), "PogChamp".to_string()),
        ];
        for span in scan_emotes(&message, &table) {
            let name = &message[span.start..=span.end];
            let expected = if span.emote_id == "25" { "Kappa" } else { "PogChamp" };
            prop_assert_eq!(name, expected);
        }
    }
}
