//! Channel locators.
//!
//! A channel token is either a plain `#name`, a three-part
//! `#name:room:room_id` for a chat room scoped to a channel, or the `*`
//! sentinel used by server-wide notices.

/// Name given to the `*` server-wide sentinel.
pub const GLOBAL_NAME: &str = "GLOBAL";

/// A parsed channel token.
///
/// `name` always carries its leading `#`, except for the [`GLOBAL_NAME`]
/// sentinel. Equality is over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelLocator {
    /// `#`-prefixed channel name, or [`GLOBAL_NAME`].
    pub name: String,
    /// Room name for three-part tokens.
    pub room: Option<String>,
    /// Room id for three-part tokens.
    pub room_id: Option<String>,
}

impl ChannelLocator {
    /// Locator for a plain channel; a missing `#` prefix is added.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ensure_hash(&name.into()),
            room: None,
            room_id: None,
        }
    }

    /// The server-wide sentinel locator.
    pub fn global() -> Self {
        Self {
            name: GLOBAL_NAME.to_string(),
            room: None,
            room_id: None,
        }
    }

    /// Whether this locator is the server-wide sentinel.
    pub fn is_global(&self) -> bool {
        self.name == GLOBAL_NAME
    }
}

impl std::fmt::Display for ChannelLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_channel(self))
    }
}

fn ensure_hash(name: &str) -> String {
    if name.starts_with('#') {
        name.to_string()
    } else {
        format!("#{name}")
    }
}

/// Parse a raw channel token.
///
/// One colon-separated part yields a plain locator, three parts yield a
/// room-scoped one. Any other count is a grammar violation: a warning is
/// emitted and the first part is kept as a best-effort name.
pub fn parse_channel(token: &str) -> ChannelLocator {
    let token = token.strip_prefix(':').unwrap_or(token);
    if token == "*" {
        return ChannelLocator::global();
    }

    let parts: Vec<&str> = token.split(':').collect();
    let (name, room, room_id) = match parts.as_slice() {
        [name] => (*name, None, None),
        [name, room, room_id] => (*name, Some(*room), Some(*room_id)),
        _ => {
            tracing::warn!(token, "channel token has neither 1 nor 3 parts");
            (parts[0], None, None)
        }
    };

    ChannelLocator {
        name: ensure_hash(name),
        room: room.map(str::to_string),
        room_id: room_id.map(str::to_string),
    }
}

/// Format a locator back to wire form. Pure inverse of [`parse_channel`]
/// for well-formed locators; the name is lower-cased.
pub fn format_channel(locator: &ChannelLocator) -> String {
    if locator.is_global() {
        return "*".to_string();
    }
    let mut out = locator.name.to_lowercase();
    if let Some(room) = &locator.room {
        out.push(':');
        out.push_str(room);
        if let Some(room_id) = &locator.room_id {
            out.push(':');
            out.push_str(room_id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let locator = parse_channel("#sodapoppin");
        assert_eq!(locator, ChannelLocator::new("#sodapoppin"));
        assert!(!locator.is_global());
    }

    #[test]
    fn test_parse_adds_hash() {
        assert_eq!(parse_channel("sodapoppin").name, "#sodapoppin");
    }

    #[test]
    fn test_parse_three_part() {
        let locator = parse_channel("#chan:lobby:12345");
        assert_eq!(locator.name, "#chan");
        assert_eq!(locator.room.as_deref(), Some("lobby"));
        assert_eq!(locator.room_id.as_deref(), Some("12345"));
    }

    #[test]
    fn test_parse_global_sentinel() {
        let locator = parse_channel("*");
        assert!(locator.is_global());
        assert_eq!(locator.name, GLOBAL_NAME);
        assert!(locator.room.is_none());
    }

    #[test]
    fn test_parse_malformed_falls_back_to_first_part() {
        let locator = parse_channel("#chan:lobby");
        assert_eq!(locator.name, "#chan");
        assert!(locator.room.is_none());
        assert!(locator.room_id.is_none());
    }

    #[test]
    fn test_format_lowercases() {
        assert_eq!(format_channel(&ChannelLocator::new("#SodaPoppin")), "#sodapoppin");
    }

    #[test]
    fn test_format_global() {
        assert_eq!(format_channel(&ChannelLocator::global()), "*");
    }

    #[test]
    fn test_round_trip() {
        for token in ["#chan", "#chan:lobby:12345", "*"] {
            assert_eq!(format_channel(&parse_channel(token)), token);
        }
    }
}
