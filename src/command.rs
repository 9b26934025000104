//! Protocol command kinds.
//!
//! The closed enumeration of every command the router recognizes, plus the
//! locally-defined pseudo-commands used by session layers for lifecycle and
//! catch-all signaling. Routing is an exhaustive match over this set, so a
//! new command is a data change here and one arm in the router.

/// A recognized protocol command or local pseudo-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types)]
pub enum CommandKind {
    /// Server keepalive: `PING :<server>`.
    PING,
    /// Capability acknowledgement: `CAP * ACK`.
    ACK,
    /// Welcome/MOTD text numerics (001-009, 372).
    TOPIC,
    /// Name-list reply numeric 353.
    NAMES,
    /// A user joined a channel.
    JOIN,
    /// A user left a channel.
    PART,
    /// Channel operator grant/revoke.
    MODE,
    /// A chat message delivered to a channel.
    PRIVMSG,
    /// A direct message.
    WHISPER,
    /// Own per-channel state snapshot.
    USERSTATE,
    /// Channel settings snapshot.
    ROOMSTATE,
    /// Multiplexed channel event (subs, raids, rituals...).
    USERNOTICE,
    /// Own connection-wide state snapshot.
    GLOBALUSERSTATE,
    /// Chat cleared, or a user timed out/banned.
    CLEARCHAT,
    /// A single message deleted.
    CLEARMSG,
    /// Host mode change.
    HOSTTARGET,
    /// Server notice to a channel (or `*`).
    NOTICE,
    /// Numeric 421 reply to an unknown command.
    ERR_UNKNOWNCOMMAND,

    // Pseudo-commands owned by the session layer, never produced by the
    // router. They share the enumeration so consumers can key every event
    // they see off one type.
    /// Connection opened.
    OPEN,
    /// Connection closed.
    CLOSE,
    /// Catch-all "some message arrived" signal.
    MESSAGE,
    /// Transport-level error signal.
    ERROR,
    /// Catch-all for recognized-but-uninteresting lines.
    OTHER,
}

impl CommandKind {
    /// Wire or conventional name of the command.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::PING => "PING",
            CommandKind::ACK => "ACK",
            CommandKind::TOPIC => "TOPIC",
            CommandKind::NAMES => "NAMES",
            CommandKind::JOIN => "JOIN",
            CommandKind::PART => "PART",
            CommandKind::MODE => "MODE",
            CommandKind::PRIVMSG => "PRIVMSG",
            CommandKind::WHISPER => "WHISPER",
            CommandKind::USERSTATE => "USERSTATE",
            CommandKind::ROOMSTATE => "ROOMSTATE",
            CommandKind::USERNOTICE => "USERNOTICE",
            CommandKind::GLOBALUSERSTATE => "GLOBALUSERSTATE",
            CommandKind::CLEARCHAT => "CLEARCHAT",
            CommandKind::CLEARMSG => "CLEARMSG",
            CommandKind::HOSTTARGET => "HOSTTARGET",
            CommandKind::NOTICE => "NOTICE",
            CommandKind::ERR_UNKNOWNCOMMAND => "421",
            CommandKind::OPEN => "OPEN",
            CommandKind::CLOSE => "CLOSE",
            CommandKind::MESSAGE => "MESSAGE",
            CommandKind::ERROR => "ERROR",
            CommandKind::OTHER => "OTHER",
        }
    }

    /// Whether this command's tag map describes a chatting user, i.e. the
    /// badge/flag reconciliation and [`crate::ChatEvent`] accessors apply.
    pub fn is_chat_class(&self) -> bool {
        matches!(
            self,
            CommandKind::PRIVMSG
                | CommandKind::WHISPER
                | CommandKind::USERSTATE
                | CommandKind::GLOBALUSERSTATE
                | CommandKind::USERNOTICE
        )
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_class_membership() {
        assert!(CommandKind::PRIVMSG.is_chat_class());
        assert!(CommandKind::USERNOTICE.is_chat_class());
        assert!(!CommandKind::ROOMSTATE.is_chat_class());
        assert!(!CommandKind::PING.is_chat_class());
    }

    #[test]
    fn test_display() {
        assert_eq!(CommandKind::PRIVMSG.to_string(), "PRIVMSG");
        assert_eq!(CommandKind::ERR_UNKNOWNCOMMAND.to_string(), "421");
    }
}
