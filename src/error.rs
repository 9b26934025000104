//! Error types.
//!
//! Malformed wire input never raises: routing reports a typed failure value
//! and the caller skips the line. The only error treated as a programming
//! mistake is constructing a typed event view from a command outside its
//! class.

use thiserror::Error;

use crate::command::CommandKind;

/// Failures produced while routing a single line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RouteError {
    /// The line matches no known command grammar and no ignore pattern.
    #[error("no grammar matches line: {line}")]
    UnknownGrammar {
        /// The offending raw line.
        line: String,
    },
}

/// Failures constructing a typed event view.
///
/// These indicate caller bugs, not wire-data problems: the router only
/// hands chat-class events to [`crate::ChatEvent`] and `USERNOTICE` events
/// to [`crate::SubEvent`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventError {
    /// The event's command is not in the chat class.
    #[error("{command} is not a chat-class command")]
    NotChatClass {
        /// The rejected command.
        command: CommandKind,
    },

    /// The event's command is not `USERNOTICE`.
    #[error("{command} is not USERNOTICE")]
    NotUserNotice {
        /// The rejected command.
        command: CommandKind,
    },
}
