//! CTCP `ACTION` handling for `/me` messages.
//!
//! An emote-style message is delivered wrapped in `\x01ACTION ...\x01`; a
//! locally typed one starts with `/me `. Both unwrap to the same inner text
//! with the action flag set.

const CTCP_DELIM: char = '\u{1}';

/// Unwrap an action message, returning the inner text.
///
/// Accepts both the wire form (`\x01ACTION waves\x01`) and the typed form
/// (`/me waves`). Returns `None` for plain messages.
pub fn unwrap_action(text: &str) -> Option<&str> {
    if let Some(inner) = text
        .strip_prefix(CTCP_DELIM)
        .and_then(|t| t.strip_suffix(CTCP_DELIM))
        .and_then(|t| t.strip_prefix("ACTION "))
    {
        return Some(inner);
    }
    text.strip_prefix("/me ")
}

/// Wrap inner text in the wire-form CTCP `ACTION` delimiters.
pub fn wrap_action(text: &str) -> String {
    format!("{CTCP_DELIM}ACTION {text}{CTCP_DELIM}")
}
