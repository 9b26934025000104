//! User references.
//!
//! Senders appear on the wire as `nick!user@host`. On this network the
//! three sub-parts are always the same login, so only the login survives
//! parsing.

/// A bare login name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRef(String);

impl UserRef {
    /// Wrap an already-reduced login name.
    pub fn new(login: impl Into<String>) -> Self {
        Self(login.into())
    }

    /// The login name.
    pub fn login(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the login from a `nick!user@host`-style token.
///
/// A leading `:` is stripped; everything from the first `!` on is
/// discarded. A token without `!` is taken as a bare login.
pub fn parse_user(token: &str) -> UserRef {
    let token = token.strip_prefix(':').unwrap_or(token);
    let login = match token.split_once('!') {
        Some((login, _)) => login,
        None => token,
    };
    UserRef::new(login)
}
