//! USERNOTICE event classification.
//!
//! `USERNOTICE` multiplexes every channel event the server announces — new
//! subs, resubs, gifted subs, raids, rituals, paid upgrades — and the
//! actual kind is carried in the `msg-id` tag, not the command word. The
//! decision table here is total: an unrecognized `msg-id` classifies to
//! [`NoticeKind::OTHERUSERNOTICE`], never to a failure.

use crate::tags::{TagMap, TagValue};

/// The specific event kind behind a `USERNOTICE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types)]
pub enum NoticeKind {
    /// First-time subscription (`msg-id=sub`).
    SUB,
    /// Returning subscription (`msg-id=resub`).
    RESUB,
    /// Subscription gifted to a named recipient (`msg-id=subgift`).
    GIFTSUB,
    /// Gifted subscription from an anonymous donor (`msg-id=anonsubgift`).
    ANONGIFTSUB,
    /// Incoming raid (`msg-id=raid`).
    RAID,
    /// Channel ritual, e.g. a new chatter's first message
    /// (`msg-id=ritual`).
    RITUAL,
    /// A batch of community gift subs (`msg-id=submysterygift`).
    MYSTERYGIFT,
    /// Channel reward gift (`msg-id=rewardgift`).
    REWARDGIFT,
    /// A gifted sub continued as paid (`msg-id=giftpaidupgrade`).
    GIFTUPGRADE,
    /// A Prime sub continued as paid (`msg-id=primepaidupgrade`).
    PRIMEUPGRADE,
    /// An anonymous gifted sub continued as paid
    /// (`msg-id=anongiftpaidupgrade`).
    ANONGIFTUPGRADE,
    /// Any other `msg-id`.
    OTHERUSERNOTICE,
}

impl NoticeKind {
    /// Whether this kind involves a gifting user.
    pub fn is_gift(&self) -> bool {
        matches!(
            self,
            NoticeKind::GIFTSUB
                | NoticeKind::ANONGIFTSUB
                | NoticeKind::MYSTERYGIFT
                | NoticeKind::REWARDGIFT
        )
    }

    /// Whether this kind is one of the paid-upgrade notices.
    pub fn is_upgrade(&self) -> bool {
        matches!(
            self,
            NoticeKind::GIFTUPGRADE | NoticeKind::PRIMEUPGRADE | NoticeKind::ANONGIFTUPGRADE
        )
    }
}

/// Derive the event kind from a `USERNOTICE` tag map.
pub fn classify_usernotice(tags: &TagMap) -> NoticeKind {
    let Some(msg_id) = tags.get("msg-id").and_then(TagValue::as_text) else {
        return NoticeKind::OTHERUSERNOTICE;
    };
    match msg_id.as_ref() {
        "sub" => NoticeKind::SUB,
        "resub" => NoticeKind::RESUB,
        "subgift" => NoticeKind::GIFTSUB,
        "anonsubgift" => NoticeKind::ANONGIFTSUB,
        "raid" => NoticeKind::RAID,
        "ritual" => NoticeKind::RITUAL,
        "submysterygift" => NoticeKind::MYSTERYGIFT,
        "rewardgift" => NoticeKind::REWARDGIFT,
        id if id.ends_with("paidupgrade") => match id {
            "giftpaidupgrade" => NoticeKind::GIFTUPGRADE,
            "primepaidupgrade" => NoticeKind::PRIMEUPGRADE,
            "anongiftpaidupgrade" => NoticeKind::ANONGIFTUPGRADE,
            _ => NoticeKind::OTHERUSERNOTICE,
        },
        _ => NoticeKind::OTHERUSERNOTICE,
    }
}

/// Human-readable name of a subscription plan id.
///
/// Unknown plan ids come back quoted rather than guessed at.
pub fn plan_display_name(plan_id: &str) -> String {
    match plan_id {
        "Prime" => "Twitch Prime".to_string(),
        "1000" => "Tier 1".to_string(),
        "2000" => "Tier 2".to_string(),
        "3000" => "Tier 3".to_string(),
        other => format!("\"{}\"", other),
    }
}
