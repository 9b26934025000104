//! Subscription-notice event view.

use std::borrow::Cow;

use super::Event;
use crate::chan::ChannelLocator;
use crate::classify::{self, NoticeKind};
use crate::command::CommandKind;
use crate::error::EventError;
use crate::tags::TagValue;

/// A classified `USERNOTICE`.
///
/// The months counters come from two different tags that the wire has
/// historically disagreed about: `msg-param-sub-months`
/// ([`months`](Self::months)) and `msg-param-cumulative-months`
/// ([`cumulative_months`](Self::cumulative_months)). Both are exposed;
/// neither is privileged.
#[derive(Debug, Clone, PartialEq)]
pub struct SubEvent {
    event: Event,
    kind: NoticeKind,
}

impl TryFrom<Event> for SubEvent {
    type Error = EventError;

    fn try_from(event: Event) -> Result<Self, EventError> {
        if event.command() != CommandKind::USERNOTICE {
            return Err(EventError::NotUserNotice {
                command: event.command(),
            });
        }
        let kind = classify::classify_usernotice(event.tags());
        Ok(Self { event, kind })
    }
}

impl SubEvent {
    /// The underlying event.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// The classified notice kind.
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Channel the notice was announced in.
    pub fn channel(&self) -> Option<&ChannelLocator> {
        self.event.channel()
    }

    /// The user's attached message, when they wrote one.
    pub fn message(&self) -> Option<&str> {
        self.event.message()
    }

    /// The user the notice is about: the recipient for gifted subs, the
    /// acting user (`login` tag) otherwise.
    pub fn sub_user(&self) -> Option<Cow<'_, str>> {
        match self.kind {
            NoticeKind::GIFTSUB | NoticeKind::ANONGIFTSUB => {
                self.event.tag_text("msg-param-recipient-user-name")
            }
            _ => self.event.tag_text("login"),
        }
    }

    /// The gifting user, for non-anonymous gift kinds.
    pub fn gifted_by(&self) -> Option<Cow<'_, str>> {
        if self.kind.is_gift() && self.kind != NoticeKind::ANONGIFTSUB {
            self.event.tag_text("login")
        } else {
            None
        }
    }

    /// Whether the donor chose to stay anonymous.
    pub fn is_anonymous(&self) -> bool {
        matches!(
            self.kind,
            NoticeKind::ANONGIFTSUB | NoticeKind::ANONGIFTUPGRADE
        )
    }

    /// Months from `msg-param-sub-months`. Zero when absent.
    pub fn months(&self) -> u32 {
        self.event.tag_count("msg-param-sub-months")
    }

    /// Months from `msg-param-cumulative-months`. Zero when absent.
    pub fn cumulative_months(&self) -> u32 {
        self.event.tag_count("msg-param-cumulative-months")
    }

    /// Current streak length, when the user shares it. Zero when absent.
    pub fn streak_months(&self) -> u32 {
        self.event.tag_count("msg-param-streak-months")
    }

    /// Whether the user opted into sharing their streak.
    pub fn share_streak(&self) -> bool {
        self.event.tag_truthy("msg-param-should-share-streak")
    }

    /// Subscription plan id (`Prime`, `1000`, `2000`, `3000`).
    pub fn plan_id(&self) -> Option<Cow<'_, str>> {
        self.event.tag_text("msg-param-sub-plan")
    }

    /// Plan name as sent by the server.
    pub fn plan_name(&self) -> Option<Cow<'_, str>> {
        self.event.tag_text("msg-param-sub-plan-name")
    }

    /// Human-readable plan name derived from the plan id.
    pub fn plan_display_name(&self) -> Option<String> {
        self.plan_id()
            .map(|id| classify::plan_display_name(id.as_ref()))
    }

    /// Gift recipient's user id.
    pub fn recipient_id(&self) -> Option<Cow<'_, str>> {
        self.event.tag_text("msg-param-recipient-id")
    }

    /// Gift recipient's display name.
    pub fn recipient_display_name(&self) -> Option<Cow<'_, str>> {
        self.event.tag_text("msg-param-recipient-display-name")
    }

    /// Raider head count, for raid notices.
    pub fn viewer_count(&self) -> Option<i64> {
        self.event
            .tag("msg-param-viewerCount")
            .and_then(TagValue::as_int)
    }

    /// Number of subs in a community gift batch.
    pub fn mass_gift_count(&self) -> Option<i64> {
        self.event
            .tag("msg-param-mass-gift-count")
            .and_then(TagValue::as_int)
    }

    /// Ritual name, for ritual notices.
    pub fn ritual_name(&self) -> Option<Cow<'_, str>> {
        self.event.tag_text("msg-param-ritual-name")
    }

    /// Whether this is the `new_chatter` ritual.
    pub fn is_new_chatter(&self) -> bool {
        self.kind == NoticeKind::RITUAL && self.ritual_name().as_deref() == Some("new_chatter")
    }

    /// Raw wire line.
    pub fn raw_line(&self) -> &str {
        self.event.raw_line()
    }
}
