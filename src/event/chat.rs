//! Chat-message event view.

use std::borrow::Cow;

use super::Event;
use crate::badge::{self, BadgeEntry};
use crate::chan::ChannelLocator;
use crate::error::EventError;
use crate::tags::TagValue;
use crate::user::UserRef;

/// A chat-class event with user-status accessors.
///
/// Status flags are derived from both legacy signals — the explicit
/// boolean tags and badge membership — so a server that sends only one of
/// the two still yields the right answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEvent {
    event: Event,
}

impl TryFrom<Event> for ChatEvent {
    type Error = EventError;

    fn try_from(event: Event) -> Result<Self, EventError> {
        if event.command().is_chat_class() {
            Ok(Self { event })
        } else {
            Err(EventError::NotChatClass {
                command: event.command(),
            })
        }
    }
}

impl ChatEvent {
    /// View constructor for events the router already vetted.
    pub(crate) fn new_unchecked(event: Event) -> Self {
        Self { event }
    }

    /// The underlying event.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Consume the view, returning the underlying event.
    pub fn into_event(self) -> Event {
        self.event
    }

    /// Server-assigned (or locally generated) message id.
    pub fn id(&self) -> Option<Cow<'_, str>> {
        self.event.tag_text("id")
    }

    /// Channel the message was delivered to.
    pub fn channel(&self) -> Option<&ChannelLocator> {
        self.event.channel()
    }

    /// Sending user.
    pub fn user(&self) -> Option<&UserRef> {
        self.event.user()
    }

    /// Message text, already unwrapped from any `ACTION` framing.
    pub fn message(&self) -> Option<&str> {
        self.event.message()
    }

    /// Whether the message was a `/me` action.
    pub fn is_action(&self) -> bool {
        self.event.parsed().action
    }

    /// Badge list in wire order; empty when the tag is absent.
    pub fn badges(&self) -> &[BadgeEntry] {
        self.event
            .tag("badges")
            .and_then(TagValue::badges)
            .unwrap_or(&[])
    }

    /// First badge in wire order, the one clients display as primary.
    pub fn primary_badge(&self) -> Option<&BadgeEntry> {
        self.badges().first()
    }

    /// Whether the sender is the channel owner.
    pub fn is_caster(&self) -> bool {
        badge::has_badge(self.badges(), "broadcaster")
    }

    /// Whether the sender moderates the channel. The owner counts.
    pub fn is_moderator(&self) -> bool {
        self.event.tag_truthy("mod")
            || badge::has_badge(self.badges(), "moderator")
            || self.is_caster()
    }

    /// Whether the sender is subscribed to the channel.
    pub fn is_subscriber(&self) -> bool {
        self.event.tag_truthy("subscriber") || badge::has_badge(self.badges(), "subscriber")
    }

    /// Whether the sender is a channel VIP.
    pub fn is_vip(&self) -> bool {
        badge::has_badge(self.badges(), "vip")
    }

    /// Months subscribed, from the `badge-info` subscriber entry. Zero
    /// when absent.
    pub fn subscriber_months(&self) -> u32 {
        self.event
            .tag("badge-info")
            .and_then(TagValue::badges)
            .and_then(|info| badge::badge_revision(info, "subscriber"))
            .and_then(|revision| revision.parse().ok())
            .unwrap_or(0)
    }

    /// Sender's display name.
    pub fn display_name(&self) -> Option<Cow<'_, str>> {
        self.event.tag_text("display-name")
    }

    /// Sender's chat color.
    pub fn color(&self) -> Option<Cow<'_, str>> {
        self.event.tag_text("color")
    }

    /// Bits attached to the message, when it was a cheer.
    pub fn bits(&self) -> Option<i64> {
        self.event.tag("bits").and_then(TagValue::as_int)
    }

    /// Raw wire line.
    pub fn raw_line(&self) -> &str {
        self.event.raw_line()
    }
}
