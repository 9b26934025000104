//! # slirc-tmi
//!
//! A Rust library for parsing the Twitch Messaging Interface (TMI) chat
//! protocol and classifying the events it carries.
//!
//! ## Features
//!
//! - Line routing over the full TMI command set (PRIVMSG, WHISPER,
//!   USERNOTICE, ROOMSTATE, CLEARCHAT, ...)
//! - Tag block decoding with the TMI escape table and the structured
//!   sub-grammars for badges, emote ranges and emote sets
//! - `USERNOTICE` classification into its real event kinds (subs, resubs,
//!   gifted subs, raids, rituals, paid upgrades)
//! - Immutable typed events with derived user-status accessors
//! - Synthetic chat events for locally-sent messages, indistinguishable
//!   from server deliveries
//!
//! Parsing is a pure, synchronous transform: no I/O, no retries, no state.
//! Transport, capability negotiation and asset lookups belong to the layers
//! around this crate.

#![deny(clippy::all)]
// TODO: Enable once documentation coverage is complete
// #![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Routing incoming lines
//!
//! ```rust
//! use slirc_tmi::{route, ChatEvent, CommandKind, Event, Routed};
//!
//! let raw = "@badges=moderator/1;color=#1E90FF :alice!alice@alice.tmi.twitch.tv PRIVMSG #chan :hello";
//! let Ok(Routed::Event(parsed)) = route(raw) else { panic!("unroutable") };
//! assert_eq!(parsed.command, CommandKind::PRIVMSG);
//!
//! let chat = ChatEvent::try_from(Event::new(raw.to_string(), parsed)).unwrap();
//! assert!(chat.is_moderator());
//! assert_eq!(chat.message(), Some("hello"));
//! ```
//!
//! ### Classifying a USERNOTICE
//!
//! ```rust
//! use slirc_tmi::{route, Event, NoticeKind, Routed, SubEvent};
//!
//! let raw = "@msg-id=resub;login=alice;msg-param-cumulative-months=12 :tmi.twitch.tv USERNOTICE #chan :hi";
//! let Ok(Routed::Event(parsed)) = route(raw) else { panic!("unroutable") };
//! let sub = SubEvent::try_from(Event::new(raw.to_string(), parsed)).unwrap();
//! assert_eq!(sub.kind(), NoticeKind::RESUB);
//! assert_eq!(sub.cumulative_months(), 12);
//! ```

pub mod badge;
pub mod chan;
pub mod classify;
pub mod command;
pub mod ctcp;
pub mod emote;
pub mod error;
pub mod event;
pub mod metrics;
pub mod msgid;
pub mod router;
pub mod synthetic;
pub mod tags;
pub mod user;

pub use self::badge::{format_badges, parse_badges, BadgeEntry};
pub use self::chan::{format_channel, parse_channel, ChannelLocator, GLOBAL_NAME};
pub use self::classify::{classify_usernotice, plan_display_name, NoticeKind};
pub use self::command::CommandKind;
pub use self::emote::{format_emote_tag, parse_emote_tag, scan_emotes, EmoteSpan};
pub use self::error::{EventError, RouteError};
pub use self::event::{ChatEvent, Event, SubEvent};
pub use self::metrics::{NoMetrics, ParseMetrics};
pub use self::msgid::generate_msgid;
pub use self::router::{route, FrameRouter, ParsedMessage, Routed};
pub use self::synthetic::{build_chat_event, SelfState, LOCAL_ECHO_TAG};
pub use self::tags::{decode_tags, encode_tags, TagMap, TagValue};
pub use self::user::{parse_user, UserRef};
