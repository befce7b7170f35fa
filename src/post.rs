//! Raw post snapshot type.
//!
//! [`RawPost`] is the immutable, structural view of one platform message as
//! this crate reads it. The live client library owns the real message
//! objects; a decoding layer (the client itself, or the offline
//! [`SnapshotFetcher`](crate::snapshot::SnapshotFetcher)) maps them into
//! this type with an explicit `Option` for every attribute the platform may
//! or may not supply. Nothing downstream ever fails on an absent attribute.
//!
//! # Example
//!
//! ```
//! use linkpack::post::{MediaKind, RawPost, Reaction};
//!
//! let post = RawPost::new(42)
//!     .with_text("hello")
//!     .with_media(MediaKind::Photo)
//!     .with_reaction(Reaction::new("👍", 3));
//!
//! assert!(post.media.is_some());
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Kind tag of a post's attached media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum MediaKind {
    /// Photo attachment
    Photo,
    /// Video attachment
    Video,
    /// Generic file/document attachment
    Document,
    /// Music/audio file
    Audio,
    /// Voice note
    Voice,
    /// Sticker
    Sticker,
    /// GIF/animation
    Animation,
    /// Poll
    Poll,
    /// Shared contact
    Contact,
    /// Geo location
    Location,
    /// Link preview
    WebPage,
}

impl MediaKind {
    /// Lowercase tag used in the `media_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
            MediaKind::Audio => "audio",
            MediaKind::Voice => "voice",
            MediaKind::Sticker => "sticker",
            MediaKind::Animation => "animation",
            MediaKind::Poll => "poll",
            MediaKind::Contact => "contact",
            MediaKind::Location => "location",
            MediaKind::WebPage => "web_page",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a rich-text annotation on the post body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum EntityKind {
    /// Bold span
    Bold,
    /// Italic span
    Italic,
    /// Underlined span
    Underline,
    /// Struck-through span
    Strikethrough,
    /// Inline monospace span
    Code,
    /// Preformatted block
    Pre,
    /// Plain URL
    Url,
    /// Hyperlink with custom text
    TextUrl,
    /// `@username` mention
    Mention,
    /// Mention resolved to a user id
    MentionName,
    /// `#hashtag`
    Hashtag,
    /// `$CASHTAG`
    Cashtag,
    /// `/command`
    BotCommand,
    /// E-mail address
    Email,
    /// Phone number
    Phone,
    /// Spoiler span
    Spoiler,
    /// Custom emoji
    CustomEmoji,
    /// Block quote
    Blockquote,
}

impl EntityKind {
    /// Lowercase name used in the `entities` column.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Bold => "bold",
            EntityKind::Italic => "italic",
            EntityKind::Underline => "underline",
            EntityKind::Strikethrough => "strikethrough",
            EntityKind::Code => "code",
            EntityKind::Pre => "pre",
            EntityKind::Url => "url",
            EntityKind::TextUrl => "text_url",
            EntityKind::Mention => "mention",
            EntityKind::MentionName => "mention_name",
            EntityKind::Hashtag => "hashtag",
            EntityKind::Cashtag => "cashtag",
            EntityKind::BotCommand => "bot_command",
            EntityKind::Email => "email",
            EntityKind::Phone => "phone",
            EntityKind::Spoiler => "spoiler",
            EntityKind::CustomEmoji => "custom_emoji",
            EntityKind::Blockquote => "blockquote",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One aggregate reaction entry on a post.
///
/// The emoticon can be absent (custom/paid reactions don't carry one);
/// such entries are skipped when rendering the `reactions` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// The reaction emoji, if the platform supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub emoticon: Option<String>,
    /// How many accounts reacted with it.
    pub count: u64,
}

impl Reaction {
    /// Creates a reaction with an emoticon.
    pub fn new(emoticon: impl Into<String>, count: u64) -> Self {
        Self {
            emoticon: Some(emoticon.into()),
            count,
        }
    }

    /// Creates a reaction entry without an emoticon.
    pub fn unnamed(count: u64) -> Self {
        Self {
            emoticon: None,
            count,
        }
    }
}

/// Forward-origin metadata. Presence alone marks a post as forwarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardOrigin {
    /// Display name of the original sender, if exposed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub from_name: Option<String>,
    /// When the original message was sent, if exposed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub date: Option<DateTime<FixedOffset>>,
}

/// Immutable snapshot of one platform message.
///
/// Every field except `id` is optional or defaulted: the platform exposes
/// attributes dynamically and this type mirrors that without ever raising
/// on absence. Timestamps keep the message's own timezone offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    /// Message id within its chat.
    pub id: i64,

    /// When the message was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub date: Option<DateTime<FixedOffset>>,

    /// When the message was last edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub edit_date: Option<DateTime<FixedOffset>>,

    /// Message body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub text: Option<String>,

    /// Attached media, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media: Option<MediaKind>,

    /// View counter (channel posts).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub views: Option<u64>,

    /// Forward counter (channel posts).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub forwards: Option<u64>,

    /// Aggregate reaction entries, in platform order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub reactions: Vec<Reaction>,

    /// Rich-text annotations on the body.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub entities: Vec<EntityKind>,

    /// Whether the message is pinned in its chat.
    #[serde(default)]
    pub pinned: bool,

    /// Whether the message was sent without notification.
    #[serde(default)]
    pub silent: bool,

    /// Whether this is a channel post (as opposed to a group message).
    #[serde(default)]
    pub post: bool,

    /// Forward-origin metadata; present iff the message was forwarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub fwd_from: Option<ForwardOrigin>,

    /// Id of the bot the message was sent via.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub via_bot_id: Option<i64>,

    /// Album/grouped-media id.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub grouped_id: Option<i64>,
}

impl RawPost {
    /// Creates a post snapshot with only its id set.
    ///
    /// Every optional attribute starts absent; flags start `false`.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            date: None,
            edit_date: None,
            text: None,
            media: None,
            views: None,
            forwards: None,
            reactions: Vec::new(),
            entities: Vec::new(),
            pinned: false,
            silent: false,
            post: false,
            fwd_from: None,
            via_bot_id: None,
            grouped_id: None,
        }
    }

    /// Builder method to set the send timestamp.
    #[must_use]
    pub fn with_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.date = Some(date);
        self
    }

    /// Builder method to set the edit timestamp.
    #[must_use]
    pub fn with_edit_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.edit_date = Some(date);
        self
    }

    /// Builder method to set the body text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder method to set the attached media kind.
    #[must_use]
    pub fn with_media(mut self, media: MediaKind) -> Self {
        self.media = Some(media);
        self
    }

    /// Builder method to set the view counter.
    #[must_use]
    pub fn with_views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    /// Builder method to set the forward counter.
    #[must_use]
    pub fn with_forwards(mut self, forwards: u64) -> Self {
        self.forwards = Some(forwards);
        self
    }

    /// Builder method to append one reaction entry.
    #[must_use]
    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reactions.push(reaction);
        self
    }

    /// Builder method to append one entity annotation.
    #[must_use]
    pub fn with_entity(mut self, entity: EntityKind) -> Self {
        self.entities.push(entity);
        self
    }

    /// Builder method to mark the post as pinned.
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Builder method to mark the post as silent.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Builder method to mark the message as a channel post.
    #[must_use]
    pub fn as_channel_post(mut self) -> Self {
        self.post = true;
        self
    }

    /// Builder method to attach forward-origin metadata.
    #[must_use]
    pub fn with_fwd_from(mut self, origin: ForwardOrigin) -> Self {
        self.fwd_from = Some(origin);
        self
    }

    /// Builder method to set the via-bot id.
    #[must_use]
    pub fn with_via_bot(mut self, bot_id: i64) -> Self {
        self.via_bot_id = Some(bot_id);
        self
    }

    /// Builder method to set the album group id.
    #[must_use]
    pub fn with_grouped_id(mut self, grouped_id: i64) -> Self {
        self.grouped_id = Some(grouped_id);
        self
    }

    /// Returns `true` if the post carries an attached media slot.
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }
}
