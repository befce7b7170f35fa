//! Flat record type and the normalization rules that fill it.
//!
//! [`normalize`] maps one [`RawPost`] into a [`PostRecord`] — the row shape
//! handed to tabular display and export. It is a total function: every
//! platform attribute has a default-when-absent policy and no input can make
//! it fail.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::post::RawPost;

/// Timestamp rendering used for the `date` and `edit_date` columns.
///
/// Locale-independent; the message's own timezone offset is applied before
/// formatting and then dropped.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One normalized output row.
///
/// The field set and order are fixed regardless of which optional platform
/// attributes were present on the source message; absent data shows up as
/// `None` or an empty string, never as an error. Serialization preserves
/// declaration order, and [`FIELD_NAMES`](Self::FIELD_NAMES) gives the same
/// order for CSV headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    /// Display label of the source chat (username, or `Chat <id>`).
    pub channel: String,
    /// Message id within the chat.
    pub message_id: i64,
    /// Send time, `YYYY-MM-DD HH:MM:SS` in the message's own timezone.
    pub date: Option<String>,
    /// Last edit time, same format.
    pub edit_date: Option<String>,
    /// Body text; empty string when the post has none.
    pub text: String,
    /// Whether any media is attached.
    pub media_present: bool,
    /// Media kind tag when media is attached.
    pub media_type: Option<String>,
    /// View counter, channel posts only.
    pub views: Option<u64>,
    /// Forward counter, channel posts only.
    pub forwards: Option<u64>,
    /// `"<emoticon>: <count>"` pairs joined with `", "`; empty if none.
    pub reactions: String,
    /// Distinct entity kind names joined with `", "`; empty if none.
    pub entities: String,
    /// Pinned flag.
    pub pinned: bool,
    /// Silent-send flag.
    pub silent: bool,
    /// Channel-post flag.
    pub post: bool,
    /// Whether the message carries forward-origin metadata.
    pub forwarded: bool,
    /// Id of the bot the message was sent via.
    pub via_bot: Option<i64>,
    /// Album/grouped-media id.
    pub grouped_id: Option<i64>,
}

impl PostRecord {
    /// Column names, in the same fixed order as the struct fields.
    ///
    /// Used verbatim as the CSV header row.
    pub const FIELD_NAMES: [&'static str; 17] = [
        "channel",
        "message_id",
        "date",
        "edit_date",
        "text",
        "media_present",
        "media_type",
        "views",
        "forwards",
        "reactions",
        "entities",
        "pinned",
        "silent",
        "post",
        "forwarded",
        "via_bot",
        "grouped_id",
    ];
}

/// Normalizes one raw post into a [`PostRecord`].
///
/// `channel` is the caller-supplied display label — the username for a
/// public link, or a synthesized `Chat <id>` label for a c-link (see
/// [`ChatTarget::display_label`](crate::link::ChatTarget::display_label)).
///
/// # Example
///
/// ```
/// use linkpack::post::{RawPost, Reaction};
/// use linkpack::record::normalize;
///
/// let post = RawPost::new(42)
///     .with_reaction(Reaction::new("👍", 3))
///     .with_reaction(Reaction::new("❤", 1));
/// let record = normalize("somechannel", &post);
///
/// assert_eq!(record.reactions, "👍: 3, ❤: 1");
/// assert_eq!(record.entities, "");
/// ```
pub fn normalize(channel: &str, post: &RawPost) -> PostRecord {
    PostRecord {
        channel: channel.to_string(),
        message_id: post.id,
        date: post.date.map(format_timestamp),
        edit_date: post.edit_date.map(format_timestamp),
        text: post.text.clone().unwrap_or_default(),
        media_present: post.media.is_some(),
        media_type: post.media.map(|kind| kind.as_str().to_string()),
        views: post.views,
        forwards: post.forwards,
        reactions: render_reactions(post),
        entities: render_entities(post),
        pinned: post.pinned,
        silent: post.silent,
        post: post.post,
        forwarded: post.fwd_from.is_some(),
        via_bot: post.via_bot_id,
        grouped_id: post.grouped_id,
    }
}

fn format_timestamp(ts: DateTime<FixedOffset>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders reaction entries in platform order, skipping entries without an
/// emoticon.
fn render_reactions(post: &RawPost) -> String {
    post.reactions
        .iter()
        .filter_map(|reaction| {
            reaction
                .emoticon
                .as_ref()
                .map(|emoticon| format!("{emoticon}: {}", reaction.count))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the distinct entity kind names.
///
/// Set semantics: duplicates collapse. The sorted order is an
/// implementation choice for deterministic output; consumers should not
/// rely on any particular ordering.
fn render_entities(post: &RawPost) -> String {
    post.entities
        .iter()
        .map(|entity| entity.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(", ")
}
