//! Offline fetcher backed by a JSON capture file.
//!
//! A snapshot is a JSON document holding posts previously captured from the
//! platform, keyed by channel username or numeric chat id plus message id.
//! [`SnapshotFetcher`] implements [`Fetcher`] over such a capture, which
//! lets the CLI and the test suites drive the whole pipeline without a live
//! session.
//!
//! # Format
//!
//! ```json
//! {
//!   "posts": [
//!     {"channel": "somechannel", "id": 42, "post": {"id": 42, "text": "hi"}},
//!     {"chat_id": -1001567469683, "id": 7, "post": {"id": 7}}
//!   ]
//! }
//! ```
//!
//! Each entry names its chat by `channel` (username) or `chat_id` (numeric);
//! `post` is the raw post snapshot itself. A lookup miss is a not-found,
//! not an error.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FetchError, LinkpackError, Result};
use crate::link::ChatTarget;
use crate::post::RawPost;
use crate::retrieve::Fetcher;

/// One captured post with its chat key.
#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    /// Channel username, for public links.
    #[serde(default)]
    channel: Option<String>,
    /// Numeric chat id, for c-links.
    #[serde(default)]
    chat_id: Option<i64>,
    /// Message id within the chat.
    id: i64,
    /// The captured post.
    post: RawPost,
}

/// Top-level capture document.
#[derive(Debug, Deserialize)]
struct SnapshotDoc {
    posts: Vec<SnapshotEntry>,
}

/// Lookup key: one of the two target forms plus the message id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Key {
    Username(String, i64),
    Chat(i64, i64),
}

impl Key {
    fn for_target(target: &ChatTarget, message_id: i64) -> Self {
        match target {
            ChatTarget::Username(name) => Key::Username(name.clone(), message_id),
            ChatTarget::Chat(id) => Key::Chat(*id, message_id),
        }
    }
}

/// [`Fetcher`] implementation over a JSON capture file.
///
/// # Example
///
/// ```
/// use linkpack::snapshot::SnapshotFetcher;
///
/// let capture = r#"{"posts": [
///     {"channel": "somechannel", "id": 42, "post": {"id": 42, "text": "hi"}}
/// ]}"#;
/// let fetcher = SnapshotFetcher::from_str(capture).unwrap();
/// assert_eq!(fetcher.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SnapshotFetcher {
    posts: HashMap<Key, RawPost>,
}

impl SnapshotFetcher {
    /// Loads a snapshot from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|source| LinkpackError::snapshot_parse(source, Some(path.to_path_buf())))
    }

    /// Parses a snapshot from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Self::parse(content).map_err(|source| LinkpackError::snapshot_parse(source, None))
    }

    fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let doc: SnapshotDoc = serde_json::from_str(content)?;
        let mut posts = HashMap::with_capacity(doc.posts.len());
        for entry in doc.posts {
            if let Some(channel) = entry.channel {
                posts.insert(Key::Username(channel, entry.id), entry.post);
            } else if let Some(chat_id) = entry.chat_id {
                posts.insert(Key::Chat(chat_id, entry.id), entry.post);
            }
            // Entries with neither key are unreachable by any link; dropped.
        }
        Ok(Self { posts })
    }

    /// Number of captured posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if the capture holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Fetcher for SnapshotFetcher {
    fn fetch(
        &mut self,
        target: &ChatTarget,
        message_id: i64,
    ) -> std::result::Result<Option<RawPost>, FetchError> {
        Ok(self.posts.get(&Key::for_target(target, message_id)).cloned())
    }
}
