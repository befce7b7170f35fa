//! t.me link parsing.
//!
//! Turns user-supplied post links into a [`PostLink`] naming the chat and
//! the message id. Two grammars are recognised, tried in order with first
//! match winning:
//!
//! 1. **Chat link** — `t.me/c/<chat>/<msg>`, a private/internal reference
//!    encoding a numeric chat id
//! 2. **Username link** — `t.me/<channel>/<msg>`, a public channel post
//!
//! The `https://` (or `http://`) scheme is optional in both forms. Anything
//! else is unrecognised; callers surface that as a per-link warning and keep
//! going.
//!
//! # Example
//!
//! ```
//! use linkpack::link::{ChatTarget, parse_link};
//!
//! let link = parse_link("https://t.me/somechannel/42").unwrap();
//! assert_eq!(link.target, ChatTarget::Username("somechannel".into()));
//! assert_eq!(link.message_id, 42);
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Offset applied when converting a `t.me/c/...` short chat id to the real
/// channel id: `real = -(short + CHANNEL_ID_OFFSET)`.
///
/// This is the platform's channel-ID encoding convention, not derived logic.
/// It is applied uniformly here; whether broadcast channels and supergroups
/// ever diverge in offset is not distinguished by the link format.
pub const CHANNEL_ID_OFFSET: i64 = 1_000_000_000_000;

// Checked before the username pattern: a `/c/` path would otherwise be
// misparsed as the username "c".
static CHAT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://)?t\.me/c/(\d+)/(\d+)").unwrap());

static USERNAME_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://)?t\.me/([^/\s]+)/(\d+)").unwrap());

/// The chat a post link points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatTarget {
    /// Public channel or group, referenced by username.
    Username(String),
    /// Internal numeric chat id, decoded from a `t.me/c/...` link.
    Chat(i64),
}

impl ChatTarget {
    /// Human-meaningful label for this target, used as the `channel` column
    /// of normalized records so operators can trace rows back to a chat.
    pub fn display_label(&self) -> String {
        match self {
            ChatTarget::Username(name) => name.clone(),
            ChatTarget::Chat(id) => format!("Chat {id}"),
        }
    }
}

impl std::fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatTarget::Username(name) => write!(f, "{name}"),
            ChatTarget::Chat(id) => write!(f, "{id}"),
        }
    }
}

/// A parsed post link: which chat, which message.
///
/// Produced by [`parse_link`]; consumed once by the fetch step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLink {
    /// The chat the message lives in.
    pub target: ChatTarget,
    /// The message id within that chat.
    pub message_id: i64,
}

/// Parses one post link.
///
/// Returns `None` when the input matches neither grammar, or when a digit
/// group does not fit in an `i64`. Callers treat `None` as a non-fatal
/// per-link warning.
///
/// # Example
///
/// ```
/// use linkpack::link::{ChatTarget, parse_link};
///
/// let link = parse_link("t.me/c/1567469683/2394725").unwrap();
/// assert_eq!(link.target, ChatTarget::Chat(-1001567469683));
/// assert_eq!(link.message_id, 2394725);
///
/// assert!(parse_link("not a link").is_none());
/// ```
pub fn parse_link(link: &str) -> Option<PostLink> {
    if let Some(caps) = CHAT_LINK.captures(link) {
        let short: i64 = caps[1].parse().ok()?;
        let message_id: i64 = caps[2].parse().ok()?;
        let chat_id = -(short.checked_add(CHANNEL_ID_OFFSET)?);
        return Some(PostLink {
            target: ChatTarget::Chat(chat_id),
            message_id,
        });
    }

    if let Some(caps) = USERNAME_LINK.captures(link) {
        let message_id: i64 = caps[2].parse().ok()?;
        return Some(PostLink {
            target: ChatTarget::Username(caps[1].to_string()),
            message_id,
        });
    }

    None
}

/// Splits raw multi-link input into individual link tokens.
///
/// Whitespace (including newlines) and commas are equivalent separators;
/// empty tokens are discarded and the survivors are trimmed.
///
/// # Example
///
/// ```
/// use linkpack::link::split_links;
///
/// let links = split_links("t.me/a/1, t.me/b/2\n t.me/c/3/4");
/// assert_eq!(links.len(), 3);
/// ```
pub fn split_links(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_username_link() {
        let link = parse_link("https://t.me/somechannel/42").unwrap();
        assert_eq!(link.target, ChatTarget::Username("somechannel".into()));
        assert_eq!(link.message_id, 42);
    }

    #[test]
    fn test_parse_username_link_scheme_optional() {
        let with_scheme = parse_link("https://t.me/somechannel/42").unwrap();
        let without = parse_link("t.me/somechannel/42").unwrap();
        assert_eq!(with_scheme, without);

        let http = parse_link("http://t.me/somechannel/42").unwrap();
        assert_eq!(http, without);
    }

    #[test]
    fn test_parse_chat_link_offset_formula() {
        let link = parse_link("t.me/c/1567469683/2394725").unwrap();
        assert_eq!(link.target, ChatTarget::Chat(-1001567469683));
        assert_eq!(link.message_id, 2394725);
    }

    #[test]
    fn test_chat_link_wins_over_username() {
        // Without ordering, `c` would be taken as a username.
        let link = parse_link("https://t.me/c/123/456").unwrap();
        assert_eq!(link.target, ChatTarget::Chat(-1000000000123));
        assert_eq!(link.message_id, 456);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_link("not a link").is_none());
        assert!(parse_link("").is_none());
        assert!(parse_link("https://example.com/foo/1").is_none());
        assert!(parse_link("t.me/onlyusername").is_none());
    }

    #[test]
    fn test_parse_rejects_overflowing_ids() {
        assert!(parse_link("t.me/c/99999999999999999999/1").is_none());
        assert!(parse_link("t.me/chan/99999999999999999999").is_none());
    }

    #[test]
    fn test_message_id_is_base_10() {
        let link = parse_link("t.me/chan/007").unwrap();
        assert_eq!(link.message_id, 7);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(
            ChatTarget::Username("news".into()).display_label(),
            "news"
        );
        assert_eq!(
            ChatTarget::Chat(-1001567469683).display_label(),
            "Chat -1001567469683"
        );
    }

    #[test]
    fn test_split_links_separators() {
        let links = split_links("t.me/a/1 t.me/b/2,t.me/c/3/4\nt.me/d/5");
        assert_eq!(
            links,
            vec!["t.me/a/1", "t.me/b/2", "t.me/c/3/4", "t.me/d/5"]
        );
    }

    #[test]
    fn test_split_links_drops_empty_tokens() {
        let links = split_links("  , ,, t.me/a/1 ,,  ");
        assert_eq!(links, vec!["t.me/a/1"]);
        assert!(split_links("").is_empty());
        assert!(split_links(" ,  , ").is_empty());
    }
}
