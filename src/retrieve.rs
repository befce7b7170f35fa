//! Sequential batch retrieval.
//!
//! [`retrieve_batch`] drives the link parser and an injected [`Fetcher`]
//! over a list of links, accumulating normalized records, raw posts, and
//! per-link warnings. No per-link problem ever aborts the batch: an
//! unrecognised link, a fetch failure, or a missing message each contribute
//! a warning and processing continues with the next link.
//!
//! Fetches run strictly one at a time, in input order; records, raw pairs,
//! and warnings all come out in processing order.

use crate::error::FetchError;
use crate::link::{ChatTarget, parse_link};
use crate::post::RawPost;
use crate::record::{PostRecord, normalize};

/// The injected message-fetch capability.
///
/// Owned by the session/auth layer in a live setup; backed by a capture
/// file in the offline [`SnapshotFetcher`](crate::snapshot::SnapshotFetcher).
/// `Ok(None)` means the reference was valid but nothing was found there,
/// which is reported distinctly from a fetch failure.
pub trait Fetcher {
    /// Fetches one message by chat target and message id.
    fn fetch(
        &mut self,
        target: &ChatTarget,
        message_id: i64,
    ) -> Result<Option<RawPost>, FetchError>;
}

/// Everything one batch run produced.
///
/// `records` holds one row per successfully fetched message; `raw` holds the
/// matching `(link, post)` pairs (same order, same length); `warnings` holds
/// one line per skipped link. `records.len() <= raw.len() <= links.len()`
/// always, and each sequence preserves the relative order of the surviving
/// input links.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Normalized rows, in processing order.
    pub records: Vec<PostRecord>,
    /// `(link, raw post)` pairs for every fetched message.
    pub raw: Vec<(String, RawPost)>,
    /// One line per skipped link, in processing order.
    pub warnings: Vec<String>,
}

impl BatchReport {
    /// Returns `true` if no message was retrieved.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of retrieved messages.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if any link was skipped.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Runs one batch: parse each link, fetch, normalize, accumulate.
///
/// Links are processed strictly sequentially in input order. The fetcher is
/// only consulted for links that parse; its failures become warnings, never
/// hard errors.
///
/// # Example
///
/// ```
/// use linkpack::retrieve::{Fetcher, retrieve_batch};
/// use linkpack::link::ChatTarget;
/// use linkpack::post::RawPost;
/// use linkpack::error::FetchError;
///
/// struct OnePost;
///
/// impl Fetcher for OnePost {
///     fn fetch(
///         &mut self,
///         _target: &ChatTarget,
///         message_id: i64,
///     ) -> Result<Option<RawPost>, FetchError> {
///         Ok(Some(RawPost::new(message_id).with_text("hello")))
///     }
/// }
///
/// let links = vec!["t.me/somechannel/42".to_string(), "junk".to_string()];
/// let report = retrieve_batch(&links, &mut OnePost);
/// assert_eq!(report.records.len(), 1);
/// assert_eq!(report.warnings.len(), 1);
/// ```
pub fn retrieve_batch<F: Fetcher>(links: &[String], fetcher: &mut F) -> BatchReport {
    let mut report = BatchReport::default();

    for link in links {
        let Some(parsed) = parse_link(link) else {
            report.warnings.push(format!("Link not recognised: {link}"));
            continue;
        };

        match fetcher.fetch(&parsed.target, parsed.message_id) {
            Err(err) => {
                report.warnings.push(format!(
                    "Error retrieving message for link {link}: {err}"
                ));
            }
            Ok(None) => {
                report
                    .warnings
                    .push(format!("No message found for link: {link}"));
            }
            Ok(Some(post)) => {
                report
                    .records
                    .push(normalize(&parsed.target.display_label(), &post));
                report.raw.push((link.clone(), post));
            }
        }
    }

    report
}
