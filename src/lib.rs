//! # Linkpack
//!
//! A Rust library for retrieving Telegram post data from `t.me` links and
//! turning it into flat, tabular records.
//!
//! ## Overview
//!
//! Given a pile of post links, linkpack:
//! - parses each link into a chat target and message id ([`link`])
//! - fetches each referenced message through an injected fetch capability
//!   ([`retrieve`]) — one at a time, in input order, converting per-link
//!   problems into warnings instead of aborting the batch
//! - normalizes each message into a fixed 17-column record ([`record`])
//! - exports the records as CSV, JSON, or JSON Lines, plus a raw-object
//!   dump ([`export`])
//! - optionally bundles downloaded media into one ZIP archive ([`bundle`])
//!
//! The live platform client, its session, and its authentication flow stay
//! outside this crate: the core only sees a [`Fetcher`](retrieve::Fetcher)
//! and a [`Downloader`](bundle::Downloader). The bundled
//! [`SnapshotFetcher`](snapshot::SnapshotFetcher) serves those capabilities
//! from a JSON capture file for offline use.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let capture = r#"{"posts": [
//!         {"channel": "somechannel", "id": 42, "post": {"id": 42, "text": "hi"}}
//!     ]}"#;
//!     let mut fetcher = SnapshotFetcher::from_str(capture)?;
//!
//!     let links = split_links("https://t.me/somechannel/42, not-a-link");
//!     let report = retrieve_batch(&links, &mut fetcher);
//!
//!     assert_eq!(report.records.len(), 1);
//!     assert_eq!(report.warnings.len(), 1);
//!
//!     let csv = to_csv(&report.records)?;
//!     assert!(csv.starts_with("channel,message_id,"));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`link`] — t.me link grammar ([`parse_link`](link::parse_link),
//!   [`split_links`](link::split_links), [`ChatTarget`](link::ChatTarget))
//! - [`post`] — [`RawPost`], the immutable snapshot of one platform message
//! - [`record`] — [`PostRecord`] and [`normalize`](record::normalize)
//! - [`retrieve`] — [`Fetcher`](retrieve::Fetcher) seam,
//!   [`retrieve_batch`](retrieve::retrieve_batch), [`BatchReport`](retrieve::BatchReport)
//! - [`bundle`] — [`Downloader`](bundle::Downloader) seam,
//!   [`bundle_media`](bundle::bundle_media)
//! - [`snapshot`] — offline [`SnapshotFetcher`](snapshot::SnapshotFetcher)
//! - [`export`] — CSV/JSON/JSONL writers and the raw dump
//! - [`cli`] — CLI argument types
//! - [`error`] — unified error types ([`LinkpackError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod bundle;
pub mod cli;
pub mod error;
pub mod export;
pub mod link;
pub mod post;
pub mod record;
pub mod retrieve;
pub mod snapshot;

// Re-export the main types at the crate root for convenience
pub use error::{LinkpackError, Result};
pub use post::RawPost;
pub use record::PostRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use linkpack::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::post::{EntityKind, ForwardOrigin, MediaKind, RawPost, Reaction};
    pub use crate::record::{PostRecord, normalize};

    // Error types
    pub use crate::error::{FetchError, LinkpackError, Result};

    // Link parsing
    pub use crate::link::{ChatTarget, PostLink, parse_link, split_links};

    // Batch retrieval
    pub use crate::retrieve::{BatchReport, Fetcher, retrieve_batch};

    // Media bundling
    pub use crate::bundle::{ARCHIVE_MIME, Downloader, MediaFile, bundle_media};

    // Offline fetcher
    pub use crate::snapshot::SnapshotFetcher;

    // Output
    pub use crate::export::{
        OutputFormat, to_csv, to_json, to_jsonl, to_raw_dump, write_csv, write_json, write_jsonl,
        write_raw_dump,
    };
}
