//! Media bundling into a single ZIP archive.
//!
//! [`bundle_media`] walks the raw posts a batch collected, pulls each
//! attachment through an injected [`Downloader`], and packs everything that
//! arrived into one in-memory ZIP buffer. An individual download failure
//! skips that attachment; it never fails the whole bundle.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::error::{FetchError, LinkpackError};
use crate::post::RawPost;

/// MIME type of the archive [`bundle_media`] produces.
pub const ARCHIVE_MIME: &str = "application/zip";

/// One downloaded attachment: the artifact's own filename plus its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Filename the artifact reported for itself.
    pub name: String,
    /// File content.
    pub bytes: Vec<u8>,
}

impl MediaFile {
    /// Creates a media file from a name and content bytes.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// The injected single-attachment download capability.
///
/// `Ok(None)` means the post's media slot had nothing downloadable (some
/// media kinds, like polls or link previews, carry no file).
pub trait Downloader {
    /// Downloads the attachment of one post.
    fn download(&mut self, post: &RawPost) -> Result<Option<MediaFile>, FetchError>;
}

/// Bundles every downloadable attachment into one ZIP archive.
///
/// Posts without media are skipped without consulting the downloader.
/// Download failures and empty results skip that post's entry. The returned
/// buffer is always a valid archive; with no input (or nothing
/// downloadable) it is a valid zero-entry archive.
///
/// Known limitation: entries are staged under the artifact's own filename
/// and colliding names are not de-duplicated — on extraction the last entry
/// with a given name wins.
///
/// # Example
///
/// ```
/// use linkpack::bundle::{Downloader, MediaFile, bundle_media};
/// use linkpack::post::RawPost;
/// use linkpack::error::FetchError;
///
/// struct NoFiles;
///
/// impl Downloader for NoFiles {
///     fn download(&mut self, _post: &RawPost) -> Result<Option<MediaFile>, FetchError> {
///         Ok(None)
///     }
/// }
///
/// let archive = bundle_media(&[], &mut NoFiles).unwrap();
/// assert!(!archive.is_empty()); // a valid empty ZIP still has an end record
/// ```
pub fn bundle_media<D: Downloader>(
    raw: &[(String, RawPost)],
    downloader: &mut D,
) -> Result<Vec<u8>, LinkpackError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();

    for (_link, post) in raw {
        if !post.has_media() {
            continue;
        }
        match downloader.download(post) {
            Ok(Some(file)) => {
                writer.start_file(file.name.as_str(), options)?;
                writer.write_all(&file.bytes)?;
            }
            // Nothing downloadable, or the download failed: skip the entry.
            Ok(None) | Err(_) => {}
        }
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
