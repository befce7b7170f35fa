//! Plain-text dump of raw post objects.
//!
//! One block per surviving link, in processing order, each headed by the
//! link it came from. Operators keep a dump next to the table to inspect
//! the full raw object when a record looks off.

use std::fs;

use crate::error::Result;
use crate::post::RawPost;

/// Renders the raw posts as a text dump.
///
/// Blocks appear in the same order the batch processed them.
pub fn to_raw_dump(raw: &[(String, RawPost)]) -> String {
    let mut out = String::new();
    for (link, post) in raw {
        out.push_str(&format!("Message from {link}\n"));
        out.push_str(&format!("{post:#?}\n\n"));
    }
    out
}

/// Writes the raw dump to a file.
pub fn write_raw_dump(raw: &[(String, RawPost)], output_path: &str) -> Result<()> {
    fs::write(output_path, to_raw_dump(raw))?;
    Ok(())
}
