//! JSON and JSON Lines output writers.

use std::fs;

use crate::error::Result;
use crate::record::PostRecord;

/// Renders records as a pretty-printed JSON array.
pub fn to_json(records: &[PostRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes records to a JSON file.
pub fn write_json(records: &[PostRecord], output_path: &str) -> Result<()> {
    fs::write(output_path, to_json(records)?)?;
    Ok(())
}

/// Renders records as JSON Lines: one object per line.
pub fn to_jsonl(records: &[PostRecord]) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes records to a JSON Lines file.
pub fn write_jsonl(records: &[PostRecord], output_path: &str) -> Result<()> {
    fs::write(output_path, to_jsonl(records)?)?;
    Ok(())
}
