//! CSV output writer.

use std::fs::File;

use crate::error::Result;
use crate::record::PostRecord;

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Header: [`PostRecord::FIELD_NAMES`], always all 17 columns
/// - Encoding: UTF-8
/// - Absent values render as empty cells; booleans as `true`/`false`
pub fn write_csv(records: &[PostRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::Writer::from_writer(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Renders records as a CSV string (what a UI hands out as a download).
pub fn to_csv(records: &[PostRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(&mut writer, records)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[PostRecord],
) -> Result<()> {
    writer.write_record(PostRecord::FIELD_NAMES)?;
    for record in records {
        writer.write_record(&build_record(record))?;
    }
    Ok(())
}

/// Builds the CSV cells for one record, in header order.
fn build_record(record: &PostRecord) -> Vec<String> {
    vec![
        record.channel.clone(),
        record.message_id.to_string(),
        record.date.clone().unwrap_or_default(),
        record.edit_date.clone().unwrap_or_default(),
        record.text.clone(),
        record.media_present.to_string(),
        record.media_type.clone().unwrap_or_default(),
        record.views.map(|v| v.to_string()).unwrap_or_default(),
        record.forwards.map(|v| v.to_string()).unwrap_or_default(),
        record.reactions.clone(),
        record.entities.clone(),
        record.pinned.to_string(),
        record.silent.to_string(),
        record.post.to_string(),
        record.forwarded.to_string(),
        record.via_bot.map(|v| v.to_string()).unwrap_or_default(),
        record.grouped_id.map(|v| v.to_string()).unwrap_or_default(),
    ]
}
