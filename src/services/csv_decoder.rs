use crate::error::Result;
use crate::models::RawRecord;
use csv::ReaderBuilder;

/// Decode a CSV export with a header line into rows keyed by column name.
///
/// Short rows yield fewer keys and extra trailing fields are dropped. A body
/// with no data rows (or no header at all) decodes to an empty list. Column
/// meaning is not checked here.
pub fn decode(text: &str) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .collect();
        records.push(record);
    }

    Ok(records)
}
