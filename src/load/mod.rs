//! Loading Trello CSV exports into input records

use crate::domain::InputRecord;
use crate::error::RowError;
use crate::utils::read_file_safe;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

pub mod row;

pub use row::{parse_row, RawRow, REQUIRED_COLUMNS};

/// Parsed records plus the rows that were rejected.
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<InputRecord>,
    pub rejected: Vec<RowError>,
}

/// Parse CSV text. Only a missing required column fails the whole load;
/// bad rows are collected in `rejected`.
pub fn parse_csv_str(content: &str) -> Result<LoadedRecords, RowError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| RowError::Malformed { line: 1, message: e.to_string() })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(RowError::MissingColumn(*column));
        }
    }

    let mut loaded = LoadedRecords::default();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for result in reader.records() {
        let string_record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                reject(&mut loaded, RowError::Malformed { line, message: e.to_string() });
                continue;
            }
        };
        let line = string_record.position().map(|p| p.line()).unwrap_or(0);

        let parsed = string_record
            .deserialize::<RawRow>(Some(&headers))
            .map_err(|e| RowError::Malformed { line, message: e.to_string() })
            .and_then(|raw| parse_row(raw, line));

        match parsed {
            Ok(record) => {
                if !seen_ids.insert(record.id.clone()) {
                    reject(&mut loaded, RowError::DuplicateId { line, id: record.id });
                    continue;
                }
                loaded.records.push(record);
            }
            Err(err) => reject(&mut loaded, err),
        }
    }

    tracing::debug!(
        "Loaded {} records ({} rejected)",
        loaded.records.len(),
        loaded.rejected.len()
    );
    Ok(loaded)
}

fn reject(loaded: &mut LoadedRecords, err: RowError) {
    tracing::debug!("Rejected CSV row: {}", err);
    loaded.rejected.push(err);
}

/// Read and parse a CSV export from disk.
pub fn read_csv_file(path: &Path) -> Result<LoadedRecords> {
    let (content, encoding) = read_file_safe(path)?;
    tracing::debug!("Read {} as {}", path.display(), encoding);
    parse_csv_str(&content).with_context(|| format!("Failed parsing CSV file: {}", path.display()))
}
