//! Trello CSV row schema and the row → record boundary.

use crate::domain::InputRecord;
use crate::error::RowError;
use serde::Deserialize;

pub const REQUIRED_COLUMNS: &[&str] = &[
    "Card ID",
    "Card Name",
    "Card URL",
    "Card Description",
    "Labels",
    "List Name",
    "Archived",
];

/// A row exactly as the export spells it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Card ID")]
    pub card_id: String,
    #[serde(rename = "Card Name")]
    pub card_name: String,
    #[serde(rename = "Card URL")]
    pub card_url: String,
    #[serde(rename = "Card Description")]
    pub card_description: String,
    #[serde(rename = "Labels")]
    pub labels: String,
    #[serde(rename = "List Name")]
    pub list_name: String,
    #[serde(rename = "Archived")]
    pub archived: String,
    #[serde(rename = "Board Name", default)]
    pub board_name: Option<String>,
    #[serde(rename = "Due Date", default)]
    pub due_date: Option<String>,
}

/// Convert one raw row into a typed record. `line` is only used in errors.
pub fn parse_row(raw: RawRow, line: u64) -> Result<InputRecord, RowError> {
    let id = raw.card_id.trim().to_string();
    if id.is_empty() {
        return Err(RowError::EmptyId { line });
    }

    let archived = parse_archived(&raw.archived)
        .ok_or_else(|| RowError::InvalidArchived { line, value: raw.archived.clone() })?;

    Ok(InputRecord {
        id,
        name: raw.card_name,
        url: raw.card_url,
        description: raw.card_description,
        labels: split_labels(&raw.labels),
        list_name: raw.list_name,
        archived,
        board_name: non_blank(raw.board_name),
        due_date: non_blank(raw.due_date),
    })
}

/// Split the `Labels` cell on commas, trimming and dropping empty pieces.
pub fn split_labels(cell: &str) -> Vec<String> {
    cell.split(',').map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect()
}

/// Parse the textual archived flag; `None` for unrecognized values.
pub fn parse_archived(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" | "" => Some(false),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
