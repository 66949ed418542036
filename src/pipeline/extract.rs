//! Normalization of filtered records into report entries

use super::team::team_key;
use crate::domain::{InputRecord, ReportEntry};
use crate::error::ValidationError;
use crate::utils::{normalize_newlines, replace_emoji_codes};
use std::collections::BTreeMap;

pub struct ExtractOptions<'a> {
    /// Label excluded when picking the team key.
    pub target_label: &'a str,
    pub emoji_replacements: &'a BTreeMap<String, String>,
}

pub fn extract_entry(
    record: &InputRecord,
    options: &ExtractOptions<'_>,
) -> Result<ReportEntry, ValidationError> {
    let title = replace_emoji_codes(record.name.trim(), options.emoji_replacements);
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle { id: record.id.clone() });
    }

    let description = normalize_newlines(record.description.trim());
    let description = replace_emoji_codes(&description, options.emoji_replacements);

    Ok(ReportEntry {
        id: record.id.clone(),
        title: normalize_newlines(&title).replace('\n', " "),
        link: record.url.trim().to_string(),
        description,
        team: team_key(&record.labels, options.target_label),
        due_date: record.due_date.clone(),
    })
}
