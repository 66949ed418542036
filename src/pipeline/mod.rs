//! Filter → extract → group → render pipeline

use crate::domain::{InputRecord, ReportConfig, ReportOutcome, SkippedRecord};
use crate::error::ConfigurationError;
use crate::render::render_markdown;

pub mod extract;
pub mod filter;
pub mod group;
pub mod team;

pub use extract::{extract_entry, ExtractOptions};
pub use filter::filter_records;
pub use group::{group_entries, order_groups};
pub use team::{strip_trailing_parenthetical, team_key};

pub fn validate_config(config: &ReportConfig) -> Result<(), ConfigurationError> {
    if config.criteria.target_label.trim().is_empty() {
        return Err(ConfigurationError::EmptyTargetLabel);
    }
    if config.criteria.target_list.trim().is_empty() {
        return Err(ConfigurationError::EmptyTargetList);
    }
    if config.header.trim().is_empty() {
        return Err(ConfigurationError::EmptyHeader);
    }
    Ok(())
}

/// Build the full report for one batch of records.
///
/// Records that fail normalization are skipped and reported in
/// [`ReportOutcome::skipped`]; only invalid configuration fails the call.
pub fn build_report(
    records: &[InputRecord],
    config: &ReportConfig,
) -> Result<ReportOutcome, ConfigurationError> {
    validate_config(config)?;

    let selected = filter_records(records, &config.criteria);
    tracing::debug!("{} of {} records matched the filter", selected.len(), records.len());

    let options = ExtractOptions {
        target_label: &config.criteria.target_label,
        emoji_replacements: &config.emoji_replacements,
    };

    let mut entries = Vec::with_capacity(selected.len());
    let mut skipped = Vec::new();
    for record in &selected {
        match extract_entry(record, &options) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                tracing::debug!("Skipping card {}: {}", record.id, reason);
                skipped.push(SkippedRecord { id: record.id.clone(), reason });
            }
        }
    }

    let groups = order_groups(group_entries(entries), &config.priority_teams);
    let document = render_markdown(&config.header, &groups, &config.render);

    Ok(ReportOutcome { document, groups, matched: selected.len(), skipped })
}
