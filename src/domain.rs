//! Core domain types shared by the loader, pipeline and renderers.

use crate::error::ValidationError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_LIST_NAME: &str = "Project List";
pub const DEFAULT_LABEL: &str = "Reportable (black_dark)";
pub const DEFAULT_HEADER: &str = "Transaction Management and Middleware";
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const SUMMARY_SCHEMA_VERSION: &str = "1.0.0";

pub fn default_priority_teams() -> Vec<String> {
    vec!["TMM".to_string(), "SRE".to_string()]
}

pub fn default_emoji_replacements() -> BTreeMap<String, String> {
    BTreeMap::from([
        (":question:".to_string(), "(needs clarification)".to_string()),
        (":warning:".to_string(), "(important note)".to_string()),
    ])
}

/// One card row from the Trello export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
    /// Labels in the order Trello exported them.
    pub labels: Vec<String>,
    pub list_name: String,
    pub archived: bool,
    pub board_name: Option<String>,
    pub due_date: Option<String>,
}

/// Grouping key derived from a card's labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TeamKey {
    Named(String),
    Uncategorized,
}

impl TeamKey {
    pub fn as_str(&self) -> &str {
        match self {
            TeamKey::Named(name) => name,
            TeamKey::Uncategorized => UNCATEGORIZED,
        }
    }
}

impl Serialize for TeamKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized card kept for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub team: TeamKey,
    pub due_date: Option<String>,
}

/// Entries sharing a team key, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub team: TeamKey,
    pub entries: Vec<ReportEntry>,
}

impl Group {
    pub fn new(team: TeamKey) -> Self {
        Self { team, entries: Vec::new() }
    }
}

/// Row selection predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub target_list: String,
    pub target_label: String,
    pub include_archived: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            target_list: DEFAULT_LIST_NAME.to_string(),
            target_label: DEFAULT_LABEL.to_string(),
            include_archived: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pre-formatted generation time; `None` keeps output reproducible.
    pub generated_at: Option<String>,
}

/// Everything the pipeline needs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub criteria: FilterCriteria,
    pub header: String,
    pub priority_teams: Vec<String>,
    pub emoji_replacements: BTreeMap<String, String>,
    pub render: RenderOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            header: DEFAULT_HEADER.to_string(),
            priority_teams: default_priority_teams(),
            emoji_replacements: default_emoji_replacements(),
            render: RenderOptions::default(),
        }
    }
}

/// A filtered record that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: String,
    pub reason: ValidationError,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub document: String,
    pub groups: Vec<Group>,
    /// Records that passed the filter, including ones later skipped.
    pub matched: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl ReportOutcome {
    pub fn rendered(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncategorized_displays_sentinel_name() {
        assert_eq!(TeamKey::Uncategorized.to_string(), "Uncategorized");
        assert_eq!(TeamKey::Named("SRE".into()).as_str(), "SRE");
    }

    #[test]
    fn team_key_serializes_as_plain_string() {
        let keys = vec![TeamKey::Named("TMM".into()), TeamKey::Uncategorized];
        let value = serde_json::to_value(keys).expect("serialize");
        assert_eq!(value, serde_json::json!(["TMM", "Uncategorized"]));
    }

    #[test]
    fn default_config_matches_exporter_defaults() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.criteria.target_list, "Project List");
        assert_eq!(cfg.criteria.target_label, "Reportable (black_dark)");
        assert!(!cfg.criteria.include_archived);
        assert_eq!(cfg.header, "Transaction Management and Middleware");
        assert_eq!(cfg.priority_teams, vec!["TMM", "SRE"]);
        assert!(cfg.render.generated_at.is_none());
    }
}
