//! CLI > config file > defaults

use super::loader::Config;
use crate::domain::{FilterCriteria, RenderOptions, ReportConfig};

/// Values given on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub list_name: Option<String>,
    pub label: Option<String>,
    pub include_archived: bool,
    pub no_timestamp: bool,
    pub keep_csv: bool,
}

/// Settings that only the CLI layer acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub include_timestamp: bool,
    pub keep_csv: bool,
}

pub fn merge_cli_with_config(config: Config, cli: CliOverrides) -> (ReportConfig, RunSettings) {
    let criteria = FilterCriteria {
        target_list: cli.list_name.unwrap_or(config.list_name),
        target_label: cli.label.unwrap_or(config.label),
        include_archived: cli.include_archived || config.include_archived,
    };

    let report = ReportConfig {
        criteria,
        header: config.header,
        priority_teams: config.priority_teams,
        emoji_replacements: config.emoji_replacements,
        render: RenderOptions::default(),
    };

    let settings = RunSettings {
        include_timestamp: config.include_timestamp && !cli.no_timestamp,
        keep_csv: cli.keep_csv || config.keep_csv,
    };

    (report, settings)
}
