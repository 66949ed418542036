//! trello-report: Turn Trello CSV exports into grouped Markdown reports
//!
//! Cards are filtered by list, label and archived flag, grouped by the team
//! encoded in their labels, and rendered with priority teams first.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod load;
pub mod pipeline;
pub mod render;
pub mod utils;

pub use domain::{FilterCriteria, InputRecord, ReportConfig, ReportOutcome};
pub use error::{ConfigurationError, RowError, ValidationError};
pub use pipeline::build_report;
