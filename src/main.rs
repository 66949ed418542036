//! trello-report: Turn Trello CSV exports into grouped Markdown reports

use anyhow::Result;

fn main() -> Result<()> {
    trello_report::cli::run()
}
