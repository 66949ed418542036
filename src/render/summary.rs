//! Run summary JSON generation.

use crate::domain::{ReportConfig, ReportOutcome, SUMMARY_SCHEMA_VERSION};
use anyhow::Result;
use serde_json::{json, Map, Value};
use std::path::Path;

pub fn summary_value(
    outcome: &ReportOutcome,
    config: &ReportConfig,
    generated_at: Option<String>,
) -> Value {
    let groups = outcome
        .groups
        .iter()
        .map(|g| {
            let cards = g
                .entries
                .iter()
                .map(|e| {
                    let mut card = Map::new();
                    card.insert("id".to_string(), Value::String(e.id.clone()));
                    card.insert("title".to_string(), Value::String(e.title.clone()));
                    if let Some(due) = &e.due_date {
                        card.insert("due_date".to_string(), Value::String(due.clone()));
                    }
                    Value::Object(card)
                })
                .collect::<Vec<_>>();
            json!({
                "team": g.team,
                "count": g.entries.len(),
                "cards": cards,
            })
        })
        .collect::<Vec<_>>();

    let skipped = outcome
        .skipped
        .iter()
        .map(|s| json!({ "id": s.id, "reason": s.reason.to_string() }))
        .collect::<Vec<_>>();

    let mut summary = Map::new();
    summary
        .insert("schema_version".to_string(), Value::String(SUMMARY_SCHEMA_VERSION.to_string()));
    if let Some(generated_at) = generated_at {
        summary.insert("generated_at".to_string(), Value::String(generated_at));
    }
    summary.insert(
        "criteria".to_string(),
        json!({
            "list": config.criteria.target_list,
            "label": config.criteria.target_label,
            "include_archived": config.criteria.include_archived,
        }),
    );
    summary.insert("matched".to_string(), json!(outcome.matched));
    summary.insert("rendered".to_string(), json!(outcome.rendered()));
    summary.insert("skipped".to_string(), Value::Array(skipped));
    summary.insert("groups".to_string(), Value::Array(groups));
    Value::Object(summary)
}

pub fn write_summary(
    summary_path: &Path,
    outcome: &ReportOutcome,
    config: &ReportConfig,
    generated_at: Option<String>,
) -> Result<()> {
    let summary = summary_value(outcome, config, generated_at);
    if let Some(parent) = summary_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(summary_path, serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}
