//! Bucketing entries by team and ordering the buckets
//!
//! Ordering: configured priority teams first (in configured order),
//! then every other named team case-insensitively, then `Uncategorized`.

use crate::domain::{Group, ReportEntry, TeamKey};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Group entries by team key, keeping first-seen group order and entry order.
pub fn group_entries(entries: Vec<ReportEntry>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<TeamKey, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.team.clone()).or_insert_with(|| {
            groups.push(Group::new(entry.team.clone()));
            groups.len() - 1
        });
        groups[slot].entries.push(entry);
    }

    groups
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Priority(usize),
    Named,
    Uncategorized,
}

fn rank(team: &TeamKey, priority: &[String]) -> Rank {
    match team {
        TeamKey::Uncategorized => Rank::Uncategorized,
        TeamKey::Named(name) => match priority.iter().position(|p| p == name) {
            Some(pos) => Rank::Priority(pos),
            None => Rank::Named,
        },
    }
}

pub fn compare_teams(a: &TeamKey, b: &TeamKey, priority: &[String]) -> Ordering {
    rank(a, priority)
        .cmp(&rank(b, priority))
        .then_with(|| a.as_str().to_lowercase().cmp(&b.as_str().to_lowercase()))
        .then_with(|| a.as_str().cmp(b.as_str()))
}

/// Sort groups into report order and drop empty ones. Entry order is untouched.
pub fn order_groups(mut groups: Vec<Group>, priority: &[String]) -> Vec<Group> {
    groups.retain(|g| !g.entries.is_empty());
    groups.sort_by(|a, b| compare_teams(&a.team, &b.team, priority));
    groups
}
