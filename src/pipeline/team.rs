//! Team-key derivation from card labels
//!
//! The team key is the first label that is not the filter label, with one
//! trailing `(...)` annotation removed and the result trimmed. Trello renders
//! label colors that way, e.g. `"TMM (black_dark)"` → `"TMM"`.
//!
//! Edge cases:
//! - no parenthetical: the label is used as-is (trimmed)
//! - several parentheticals: only the last is removed, `"A (x) (y)"` → `"A (x)"`
//! - a parenthetical that is not at the end is kept
//! - nothing left after stripping: the card is `Uncategorized`
//! - a label naming `Uncategorized` itself joins the sentinel group

use crate::domain::{TeamKey, UNCATEGORIZED};
use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("valid regex"));

pub fn strip_trailing_parenthetical(label: &str) -> String {
    TRAILING_PARENTHETICAL.replace(label, "").trim().to_string()
}

pub fn team_key(labels: &[String], target_label: &str) -> TeamKey {
    let Some(label) = labels.iter().find(|l| l.as_str() != target_label && !l.trim().is_empty())
    else {
        return TeamKey::Uncategorized;
    };

    let name = strip_trailing_parenthetical(label);
    if name.is_empty() || name == UNCATEGORIZED {
        TeamKey::Uncategorized
    } else {
        TeamKey::Named(name)
    }
}
