//! Text normalization for card titles and descriptions

use std::collections::BTreeMap;

/// Collapse `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Substitute each emoji shortcode (e.g. `:warning:`) with its text form.
pub fn replace_emoji_codes(text: &str, replacements: &BTreeMap<String, String>) -> String {
    let mut out = text.to_string();
    for (code, replacement) in replacements {
        if code.is_empty() {
            continue;
        }
        if out.contains(code.as_str()) {
            out = out.replace(code.as_str(), replacement);
        }
    }
    out
}

/// Escape characters that would end Markdown link text early.
pub fn escape_link_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '[' | ']' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Percent-encode characters that would break a Markdown link destination.
pub fn escape_link_target(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            ' ' => out.push_str("%20"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '\t' => out.push_str("%09"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_emoji_replacements;

    #[test]
    fn normalizes_windows_and_classic_mac_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn replaces_default_emoji_codes() {
        let text = replace_emoji_codes(
            ":warning: rollout blocked :question:",
            &default_emoji_replacements(),
        );
        assert_eq!(text, "(important note) rollout blocked (needs clarification)");
    }

    #[test]
    fn leaves_unknown_codes_alone() {
        let text = replace_emoji_codes(":rocket: launch", &default_emoji_replacements());
        assert_eq!(text, ":rocket: launch");
    }

    #[test]
    fn escapes_brackets_in_link_text() {
        assert_eq!(escape_link_text("[WIP] queue"), r"\[WIP\] queue");
    }

    #[test]
    fn link_targets_keep_plain_urls_intact() {
        assert_eq!(escape_link_target("https://trello.com/c/abc"), "https://trello.com/c/abc");
        assert_eq!(escape_link_target("https://x/a b(c)"), "https://x/a%20b%28c%29");
    }
}
