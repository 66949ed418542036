//! Markdown report rendering

use crate::domain::{Group, RenderOptions, ReportEntry};
use crate::utils::{escape_link_target, escape_link_text};

/// Render ordered groups into the report document.
///
/// ```text
/// # {header}
///
/// ## {team}
///
/// ### [{title}]({link})
///
/// > {description line}
/// ```
///
/// Groups without entries are skipped. With no groups the output is the
/// header line alone.
pub fn render_markdown(header: &str, groups: &[Group], options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n", header.trim()));

    if let Some(generated_at) = &options.generated_at {
        out.push_str(&format!("\n*Generated on: {}*\n", generated_at));
    }

    for group in groups.iter().filter(|g| !g.entries.is_empty()) {
        out.push_str(&format!("\n## {}\n", group.team));
        for entry in &group.entries {
            render_entry(&mut out, entry);
        }
    }

    out
}

fn render_entry(out: &mut String, entry: &ReportEntry) {
    if entry.link.is_empty() {
        out.push_str(&format!("\n### {}\n", entry.title));
    } else {
        out.push_str(&format!(
            "\n### [{}]({})\n",
            escape_link_text(&entry.title),
            escape_link_target(&entry.link)
        ));
    }

    if entry.description.is_empty() {
        return;
    }
    out.push('\n');
    for line in entry.description.split('\n') {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str(">\n");
        } else {
            out.push_str(&format!("> {}\n", line));
        }
    }
}
