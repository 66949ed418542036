//! End-to-end tests for the report pipeline

use similar_asserts::assert_eq;
use trello_report::domain::TeamKey;
use trello_report::load::parse_csv_str;
use trello_report::{build_report, InputRecord, ReportConfig};

const REPORTABLE: &str = "Reportable (black_dark)";

fn card(id: &str, name: &str, labels: &[&str]) -> InputRecord {
    InputRecord {
        id: id.to_string(),
        name: name.to_string(),
        url: String::new(),
        description: String::new(),
        labels: labels.iter().map(|s| s.to_string()).collect(),
        list_name: "Project List".to_string(),
        archived: false,
        board_name: None,
        due_date: None,
    }
}

fn team_order(records: &[InputRecord]) -> Vec<String> {
    let outcome = build_report(records, &ReportConfig::default()).expect("report");
    outcome.groups.iter().map(|g| g.team.to_string()).collect()
}

#[test]
fn priority_teams_lead_the_report() {
    let records = vec![
        card("1", "A", &[REPORTABLE, "TMM"]),
        card("2", "B", &[REPORTABLE, "SRE"]),
        card("3", "C", &[REPORTABLE, "Zeta"]),
    ];
    let outcome = build_report(&records, &ReportConfig::default()).expect("report");

    let expected = "# Transaction Management and Middleware\n\
                    \n## TMM\n\n### A\n\
                    \n## SRE\n\n### B\n\
                    \n## Zeta\n\n### C\n";
    assert_eq!(outcome.document, expected);
}

#[test]
fn input_order_does_not_change_group_order() {
    let records = vec![
        card("1", "Late", &[REPORTABLE, "Zeta"]),
        card("2", "Loose", &[REPORTABLE]),
        card("3", "Ops", &[REPORTABLE, "SRE (red)"]),
        card("4", "Apps", &["alpha", REPORTABLE]),
        card("5", "Core", &[REPORTABLE, "TMM (black_dark)"]),
    ];
    assert_eq!(team_order(&records), vec!["TMM", "SRE", "alpha", "Zeta", "Uncategorized"]);
}

#[test]
fn lone_uncategorized_card_still_renders() {
    let records = vec![card("1", "Orphan", &[REPORTABLE])];
    let outcome = build_report(&records, &ReportConfig::default()).expect("report");
    assert_eq!(outcome.groups.len(), 1);
    assert_eq!(outcome.groups[0].team, TeamKey::Uncategorized);
    assert!(outcome.document.ends_with("\n## Uncategorized\n\n### Orphan\n"));
}

#[test]
fn uncategorized_label_shares_the_sentinel_section() {
    let records = vec![
        card("1", "Labeled", &[REPORTABLE, "Uncategorized (gray)"]),
        card("2", "Core", &[REPORTABLE, "TMM"]),
        card("3", "Orphan", &[REPORTABLE]),
    ];
    let outcome = build_report(&records, &ReportConfig::default()).expect("report");

    assert_eq!(outcome.document.matches("## Uncategorized\n").count(), 1);
    assert_eq!(outcome.groups.len(), 2);
    let last = outcome.groups.last().expect("groups");
    assert_eq!(last.team, TeamKey::Uncategorized);
    let ids: Vec<&str> = last.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn entries_keep_input_order_within_group() {
    let records = vec![
        card("1", "Second alphabetically", &[REPORTABLE, "SRE"]),
        card("2", "Another", &[REPORTABLE, "TMM"]),
        card("3", "First alphabetically", &[REPORTABLE, "SRE"]),
    ];
    let outcome = build_report(&records, &ReportConfig::default()).expect("report");
    let sre = outcome.groups.iter().find(|g| g.team.as_str() == "SRE").expect("sre group");
    let ids: Vec<&str> = sre.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn archived_and_unlabeled_cards_never_render() {
    let mut archived = card("1", "Old work", &[REPORTABLE, "TMM"]);
    archived.archived = true;
    let unlabeled = card("2", "Not reportable", &["TMM"]);
    let mut other_list = card("3", "Elsewhere", &[REPORTABLE, "TMM"]);
    other_list.list_name = "Done".to_string();
    let kept = card("4", "Current", &[REPORTABLE, "TMM"]);

    let records = vec![archived, unlabeled, other_list, kept];
    let outcome = build_report(&records, &ReportConfig::default()).expect("report");
    assert_eq!(outcome.matched, 1);
    assert!(outcome.document.contains("### Current"));
    assert!(!outcome.document.contains("Old work"));
    assert!(!outcome.document.contains("Not reportable"));
    assert!(!outcome.document.contains("Elsewhere"));

    let mut config = ReportConfig::default();
    config.criteria.include_archived = true;
    let outcome = build_report(&records, &config).expect("report");
    assert!(outcome.document.contains("Old work"));
}

#[test]
fn whitespace_title_is_skipped_and_batch_continues() {
    let records = vec![
        card("1", "   ", &[REPORTABLE, "TMM"]),
        card("2", "Kept", &[REPORTABLE, "TMM"]),
    ];
    let outcome = build_report(&records, &ReportConfig::default()).expect("report");
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].id, "1");
    assert_eq!(outcome.rendered(), 1);
}

#[test]
fn every_entry_lands_in_exactly_one_group() {
    let records: Vec<InputRecord> = (0..20)
        .map(|i| {
            let team = ["TMM", "SRE", "web", "Data", "ops"][i % 5];
            card(&format!("c{i}"), &format!("Card {i}"), &[REPORTABLE, team])
        })
        .collect();
    let outcome = build_report(&records, &ReportConfig::default()).expect("report");

    let mut seen: Vec<&str> =
        outcome.groups.iter().flat_map(|g| g.entries.iter().map(|e| e.id.as_str())).collect();
    assert_eq!(seen.len(), 20);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 20);

    for group in &outcome.groups {
        let positions: Vec<usize> = group
            .entries
            .iter()
            .map(|e| records.iter().position(|r| r.id == e.id).expect("source record"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "entries out of source order");
    }
}

#[test]
fn identical_input_yields_identical_output() {
    let records = vec![
        card("1", "A", &[REPORTABLE, "web"]),
        card("2", "B", &[REPORTABLE, "Web"]),
        card("3", "C", &[REPORTABLE]),
    ];
    let first = build_report(&records, &ReportConfig::default()).expect("report");
    let second = build_report(&records, &ReportConfig::default()).expect("report");
    assert_eq!(first.document, second.document);
}

#[test]
fn empty_input_is_exactly_the_header() {
    let outcome = build_report(&[], &ReportConfig::default()).expect("report");
    assert_eq!(outcome.document, "# Transaction Management and Middleware\n");
}

#[test]
fn csv_export_renders_end_to_end() {
    let csv = "Card ID,Card Name,Card URL,Card Description,Labels,List Name,Archived\n\
               c1,Broker upgrade,https://trello.com/c/c1,\":warning: Needs window\",\"Reportable (black_dark), TMM (black_dark)\",Project List,false\n\
               c2,Pager rotation,,,\"SRE (red), Reportable (black_dark)\",Project List,false\n\
               c3,Archived thing,,,\"Reportable (black_dark), SRE (red)\",Project List,true\n";
    let loaded = parse_csv_str(csv).expect("parse");
    let outcome = build_report(&loaded.records, &ReportConfig::default()).expect("report");

    let expected = "# Transaction Management and Middleware\n\
                    \n## TMM\n\
                    \n### [Broker upgrade](https://trello.com/c/c1)\n\
                    \n> (important note) Needs window\n\
                    \n## SRE\n\
                    \n### Pager rotation\n";
    assert_eq!(outcome.document, expected);
}
