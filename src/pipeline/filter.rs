//! Row selection by list, label and archived flag

use crate::domain::{FilterCriteria, InputRecord};

pub fn matches(record: &InputRecord, criteria: &FilterCriteria) -> bool {
    record.list_name == criteria.target_list
        && record.labels.iter().any(|l| *l == criteria.target_label)
        && (criteria.include_archived || !record.archived)
}

/// Records passing every predicate, in input order.
pub fn filter_records<'a>(
    records: &'a [InputRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a InputRecord> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}
