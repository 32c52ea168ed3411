//! Collision grouping and extra-id assignment.

use std::collections::BTreeMap;

use tracing::debug;

use shelver_model::{ExtraIdCounter, HierarchyKey, NameError, Record};

/// Group the whole record set by hierarchy key and assign letter ids to
/// every member of a group with more than one record.
///
/// Ids are assigned in original row order, starting at `'a'` per group.
/// Singleton groups get no id. The result maps row number to id.
pub fn assign_extra_ids(records: &[Record]) -> Result<BTreeMap<usize, char>, NameError> {
    let mut groups: BTreeMap<HierarchyKey, Vec<usize>> = BTreeMap::new();
    for record in records {
        groups.entry(record.hierarchy_key()).or_default().push(record.row);
    }

    let mut ids = BTreeMap::new();
    for (key, members) in &groups {
        if members.len() < 2 {
            continue;
        }
        debug!(key = %key, members = members.len(), "naming collision");
        let mut counter = ExtraIdCounter::new();
        for row in members {
            ids.insert(*row, counter.next_id(key)?);
        }
    }
    Ok(ids)
}
