use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::Task;

/// Returns the ids of redundant recurring instances.
///
/// Tasks sharing an identical marker are duplicates of one (template, date)
/// claim; the earliest-created survives (ties broken by id) and the rest
/// are reported for deletion. Tasks without a marker are ignored. This is
/// reactive correction for races the guard cannot see, e.g. two separate
/// process instances materializing the same day.
pub fn find_duplicates(tasks: &[Task]) -> Vec<Uuid> {
    let mut groups: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        if let Some(marker) = task.recurring_marker.as_deref() {
            groups.entry(marker).or_default().push(task);
        }
    }

    let mut duplicates = Vec::new();
    for (_, mut group) in groups {
        if group.len() < 2 {
            continue;
        }
        group.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        duplicates.extend(group.into_iter().skip(1).map(|t| t.id));
    }
    duplicates
}
