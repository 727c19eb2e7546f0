use std::collections::HashSet;

/// Runtime-scoped record of claimed recurring markers.
///
/// The guard lives exactly as long as the process session and is never
/// persisted; after a restart it is rebuilt by seeding from the live task
/// set and, best-effort, the persisted task list. Claiming a marker
/// synchronously before the corresponding async create is issued is the
/// engine's sole defence against double-creation within a session.
#[derive(Debug, Default)]
pub struct RecurrenceGuard {
    claimed: HashSet<String>,
}

impl RecurrenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-inserts already-known markers. Idempotent.
    pub fn seed<I>(&mut self, markers: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.claimed.extend(markers);
    }

    pub fn has(&self, marker: &str) -> bool {
        self.claimed.contains(marker)
    }

    /// Idempotent insert. Returns true if the marker was newly claimed.
    pub fn claim(&mut self, marker: &str) -> bool {
        self.claimed.insert(marker.to_string())
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_markers_are_known() {
        let mut guard = RecurrenceGuard::new();
        guard.seed(vec![
            "[recurring:T1:2024-06-01]".to_string(),
            "[recurring:T2:2024-06-01]".to_string(),
        ]);

        assert!(guard.has("[recurring:T1:2024-06-01]"));
        assert!(guard.has("[recurring:T2:2024-06-01]"));
        assert!(!guard.has("[recurring:T3:2024-06-01]"));
        assert_eq!(guard.len(), 2);
    }

    #[test]
    fn claim_is_idempotent() {
        let mut guard = RecurrenceGuard::new();

        assert!(guard.claim("[recurring:T1:2024-06-01]"));
        assert!(!guard.claim("[recurring:T1:2024-06-01]"));
        assert_eq!(guard.len(), 1);
        assert!(guard.has("[recurring:T1:2024-06-01]"));
    }

    #[test]
    fn seeding_twice_does_not_duplicate() {
        let mut guard = RecurrenceGuard::new();
        let markers = vec!["[recurring:T1:2024-06-01]".to_string()];
        guard.seed(markers.clone());
        guard.seed(markers);
        assert_eq!(guard.len(), 1);
    }
}
