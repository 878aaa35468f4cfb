use tourneymap_core::{distinct_years, TournamentRecord};

/// In-memory, ordered tournament records.
///
/// Starts empty. [`TournamentStore::populate`] swaps in a complete record set
/// in one step; there is no incremental insert.
#[derive(Debug, Clone, Default)]
pub struct TournamentStore {
    records: Vec<TournamentRecord>,
}

impl TournamentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_records(records: Vec<TournamentRecord>) -> Self {
        Self { records }
    }

    /// Replaces the store contents with `records`.
    pub fn populate(&mut self, records: Vec<TournamentRecord>) {
        self.records = records;
    }

    #[must_use]
    pub fn records(&self) -> &[TournamentRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Selectable years, see [`distinct_years`].
    #[must_use]
    pub fn years(&self) -> Vec<String> {
        distinct_years(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, year: &str) -> TournamentRecord {
        TournamentRecord {
            name: name.to_string(),
            location: "Austin, TX".to_string(),
            year: year.to_string(),
            latitude: Some(30.27),
            longitude: Some(-97.74),
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = TournamentStore::new();
        assert!(store.is_empty());
        assert!(store.years().is_empty());
    }

    #[test]
    fn populate_replaces_previous_contents() {
        let mut store = TournamentStore::from_records(vec![record("Old", "2020")]);
        store.populate(vec![record("A", "2024"), record("B", "2023")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "A");
        assert_eq!(store.years(), vec!["2023", "2024"]);
    }
}
