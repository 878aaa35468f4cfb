//! Year index: the selectable years derived from the loaded records.

use std::collections::BTreeSet;

use crate::tournament::TournamentRecord;

/// Unique, non-empty `year` values sorted ascending by string comparison.
#[must_use]
pub fn distinct_years(records: &[TournamentRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.year.as_str())
        .filter(|y| !y.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Initial year selection.
///
/// Prefers `current_year` when it is one of `years`, then the first
/// available year, then the empty string.
#[must_use]
pub fn default_year(years: &[String], current_year: i32) -> String {
    let current = current_year.to_string();
    if years.contains(&current) {
        return current;
    }
    years.first().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str) -> TournamentRecord {
        TournamentRecord {
            name: format!("Open {year}"),
            location: "Somewhere".to_string(),
            year: year.to_string(),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn distinct_years_dedups_and_sorts() {
        let records = vec![
            record("2024"),
            record("2022"),
            record("2024"),
            record("2023"),
            record("2022"),
        ];
        assert_eq!(distinct_years(&records), vec!["2022", "2023", "2024"]);
    }

    #[test]
    fn distinct_years_skips_empty_years() {
        let records = vec![record(""), record("2021"), record("")];
        assert_eq!(distinct_years(&records), vec!["2021"]);
    }

    #[test]
    fn distinct_years_sorts_lexicographically() {
        let records = vec![record("999"), record("2024"), record("10000")];
        assert_eq!(distinct_years(&records), vec!["10000", "2024", "999"]);
    }

    #[test]
    fn distinct_years_of_empty_store_is_empty() {
        assert!(distinct_years(&[]).is_empty());
    }

    #[test]
    fn default_year_prefers_current_year() {
        let years = vec!["2023".to_string(), "2024".to_string(), "2025".to_string()];
        assert_eq!(default_year(&years, 2024), "2024");
    }

    #[test]
    fn default_year_falls_back_to_first_year() {
        let years = vec!["2019".to_string(), "2020".to_string()];
        assert_eq!(default_year(&years, 2026), "2019");
    }

    #[test]
    fn default_year_is_empty_without_years() {
        assert_eq!(default_year(&[], 2026), "");
    }
}
