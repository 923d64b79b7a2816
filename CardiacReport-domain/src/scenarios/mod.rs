//! Clinical scenario (beleid) catalog.
//!
//! A read-only catalog of management scenarios: each entry couples a
//! scenario name to a short description and one or more plan text blocks
//! that clinicians paste into the policy section of a report.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

mod catalog;

/// One clinical scenario with its plan text
#[derive(Debug, Clone, Serialize)]
pub struct ClinicalScenario {
    /// Scenario name, unique within the catalog
    pub name: &'static str,

    /// One-line description
    pub description: &'static str,

    /// Plan text blocks in presentation order
    pub plan: &'static [&'static str],
}

static CATALOG: Lazy<IndexMap<&'static str, &'static ClinicalScenario>> = Lazy::new(|| {
    catalog::SCENARIOS
        .iter()
        .map(|scenario| (scenario.name, scenario))
        .collect()
});

/// All scenarios in catalog order
pub fn all() -> impl Iterator<Item = &'static ClinicalScenario> {
    CATALOG.values().copied()
}

/// Number of scenarios in the catalog
pub fn count() -> usize {
    CATALOG.len()
}

/// Exact-name lookup
pub fn get(name: &str) -> Option<&'static ClinicalScenario> {
    CATALOG.get(name).copied()
}

/// Case-insensitive substring search over name and description
pub fn search(query: &str) -> Vec<&'static ClinicalScenario> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return all().collect();
    }
    all()
        .filter(|scenario| {
            scenario.name.to_lowercase().contains(&needle)
                || scenario.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_not_empty_and_names_are_unique() {
        assert!(count() >= 10);
        assert_eq!(count(), catalog::SCENARIOS.len());
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let first = all().next().unwrap();
        assert_eq!(first.name, catalog::SCENARIOS[0].name);
    }

    #[test]
    fn test_get_exact_name() {
        let scenario = get("Atriumflutter").unwrap();
        assert!(scenario.description.contains("anticoagulatie"));
        assert!(!scenario.plan.is_empty());
        assert!(get("atriumflutter").is_none()); // lookup is exact
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search("BRUGADA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Brugada syndroom (BrS)");
    }

    #[test]
    fn test_search_matches_description() {
        let hits = search("terugbetalingscriteria");
        assert!(hits.iter().any(|s| s.name == "ICD RIZIV Criteria"));
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        assert_eq!(search("  ").len(), count());
    }

    #[test]
    fn test_every_plan_block_has_content() {
        for scenario in all() {
            assert!(!scenario.plan.is_empty(), "{} has no plan", scenario.name);
            for block in scenario.plan {
                assert!(!block.trim().is_empty(), "{} has an empty block", scenario.name);
            }
        }
    }
}
