//! Static species reference facts
//!
//! Hand-curated per-species descriptions of why a species is poached.
//! Keys are normalized at construction time; lookups normalize the same
//! way, so callers pass user input as-is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical lookup form of a taxon string.
pub fn normalize_taxon(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Curated reference entry for one species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceFact {
    pub common_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_threats: Option<Vec<String>>,
    pub poaching_reason: String,
}

/// Immutable reference-fact table keyed by normalized taxon.
#[derive(Debug, Clone, Default)]
pub struct FactTable {
    entries: HashMap<String, ReferenceFact>,
}

impl FactTable {
    /// Build the built-in table of curated species.
    pub fn builtin() -> Self {
        let mut table = Self::default();

        table.insert(
            "Alligator mississippiensis",
            "American Alligator",
            &["luxury leather"],
            "is targeted for its high-grade hide, prized in luxury leather goods.",
        );
        table.insert(
            "Crocodylus niloticus",
            "Nile Crocodile",
            &["skins", "bushmeat"],
            "is hunted for both skin and meat in local and international markets.",
        );
        table.insert(
            "Crocodylus porosus",
            "Saltwater Crocodile",
            &["luxury leather"],
            "possesses the most valuable crocodilian skin due to its small, uniform scale pattern.",
        );
        table.insert(
            "Python bivittatus",
            "Burmese Python",
            &["luxury leather", "exotic pets"],
            "is exploited for the luxury leather market and exotic pet trade.",
        );
        table.insert(
            "Python reticulatus",
            "Reticulated Python",
            &["luxury leather"],
            "is the world's longest snake, making its skin highly profitable for large leather items.",
        );
        table.insert(
            "Varanus salvator",
            "Asian Water Monitor",
            &["skins"],
            "is targeted for its exceptionally durable and flexible skin, used in watchbands.",
        );

        table
    }

    fn insert(&mut self, taxon: &str, common_name: &str, threats: &[&str], reason: &str) {
        self.entries.insert(
            normalize_taxon(taxon),
            ReferenceFact {
                common_name: common_name.to_string(),
                primary_threats: Some(threats.iter().map(|t| t.to_string()).collect()),
                poaching_reason: reason.to_string(),
            },
        );
    }

    /// Case- and whitespace-insensitive lookup.
    pub fn get(&self, taxon: &str) -> Option<&ReferenceFact> {
        self.entries.get(&normalize_taxon(taxon))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_taxon() {
        assert_eq!(normalize_taxon("  PYTHON Bivittatus "), "python bivittatus");
        assert_eq!(normalize_taxon("python bivittatus"), "python bivittatus");
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let table = FactTable::builtin();
        let a = table.get("Python bivittatus").unwrap();
        let b = table.get("python bivittatus").unwrap();
        let c = table.get(" PYTHON BIVITTATUS ").unwrap();
        assert_eq!(a.common_name, "Burmese Python");
        assert_eq!(b.common_name, a.common_name);
        assert_eq!(c.common_name, a.common_name);
    }

    #[test]
    fn test_unknown_species_absent() {
        let table = FactTable::builtin();
        assert!(table.get("Rattus norvegicus").is_none());
        assert_eq!(table.len(), 6);
    }
}
