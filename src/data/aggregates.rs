use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const EU_ID: &str = "EU";
pub const EU_NAME: &str = "European Union";

pub const EU_MEMBERS: &[&str] = &[
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT",
    "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
];

/// A synthetic entity whose record is shown on all of its member shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub id: String,
    pub name: String,
    pub members: BTreeSet<String>,
}

impl Aggregate {
    pub fn new<I, S>(id: &str, name: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: id.trim().to_ascii_uppercase(),
            name: name.to_string(),
            members: members
                .into_iter()
                .map(|m| m.as_ref().trim().to_ascii_uppercase())
                .collect(),
        }
    }

    pub fn european_union() -> Self {
        Self::new(EU_ID, EU_NAME, EU_MEMBERS.iter().copied())
    }

    pub fn has_member(&self, canonical_id: &str) -> bool {
        self.members.contains(canonical_id)
    }
}

pub fn default_aggregates() -> Vec<Aggregate> {
    vec![Aggregate::european_union()]
}
