use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::normalizer::{classify, normalize, CodeKind};
use crate::types::CountryScoreRecord;

/// Lookup from identifier to score record, borrowed for one render pass.
///
/// Records are registered under their own code; records keyed by a 3-letter
/// or numeric code are also registered under the derived 2-letter code. A
/// derived alias never displaces a record's own code.
#[derive(Debug, Default)]
pub struct CountryScoreIndex<'a> {
    by_id: HashMap<String, &'a CountryScoreRecord>,
}

impl<'a> CountryScoreIndex<'a> {
    pub fn build(records: &'a [CountryScoreRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len() * 2);
        let mut aliases: Vec<(String, &'a CountryScoreRecord)> = Vec::new();

        for record in records {
            let own = record.iso_code.trim().to_ascii_uppercase();
            if own.is_empty() {
                continue;
            }
            if let Some(derived) = derived_alpha2(&own) {
                if derived != own {
                    aliases.push((derived, record));
                }
            }
            by_id.insert(own, record);
        }

        for (alias, record) in aliases {
            if let Entry::Vacant(slot) = by_id.entry(alias) {
                slot.insert(record);
            }
        }

        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a CountryScoreRecord> {
        let key = id.trim().to_ascii_uppercase();
        self.by_id.get(&key).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

fn derived_alpha2(code: &str) -> Option<String> {
    match classify(code)? {
        CodeKind::Alpha2 => None,
        kind @ (CodeKind::Alpha3 | CodeKind::Numeric) => normalize(code, kind),
    }
}
