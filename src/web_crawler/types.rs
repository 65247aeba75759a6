// src/web_crawler/types.rs
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Contacts found on a single fetched page, deduplicated within that page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub phone_numbers: HashSet<String>,
    pub email_addresses: HashSet<String>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.phone_numbers.is_empty() && self.email_addresses.is_empty()
    }
}

/// Run-wide accumulator: the union of every page's contacts across all
/// seeds, with exact-string deduplication. Ordered sets so output rows
/// come out lexicographically sorted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContactBook {
    pub phone_numbers: BTreeSet<String>,
    pub email_addresses: BTreeSet<String>,
}

impl ContactBook {
    pub fn absorb(&mut self, page: ExtractionResult) {
        self.phone_numbers.extend(page.phone_numbers);
        self.email_addresses.extend(page.email_addresses);
    }

    pub fn is_empty(&self) -> bool {
        self.phone_numbers.is_empty() && self.email_addresses.is_empty()
    }
}
