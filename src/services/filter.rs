// src/services/filter.rs

//! Exclusion filter for noise disclosures.

use std::collections::HashSet;

use crate::models::{DisclosureRecord, FilterConfig};

/// Immutable exclusion table.
///
/// Keywords and codes form one pattern list. A record is excluded when its
/// code equals a pattern, or when its title contains a pattern as a
/// case-sensitive substring.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    patterns: Vec<String>,
    exact: HashSet<String>,
    match_codes: bool,
}

impl ExclusionSet {
    /// Build the table from configuration. Empty patterns are dropped.
    pub fn new(config: &FilterConfig) -> Self {
        let mut exact = HashSet::new();
        let mut patterns = Vec::new();
        for pattern in config.keywords.iter().chain(&config.codes) {
            if !pattern.is_empty() && exact.insert(pattern.clone()) {
                patterns.push(pattern.clone());
            }
        }

        Self {
            patterns,
            exact,
            match_codes: config.match_codes,
        }
    }

    /// Whether the record is noise.
    pub fn is_excluded(&self, record: &DisclosureRecord) -> bool {
        self.matches(&record.code, &record.title)
    }

    /// Whether a code/title pair is noise.
    pub fn matches(&self, code: &str, title: &str) -> bool {
        (self.match_codes && self.exact.contains(code))
            || self.patterns.iter().any(|p| title.contains(p.as_str()))
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}
