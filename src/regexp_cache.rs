use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled-pattern cache keyed by the pattern text.
///
/// Formatting metadata carries its rules as regex source strings, and the
/// same handful of patterns is compiled over and over while a number is
/// typed. Entries live for the whole process.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_string())
            .or_try_insert_with(|| regex::Regex::new(pattern).map(Arc::new))?;
        Ok(entry.value().clone())
    }
}
