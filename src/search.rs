// Steno Search Engine
// Main API that looks up a word and explains every stroke found for it

use crate::data::DataLoader;
use crate::dictionary::{Dictionary, DictionaryStats};
use crate::matcher::{MatcherConfig, StrokeMatcher};
use crate::types::{DictionaryError, LookupResult, MatchResult};
use log::trace;

/// Search limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Prefix matches stop once more than this many translations are accepted
    pub inexact_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { inexact_limit: 50 }
    }
}

/// Main steno search engine
///
/// Combines:
/// - Dictionary lookup (exact and prefix matches by translation)
/// - Stroke matching (which keys write which part of the word)
pub struct StenoSearch {
    dictionary: Dictionary,
    matcher: StrokeMatcher,
    config: SearchConfig,
}

impl StenoSearch {
    /// Create a search engine over the embedded sample dictionary
    ///
    /// # Example
    /// ```
    /// # use steno_lookup::StenoSearch;
    /// let search = StenoSearch::new()?;
    /// let results = search.lookup("jog");
    /// assert_eq!(results[0].stroke, "SKWROG");
    /// # Ok::<(), steno_lookup::DictionaryError>(())
    /// ```
    pub fn new() -> Result<Self, DictionaryError> {
        Ok(Self::with_dictionary(DataLoader::sample_dictionary()?))
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            matcher: StrokeMatcher::new(),
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_matcher_config(mut self, config: MatcherConfig) -> Self {
        self.matcher = StrokeMatcher::with_config(config);
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Look up a word.
    ///
    /// # Arguments
    /// * `term` - word or phrase to find (trimmed; needs at least 2 characters)
    ///
    /// # Returns
    /// Exact matches first, then prefix matches in dictionary order, each
    /// with the matcher's explanation of its stroke
    pub fn lookup(&self, term: &str) -> Vec<LookupResult> {
        let found = self.dictionary.search(term, self.config.inexact_limit);
        trace!("{} strokes found for {:?}", found.len(), term);

        found
            .into_iter()
            .map(|result| {
                let explanation = self.matcher.match_stroke(&result.stroke, &result.translation);
                result.with_explanation(explanation)
            })
            .collect()
    }

    /// Like [`StenoSearch::lookup`] but keeps only the first `limit` results
    pub fn lookup_limit(&self, term: &str, limit: usize) -> Vec<LookupResult> {
        let mut results = self.lookup(term);
        results.truncate(limit);
        results
    }

    /// Explain one stroke against a translation, bypassing the dictionary
    pub fn explain(&self, stroke: &str, translation: &str) -> MatchResult {
        self.matcher.match_stroke(stroke, translation)
    }

    /// Get statistics about the loaded dictionary
    pub fn stats(&self) -> DictionaryStats {
        self.dictionary.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchKind;

    fn create_search() -> Result<StenoSearch, DictionaryError> {
        StenoSearch::new()
    }

    #[test]
    fn test_search_creation() -> Result<(), DictionaryError> {
        let search = create_search()?;
        assert!(search.stats().entries > 0);
        Ok(())
    }

    #[test]
    fn test_exact_lookup_is_explained() -> Result<(), DictionaryError> {
        let search = create_search()?;
        let results = search.lookup("jog");

        assert_eq!(results[0].stroke, "SKWROG");
        assert_eq!(results[0].kind, MatchKind::Exact);
        let explanation = results[0].explanation.as_ref().unwrap();
        assert_eq!(explanation.best_hint, "jog");
        Ok(())
    }

    #[test]
    fn test_exact_results_come_first() -> Result<(), DictionaryError> {
        let search = create_search()?;
        let results = search.lookup("jog");

        let first_prefix = results
            .iter()
            .position(|r| r.kind == MatchKind::Prefix)
            .unwrap();
        assert!(results[first_prefix..]
            .iter()
            .all(|r| r.kind == MatchKind::Prefix));
        Ok(())
    }

    #[test]
    fn test_lookup_limit() -> Result<(), DictionaryError> {
        let search = create_search()?;
        assert_eq!(search.lookup_limit("jog", 2).len(), 2);
        Ok(())
    }

    #[test]
    fn test_explain() -> Result<(), DictionaryError> {
        let search = create_search()?;
        let result = search.explain("THEUPBGS", "things");
        assert_eq!(result.best_hint, "things");
        Ok(())
    }

    #[test]
    fn test_with_config() -> Result<(), DictionaryError> {
        let search = create_search()?.with_config(SearchConfig { inexact_limit: 0 });
        // "jogs" is accepted, then the limit stops the walk
        let results = search.lookup("jog");
        assert_eq!(
            results.iter().filter(|r| r.kind == MatchKind::Prefix).count(),
            1
        );
        Ok(())
    }
}
