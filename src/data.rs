// Embedded sample dictionary
// A small Plover-style dictionary compiled into the binary

use crate::dictionary::{Dictionary, LoadStats};
use crate::types::DictionaryError;
use std::path::Path;

/// Sample stroke -> translation dictionary (JSON)
pub const SAMPLE_DICTIONARY: &str = include_str!("../data/sample.json");

/// Name reported for the embedded dictionary in logs and errors
pub const SAMPLE_SOURCE: &str = "<embedded sample.json>";

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    /// Raw JSON of the sample dictionary
    pub fn sample_json() -> &'static str {
        SAMPLE_DICTIONARY
    }

    /// Index built from the sample dictionary
    pub fn sample_dictionary() -> Result<Dictionary, DictionaryError> {
        let mut dictionary = Dictionary::new();
        Self::load_sample(&mut dictionary)?;
        Ok(dictionary)
    }

    /// Add the sample entries to an existing index
    pub fn load_sample(dictionary: &mut Dictionary) -> Result<LoadStats, DictionaryError> {
        dictionary.load_json(SAMPLE_DICTIONARY, Path::new(SAMPLE_SOURCE))
    }
}
