// Steno Dictionary Index
// Loads stroke -> translation dictionaries and finds strokes by translation

use crate::types::{DictionaryError, LookupResult, MatchKind};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Translations shorter than this are not indexed
const MIN_TRANSLATION_CHARS: usize = 2;

/// Characters of a translation that make up its bucket key
const BUCKET_KEY_CHARS: usize = 3;

/// Bumped whenever the snapshot layout changes
const SNAPSHOT_VERSION: u32 = 1;

/// Bucket key for a translation or search term: its first three characters,
/// lowercased
///
/// # Example
///
/// ```
/// use steno_lookup::dictionary::bucket_key;
///
/// assert_eq!(bucket_key("Combination"), "com");
/// assert_eq!(bucket_key("Hi"), "hi");
/// ```
pub fn bucket_key(text: &str) -> String {
    text.chars()
        .take(BUCKET_KEY_CHARS)
        .collect::<String>()
        .to_lowercase()
}

/// One translation and every stroke that writes it, in load order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub translation: String,
    pub strokes: Vec<String>,
}

/// Translations sharing a bucket key, kept in first-seen order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Bucket {
    entries: Vec<Entry>,
    positions: FxHashMap<String, usize>,
}

impl Bucket {
    fn push(&mut self, translation: &str, stroke: &str) {
        match self.positions.get(translation) {
            Some(&i) => self.entries[i].strokes.push(stroke.to_string()),
            None => {
                self.positions.insert(translation.to_string(), self.entries.len());
                self.entries.push(Entry {
                    translation: translation.to_string(),
                    strokes: vec![stroke.to_string()],
                });
            }
        }
    }

    fn get(&self, translation: &str) -> Option<&Entry> {
        self.positions.get(translation).map(|&i| &self.entries[i])
    }
}

/// Counters for one loaded dictionary file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Strokes added to the index
    pub indexed: usize,
    /// Strokes already defined by an earlier dictionary
    pub duplicates: usize,
    /// Strokes whose translation was too short to index
    pub too_short: usize,
}

/// Size of the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Strokes indexed
    pub entries: usize,
    /// Distinct translations
    pub translations: usize,
    /// Distinct bucket keys
    pub buckets: usize,
}

/// Reverse index over one or more steno dictionaries.
///
/// Dictionaries are loaded in order and the first definition of a stroke
/// wins. Strokes are grouped by bucket key and then by translation so a
/// search only walks translations that share the term's first letters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    buckets: FxHashMap<String, Bucket>,
    used_strokes: FxHashSet<String>,
    entries: usize,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    dictionary: &'a Dictionary,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    dictionary: Dictionary,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one stroke definition.
    ///
    /// Returns false if the stroke was skipped, either because an earlier
    /// dictionary already defined it or because the translation is too short.
    /// A skipped short translation still claims its stroke.
    pub fn insert(&mut self, stroke: &str, translation: &str) -> bool {
        if !self.used_strokes.insert(stroke.to_string()) {
            return false;
        }
        if translation.chars().count() < MIN_TRANSLATION_CHARS {
            return false;
        }
        self.buckets
            .entry(bucket_key(translation))
            .or_default()
            .push(translation, stroke);
        self.entries += 1;
        true
    }

    /// Load a dictionary from JSON text; `source` is only used in errors.
    ///
    /// The document must be an object mapping strokes to translation
    /// strings. Entries are read in document order.
    pub fn load_json(&mut self, json: &str, source: &Path) -> Result<LoadStats, DictionaryError> {
        let value: Value = serde_json::from_str(json).map_err(|e| DictionaryError::Json {
            path: source.to_path_buf(),
            source: e,
        })?;
        let Value::Object(map) = value else {
            return Err(DictionaryError::NotAnObject {
                path: source.to_path_buf(),
            });
        };

        let mut stats = LoadStats::default();
        for (stroke, translation) in &map {
            let Value::String(translation) = translation else {
                return Err(DictionaryError::InvalidEntry {
                    path: source.to_path_buf(),
                    stroke: stroke.clone(),
                });
            };
            if self.used_strokes.contains(stroke) {
                stats.duplicates += 1;
            } else if self.insert(stroke, translation) {
                stats.indexed += 1;
            } else {
                stats.too_short += 1;
            }
        }

        debug!(
            "loaded {}: {} indexed, {} duplicate strokes, {} short translations",
            source.display(),
            stats.indexed,
            stats.duplicates,
            stats.too_short
        );
        Ok(stats)
    }

    /// Load one dictionary file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadStats, DictionaryError> {
        let path = path.as_ref();
        let json = read(path)?;
        self.load_json(&json, path)
    }

    /// Load every dictionary listed in an order file.
    ///
    /// The order file is a JSON array of paths, resolved relative to the
    /// order file's own directory. Dictionaries earlier in the list take
    /// precedence.
    ///
    /// # Returns
    /// Combined counters over all listed files
    pub fn load_order_file(&mut self, path: impl AsRef<Path>) -> Result<LoadStats, DictionaryError> {
        let path = path.as_ref();
        let json = read(path)?;
        let invalid = || DictionaryError::InvalidOrderFile {
            path: path.to_path_buf(),
        };

        let value: Value = serde_json::from_str(&json).map_err(|e| DictionaryError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        let Value::Array(items) = value else {
            return Err(invalid());
        };
        let listed: Vec<&str> = items
            .iter()
            .map(Value::as_str)
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let mut total = LoadStats::default();
        for entry in listed {
            let stats = self.load_file(base.join(entry))?;
            total.indexed += stats.indexed;
            total.duplicates += stats.duplicates;
            total.too_short += stats.too_short;
        }
        Ok(total)
    }

    /// Strokes for a translation equal to `term` (case-sensitive)
    pub fn exact(&self, term: &str) -> &[String] {
        self.buckets
            .get(&bucket_key(term))
            .and_then(|bucket| bucket.get(term))
            .map(|entry| entry.strokes.as_slice())
            .unwrap_or(&[])
    }

    /// Find strokes whose translation is or starts with `term`.
    ///
    /// The term is trimmed; one character or less finds nothing. Exact
    /// matches come first. Prefix matches are the other translations in the
    /// term's bucket that start with it ignoring case, in load order. Prefix
    /// enumeration stops once more than `inexact_limit` translations have
    /// been accepted.
    ///
    /// # Returns
    /// One unexplained result per stroke
    pub fn search(&self, term: &str, inexact_limit: usize) -> Vec<LookupResult> {
        let term = term.trim();
        if term.chars().count() <= 1 {
            return Vec::new();
        }
        let Some(bucket) = self.buckets.get(&bucket_key(term)) else {
            return Vec::new();
        };

        let mut results: Vec<LookupResult> = bucket
            .get(term)
            .into_iter()
            .flat_map(|entry| entry.strokes.iter())
            .map(|stroke| LookupResult::new(stroke.clone(), term.to_string(), MatchKind::Exact))
            .collect();

        let prefix = term.to_lowercase();
        let mut accepted = 0;
        for entry in &bucket.entries {
            if accepted > inexact_limit {
                break;
            }
            if entry.translation == term || !entry.translation.to_lowercase().starts_with(&prefix) {
                continue;
            }
            accepted += 1;
            results.extend(entry.strokes.iter().map(|stroke| {
                LookupResult::new(stroke.clone(), entry.translation.clone(), MatchKind::Prefix)
            }));
        }
        results
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            entries: self.entries,
            translations: self.buckets.values().map(|b| b.entries.len()).sum(),
            buckets: self.buckets.len(),
        }
    }

    /// Serialize the index to a compact binary snapshot
    pub fn to_snapshot(&self) -> Result<Vec<u8>, DictionaryError> {
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            dictionary: self,
        };
        let bytes =
            bincode::serialize(&snapshot).map_err(|e| DictionaryError::Snapshot(e.to_string()))?;
        debug!("snapshot written: {} bytes, {} entries", bytes.len(), self.entries);
        Ok(bytes)
    }

    /// Rebuild an index from [`Dictionary::to_snapshot`] output
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, DictionaryError> {
        let snapshot: Snapshot =
            bincode::deserialize(bytes).map_err(|e| DictionaryError::Snapshot(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(DictionaryError::Snapshot(format!(
                "version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        debug!("snapshot read: {} entries", snapshot.dictionary.entries);
        Ok(snapshot.dictionary)
    }

    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        fs::write(path, self.to_snapshot()?).map_err(|e| io_error(path, e))
    }

    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
        Self::from_snapshot(&bytes)
    }
}

fn read(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: std::io::Error) -> DictionaryError {
    DictionaryError::Io {
        path: PathBuf::from(path),
        source,
    }
}
