// Steno Lookup Type Definitions
// Core types for decompositions, match results and dictionary errors

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Separator between the chords of a multi-chord stroke
pub const CHORD_SEPARATOR: char = '/';

/// Modifier key that may be absorbed into a neighbouring literal
pub const MODIFIER: char = '*';

/// One step of a decomposition: the chord text consumed and what it sounds like
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Substring of the chord (e.g. "SKWR")
    pub literal: String,

    /// Phonetic or spelling fragment it represents (e.g. "j")
    pub hint: String,
}

impl Segment {
    pub fn new(literal: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            hint: hint.into(),
        }
    }
}

/// An ordered partition of one chord into segments.
///
/// Concatenating the segment literals gives back the chord exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decomposition {
    pub segments: Vec<Segment>,
}

impl Decomposition {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The chord this decomposition covers
    pub fn literals(&self) -> String {
        self.segments.iter().map(|s| s.literal.as_str()).collect()
    }

    /// All hints joined in order
    pub fn hint(&self) -> String {
        self.segments.iter().map(|s| s.hint.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl std::fmt::Display for Decomposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", segment.literal, segment.hint)?;
        }
        Ok(())
    }
}

/// A decomposition together with its assembled hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub decomposition: Decomposition,
    pub hint: String,
}

impl From<Decomposition> for Candidate {
    fn from(decomposition: Decomposition) -> Self {
        let hint = decomposition.hint();
        Self {
            decomposition,
            hint,
        }
    }
}

/// Best explanation of a whole stroke against a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Chosen decomposition for each chord, in stroke order
    pub segments_per_chord: Vec<Decomposition>,

    /// Per-chord hints joined with '/'
    pub best_hint: String,

    /// Composite score of the chosen combination (0.0 if nothing scored)
    pub score: f64,

    /// True if an enumeration cap cut the search short
    pub truncated: bool,
}

impl MatchResult {
    /// The stroke the result explains, rebuilt from its segments
    pub fn stroke(&self) -> String {
        self.segments_per_chord
            .iter()
            .map(Decomposition::literals)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// How a dictionary entry relates to the searched term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Translation equals the term
    Exact,
    /// Translation starts with the term (case-insensitive)
    Prefix,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Exact => write!(f, "Exact"),
            MatchKind::Prefix => write!(f, "Prefix"),
        }
    }
}

/// One stroke found for a search term, with its explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    /// Stroke text as stored in the dictionary (e.g. "KPWEU/TPHAEUGS")
    pub stroke: String,

    /// Translation the stroke produces
    pub translation: String,

    pub kind: MatchKind,

    /// Segmentation of the stroke, if it has been explained
    pub explanation: Option<MatchResult>,
}

impl LookupResult {
    pub fn new(stroke: String, translation: String, kind: MatchKind) -> Self {
        Self {
            stroke,
            translation,
            kind,
            explanation: None,
        }
    }

    /// Attach the matcher's explanation
    pub fn with_explanation(mut self, explanation: MatchResult) -> Self {
        self.explanation = Some(explanation);
        self
    }
}

/// Dictionary loading errors
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid dictionary {}: expected an object of stroke to translation strings", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Invalid dictionary entry '{stroke}' in {}: translation must be a string", path.display())]
    InvalidEntry { path: PathBuf, stroke: String },

    #[error("Invalid order file {}: expected an array of dictionary paths", path.display())]
    InvalidOrderFile { path: PathBuf },

    #[error("Index snapshot is corrupt or incompatible: {0}")]
    Snapshot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decomposition(pairs: &[(&str, &str)]) -> Decomposition {
        Decomposition::new(pairs.iter().map(|&(l, h)| Segment::new(l, h)).collect())
    }

    #[test]
    fn test_decomposition_literals_and_hint() {
        let d = decomposition(&[("TH", "th"), ("EU", "i"), ("PB", "n"), ("G", "g"), ("S", "s")]);
        assert_eq!(d.literals(), "THEUPBGS");
        assert_eq!(d.hint(), "things");
        assert_eq!(d.len(), 5);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_decomposition_display() {
        let d = decomposition(&[("SKWR", "j"), ("O", "o"), ("G", "g")]);
        assert_eq!(d.to_string(), "SKWR=j O=o G=g");
        assert_eq!(Decomposition::default().to_string(), "");
    }

    #[test]
    fn test_candidate_from_decomposition() {
        let c = Candidate::from(decomposition(&[("KP", "x"), ("*", "")]));
        assert_eq!(c.hint, "x");
    }

    #[test]
    fn test_match_result_stroke() {
        let result = MatchResult {
            segments_per_chord: vec![
                decomposition(&[("K", "k"), ("PW", "b"), ("EU", "i")]),
                decomposition(&[("TPH", "n"), ("AEU", "aa"), ("GS", "ion")]),
            ],
            best_hint: "kbi/naaion".to_string(),
            score: 1.0,
            truncated: false,
        };
        assert_eq!(result.stroke(), "KPWEU/TPHAEUGS");
    }

    #[test]
    fn test_match_kind_display() {
        assert_eq!(MatchKind::Exact.to_string(), "Exact");
        assert_eq!(MatchKind::Prefix.to_string(), "Prefix");
    }

    #[test]
    fn test_lookup_result_builder() {
        let result = LookupResult::new("SKWROG".to_string(), "jog".to_string(), MatchKind::Exact);
        assert!(result.explanation.is_none());
        assert_eq!(result.kind, MatchKind::Exact);
    }

    #[test]
    fn test_error_messages() {
        let err = DictionaryError::InvalidOrderFile {
            path: PathBuf::from("order.json"),
        };
        assert_eq!(
            err.to_string(),
            "Invalid order file order.json: expected an array of dictionary paths"
        );
    }
}
