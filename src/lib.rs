//! # Steno Lookup: stroke search with phonetic explanations
//!
//! Reverse lookup for Plover-style steno dictionaries. Given a word, find the
//! strokes that write it and show which keys produce which sounds.
//!
//! ## Components
//!
//! 1. **Phonetic Encoder** - Metaphone3 keys for approximate pronunciation
//!    - `encode("Smith")` gives `SM0` with alternate `XMT`
//! 2. **Similarity Scorer** - spelling ratio plus a composite phonetic score
//! 3. **Stroke Matcher** - carves every chord into known key groups and picks
//!    the combination that sounds most like the translation
//!
//! ## Chord Syntax
//!
//! - Keys in steno order, e.g. `SKWROG`
//! - `/` separates the chords of a multi-chord stroke, e.g. `KPWEU/TPHAEUGS`
//! - `*` is the modifier key, `-` separates left and right bank keys
//!
//! ## Example Usage
//!
//! ```
//! use steno_lookup::StenoSearch;
//!
//! let search = StenoSearch::new()?;
//!
//! for result in search.lookup("combination") {
//!     let explanation = result.explanation.unwrap();
//!     println!("{} -> {} ({})", result.stroke, result.translation, explanation.best_hint);
//! }
//!
//! // Explain any stroke directly
//! let result = search.explain("THEUPBGS", "things");
//! assert_eq!(result.best_hint, "things");
//! # Ok::<(), steno_lookup::DictionaryError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Dictionary** - indexes strokes by translation prefix
//! - **Decomposer** - enumerates segmentations of a single chord
//! - **Matcher** - scores segmentations jointly across chords
//! - **StenoSearch API** - main entry point combining all components

pub mod data;
pub mod decompose;
pub mod dictionary;
pub mod matcher;
pub mod meanings;
pub mod phonetic;
pub mod search;
pub mod similarity;
pub mod types;

// Re-export main types and functions for convenience
pub use data::DataLoader;
pub use decompose::{decompose_all, decompose_best, decompositions};
pub use dictionary::{Dictionary, DictionaryStats, LoadStats};
pub use matcher::{MatcherConfig, StrokeMatcher};
pub use phonetic::{encode, Encoder, EncoderConfig, PhoneticCode};
pub use search::{SearchConfig, StenoSearch};
pub use similarity::{composite_score, orthographic_score, ratio, CompositeScorer};
pub use types::{
    Candidate, Decomposition, DictionaryError, LookupResult, MatchKind, MatchResult, Segment,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
