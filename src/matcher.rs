// Steno Stroke Matcher
// Picks the segmentation of a whole stroke that best explains its translation

use crate::decompose::{collect_capped, decompose_best, DEFAULT_MAX_DECOMPOSITIONS};
use crate::similarity::CompositeScorer;
use crate::types::{Candidate, Decomposition, MatchResult, CHORD_SEPARATOR};
use log::{trace, warn};

/// Enumeration limits for the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Decompositions kept per chord
    pub max_chord_decompositions: usize,

    /// Cross-chord combinations scored per stroke
    pub max_combinations: usize,

    /// Scorer groupings evaluated per stroke, summed over all combinations
    pub max_groupings: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_chord_decompositions: DEFAULT_MAX_DECOMPOSITIONS,
            max_combinations: 65_536,
            max_groupings: 1 << 18,
        }
    }
}

impl MatcherConfig {
    pub fn with_max_chord_decompositions(mut self, max: usize) -> Self {
        self.max_chord_decompositions = max.max(1);
        self
    }

    pub fn with_max_combinations(mut self, max: usize) -> Self {
        self.max_combinations = max.max(1);
        self
    }

    pub fn with_max_groupings(mut self, max: usize) -> Self {
        self.max_groupings = max.max(1);
        self
    }

    /// Every limit raised to at least 1
    fn normalized(self) -> Self {
        self.with_max_chord_decompositions(self.max_chord_decompositions)
            .with_max_combinations(self.max_combinations)
            .with_max_groupings(self.max_groupings)
    }
}

/// Mixed-radix counter over one candidate index per chord.
///
/// The first chord is the least significant digit, so it varies fastest.
#[derive(Debug, Clone)]
pub struct Combinations {
    radices: Vec<usize>,
    index: u128,
    total: u128,
}

impl Combinations {
    pub fn new(radices: Vec<usize>) -> Self {
        let total = radices
            .iter()
            .try_fold(1u128, |acc, &r| acc.checked_mul(r as u128))
            .unwrap_or(u128::MAX);
        Self {
            radices,
            index: 0,
            total,
        }
    }

    /// Number of combinations overall (saturating)
    pub fn total(&self) -> u128 {
        self.total
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let mut rest = self.index;
        let digits = self
            .radices
            .iter()
            .map(|&radix| {
                let digit = (rest % radix as u128) as usize;
                rest /= radix as u128;
                digit
            })
            .collect();
        self.index += 1;
        Some(digits)
    }
}

/// Stroke matcher
///
/// Explains a stroke by choosing, jointly across its chords, the
/// segmentation whose hints sound most like the translation. Scoring the
/// whole stroke at once matters: a chord's best carving often only becomes
/// clear once later chords are known ("things", "combination").
///
/// # Example
///
/// ```
/// use steno_lookup::matcher::StrokeMatcher;
///
/// let matcher = StrokeMatcher::new();
/// let result = matcher.match_stroke("SKWROG", "jog");
/// assert_eq!(result.segments_per_chord[0].segments[0].literal, "SKWR");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeMatcher {
    config: MatcherConfig,
}

impl StrokeMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher with the given limits; zero limits are raised to 1
    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> MatcherConfig {
        self.config
    }

    /// All decompositions of one chord, capped at the configured limit
    pub fn decompose_all(&self, chord: &str) -> Vec<Decomposition> {
        collect_capped(chord, self.config.max_chord_decompositions).0
    }

    /// Best decomposition of one chord on its own; see [`decompose_best`]
    pub fn decompose_best(
        &self,
        chord: &str,
        translation: &str,
        hint_prefix: &str,
    ) -> Option<(Decomposition, String)> {
        decompose_best(chord, translation, hint_prefix)
    }

    /// Candidates for one chord; an empty chord gets one empty candidate so
    /// it still takes part in the product.
    fn chord_candidates(&self, chord: &str) -> (Vec<Candidate>, bool) {
        let (found, truncated) = collect_capped(chord, self.config.max_chord_decompositions);
        let candidates = if found.is_empty() {
            vec![Candidate::from(Decomposition::default())]
        } else {
            found.into_iter().map(Candidate::from).collect()
        };
        (candidates, truncated)
    }

    /// Best joint segmentation of `stroke` against `translation`.
    ///
    /// Chords are split on '/', every chord is decomposed, and each
    /// combination (one candidate per chord, in mixed-radix order) is scored
    /// with [`CompositeScorer`]. The first combination with the highest
    /// score wins. If nothing scores above zero the first combination is
    /// returned with a score of 0.0.
    ///
    /// Scoring stops at the first combination that would take the total
    /// number of scorer groupings past `max_groupings`; the first
    /// combination is always scored.
    ///
    /// # Arguments
    /// * `stroke` - chords separated by '/' (e.g. "KPWEU/TPHAEUGS")
    /// * `translation` - the word the stroke writes
    ///
    /// # Returns
    /// The chosen decomposition per chord, their hints joined with '/', the
    /// score and whether a cap cut the search short
    pub fn match_stroke(&self, stroke: &str, translation: &str) -> MatchResult {
        let mut truncated = false;
        let candidates: Vec<Vec<Candidate>> = stroke
            .split(CHORD_SEPARATOR)
            .map(|chord| {
                let (found, cut) = self.chord_candidates(chord);
                truncated |= cut;
                found
            })
            .collect();

        let combinations = Combinations::new(candidates.iter().map(Vec::len).collect());
        let total = combinations.total();
        trace!("{} combinations for {:?} against {:?}", total, stroke, translation);
        if total > self.config.max_combinations as u128 {
            warn!(
                "stroke {:?} has {} combinations; scoring the first {}",
                stroke, total, self.config.max_combinations
            );
            truncated = true;
        }

        let mut scorer = CompositeScorer::new(translation);
        let mut best_digits = vec![0; candidates.len()];
        let mut best_score = 0.0;
        let mut spent = 0usize;
        for (scored, digits) in combinations.take(self.config.max_combinations).enumerate() {
            let hints: Vec<&str> = digits
                .iter()
                .zip(&candidates)
                .map(|(&d, chord)| chord[d].hint.as_str())
                .collect();
            let cost = CompositeScorer::groupings(&hints);
            if scored > 0 && spent.saturating_add(cost) > self.config.max_groupings {
                warn!(
                    "stroke {:?} exceeded {} scorer groupings; stopping after {} combinations",
                    stroke, self.config.max_groupings, scored
                );
                truncated = true;
                break;
            }
            spent += cost;
            let score = scorer.score(&hints);
            if score > best_score {
                best_score = score;
                best_digits = digits;
            }
        }

        let chosen: Vec<&Candidate> = best_digits
            .iter()
            .zip(&candidates)
            .map(|(&d, chord)| &chord[d])
            .collect();
        MatchResult {
            segments_per_chord: chosen.iter().map(|c| c.decomposition.clone()).collect(),
            best_hint: chosen
                .iter()
                .map(|c| c.hint.as_str())
                .collect::<Vec<_>>()
                .join("/"),
            score: best_score,
            truncated,
        }
    }
}
