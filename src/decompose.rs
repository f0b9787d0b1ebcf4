// Chord Decomposer
// Enumerates every way to carve a chord into known literals and single keys

use crate::meanings::{prefix_matches, single_symbol_hints};
use crate::similarity::orthographic_score;
use crate::types::{Decomposition, Segment, MODIFIER};
use log::warn;

/// Decompositions enumerated per chord before giving up on the rest
pub const DEFAULT_MAX_DECOMPOSITIONS: usize = 4096;

/// One cursor position in the depth-first walk
#[derive(Debug)]
struct Frame {
    start: usize,
    /// (bytes consumed, hint) for every way to continue from `start`
    options: Vec<(usize, String)>,
    next: usize,
}

/// Lazy iterator over all decompositions of one chord.
///
/// Order matches a depth-first walk where, at each position, literal matches
/// come first in table order followed by the single-key fallbacks. Nothing
/// is materialised beyond the current path.
#[derive(Debug)]
pub struct Decompositions<'a> {
    chord: &'a str,
    has_modifier: bool,
    stack: Vec<Frame>,
    path: Vec<Segment>,
}

impl<'a> Decompositions<'a> {
    pub fn new(chord: &'a str) -> Self {
        let mut iter = Self {
            chord,
            has_modifier: chord.contains(MODIFIER),
            stack: Vec::new(),
            path: Vec::new(),
        };
        if !chord.is_empty() {
            iter.push_frame(0);
        }
        iter
    }

    fn push_frame(&mut self, start: usize) {
        let rest = &self.chord[start..];
        let mut options: Vec<(usize, String)> = prefix_matches(rest)
            .into_iter()
            .map(|(m, len)| (len, m.hint.to_string()))
            .collect();
        if let Some(symbol) = rest.chars().next() {
            options.extend(
                single_symbol_hints(symbol, self.has_modifier)
                    .into_iter()
                    .map(|hint| (symbol.len_utf8(), hint)),
            );
        }
        self.stack.push(Frame {
            start,
            options,
            next: 0,
        });
    }
}

impl Iterator for Decompositions<'_> {
    type Item = Decomposition;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let frame = &mut self.stack[depth];
            let Some((len, hint)) = frame.options.get(frame.next).cloned() else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            let start = frame.start;
            let end = start + len;
            self.path.truncate(depth);
            self.path.push(Segment::new(&self.chord[start..end], hint));

            if end == self.chord.len() {
                return Some(Decomposition::new(self.path.clone()));
            }
            self.push_frame(end);
        }
    }
}

/// Lazy enumeration of every decomposition of `chord`
pub fn decompositions(chord: &str) -> Decompositions<'_> {
    Decompositions::new(chord)
}

/// Every decomposition of `chord`, in enumeration order.
///
/// An empty chord has none. Enumeration stops after
/// [`DEFAULT_MAX_DECOMPOSITIONS`].
///
/// # Example
///
/// ```
/// use steno_lookup::decompose::decompose_all;
///
/// let all = decompose_all("TH");
/// let hints: Vec<String> = all.iter().map(|d| d.hint()).collect();
/// assert_eq!(hints, vec!["th", "th"]);
/// ```
pub fn decompose_all(chord: &str) -> Vec<Decomposition> {
    collect_capped(chord, DEFAULT_MAX_DECOMPOSITIONS).0
}

/// Collect at most `cap` decompositions; the flag reports whether more existed.
pub(crate) fn collect_capped(chord: &str, cap: usize) -> (Vec<Decomposition>, bool) {
    let mut iter = decompositions(chord);
    let found: Vec<Decomposition> = iter.by_ref().take(cap).collect();
    (found, finish_capped(chord, cap, &mut iter))
}

/// True (with a warning) if `rest` still has decompositions past the cap
fn finish_capped(chord: &str, cap: usize, rest: &mut Decompositions<'_>) -> bool {
    let truncated = rest.next().is_some();
    if truncated {
        warn!(
            "chord {:?} has more than {} decompositions; keeping the first {}",
            chord, cap, cap
        );
    }
    truncated
}

/// Best single-chord decomposition by spelling similarity.
///
/// Each decomposition's hint is appended to `hint_prefix` (the hints of
/// earlier chords) and compared with `translation` using
/// [`orthographic_score`]. The first decomposition with the highest score
/// wins; if nothing scores above zero the first decomposition is returned.
/// Only the first [`DEFAULT_MAX_DECOMPOSITIONS`] are scored.
///
/// # Returns
/// The chosen decomposition and its own hint (without the prefix), or `None`
/// for an empty chord
pub fn decompose_best(
    chord: &str,
    translation: &str,
    hint_prefix: &str,
) -> Option<(Decomposition, String)> {
    best_capped(chord, translation, hint_prefix, DEFAULT_MAX_DECOMPOSITIONS).0
}

/// [`decompose_best`] over the first `cap` decompositions; the flag reports
/// whether more existed.
fn best_capped(
    chord: &str,
    translation: &str,
    hint_prefix: &str,
    cap: usize,
) -> (Option<(Decomposition, String)>, bool) {
    let mut best: Option<(Decomposition, String, f64)> = None;

    let mut iter = decompositions(chord);
    for decomposition in iter.by_ref().take(cap) {
        let hint = decomposition.hint();
        let score = orthographic_score(&format!("{hint_prefix}{hint}"), translation);
        match &best {
            Some((_, _, best_score)) if score <= *best_score => {}
            _ => best = Some((decomposition, hint, score)),
        }
    }
    let truncated = finish_capped(chord, cap, &mut iter);
    (best.map(|(decomposition, hint, _)| (decomposition, hint)), truncated)
}
