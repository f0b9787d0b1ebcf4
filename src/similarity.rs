// Similarity Scorer
// Ratcliff/Obershelp ratio plus the orthographic and phonetic scores built on it

use crate::phonetic::Encoder;
use rustc_hash::FxHashMap;

/// Groupings beyond this many single-letter parts are not enumerated; the
/// remaining single letters always merge with their neighbours.
pub const MAX_FREE_POSITIONS: usize = 16;

/// Weight of the plain spelling ratio added on top of the phonetic ratio
const SPELLING_WEIGHT: f64 = 0.1;

/// Weight of the folded-spelling ratios in [`orthographic_score`]
const FOLDED_WEIGHT: f64 = 0.9;

/// Spelling folds for letters that steno writers commonly swap.
/// Each set is applied in order to both strings.
const FOLD_SETS: [&[(&str, &str)]; 2] = [
    &[
        ("y", "i"),
        ("g", "c"),
        ("k", "c"),
        ("b", "n"),
        ("ohn", "on"),
        ("ph", "f"),
    ],
    &[
        ("y", "i"),
        ("j", "g"),
        ("k", "c"),
        ("b", "n"),
        ("ohn", "on"),
        ("ph", "f"),
    ],
];

/// Similarity ratio in `[0, 1]`: `2 * M / (len(a) + len(b))` where `M` is the
/// total length of the matching blocks found by repeatedly taking the longest
/// common substring and recursing on either side of it.
///
/// Symmetric: the pair is put into a canonical order (shorter first, then
/// lexicographic) before matching, so `ratio(a, b) == ratio(b, a)`.
///
/// # Example
///
/// ```
/// use steno_lookup::similarity::ratio;
///
/// assert_eq!(ratio("abcd", "bcde"), 0.75);
/// assert_eq!(ratio("", ""), 1.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let (first, second) = if (a.len(), &a) <= (b.len(), &b) {
        (&a, &b)
    } else {
        (&b, &a)
    };
    2.0 * matched_len(first, second) as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`
fn matched_len(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(&a[alo..ahi], &b[blo..bhi]);
        if size == 0 {
            continue;
        }
        total += size;
        let (i, j) = (alo + i, blo + j);
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    total
}

/// Longest common substring as `(start_in_a, start_in_b, len)`.
///
/// Ties go to the leftmost match in `a`, then the leftmost in `b`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            let k = cur[j + 1];
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

/// Spelling similarity, case-insensitive.
///
/// 1.0 when either string contains the other. Otherwise the best of the plain
/// ratio and the two folded ratios (scaled by 0.9), where folding maps letters
/// steno outlines often write differently (y/i, g/c, k/c, b/n, j/g, ohn/on,
/// ph/f).
///
/// # Example
///
/// ```
/// use steno_lookup::similarity::orthographic_score;
///
/// assert_eq!(orthographic_score("cat", "conCATenate"), 1.0);
/// ```
pub fn orthographic_score(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.contains(&b) || b.contains(&a) {
        return 1.0;
    }

    FOLD_SETS
        .iter()
        .map(|folds| FOLDED_WEIGHT * ratio(&fold(&a, folds), &fold(&b, folds)))
        .fold(ratio(&a, &b), f64::max)
}

fn fold(text: &str, folds: &[(&str, &str)]) -> String {
    folds
        .iter()
        .fold(text.to_string(), |acc, &(from, to)| acc.replace(from, to))
}

/// Phonetic score of candidate pronunciation fragments against a translation.
///
/// See [`CompositeScorer::score`].
pub fn composite_score<S: AsRef<str>>(parts: &[S], translation: &str) -> f64 {
    CompositeScorer::new(translation).score(parts)
}

/// Scores many candidate part lists against one translation.
///
/// Holds the translation's phonetic key and a cache of fragment keys so the
/// matcher does not re-encode the same fragments for every combination.
#[derive(Debug, Clone)]
pub struct CompositeScorer {
    translation: String,
    translation_key: String,
    encoder: Encoder,
    cache: FxHashMap<String, String>,
}

impl CompositeScorer {
    pub fn new(translation: &str) -> Self {
        let encoder = Encoder::new();
        Self {
            translation: translation.to_string(),
            translation_key: encoder.encode(translation).primary,
            encoder,
            cache: FxHashMap::default(),
        }
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Score `parts` against the translation.
    ///
    /// Single-letter parts are "free": each may be sounded on its own or
    /// merged with the run of parts that follows it. Every grouping is
    /// encoded group by group and the concatenated primary keys are compared
    /// with the translation's key; the best ratio wins. A tenth of the plain
    /// spelling ratio is added to break ties, so the result can exceed 1.0.
    ///
    /// # Arguments
    /// * `parts` - pronunciation fragments in order (e.g. `["kun", "fes", "n"]`)
    ///
    /// # Returns
    /// Score where only the relative order between candidates matters
    pub fn score<S: AsRef<str>>(&mut self, parts: &[S]) -> f64 {
        let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
        let free = free_positions(&parts);

        let mut best: f64 = 0.0;
        for mask in 0u32..(1u32 << free.len()) {
            let sounded: Vec<usize> = free
                .iter()
                .enumerate()
                .filter(|&(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, &pos)| pos)
                .collect();

            let pronunciation: String = group_parts(&parts, &sounded)
                .iter()
                .map(|group| self.key_for(group))
                .collect();
            best = best.max(ratio(&pronunciation, &self.translation_key));
        }

        best + ratio(&parts.concat(), &self.translation) * SPELLING_WEIGHT
    }

    /// Number of groupings [`CompositeScorer::score`] evaluates for `parts`
    pub fn groupings<S: AsRef<str>>(parts: &[S]) -> usize {
        let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
        1 << free_positions(&parts).len()
    }

    fn key_for(&mut self, group: &str) -> String {
        if let Some(key) = self.cache.get(group) {
            return key.clone();
        }
        let key = self.encoder.encode(group).primary;
        self.cache.insert(group.to_string(), key.clone());
        key
    }
}

/// Indices of single-letter parts, at most [`MAX_FREE_POSITIONS`]
fn free_positions(parts: &[&str]) -> Vec<usize> {
    parts
        .iter()
        .enumerate()
        .filter(|(_, part)| part.chars().count() == 1)
        .map(|(i, _)| i)
        .take(MAX_FREE_POSITIONS)
        .collect()
}

/// Merge `parts` into groups: each position in `sounded` stands alone, and
/// every other run of parts is joined up to the next sounded position.
fn group_parts(parts: &[&str], sounded: &[usize]) -> Vec<String> {
    let mut groups = Vec::new();
    let mut i = 0;
    while i < parts.len() {
        if sounded.contains(&i) {
            groups.push(parts[i].to_string());
            i += 1;
            continue;
        }
        let mut group = parts[i].to_string();
        i += 1;
        while i < parts.len() && !sounded.contains(&i) {
            group.push_str(parts[i]);
            i += 1;
        }
        groups.push(group);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ============ Ratio ============

    #[test]
    fn test_ratio_identity() {
        assert_eq!(ratio("confession", "confession"), 1.0);
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_empty_side() {
        assert_eq!(ratio("abc", ""), 0.0);
        assert_eq!(ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_ratio_known_values() {
        assert!(close(ratio("abcd", "bcde"), 0.75));
        assert!(close(ratio("KNFXN", "KNFSN"), 0.8));
        assert!(close(ratio("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_ratio_symmetric_on_tie_break() {
        // Block choice depends on argument order without canonicalisation
        let (a, b) = ("xabyab", "abxab");
        assert_eq!(ratio(a, b), ratio(b, a));
    }

    #[test]
    fn test_longest_match_leftmost() {
        let a: Vec<char> = "abab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b), (0, 0, 2));
    }

    // ============ Orthographic ============

    #[test]
    fn test_orthographic_substring() {
        assert_eq!(orthographic_score("cat", "concatenate"), 1.0);
        assert_eq!(orthographic_score("Concatenate", "CAT"), 1.0);
        assert_eq!(orthographic_score("", "anything"), 1.0);
    }

    #[test]
    fn test_orthographic_folds() {
        let plain = ratio("jon", "john");
        let folded = orthographic_score("jon", "john");
        assert!(folded >= plain);
        // ohn -> on makes the folded pair identical
        assert!(close(folded, 0.9));
    }

    #[test]
    fn test_orthographic_ph_fold() {
        assert!(close(orthographic_score("fone", "phone"), 0.9));
    }

    // ============ Composite ============

    #[test]
    fn test_group_parts() {
        let parts = ["kun", "fes", "n"];
        assert_eq!(group_parts(&parts, &[]), vec!["kunfesn"]);
        assert_eq!(group_parts(&parts, &[2]), vec!["kunfes", "n"]);

        let parts = ["t", "r", "i"];
        assert_eq!(group_parts(&parts, &[1]), vec!["t", "r", "i"]);
        assert_eq!(group_parts(&parts, &[0]), vec!["t", "ri"]);
    }

    #[test]
    fn test_composite_confession() {
        let score = composite_score(&["kun", "fes", "n"], "confession");
        // KNFSN vs KNFXN, plus a tenth of ratio("kunfesn", "confession")
        assert!(close(score, 0.8 + 10.0 / 17.0 / 10.0));
    }

    #[test]
    fn test_composite_empty_parts() {
        let empty: [&str; 0] = [];
        let score = composite_score(&empty, "");
        assert!(close(score, 1.1));
    }

    #[test]
    fn test_groupings_count() {
        assert_eq!(CompositeScorer::groupings(&["kun", "fes", "n"]), 2);
        assert_eq!(CompositeScorer::groupings(&["t", "r", "i"]), 8);
        let empty: [&str; 0] = [];
        assert_eq!(CompositeScorer::groupings(&empty), 1);
        let many = ["f"; 40];
        assert_eq!(CompositeScorer::groupings(&many), 1 << MAX_FREE_POSITIONS);
    }

    #[test]
    fn test_composite_scorer_reuse() {
        let mut scorer = CompositeScorer::new("things");
        let first = scorer.score(&["th", "i", "n", "g", "s"]);
        let again = scorer.score(&["th", "i", "n", "g", "s"]);
        assert_eq!(first, again);
        assert_eq!(scorer.translation(), "things");
    }
}
