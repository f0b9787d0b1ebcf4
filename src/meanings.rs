// Steno Literal Table
// Known key groups and the sounds they usually write

use crate::types::MODIFIER;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// A known steno key group and the fragment it usually represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meaning {
    pub literal: &'static str,
    pub hint: &'static str,
}

const fn meaning(literal: &'static str, hint: &'static str) -> Meaning {
    Meaning { literal, hint }
}

/// Literal table in match order.
///
/// Order matters: decompositions are enumerated in this order and ties are
/// resolved in favour of the earlier entry.
pub static MEANINGS: &[Meaning] = &[
    meaning("STKPW", "z"),
    meaning("SKWR", "j"),
    meaning("TKPW", "g"),
    meaning("PBLG", "j"),
    meaning("KWR", "y"),
    meaning("TPH", "n"),
    meaning("BGS", "x"),
    meaning("FPL", "sm"),
    meaning("FRB", "rv"),
    // not ch-r
    meaning("KHR", "cl"),
    // not m-r
    meaning("PHR", "pl"),
    meaning("SR", "v"),
    meaning("TK", "d"),
    meaning("TP", "f"),
    meaning("PH", "m"),
    meaning("PW", "b"),
    meaning("KW", "q"),
    meaning("HR", "l"),
    meaning("KP", "x"),
    meaning("FP", "ch"),
    meaning("RB", "sh"),
    meaning("PB", "n"),
    meaning("PL", "m"),
    meaning("BG", "k"),
    meaning("GS", "ion"),
    meaning("TH", "th"),
    meaning("KH", "ch"),
    meaning("SH", "sh"),
    meaning("AOEU", "eye"),
    meaning("AEU", "aa"),
    meaning("AOE", "ee"),
    meaning("AOU", "oo"),
    meaning("OEU", "oy"),
    meaning("AU", "aw"),
    meaning("EA", "ea"),
    meaning("OU", "ow"),
    meaning("EU", "i"),
    meaning("OE", "oh"),
    meaning("AO", "oo"),
    meaning("*", ""),
    meaning("-", ""),
];

/// Table positions grouped by the literal's first symbol, each list in table
/// order.
fn index() -> &'static FxHashMap<char, Vec<usize>> {
    static INDEX: OnceLock<FxHashMap<char, Vec<usize>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, m) in MEANINGS.iter().enumerate() {
            if let Some(first) = m.literal.chars().next() {
                index.entry(first).or_default().push(i);
            }
        }
        index
    })
}

/// Literals that can start at the front of `code`, with how many bytes each
/// consumes.
///
/// A literal matches either directly, or after the first modifier in `code`
/// is removed, in which case it also consumes the modifier. Results follow
/// table order.
///
/// # Example
///
/// ```
/// use steno_lookup::meanings::prefix_matches;
///
/// let found: Vec<_> = prefix_matches("TPHAEUGS")
///     .into_iter()
///     .map(|(m, len)| (m.literal, len))
///     .collect();
/// assert_eq!(found, vec![("TPH", 3), ("TP", 2)]);
/// ```
pub fn prefix_matches(code: &str) -> Vec<(&'static Meaning, usize)> {
    let stripped = code.replacen(MODIFIER, "", 1);
    let absorbs = stripped.len() != code.len();

    let mut positions: Vec<usize> = [code.chars().next(), stripped.chars().next()]
        .into_iter()
        .flatten()
        .filter_map(|first| index().get(&first))
        .flatten()
        .copied()
        .collect();
    positions.sort_unstable();
    positions.dedup();

    positions
        .into_iter()
        .filter_map(|i| {
            let m = &MEANINGS[i];
            if code.starts_with(m.literal) {
                Some((m, m.literal.len()))
            } else if absorbs && stripped.starts_with(m.literal) {
                Some((m, m.literal.len() + MODIFIER.len_utf8()))
            } else {
                None
            }
        })
        .collect()
}

/// Hints available for a lone symbol when no literal covers it.
///
/// F may be f, v or s; G may be g or "ing", and also c or k when the chord
/// carries the modifier. Any other symbol stands for itself in lowercase.
pub fn single_symbol_hints(symbol: char, chord_has_modifier: bool) -> Vec<String> {
    match symbol {
        'F' | 'f' => vec!["f".into(), "v".into(), "s".into()],
        'G' | 'g' if chord_has_modifier => {
            vec!["g".into(), "ing".into(), "c".into(), "k".into()]
        }
        'G' | 'g' => vec!["g".into(), "ing".into()],
        other => vec![other.to_lowercase().collect()],
    }
}
