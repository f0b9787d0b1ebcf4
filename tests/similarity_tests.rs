// Integration tests for the similarity scorer

use proptest::prelude::*;
use steno_lookup::{composite_score, orthographic_score, ratio, CompositeScorer};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============ Ratio ============

#[test]
fn test_ratio_examples() {
    assert!(close(ratio("kitten", "sitting"), 8.0 / 13.0));
    assert!(close(ratio("JK", "JK"), 1.0));
    assert!(close(ratio("SM0", "XMT"), 1.0 / 3.0));
}

#[test]
fn test_ratio_counts_characters_not_bytes() {
    assert!(close(ratio("été", "ete"), 1.0 / 3.0));
}

// ============ Orthographic ============

#[test]
fn test_orthographic_containment() {
    assert_eq!(orthographic_score("jog", "jogging"), 1.0);
    assert_eq!(orthographic_score("JOGGING", "jog"), 1.0);
}

#[test]
fn test_orthographic_folds_help_steno_spellings() {
    // "kbi" for "combination": k->c and b->n bring the pair closer
    let plain = ratio("kbi", "combination");
    let score = orthographic_score("kbi", "combination");
    assert!(score > plain);
}

#[test]
fn test_orthographic_never_below_plain_ratio() {
    for (a, b) in [("nefr", "never"), ("dis", "District"), ("yi", "pony")] {
        assert!(orthographic_score(a, b) >= ratio(&a.to_lowercase(), &b.to_lowercase()));
    }
}

// ============ Composite ============

#[test]
fn test_composite_prefers_sound_alike() {
    let right = composite_score(&["th", "i", "n", "g", "s"], "things");
    let wrong = composite_score(&["th", "i", "n", "ing", "s"], "things");
    assert!(right > wrong);
}

#[test]
fn test_composite_spelling_breaks_phonetic_ties() {
    // "nefr" and "nevr" share a key; spelling decides
    let f = composite_score(&["n", "e", "f", "r"], "never");
    let v = composite_score(&["n", "e", "v", "r"], "never");
    assert!(v > f);
}

#[test]
fn test_composite_scorer_matches_free_function() {
    let mut scorer = CompositeScorer::new("combination");
    for parts in [vec!["kbi", "naaion"], vec!["xwi", "naaion"], vec!["k", "b", "i"]] {
        assert_eq!(scorer.score(&parts), composite_score(&parts, "combination"));
    }
}

// ============ Properties ============

proptest! {
    #[test]
    fn ratio_is_symmetric(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        prop_assert_eq!(ratio(&a, &b), ratio(&b, &a));
    }

    #[test]
    fn ratio_in_unit_range(a in "[a-c]{0,12}", b in "[a-c]{0,12}") {
        let r = ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn ratio_identity(a in "\\PC{0,16}") {
        prop_assert_eq!(ratio(&a, &a), 1.0);
    }

    #[test]
    fn orthographic_is_symmetric(a in "[a-zA-Z]{0,10}", b in "[a-zA-Z]{0,10}") {
        prop_assert_eq!(orthographic_score(&a, &b), orthographic_score(&b, &a));
    }

    #[test]
    fn composite_bounded(parts in prop::collection::vec("[a-z]{1,3}", 0..6), word in "[a-z]{1,10}") {
        let score = composite_score(&parts, &word);
        prop_assert!((0.0..=1.1 + 1e-9).contains(&score));
    }
}
