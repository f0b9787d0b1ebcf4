// Integration tests for StenoSearch over the embedded sample dictionary

use steno_lookup::{LookupResult, MatchKind, SearchConfig, StenoSearch};

fn strokes(results: &[LookupResult]) -> Vec<(&str, &str, MatchKind)> {
    results
        .iter()
        .map(|r| (r.stroke.as_str(), r.translation.as_str(), r.kind))
        .collect()
}

#[test]
fn test_search_creation() {
    let search = StenoSearch::new().unwrap();
    let stats = search.stats();
    assert!(stats.entries > 0);
    assert!(stats.translations <= stats.entries);
    assert!(stats.buckets <= stats.translations);
}

#[test]
fn test_exact_and_prefix_order() {
    let search = StenoSearch::new().unwrap();
    let results = search.lookup("combination");

    assert_eq!(
        strokes(&results),
        vec![
            ("KPWEU/TPHAEUGS", "combination", MatchKind::Exact),
            ("KPWEU/TPHAEUGS/-S", "combinations", MatchKind::Prefix),
            ("KO*PL/PWEU/TPHAEUGS", "combinations", MatchKind::Prefix),
        ]
    );
}

#[test]
fn test_every_result_is_explained() {
    let search = StenoSearch::new().unwrap();
    for term in ["combination", "things", "phone", "nevertheless", "jog"] {
        let results = search.lookup(term);
        assert!(!results.is_empty(), "no results for {}", term);
        for result in results {
            let explanation = result.explanation.as_ref().expect("explained");
            assert_eq!(explanation.stroke(), result.stroke);
            assert_eq!(
                explanation.segments_per_chord.len(),
                result.stroke.split('/').count()
            );
        }
    }
}

#[test]
fn test_combination_explanation() {
    let search = StenoSearch::new().unwrap();
    let results = search.lookup("combination");
    let explanation = results[0].explanation.as_ref().unwrap();
    assert_eq!(explanation.best_hint, "kbi/naaion");
}

#[test]
fn test_multiple_strokes_for_one_translation() {
    let search = StenoSearch::new().unwrap();
    let results = search.lookup("phone");
    assert_eq!(
        strokes(&results),
        vec![
            ("PHOEPB", "phone", MatchKind::Exact),
            ("TPOEPB", "phone", MatchKind::Exact),
            ("PHOEPBS", "phones", MatchKind::Prefix),
        ]
    );
}

#[test]
fn test_case_handling() {
    let search = StenoSearch::new().unwrap();
    let results = search.lookup("cat");
    assert_eq!(
        strokes(&results),
        vec![
            ("KAT", "cat", MatchKind::Exact),
            ("KATS", "cats", MatchKind::Prefix),
            ("KA*T", "Cat", MatchKind::Prefix),
        ]
    );
}

#[test]
fn test_short_and_unknown_terms() {
    let search = StenoSearch::new().unwrap();
    assert!(search.lookup("j").is_empty());
    assert!(search.lookup(" ").is_empty());
    assert!(search.lookup("qqq").is_empty());
    // one-character translations are never indexed
    assert!(search.lookup("a").is_empty());
}

#[test]
fn test_inexact_limit() {
    let search = StenoSearch::new()
        .unwrap()
        .with_config(SearchConfig { inexact_limit: 0 });
    let results = search.lookup("combination");
    assert_eq!(results.len(), 3);

    let results = search.lookup("com");
    // "combination" accepted, then the walk stops
    assert_eq!(strokes(&results), vec![("KPWEU/TPHAEUGS", "combination", MatchKind::Prefix)]);
}

#[test]
fn test_lookup_limit() {
    let search = StenoSearch::new().unwrap();
    assert_eq!(search.lookup_limit("combination", 1).len(), 1);
}

#[test]
fn test_explain_bypasses_dictionary() {
    let search = StenoSearch::new().unwrap();
    let result = search.explain("SKWRUPBLG", "judge");
    assert_eq!(result.stroke(), "SKWRUPBLG");
    assert!(result.score > 0.0);
}
