// Integration tests for chord decomposition and stroke matching

use proptest::prelude::*;
use steno_lookup::{
    composite_score, decompose_all, decompose_best, decompositions, MatcherConfig, StrokeMatcher,
};

fn segments(stroke: &str, translation: &str) -> Vec<String> {
    StrokeMatcher::new()
        .match_stroke(stroke, translation)
        .segments_per_chord
        .iter()
        .map(ToString::to_string)
        .collect()
}

// ============ Single Chords ============

#[test]
fn test_jog() {
    let result = StrokeMatcher::new().match_stroke("SKWROG", "jog");
    assert_eq!(segments("SKWROG", "jog"), vec!["SKWR=j O=o G=g"]);
    assert_eq!(result.best_hint, "jog");
    assert!((result.score - 1.1).abs() < 1e-9);
}

#[test]
fn test_things() {
    assert_eq!(segments("THEUPBGS", "things"), vec!["TH=th EU=i PB=n G=g S=s"]);
}

#[test]
fn test_vowel_cluster_and_literal() {
    assert_eq!(segments("TKPWAEUPL", "game"), vec!["TKPW=g AEU=aa PL=m"]);
    assert_eq!(segments("STKPWAOEU", "zeye"), vec!["STKPW=z AOEU=eye"]);
}

#[test]
fn test_modifier_is_its_own_segment() {
    assert_eq!(segments("TPH*EFR", "never"), vec!["TPH=n *= E=e F=v R=r"]);
}

// ============ Multi-Chord Strokes ============

#[test]
fn test_combination() {
    let result = StrokeMatcher::new().match_stroke("KPWEU/TPHAEUGS", "combination");
    assert_eq!(
        segments("KPWEU/TPHAEUGS", "combination"),
        vec!["K=k PW=b EU=i", "TPH=n AEU=aa GS=ion"]
    );
    assert_eq!(result.best_hint, "kbi/naaion");
    assert!((result.score - 0.87).abs() < 1e-9);
}

#[test]
fn test_nevertheless() {
    let result = StrokeMatcher::new().match_stroke("TPH*EFR/THELS", "nevertheless");
    assert_eq!(result.best_hint, "nevr/thels");
    assert_eq!(result.segments_per_chord[1].to_string(), "TH=th E=e L=l S=s");
}

#[test]
fn test_raspberries() {
    assert_eq!(
        segments("RAS/PWER/KWREU/-S", "raspberries"),
        vec!["R=r A=a S=s", "PW=b E=e R=r", "KWR=y EU=i", "-= S=s"]
    );
}

#[test]
fn test_district_of_columbia() {
    let result = StrokeMatcher::new()
        .match_stroke("TKEUS/TREUBGT/OF/KHRUPL/KWRA", "District of Columbia");
    assert_eq!(result.best_hint, "dis/trikt/of/clum/ya");
    assert_eq!(result.segments_per_chord[3].to_string(), "KHR=cl U=u PL=m");
}

#[test]
fn test_pony_express() {
    let result = StrokeMatcher::new().match_stroke("POEPB/KWREU/EBGS/PRES", "Pony Express");
    assert_eq!(result.best_hint, "pohn/yi/ex/pres");
    assert_eq!(result.segments_per_chord[2].to_string(), "E=e BGS=x");
}

#[test]
fn test_joint_score_beats_any_single_chord_choice() {
    // Every other carving of the first chord scores no better with the same
    // second chord
    let matcher = StrokeMatcher::new();
    let best = matcher.match_stroke("KPWEU/TPHAEUGS", "combination");
    for first in decompose_all("KPWEU") {
        let stroke_hint = format!("{}/naaion", first.hint());
        let parts: Vec<&str> = stroke_hint.split('/').collect();
        let score = composite_score(&parts, "combination");
        assert!(score <= best.score + 1e-12, "{} scored {}", first, score);
    }
}

/// Chord-by-chord choice, each chord seeing only the hints before it
fn greedy_hints(stroke: &str, translation: &str) -> Vec<String> {
    let mut prefix = String::new();
    let mut hints = Vec::new();
    for chord in stroke.split('/') {
        let (_, hint) = decompose_best(chord, translation, &prefix).unwrap();
        prefix.push_str(&hint);
        hints.push(hint);
    }
    hints
}

#[test]
fn test_joint_search_beats_greedy() {
    for (stroke, translation, greedy, joint) in [
        ("TPHOEUZ/KWREU", "noisy", "noyz/yi", "noiz/yi"),
        ("SKWROG/-G", "jogging", "jog/g", "jog/-ing"),
    ] {
        let hints = greedy_hints(stroke, translation);
        assert_eq!(hints.join("/"), greedy);

        let result = StrokeMatcher::new().match_stroke(stroke, translation);
        assert_eq!(result.best_hint, joint);
        assert!(composite_score(&hints, translation) < result.score);
    }
}

// ============ Fallbacks and Limits ============

#[test]
fn test_unrelated_translation_still_explained() {
    let result = StrokeMatcher::new().match_stroke("KAT", "1234");
    assert_eq!(result.stroke(), "KAT");
    assert_eq!(result.best_hint.replace('/', "").len(), 3);
}

#[test]
fn test_tiny_caps_never_panic() {
    let config = MatcherConfig::default()
        .with_max_chord_decompositions(1)
        .with_max_combinations(1);
    let result =
        StrokeMatcher::with_config(config).match_stroke("TKEUS/TREUBGT/OF", "district of");
    assert!(result.truncated);
    assert_eq!(result.stroke(), "TKEUS/TREUBGT/OF");
}

#[test]
fn test_long_single_key_stroke_is_bounded() {
    // 3^9 combinations of nine F chords, 512 groupings each
    let stroke = vec!["F"; 9].join("/");
    let config = MatcherConfig::default().with_max_groupings(10_000);
    let result = StrokeMatcher::with_config(config).match_stroke(&stroke, "fivefold");
    assert!(result.truncated);
    assert_eq!(result.stroke(), stroke);
    assert_eq!(result.best_hint.len(), stroke.len());
}

#[test]
fn test_zero_chord_cap_keeps_chords() {
    let config = MatcherConfig {
        max_chord_decompositions: 0,
        ..MatcherConfig::default()
    };
    let result = StrokeMatcher::with_config(config).match_stroke("SKWROG/-G", "jogging");
    assert_eq!(result.stroke(), "SKWROG/-G");
}

#[test]
fn test_decompose_best_single_chord() {
    let (decomposition, hint) = decompose_best("TPHAEUGS", "combination", "kbi").unwrap();
    assert_eq!(decomposition.to_string(), "TPH=n AEU=aa GS=ion");
    assert_eq!(hint, "naaion");
}

// ============ Properties ============

/// Keys in steno order, any subset
fn chord() -> impl Strategy<Value = String> {
    "S?T?K?P?W?H?R?A?O?\\*?E?U?F?R?P?B?L?G?T?S?D?Z?"
}

/// Short key runs in any order, small enough to match exhaustively
fn short_chord() -> impl Strategy<Value = String> {
    "[STKPWHRAOEUFBGLDZ*-]{0,4}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn decompositions_cover_the_chord(chord in chord()) {
        for d in decompositions(&chord).take(200) {
            prop_assert_eq!(d.literals(), chord.clone());
        }
    }

    #[test]
    fn match_round_trips_stroke(a in short_chord(), b in short_chord(), word in "[a-z]{2,8}") {
        let stroke = format!("{}/{}", a, b);
        let result = StrokeMatcher::new().match_stroke(&stroke, &word);
        prop_assert_eq!(result.stroke(), stroke);
        prop_assert_eq!(result.segments_per_chord.len(), 2);
    }

    #[test]
    fn matching_is_deterministic(a in short_chord(), word in "[a-z]{2,8}") {
        let matcher = StrokeMatcher::new();
        prop_assert_eq!(matcher.match_stroke(&a, &word), matcher.match_stroke(&a, &word));
    }
}
