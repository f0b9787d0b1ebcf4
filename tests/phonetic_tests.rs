// Integration tests for the phonetic encoder

use proptest::prelude::*;
use steno_lookup::phonetic::{spoken_letter, MAX_KEY_LENGTH};
use steno_lookup::{encode, Encoder, EncoderConfig};

fn keys(word: &str, config: EncoderConfig) -> (String, String) {
    let code = Encoder::with_config(config).encode(word);
    (code.primary, code.secondary)
}

fn default_keys(word: &str) -> (String, String) {
    keys(word, EncoderConfig::default())
}

fn pair(primary: &str, secondary: &str) -> (String, String) {
    (primary.to_string(), secondary.to_string())
}

// ============ Default Keys ============

#[test]
fn test_common_words() {
    let cases = [
        ("jog", "JK"),
        ("Schmidt", "XMT"),
        ("thumb", "0M"),
        ("knight", "NT"),
        ("phone", "FN"),
        ("judge", "JJ"),
        ("cat", "KT"),
        ("dog", "TK"),
        ("Thompson", "TMPSN"),
        ("Michael", "MKL"),
        ("Caesar", "SSR"),
        ("school", "SKL"),
        ("confession", "KNFXN"),
        ("things", "0NKS"),
        ("nevertheless", "NFR0LS"),
        ("raspberries", "RSPRS"),
        ("district", "TSTRKT"),
        ("Columbia", "KLMP"),
        ("Express", "AKSPRS"),
    ];
    for (word, expected) in cases {
        assert_eq!(default_keys(word), pair(expected, ""), "word: {}", word);
    }
}

#[test]
fn test_alternate_keys() {
    assert_eq!(default_keys("Smith"), pair("SM0", "XMT"));
    assert_eq!(default_keys("habitual"), pair("HPXL", "HPTL"));
    assert_eq!(default_keys("Gerald"), pair("JRLT", "KRLT"));
    assert_eq!(default_keys("Jacob"), pair("JKP", "AKP"));
    assert_eq!(default_keys("Wagner"), pair("AKNR", "FKNR"));
    assert_eq!(default_keys("character"), pair("KRKTR", "XRKTR"));
}

#[test]
fn test_spanish_j() {
    assert_eq!(default_keys("jose"), pair("HS", ""));
}

#[test]
fn test_full_unicode_uppercase() {
    assert_eq!(default_keys("Straße"), pair("STRS", ""));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(encode("SMITH"), encode("smith"));
}

#[test]
fn test_no_letters() {
    assert!(encode("").is_empty());
    assert!(encode("1234").is_empty());
    assert!(encode("--").is_empty());
}

// ============ Single Letters ============

#[test]
fn test_single_letters_are_spoken() {
    assert_eq!(spoken_letter("f"), "ef");
    assert_eq!(spoken_letter("W"), "doubleyou");
    assert_eq!(spoken_letter("7"), "7");
    assert_eq!(spoken_letter("jog"), "jog");

    assert_eq!(default_keys("F"), pair("AF", ""));
    assert_eq!(default_keys("Q"), pair("K", ""));
    assert_eq!(default_keys("x"), pair("AKS", ""));
    assert_eq!(default_keys("n"), pair("AN", ""));
}

// ============ Configuration ============

#[test]
fn test_encode_vowels() {
    let config = EncoderConfig::default().with_vowels(true);
    assert_eq!(keys("jog", config), pair("JAK", ""));
    assert_eq!(keys("Xavier", config), pair("SAFAR", ""));
    assert_eq!(keys("confession", config), pair("KANFAXAN", ""));
    assert_eq!(keys("jose", config), pair("HASA", ""));
}

#[test]
fn test_encode_exact() {
    let config = EncoderConfig::default().with_exact(true);
    assert_eq!(keys("dog", config), pair("DG", ""));
    assert_eq!(keys("Xavier", config), pair("SVR", ""));
    assert_eq!(keys("Gerald", config), pair("JRLD", "GRLD"));
    assert_eq!(keys("stenography", config), pair("STNGRF", ""));
}

#[test]
fn test_encode_vowels_and_exact() {
    let config = EncoderConfig::default().with_vowels(true).with_exact(true);
    assert_eq!(keys("jog", config), pair("JAG", ""));
    assert_eq!(keys("Wagner", config), pair("AGNAR", "VAGNAR"));
}

#[test]
fn test_key_length_truncates() {
    let short = EncoderConfig::default().with_max_key_length(2);
    assert_eq!(keys("Smith", short), pair("SM", "XM"));
    // alternate collapses onto the primary once truncated
    assert_eq!(keys("habitual", short), pair("HP", ""));
    assert_eq!(
        keys("stenography", EncoderConfig::default().with_max_key_length(4)),
        pair("STNK", "")
    );
}

#[test]
fn test_configure_clamps() {
    let mut encoder = Encoder::new();
    assert!(encoder.configure(false, false, 10));
    assert_eq!(encoder.config().max_key_length, 10);

    assert!(!encoder.configure(true, false, 500));
    assert_eq!(encoder.config().max_key_length, MAX_KEY_LENGTH);
    assert!(encoder.config().encode_vowels);
}

#[test]
fn test_display() {
    assert_eq!(encode("Smith").to_string(), "SM0 (XMT)");
    assert_eq!(encode("jog").to_string(), "JK");
}

// ============ Properties ============

proptest! {
    #[test]
    fn keys_respect_length(word in "[a-zA-Z]{0,40}", len in 1usize..80) {
        let config = EncoderConfig::default().with_max_key_length(len);
        let code = Encoder::with_config(config).encode(&word);
        prop_assert!(code.primary.chars().count() <= config.max_key_length);
        prop_assert!(code.secondary.chars().count() <= config.max_key_length);
        prop_assert!(code.secondary != code.primary || code.secondary.is_empty());
    }

    #[test]
    fn keys_are_ascii(word in "\\PC{0,20}") {
        let code = encode(&word);
        prop_assert!(code.primary.is_ascii());
        prop_assert!(code.secondary.is_ascii());
    }

    #[test]
    fn encoding_is_deterministic(word in "[a-z]{1,20}") {
        prop_assert_eq!(encode(&word), encode(&word));
    }
}
