// Performance benchmarks for steno-lookup operations

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::time::Instant;
use steno_lookup::{encode, StenoSearch, StrokeMatcher};

/// Left bank, vowels and right bank in steno order
const LEFT: &[&str] = &["S", "T", "K", "P", "W", "H", "R"];
const VOWELS: &[&str] = &["A", "O", "*", "E", "U"];
const RIGHT: &[&str] = &["F", "R", "P", "B", "L", "G", "T", "S", "D", "Z"];

const WORDS: &[&str] = &[
    "jog", "things", "combination", "nevertheless", "raspberries", "phone", "judge", "game",
];

fn main() {
    println!("Steno Lookup Performance Benchmarks\n");

    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let search = StenoSearch::new().expect("Failed to load search engine");

    // Warmup
    let _ = search.lookup("jog");

    bench_encode();
    bench_known_strokes();
    bench_random_strokes(&mut rng);
    bench_lookup(&search);

    println!("\nBenchmarks completed!");
}

/// Random chord: a subset of each bank, kept in steno order
fn random_chord(rng: &mut ChaCha20Rng) -> String {
    let mut chord = String::new();
    for bank in [LEFT, VOWELS, RIGHT] {
        for key in bank {
            if rng.gen_bool(0.3) {
                chord.push_str(key);
            }
        }
    }
    if chord.is_empty() {
        chord.push_str(LEFT.choose(rng).unwrap_or(&"S"));
    }
    chord
}

fn bench_encode() {
    println!("PHONETIC ENCODER");
    println!("─────────────────────────────");

    let start = Instant::now();
    let rounds = 1000;
    for _ in 0..rounds {
        for word in WORDS {
            let _ = encode(word);
        }
    }
    let duration = start.elapsed();

    println!(
        "  {} encodes in {:.3}ms ({:.3}µs avg)",
        rounds * WORDS.len(),
        duration.as_secs_f64() * 1000.0,
        duration.as_secs_f64() * 1e6 / (rounds * WORDS.len()) as f64
    );
    println!();
}

fn bench_known_strokes() {
    println!("KNOWN STROKES");
    println!("─────────────────────────────");

    let matcher = StrokeMatcher::new();
    let cases = [
        ("SKWROG", "jog"),
        ("THEUPBGS", "things"),
        ("KPWEU/TPHAEUGS", "combination"),
        ("TPH*EFR/THELS", "nevertheless"),
        ("RAS/PWER/KWREU/-S", "raspberries"),
        ("TKEUS/TREUBGT/OF/KHRUPL/KWRA", "District of Columbia"),
    ];

    for (stroke, translation) in cases {
        let start = Instant::now();
        let result = matcher.match_stroke(stroke, translation);
        let duration = start.elapsed();

        println!(
            "  {:<30} → {:<24} in {:.3}ms",
            stroke,
            result.best_hint,
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_random_strokes(rng: &mut ChaCha20Rng) {
    println!("RANDOM STROKES (seeded)");
    println!("─────────────────────────────");

    let matcher = StrokeMatcher::new();
    let strokes: Vec<(String, &str)> = (0..50)
        .map(|_| {
            let chords = rng.gen_range(1..=2);
            let stroke: Vec<String> = (0..chords).map(|_| random_chord(rng)).collect();
            (stroke.join("/"), *WORDS.choose(rng).unwrap_or(&"jog"))
        })
        .collect();

    let start = Instant::now();
    let mut truncated = 0;
    for (stroke, word) in &strokes {
        if matcher.match_stroke(stroke, word).truncated {
            truncated += 1;
        }
    }
    let total = start.elapsed();

    println!(
        "  {} strokes in {:.3}ms ({:.3}ms avg, {} truncated)",
        strokes.len(),
        total.as_secs_f64() * 1000.0,
        (total.as_secs_f64() / strokes.len() as f64) * 1000.0,
        truncated
    );
    println!();
}

fn bench_lookup(search: &StenoSearch) {
    println!("DICTIONARY LOOKUP");
    println!("─────────────────────");

    for term in ["jog", "com", "things", "nevertheless"] {
        let start = Instant::now();
        let results = search.lookup(term);
        let duration = start.elapsed();

        println!(
            "  {:<14} → {} results in {:.3}ms",
            term,
            results.len(),
            duration.as_secs_f64() * 1000.0
        );
    }

    let stats = search.stats();
    println!("\nDictionary Statistics");
    println!("─────────────────────────");
    println!("  Strokes: {}", stats.entries);
    println!("  Translations: {}", stats.translations);
    println!("  Buckets: {}", stats.buckets);
}
