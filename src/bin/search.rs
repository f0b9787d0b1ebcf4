// Steno Search CLI Tool
// Command-line interface for steno stroke lookup

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::path::PathBuf;
use steno_lookup::{
    DataLoader, Dictionary, DictionaryError, Encoder, EncoderConfig, MatchKind, MatchResult,
    StenoSearch,
};

/// Steno Search Tool - find the strokes for a word and see how they spell it
#[derive(Parser, Debug)]
#[command(name = "steno-search")]
#[command(about = "Look up steno strokes by translation and explain their keys", long_about = None)]
#[command(version)]
struct Args {
    /// Word to look up (or the translation, with --stroke; or the word to encode, with --encode)
    #[arg(value_name = "TERM")]
    term: String,

    /// Dictionary JSON file to load (repeatable; earlier files win)
    #[arg(short, long, value_name = "FILE")]
    dict: Vec<PathBuf>,

    /// JSON array of dictionary paths, relative to the order file
    #[arg(short, long, value_name = "FILE")]
    order: Option<PathBuf>,

    /// Load a prebuilt index snapshot instead of JSON dictionaries
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Write the loaded index to a snapshot file
    #[arg(long, value_name = "FILE")]
    save_snapshot: Option<PathBuf>,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Show exact matches only
    #[arg(long)]
    exact_only: bool,

    /// Explain this stroke against TERM instead of searching
    #[arg(short, long, value_name = "STROKE")]
    stroke: Option<String>,

    /// Print the phonetic key of TERM
    #[arg(short, long)]
    encode: bool,

    /// Encode interior vowels (with --encode)
    #[arg(long)]
    vowels: bool,

    /// Keep voiced and unvoiced consonants apart (with --encode)
    #[arg(long)]
    exact: bool,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

/// Writes log records to stderr
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger: Debug with `--verbose`, Warn otherwise
fn init_logging(verbose: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logging(args.verbose)?;

    if args.encode {
        let config = EncoderConfig::default()
            .with_vowels(args.vowels)
            .with_exact(args.exact);
        let code = Encoder::with_config(config).encode(&args.term);
        println!("{}", code);
        return Ok(());
    }

    let search = StenoSearch::with_dictionary(load_dictionary(&args)?);

    if args.verbose {
        let stats = search.stats();
        println!(
            "Dictionary loaded: {} strokes, {} translations in {} buckets\n",
            stats.entries, stats.translations, stats.buckets
        );
    }

    if let Some(path) = &args.save_snapshot {
        search.dictionary().save_snapshot(path)?;
        if args.verbose {
            println!("Snapshot written to {}\n", path.display());
        }
    }

    if let Some(stroke) = &args.stroke {
        print_result(stroke, &args.term, &search.explain(stroke, &args.term));
        return Ok(());
    }

    let mut results = search.lookup(&args.term);
    if args.exact_only {
        results.retain(|r| r.kind == MatchKind::Exact);
    }
    results.truncate(args.limit);

    if results.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    println!("Found {} matches:\n", results.len());
    for (idx, result) in results.iter().enumerate() {
        print!("{}. ", idx + 1);
        if let Some(explanation) = &result.explanation {
            print_result(&result.stroke, &result.translation, explanation);
        }
        if args.verbose {
            println!("      Match: {}", result.kind);
        }
        println!();
    }

    Ok(())
}

/// Snapshot, then order file and explicit dictionaries, then the sample
fn load_dictionary(args: &Args) -> Result<Dictionary, DictionaryError> {
    if let Some(path) = &args.snapshot {
        return Dictionary::load_snapshot(path);
    }
    if args.order.is_none() && args.dict.is_empty() {
        return DataLoader::sample_dictionary();
    }

    let mut dictionary = Dictionary::new();
    if let Some(order) = &args.order {
        dictionary.load_order_file(order)?;
    }
    for path in &args.dict {
        dictionary.load_file(path)?;
    }
    Ok(dictionary)
}

fn print_result(stroke: &str, translation: &str, result: &MatchResult) {
    println!("{:<24} → {}", stroke, translation);
    let (keys, hints) = chord_table(result);
    println!("      {}", keys);
    println!("      {}", hints);
    println!(
        "      Hint: {}  Score: {:.3} {}",
        result.best_hint,
        result.score,
        score_bar(result.score)
    );
    if result.truncated {
        println!("      (search was cut short)");
    }
}

/// Two aligned rows: segment literals above their hints, chords split by '/'
fn chord_table(result: &MatchResult) -> (String, String) {
    let mut keys = Vec::new();
    let mut hints = Vec::new();
    for (idx, decomposition) in result.segments_per_chord.iter().enumerate() {
        if idx > 0 {
            keys.push("/".to_string());
            hints.push(" ".to_string());
        }
        for segment in decomposition.iter() {
            let width = segment.literal.chars().count().max(segment.hint.chars().count());
            keys.push(format!("{:<width$}", segment.literal));
            hints.push(format!("{:<width$}", segment.hint));
        }
    }
    (keys.join(" "), hints.join(" "))
}

/// Generate a visual score bar
fn score_bar(score: f64) -> String {
    let bar_len = 10;
    let filled = (score.clamp(0.0, 1.0) * bar_len as f64) as usize;
    let mut bar = String::from("[");
    for i in 0..bar_len {
        if i < filled {
            bar.push('█');
        } else {
            bar.push('░');
        }
    }
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use steno_lookup::{Decomposition, Segment};

    #[test]
    fn test_score_bar() {
        let bar = score_bar(0.5);
        assert!(bar.contains('█'));
        assert!(bar.contains('░'));
        assert!(bar.starts_with('['));
        assert!(bar.ends_with(']'));
    }

    #[test]
    fn test_score_bar_full() {
        assert_eq!(score_bar(1.1), "[██████████]");
    }

    #[test]
    fn test_score_bar_empty() {
        assert_eq!(score_bar(0.0), "[░░░░░░░░░░]");
    }

    #[test]
    fn test_init_logging() {
        let result: Result<(), Box<dyn std::error::Error>> =
            init_logging(true).map_err(Into::into);
        assert!(result.is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(log::log_enabled!(log::Level::Debug));
        // a second logger is refused
        assert!(init_logging(false).is_err());
    }

    #[test]
    fn test_chord_table_alignment() {
        let result = MatchResult {
            segments_per_chord: vec![
                Decomposition::new(vec![Segment::new("K", "k"), Segment::new("PW", "b")]),
                Decomposition::new(vec![Segment::new("GS", "ion")]),
            ],
            best_hint: "kb/ion".to_string(),
            score: 0.5,
            truncated: false,
        };
        let (keys, hints) = chord_table(&result);
        assert_eq!(keys, "K PW / GS ");
        assert_eq!(hints, "k b    ion");
    }
}
