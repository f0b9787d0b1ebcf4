// Phonetic Encoder
// Metaphone 3 style approximate pronunciation keys for words and fragments
//
// The encoder scans the uppercased word left to right. Each consonant has an
// ordered cascade of literal look-ahead/look-behind rules (see `rules/`) and
// the first rule that fires decides what is emitted and how far the cursor
// moves. Vowels collapse to a single `A` marker, emitted for the first
// letter always and for interior vowels only when `encode_vowels` is set.

mod rules;
mod scan;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use scan::Scan;

/// Largest key length the encoder will produce
pub const MAX_KEY_LENGTH: usize = 64;

/// Key length used when none is configured
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Encode non-initial vowels as `A`
    pub encode_vowels: bool,
    /// Keep B/P, D/T, G/K and V/F distinct
    pub encode_exact: bool,
    /// Truncate both keys to this many symbols (1..=64)
    pub max_key_length: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            encode_vowels: false,
            encode_exact: false,
            max_key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

impl EncoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vowels(mut self, encode_vowels: bool) -> Self {
        self.encode_vowels = encode_vowels;
        self
    }

    pub fn with_exact(mut self, encode_exact: bool) -> Self {
        self.encode_exact = encode_exact;
        self
    }

    /// Set the key length, clamped to `1..=MAX_KEY_LENGTH`
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length.clamp(1, MAX_KEY_LENGTH);
        self
    }
}

/// Primary and alternate pronunciation keys for one token.
///
/// `secondary` is empty when the word has no distinct alternate
/// pronunciation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneticCode {
    pub primary: String,
    pub secondary: String,
}

impl PhoneticCode {
    /// Alternate key, if the word has one
    pub fn alternate(&self) -> Option<&str> {
        (!self.secondary.is_empty()).then_some(self.secondary.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alternate() {
            Some(alt) => write!(f, "{} ({})", self.primary, alt),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// Phonetic encoder
///
/// A small `Copy` value holding only configuration. Each call to
/// [`Encoder::encode`] builds its own scan state, so one encoder can be
/// shared freely across threads.
///
/// # Example
///
/// ```
/// use steno_lookup::phonetic::Encoder;
///
/// let code = Encoder::new().encode("Smith");
/// assert_eq!(code.primary, "SM0");
/// assert_eq!(code.secondary, "XMT");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Encoder with default settings (no vowels, approximate, 32 symbols)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            config: config.with_max_key_length(config.max_key_length),
        }
    }

    /// Change all three settings at once.
    ///
    /// # Returns
    /// `false` if `max_key_length` was above [`MAX_KEY_LENGTH`] and had to be
    /// clamped, `true` otherwise
    pub fn configure(
        &mut self,
        encode_vowels: bool,
        encode_exact: bool,
        max_key_length: usize,
    ) -> bool {
        self.config = EncoderConfig {
            encode_vowels,
            encode_exact,
            max_key_length: max_key_length.clamp(1, MAX_KEY_LENGTH),
        };
        max_key_length <= MAX_KEY_LENGTH
    }

    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    /// Encode one token.
    ///
    /// Total over all input: empty or non-alphabetic text yields an empty
    /// code.
    pub fn encode(&self, text: &str) -> PhoneticCode {
        let word = spoken_letter(text).to_uppercase();
        let max_len = self.config.max_key_length;

        let mut scan = Scan::new(&word, &self.config);
        rules::run(&mut scan, max_len);

        let Scan {
            mut primary,
            mut secondary,
            ..
        } = scan;
        primary.truncate(max_len);
        secondary.truncate(max_len);
        if primary == secondary {
            secondary.clear();
        }
        PhoneticCode { primary, secondary }
    }
}

/// Encode with the default configuration
pub fn encode(text: &str) -> PhoneticCode {
    Encoder::new().encode(text)
}

/// Expand a lone letter to how it is spoken ("F" → "ef", "Q" → "queue") so
/// single-symbol fragments still encode to something meaningful.
///
/// Anything that is not exactly one character comes back unchanged.
pub fn spoken_letter(text: &str) -> Cow<'_, str> {
    let mut chars = text.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Cow::Borrowed(text);
    };

    let spoken = match letter.to_uppercase().collect::<String>().as_str() {
        "A" => "aye",
        "B" => "bee",
        "C" => "see",
        "D" => "dee",
        "E" => "ee",
        "F" => "ef",
        "G" => "gee",
        "H" => "aych",
        "I" => "eye",
        "J" => "jay",
        "K" => "kay",
        "L" => "el",
        "M" => "em",
        "N" => "en",
        "O" => "oh",
        "P" => "pee",
        "Q" => "queue",
        "R" => "are",
        "S" => "ess",
        "T" => "tee",
        "U" => "you",
        "V" => "vee",
        "W" => "doubleyou",
        "X" => "ex",
        "Y" => "why",
        "Z" => "zee",
        _ => return Cow::Borrowed(text),
    };
    Cow::Borrowed(spoken)
}
