// Phonetic scan state
// Cursor, lookaround helpers and the two output keys for a single encode call

use super::EncoderConfig;

/// One entry of a letter's rule cascade: tests the scan and, on a match,
/// emits symbols and advances the cursor.
pub type Rule = fn(&mut Scan) -> bool;

/// Mutable state of one encode call.
///
/// Positions are signed so rules can look behind the start of the word
/// (`s.current - 3`) without underflow; out-of-range lookups simply fail.
#[derive(Debug, Clone)]
pub struct Scan {
    word: Vec<char>,
    text: String,
    pub length: isize,
    pub last: isize,
    pub current: isize,
    pub encode_vowels: bool,
    pub encode_exact: bool,
    /// Set by the L and S rules when "-LE"/"-SE" is re-read as a vowel
    /// before the consonant; consumed by the next E.
    pub al_inversion: bool,
    pub primary: String,
    pub secondary: String,
}

impl Scan {
    /// Start a scan over an already uppercased word.
    pub fn new(upper: &str, config: &EncoderConfig) -> Self {
        let word: Vec<char> = upper.chars().collect();
        let length = word.len() as isize;
        Self {
            text: word.iter().collect(),
            word,
            length,
            last: length - 1,
            current: 0,
            encode_vowels: config.encode_vowels,
            encode_exact: config.encode_exact,
            al_inversion: false,
            primary: String::new(),
            secondary: String::new(),
        }
    }

    /// Character at `at`, or NUL when out of range.
    #[inline]
    pub fn char_at(&self, at: isize) -> char {
        if at < 0 || at > self.last {
            return '\0';
        }
        self.word[at as usize]
    }

    /// True if the `len` characters starting at `start` equal one of `options`.
    ///
    /// An option whose own length differs from `len` can never match.
    pub fn at(&self, start: isize, len: isize, options: &[&str]) -> bool {
        if start < 0 || start > self.last || start + len - 1 > self.last {
            return false;
        }
        let window = &self.word[start as usize..(start + len) as usize];
        options.iter().any(|opt| opt.chars().eq(window.iter().copied()))
    }

    /// Whole-word substring test.
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn is_vowel_at(&self, at: isize) -> bool {
        at >= 0 && at < self.length && is_vowel(self.char_at(at))
    }

    /// Close front vowel (E, I, Y).
    pub fn front_vowel(&self, at: isize) -> bool {
        matches!(self.char_at(at), 'E' | 'I' | 'Y')
    }

    /// Spellings typical of German or Slavic words.
    pub fn slavo_germanic(&self) -> bool {
        self.at(0, 3, &["SCH"])
            || self.at(0, 2, &["SW"])
            || self.char_at(0) == 'J'
            || self.char_at(0) == 'W'
    }

    /// True if the word is `root` or one of its regular inflections
    /// (ACHE, ACHES, ACHED, ACHING, ACHINGLY, ACHY).
    pub fn root_or_inflections(&self, root: &str) -> bool {
        let inflected = |stem: &str, suffixes: &[&str]| {
            self.text.strip_prefix(stem).is_some_and(|rest| suffixes.contains(&rest))
        };
        match root.strip_suffix('E') {
            Some(stem) => {
                inflected(root, &["", "S", "D"]) || inflected(stem, &["ING", "INGLY", "Y"])
            }
            None => inflected(root, &["", "S", "ES", "ED", "ING", "INGLY", "Y"]),
        }
    }

    /// Position of the next consonant at or after `at`, passing over W and
    /// WH where they are not pronounced.
    pub fn skip_vowels(&self, mut at: isize) -> isize {
        if at < 0 {
            return 0;
        }
        if at >= self.length {
            return self.length;
        }

        let mut it = self.char_at(at);
        while is_vowel(it) || it == 'W' {
            if self.at(at, 4, &["WICZ", "WITZ", "WIAK"])
                || self.at(at - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                || (self.at(at, 5, &["WICKI", "WACKI"]) && at + 4 == self.last)
            {
                break;
            }

            at += 1;
            if self.char_at(at - 1) == 'W'
                && self.char_at(at) == 'H'
                && !(self.at(at, 3, &["HOP"])
                    || self.at(at, 4, &[
                        "HIDE", "HARD", "HEAD", "HAWK", "HERD", "HOOK", "HAND", "HOLE",
                    ])
                    || self.at(at, 5, &["HEART", "HOUSE", "HOUND"])
                    || self.at(at, 6, &["HAMMER"]))
            {
                at += 1;
            }

            if at > self.length - 1 {
                break;
            }
            it = self.char_at(at);
        }
        at
    }

    /// Advance by `not_vowels` normally, or by `vowels` when interior vowels
    /// are being encoded.
    pub fn advance(&mut self, not_vowels: isize, vowels: isize) {
        self.current += if self.encode_vowels { vowels } else { not_vowels };
    }

    /// Append the same code to both keys.
    pub fn add(&mut self, code: &str) {
        self.add_two(code, code);
    }

    /// Append `main` to the primary key and `alt` to the secondary key.
    ///
    /// A vowel marker is never doubled, and an empty `alt` adds nothing.
    pub fn add_two(&mut self, main: &str, alt: &str) {
        if !(main == "A" && self.primary.ends_with('A')) {
            self.primary.push_str(main);
        }
        if !(alt == "A" && self.secondary.ends_with('A')) && !alt.is_empty() {
            self.secondary.push_str(alt);
        }
    }

    pub fn add_exact_approx(&mut self, exact: &str, approx: &str) {
        let code = if self.encode_exact { exact } else { approx };
        self.add(code);
    }

    pub fn add_exact_approx_alt(
        &mut self,
        main_exact: &str,
        alt_exact: &str,
        main: &str,
        alt: &str,
    ) {
        if self.encode_exact {
            self.add_two(main_exact, alt_exact);
        } else {
            self.add_two(main, alt);
        }
    }

    /// Run a rule cascade; the first rule that fires wins.
    pub fn first_match(&mut self, rules: &[Rule]) -> bool {
        rules.iter().any(|rule| rule(self))
    }
}

/// Accented vowels treated like their plain forms. '?' stands in for
/// characters lost to an upstream encoding.
const ACCENTED_VOWELS: &str = "ŔÁÂĂÄĹĆČÉĘËĚÍÎĎŇÓÔŐÖ?ŘŮÚŰÜÝ";

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y') || ACCENTED_VOWELS.contains(c)
}
