// Consonant rules for F
// F with the OFTEN exception

use crate::phonetic::scan::Scan;

pub(super) fn encode_f(s: &mut Scan) {
    if s.at(s.current - 1, 5, &["OFTEN"]) {
        s.add_two("F", "FT");
        s.current += 2;
        return;
    }
    if s.char_at(s.current + 1) == 'F' {
        s.current += 2;
    } else {
        s.current += 1;
    }
    s.add("F");
}

#[cfg(test)]
mod tests {
    use crate::phonetic::rules::testing::assert_keys;
    use crate::phonetic::EncoderConfig;

    #[test]
    fn test_f_words() {
        assert_keys(
            EncoderConfig::default(),
            &[
                ("OFTEN", "AFN", "AFTN"),
                ("FIFTY", "FFT", ""),
                ("PHONE", "FN", ""),
                ("AFFLUENT", "AFLNT", ""),
            ],
        );
    }

    #[test]
    fn test_f_words_with_vowels() {
        assert_keys(
            EncoderConfig::default().with_vowels(true),
            &[
                ("OFTEN", "AFAN", "AFTAN"),
                ("FIFTY", "FAFTA", ""),
                ("PHONE", "FAN", ""),
            ],
        );
    }
}
