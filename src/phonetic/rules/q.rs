// Consonant rules for Q
// QQ and the QU cluster

use crate::phonetic::scan::Scan;

pub(super) fn encode_q(s: &mut Scan) {
    if s.at(s.current, 3, &["QIN"]) {
        s.add("X");
        s.current += 1;
        return;
    }
    if s.char_at(s.current + 1) == 'Q' {
        s.current += 2;
    } else {
        s.current += 1;
    }
    s.add("K");
}

#[cfg(test)]
mod tests {
    use crate::phonetic::rules::testing::assert_keys;
    use crate::phonetic::EncoderConfig;

    #[test]
    fn test_q_words() {
        assert_keys(
            EncoderConfig::default(),
            &[
                ("QUEEN", "KN", ""),
                ("QIN", "XN", ""),
                ("QUIT", "KT", ""),
                ("UNIQUE", "ANK", ""),
                ("QATAR", "KTR", ""),
            ],
        );
    }

    #[test]
    fn test_q_words_with_vowels() {
        assert_keys(
            EncoderConfig::default().with_vowels(true),
            &[
                ("QUEEN", "KAN", ""),
                ("QIN", "XAN", ""),
                ("QUIT", "KAT", ""),
            ],
        );
    }
}
