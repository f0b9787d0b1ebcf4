// Consonant rules for K
// Silent K before N

use crate::phonetic::scan::Scan;

pub(super) fn encode_k(s: &mut Scan) {
    if !silent_k(s) {
        s.add("K");
        if s.char_at(s.current + 1) == 'K' || s.char_at(s.current + 1) == 'Q' {
            s.current += 2;
        } else {
            s.current += 1;
        }
    }
}

fn silent_k(s: &mut Scan) -> bool {
    if s.current == 0 && s.at(s.current, 2, &["KN"]) {
        if !(s.at(s.current + 2, 5, &["ESSET", "IEVEL"]) || s.at(s.current + 2, 3, &["ISH"])) {
            s.current += 1;
            return true;
        }
    }
    if (s.at(s.current + 1, 3, &["NOW", "NIT", "NOT", "NOB"]) && !s.at(0, 8, &["BANKNOTE"]))
        || s.at(s.current + 1, 4, &["NOCK", "NUCK", "NIFE", "NACK"])
        || s.at(s.current + 1, 5, &["NIGHT"])
    {
        if s.current > 0 && s.char_at(s.current - 1) == 'N' {
            s.current += 2;
        } else {
            s.current += 1;
        }
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::phonetic::rules::testing::assert_keys;
    use crate::phonetic::EncoderConfig;

    #[test]
    fn test_k_words() {
        assert_keys(
            EncoderConfig::default(),
            &[
                ("KNIGHT", "NT", ""),
                ("KNOT", "NT", ""),
                ("KNOW", "N", ""),
                ("KNIFE", "NF", ""),
                ("BANKNOTE", "PNKNT", ""),
                ("KISS", "KS", ""),
                ("KKK", "KK", ""),
            ],
        );
    }

    #[test]
    fn test_k_words_with_vowels() {
        assert_keys(
            EncoderConfig::default().with_vowels(true),
            &[
                ("KNIGHT", "NAT", ""),
                ("KNOT", "NAT", ""),
                ("KNOW", "NA", ""),
            ],
        );
    }

    #[test]
    fn test_k_words_exact() {
        assert_keys(
            EncoderConfig::default().with_exact(true),
            &[
                ("BANKNOTE", "BNKNT", ""),
            ],
        );
    }
}
