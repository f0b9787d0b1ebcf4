// Consonant rules for H
// Silent and aspirated H

use crate::phonetic::scan::{Rule, Scan};

const H_RULES: &[Rule] = &[
    initial_silent_h,
    initial_hs,
    initial_hu_hw,
    non_initial_silent_h,
];

pub(super) fn encode_h(s: &mut Scan) {
    if s.first_match(H_RULES) {
        return;
    }
    if !h_pronounced(s) {
        s.current += 1;
    }
}

fn initial_silent_h(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 3, &["OUR", "ERB", "EIR"])
        || s.at(s.current + 1, 4, &["ONOR"])
        || s.at(s.current + 1, 5, &["ONOUR", "ONEST"])
    {
        if s.current == 0 && s.at(s.current, 4, &["HERB"]) {
            if s.encode_vowels {
                s.add_two("HA", "A");
            } else {
                s.add_two("H", "A");
            }
        } else if s.current == 0 || s.encode_vowels {
            s.add("A");
        }
        s.current += 1;
        s.current = s.skip_vowels(s.current);
        return true;
    }
    false
}

fn initial_hs(s: &mut Scan) -> bool {
    if s.current == 0 && s.at(0, 2, &["HS"]) {
        s.add("X");
        s.current += 2;
        return true;
    }
    false
}

fn initial_hu_hw(s: &mut Scan) -> bool {
    if s.at(0, 3, &["HUA", "HUE", "HWA"]) {
        if !s.at(s.current, 4, &["HUEY"]) {
            s.add("A");
            if !s.encode_vowels {
                s.current += 3;
            } else {
                s.current += 1;
                while s.is_vowel_at(s.current) || s.char_at(s.current) == 'W' {
                    s.current += 1;
                }
            }
            return true;
        }
    }
    false
}

fn non_initial_silent_h(s: &mut Scan) -> bool {
    if s.at(s.current - 2, 5, &[
        "NIHIL", "VEHEM", "LOHEN", "NEHEM", "MAHON", "MAHAN", "COHEN", "GAHAN",
    ])
        || s.at(s.current - 3, 6, &["GRAHAM", "PROHIB", "FRAHER", "TOOHEY", "TOUHEY"])
        || s.at(s.current - 3, 5, &["TOUHY"])
        || s.at(0, 9, &["CHIHUAHUA"])
    {
        if !s.encode_vowels {
            s.current += 2;
        } else {
            s.current += 1;
            s.current = s.skip_vowels(s.current);
        }
        return true;
    }
    false
}

fn h_pronounced(s: &mut Scan) -> bool {
    if ((s.current == 0
        || s.is_vowel_at(s.current - 1)
        || (s.current > 0 && s.char_at(s.current - 1) == 'W'))
        && s.is_vowel_at(s.current + 1))
        || (s.char_at(s.current + 1) == 'H' && s.is_vowel_at(s.current + 2))
    {
        s.add("H");
        s.advance(2, 1);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::phonetic::rules::testing::assert_keys;
    use crate::phonetic::EncoderConfig;

    #[test]
    fn test_h_words() {
        assert_keys(
            EncoderConfig::default(),
            &[
                ("HERB", "HRP", "ARP"),
                ("HONOR", "ANR", ""),
                ("HOUR", "AR", ""),
                ("GRAHAM", "KRM", ""),
                ("TOOHEY", "T", ""),
                ("COHEN", "KN", ""),
                ("CHIHUAHUA", "X", ""),
                ("AHEAD", "AHT", ""),
                ("JOHANN", "AHN", ""),
                ("VEHEMENT", "FMNT", ""),
                ("PROHIBIT", "PRPT", ""),
            ],
        );
    }

    #[test]
    fn test_h_words_with_vowels() {
        assert_keys(
            EncoderConfig::default().with_vowels(true),
            &[
                ("HERB", "HARP", "ARP"),
                ("HONOR", "ANAR", ""),
                ("HOUR", "AR", ""),
            ],
        );
    }

    #[test]
    fn test_h_words_exact() {
        assert_keys(
            EncoderConfig::default().with_exact(true),
            &[
                ("HERB", "HRB", "ARB"),
                ("GRAHAM", "GRM", ""),
                ("AHEAD", "AHD", ""),
            ],
        );
    }
}
