// Consonant rules for Z
// ZZ, ZH and Italian Z

use crate::phonetic::scan::{Rule, Scan};

const Z_RULES: &[Rule] = &[
    zz,
    zu_zier_zs,
    french_ez,
    german_z,
];

pub(super) fn encode_z(s: &mut Scan) {
    if s.first_match(Z_RULES) {
        return;
    }
    if zh(s) {
        return;
    } else {
        s.add("S");
    }
    if s.char_at(s.current + 1) == 'Z' {
        s.current += 2;
    } else {
        s.current += 1;
    }
}

fn zz(s: &mut Scan) -> bool {
    if s.char_at(s.current + 1) == 'Z'
        && ((s.at(s.current + 2, 1, &["I", "O", "A"]) && s.current + 2 == s.last)
            || s.at(s.current - 2, 9, &["MOZZARELL", "PIZZICATO", "PUZZONLAN"]))
    {
        s.add_two("TS", "S");
        s.current += 2;
        return true;
    }
    false
}

fn zu_zier_zs(s: &mut Scan) -> bool {
    if (s.current == 1 && s.at(s.current - 1, 4, &["AZUR"]))
        || (s.at(s.current, 4, &["ZIER"]) && !s.at(s.current - 2, 6, &["VIZIER"]))
        || s.at(s.current, 3, &["ZSA"])
    {
        s.add_two("J", "S");
        if s.at(s.current, 3, &["ZSA"]) {
            s.current += 2;
        } else {
            s.current += 1;
        }
        return true;
    }
    false
}

fn french_ez(s: &mut Scan) -> bool {
    if (s.current == 3 && s.at(s.current - 3, 4, &["CHEZ"]))
        || s.at(s.current - 5, 6, &["RENDEZ"])
    {
        s.current += 1;
        return true;
    }
    false
}

fn german_z(s: &mut Scan) -> bool {
    if (s.current == 2 && s.current + 1 == s.last && s.at(s.current - 2, 4, &["NAZI"]))
        || s.at(s.current - 2, 6, &["NAZIFY", "MOZART"])
        || s.at(s.current - 3, 4, &["HOLZ", "HERZ", "MERZ", "FITZ"])
        || (s.at(s.current - 3, 4, &["GANZ"]) && !s.is_vowel_at(s.current + 1))
        || s.at(s.current - 4, 5, &["STOLZ", "PRINZ"])
        || s.at(s.current - 4, 7, &["VENEZIA"])
        || s.at(s.current - 3, 6, &["HERZOG"])
        || (s.contains("SCH") && !(s.at(s.last - 2, 3, &["IZE", "OZE", "ZEL"])))
        || (s.current > 0 && s.at(s.current, 4, &["ZEIT"]))
        || s.at(s.current - 3, 4, &["WEIZ"])
    {
        if s.current > 0 && s.char_at(s.current - 1) == 'T' {
            s.add("S");
        } else {
            s.add("TS");
        }
        s.current += 1;
        return true;
    }
    false
}

fn zh(s: &mut Scan) -> bool {
    if s.char_at(s.current + 1) == 'H' {
        s.add("J");
        s.current += 2;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::phonetic::rules::testing::assert_keys;
    use crate::phonetic::EncoderConfig;

    #[test]
    fn test_z_words() {
        assert_keys(
            EncoderConfig::default(),
            &[
                ("PIZZA", "PTS", "PS"),
                ("PIZZICATO", "PTSKT", "PSKT"),
                ("MOZART", "MTSRT", ""),
                ("NAZI", "NTS", ""),
                ("ZEITGEIST", "STKST", "STJST"),
                ("VENEZIA", "FNTS", ""),
                ("HERZOG", "HRTSK", ""),
                ("ZSA", "J", "S"),
                ("FITZ", "FTS", ""),
                ("RENDEZVOUS", "RNTF", ""),
            ],
        );
    }

    #[test]
    fn test_z_words_with_vowels() {
        assert_keys(
            EncoderConfig::default().with_vowels(true),
            &[
                ("PIZZA", "PATSA", "PASA"),
                ("PIZZICATO", "PATSAKATA", "PASAKATA"),
                ("MOZART", "MATSART", ""),
            ],
        );
    }

    #[test]
    fn test_z_words_exact() {
        assert_keys(
            EncoderConfig::default().with_exact(true),
            &[
                ("ZEITGEIST", "STGST", "STJST"),
                ("VENEZIA", "VNTS", ""),
                ("HERZOG", "HRTSG", ""),
            ],
        );
    }
}
