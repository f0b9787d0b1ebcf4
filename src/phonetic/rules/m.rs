// Consonant rules for M
// Silent M and MB collapsing

use crate::phonetic::scan::{Rule, Scan};

const M_RULES: &[Rule] = &[
    silent_m_at_beginning,
    mr_and_mrs,
    mac,
    mpt,
];

pub(super) fn encode_m(s: &mut Scan) {
    if s.first_match(M_RULES) {
        return;
    }
    mb(s);
    s.add("M");
}

fn silent_m_at_beginning(s: &mut Scan) -> bool {
    if s.current == 0 && s.at(s.current, 2, &["MN"]) {
        s.current += 1;
        return true;
    }
    false
}

fn mr_and_mrs(s: &mut Scan) -> bool {
    if s.current == 0 && s.at(s.current, 2, &["MR"]) {
        if s.length == 2 && s.at(s.current, 2, &["MR"]) {
            if s.encode_vowels {
                s.add("MASTAR");
            } else {
                s.add("MSTR");
            }
            s.current += 2;
            return true;
        } else if s.length == 3 && s.at(s.current, 3, &["MRS"]) {
            if s.encode_vowels {
                s.add("MASAS");
            } else {
                s.add("MSS");
            }
            s.current += 3;
            return true;
        }
    }
    false
}

fn mac(s: &mut Scan) -> bool {
    if s.current == 0
        && (s.at(0, 7, &["MACIVER", "MACEWEN"])
            || s.at(0, 8, &["MACELROY", "MACILROY"])
            || s.at(0, 9, &["MACINTOSH"])
            || s.at(0, 2, &["MC"]))
    {
        if s.encode_vowels {
            s.add("MAK");
        } else {
            s.add("MK");
        }
        if s.at(0, 2, &["MC"]) {
            if s.at(s.current + 2, 1, &["K", "G", "Q"]) && !s.at(s.current + 2, 4, &["GEOR"]) {
                s.current += 3;
            } else {
                s.current += 2;
            }
        } else {
            s.current += 3;
        }
        return true;
    }
    false
}

fn mpt(s: &mut Scan) -> bool {
    if s.at(s.current - 2, 8, &["COMPTROL"]) || s.at(s.current - 4, 7, &["ACCOMPT"]) {
        s.add("N");
        s.current += 2;
        return true;
    }
    false
}

fn test_silent_mb_1(s: &mut Scan) -> bool {
    (s.current == 3 && s.at(s.current - 3, 5, &["THUMB"]))
        || (s.current == 2
            && s.at(s.current - 2, 4, &["DUMB", "BOMB", "DAMN", "LAMB", "NUMB", "TOMB"]))
}

fn test_pronounced_mb(s: &Scan) -> bool {
    s.at(s.current - 2, 6, &["NUMBER"])
        || (s.at(s.current + 2, 1, &["A"]) && !s.at(s.current - 2, 7, &["DUMBASS"]))
        || s.at(s.current + 2, 1, &["O"])
        || s.at(s.current - 2, 6, &["LAMBEN", "LAMBER", "LAMBET", "TOMBIG", "LAMBRE"])
}

fn test_silent_mb_2(s: &Scan) -> bool {
    s.char_at(s.current + 1) == 'B'
        && s.current > 1
        && (s.current + 1 == s.last
            || s.at(s.current + 2, 3, &["ING", "ABL"])
            || s.at(s.current + 2, 4, &["LIKE"])
            || (s.char_at(s.current + 2) == 'S' && s.current + 2 == s.last)
            || s.at(s.current - 5, 7, &["BUNCOMB"])
            || (s.at(s.current + 2, 2, &["ED", "ER"])
                && s.current + 3 == s.last
                && (s.at(0, 5, &["CLIMB", "PLUMB"])
                    || !s.at(s.current - 1, 5, &["IMBER", "AMBER", "EMBER", "UMBER"]))
                && !s.at(s.current - 2, 6, &["CUMBER", "SOMBER"])))
}

fn test_pronounced_mb_2(s: &Scan) -> bool {
    s.at(s.current - 1, 5, &["OMBAS", "OMBAD", "UMBRA"]) || s.at(s.current - 3, 4, &["FLAM"])
}

fn test_mn(s: &Scan) -> bool {
    s.char_at(s.current + 1) == 'N'
        && (s.current + 1 == s.last
            || (s.at(s.current + 2, 3, &["ING", "EST"]) && s.current + 4 == s.last)
            || (s.char_at(s.current + 2) == 'S' && s.current + 2 == s.last)
            || (s.at(s.current + 2, 2, &["LY", "ER", "ED"]) && s.current + 3 == s.last)
            || s.at(s.current - 2, 9, &["DAMNEDEST"])
            || s.at(s.current - 5, 9, &["GODDAMNIT"]))
}

fn mb(s: &mut Scan) {
    if test_silent_mb_1(s) {
        if test_pronounced_mb(s) {
            s.current += 1;
        } else {
            s.current += 2;
        }
    } else if test_silent_mb_2(s) {
        if test_pronounced_mb_2(s) {
            s.current += 1;
        } else {
            s.current += 2;
        }
    } else if test_mn(s) {
        s.current += 2;
    } else if s.char_at(s.current + 1) == 'M' {
        s.current += 2;
    } else {
        s.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::phonetic::rules::testing::assert_keys;
    use crate::phonetic::EncoderConfig;

    #[test]
    fn test_m_words() {
        assert_keys(
            EncoderConfig::default(),
            &[
                ("DUMB", "TM", ""),
                ("THUMB", "0M", ""),
                ("TOMB", "TM", ""),
                ("CLIMB", "KLM", ""),
                ("LAMB", "LM", ""),
                ("NUMBER", "NMPR", ""),
                ("CUMBERLAND", "KMPRLNT", ""),
                ("DAMN", "TM", ""),
                ("COMPTROLLER", "KNTRLR", ""),
                ("MACINTOSH", "MKNTX", ""),
                ("MCMILLAN", "MKMLN", ""),
                ("HAMMER", "HMR", ""),
            ],
        );
    }

    #[test]
    fn test_m_words_with_vowels() {
        assert_keys(
            EncoderConfig::default().with_vowels(true),
            &[
                ("DUMB", "TAM", ""),
                ("THUMB", "0AM", ""),
                ("TOMB", "TAM", ""),
            ],
        );
    }

    #[test]
    fn test_m_words_exact() {
        assert_keys(
            EncoderConfig::default().with_exact(true),
            &[
                ("DUMB", "DM", ""),
                ("NUMBER", "NMBR", ""),
                ("CUMBERLAND", "KMBRLND", ""),
            ],
        );
    }
}
