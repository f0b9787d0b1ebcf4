// Consonant rules for T
// TH, TIA/TIO, TCH and silent T

use crate::phonetic::scan::{Rule, Scan};

const T_RULES: &[Rule] = &[
    t_initial,
    tch,
    silent_french_t,
    tun_tul_tua_tuo,
    tue_teu_teou_tul_tie,
    tur_tiu_suffixes,
    ti,
    tient,
    tsch,
    tzsch,
    th_pronounced_separately,
    tth,
    th,
];

pub(super) fn encode_t(s: &mut Scan) {
    if s.first_match(T_RULES) {
        return;
    }
    if s.at(s.current + 1, 1, &["T", "D"]) {
        s.current += 2;
    } else {
        s.current += 1;
    }
    s.add("T");
}

fn t_initial(s: &mut Scan) -> bool {
    if s.current == 0 {
        if s.at(s.current + 1, 3, &["SAR", "ZAR"]) {
            s.current += 1;
            return true;
        }
        if (s.length == 3 && s.at(s.current + 1, 2, &["SO", "SA", "SU"]))
            || (s.length == 4 && s.at(s.current + 1, 3, &["SAO", "SAI"]))
            || (s.length == 5 && s.at(s.current + 1, 4, &["SING", "SANG"]))
        {
            s.add("X");
            s.advance(3, 2);
            return true;
        }
        if s.at(s.current + 1, 1, &["S"]) && s.is_vowel_at(s.current + 2) {
            s.add_two("TS", "S");
            s.advance(3, 2);
            return true;
        }
        if s.at(s.current + 1, 1, &["J"]) {
            s.add("X");
            s.advance(3, 2);
            return true;
        }
        if (s.at(s.current + 1, 2, &["HU"]) && s.length == 3)
            || s.at(s.current + 1, 3, &["HAI", "HUY", "HAO"])
            || s.at(s.current + 1, 4, &["HYME", "HYMY", "HANH"])
            || s.at(s.current + 1, 5, &["HERES"])
        {
            s.add("T");
            s.advance(3, 2);
            return true;
        }
    }
    false
}

fn tch(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 2, &["CH"]) {
        s.add("X");
        s.current += 3;
        return true;
    }
    false
}

fn silent_french_t(s: &mut Scan) -> bool {
    if (s.current == s.last && s.at(s.current - 4, 5, &["MONET", "GENET", "CHAUT"]))
        || s.at(s.current - 2, 9, &["POTPOURRI"])
        || s.at(s.current - 3, 9, &["BOATSWAIN"])
        || s.at(s.current - 3, 8, &["MORTGAGE"])
        || ((s.at(s.current - 4, 5, &[
            "BERET", "BIDET", "FILET", "DEBUT", "DEPOT", "PINOT", "TAROT",
        ])
            || s.at(s.current - 5, 6, &[
                "BALLET", "BUFFET", "CACHET", "CHALET", "ESPRIT", "RAGOUT", "GOULET", "CHABOT",
                "BENOIT",
            ])
            || s.at(s.current - 6, 7, &[
                "GOURMET", "BOUQUET", "CROCHET", "CROQUET", "PARFAIT", "PINCHOT", "CABARET",
                "PARQUET", "RAPPORT", "TOUCHET", "COURBET", "DIDEROT",
            ])
            || s.at(s.current - 7, 8, &[
                "ENTREPOT", "CABERNET", "DUBONNET", "MASSENET", "MUSCADET", "RICOCHET", "ESCARGOT",
            ])
            || s.at(s.current - 8, 9, &[
                "SOBRIQUET", "CABRIOLET", "CASSOULET", "OUBRIQUET", "CAMEMBERT",
            ]))
            && !s.at(s.current + 1, 2, &["AN", "RY", "IC", "OM", "IN"]))
    {
        s.current += 1;
        return true;
    }
    false
}

fn tun_tul_tua_tuo(s: &mut Scan) -> bool {
    if s.at(s.current - 3, 6, &["FORTUN"])
        || (s.at(s.current, 3, &["TUL"])
            && s.is_vowel_at(s.current - 1)
            && s.is_vowel_at(s.current + 3))
        || s.at(s.current - 2, 5, &["BITUA", "BITUE"])
        || (s.current > 1 && s.at(s.current, 3, &["TUA", "TUO"]))
    {
        s.add_two("X", "T");
        s.current += 1;
        return true;
    }
    false
}

fn tue_teu_teou_tul_tie(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 4, &["UENT"])
        || s.at(s.current - 4, 9, &["RIGHTEOUS"])
        || s.at(s.current - 3, 7, &["STATUTE"])
        || s.at(s.current - 3, 7, &["AMATEUR"])
        || s.at(s.current - 1, 5, &["NTULE", "NTULA", "STULE", "STULA", "STEUR"])
        || (s.current + 2 == s.last && s.at(s.current, 3, &["TUE"]))
        || s.at(s.current, 5, &["TUENC"])
        || s.at(s.current - 3, 8, &["STATUTOR"])
        || (s.current + 5 == s.last && s.at(s.current, 6, &["TIENCE"]))
    {
        s.add_two("X", "T");
        s.advance(2, 1);
        return true;
    }
    false
}

fn tur_tiu_suffixes(s: &mut Scan) -> bool {
    if s.current > 0 && s.at(s.current + 1, 3, &["URE", "URA", "URI", "URY", "URO", "IUS"]) {
        if (s.at(s.current + 1, 3, &["URA", "URO"])
            && s.current + 3 == s.last
            && !s.at(s.current - 3, 7, &["VENTURA"]))
            || s.at(s.current + 1, 4, &["URIA"])
        {
            s.add("T");
        } else {
            s.add_two("X", "T");
        }
        s.advance(2, 1);
        return true;
    }
    false
}

fn ti(s: &mut Scan) -> bool {
    if (s.at(s.current + 1, 2, &["IO"]) && !s.at(s.current - 1, 5, &["ETIOL"]))
        || s.at(s.current + 1, 3, &["IAL"])
        || s.at(s.current - 1, 5, &["RTIUM", "ATIUM"])
        || (s.at(s.current + 1, 3, &["IAN"])
            && s.current > 0
            && !(s.at(s.current - 4, 8, &["FAUSTIAN"])
                || s.at(s.current - 5, 9, &["PROUSTIAN"])
                || s.at(s.current - 2, 7, &["TATIANA"])
                || s.at(s.current - 3, 7, &["KANTIAN", "GENTIAN"])
                || s.at(s.current - 8, 12, &["ROOSEVELTIAN"])))
        || (s.current + 2 == s.last
            && s.at(s.current, 3, &["TIA"])
            && !(s.at(s.current - 3, 6, &["HESTIA", "MASTIA"])
                || s.at(s.current - 2, 5, &["OSTIA"])
                || s.at(0, 3, &["TIA"])
                || s.at(s.current - 5, 8, &["IZVESTIA"])))
        || s.at(s.current + 1, 4, &["IATE", "IATI", "IABL", "IATO", "IARY"])
        || s.at(s.current - 5, 9, &["CHRISTIAN"])
    {
        if (s.current == 2 && s.at(0, 4, &["ANTI"])) || s.at(0, 5, &["PATIO", "PITIA", "DUTIA"]) {
            s.add("T");
        } else if s.at(s.current - 4, 8, &["EQUATION"]) {
            s.add("J");
        } else if s.at(s.current, 4, &["TION"]) {
            s.add("X");
        } else if s.at(0, 5, &["KATIA", "LATIA"]) {
            s.add_two("T", "X");
        } else {
            s.add_two("X", "T");
        }

        s.advance(3, 1);
        return true;
    }
    false
}

fn tient(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 4, &["IENT"]) {
        s.add_two("X", "T");
        s.advance(3, 1);
        return true;
    }
    false
}

fn tsch(s: &mut Scan) -> bool {
    if s.at(s.current, 4, &["TSCH"]) && !s.at(s.current - 3, 4, &["WELT", "KLAT", "FEST"]) {
        s.add("X");
        s.current += 4;
        return true;
    }
    false
}

fn tzsch(s: &mut Scan) -> bool {
    if s.at(s.current, 5, &["TZSCH"]) {
        s.add("X");
        s.current += 5;
        return true;
    }
    false
}

fn th_pronounced_separately(s: &mut Scan) -> bool {
    if (s.current > 0
        && s.at(s.current + 1, 4, &[
            "HOOD", "HEAD", "HEID", "HAND", "HILL", "HOLD", "HAWK", "HEAP", "HERD", "HOLE", "HOOK",
            "HUNT", "HUMO", "HAUS", "HOFF", "HARD",
        ])
        && !s.at(s.current - 3, 5, &["SOUTH", "NORTH"]))
        || s.at(s.current + 1, 5, &["HOUSE", "HEART", "HASTE", "HYPNO", "HEQUE"])
        || (s.at(s.current + 1, 4, &["HALL"])
            && s.current + 4 == s.last
            && !s.at(s.current - 3, 5, &["SOUTH", "NORTH"]))
        || (s.at(s.current + 1, 3, &["HAM"])
            && s.current + 3 == s.last
            && !(s.at(0, 6, &["GOTHAM", "WITHAM", "LATHAM"])
                || s.at(0, 7, &["BENTHAM", "WALTHAM", "WORTHAM"])
                || s.at(0, 8, &["GRANTHAM"])))
        || (s.at(s.current + 1, 5, &["HATCH"])
            && !(s.current == 0 || s.at(s.current - 2, 8, &["UNTHATCH"])))
        || s.at(s.current - 3, 7, &["WARTHOG"])
        || s.at(s.current - 2, 6, &["ESTHER"])
        || s.at(s.current - 3, 6, &["GOETHE"])
        || s.at(s.current - 2, 8, &["NATHALIE"])
    {
        if s.at(s.current - 3, 7, &["POSTHUM"]) {
            s.add("X");
        } else {
            s.add("T");
        }
        s.current += 2;
        return true;
    }
    false
}

fn tth(s: &mut Scan) -> bool {
    if s.at(s.current, 3, &["TTH"]) {
        if s.at(s.current - 2, 5, &["MATTH"]) {
            s.add("0");
        } else {
            s.add("T0");
        }
        s.current += 3;
        return true;
    }
    false
}

fn th(s: &mut Scan) -> bool {
    if s.at(s.current, 2, &["TH"]) {
        if s.at(s.current - 3, 7, &["CLOTHES"]) {
            s.current += 3;
            return true;
        }
        if s.at(s.current + 2, 4, &[
            "OMAS", "OMPS", "OMPK", "OMSO", "OMSE", "AMES", "OVEN", "OFEN", "ILDA", "ILDE",
        ])
            || (s.at(0, 4, &["THOM"]) && s.length == 4)
            || (s.at(0, 5, &["THOMS"]) && s.length == 5)
            || s.at(0, 4, &["VAN ", "VON "])
            || s.at(0, 3, &["SCH"])
        {
            s.add("T");
        } else if s.at(0, 2, &["SM"]) {
            s.add_two("0", "T");
        } else {
            s.add("0");
        }

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
    fn test_t_words() {
        assert_keys(
            EncoderConfig::default(),
            &[
                ("THOMAS", "TMS", ""),
                ("THAMES", "TMS", ""),
                ("NATION", "NXN", ""),
                ("MARTIAL", "MRXL", "MRTL"),
                ("CHRISTIAN", "KRSXN", "KRSTN"),
                ("BALLET", "PL", ""),
                ("BUFFET", "PF", ""),
                ("GOURMET", "KRM", ""),
                ("DEPOT", "TP", ""),
                ("STATUE", "STX", "STT"),
                ("THUMB", "0M", ""),
                ("MATTHEW", "M0", ""),
                ("GOTHAM", "K0M", ""),
                ("WITHAM", "A0M", ""),
                ("BUTTON", "PTN", ""),
                ("TZAR", "SR", ""),
            ],
        );
    }

    #[test]
    fn test_t_words_with_vowels() {
        assert_keys(
            EncoderConfig::default().with_vowels(true),
            &[
                ("THOMAS", "TAMAS", ""),
                ("THAMES", "TAMS", ""),
                ("NATION", "NAXAN", ""),
            ],
        );
    }

    #[test]
    fn test_t_words_exact() {
        assert_keys(
            EncoderConfig::default().with_exact(true),
            &[
                ("BALLET", "BL", ""),
                ("BUFFET", "BF", ""),
                ("GOURMET", "GRM", ""),
            ],
        );
    }
}
