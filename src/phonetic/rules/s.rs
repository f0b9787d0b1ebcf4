// Consonant rules for S
// SH, SCH, SC, silent S and the S/Z/X alternations

use crate::phonetic::scan::{Rule, Scan};

const S_RULES: &[Rule] = &[
    skj,
    special_sw,
    sj,
    silent_french_s_final,
    silent_french_s_internal,
    isl,
    stl,
    christmas,
    sthm,
    isten,
    sugar,
    sh,
    sch,
    sur,
    su,
    ssio,
    ss,
    sia,
    sio,
    anglicisations,
    sc,
    sea_sui_sier,
    sea,
];

pub(super) fn encode_s(s: &mut Scan) {
    if s.first_match(S_RULES) {
        return;
    }
    s.add("S");
    if s.at(s.current + 1, 1, &["S", "Z"]) && !s.at(s.current + 1, 2, &["SH"]) {
        s.current += 2;
    } else {
        s.current += 1;
    }
}

fn special_sw(s: &mut Scan) -> bool {
    if s.current == 0 {
        if sw_name_with_alt_sv(s) {
            s.add_two("S", "SV");
            s.current += 2;
            return true;
        }
        if sw_name_with_alt_xv(s) {
            s.add_two("S", "XV");
            s.current += 2;
            return true;
        }
    }
    false
}

fn skj(s: &mut Scan) -> bool {
    if s.at(s.current, 4, &["SKJO", "SKJU"]) && s.is_vowel_at(s.current + 3) {
        s.add("X");
        s.current += 3;
        return true;
    }
    false
}

fn sj(s: &mut Scan) -> bool {
    if s.at(0, 2, &["SJ"]) {
        s.add("X");
        s.current += 2;
        return true;
    }
    false
}

fn silent_french_s_final(s: &mut Scan) -> bool {
    if s.at(0, 5, &["LOUIS"]) && s.current == s.last {
        s.add_two("S", "");
        s.current += 1;
        return true;
    }
    if (s.current == s.last
        && (s.at(0, 4, &["YVES"])
            || (s.at(0, 4, &["HORS"]) && s.current == 3)
            || s.at(s.current - 4, 5, &["CAMUS", "YPRES"])
            || s.at(s.current - 5, 6, &["MESNES", "DEBRIS", "BLANCS", "INGRES", "CANNES"])
            || s.at(s.current - 6, 7, &[
                "CHABLIS", "APROPOS", "JACQUES", "ELYSEES", "OEUVRES", "GEORGES", "DESPRES",
            ])
            || s.at(0, 8, &["ARKANSAS", "FRANCAIS", "CRUDITES", "BRUYERES"])
            || s.at(0, 9, &["DESCARTES", "DESCHUTES", "DESCHAMPS", "DESROCHES", "DESCHENES"])
            || s.at(0, 10, &["RENDEZVOUS"])
            || s.at(0, 11, &["CONTRETEMPS", "DESLAURIERS"])))
        || (s.current == s.last
            && s.at(s.current - 2, 2, &["AI", "OI", "UI"])
            && !s.at(0, 4, &["LOIS", "LUIS"]))
    {
        s.current += 1;
        return true;
    }
    false
}

fn silent_french_s_internal(s: &mut Scan) -> bool {
    if s.at(s.current - 2, 9, &["DESCARTES"])
        || s.at(s.current - 2, 7, &[
            "DESCHAM", "DESPRES", "DESROCH", "DESROSI", "DESJARD", "DESMARA", "DESCHEN", "DESHOTE",
            "DESLAUR",
        ])
        || s.at(s.current - 2, 6, &["MESNES"])
        || s.at(s.current - 5, 8, &["DUQUESNE", "DUCHESNE"])
        || s.at(s.current - 7, 10, &["BEAUCHESNE"])
        || s.at(s.current - 3, 7, &["FRESNEL"])
        || s.at(s.current - 3, 9, &["GROSVENOR"])
        || s.at(s.current - 4, 10, &["LOUISVILLE"])
        || s.at(s.current - 7, 10, &["ILLINOISAN"])
    {
        s.current += 1;
        return true;
    }
    false
}

fn isl(s: &mut Scan) -> bool {
    if (s.at(s.current - 2, 4, &["LISL", "LYSL", "AISL"])
        && !s.at(s.current - 3, 7, &["PAISLEY", "BAISLEY", "ALISLAM", "ALISLAH", "ALISLAA"]))
        || (s.current == 1
            && (s.at(s.current - 1, 4, &["ISLE"]) || s.at(s.current - 1, 5, &["ISLAN"]))
            && !s.at(s.current - 1, 5, &["ISLEY", "ISLER"]))
    {
        s.current += 1;
        return true;
    }
    false
}

fn stl(s: &mut Scan) -> bool {
    if (s.at(s.current, 4, &["STLE", "STLI"]) && !s.at(s.current + 2, 4, &["LESS", "LIKE", "LINE"]))
        || s.at(s.current - 3, 7, &["THISTLY", "BRISTLY", "GRISTLY"])
        || s.at(s.current - 1, 5, &["USCLE"])
    {
        if s.at(0, 7, &["KRISTEN", "KRYSTLE", "CRYSTLE", "KRISTLE"])
            || s.at(0, 11, &["CHRISTENSEN", "CHRISTENSON"])
            || s.at(s.current - 3, 9, &["FIRSTLING"])
            || s.at(s.current - 2, 8, &["NESTLING", "WESTLING"])
        {
            s.add("ST");
            s.current += 2;
        } else {
            if s.encode_vowels
                && s.char_at(s.current + 3) == 'E'
                && s.char_at(s.current + 4) != 'R'
                && !s.at(s.current + 3, 4, &["ETTE", "ETTA"])
                && !s.at(s.current + 3, 2, &["EY"])
            {
                s.add("SAL");
                s.al_inversion = true;
            } else {
                s.add("SL");
            }
            s.current += 3;
        }
        return true;
    }
    false
}

fn christmas(s: &mut Scan) -> bool {
    if s.at(s.current - 4, 8, &["CHRISTMA"]) {
        s.add("SM");
        s.current += 3;
        return true;
    }
    false
}

fn sthm(s: &mut Scan) -> bool {
    if s.at(s.current, 4, &["STHM"]) {
        s.add("SM");
        s.current += 4;
        return true;
    }
    false
}

fn isten(s: &mut Scan) -> bool {
    if s.at(0, 8, &["CHRISTEN"]) {
        if s.root_or_inflections("CHRISTEN") || s.at(0, 11, &["CHRISTENDOM"]) {
            s.add_two("S", "ST");
        } else {
            s.add("ST");
        }
        s.current += 2;
        return true;
    }
    if s.at(s.current - 2, 6, &["LISTEN", "RISTEN", "HASTEN", "FASTEN", "MUSTNT"])
        || s.at(s.current - 3, 7, &["MOISTEN"])
    {
        s.add("S");
        s.current += 2;
        return true;
    }
    false
}

fn sugar(s: &mut Scan) -> bool {
    if s.at(s.current, 5, &["SUGAR"]) {
        s.add("X");
        s.current += 1;
        return true;
    }
    false
}

fn sh(s: &mut Scan) -> bool {
    if s.at(s.current, 2, &["SH"]) {
        if s.at(s.current - 2, 8, &["CASHMERE"]) {
            s.add("J");
            s.current += 2;
            return true;
        }
        if s.current > 0
            && ((s.at(s.current + 1, 3, &["HAP"]) && s.current + 3 == s.last)
                || s.at(s.current + 1, 4, &[
                    "HEIM", "HOEK", "HOLM", "HOLZ", "HOOD", "HEAD", "HEID", "HAAR", "HORS", "HOLE",
                    "HUND", "HELM", "HAWK", "HILL",
                ])
                || s.at(s.current + 1, 5, &["HEART", "HATCH", "HOUSE", "HOUND", "HONOR"])
                || (s.at(s.current + 2, 3, &["EAR"]) && s.current + 4 == s.last)
                || (s.at(s.current + 2, 3, &["ORN"]) && !s.at(s.current - 2, 7, &["UNSHORN"]))
                || (s.at(s.current + 1, 4, &["HOUR"])
                    && !(s.at(0, 7, &["BASHOUR"])
                        || s.at(0, 8, &["MANSHOUR"])
                        || s.at(0, 6, &["ASHOUR"])))
                || s.at(s.current + 2, 5, &[
                    "ARMON", "ONEST", "ALLOW", "OLDER", "OPPER", "EIMER", "ANDLE", "ONOUR",
                ])
                || s.at(s.current + 2, 6, &["ABILLE", "UMANCE", "ABITUA"]))
        {
            if !s.at(s.current - 1, 1, &["S"]) {
                s.add("S");
            }
        } else {
            s.add("X");
        }
        s.current += 2;
        return true;
    }
    false
}

fn sch(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 2, &["CH"]) {
        if s.current > 0
            && (s.at(s.current + 3, 3, &["IEF", "EAT"])
                || s.at(s.current + 3, 4, &["ANCE", "ARGE"])
                || s.at(0, 6, &["ESCHEW"]))
        {
            s.add("S");
            s.current += 1;
            return true;
        }
        if (s.at(s.current + 3, 2, &["OO", "ER", "EN", "UY", "ED", "EM", "IA", "IZ", "IS", "OL"])
            && !s.at(s.current, 6, &["SCHOLT", "SCHISL", "SCHERR"]))
            || s.at(s.current + 3, 3, &["ISZ"])
            || (s.at(s.current - 1, 6, &["ESCHAT", "ASCHIN", "ASCHAL", "ISCHAE", "ISCHIA"])
                && !s.at(s.current - 2, 8, &["FASCHING"]))
            || (s.at(s.current - 1, 5, &["ESCHI"]) && s.current + 3 == s.last)
            || s.char_at(s.current + 3) == 'Y'
        {
            if s.at(s.current + 3, 2, &["ER", "EN", "IS"])
                && (s.current + 4 == s.last || s.at(s.current + 3, 3, &["ENK", "ENB", "IST"]))
            {
                s.add_two("X", "SK");
            } else {
                s.add("SK");
            }
            s.current += 3;
            return true;
        } else {
            s.add("X");
            s.current += 3;
            return true;
        }
    }
    false
}

fn sur(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 3, &["URE", "URA", "URY"]) {
        if s.current == 0
            || s.at(s.current - 1, 1, &["N", "K"])
            || s.at(s.current - 2, 2, &["NO"])
        {
            s.add("X");
        } else {
            s.add("J");
        }
        s.advance(2, 1);
        return true;
    }
    false
}

fn su(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 2, &["UO", "UA"]) && s.current != 0 {
        if s.at(s.current - 1, 4, &["RSUA"]) {
            s.add("S");
        } else if s.is_vowel_at(s.current - 1) {
            s.add_two("J", "S");
        } else {
            s.add_two("X", "S");
        }
        s.advance(3, 1);
        return true;
    }
    false
}

fn ssio(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 4, &["SION"]) {
        if s.at(s.current - 2, 2, &["CI"]) {
            s.add("J");
        } else if s.is_vowel_at(s.current - 1) {
            s.add("X");
        }

        s.advance(4, 2);
        return true;
    }
    false
}

fn ss(s: &mut Scan) -> bool {
    if s.at(s.current - 1, 5, &["USSIA", "ESSUR", "ISSUR", "ISSUE"])
        || s.at(s.current - 1, 6, &["ESSIAN", "ASSURE", "ASSURA", "ISSUAB", "ISSUAN", "ASSIUS"])
    {
        s.add("X");
        s.advance(3, 2);
        return true;
    }
    false
}

fn sia(s: &mut Scan) -> bool {
    if s.at(s.current - 2, 5, &["CHSIA"]) || s.at(s.current - 1, 5, &["RSIAL"]) {
        s.add("X");
        s.advance(3, 1);
        return true;
    }
    if (s.at(0, 6, &["ALESIA", "ALYSIA", "ALISIA", "STASIA"])
        && s.current == 3
        && !s.at(0, 9, &["ANASTASIA"]))
        || s.at(s.current - 5, 9, &["DIONYSIAN"])
        || s.at(s.current - 5, 8, &["THERESIA"])
    {
        s.add_two("X", "S");
        s.advance(3, 1);
        return true;
    }
    if (s.at(s.current, 3, &["SIA"]) && s.current + 2 == s.last)
        || (s.at(s.current, 4, &["SIAN"]) && s.current + 3 == s.last)
        || s.at(s.current - 5, 9, &["AMBROSIAL"])
    {
        if (s.is_vowel_at(s.current - 1) || s.at(s.current - 1, 1, &["R"]))
            && !(s.at(0, 5, &["JAMES", "NICOS", "PEGAS", "PEPYS"])
                || s.at(0, 6, &["HOBBES", "HOLMES", "JAQUES", "KEYNES"])
                || s.at(0, 7, &["MALTHUS", "HOMOOUS"])
                || s.at(0, 8, &["MAGLEMOS", "HOMOIOUS"])
                || s.at(0, 9, &["LEVALLOIS", "TARDENOIS"])
                || s.at(s.current - 4, 5, &["ALGES"]))
        {
            s.add("J");
        } else {
            s.add("S");
        }
        s.advance(2, 1);
        return true;
    }
    false
}

fn sio(s: &mut Scan) -> bool {
    if s.at(0, 7, &["SIOBHAN"]) {
        s.add("X");
        s.advance(3, 1);
        return true;
    }
    if s.at(s.current + 1, 3, &["ION"]) {
        if s.is_vowel_at(s.current - 1) || s.at(s.current - 2, 2, &["ER", "UR"]) {
            s.add("J");
        } else {
            s.add("X");
        }
        s.advance(3, 1);
        return true;
    }
    false
}

fn anglicisations(s: &mut Scan) -> bool {
    if (s.current == 0 && s.at(s.current + 1, 1, &["M", "N", "L"]))
        || s.at(s.current + 1, 1, &["Z"])
    {
        s.add_two("S", "X");
        if s.at(s.current + 1, 1, &["Z"]) {
            s.current += 2;
        } else {
            s.current += 1;
        }
        return true;
    }
    false
}

fn sc(s: &mut Scan) -> bool {
    if s.at(s.current, 2, &["SC"]) {
        if s.at(s.current - 2, 8, &["VISCOUNT"]) {
            s.current += 1;
            return true;
        }
        if s.at(s.current + 2, 1, &["I", "E", "Y"]) {
            if s.at(s.current + 2, 4, &["IOUS"])
                || s.at(s.current + 2, 3, &["IUT"])
                || s.at(s.current - 4, 9, &["OMNISCIEN"])
                || s.at(s.current - 3, 8, &["CONSCIEN", "CRESCEND", "CONSCION"])
                || s.at(s.current - 2, 6, &["FASCIS"])
            {
                s.add("X");
            } else if s.at(s.current, 7, &["SCEPTIC", "SCEPSIS"])
                || s.at(s.current, 5, &["SCIVV", "SCIRO"])
                || s.at(s.current, 6, &["SCIPIO"])
                || s.at(s.current - 2, 10, &["PISCITELLI"])
            {
                s.add("SK");
            } else {
                s.add("S");
            }
            s.current += 2;
            return true;
        }
        s.add("SK");
        s.current += 2;
        return true;
    }
    false
}

fn sea_sui_sier(s: &mut Scan) -> bool {
    if (s.at(s.current - 3, 6, &["NAUSEA"]) && s.current + 2 == s.last)
        || s.at(s.current - 2, 5, &["CASUI"])
        || (s.at(s.current - 1, 5, &["OSIER", "ASIER"])
            && !(s.at(0, 6, &["EASIER"])
                || s.at(0, 5, &["OSIER"])
                || s.at(s.current - 2, 6, &["ROSIER", "MOSIER"])))
    {
        s.add_two("J", "X");
        s.advance(3, 1);
        return true;
    }
    false
}

fn sea(s: &mut Scan) -> bool {
    if (s.at(0, 4, &["SEAN"]) && s.current + 3 == s.last)
        || (s.at(s.current - 3, 6, &["NAUSEO"]) && !s.at(s.current - 3, 7, &["NAUSEAT"]))
    {
        s.add("X");
        s.advance(3, 1);
        return true;
    }
    false
}

fn sw_name_with_alt_sv(s: &Scan) -> bool {
    s.at(0, 7, &["SWANSON", "SWENSON", "SWINSON", "SWENSEN", "SWOBODA"])
        || s.at(0, 9, &["SWIDERSKI", "SWARTHOUT"])
        || s.at(0, 10, &["SWEARENGIN"])
}

fn sw_name_with_alt_xv(s: &Scan) -> bool {
    s.at(0, 5, &["SWART"])
        || s.at(0, 6, &["SWARTZ", "SWARTS", "SWIGER"])
        || s.at(0, 7, &["SWITZER", "SWANGER", "SWIGERT", "SWIGART", "SWIHART"])
        || s.at(0, 8, &["SWEITZER", "SWATZELL", "SWINDLER"])
        || s.at(0, 9, &["SWINEHART"])
        || s.at(0, 10, &["SWEARINGEN"])
}

#[cfg(test)]
mod tests {
    use crate::phonetic::rules::testing::assert_keys;
    use crate::phonetic::EncoderConfig;

    #[test]
    fn test_s_words() {
        assert_keys(
            EncoderConfig::default(),
            &[
                ("ISLAND", "ALNT", ""),
                ("AISLE", "AL", ""),
                ("CARLISLE", "KRLL", ""),
                ("SUGAR", "XKR", ""),
                ("SCHOOL", "SKL", ""),
                ("SCHMIDT", "XMT", ""),
                ("SCIENCE", "SNTS", ""),
                ("SCENE", "SN", ""),
                ("MISSION", "MXN", ""),
                ("VISION", "FJN", ""),
                ("ASIA", "AJ", ""),
                ("NAUSEA", "NJ", "NX"),
                ("DEBRIS", "TPR", ""),
                ("FASTEN", "FSN", ""),
                ("LISTEN", "LSN", ""),
                ("CHRISTMAS", "KRSMS", ""),
                ("ISSUE", "AX", ""),
                ("PRESSURE", "PRXR", ""),
                ("SWANSON", "SNSN", "SVNSN"),
                ("SWARTZ", "SRTS", "XVRTS"),
                ("SCEPTIC", "SKPTK", ""),
                ("JACQUES", "JK", ""),
                ("LOUIS", "LS", "L"),
                ("DESCARTES", "TKRT", ""),
                ("ILLINOIS", "ALN", ""),
                ("TRESPASS", "TRSPS", ""),
                ("SCHENKER", "XNKR", "SKNKR"),
            ],
        );
    }

    #[test]
    fn test_s_words_with_vowels() {
        assert_keys(
            EncoderConfig::default().with_vowels(true),
            &[
                ("ISLAND", "ALANT", ""),
                ("AISLE", "AL", ""),
                ("CARLISLE", "KARLAL", ""),
            ],
        );
    }

    #[test]
    fn test_s_words_exact() {
        assert_keys(
            EncoderConfig::default().with_exact(true),
            &[
                ("ISLAND", "ALND", ""),
                ("SUGAR", "XGR", ""),
                ("VISION", "VJN", ""),
            ],
        );
    }
}
