// Consonant rules for R
// Silent R in French endings and vocalic R

use crate::phonetic::scan::Scan;

pub(super) fn encode_r(s: &mut Scan) {
    if rz(s) {
        return;
    }
    if !test_silent_r(s) {
        if !vowel_re_transposition(s) {
            s.add("R");
        }
    }
    if s.char_at(s.current + 1) == 'R' || s.at(s.current - 6, 8, &["POITIERS"]) {
        s.current += 2;
    } else {
        s.current += 1;
    }
}

fn rz(s: &mut Scan) -> bool {
    if s.at(s.current - 2, 4, &["GARZ", "KURZ", "MARZ", "MERZ", "HERZ", "PERZ", "WARZ"])
        || s.at(s.current, 5, &["RZANO", "RZOLA"])
        || s.at(s.current - 1, 4, &["ARZA", "ARZN"])
    {
        return false;
    }
    if s.at(s.current - 4, 11, &["YASTRZEMSKI"]) {
        s.add_two("R", "X");
        s.current += 2;
        return true;
    }
    if s.at(s.current - 1, 10, &["BRZEZINSKI"]) {
        s.add_two("RS", "RJ");
        s.current += 4;
        return true;
    } else if s.at(s.current - 1, 3, &["TRZ", "PRZ", "KRZ"])
        || (s.at(s.current, 2, &["RZ"]) && (s.is_vowel_at(s.current - 1) || s.current == 0))
    {
        s.add_two("RS", "X");
        s.current += 2;
        return true;
    } else if s.at(s.current - 1, 3, &["BRZ", "DRZ", "GRZ"]) {
        s.add_two("RS", "J");
        s.current += 2;
        return true;
    }
    false
}

fn test_silent_r(s: &mut Scan) -> bool {
    (s.current == s.last
        && s.at(s.current - 2, 3, &["IER"])
        && (s.at(s.current - 5, 3, &["MET", "VIV", "LUC"])
            || s.at(s.current - 6, 4, &[
                "CART", "DOSS", "FOUR", "OLIV", "BUST", "DAUM", "ATEL", "SONN", "CORM", "MERC",
                "PELT", "POIR", "BERN", "FORT", "GREN", "SAUC", "GAGN", "GAUT", "GRAN", "FORC",
                "MESS", "LUSS", "MEUN", "POTH", "HOLL", "CHEN",
            ])
            || s.at(s.current - 7, 5, &[
                "CROUP", "TORCH", "CLOUT", "FOURN", "GAUTH", "TROTT", "DEROS", "CHART",
            ])
            || s.at(s.current - 8, 6, &[
                "CHEVAL", "LAVOIS", "PELLET", "SOMMEL", "TREPAN", "LETELL", "COLOMB",
            ])
            || s.at(s.current - 9, 7, &["CHARCUT"])
            || s.at(s.current - 10, 8, &["CHARPENT"])))
        || s.at(s.current - 2, 7, &["SURBURB", "WORSTED"])
        || s.at(s.current - 2, 9, &["WORCESTER"])
        || s.at(s.current - 7, 8, &["MONSIEUR"])
        || s.at(s.current - 6, 8, &["POITIERS"])
}

fn vowel_re_transposition(s: &mut Scan) -> bool {
    if s.encode_vowels
        && s.char_at(s.current + 1) == 'E'
        && s.length > 3
        && !s.at(0, 5, &["OUTRE", "LIBRE", "ANDRE"])
        && !(s.at(0, 4, &["FRED", "TRES"]) && s.length == 4)
        && !s.at(s.current - 2, 5, &["LDRED", "LFRED", "NDRED", "NFRED", "NDRES", "TRES", "IFRED"])
        && !s.is_vowel_at(s.current - 1)
        && (s.current + 1 == s.last
            || (s.current + 2 == s.last && s.at(s.current + 2, 1, &["D", "S"])))
    {
        s.add("AR");
        return true;
    }
    false
}
