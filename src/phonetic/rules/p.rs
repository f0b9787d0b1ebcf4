// Consonant rules for P
// PH, silent P and PB/PP collapsing

use crate::phonetic::scan::{Rule, Scan};

const P_RULES: &[Rule] = &[
    silent_p_at_beginning,
    pt,
    ph,
    pph,
    rps,
    coup,
    pneum,
    psych,
    psalm,
];

pub(super) fn encode_p(s: &mut Scan) {
    if s.first_match(P_RULES) {
        return;
    }
    pb(s);
    s.add("P");
}

fn silent_p_at_beginning(s: &mut Scan) -> bool {
    if s.current == 0 && s.at(s.current, 2, &["PN", "PF", "PS", "PT"]) {
        s.current += 1;
        return true;
    }
    false
}

fn pt(s: &mut Scan) -> bool {
    if s.char_at(s.current + 1) == 'T' {
        if (s.current == 0 && s.at(s.current, 5, &["PTERO"]))
            || s.at(s.current - 5, 7, &["RECEIPT"])
            || s.at(s.current - 4, 8, &["ASYMPTOT"])
        {
            s.add("T");
            s.current += 2;
            return true;
        }
    }
    false
}

fn ph(s: &mut Scan) -> bool {
    if s.char_at(s.current + 1) == 'H' {
        if s.at(s.current, 9, &["PHTHALEIN"])
            || (s.current == 0 && s.at(s.current, 4, &["PHTH"]))
            || s.at(s.current - 3, 10, &["APOPHTHEGM"])
        {
            s.add("0");
            s.current += 4;
        } else if s.current > 0
            && (s.at(s.current + 2, 3, &[
                "EAD", "OLE", "ELD", "ILL", "OLD", "EAP", "ERD", "ARD", "ANG", "ORN", "EAV", "ART",
            ])
                || s.at(s.current + 2, 4, &["OUSE"])
                || (s.at(s.current + 2, 2, &["AM"]) && !s.at(s.current - 1, 5, &["LPHAM"]))
                || s.at(s.current + 2, 5, &["AMMER", "AZARD", "UGGER"])
                || s.at(s.current + 2, 6, &["OLSTER"]))
            && !s.at(s.current - 3, 5, &["LYMPH", "NYMPH"])
        {
            s.add("P");
            s.advance(3, 2);
        } else {
            s.add("F");
            s.current += 2;
        }
        return true;
    }
    false
}

fn pph(s: &mut Scan) -> bool {
    if s.char_at(s.current + 1) == 'P'
        && s.current + 2 < s.length
        && s.char_at(s.current + 2) == 'H'
    {
        s.add("F");
        s.current += 3;
        return true;
    }
    false
}

fn rps(s: &mut Scan) -> bool {
    if s.at(s.current - 3, 5, &["CORPS"]) && !s.at(s.current - 3, 6, &["CORPSE"]) {
        s.current += 2;
        return true;
    }
    false
}

fn coup(s: &mut Scan) -> bool {
    if s.current == s.last
        && s.at(s.current - 3, 4, &["COUP"])
        && !s.at(s.current - 5, 6, &["RECOUP"])
    {
        s.current += 1;
        return true;
    }
    false
}

fn pneum(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 4, &["NEUM"]) {
        s.add("N");
        s.current += 2;
        return true;
    }
    false
}

fn psych(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 4, &["SYCH"]) {
        if s.encode_vowels {
            s.add("SAK");
        } else {
            s.add("SK");
        }
        s.current += 5;
        return true;
    }
    false
}

fn psalm(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 4, &["SALM"]) {
        if s.encode_vowels {
            s.add("SAM");
        } else {
            s.add("SM");
        }
        s.current += 5;
        return true;
    }
    false
}

fn pb(s: &mut Scan) {
    if s.at(s.current + 1, 1, &["P", "B"]) {
        s.current += 2;
    } else {
        s.current += 1;
    }
}
