// Consonant rules for X
// Initial X, French silent X and KS clusters

use crate::phonetic::scan::{Rule, Scan};

const X_RULES: &[Rule] = &[
    initial_x,
    greek_x,
    x_special_cases,
    x_to_h,
    x_vowel,
    french_x_final,
];

pub(super) fn encode_x(s: &mut Scan) {
    if s.first_match(X_RULES) {
        return;
    }
    if s.at(s.current + 1, 1, &["X", "Z", "S"]) || s.at(s.current + 1, 2, &["CI", "CE"]) {
        s.current += 2;
    } else {
        s.current += 1;
    }
}

fn initial_x(s: &mut Scan) -> bool {
    if s.at(0, 3, &["XIA", "XIO", "XIE"]) || s.at(0, 2, &["XU"]) {
        s.add("X");
        s.current += 1;
        return true;
    }
    if s.current == 0 {
        s.add("S");
        s.current += 1;
        return true;
    }
    false
}

fn greek_x(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 3, &["YLO", "YLE", "ENO"]) || s.at(s.current + 1, 4, &["ANTH"]) {
        s.add("S");
        s.current += 1;
        return true;
    }
    false
}

fn x_special_cases(s: &mut Scan) -> bool {
    if s.at(s.current - 2, 5, &["LUXUR"]) {
        s.add_exact_approx("GJ", "KJ");
        s.current += 1;
        return true;
    }
    if s.at(0, 7, &["TEXEIRA"]) || s.at(0, 8, &["TEIXEIRA"]) {
        s.add("X");
        s.current += 1;
        return true;
    }
    false
}

fn x_to_h(s: &mut Scan) -> bool {
    if s.at(s.current - 2, 6, &["OAXACA"]) || s.at(s.current - 3, 7, &["QUIXOTE"]) {
        s.add("H");
        s.current += 1;
        return true;
    }
    false
}

fn x_vowel(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 3, &["UAL", "ION", "IOU"]) {
        s.add_two("KX", "KS");
        s.advance(3, 1);
        return true;
    }
    false
}

fn french_x_final(s: &mut Scan) -> bool {
    if !(s.current == s.last
        && (s.at(s.current - 3, 3, &["IAU", "EAU", "IEU"])
            || s.at(s.current - 2, 2, &["AI", "AU", "OU", "OI", "EU"])))
    {
        s.add("KS");
    }
    false
}
