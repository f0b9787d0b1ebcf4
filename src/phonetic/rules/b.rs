// Consonant rules for B
// Silent B in DEBT/DOUBT family, BB/BP collapsing

use crate::phonetic::scan::Scan;

pub(super) fn encode_b(s: &mut Scan) {
    if silent_b(s) {
        return;
    }
    s.add_exact_approx("B", "P");
    if s.char_at(s.current + 1) == 'B'
        || (s.char_at(s.current + 1) == 'P'
            && s.current + 1 < s.last
            && s.char_at(s.current + 2) != 'H')
    {
        s.current += 2;
    } else {
        s.current += 1;
    }
}

fn silent_b(s: &mut Scan) -> bool {
    if s.at(s.current - 2, 4, &["DEBT"])
        || s.at(s.current - 2, 5, &["SUBTL"])
        || s.at(s.current - 2, 6, &["SUBTIL"])
        || s.at(s.current - 3, 5, &["DOUBT"])
    {
        s.add("T");
        s.current += 2;
        return true;
    }
    false
}
