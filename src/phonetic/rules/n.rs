// Consonant rules for N
// NN collapsing and French NOUN endings

use crate::phonetic::scan::Scan;

pub(super) fn encode_n(s: &mut Scan) {
    if nce(s) {
        return;
    }
    if s.char_at(s.current + 1) == 'N' {
        s.current += 2;
    } else {
        s.current += 1;
    }
    if !s.at(s.current - 3, 8, &["MONSIEUR"]) && !s.at(s.current - 3, 6, &["NENESS"]) {
        s.add("N");
    }
}

fn nce(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 1, &["C", "S"])
        && s.at(s.current + 2, 1, &["E", "Y", "I"])
        && (s.current + 2 == s.last || (s.current + 3 == s.last && s.char_at(s.current + 3) == 'S'))
    {
        s.add("NTS");
        s.current += 2;
        return true;
    }
    false
}
