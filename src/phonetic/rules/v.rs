// Consonant rules for V
// VV collapsing

use crate::phonetic::scan::Scan;

pub(super) fn encode_v(s: &mut Scan) {
    if s.char_at(s.current + 1) == 'V' {
        s.current += 2;
    } else {
        s.current += 1;
    }
    s.add_exact_approx("V", "F");
}
