// Phonetic rule dispatch
// Main scan loop routing each character to its letter's rule cascade
//
// Every letter module exposes one `encode_*` entry point. Entry points that
// have several special cases keep them in an ordered `*_RULES` slice and run
// it with `Scan::first_match`, so the first rule that fires decides both the
// emitted code and how far the cursor moves.

mod b;
mod c;
mod d;
mod f;
mod g;
mod h;
mod j;
mod k;
mod l;
mod m;
mod n;
mod p;
mod q;
mod r;
mod s;
mod t;
mod v;
mod vowels;
mod w;
mod x;
mod z;

use super::scan::{is_vowel, Scan};

/// Scan until the word is consumed or either key grows past `max_len`.
pub(super) fn run(scan: &mut Scan, max_len: usize) {
    while scan.primary.len() <= max_len
        && scan.secondary.len() <= max_len
        && scan.current < scan.length
    {
        match scan.char_at(scan.current) {
            'B' => b::encode_b(scan),
            'ß' | 'Ç' => single(scan, "S"),
            'C' => c::encode_c(scan),
            'D' => d::encode_d(scan),
            'F' => f::encode_f(scan),
            'G' => g::encode_g(scan),
            'H' => h::encode_h(scan),
            'J' => j::encode_j(scan),
            'K' => k::encode_k(scan),
            'L' => l::encode_l(scan),
            'M' => m::encode_m(scan),
            'N' => n::encode_n(scan),
            'Ń' => single(scan, "N"),
            'P' => p::encode_p(scan),
            'Q' => q::encode_q(scan),
            'R' => r::encode_r(scan),
            'S' => s::encode_s(scan),
            'T' => t::encode_t(scan),
            // eth, thorn
            'Đ' | 'Ţ' => single(scan, "0"),
            'V' => v::encode_v(scan),
            'W' => w::encode_w(scan),
            'X' => x::encode_x(scan),
            '?' => single(scan, "X"),
            'Z' => z::encode_z(scan),
            ch if is_vowel(ch) => vowels::encode_vowel(scan),
            _ => scan.current += 1,
        }
    }
}

fn single(scan: &mut Scan, code: &str) {
    scan.add(code);
    scan.current += 1;
}
