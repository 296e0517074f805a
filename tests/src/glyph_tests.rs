//! Full table check: every letter, exact glyph, both cases

use morse_core::table::MorseTable;
use morse_core::types::PulseUnit;
use morse_core::types::PulseUnit::{Long as L, Short as S};
use rstest::rstest;

#[rstest]
#[case('a', &[S, L])]
#[case('b', &[L, S, S, S])]
#[case('c', &[L, S, L, S])]
#[case('d', &[L, S, S])]
#[case('e', &[S])]
#[case('f', &[S, S, L, S])]
#[case('g', &[L, L, S])]
#[case('h', &[S, S, S, S])]
#[case('i', &[S, S])]
#[case('j', &[S, L, L, L])]
#[case('k', &[L, S, L])]
#[case('l', &[S, L, S, S])]
#[case('m', &[L, L])]
#[case('n', &[L, S])]
#[case('o', &[L, L, L])]
#[case('p', &[S, L, L, S])]
#[case('q', &[L, L, S, L])]
#[case('r', &[S, L, S])]
#[case('s', &[S, S, S])]
#[case('t', &[L])]
#[case('u', &[S, S, L])]
#[case('v', &[S, S, S, L])]
#[case('w', &[S, L, L])]
#[case('x', &[L, S, S, L])]
#[case('y', &[L, S, L, L])]
#[case('z', &[L, L, S, S])]
fn glyph_matches(#[case] letter: char, #[case] expected: &[PulseUnit]) {
    assert_eq!(MorseTable::lookup(letter).unwrap(), expected);
    assert_eq!(
        MorseTable::lookup(letter.to_ascii_uppercase()).unwrap(),
        expected
    );
}

#[rstest]
#[case('0')]
#[case('7')]
#[case(' ')]
#[case(',')]
#[case('?')]
#[case('@')]
#[case('[')]
#[case('`')]
#[case('{')]
#[case('ß')]
fn non_letters_have_no_mapping(#[case] ch: char) {
    assert!(MorseTable::lookup(ch).is_none());
}
