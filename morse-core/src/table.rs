//! Static letter-to-glyph mapping

use crate::types::Glyph;
use crate::types::PulseUnit::{Long as L, Short as S};

/// Glyphs for A-Z, in alphabetical order
static GLYPHS: [Glyph; 26] = [
    &[S, L],          // A
    &[L, S, S, S],    // B
    &[L, S, L, S],    // C
    &[L, S, S],       // D
    &[S],             // E
    &[S, S, L, S],    // F
    &[L, L, S],       // G
    &[S, S, S, S],    // H
    &[S, S],          // I
    &[S, L, L, L],    // J
    &[L, S, L],       // K
    &[S, L, S, S],    // L
    &[L, L],          // M
    &[L, S],          // N
    &[L, L, L],       // O
    &[S, L, L, S],    // P
    &[L, L, S, L],    // Q
    &[S, L, S],       // R
    &[S, S, S],       // S
    &[L],             // T
    &[S, S, L],       // U
    &[S, S, S, L],    // V
    &[S, L, L],       // W
    &[L, S, S, L],    // X
    &[L, S, L, L],    // Y
    &[L, L, S, S],    // Z
];

/// Case-insensitive lookup table from letters to pulse sequences.
/// Anything outside A-Z has no mapping.
pub struct MorseTable;

impl MorseTable {
    /// Returns the glyph for a letter, or `None` for unsupported input
    pub fn lookup(ch: char) -> Option<Glyph> {
        let up = ch.to_ascii_uppercase();
        if up.is_ascii_uppercase() {
            Some(GLYPHS[(up as u8 - b'A') as usize])
        } else {
            None
        }
    }
}
