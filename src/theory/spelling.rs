//! Spelling engine — letter-name spelling of a swara under a key.
//!
//! The letter is fixed by the swara's scale position (the n-th letter above
//! the key's letter), and the accidental makes up whatever distance remains
//! to the intended pitch. This keeps diatonic spellings such as `E♭♭` for G1
//! in C instead of collapsing them to an enharmonic `D`.

use std::fmt;

use super::pitch::{Key, Letter, Swara};

const SHARP: char = '♯';
const FLAT: char = '♭';

/// A derived note name with its absolute pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledNote {
    pub letter: Letter,
    /// Positive counts are sharps, negative counts flats. Always within `-6..=6`.
    pub accidentals: i8,
    /// Absolute pitch class relative to C, in `0..12`.
    pub semitone: u8,
}

impl SpelledNote {
    /// The rendered accidental marks alone (`""`, `"♯"`, `"♭♭"`, ...).
    pub fn accidental_marks(&self) -> String {
        let mark = if self.accidentals > 0 { SHARP } else { FLAT };
        std::iter::repeat(mark)
            .take(self.accidentals.unsigned_abs() as usize)
            .collect()
    }

    /// Letter plus accidentals, e.g. `"B♭"`.
    pub fn spelling(&self) -> String {
        format!("{}{}", self.letter, self.accidental_marks())
    }
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental_marks())
    }
}

/// Reduce a semitone difference into `-5..=6`.
///
/// A difference of exactly six reduces to `+6`, so a tritone spells with sharps.
pub fn normalize_signed(diff: i32) -> i32 {
    let d = diff.rem_euclid(12);
    if d > 6 {
        d - 12
    } else {
        d
    }
}

/// Absolute pitch class a swara sounds under the given key.
pub fn semitone_of(key: Key, swara: Swara) -> u8 {
    (key.semitone() + swara.offset()) % 12
}

/// Spell a swara under a key. Total over every key and token.
pub fn spell(key: Key, swara: Swara) -> SpelledNote {
    let letter = key.letter().step(swara.family().letter_offset());
    let semitone = semitone_of(key, swara);
    let diff = normalize_signed(semitone as i32 - letter.natural_semitone() as i32);
    SpelledNote {
        letter,
        accidentals: diff as i8,
        semitone,
    }
}

/// Spell a token sequence, preserving order.
pub fn spell_all(key: Key, swaras: &[Swara]) -> Vec<SpelledNote> {
    swaras.iter().map(|&s| spell(key, s)).collect()
}
