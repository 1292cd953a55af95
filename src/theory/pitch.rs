//! Pitch-class model — keys, natural letters, swara tokens and their semitone offsets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// The seven natural letters, in diatonic order starting at C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position among C, D, E, F, G, A, B.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The letter `steps` diatonic steps above this one, wrapping at the octave.
    pub fn step(self, steps: usize) -> Letter {
        Self::ALL[(self.index() + steps) % 7]
    }

    /// Semitone of the unaltered letter relative to C.
    pub fn natural_semitone(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        };
        write!(f, "{c}")
    }
}

/// One of the twelve tonic keys offered for selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    #[default]
    C,
    CSharp,
    D,
    EFlat,
    E,
    F,
    FSharp,
    G,
    AFlat,
    A,
    BFlat,
    B,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::CSharp,
        Key::D,
        Key::EFlat,
        Key::E,
        Key::F,
        Key::FSharp,
        Key::G,
        Key::AFlat,
        Key::A,
        Key::BFlat,
        Key::B,
    ];

    /// Semitone relative to C, in `0..12`.
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// The letter the key is written with, ignoring its accidental.
    pub fn letter(self) -> Letter {
        match self {
            Key::C | Key::CSharp => Letter::C,
            Key::D => Letter::D,
            Key::EFlat | Key::E => Letter::E,
            Key::F | Key::FSharp => Letter::F,
            Key::G => Letter::G,
            Key::AFlat | Key::A => Letter::A,
            Key::BFlat | Key::B => Letter::B,
        }
    }

    /// Display name with musical accidentals (`C♯`, `E♭`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::CSharp => "C♯",
            Key::D => "D",
            Key::EFlat => "E♭",
            Key::E => "E",
            Key::F => "F",
            Key::FSharp => "F♯",
            Key::G => "G",
            Key::AFlat => "A♭",
            Key::A => "A",
            Key::BFlat => "B♭",
            Key::B => "B",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    /// Accepts the display names and their ASCII forms (`C#`, `Eb`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('#', "♯").replace('b', "♭");
        Key::ALL
            .iter()
            .copied()
            .find(|k| k.name() == normalized)
            .ok_or_else(|| TheoryError::InvalidKey(s.to_string()))
    }
}

impl TryFrom<String> for Key {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.name().to_string()
    }
}

/// A scale position. The tonic, fifth and upper octave are fixed; the other
/// five families each offer two or three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Sa,
    Ri,
    Ga,
    Ma,
    Pa,
    Dha,
    Ni,
    TaraSa,
}

impl Family {
    /// The five families a user chooses a variant for, in scale order.
    pub const MOVABLE: [Family; 5] = [Family::Ri, Family::Ga, Family::Ma, Family::Dha, Family::Ni];

    /// Diatonic letter steps from the tonic's letter.
    pub fn letter_offset(self) -> usize {
        match self {
            Family::Sa => 0,
            Family::Ri => 1,
            Family::Ga => 2,
            Family::Ma => 3,
            Family::Pa => 4,
            Family::Dha => 5,
            Family::Ni => 6,
            Family::TaraSa => 7,
        }
    }

    pub fn is_movable(self) -> bool {
        Self::MOVABLE.contains(&self)
    }

    /// Variants of this family in ordinal order.
    pub fn variants(self) -> &'static [Swara] {
        match self {
            Family::Sa => &[Swara::Sa],
            Family::Ri => &[Swara::R1, Swara::R2, Swara::R3],
            Family::Ga => &[Swara::G1, Swara::G2, Swara::G3],
            Family::Ma => &[Swara::M1, Swara::M2],
            Family::Pa => &[Swara::Pa],
            Family::Dha => &[Swara::D1, Swara::D2, Swara::D3],
            Family::Ni => &[Swara::N1, Swara::N2, Swara::N3],
            Family::TaraSa => &[Swara::TaraSa],
        }
    }

    /// Single-letter label used in notation (`S`, `R`, ..., `S'`).
    pub fn label(self) -> &'static str {
        match self {
            Family::Sa => "S",
            Family::Ri => "R",
            Family::Ga => "G",
            Family::Ma => "M",
            Family::Pa => "P",
            Family::Dha => "D",
            Family::Ni => "N",
            Family::TaraSa => "S'",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A swara token: a scale position together with its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Swara {
    Sa,
    R1,
    R2,
    R3,
    G1,
    G2,
    G3,
    M1,
    M2,
    Pa,
    D1,
    D2,
    D3,
    N1,
    N2,
    N3,
    TaraSa,
}

impl Swara {
    /// Every token in display order, tonic to upper octave.
    pub const ALL: [Swara; 17] = [
        Swara::Sa,
        Swara::R1,
        Swara::R2,
        Swara::R3,
        Swara::G1,
        Swara::G2,
        Swara::G3,
        Swara::M1,
        Swara::M2,
        Swara::Pa,
        Swara::D1,
        Swara::D2,
        Swara::D3,
        Swara::N1,
        Swara::N2,
        Swara::N3,
        Swara::TaraSa,
    ];

    pub fn family(self) -> Family {
        match self {
            Swara::Sa => Family::Sa,
            Swara::R1 | Swara::R2 | Swara::R3 => Family::Ri,
            Swara::G1 | Swara::G2 | Swara::G3 => Family::Ga,
            Swara::M1 | Swara::M2 => Family::Ma,
            Swara::Pa => Family::Pa,
            Swara::D1 | Swara::D2 | Swara::D3 => Family::Dha,
            Swara::N1 | Swara::N2 | Swara::N3 => Family::Ni,
            Swara::TaraSa => Family::TaraSa,
        }
    }

    /// Semitones above the tonic, in `0..=12`. S' is the only token at 12.
    pub fn offset(self) -> u8 {
        match self {
            Swara::Sa => 0,
            Swara::R1 => 1,
            Swara::R2 | Swara::G1 => 2,
            Swara::R3 | Swara::G2 => 3,
            Swara::G3 => 4,
            Swara::M1 => 5,
            Swara::M2 => 6,
            Swara::Pa => 7,
            Swara::D1 => 8,
            Swara::D2 | Swara::N1 => 9,
            Swara::D3 | Swara::N2 => 10,
            Swara::N3 => 11,
            Swara::TaraSa => 12,
        }
    }

    /// 1-based variant number within the family (`R2` → 2). Fixed tokens are 1.
    pub fn variant(self) -> u8 {
        let family = self.family().variants();
        family.iter().position(|&s| s == self).map_or(1, |i| i as u8 + 1)
    }

    pub fn is_fixed(self) -> bool {
        !self.family().is_movable()
    }

    pub fn interval_name(self) -> &'static str {
        match self {
            Swara::Sa => "Tonic",
            Swara::R1 => "Minor 2nd",
            Swara::R2 => "Major 2nd",
            Swara::R3 => "Augmented 2nd",
            Swara::G1 => "Diminished 3rd",
            Swara::G2 => "Minor 3rd",
            Swara::G3 => "Major 3rd",
            Swara::M1 => "Perfect 4th",
            Swara::M2 => "Augmented 4th",
            Swara::Pa => "Perfect 5th",
            Swara::D1 => "Minor 6th",
            Swara::D2 => "Major 6th",
            Swara::D3 => "Augmented 6th",
            Swara::N1 => "Diminished 7th",
            Swara::N2 => "Minor 7th",
            Swara::N3 => "Major 7th",
            Swara::TaraSa => "Octave",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Swara::Sa => "S",
            Swara::R1 => "R1",
            Swara::R2 => "R2",
            Swara::R3 => "R3",
            Swara::G1 => "G1",
            Swara::G2 => "G2",
            Swara::G3 => "G3",
            Swara::M1 => "M1",
            Swara::M2 => "M2",
            Swara::Pa => "P",
            Swara::D1 => "D1",
            Swara::D2 => "D2",
            Swara::D3 => "D3",
            Swara::N1 => "N1",
            Swara::N2 => "N2",
            Swara::N3 => "N3",
            Swara::TaraSa => "S'",
        }
    }
}

impl fmt::Display for Swara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Swara {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Swara::ALL
            .iter()
            .copied()
            .find(|sw| sw.token().eq_ignore_ascii_case(t))
            .ok_or_else(|| TheoryError::InvalidToken(s.to_string()))
    }
}

impl TryFrom<String> for Swara {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Swara> for String {
    fn from(swara: Swara) -> Self {
        swara.token().to_string()
    }
}
