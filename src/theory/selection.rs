//! Swara selection — one optional choice per movable family, and the
//! reserved-pitch rule that keeps every chosen position on its own pitch class.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Result, TheoryError};

use super::pitch::{Family, Key, Swara};
use super::spelling::semitone_of;

/// A complete choice for all five movable families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choices {
    pub ri: Swara,
    pub ga: Swara,
    pub ma: Swara,
    pub dha: Swara,
    pub ni: Swara,
}

impl Choices {
    /// The ascending sequence `S, R, G, M, P, D, N, S'`.
    pub fn arohanam(&self) -> [Swara; 8] {
        [
            Swara::Sa,
            self.ri,
            self.ga,
            self.ma,
            Swara::Pa,
            self.dha,
            self.ni,
            Swara::TaraSa,
        ]
    }

    /// The descending sequence, the exact reverse of [`arohanam`](Self::arohanam).
    pub fn avarohanam(&self) -> [Swara; 8] {
        let mut seq = self.arohanam();
        seq.reverse();
        seq
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.ri, self.ga, self.ma, self.dha, self.ni
        )
    }
}

/// How a swara can be interacted with under the current key and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// S, P or S' — always present, never chosen.
    Fixed,
    /// The current choice for its family; choosing it again deselects it.
    Selected,
    /// Its pitch class is held by S, P or another family's choice.
    Taken,
    /// Free to choose.
    Open,
}

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The swara became its family's choice, replacing `previous` if any.
    Selected { previous: Option<Swara> },
    /// The swara was the family's choice and is now cleared.
    Deselected,
    /// A fixed swara; nothing changed.
    Fixed,
}

/// Partial choice of variants for the movable families.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    ri: Option<Swara>,
    ga: Option<Swara>,
    ma: Option<Swara>,
    dha: Option<Swara>,
    ni: Option<Swara>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from a complete set of choices.
    pub fn from_choices(choices: Choices) -> Self {
        Self {
            ri: Some(choices.ri),
            ga: Some(choices.ga),
            ma: Some(choices.ma),
            dha: Some(choices.dha),
            ni: Some(choices.ni),
        }
    }

    fn slot(&self, family: Family) -> Option<&Option<Swara>> {
        match family {
            Family::Ri => Some(&self.ri),
            Family::Ga => Some(&self.ga),
            Family::Ma => Some(&self.ma),
            Family::Dha => Some(&self.dha),
            Family::Ni => Some(&self.ni),
            _ => None,
        }
    }

    fn slot_mut(&mut self, family: Family) -> Option<&mut Option<Swara>> {
        match family {
            Family::Ri => Some(&mut self.ri),
            Family::Ga => Some(&mut self.ga),
            Family::Ma => Some(&mut self.ma),
            Family::Dha => Some(&mut self.dha),
            Family::Ni => Some(&mut self.ni),
            _ => None,
        }
    }

    /// The choice for a family. Fixed families always report `None`.
    pub fn get(&self, family: Family) -> Option<Swara> {
        self.slot(family).copied().flatten()
    }

    /// Make `swara` its family's choice, without checking reserved pitches.
    pub fn set(&mut self, swara: Swara) -> Result<Option<Swara>> {
        let slot = self
            .slot_mut(swara.family())
            .ok_or(TheoryError::NotMovable(swara))?;
        Ok(slot.replace(swara))
    }

    /// Clear a family's choice, returning what was there.
    pub fn clear(&mut self, family: Family) -> Option<Swara> {
        self.slot_mut(family).and_then(Option::take)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Chosen swaras in scale order.
    pub fn chosen(&self) -> impl Iterator<Item = Swara> + '_ {
        Family::MOVABLE.iter().filter_map(|&f| self.get(f))
    }

    pub fn is_complete(&self) -> bool {
        self.choices().is_some()
    }

    /// All five choices, or `None` while any family is unset.
    pub fn choices(&self) -> Option<Choices> {
        Some(Choices {
            ri: self.ri?,
            ga: self.ga?,
            ma: self.ma?,
            dha: self.dha?,
            ni: self.ni?,
        })
    }

    /// Pitch classes held under `key`: S, P and every chosen swara.
    pub fn reserved_semitones(&self, key: Key) -> BTreeSet<u8> {
        [Swara::Sa, Swara::Pa]
            .into_iter()
            .chain(self.chosen())
            .map(|s| semitone_of(key, s))
            .collect()
    }

    /// Whether `swara` can be chosen, deselected, or neither.
    pub fn availability(&self, key: Key, swara: Swara) -> Availability {
        if swara.is_fixed() {
            return Availability::Fixed;
        }
        if self.get(swara.family()) == Some(swara) {
            return Availability::Selected;
        }
        if self.reserved_semitones(key).contains(&semitone_of(key, swara)) {
            Availability::Taken
        } else {
            Availability::Open
        }
    }

    /// Toggle `swara` under `key`, enforcing the reserved-pitch rule.
    pub fn toggle(&mut self, key: Key, swara: Swara) -> Result<Toggle> {
        match self.availability(key, swara) {
            Availability::Fixed => Ok(Toggle::Fixed),
            Availability::Selected => {
                self.clear(swara.family());
                Ok(Toggle::Deselected)
            }
            Availability::Taken => Err(TheoryError::ReservedPitch {
                swara,
                semitone: semitone_of(key, swara),
            }),
            Availability::Open => {
                let previous = self.set(swara)?;
                Ok(Toggle::Selected { previous })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_selection_is_empty() {
        let sel = Selection::new();
        assert!(!sel.is_complete());
        assert_eq!(sel.chosen().count(), 0);
        assert_eq!(sel.choices(), None);
    }

    #[test]
    fn set_rejects_fixed_swaras() {
        let mut sel = Selection::new();
        assert_eq!(sel.set(Swara::Pa), Err(TheoryError::NotMovable(Swara::Pa)));
        assert_eq!(
            sel.set(Swara::TaraSa),
            Err(TheoryError::NotMovable(Swara::TaraSa))
        );
    }

    #[test]
    fn set_replaces_previous_choice() {
        let mut sel = Selection::new();
        assert_eq!(sel.set(Swara::R1), Ok(None));
        assert_eq!(sel.set(Swara::R3), Ok(Some(Swara::R1)));
        assert_eq!(sel.get(Family::Ri), Some(Swara::R3));
    }

    #[test]
    fn reserved_always_holds_tonic_and_fifth() {
        let sel = Selection::new();
        let reserved = sel.reserved_semitones(Key::C);
        assert_eq!(reserved.into_iter().collect::<Vec<_>>(), vec![0, 7]);

        let reserved = sel.reserved_semitones(Key::G);
        assert_eq!(reserved.into_iter().collect::<Vec<_>>(), vec![2, 7]);
    }

    #[test]
    fn enharmonic_choice_blocks_other_family() {
        let mut sel = Selection::new();
        sel.toggle(Key::C, Swara::R2).unwrap();
        assert_eq!(sel.availability(Key::C, Swara::G1), Availability::Taken);
        assert_eq!(sel.availability(Key::C, Swara::G2), Availability::Open);
        assert_eq!(
            sel.toggle(Key::C, Swara::G1),
            Err(TheoryError::ReservedPitch {
                swara: Swara::G1,
                semitone: 2
            })
        );
        assert_eq!(sel.get(Family::Ga), None);
    }

    #[test]
    fn same_family_variants_stay_open() {
        let mut sel = Selection::new();
        sel.toggle(Key::C, Swara::D2).unwrap();
        assert_eq!(sel.availability(Key::C, Swara::D2), Availability::Selected);
        assert_eq!(sel.availability(Key::C, Swara::D1), Availability::Open);
        assert_eq!(sel.availability(Key::C, Swara::N1), Availability::Taken);
        assert_eq!(
            sel.toggle(Key::C, Swara::D3),
            Ok(Toggle::Selected {
                previous: Some(Swara::D2)
            })
        );
        assert_eq!(sel.availability(Key::C, Swara::N1), Availability::Open);
        assert_eq!(sel.availability(Key::C, Swara::N2), Availability::Taken);
    }

    #[test]
    fn toggling_selected_deselects() {
        let mut sel = Selection::new();
        sel.toggle(Key::D, Swara::M2).unwrap();
        assert_eq!(sel.toggle(Key::D, Swara::M2), Ok(Toggle::Deselected));
        assert_eq!(sel.get(Family::Ma), None);
    }

    #[test]
    fn fixed_swaras_toggle_to_noop() {
        let mut sel = Selection::new();
        assert_eq!(sel.toggle(Key::C, Swara::Sa), Ok(Toggle::Fixed));
        assert_eq!(sel.toggle(Key::C, Swara::Pa), Ok(Toggle::Fixed));
        assert_eq!(sel, Selection::new());
    }

    #[test]
    fn complete_selection_yields_choices() {
        let mut sel = Selection::new();
        for sw in [Swara::R1, Swara::G1, Swara::M1, Swara::D1, Swara::N2] {
            sel.toggle(Key::C, sw).unwrap();
        }
        let choices = sel.choices().unwrap();
        assert_eq!(choices.to_string(), "R1 G1 M1 D1 N2");
        assert_eq!(choices.arohanam()[0], Swara::Sa);
        assert_eq!(choices.avarohanam()[0], Swara::TaraSa);
        assert_eq!(choices.avarohanam()[6], Swara::R1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut sel = Selection::new();
        sel.set(Swara::G3).unwrap();
        sel.set(Swara::N3).unwrap();
        sel.reset();
        assert_eq!(sel, Selection::new());
    }
}
