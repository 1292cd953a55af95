//! Session state — the chosen key and swara selection for one user session.
//!
//! Owned by the front end and passed by reference to the pure theory
//! functions; nothing here is global.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::Result;
use crate::theory::{
    semitone_of, spell, Availability, Catalog, Key, Melakarta, Selection, SpelledNote, Swara,
    Toggle,
};

/// One row of the swara table shown while choosing variants.
#[derive(Debug, Clone, PartialEq)]
pub struct SwaraRow {
    pub swara: Swara,
    pub interval: &'static str,
    pub note: SpelledNote,
    pub availability: Availability,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    key: Key,
    selection: Selection,
}

impl Session {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            selection: Selection::new(),
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Change key. The selection is always cleared, since choices made
    /// under one key may collide under another.
    pub fn select_key(&mut self, key: Key) {
        info!(%key, "key selected");
        self.key = key;
        self.selection.reset();
    }

    /// Clear the selection, keeping the key.
    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Toggle a swara, enforcing the reserved-pitch rule.
    pub fn toggle(&mut self, swara: Swara) -> Result<Toggle> {
        let outcome = self.selection.toggle(self.key, swara)?;
        debug!(%swara, ?outcome, "swara toggled");
        Ok(outcome)
    }

    pub fn spell(&self, swara: Swara) -> SpelledNote {
        spell(self.key, swara)
    }

    pub fn reserved_semitones(&self) -> BTreeSet<u8> {
        self.selection.reserved_semitones(self.key)
    }

    pub fn availability(&self, swara: Swara) -> Availability {
        self.selection.availability(self.key, swara)
    }

    /// Every swara, tonic to upper octave, with spelling and availability.
    pub fn rows(&self) -> Vec<SwaraRow> {
        Swara::ALL
            .iter()
            .map(|&swara| SwaraRow {
                swara,
                interval: swara.interval_name(),
                note: self.spell(swara),
                availability: self.availability(swara),
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete()
    }

    /// The matching melakarta once all five families are chosen.
    pub fn matched<'c>(&self, catalog: &'c Catalog) -> Result<Option<&'c Melakarta>> {
        catalog.find(&self.selection)
    }

    /// Absolute pitch class of a swara under the session key.
    pub fn semitone(&self, swara: Swara) -> u8 {
        semitone_of(self.key, swara)
    }
}
