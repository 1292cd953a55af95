//! Music-theory core: pitch classes, spelling, selection and the melakarta catalog.
//!
//! Everything here is pure. A [`Key`] and a [`Selection`] go in; spellings,
//! reserved pitch classes and catalog matches come out.

pub mod catalog;
pub mod pitch;
pub mod selection;
pub mod spelling;

pub use catalog::{Catalog, Melakarta, MELAKARTA_COUNT};
pub use pitch::{Family, Key, Letter, Swara};
pub use selection::{Availability, Choices, Selection, Toggle};
pub use spelling::{semitone_of, spell, spell_all, SpelledNote};
