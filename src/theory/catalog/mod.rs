//! The 72 melakartas, generated by enumeration and checked against the
//! traditional numbering.
//!
//! Enumeration order is Ma outermost, then the (Ri, Ga) pair, then the
//! (Dha, Ni) pair. A pair is kept only when the lower position's pitch sits
//! strictly below the upper one, which leaves six pairs on each side and
//! 2 × 6 × 6 = 72 scales.

pub mod table;

use tracing::debug;

use crate::error::{Result, TheoryError};

use super::pitch::{Family, Swara};
use super::selection::{Choices, Selection};

/// Number of melakartas.
pub const MELAKARTA_COUNT: usize = 72;

/// Melakartas per chakra.
const CHAKRA_SIZE: u8 = 6;

/// One parent scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Melakarta {
    /// Traditional number, `1..=72`.
    pub ordinal: u8,
    pub name: &'static str,
    pub choices: Choices,
}

impl Melakarta {
    pub fn arohanam(&self) -> [Swara; 8] {
        self.choices.arohanam()
    }

    pub fn avarohanam(&self) -> [Swara; 8] {
        self.choices.avarohanam()
    }

    /// Chakra number, `1..=12`.
    pub fn chakra_number(&self) -> u8 {
        (self.ordinal - 1) / CHAKRA_SIZE + 1
    }

    pub fn chakra(&self) -> &'static str {
        table::CHAKRAS[usize::from(self.chakra_number() - 1)]
    }

    /// Space-separated arohanam tokens, as written in the reference table.
    pub fn arohanam_text(&self) -> String {
        join_tokens(&self.arohanam())
    }

    pub fn avarohanam_text(&self) -> String {
        join_tokens(&self.avarohanam())
    }
}

fn join_tokens(swaras: &[Swara]) -> String {
    swaras
        .iter()
        .map(|s| s.token())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered (lower, upper) variant pairs whose pitches do not collide or cross.
fn ordered_pairs(lower: Family, upper: Family) -> Vec<(Swara, Swara)> {
    let mut pairs = Vec::new();
    for &lo in lower.variants() {
        for &hi in upper.variants() {
            if lo.offset() < hi.offset() {
                pairs.push((lo, hi));
            }
        }
    }
    pairs
}

/// Enumerate every melakarta's choices in ordinal order.
pub fn enumerate() -> Vec<Choices> {
    let lower = ordered_pairs(Family::Ri, Family::Ga);
    let upper = ordered_pairs(Family::Dha, Family::Ni);
    let mut out = Vec::with_capacity(MELAKARTA_COUNT);
    for &ma in Family::Ma.variants() {
        for &(ri, ga) in &lower {
            for &(dha, ni) in &upper {
                out.push(Choices {
                    ri,
                    ga,
                    ma,
                    dha,
                    ni,
                });
            }
        }
    }
    out
}

/// The immutable catalog of all 72 melakartas.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Melakarta>,
}

impl Catalog {
    /// Generate the catalog and check each entry against the reference table.
    pub fn build() -> Result<Self> {
        let generated = enumerate();
        if generated.len() != table::REFERENCE.len() {
            return Err(TheoryError::CatalogMismatch {
                ordinal: 0,
                generated: format!("{} entries", generated.len()),
                expected: format!("{} entries", table::REFERENCE.len()),
            });
        }

        let mut entries = Vec::with_capacity(MELAKARTA_COUNT);
        for (i, (choices, &(ordinal, name, arohanam))) in
            generated.into_iter().zip(table::REFERENCE.iter()).enumerate()
        {
            let entry = Melakarta {
                ordinal: i as u8 + 1,
                name,
                choices,
            };
            let text = entry.arohanam_text();
            if entry.ordinal != ordinal || text != arohanam {
                return Err(TheoryError::CatalogMismatch {
                    ordinal,
                    generated: format!("#{} {text}", entry.ordinal),
                    expected: arohanam.to_string(),
                });
            }
            entries.push(entry);
        }

        debug!(entries = entries.len(), "melakarta catalog built");
        Ok(Self { entries })
    }

    /// All entries in ordinal order.
    pub fn entries(&self) -> &[Melakarta] {
        &self.entries
    }

    pub fn by_ordinal(&self, ordinal: u8) -> Option<&Melakarta> {
        let idx = usize::from(ordinal).checked_sub(1)?;
        self.entries.get(idx)
    }

    /// Case-insensitive name lookup.
    pub fn by_name(&self, name: &str) -> Option<&Melakarta> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// Look an entry up by ordinal (`"29"`) or by its full catalog name.
    pub fn lookup(&self, query: &str) -> Option<&Melakarta> {
        match query.trim().parse::<u8>() {
            Ok(n) => self.by_ordinal(n),
            Err(_) => self.by_name(query),
        }
    }

    /// Find the entry for a selection.
    ///
    /// `Ok(None)` means the selection is still incomplete. A complete
    /// selection with no entry is reported as [`TheoryError::NoCatalogMatch`].
    pub fn find(&self, selection: &Selection) -> Result<Option<&Melakarta>> {
        let Some(choices) = selection.choices() else {
            return Ok(None);
        };
        self.find_choices(choices).map(Some)
    }

    pub fn find_choices(&self, choices: Choices) -> Result<&Melakarta> {
        self.entries
            .iter()
            .find(|m| m.choices == choices)
            .ok_or(TheoryError::NoCatalogMatch(choices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::build().expect("catalog matches reference table")
    }

    #[test]
    fn six_pairs_per_side() {
        assert_eq!(ordered_pairs(Family::Ri, Family::Ga).len(), 6);
        assert_eq!(ordered_pairs(Family::Dha, Family::Ni).len(), 6);
        assert!(ordered_pairs(Family::Ri, Family::Ga).contains(&(Swara::R1, Swara::G1)));
        assert!(!ordered_pairs(Family::Ri, Family::Ga).contains(&(Swara::R2, Swara::G1)));
        assert!(!ordered_pairs(Family::Ri, Family::Ga).contains(&(Swara::R3, Swara::G2)));
    }

    #[test]
    fn builds_72_entries() {
        let cat = catalog();
        assert_eq!(cat.entries().len(), MELAKARTA_COUNT);
        for (i, m) in cat.entries().iter().enumerate() {
            assert_eq!(m.ordinal as usize, i + 1);
        }
    }

    #[test]
    fn first_and_last_entries() {
        let cat = catalog();
        let first = cat.by_ordinal(1).unwrap();
        assert_eq!(first.name, "Kanakangi");
        assert_eq!(first.arohanam_text(), "S R1 G1 M1 P D1 N1 S'");
        let last = cat.by_ordinal(72).unwrap();
        assert_eq!(last.name, "Rasikapriya");
        assert_eq!(last.avarohanam_text(), "S' N3 D3 P M2 G3 R3 S");
    }

    #[test]
    fn ma_splits_the_catalog_in_halves() {
        let cat = catalog();
        assert!(cat.entries()[..36].iter().all(|m| m.choices.ma == Swara::M1));
        assert!(cat.entries()[36..].iter().all(|m| m.choices.ma == Swara::M2));
    }

    #[test]
    fn well_known_ragas() {
        let cat = catalog();
        let shankarabharanam = cat.by_ordinal(29).unwrap();
        assert_eq!(shankarabharanam.name, "Dheerashankarabharanam");
        assert_eq!(shankarabharanam.arohanam_text(), "S R2 G3 M1 P D2 N3 S'");
        assert_eq!(cat.by_ordinal(15).unwrap().name, "Mayamalavagowla");
        assert_eq!(cat.by_ordinal(65).unwrap().name, "Mechakalyani");
    }

    #[test]
    fn chakras() {
        let cat = catalog();
        assert_eq!(cat.by_ordinal(1).unwrap().chakra(), "Indu");
        assert_eq!(cat.by_ordinal(6).unwrap().chakra(), "Indu");
        assert_eq!(cat.by_ordinal(7).unwrap().chakra(), "Netra");
        assert_eq!(cat.by_ordinal(36).unwrap().chakra_number(), 6);
        assert_eq!(cat.by_ordinal(37).unwrap().chakra(), "Rishi");
        assert_eq!(cat.by_ordinal(72).unwrap().chakra(), "Aditya");
    }

    #[test]
    fn out_of_range_ordinals() {
        let cat = catalog();
        assert!(cat.by_ordinal(0).is_none());
        assert!(cat.by_ordinal(73).is_none());
    }

    #[test]
    fn lookup_by_name_or_number() {
        let cat = catalog();
        assert_eq!(cat.lookup("22").unwrap().name, "Kharaharapriya");
        assert_eq!(cat.lookup("kharaharapriya").unwrap().ordinal, 22);
        assert_eq!(cat.lookup(" Kalyani ").map(|m| m.ordinal), None);
    }

    #[test]
    fn incomplete_selection_is_not_an_error() {
        let cat = catalog();
        let mut sel = Selection::new();
        sel.set(Swara::R1).unwrap();
        sel.set(Swara::G2).unwrap();
        assert_eq!(cat.find(&sel), Ok(None));
    }

    #[test]
    fn impossible_choices_report_no_match() {
        let cat = catalog();
        let choices = Choices {
            ri: Swara::R3,
            ga: Swara::G1,
            ma: Swara::M1,
            dha: Swara::D1,
            ni: Swara::N1,
        };
        assert_eq!(
            cat.find_choices(choices),
            Err(TheoryError::NoCatalogMatch(choices))
        );
    }
}
