//! Wizard steps and grid geometry for the key picker.

/// Keys per row in the key picker.
pub const KEYS_PER_ROW: usize = 6;

/// The three screens of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Choose the tonic key.
    Key,
    /// Choose one variant per movable swara family.
    Swaras,
    /// Show the matched melakarta.
    Result,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Key => 1,
            Step::Swaras => 2,
            Step::Result => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Key => "Select key",
            Step::Swaras => "Pick swara variants (S & P fixed)",
            Step::Result => "Matched melakarta",
        }
    }

    /// The step `Back` returns to.
    pub fn previous(self) -> Self {
        match self {
            Step::Key | Step::Swaras => Step::Key,
            Step::Result => Step::Swaras,
        }
    }
}

/// Move a cursor by `delta` within `0..len`, wrapping at both ends.
pub fn wrap_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as isize + delta).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_chain() {
        assert_eq!(Step::Result.previous(), Step::Swaras);
        assert_eq!(Step::Swaras.previous(), Step::Key);
        assert_eq!(Step::Key.previous(), Step::Key);
    }

    #[test]
    fn numbers() {
        assert_eq!(Step::Key.number(), 1);
        assert_eq!(Step::Result.number(), 3);
    }

    #[test]
    fn cursor_wraps() {
        assert_eq!(wrap_cursor(0, -1, 12), 11);
        assert_eq!(wrap_cursor(11, 1, 12), 0);
        assert_eq!(wrap_cursor(3, 6, 12), 9);
        assert_eq!(wrap_cursor(9, 6, 12), 3);
        assert_eq!(wrap_cursor(0, 1, 0), 0);
    }
}
