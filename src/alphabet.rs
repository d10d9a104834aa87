use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';
#[cfg(test)]
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

pub(crate) trait GridChar {
    /// True for the 26 characters a word or a board cell may hold (`a`..=`z`).
    fn is_grid_letter(&self) -> bool;
    /// Slot of this letter in a 26-wide child array, if it is a grid letter.
    fn letter_slot(&self) -> Option<usize>;
}

impl GridChar for char {
    fn is_grid_letter(&self) -> bool {
        LOWERCASE_ALPHABET.contains(self)
    }

    fn letter_slot(&self) -> Option<usize> {
        if self.is_grid_letter() {
            Some(*self as usize - 'a' as usize)
        } else {
            None
        }
    }
}

/// Inverse of [`GridChar::letter_slot`].
pub(crate) fn slot_to_letter(slot: usize) -> char {
    debug_assert!(slot < ALPHABET_SIZE, "slot {slot} out of range");
    (b'a' + slot as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_grid_letter() {
        assert!('a'.is_grid_letter());
        assert!('m'.is_grid_letter());
        assert!('z'.is_grid_letter());
    }

    #[test]
    fn test_is_not_grid_letter() {
        assert!(!'A'.is_grid_letter()); // uppercase
        assert!(!'1'.is_grid_letter());
        assert!(!' '.is_grid_letter());
        assert!(!'é'.is_grid_letter());
    }

    #[test]
    fn test_uppercase_has_no_slot() {
        for c in UPPERCASE_ALPHABET {
            assert_eq!(c.letter_slot(), None, "'{c}' should not map to a slot");
        }
    }

    #[test]
    fn test_slot_round_trip_covers_alphabet() {
        for (i, c) in LOWERCASE_ALPHABET.enumerate() {
            assert_eq!(c.letter_slot(), Some(i));
            assert_eq!(slot_to_letter(i), c);
        }
        assert_eq!(LOWERCASE_ALPHABET.count(), ALPHABET_SIZE);
    }
}
