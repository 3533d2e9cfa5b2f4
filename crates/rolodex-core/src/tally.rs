//! Per-letter contact counts.

/// Number of letters tracked by [`LetterTally`] (`A` through `Z`).
pub const ALPHABET_SIZE: usize = 26;

/// Count of contacts per initial letter, case-insensitive.
///
/// Names whose first character is not an ASCII letter are not counted
/// anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterTally {
    counts: [usize; ALPHABET_SIZE],
}

impl LetterTally {
    /// Create an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `name` under its initial letter.
    ///
    /// Returns `false` (and counts nothing) for empty names and names that
    /// start with anything other than `a..=z` / `A..=Z`.
    pub fn record(&mut self, name: &str) -> bool {
        match name.chars().next().and_then(letter_index) {
            Some(index) => {
                self.counts[index] += 1;
                true
            },
            None => false,
        }
    }

    /// Count for `letter` (either case). Zero for non-letters.
    pub fn get(&self, letter: char) -> usize {
        letter_index(letter).map_or(0, |index| self.counts[index])
    }

    /// Sum over all letters.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(letter, count)` pairs from `'A'` to `'Z'`, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        ('A'..='Z').zip(self.counts.iter().copied())
    }
}

fn letter_index(c: char) -> Option<usize> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() { Some(usize::from(lower as u8 - b'a')) } else { None }
}
