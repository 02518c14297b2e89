use std::fmt;

/// Number of symbols in the trie's alphabet (`'a'..='z'`).
pub const ALPHABET_SIZE: usize = 26;

/// A single symbol of the trie's alphabet: one lowercase ASCII letter.
///
/// Every character that enters the trie is converted to a `Letter` first, so
/// the child-table index can never fall outside `0..ALPHABET_SIZE`. The root's
/// "no symbol" sentinel is `Option::<Letter>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Returns the letter for `c`, or `None` if `c` is not in `'a'..='z'`.
    #[inline]
    pub fn new(c: char) -> Option<Letter> {
        c.is_ascii_lowercase().then(|| Letter(c as u8 - b'a'))
    }

    /// Returns the letter at `index` in the alphabet, or `None` if out of range.
    #[inline]
    pub fn from_index(index: usize) -> Option<Letter> {
        (index < ALPHABET_SIZE).then(|| Letter(index as u8))
    }

    /// Slot index of this letter in a child table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The character this letter stands for.
    #[inline]
    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::new(c).ok_or(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
