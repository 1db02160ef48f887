use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated maze.
///
/// The text form is 64 lowercase hexadecimal digits. Integer seeds are
/// expanded to 256 bits by hashing, so small integers still give well-mixed
/// generator states.
///
/// # Examples
///
/// ```
/// use mazewalk_generator::MazeSeed;
///
/// let seed = MazeSeed::from(42_u64);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<MazeSeed>()?, seed);
/// # Ok::<(), mazewalk_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSeed([u8; 32]);

impl MazeSeed {
    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::fill(&mut bytes);
        Self(bytes)
    }
}

impl From<[u8; 32]> for MazeSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<MazeSeed> for [u8; 32] {
    fn from(seed: MazeSeed) -> Self {
        seed.0
    }
}

impl From<u64> for MazeSeed {
    fn from(value: u64) -> Self {
        Self(Sha256::digest(value.to_le_bytes()).into())
    }
}

impl Display for MazeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`MazeSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The seed is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {_0} characters")]
    InvalidLength(#[error(not(source))] usize),
    /// The seed contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} at index {index}")]
    InvalidDigit {
        /// Character index within the input.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for MazeSeed {
    type Err = SeedParseError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength(len));
        }
        let mut bytes = [0; 32];
        let mut digits = s.chars().enumerate().map(|(index, ch)| {
            ch.to_digit(16)
                .ok_or(SeedParseError::InvalidDigit { index, ch })
        });
        for byte in &mut bytes {
            let (Some(hi), Some(lo)) = (digits.next(), digits.next()) else {
                unreachable!("length checked above");
            };
            *byte = ((hi? << 4) | lo?) as u8;
        }
        Ok(Self(bytes))
    }
}
