use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

/// Digit table for a base-`N` positional alphabet, stored as a reverse map over ASCII.
pub struct Alphabet<const N: usize> {
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    /// Digit value of `character`; `index` is its position in the input and only used for reporting.
    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        let value = if character.is_ascii() { self.decode[character as usize] } else { None };
        value.ok_or(DecodeError::InvalidCharacter { character, index })
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { decode })
    }
}
