use super::{Alphabet, ALPHABET};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

/// Decodes base58 text as a single big-endian integer.
///
/// The result is the minimal byte representation of that integer, so leading
/// zero digits are not preserved: `"1"`, `"11"` and `""` all decode to no bytes.
pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        // Little-endian byte limbs; the last limb is never zero.
        let mut output: Vec<u8> = Vec::with_capacity(input.len());

        for (input_index, character) in input.chars().enumerate() {
            let mut carry = self.alphabet.decode(character, input_index)? as usize;

            for value in output.iter_mut() {
                carry += (*value as usize) * 58;
                *value = (carry & 0xFF) as u8;
                carry >>= 8;
            }

            while carry > 0 {
                output.push((carry & 0xFF) as u8);
                carry >>= 8;
            }
        }

        output.reverse();
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("z"), Ok(vec![57]));
        assert_eq!(super::decode("21"), Ok(vec![58]));
        assert_eq!(super::decode("2g"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(super::decode("aPEr"), Ok(b"ccc".to_vec()));
        assert_eq!(super::decode("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(super::decode("ABnLTmg"), Ok(vec![0x51, 0x6b, 0x6f, 0xcd, 0x0f]));
        assert_eq!(
            super::decode("3SEo3LWLoPntC"),
            Ok(vec![0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
        );
        assert_eq!(super::decode("3EFU7m"), Ok(vec![0x57, 0x2e, 0x47, 0x94]));
        assert_eq!(
            super::decode("EJDM8drfXA6uyA"),
            Ok(vec![0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
        );
        assert_eq!(super::decode("Rt5zm"), Ok(vec![0x10, 0xc8, 0x51, 0x1e]));
    }

    #[test]
    fn decode_reference() {
        let output = super::decode("CPo1f4ZNjCsnE9WEFUmd3oYKzo43ANejAFpWF44R3fqjv");
        assert_eq!(
            output,
            Ok(vec![
                0x26, 0x5a, 0x2a, 0xd4, 0xa2, 0xf9, 0x9d, 0xfe, 0xcf, 0x7b, 0x10, 0xf3, 0x1e, 0x91, 0xd0, 0xe1, 0xd5, 0x92, 0xd0, 0x0f,
                0xe5, 0x1a, 0x0b, 0xc4, 0xce, 0x31, 0x8a, 0xee, 0xad, 0x10, 0x38, 0xf1, 0xc9,
            ])
        );
        assert_eq!(output.map(|bytes| bytes.len()), Ok(33));
    }

    #[test]
    fn decode_leading_zero_digits() {
        assert_eq!(super::decode("1"), Ok(vec![]));
        assert_eq!(super::decode("1111111111"), Ok(vec![]));
        assert_eq!(super::decode("11z"), Ok(vec![57]));
        assert_eq!(
            super::decode("1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            Ok(vec![
                0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae, 0xb1,
                0x72, 0xc0, 0x66, 0x47,
            ])
        );
    }

    #[test]
    fn decode_minimal_length() {
        // 58^4 - 1 fits in three bytes, 58^5 - 1 needs four.
        assert_eq!(super::decode("zzzz"), Ok(vec![0xac, 0xad, 0x0f]));
        assert_eq!(super::decode("zzzzz"), Ok(vec![0x27, 0x1f, 0x35, 0x9f]));
        for input in ["2", "z", "zz", "zzz", "21111111", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
            let output = super::decode(input).unwrap();
            assert_ne!(output.first(), Some(&0));
        }
    }

    #[test]
    fn decode_invalid_character() {
        assert_eq!(super::decode("0"), Err(Error::InvalidCharacter { character: '0', index: 0 }));
        assert_eq!(super::decode("abcO"), Err(Error::InvalidCharacter { character: 'O', index: 3 }));
        assert_eq!(super::decode("zIl"), Err(Error::InvalidCharacter { character: 'I', index: 1 }));
        assert_eq!(super::decode("2l"), Err(Error::InvalidCharacter { character: 'l', index: 1 }));
        assert_eq!(super::decode("2 2"), Err(Error::InvalidCharacter { character: ' ', index: 1 }));
        assert_eq!(super::decode("2é2"), Err(Error::InvalidCharacter { character: 'é', index: 1 }));
        assert_eq!(
            super::decode("2é0").map_err(|error| error.to_string()),
            Err("Invalid character 'é' at index 1".to_string())
        );
    }
}
