//! Text to binary payload conversion

use crate::constants::{BITS_PER_CHAR, MAX_CODE_POINT};
use crate::error::StegoError;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// A validated, non-empty payload of single-byte characters
///
/// Each character is stored as its code point, which must be at most 255.
/// Wider characters are rejected rather than truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    /// Build a payload from text
    pub fn from_text(text: &str) -> Result<Self, StegoError> {
        if text.is_empty() {
            return Err(StegoError::EmptyPayload);
        }

        let bytes = text
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                if ch as u32 > MAX_CODE_POINT {
                    Err(StegoError::UnsupportedCharacter { ch, position })
                } else {
                    Ok(ch as u8)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bytes })
    }

    /// Build a payload from raw code points
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        if bytes.is_empty() {
            return Err(StegoError::EmptyPayload);
        }

        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Number of characters, equal to the number of pixel groups consumed
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Code points in input order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bits of each character, most significant first
    pub fn bits(&self) -> impl Iterator<Item = [bool; BITS_PER_CHAR]> + '_ {
        self.bytes.iter().map(|&b| byte_bits(b))
    }

    /// Zero-padded 8-character binary strings, one per character
    pub fn binary_strings(&self) -> Vec<String> {
        self.bytes.iter().map(|b| format!("{:08b}", b)).collect()
    }
}

/// Split a byte into bits, most significant first
pub fn byte_bits(byte: u8) -> [bool; BITS_PER_CHAR] {
    let mut bits = [false; BITS_PER_CHAR];
    for (j, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> (BITS_PER_CHAR - 1 - j)) & 1 == 1;
    }
    bits
}

/// Convert text into one 8-bit binary string per character
pub fn generate_binary_data(text: &str) -> Result<Vec<String>, StegoError> {
    Payload::from_text(text).map(|p| p.binary_strings())
}
