//! ABI return-data decoding
//!
//! Decodes the two return shapes the resolver needs: a dynamic `string`
//! (`symbol()`, `name()`) and a `uint` quantity (`decimals()`).
//!
//! Layout of a dynamic string return value:
//!
//! ```text
//! byte  0..32   offset word (ignored, always 0x20 for a single return value)
//! byte 32..64   length word, big-endian
//! byte 64..     `length` bytes of string data, right-padded to 32
//! ```
//!
//! Decoding never fails loudly. A payload that cannot be decoded yields an
//! empty string, which the resolver treats as "no usable value".

use crate::shared::constants::{ABI_STRING_DATA_OFFSET, ABI_STRING_LENGTH_OFFSET, ABI_WORD_SIZE};
use crate::shared::utils::{bytes_to_hex, hex_to_bytes};

/// A single 32-byte ABI word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbiWord([u8; ABI_WORD_SIZE]);

impl AbiWord {
    /// Read the word starting at `offset`, if the buffer is long enough
    pub fn read(buffer: &[u8], offset: usize) -> Option<Self> {
        let end = offset.checked_add(ABI_WORD_SIZE)?;
        let bytes: [u8; ABI_WORD_SIZE] = buffer.get(offset..end)?.try_into().ok()?;
        Some(Self(bytes))
    }

    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; ABI_WORD_SIZE];
        bytes[ABI_WORD_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Big-endian value of the word, `None` if it exceeds 64 bits
    pub fn to_u64(&self) -> Option<u64> {
        let (high, low) = self.0.split_at(ABI_WORD_SIZE - 8);
        if high.iter().any(|b| *b != 0) {
            return None;
        }
        let low: [u8; 8] = low.try_into().ok()?;
        Some(u64::from_be_bytes(low))
    }

    pub fn as_bytes(&self) -> &[u8; ABI_WORD_SIZE] {
        &self.0
    }
}

/// Decode an ABI-encoded dynamic string from a `0x`-prefixed hex payload.
///
/// Each data byte is taken as a raw character code; multi-byte UTF-8
/// sequences are not reassembled. Zero bytes are dropped and the result is
/// trimmed. Malformed payloads decode to `""`.
pub fn decode_abi_string(hex_payload: &str) -> String {
    if hex_payload.is_empty() || hex_payload == "0x" {
        return String::new();
    }

    let buffer = match hex_to_bytes(hex_payload) {
        Ok(buffer) => buffer,
        Err(e) => {
            log::debug!("Discarding malformed ABI string payload: {}", e);
            return String::new();
        }
    };

    decode_string_bytes(&buffer).unwrap_or_default()
}

fn decode_string_bytes(buffer: &[u8]) -> Option<String> {
    let length = AbiWord::read(buffer, ABI_STRING_LENGTH_OFFSET)?.to_u64()?;
    let length = usize::try_from(length).ok()?;
    let end = ABI_STRING_DATA_OFFSET.checked_add(length)?;
    let data = buffer.get(ABI_STRING_DATA_OFFSET..end)?;

    let decoded: String = data
        .iter()
        .filter(|byte| **byte != 0)
        .map(|byte| char::from(*byte))
        .collect();

    Some(decoded.trim().to_string())
}

/// Parse a `0x`-prefixed hex quantity as a big-endian unsigned integer.
///
/// Accepts both compact quantities (`0x12`) and full 32-byte words.
/// Returns `None` for `0x`, non-hex digits, or values wider than 64 bits.
pub fn decode_abi_uint(hex_payload: &str) -> Option<u64> {
    let digits = hex_payload
        .strip_prefix("0x")
        .or_else(|| hex_payload.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    u64::from_str_radix(significant, 16).ok()
}

/// Encode a string using the dynamic-string return layout
pub fn encode_abi_string(value: &str) -> String {
    let data = value.as_bytes();
    let padded_len = data.len().div_ceil(ABI_WORD_SIZE) * ABI_WORD_SIZE;

    let mut buffer = Vec::with_capacity(ABI_STRING_DATA_OFFSET + padded_len);
    buffer.extend_from_slice(AbiWord::from_u64(ABI_WORD_SIZE as u64).as_bytes());
    buffer.extend_from_slice(AbiWord::from_u64(data.len() as u64).as_bytes());
    buffer.extend_from_slice(data);
    buffer.resize(ABI_STRING_DATA_OFFSET + padded_len, 0);

    bytes_to_hex(&buffer)
}

/// Encode an unsigned integer as a single 32-byte word
pub fn encode_abi_uint(value: u64) -> String {
    bytes_to_hex(AbiWord::from_u64(value).as_bytes())
}
