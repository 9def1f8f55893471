//! Raw Z85 encoding/decoding.
//!
//! Transforms 4-byte groups into 5 characters of the Z85 alphabet and back.
//! Only inputs aligned to the group size are accepted here;
//! arbitrary-length data goes through the framing in
//! [`padded`](crate::codec::padded).

use crate::codec::alphabet::{digit_value, ENCODER};
use crate::error::{DecodeError, EncodeError};

/// Bytes per input group.
pub(crate) const GROUP_BYTES: usize = 4;

/// Characters per encoded group.
pub(crate) const GROUP_CHARS: usize = 5;

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes `data` as a Z85 string.
///
/// The input length must be a multiple of 4; every 4-byte group becomes 5
/// characters, so the output length is exactly `data.len() * 5 / 4`. Empty
/// input yields an empty string.
pub fn encode(data: &[u8]) -> Result<String, EncodeError> {
    if data.len() % GROUP_BYTES != 0 {
        return Err(EncodeError::UnalignedLength { len: data.len() });
    }

    let mut out = String::with_capacity(data.len() / GROUP_BYTES * GROUP_CHARS);
    for group in data.chunks_exact(GROUP_BYTES) {
        // SAFETY: chunks_exact guarantees exactly 4 bytes, try_into always succeeds
        let value = u32::from_be_bytes(group.try_into().unwrap());
        for digit in split_group(value) {
            out.push(ENCODER[digit as usize] as char);
        }
    }
    Ok(out)
}

/// Splits a 32-bit group value into 5 base-85 digits, most significant
/// digit first.
#[inline]
fn split_group(mut value: u32) -> [u8; GROUP_CHARS] {
    let mut digits = [0u8; GROUP_CHARS];
    let mut i = digits.len();
    while i > 0 {
        i -= 1;
        digits[i] = (value % 85) as u8;
        value /= 85;
    }
    digits
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a Z85 string back into bytes.
///
/// The input length must be a non-zero multiple of 5; every 5-character
/// group becomes 4 bytes, so the output length is exactly
/// `input.len() * 4 / 5`. Empty and whitespace-only input fails with
/// [`DecodeError::Empty`], characters outside the alphabet with
/// [`DecodeError::InvalidCharacter`].
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    if input.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    let bytes = input.as_bytes();
    if bytes.len() % GROUP_CHARS != 0 {
        return Err(DecodeError::UnalignedLength { len: bytes.len() });
    }

    let mut out = Vec::with_capacity(bytes.len() / GROUP_CHARS * GROUP_BYTES);
    for (group, chars) in bytes.chunks_exact(GROUP_CHARS).enumerate() {
        // Accumulate in u64: five digits of 84 exceed u32::MAX
        let mut value: u64 = 0;
        for (i, &byte) in chars.iter().enumerate() {
            let digit = digit_value(byte).ok_or(DecodeError::InvalidCharacter {
                byte,
                pos: group * GROUP_CHARS + i,
            })?;
            value = value * 85 + digit as u64;
        }
        if value > u32::MAX as u64 {
            return Err(DecodeError::GroupOverflow { group });
        }
        out.extend_from_slice(&(value as u32).to_be_bytes());
    }
    Ok(out)
}
