//! Padded Z85 framing for arbitrary-length data.
//!
//! Raw Z85 only accepts inputs aligned to 4 bytes. The padded variant
//! frames the payload with a one-byte padding count followed by that many
//! zero bytes, bringing the frame length to a multiple of 4, and runs the
//! frame through the raw codec. Decoding strips the frame again.

use crate::codec::z85::{self, GROUP_BYTES};
use crate::error::DecodeError;

/// Largest legal value of the padding-count header byte.
const MAX_PADDING: u8 = 3;

/// Encodes `data` of any length as a padded Z85 string.
///
/// The output is a valid raw Z85 string of length
/// `(data.len() + 1 + padding) * 5 / 4` where `padding` brings the framed
/// length to a multiple of 4. The original byte sequence, whatever its
/// length, is recovered exactly by [`decode_padded`].
pub fn encode_padded(data: &[u8]) -> String {
    let padding = match (data.len() + 1) % GROUP_BYTES {
        0 => 0,
        rem => GROUP_BYTES - rem,
    };

    let mut frame = Vec::with_capacity(1 + padding + data.len());
    frame.push(padding as u8);
    frame.resize(1 + padding, 0x00);
    frame.extend_from_slice(data);

    // The frame length is a multiple of 4 by construction, so the raw
    // encoder cannot reject it.
    z85::encode(&frame).unwrap()
}

/// Decodes a padded Z85 string, validating and stripping the frame.
///
/// Failures from the raw decoder pass through unchanged. A padding header
/// outside `0..=3` means the input was never produced by [`encode_padded`]
/// and fails with [`DecodeError::PaddingOutOfRange`].
pub fn decode_padded(input: &str) -> Result<Vec<u8>, DecodeError> {
    let frame = z85::decode(input)?;

    // A successful raw decode yields at least one 4-byte group, so the
    // header byte exists and 1 + padding never passes the end of the frame.
    let padding = frame[0];
    if padding > MAX_PADDING {
        return Err(DecodeError::PaddingOutOfRange { value: padding });
    }
    Ok(frame[1 + padding as usize..].to_vec())
}
