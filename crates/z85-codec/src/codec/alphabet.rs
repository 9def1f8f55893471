//! The Z85 alphabet tables.
//!
//! Maps base-85 digit values to the 85 code-safe printable ASCII characters
//! of the Z85 alphabet and back. Both tables are compile-time constants; the
//! decoder table is derived from the encoder table so the two can never
//! drift apart.

/// Maps base-85 digit values 0..=84 to ASCII characters.
pub const ENCODER: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Marker for decoder slots that belong to no alphabet character.
const UNUSED: u8 = 0xFF;

/// Lowest ASCII code covered by the decoder table.
const DECODER_OFFSET: u8 = 32;

/// Maps ASCII codes 32..=127 (offset by [`DECODER_OFFSET`]) back to digit
/// values. Slots for printable characters outside the alphabet hold
/// [`UNUSED`]; codes below 32 and above 127 are not covered at all.
const DECODER: [u8; 96] = build_decoder();

const fn build_decoder() -> [u8; 96] {
    let mut table = [UNUSED; 96];
    let mut digit = 0;
    while digit < ENCODER.len() {
        table[(ENCODER[digit] - DECODER_OFFSET) as usize] = digit as u8;
        digit += 1;
    }
    table
}

/// Returns the base-85 digit value of `byte`, or `None` when the byte is
/// not part of the Z85 alphabet.
#[inline]
pub fn digit_value(byte: u8) -> Option<u8> {
    let index = byte.wrapping_sub(DECODER_OFFSET) as usize;
    if index >= DECODER.len() {
        return None;
    }
    match DECODER[index] {
        UNUSED => None,
        digit => Some(digit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_inverse() {
        for (digit, &ch) in ENCODER.iter().enumerate() {
            assert_eq!(digit_value(ch), Some(digit as u8), "char {:?}", ch as char);
        }
    }

    #[test]
    fn alphabet_has_no_duplicates() {
        let mut seen = [false; 256];
        for &ch in ENCODER.iter() {
            assert!(!seen[ch as usize], "duplicate char {:?}", ch as char);
            seen[ch as usize] = true;
        }
    }

    #[test]
    fn non_alphabet_bytes_rejected() {
        // Printable characters left out of the alphabet
        for ch in [b' ', b'"', b'\'', b',', b';', b'_', b'`', b'|', b'~', b'\\'] {
            assert_eq!(digit_value(ch), None, "char {:?}", ch as char);
        }
        // Outside the printable range entirely
        for byte in (0u8..32).chain(128..=255) {
            assert_eq!(digit_value(byte), None, "byte {byte:#04x}");
        }
    }
}
