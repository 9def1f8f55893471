//! Z85 encoding/decoding.
//!
//! [`z85`] implements the raw 4-byte-to-5-character transform; [`padded`]
//! layers a framing on top that accepts data of any length.

pub mod alphabet;
pub mod padded;
pub mod z85;

pub use padded::{decode_padded, encode_padded};
pub use z85::{decode, encode};
