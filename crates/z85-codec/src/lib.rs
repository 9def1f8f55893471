//! Z85 binary-to-text codec with a padded framing for arbitrary-length data.
//!
//! Z85 (rfc.zeromq.org/spec:32) maps each 4-byte group of the input to 5
//! characters drawn from an 85-symbol alphabet that is safe to embed in
//! source code and configuration strings. The raw codec only accepts inputs
//! whose length is a multiple of 4; the padded variant frames
//! arbitrary-length data with a one-byte padding count so that anything can
//! ride over the same transform.
//!
//! # Quick Start
//!
//! ```rust
//! use z85_codec::{decode, decode_padded, encode, encode_padded};
//!
//! // Raw Z85: input length must be a multiple of 4
//! let data = [0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B];
//! let encoded = encode(&data).unwrap();
//! assert_eq!(encoded, "HelloWorld");
//! assert_eq!(decode(&encoded).unwrap(), data);
//!
//! // Padded Z85: any length goes
//! let encoded = encode_padded(b"key");
//! assert_eq!(decode_padded(&encoded).unwrap(), b"key");
//! ```
//!
//! # Modules
//!
//! - [`codec`]: the raw and padded transforms plus the alphabet tables
//! - [`error`]: error types
//!
//! # Failure model
//!
//! The decoder safely handles untrusted input: every byte is checked against
//! the alphabet and all failures surface as descriptive errors. Misaligned,
//! empty, or out-of-alphabet input is reported as
//! [`FailureKind::NotApplicable`] ("this is not Z85"); a padded frame whose
//! header byte is out of range means the data is damaged or was never
//! produced by this codec and is reported as [`FailureKind::Corrupt`]. See
//! [`DecodeError::kind`].

pub mod codec;
pub mod error;

// Re-export the entry points at crate root
pub use codec::{decode, decode_padded, encode, encode_padded};
pub use error::{DecodeError, EncodeError, FailureKind};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
