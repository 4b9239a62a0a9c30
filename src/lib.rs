//! Decoding of CB58 identifiers: base58 strings carrying a payload followed by
//! a 4-byte checksum.
//!
//! The checksum is stripped but not verified.

mod base58;
mod cb58;
mod error;

pub use base58::{decode_base58, ALPHABET};
pub use cb58::{decode_cb58, decode_cb58_payload, split_checksum, Cb58, CHECKSUM_LEN};
pub use error::Cb58Error;
