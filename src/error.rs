use thiserror::Error;

/// Errors produced while decoding a CB58 string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Cb58Error {
    /// A character outside the base58 alphabet. `position` counts characters,
    /// not bytes.
    #[error("invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Fewer decoded bytes than the trailing checksum needs.
    #[error("decoded {len} bytes, need at least 4 for the checksum")]
    PayloadTooShort { len: usize },
}
