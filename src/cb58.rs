use bitcoin::hex::DisplayHex;

use crate::base58::decode_base58;
use crate::error::Cb58Error;

/// Number of trailing checksum bytes in a CB58 string.
pub const CHECKSUM_LEN: usize = 4;

/// A decoded CB58 value split into payload and checksum.
///
/// The checksum is carried as-is. Nothing here compares it against a hash of
/// the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cb58<'a> {
    pub payload: &'a [u8],
    pub checksum: [u8; CHECKSUM_LEN],
}

/// Split decoded bytes into payload and trailing checksum.
/// Fails with `PayloadTooShort` below `CHECKSUM_LEN` bytes.
pub fn split_checksum(decoded: &[u8]) -> Result<Cb58<'_>, Cb58Error> {
    let split = decoded
        .len()
        .checked_sub(CHECKSUM_LEN)
        .ok_or(Cb58Error::PayloadTooShort { len: decoded.len() })?;
    let (payload, tail) = decoded.split_at(split);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(tail);
    Ok(Cb58 { payload, checksum })
}

/// Decode a CB58 string and return the payload bytes with the checksum
/// stripped.
pub fn decode_cb58_payload(s: &str) -> Result<Vec<u8>, Cb58Error> {
    let decoded = decode_base58(s)?;
    let cb58 = split_checksum(&decoded)?;
    log::debug!(
        "cb58: {} decoded bytes, payload {} bytes, checksum {} (not verified)",
        decoded.len(),
        cb58.payload.len(),
        cb58.checksum[..].as_hex()
    );
    Ok(cb58.payload.to_vec())
}

/// Decode a CB58 string into the lowercase hex of its payload, without a
/// `0x` prefix.
pub fn decode_cb58(s: &str) -> Result<String, Cb58Error> {
    let payload = decode_cb58_payload(s)?;
    Ok(payload.as_slice().to_lower_hex_string())
}
