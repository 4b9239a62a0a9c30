// Base58 decoding over the Bitcoin alphabet, using the same multiply-add
// over a base-256 digit buffer as bitcoin-cpp.

use crate::error::Cb58Error;

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

// Reverse lookup for ASCII; -1 marks characters outside the alphabet.
const INDEXES: [i8; 128] = {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
};

fn digit(ch: char) -> Option<u8> {
    let idx = *INDEXES.get(ch as usize)?;
    if idx < 0 {
        None
    } else {
        Some(idx as u8)
    }
}

/// Decode a base58 string into bytes.
///
/// The string is read as one big-endian base-58 number. Its minimal
/// big-endian byte form (empty for zero) is prefixed with one `0x00` for each
/// leading `'1'`. Whitespace is not skipped.
pub fn decode_base58(s: &str) -> Result<Vec<u8>, Cb58Error> {
    let zeros = s.bytes().take_while(|&b| b == ALPHABET[0]).count();
    // Little-endian base-256 digits; log(58) / log(256) is just under 0.733.
    let mut b256: Vec<u8> = Vec::with_capacity(s.len() * 733 / 1000 + 1);

    for (position, ch) in s.chars().enumerate().skip(zeros) {
        let mut carry = match digit(ch) {
            Some(v) => v as u32,
            None => return Err(Cb58Error::InvalidCharacter { character: ch, position }),
        };
        for d in b256.iter_mut() {
            carry += (*d as u32) * 58;
            *d = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            b256.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    log::trace!("base58: {} leading zero bytes, {} value bytes", zeros, b256.len());

    let mut result = Vec::with_capacity(zeros + b256.len());
    result.extend(std::iter::repeat(0u8).take(zeros));
    result.extend(b256.iter().rev());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_hello_world() {
        assert_eq!(decode_base58("StV1DL6CwTryKyV").unwrap(), b"hello world");
    }

    #[test]
    fn empty_string_is_empty_bytes() {
        assert_eq!(decode_base58("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_one_is_single_zero_byte() {
        assert_eq!(decode_base58("1").unwrap(), vec![0u8]);
    }

    #[test]
    fn leading_ones_become_zero_bytes() {
        for k in 0..40 {
            let s = "1".repeat(k);
            assert_eq!(decode_base58(&s).unwrap(), vec![0u8; k], "k = {}", k);
        }
    }

    #[test]
    fn leading_ones_before_value() {
        // 0x00 * 9 || 0xff, checksummed
        let decoded = decode_base58("111111111VnH8Ynb").unwrap();
        assert_eq!(decoded.len(), 14);
        assert!(decoded[..9].iter().all(|b| *b == 0));
        assert_eq!(decoded[9], 0xff);
    }

    #[test]
    fn single_digits_map_to_alphabet_index() {
        for (i, c) in ALPHABET.iter().enumerate().skip(1) {
            let s = (*c as char).to_string();
            assert_eq!(decode_base58(&s).unwrap(), vec![i as u8]);
        }
        // 58 = "21"
        assert_eq!(decode_base58("21").unwrap(), vec![58]);
    }

    #[test]
    fn wide_values_do_not_overflow() {
        let data: Vec<u8> = (0..=255u8).rev().collect();
        let encoded = bitcoin::base58::encode(&data);
        assert_eq!(decode_base58(&encoded).unwrap(), data);
    }

    #[test]
    fn decode_is_deterministic() {
        let s = "6L5yRNPTuciSgXGHqYwn9N6NeoKMvqvy";
        assert_eq!(decode_base58(s).unwrap(), decode_base58(s).unwrap());
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        for bad in ['0', 'O', 'I', 'l', ' ', '+', '/', 'é'] {
            let s = format!("2{}", bad);
            assert_eq!(
                decode_base58(&s),
                Err(Cb58Error::InvalidCharacter { character: bad, position: 1 })
            );
        }
    }

    #[test]
    fn invalid_position_is_first_offender() {
        assert_eq!(
            decode_base58("112Ol0").unwrap_err(),
            Cb58Error::InvalidCharacter { character: 'O', position: 3 }
        );
    }

    #[test]
    fn leading_whitespace_is_rejected() {
        assert_eq!(
            decode_base58(" 2").unwrap_err(),
            Cb58Error::InvalidCharacter { character: ' ', position: 0 }
        );
    }
}
