//! Base58 decoding module.
//! Mirror of encode: leading zero-digit symbols become zero bytes, the rest is
//! converted base 58 -> base 256 in a fixed big-endian byte buffer.
//! Fails on the first symbol outside the alphabet; no partial output.

use crate::alphabet::to_digit;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors from Base58 decoding and Base58Check validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Byte outside the Base58 alphabet.
    #[error("invalid base58 symbol 0x{0:02x}")]
    InvalidSymbol(u8),
    /// Base58Check checksum mismatch, or payload too short to carry one.
    #[error("invalid base58check checksum")]
    InvalidChecksum,
}

/// Decodes Base58 symbols (Bitcoin alphabet) to bytes.
///
/// # Errors
/// - `InvalidSymbol(byte)`: first byte not in the alphabet.
#[inline]
pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, to_digit)
}

/// Decodes a Base58 string (Bitcoin alphabet) to bytes.
///
/// # Errors
/// - `InvalidSymbol(byte)`: first byte not in the alphabet.
#[inline]
pub fn decode_str(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode(input.as_bytes())
}

/// Decodes Base58 symbols to bytes, looking up each symbol's digit through `alphabet`.
///
/// Leading symbols that map to digit 0 become zero bytes.
///
/// # Errors
/// - `InvalidSymbol(byte)`: `alphabet` returned `None` for `byte`.
pub fn decode_with<F>(input: &[u8], alphabet: F) -> Result<Vec<u8>, DecodeError>
where
    F: Fn(u8) -> Option<u8>,
{
    let ones = input.iter().take_while(|&&b| alphabet(b) == Some(0)).count();
    let significant = &input[ones..];

    // log(58) / log(256) ~= 0.733, +1 for rounding.
    let mut bytes = vec![0u8; significant.len() * 733 / 1000 + 1];
    let mut active = 0usize;
    for &symbol in significant {
        let Some(val) = alphabet(symbol) else {
            debug!(symbol, "invalid base58 symbol");
            return Err(DecodeError::InvalidSymbol(symbol));
        };
        let mut carry = u32::from(val);
        let mut touched = 0usize;
        for byte in bytes.iter_mut().rev() {
            if carry == 0 && touched >= active {
                break;
            }
            carry += 58 * u32::from(*byte);
            #[allow(clippy::cast_possible_truncation)]
            let low = (carry % 256) as u8;
            *byte = low;
            carry /= 256;
            touched += 1;
        }
        debug_assert_eq!(carry, 0, "base58 byte buffer overflow");
        active = touched;
    }

    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let mut output = Vec::with_capacity(ones + bytes.len() - skip);
    output.extend(std::iter::repeat_n(0u8, ones));
    output.extend_from_slice(&bytes[skip..]);
    trace!(input_len = input.len(), output_len = output.len(), "base58 decoded");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn decode_known() {
        assert_eq!(decode(b""), Ok(vec![]));
        assert_eq!(decode(b"1"), Ok(vec![0u8]));
        assert_eq!(decode(b"2"), Ok(vec![1u8]));
        assert_eq!(decode(b"Cn8eVZg"), Ok(b"hello".to_vec()));
        assert_eq!(
            decode_str("72k1xXWG59fYdzSNoA"),
            Ok(b"Hello, World!".to_vec())
        );
        let encoded = "111114VYJtj3yEDffZem7N3PkK563wkLZZ8RjKzcfY";
        let genesis = hex!("000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f");
        assert_eq!(decode_str(encoded), Ok(genesis.to_vec()));
    }

    #[test]
    fn decode_leading_ones() {
        assert_eq!(decode(b"112"), Ok(hex!("000001").to_vec()));
        assert_eq!(decode(b"15Q"), Ok(hex!("00ff").to_vec()));
        // More markers than the significant part could size for on its own.
        assert_eq!(decode(b"1111112"), Ok(hex!("00000000000001").to_vec()));
        assert_eq!(decode(&[b'1'; 40]), Ok(vec![0u8; 40]));
    }

    #[test]
    fn decode_invalid_symbol() {
        assert_eq!(decode(b"invalid!"), Err(DecodeError::InvalidSymbol(b'l')));
        assert_eq!(decode(b"0"), Err(DecodeError::InvalidSymbol(b'0')));
        assert_eq!(decode(b"11O"), Err(DecodeError::InvalidSymbol(b'O')));
        assert_eq!(decode(&[b'2', 0xc3]), Err(DecodeError::InvalidSymbol(0xc3)));
        // First offender wins.
        assert_eq!(decode(b"2I0"), Err(DecodeError::InvalidSymbol(b'I')));
    }

    #[test]
    fn decode_custom_alphabet() {
        let shifted = |s: u8| to_digit(s).map(|d| (d + 57) % 58);
        assert_eq!(decode_with(b"223", shifted), Ok(vec![0, 0, 1]));
        assert_eq!(
            decode_with(b"2l", shifted),
            Err(DecodeError::InvalidSymbol(b'l'))
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            DecodeError::InvalidSymbol(b'0').to_string(),
            "invalid base58 symbol 0x30"
        );
        assert_eq!(
            DecodeError::InvalidChecksum.to_string(),
            "invalid base58check checksum"
        );
    }

    #[test]
    fn roundtrip_long() {
        let long = b"hello world b58check test payload".repeat(10);
        let enc = crate::encode(&long);
        assert_eq!(decode(&enc), Ok(long));
    }
}
