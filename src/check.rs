//! Base58Check: payload ++ checksum, Base58 encoded.
//! The checksum is the first 4 bytes of hex(SHA256(hex(SHA256(payload)))): each
//! digest is rendered as lowercase hex text before it is used.

use crate::decode::{decode, DecodeError};
use crate::encode::encode;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Length of the Base58Check checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// First [`CHECKSUM_LEN`] bytes of the hex-rendered double SHA-256 of `payload`.
#[must_use]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash1 = hex::encode(Sha256::digest(payload));
    let hash2 = hex::encode(Sha256::digest(hash1.as_bytes()));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash2.as_bytes()[..CHECKSUM_LEN]);
    out
}

/// Encodes `payload` with its checksum appended.
#[must_use]
pub fn check(payload: &[u8]) -> Vec<u8> {
    let mut checked = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    checked.extend_from_slice(payload);
    checked.extend_from_slice(&checksum(payload));
    encode(&checked)
}

/// [`check`] as a `String`.
#[must_use]
pub fn check_string(payload: &[u8]) -> String {
    check(payload).into_iter().map(char::from).collect()
}

/// Decodes Base58Check symbols and returns the payload without its checksum.
///
/// # Errors
/// - `InvalidSymbol(byte)`: from [`decode`].
/// - `InvalidChecksum`: decoded data shorter than 4 bytes, or checksum mismatch.
pub fn uncheck(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut output = decode(input)?;
    if output.len() < CHECKSUM_LEN {
        debug!(len = output.len(), "base58check payload too short");
        return Err(DecodeError::InvalidChecksum);
    }
    let data_len = output.len() - CHECKSUM_LEN;
    let (payload, actual) = output.split_at(data_len);
    if checksum(payload).as_slice() != actual {
        debug!(len = data_len, "base58check checksum mismatch");
        return Err(DecodeError::InvalidChecksum);
    }
    output.truncate(data_len);
    Ok(output)
}

/// [`uncheck`] for a string input.
///
/// # Errors
/// See [`uncheck`].
#[inline]
pub fn uncheck_str(input: &str) -> Result<Vec<u8>, DecodeError> {
    uncheck(input.as_bytes())
}
