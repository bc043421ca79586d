//! Base58 codec with the Bitcoin alphabet, plus Base58Check.
//! Leading zero bytes are encoded as '1's; Base58Check appends the first
//! four bytes of a double SHA-256 digest.

mod alphabet;
mod check;
mod decode;
mod encode;

pub use alphabet::{to_digit, to_symbol, ALPHABET};
pub use check::{check, check_string, checksum, uncheck, uncheck_str, CHECKSUM_LEN};
pub use decode::{decode, decode_str, decode_with, DecodeError};
pub use encode::{encode, encode_string, encode_with};
