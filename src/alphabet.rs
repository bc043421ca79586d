//! Bitcoin Base58 alphabet and its inverse.
//! '0', 'O', 'I' and 'l' are left out to avoid look-alike symbols.

/// Symbol for each digit value, indexed by digit.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Marks ASCII bytes that are not part of [`ALPHABET`].
const INVALID: u8 = 255;

const DIGIT_TO_VAL: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        #[allow(clippy::cast_possible_truncation)]
        let val = i as u8;
        table[ALPHABET[i] as usize] = val;
        i += 1;
    }
    table
};

/// Maps a digit value to its symbol.
///
/// # Panics
/// If `digit >= 58`.
#[must_use]
#[inline]
pub fn to_symbol(digit: u8) -> u8 {
    ALPHABET[usize::from(digit)]
}

/// Maps a symbol back to its digit value, `None` for bytes outside the alphabet.
#[must_use]
#[inline]
pub fn to_digit(symbol: u8) -> Option<u8> {
    match DIGIT_TO_VAL.get(usize::from(symbol)) {
        Some(&INVALID) | None => None,
        Some(&val) => Some(val),
    }
}
