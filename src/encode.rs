//! Base58 encoding module.
//! Leading zero bytes become one zero-digit symbol each; the rest is converted
//! base 256 -> base 58 with a fixed big-endian digit buffer.
//! Perf: O(n^2) multiply-and-add passes, bounded by the active digit count.
use crate::alphabet::to_symbol;
use tracing::trace;

/// Encodes bytes to Base58 symbols (Bitcoin alphabet).
#[must_use]
#[inline]
pub fn encode(input: &[u8]) -> Vec<u8> {
    encode_with(input, to_symbol)
}

/// Encodes bytes to a Base58 `String` (Bitcoin alphabet).
#[must_use]
pub fn encode_string(input: &[u8]) -> String {
    encode(input).into_iter().map(char::from).collect()
}

/// Encodes bytes to Base58 symbols, mapping each digit (0..58) through `alphabet`.
///
/// Every leading zero byte in `input` becomes one `alphabet(0)` symbol.
pub fn encode_with<F>(input: &[u8], alphabet: F) -> Vec<u8>
where
    F: Fn(u8) -> u8,
{
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let significant = &input[zeros..];

    // log(256) / log(58) ~= 1.38, +1 for rounding.
    let mut digits = vec![0u8; significant.len() * 138 / 100 + 1];
    let mut active = 0usize;
    for &byte in significant {
        let mut carry = u32::from(byte);
        let mut touched = 0usize;
        for digit in digits.iter_mut().rev() {
            if carry == 0 && touched >= active {
                break;
            }
            carry += 256 * u32::from(*digit);
            #[allow(clippy::cast_possible_truncation)]
            let rem = (carry % 58) as u8;
            *digit = rem;
            carry /= 58;
            touched += 1;
        }
        debug_assert_eq!(carry, 0, "base58 digit buffer overflow");
        active = touched;
    }

    let skip = digits.iter().take_while(|&&d| d == 0).count();
    let mut output = Vec::with_capacity(zeros + digits.len() - skip);
    output.extend(std::iter::repeat_n(alphabet(0), zeros));
    output.extend(digits[skip..].iter().map(|&d| alphabet(d)));
    trace!(input_len = input.len(), output_len = output.len(), "base58 encoded");
    output
}
