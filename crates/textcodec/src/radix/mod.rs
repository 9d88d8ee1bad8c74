//! Byte-to-text radix codecs.
//!
//! Every codec module exposes the same pair of entry points:
//!
//! - `encode(&[u8]) -> Result<String>`: the only failure is allocation.
//! - `decode(&[u8]) -> Result<Vec<u8>>`: takes the encoded text as bytes
//!   (pass `s.as_bytes()` for a `&str`) and rejects anything outside the
//!   codec's grammar.
//!
//! | Module | Alphabet | Padding |
//! |---|---|---|
//! | [`base16`] | `0-9A-F` (decode accepts `a-f`) | none |
//! | [`base32`] | `A-Z2-7` (RFC 4648) | `=` |
//! | [`base58`] | Bitcoin, no `0OIl` | none, leading zeros as `1` |
//! | [`base64`] | `A-Za-z0-9+/` | `=` |
//! | [`base85`] | `!`..`u`, `z` for four zero bytes | none |
//! | [`base91`] | basE91 | none |

pub mod base16;
pub mod base32;
pub mod base58;
pub mod base64;
pub mod base85;
pub mod base91;

/// Marks bytes outside an alphabet in a [`decode_table`].
pub(crate) const INVALID: u8 = 0xFF;

/// Builds the inverse of `alphabet`: byte value to digit, or [`INVALID`].
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn decode_table(alphabet: &[u8]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut digit = 0;
    while digit < alphabet.len() {
        table[alphabet[digit] as usize] = digit as u8;
        digit += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::{INVALID, decode_table};

    #[test]
    fn inverse_table_maps_every_digit_back() {
        const TABLE: [u8; 256] = decode_table(b"xyz");
        assert_eq!(TABLE[usize::from(b'x')], 0);
        assert_eq!(TABLE[usize::from(b'z')], 2);
        assert_eq!(TABLE[usize::from(b'a')], INVALID);
    }
}
