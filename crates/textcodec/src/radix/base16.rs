//! Base16 (hexadecimal): two uppercase digits per byte.

use alloc::{string::String, vec::Vec};

use super::{INVALID, decode_table};
use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
};

/// Digits emitted by [`encode`].
pub const ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

const DECODE: [u8; 256] = {
    let mut table = decode_table(ALPHABET);
    let mut digit = 10;
    while digit < 16 {
        table[(b'a' + digit - 10) as usize] = digit;
        digit += 1;
    }
    table
};

/// Length of the encoding of `n` bytes.
#[must_use]
pub fn encoded_len(n: usize) -> usize {
    n.saturating_mul(2)
}

/// Encodes `src` as uppercase hexadecimal.
///
/// ```rust
/// assert_eq!(textcodec::base16::encode(&[0x00, 0xFF]).unwrap(), "00FF");
/// ```
///
/// # Errors
///
/// [`ErrorKind::AllocationFailed`] if the output cannot be allocated.
pub fn encode(src: &[u8]) -> Result<String> {
    let mut out = OutputBuffer::exact(encoded_len(src.len()))?;
    for &byte in src {
        out.extend_from_slice(&[
            ALPHABET[usize::from(byte >> 4)],
            ALPHABET[usize::from(byte & 0x0F)],
        ])?;
    }
    Ok(out.finish_ascii())
}

/// Decodes hexadecimal digits of either case.
///
/// # Errors
///
/// - [`ErrorKind::SizeMismatch`] for an odd number of digits.
/// - [`ErrorKind::InvalidByte`] for anything that is not a hex digit.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    if src.len() % 2 != 0 {
        return Err(ErrorKind::SizeMismatch {
            len: src.len(),
            multiple: 2,
        }
        .at(src.len()));
    }
    let mut out = OutputBuffer::exact(src.len() / 2)?;
    for (pos, pair) in src.chunks_exact(2).enumerate() {
        let hi = digit(pair[0], 2 * pos)?;
        let lo = digit(pair[1], 2 * pos + 1)?;
        out.push((hi << 4) | lo)?;
    }
    Ok(out.finish())
}

/// Value of a hex digit of either case.
pub(crate) fn digit_value(byte: u8) -> Option<u8> {
    match DECODE[usize::from(byte)] {
        INVALID => None,
        value => Some(value),
    }
}

fn digit(byte: u8, pos: usize) -> Result<u8> {
    digit_value(byte).ok_or_else(|| ErrorKind::InvalidByte(byte).at(pos))
}
