//! basE91.
//!
//! Bits are taken least significant first. Each pair of characters carries
//! 13 bits, or 14 when the low 13 bits alone would be a value no greater
//! than 88, which keeps the output within about 123% of the input.

use alloc::{string::String, vec::Vec};

use super::{INVALID, decode_table};
use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
};

/// Digits emitted by [`encode`]. Leaves out `-`, `'` and `\`.
pub const ALPHABET: &[u8; 91] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"";

const DECODE: [u8; 256] = decode_table(ALPHABET);

const RADIX: u32 = 91;

/// Upper bound on the encoding of `n` bytes: two characters per 13 bits,
/// plus a trailing pair.
#[must_use]
pub fn max_encoded_len(n: usize) -> usize {
    n.saturating_mul(16).div_ceil(13).saturating_add(2)
}

fn digit(value: u32) -> u8 {
    ALPHABET[(value % RADIX) as usize]
}

/// Encodes `src` as basE91.
///
/// ```rust
/// assert_eq!(textcodec::base91::encode(b"Hello World!").unwrap(), ">OwJh>Io0Tv!8PE");
/// ```
///
/// # Errors
///
/// [`ErrorKind::AllocationFailed`] if the output cannot be allocated.
pub fn encode(src: &[u8]) -> Result<String> {
    let mut out = OutputBuffer::growable(max_encoded_len(src.len()))?;
    let mut acc = 0u32;
    let mut bits = 0u32;
    for &byte in src {
        acc |= u32::from(byte) << bits;
        bits += 8;
        if bits > 13 {
            let mut value = acc & 0x1FFF;
            if value > 88 {
                acc >>= 13;
                bits -= 13;
            } else {
                value = acc & 0x3FFF;
                acc >>= 14;
                bits -= 14;
            }
            out.extend_from_slice(&[digit(value), digit(value / RADIX)])?;
        }
    }
    if bits > 0 {
        out.push(digit(acc))?;
        if bits > 7 || acc > 90 {
            out.push(digit(acc / RADIX))?;
        }
    }
    Ok(out.finish_ascii())
}

/// Decodes basE91. A dangling final character contributes its low bits to
/// one last byte.
///
/// # Errors
///
/// [`ErrorKind::InvalidByte`] for a character outside the alphabet.
#[allow(clippy::cast_possible_truncation)]
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    let mut out = OutputBuffer::growable(src.len() * 14 / 16 + 1)?;
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut pending: Option<u32> = None;
    for (pos, &c) in src.iter().enumerate() {
        let d = DECODE[usize::from(c)];
        if d == INVALID {
            return Err(ErrorKind::InvalidByte(c).at(pos));
        }
        let Some(low) = pending.take() else {
            pending = Some(u32::from(d));
            continue;
        };
        let value = low + u32::from(d) * RADIX;
        acc |= value << bits;
        bits += if value & 0x1FFF > 88 { 13 } else { 14 };
        while bits > 7 {
            out.push(acc as u8)?;
            acc >>= 8;
            bits -= 8;
        }
    }
    if let Some(low) = pending {
        out.push((acc | (low << bits)) as u8)?;
    }
    Ok(out.finish())
}
