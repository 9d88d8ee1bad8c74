//! Base64 with the standard alphabet and `=` padding.

use alloc::{string::String, vec::Vec};

use super::{INVALID, decode_table};
use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
};

/// Digits emitted by [`encode`].
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Pads the final group to four characters.
pub const PAD: u8 = b'=';

const DECODE: [u8; 256] = decode_table(ALPHABET);

/// Length of the encoding of `n` bytes: `ceil(n / 3) * 4`.
#[must_use]
pub fn encoded_len(n: usize) -> usize {
    n.div_ceil(3).saturating_mul(4)
}

/// Encodes `src`; a trailing one or two bytes are padded with `==` or `=`.
///
/// ```rust
/// use textcodec::base64;
///
/// assert_eq!(base64::encode(b"Man").unwrap(), "TWFu");
/// assert_eq!(base64::encode(b"Ma").unwrap(), "TWE=");
/// assert_eq!(base64::encode(b"M").unwrap(), "TQ==");
/// ```
///
/// # Errors
///
/// [`ErrorKind::AllocationFailed`] if the output cannot be allocated.
pub fn encode(src: &[u8]) -> Result<String> {
    let mut out = OutputBuffer::exact(encoded_len(src.len()))?;
    for chunk in src.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        let c2 = ALPHABET[usize::from(((b1 & 0x0F) << 2) | (b2 >> 6))];
        let c3 = ALPHABET[usize::from(b2 & 0x3F)];
        out.extend_from_slice(&[
            ALPHABET[usize::from(b0 >> 2)],
            ALPHABET[usize::from(((b0 & 0x03) << 4) | (b1 >> 4))],
            if chunk.len() > 1 { c2 } else { PAD },
            if chunk.len() > 2 { c3 } else { PAD },
        ])?;
    }
    Ok(out.finish_ascii())
}

/// Decodes padded Base64. Padding may only appear as the last one or two
/// characters and is read as zero bits.
///
/// # Errors
///
/// - [`ErrorKind::SizeMismatch`] if the length is not a multiple of 4.
/// - [`ErrorKind::InvalidByte`] for a character outside the alphabet.
/// - [`ErrorKind::InvalidPadding`] for `=` anywhere else.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    if src.len() % 4 != 0 {
        return Err(ErrorKind::SizeMismatch {
            len: src.len(),
            multiple: 4,
        }
        .at(src.len()));
    }

    let pad = src.iter().rev().take(2).take_while(|&&c| c == PAD).count();
    let data_len = src.len() - pad;
    let mut out = OutputBuffer::exact(src.len() / 4 * 3 - pad)?;

    for (group, chunk) in src.chunks_exact(4).enumerate() {
        let start = group * 4;
        let mut acc = 0u32;
        for (i, &c) in chunk.iter().enumerate() {
            let pos = start + i;
            let value = if pos < data_len { sextet(c, pos)? } else { 0 };
            acc = (acc << 6) | u32::from(value);
        }
        let produced = 3 - (start + 4).saturating_sub(data_len);
        out.extend_from_slice(&acc.to_be_bytes()[1..=produced])?;
    }
    Ok(out.finish())
}

fn sextet(c: u8, pos: usize) -> Result<u8> {
    match DECODE[usize::from(c)] {
        INVALID if c == PAD => Err(ErrorKind::InvalidPadding.at(pos)),
        INVALID => Err(ErrorKind::InvalidByte(c).at(pos)),
        value => Ok(value),
    }
}
