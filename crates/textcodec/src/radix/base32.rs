//! Base32 with the RFC 4648 alphabet and `=` padding.

use alloc::{string::String, vec::Vec};

use super::{INVALID, decode_table};
use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
};

/// Digits emitted by [`encode`].
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Pads the final group to eight characters.
pub const PAD: u8 = b'=';

const DECODE: [u8; 256] = decode_table(ALPHABET);

const GROUP_CHARS: usize = 8;

/// Length of the encoding of `n` bytes: `ceil(n / 5) * 8`.
#[must_use]
pub fn encoded_len(n: usize) -> usize {
    n.div_ceil(5).saturating_mul(GROUP_CHARS)
}

/// Encodes `src`, padding the output to a multiple of eight characters.
///
/// ```rust
/// assert_eq!(textcodec::base32::encode(b"foobar").unwrap(), "MZXW6YTBOI======");
/// ```
///
/// # Errors
///
/// [`ErrorKind::AllocationFailed`] if the output cannot be allocated.
pub fn encode(src: &[u8]) -> Result<String> {
    let mut out = OutputBuffer::exact(encoded_len(src.len()))?;
    let mut acc = 0u32;
    let mut bits = 0u32;
    for &byte in src {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((acc >> bits) & 0x1F) as usize])?;
        }
        acc &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(ALPHABET[((acc << (5 - bits)) & 0x1F) as usize])?;
    }
    while out.len() % GROUP_CHARS != 0 {
        out.push(PAD)?;
    }
    Ok(out.finish_ascii())
}

/// Decodes padded Base32.
///
/// Decoding stops at the first `=`; only `=` may follow it, and the final
/// group must hold a number of data characters some encoding produces
/// (2, 4, 5, 7 or 8).
///
/// # Errors
///
/// - [`ErrorKind::SizeMismatch`] if the length is not a multiple of 8.
/// - [`ErrorKind::InvalidByte`] for a character outside the alphabet.
/// - [`ErrorKind::InvalidPadding`] for misplaced or impossible padding.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    if src.len() % GROUP_CHARS != 0 {
        return Err(ErrorKind::SizeMismatch {
            len: src.len(),
            multiple: GROUP_CHARS,
        }
        .at(src.len()));
    }

    let data_len = src.iter().position(|&c| c == PAD).unwrap_or(src.len());
    if let Some(stray) = src[data_len..].iter().position(|&c| c != PAD) {
        return Err(ErrorKind::InvalidPadding.at(data_len + stray));
    }
    let pad_len = src.len() - data_len;
    if pad_len >= GROUP_CHARS || !matches!(data_len % GROUP_CHARS, 0 | 2 | 4 | 5 | 7) {
        return Err(ErrorKind::InvalidPadding.at(data_len));
    }

    let mut out = OutputBuffer::exact(data_len * 5 / 8)?;
    let mut acc = 0u32;
    let mut bits = 0u32;
    for (pos, &c) in src[..data_len].iter().enumerate() {
        let value = DECODE[usize::from(c)];
        if value == INVALID {
            return Err(ErrorKind::InvalidByte(c).at(pos));
        }
        acc = (acc << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            #[allow(clippy::cast_possible_truncation)]
            out.push((acc >> bits) as u8)?;
            acc &= (1 << bits) - 1;
        }
    }
    Ok(out.finish())
}
