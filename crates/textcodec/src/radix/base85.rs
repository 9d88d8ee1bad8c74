//! Base85 in the ASCII85 (btoa) profile.
//!
//! Four bytes become five characters in `!`..=`u` (33..=117), most
//! significant digit first. A group of four zero bytes is written as the
//! single letter `z`. A trailing group of `n < 4` bytes is zero-padded,
//! encoded, and cut to `n + 1` characters; decoding pads it back with `u`.
//! No `<~ ~>` delimiters are written or expected.

use alloc::{string::String, vec::Vec};

use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
};

const FIRST: u8 = b'!';
const LAST: u8 = b'u';
const ZERO_GROUP: u8 = b'z';
const RADIX: u32 = 85;

/// Upper bound on the encoding of `n` bytes (reached when no group is all
/// zeros).
#[must_use]
pub fn max_encoded_len(n: usize) -> usize {
    n.div_ceil(4).saturating_mul(5)
}

/// Encodes `src` as ASCII85.
///
/// ```rust
/// use textcodec::base85;
///
/// assert_eq!(base85::encode(b"Man ").unwrap(), "9jqo^");
/// assert_eq!(base85::encode(&[0, 0, 0, 0]).unwrap(), "z");
/// ```
///
/// # Errors
///
/// [`ErrorKind::AllocationFailed`] if the output cannot be allocated.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(src: &[u8]) -> Result<String> {
    let mut out = OutputBuffer::exact(max_encoded_len(src.len()))?;
    for chunk in src.chunks(4) {
        if chunk == [0; 4] {
            out.push(ZERO_GROUP)?;
            continue;
        }
        let mut group = [0u8; 4];
        group[..chunk.len()].copy_from_slice(chunk);
        let mut value = u32::from_be_bytes(group);

        let mut chars = [0u8; 5];
        for c in chars.iter_mut().rev() {
            *c = FIRST + (value % RADIX) as u8;
            value /= RADIX;
        }
        out.extend_from_slice(&chars[..=chunk.len()])?;
    }
    Ok(out.finish_ascii())
}

/// Decodes ASCII85.
///
/// # Errors
///
/// - [`ErrorKind::InvalidByte`] for a character outside `!`..=`u`, a `z`
///   inside a group, or a group whose value does not fit in 32 bits.
/// - [`ErrorKind::Truncated`] if the input ends with a single character
///   after the last full group.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    let mut out = OutputBuffer::growable(src.len() / 5 * 4 + 4)?;
    let mut digits = [0u8; 5];
    let mut filled = 0;
    for (pos, &c) in src.iter().enumerate() {
        if c == ZERO_GROUP && filled == 0 {
            out.extend_from_slice(&[0; 4])?;
            continue;
        }
        if !(FIRST..=LAST).contains(&c) {
            return Err(ErrorKind::InvalidByte(c).at(pos));
        }
        digits[filled] = c - FIRST;
        filled += 1;
        if filled == digits.len() {
            let value = group_value(&digits).ok_or_else(|| ErrorKind::InvalidByte(c).at(pos))?;
            out.extend_from_slice(&value.to_be_bytes())?;
            filled = 0;
        }
    }

    match filled {
        0 => {}
        1 => return Err(ErrorKind::Truncated.at(src.len())),
        _ => {
            digits[filled..].fill(LAST - FIRST);
            let value = group_value(&digits)
                .ok_or_else(|| ErrorKind::InvalidByte(src[src.len() - 1]).at(src.len() - 1))?;
            out.extend_from_slice(&value.to_be_bytes()[..filled - 1])?;
        }
    }
    Ok(out.finish())
}

fn group_value(digits: &[u8; 5]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &d| {
        acc.checked_mul(RADIX)?.checked_add(u32::from(d))
    })
}
