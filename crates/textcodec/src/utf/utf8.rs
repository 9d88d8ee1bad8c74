use alloc::vec::Vec;

use super::{Decoded, transcode, utf16::encode_utf16, utf32::encode_utf32};
use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
    options::ConversionMode,
};

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Legal range of the byte following `lead`. Narrower than `80..=BF` for the
/// leads that could otherwise start an overlong form, a surrogate, or a
/// scalar past `U+10FFFF`.
fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

/// Why `second` is not acceptable after `lead`.
fn second_byte_fault(lead: u8, second: u8) -> ErrorKind {
    if !is_continuation(second) {
        return ErrorKind::InvalidByte(second);
    }
    match lead {
        0xED => ErrorKind::EncodedSurrogate,
        0xF4 => ErrorKind::OutOfRange(
            ((u32::from(lead) & 0x07) << 18) | ((u32::from(second) & 0x3F) << 12),
        ),
        _ => ErrorKind::Overlong,
    }
}

/// Decodes the UTF-8 sequence at the front of `src`, which must not be empty.
pub(super) fn decode_utf8(src: &[u8]) -> Decoded {
    let lead = src[0];
    let len = match lead {
        0x00..=0x7F => return Decoded::scalar(u32::from(lead), 1),
        0xC0 | 0xC1 => return Decoded::illegal(ErrorKind::Overlong, 1, 0),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        // Stray continuation bytes and F5..FF.
        _ => return Decoded::illegal(ErrorKind::InvalidByte(lead), 1, 0),
    };

    let (lo, hi) = second_byte_range(lead);
    let mut scalar = u32::from(lead) & (0x7F >> len);
    for i in 1..len {
        let Some(&byte) = src.get(i) else {
            return Decoded::illegal(ErrorKind::Truncated, i, i);
        };
        if i == 1 && !(lo..=hi).contains(&byte) {
            return Decoded::illegal(second_byte_fault(lead, byte), i, i);
        }
        if !is_continuation(byte) {
            return Decoded::illegal(ErrorKind::InvalidByte(byte), i, i);
        }
        scalar = (scalar << 6) | (u32::from(byte) & 0x3F);
    }
    Decoded::scalar(scalar, len)
}

/// Checks that `src` is well-formed UTF-8, reporting the first violation.
///
/// Overlong forms (`C0 80`, `E0 80 80`, `F0 80 80 80`), encoded surrogates
/// (`ED A0 80`), scalars above `U+10FFFF`, stray continuation bytes and
/// sequences cut short by the end of input are all rejected.
///
/// # Errors
///
/// Returns the kind of the first violation and the offset of the byte at which
/// it was detected.
///
/// ```rust
/// use textcodec::{ErrorKind, validate_utf8};
///
/// let err = validate_utf8(b"ok\xE0\x80\x80").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Overlong);
/// assert_eq!(err.offset(), 3);
/// ```
pub fn validate_utf8(src: &[u8]) -> Result<()> {
    let mut pos = 0;
    while pos < src.len() {
        // ASCII runs are the common case; skip them without decoding.
        if src[pos].is_ascii() {
            pos += 1;
            continue;
        }
        match decode_utf8(&src[pos..]) {
            Decoded::Scalar { len, .. } => pos += len,
            Decoded::Illegal { kind, fault, .. } => return Err(kind.at(pos + fault)),
        }
    }
    Ok(())
}

/// Whether `src` is well-formed UTF-8. See [`validate_utf8`] for the rules.
#[must_use]
pub fn is_valid_utf8(src: &[u8]) -> bool {
    validate_utf8(src).is_ok()
}

/// Converts UTF-8 to UTF-16, emitting surrogate pairs above `U+FFFF`.
///
/// # Errors
///
/// In strict mode, any ill-formed sequence is an error. In lenient mode, each
/// maximal ill-formed subpart becomes one `U+FFFD`. Allocation failure is an
/// error in both modes.
pub fn utf8_to_utf16(src: &[u8], mode: ConversionMode) -> Result<Vec<u16>> {
    transcode(src, mode, src.len(), decode_utf8, encode_utf16)
}

/// Converts UTF-8 to UTF-32.
///
/// # Errors
///
/// Same policy as [`utf8_to_utf16`].
pub fn utf8_to_utf32(src: &[u8], mode: ConversionMode) -> Result<Vec<u32>> {
    transcode(src, mode, src.len(), decode_utf8, encode_utf32)
}

/// Appends the canonical UTF-8 encoding of `scalar`.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn encode_utf8(scalar: u32, out: &mut OutputBuffer<u8>) -> Result<()> {
    let cont = |shift: u32| 0x80 | ((scalar >> shift) & 0x3F) as u8;
    match scalar {
        0..=0x7F => out.push(scalar as u8),
        0x80..=0x7FF => out.extend_from_slice(&[0xC0 | (scalar >> 6) as u8, cont(0)]),
        0x800..=0xFFFF => {
            out.extend_from_slice(&[0xE0 | (scalar >> 12) as u8, cont(6), cont(0)])
        }
        _ => out.extend_from_slice(&[
            0xF0 | (scalar >> 18) as u8,
            cont(12),
            cont(6),
            cont(0),
        ]),
    }
}
