use alloc::vec::Vec;

use super::{
    Decoded, MAX_SCALAR, is_surrogate, transcode, utf8::encode_utf8, utf16::encode_utf16,
};
use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
    options::ConversionMode,
};

pub(super) fn decode_utf32(src: &[u32]) -> Decoded {
    let unit = src[0];
    if is_surrogate(unit) {
        Decoded::illegal(ErrorKind::UnpairedSurrogate(unit), 1, 0)
    } else if unit > MAX_SCALAR {
        Decoded::illegal(ErrorKind::OutOfRange(unit), 1, 0)
    } else {
        Decoded::scalar(unit, 1)
    }
}

#[inline]
pub(super) fn encode_utf32(scalar: u32, out: &mut OutputBuffer<u32>) -> Result<()> {
    out.push(scalar)
}

/// Converts UTF-32 to UTF-8.
///
/// # Errors
///
/// Values above `U+10FFFF` are [`ErrorKind::OutOfRange`] and surrogate values
/// are [`ErrorKind::UnpairedSurrogate`] in strict mode; lenient mode replaces
/// them with `U+FFFD`.
pub fn utf32_to_utf8(src: &[u32], mode: ConversionMode) -> Result<Vec<u8>> {
    transcode(src, mode, src.len(), decode_utf32, encode_utf8)
}

/// Converts UTF-32 to UTF-16.
///
/// # Errors
///
/// Same policy as [`utf32_to_utf8`].
pub fn utf32_to_utf16(src: &[u32], mode: ConversionMode) -> Result<Vec<u16>> {
    transcode(src, mode, src.len(), decode_utf32, encode_utf16)
}
