use alloc::vec::Vec;

use super::{
    Decoded, HIGH_SURROGATE_START, LOW_SURROGATE_START, SUPPLEMENTARY_START, SURROGATE_END,
    transcode, utf8::encode_utf8, utf32::encode_utf32,
};
use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
    options::ConversionMode,
};

/// Decodes one or two UTF-16 units from the front of `src`.
pub(super) fn decode_utf16(src: &[u16]) -> Decoded {
    let first = u32::from(src[0]);
    match first {
        HIGH_SURROGATE_START..LOW_SURROGATE_START => match src.get(1).copied().map(u32::from) {
            Some(second @ LOW_SURROGATE_START..=SURROGATE_END) => Decoded::scalar(
                SUPPLEMENTARY_START
                    + ((first - HIGH_SURROGATE_START) << 10)
                    + (second - LOW_SURROGATE_START),
                2,
            ),
            Some(_) => Decoded::illegal(ErrorKind::UnpairedSurrogate(first), 1, 0),
            None => Decoded::illegal(ErrorKind::Truncated, 1, 1),
        },
        LOW_SURROGATE_START..=SURROGATE_END => {
            Decoded::illegal(ErrorKind::UnpairedSurrogate(first), 1, 0)
        }
        _ => Decoded::scalar(first, 1),
    }
}

/// Appends `scalar` as one unit, or as a surrogate pair above `U+FFFF`.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn encode_utf16(scalar: u32, out: &mut OutputBuffer<u16>) -> Result<()> {
    if scalar < SUPPLEMENTARY_START {
        return out.push(scalar as u16);
    }
    let offset = scalar - SUPPLEMENTARY_START;
    out.extend_from_slice(&[
        (HIGH_SURROGATE_START | (offset >> 10)) as u16,
        (LOW_SURROGATE_START | (offset & 0x3FF)) as u16,
    ])
}

/// Converts UTF-16 to UTF-8.
///
/// # Errors
///
/// A high surrogate not followed by a low surrogate, or a lone low surrogate,
/// is [`ErrorKind::UnpairedSurrogate`] in strict mode; a high surrogate in
/// the last position is [`ErrorKind::Truncated`]. Lenient mode replaces each
/// such unit with `U+FFFD` and decodes the following unit on its own.
pub fn utf16_to_utf8(src: &[u16], mode: ConversionMode) -> Result<Vec<u8>> {
    transcode(src, mode, src.len(), decode_utf16, encode_utf8)
}

/// Converts UTF-16 to UTF-32.
///
/// # Errors
///
/// Same policy as [`utf16_to_utf8`].
pub fn utf16_to_utf32(src: &[u16], mode: ConversionMode) -> Result<Vec<u32>> {
    transcode(src, mode, src.len(), decode_utf16, encode_utf32)
}
