//! Percent-encoding for URL components.
//!
//! The encoder keeps the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`) and
//! escapes every other byte as `%XX` with uppercase digits. The decoder also
//! reads `+` as a space, as form data does.

use alloc::{string::String, vec::Vec};

use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
    radix::base16,
};

const ESCAPE: u8 = b'%';

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encodes `src`.
///
/// ```rust
/// assert_eq!(textcodec::url::encode(b"a b&c").unwrap(), "a%20b%26c");
/// ```
///
/// # Errors
///
/// [`ErrorKind::AllocationFailed`] if the output cannot be allocated.
pub fn encode(src: &[u8]) -> Result<String> {
    let mut out = OutputBuffer::growable(src.len())?;
    for &byte in src {
        if is_unreserved(byte) {
            out.push(byte)?;
        } else {
            out.extend_from_slice(&[
                ESCAPE,
                base16::ALPHABET[usize::from(byte >> 4)],
                base16::ALPHABET[usize::from(byte & 0x0F)],
            ])?;
        }
    }
    Ok(out.finish_ascii())
}

/// Decodes `%XY` escapes (either case) and `+`; every other byte is copied.
///
/// ```rust
/// assert_eq!(textcodec::url::decode(b"a+b%2fc").unwrap(), b"a b/c");
/// ```
///
/// # Errors
///
/// - [`ErrorKind::InvalidEscape`] if a byte after `%` is not a hex digit;
///   the offset points at the `%`. Digits are checked before the length, so
///   `%G` at the end of input is malformed rather than truncated.
/// - [`ErrorKind::Truncated`] if a `%` is followed by fewer than two valid
///   digits before the end of input.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    let mut out = OutputBuffer::exact(src.len())?;
    let mut pos = 0;
    while let Some(&byte) = src.get(pos) {
        match byte {
            ESCAPE => {
                let digit = |i: usize| match src.get(pos + i) {
                    Some(&d) => {
                        base16::digit_value(d).ok_or_else(|| ErrorKind::InvalidEscape.at(pos))
                    }
                    None => Err(ErrorKind::Truncated.at(src.len())),
                };
                let hi = digit(1)?;
                let lo = digit(2)?;
                out.push((hi << 4) | lo)?;
                pos += 3;
            }
            b'+' => {
                out.push(b' ')?;
                pos += 1;
            }
            _ => {
                out.push(byte)?;
                pos += 1;
            }
        }
    }
    Ok(out.finish())
}
