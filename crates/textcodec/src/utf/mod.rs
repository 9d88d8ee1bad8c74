//! Transcoding among UTF-8, UTF-16 and UTF-32.
//!
//! Every conversion runs the same loop: decode one scalar from the source
//! width, then encode it into the target width. The per-width decoders report
//! either a scalar and the number of units it occupied, or an ill-formed
//! sequence together with the number of units a lenient conversion should
//! skip (the *maximal ill-formed subpart*, never less than one unit).
//!
//! In [`ConversionMode::Strict`] the first ill-formed sequence aborts the
//! conversion. In [`ConversionMode::Lenient`] each one becomes a single
//! `U+FFFD`, which matches what `String::from_utf8_lossy` and
//! `char::decode_utf16` produce for the same input.

mod utf16;
mod utf32;
mod utf8;

pub use utf8::{is_valid_utf8, utf8_to_utf16, utf8_to_utf32, validate_utf8};
pub use utf16::{utf16_to_utf8, utf16_to_utf32};
pub use utf32::{utf32_to_utf8, utf32_to_utf16};

use alloc::vec::Vec;

use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
    options::ConversionMode,
};

/// `U+FFFD`, substituted for ill-formed input in lenient mode.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// The largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

const HIGH_SURROGATE_START: u32 = 0xD800;
const LOW_SURROGATE_START: u32 = 0xDC00;
const SURROGATE_END: u32 = 0xDFFF;
const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// Result of decoding one scalar from the front of a source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decoded {
    Scalar {
        value: u32,
        len: usize,
    },
    Illegal {
        kind: ErrorKind,
        /// Units to skip before resuming in lenient mode.
        len: usize,
        /// Offset of the offending unit, relative to the sequence start.
        fault: usize,
    },
}

impl Decoded {
    #[inline]
    fn scalar(value: u32, len: usize) -> Self {
        Self::Scalar { value, len }
    }

    #[inline]
    fn illegal(kind: ErrorKind, len: usize, fault: usize) -> Self {
        Self::Illegal { kind, len, fault }
    }
}

fn is_surrogate(scalar: u32) -> bool {
    (HIGH_SURROGATE_START..=SURROGATE_END).contains(&scalar)
}

fn transcode<S, T, D, E>(
    src: &[S],
    mode: ConversionMode,
    estimate: usize,
    decode: D,
    mut encode: E,
) -> Result<Vec<T>>
where
    T: Copy,
    D: Fn(&[S]) -> Decoded,
    E: FnMut(u32, &mut OutputBuffer<T>) -> Result<()>,
{
    let mut out = OutputBuffer::growable(estimate)?;
    let mut pos = 0;
    while pos < src.len() {
        match decode(&src[pos..]) {
            Decoded::Scalar { value, len } => {
                encode(value, &mut out)?;
                pos += len;
            }
            Decoded::Illegal { kind, len, fault } => {
                if !mode.is_lenient() {
                    return Err(kind.at(pos + fault));
                }
                log::trace!("substituting U+FFFD for {kind} at offset {pos}");
                encode(REPLACEMENT_CHARACTER, &mut out)?;
                pos += len;
            }
        }
    }
    Ok(out.finish())
}
