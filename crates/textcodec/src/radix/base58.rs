//! Base58 with the Bitcoin alphabet.
//!
//! The input is read as one big-endian number and written in base 58. Leading
//! zero bytes carry no numeric value, so each one is written as a leading `1`
//! (the zero digit) and restored on decode.

use alloc::{string::String, vec::Vec};

use super::{INVALID, decode_table};
use crate::{
    buffer::OutputBuffer,
    error::{ErrorKind, Result},
};

/// Digits emitted by [`encode`]; `0`, `O`, `I` and `l` are left out.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const DECODE: [u8; 256] = decode_table(ALPHABET);

const ZERO_DIGIT: u8 = ALPHABET[0];

/// Multiplies the big-endian number in `digits[len - used..]` by `radix` and
/// adds `carry`, writing digits of base `modulus` right to left. Returns the
/// number of digits now in use.
#[allow(clippy::cast_possible_truncation)]
fn mul_add(digits: &mut [u8], used: usize, radix: u32, modulus: u32, mut carry: u32) -> usize {
    let mut written = 0;
    for digit in digits.iter_mut().rev() {
        if carry == 0 && written >= used {
            break;
        }
        carry += radix * u32::from(*digit);
        *digit = (carry % modulus) as u8;
        carry /= modulus;
        written += 1;
    }
    debug_assert_eq!(carry, 0, "work buffer sized too small");
    written
}

/// Encodes `src` as Base58.
///
/// ```rust
/// assert_eq!(textcodec::base58::encode(&[0x00, 0x00, 0x01]).unwrap(), "112");
/// ```
///
/// # Errors
///
/// [`ErrorKind::AllocationFailed`] if the output cannot be allocated.
pub fn encode(src: &[u8]) -> Result<String> {
    let zeros = src.iter().take_while(|&&b| b == 0).count();
    let payload = &src[zeros..];

    // log(256) / log(58) < 1.38
    let size = payload.len().saturating_mul(138) / 100 + 1;
    let mut work = OutputBuffer::zeroed(size)?;
    let digits = work.as_mut_slice();
    let mut used = 0;
    for &byte in payload {
        used = mul_add(digits, used, 256, 58, u32::from(byte));
    }

    let significant = &digits[size - used..];
    let significant = &significant[significant.iter().take_while(|&&d| d == 0).count()..];

    let mut out = OutputBuffer::exact(zeros + significant.len())?;
    for _ in 0..zeros {
        out.push(ZERO_DIGIT)?;
    }
    for &digit in significant {
        out.push(ALPHABET[usize::from(digit)])?;
    }
    Ok(out.finish_ascii())
}

/// Decodes Base58, restoring one zero byte per leading `1`.
///
/// # Errors
///
/// [`ErrorKind::InvalidByte`] for a character outside the alphabet.
pub fn decode(src: &[u8]) -> Result<Vec<u8>> {
    let zeros = src.iter().take_while(|&&c| c == ZERO_DIGIT).count();
    let payload = &src[zeros..];

    // log(58) / log(256) < 0.733
    let size = payload.len().saturating_mul(733) / 1000 + 1;
    let mut work = OutputBuffer::zeroed(size)?;
    let bytes = work.as_mut_slice();
    let mut used = 0;
    for (i, &c) in payload.iter().enumerate() {
        let digit = DECODE[usize::from(c)];
        if digit == INVALID {
            return Err(ErrorKind::InvalidByte(c).at(zeros + i));
        }
        used = mul_add(bytes, used, 58, 256, u32::from(digit));
    }

    let significant = &bytes[size - used..];
    let significant = &significant[significant.iter().take_while(|&&b| b == 0).count()..];

    let mut out = OutputBuffer::exact(zeros + significant.len())?;
    for _ in 0..zeros {
        out.push(0)?;
    }
    out.extend_from_slice(significant)?;
    Ok(out.finish())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b"", "")]
    #[case(&[0x00], "1")]
    #[case(&[0x00, 0x00, 0x01], "112")]
    #[case(&[0x3A], "21")]
    #[case(b"Hello World!", "2NEpo7TZRRrLZSi2U")]
    #[case(
        b"The quick brown fox jumps over the lazy dog.",
        "USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z"
    )]
    #[case(&[0x00, 0x00, 0x28, 0x7F, 0xB4, 0xCD], "11233QC4")]
    fn vectors(#[case] raw: &[u8], #[case] encoded: &str) {
        assert_eq!(encode(raw).unwrap(), encoded);
        assert_eq!(decode(encoded.as_bytes()).unwrap(), raw);
    }

    #[test]
    fn rejects_excluded_characters() {
        for (input, bad, offset) in [
            (&b"10"[..], b'0', 1),
            (&b"1O"[..], b'O', 1),
            (&b"I"[..], b'I', 0),
            (&b"abl"[..], b'l', 2),
        ] {
            let err = decode(input).unwrap_err();
            assert_eq!((err.kind(), err.offset()), (ErrorKind::InvalidByte(bad), offset));
        }
    }

    #[test]
    fn all_zero_input() {
        assert_eq!(encode(&[0; 4]).unwrap(), "1111");
        assert_eq!(decode(b"1111").unwrap(), [0; 4]);
    }
}
