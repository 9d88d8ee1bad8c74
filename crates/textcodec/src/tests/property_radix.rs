use alloc::vec::Vec;

use super::runner;
use crate::{Encoding, base16, base32, base58, base64, base85, base91, url};

/// Property: every codec decodes its own output back to the input, and
/// encoding the same input twice gives the same text.
#[test]
fn every_encoding_round_trips() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(data: Vec<u8>) -> bool {
        Encoding::ALL.iter().all(|&encoding| {
            let text = encoding.encode(&data).unwrap();
            text == encoding.encode(&data).unwrap()
                && encoding.decode(text.as_bytes()).unwrap() == data
        })
    }

    runner().quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: encoders only ever emit characters from their alphabet (plus
/// padding or the Base85 zero-group letter).
#[test]
fn encoders_stay_within_their_alphabet() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(data: Vec<u8>) -> bool {
        let within = |text: &str, alphabet: &[u8], extra: &[u8]| {
            text.bytes()
                .all(|c| alphabet.contains(&c) || extra.contains(&c))
        };
        within(&base16::encode(&data).unwrap(), base16::ALPHABET, b"")
            && within(&base32::encode(&data).unwrap(), base32::ALPHABET, b"=")
            && within(&base58::encode(&data).unwrap(), base58::ALPHABET, b"")
            && within(&base64::encode(&data).unwrap(), base64::ALPHABET, b"=")
            && base85::encode(&data)
                .unwrap()
                .bytes()
                .all(|c| (b'!'..=b'u').contains(&c) || c == b'z')
            && within(&base91::encode(&data).unwrap(), base91::ALPHABET, b"")
            && url::encode(&data).unwrap().bytes().all(|c| {
                c.is_ascii_alphanumeric() || b"-._~%".contains(&c)
            })
    }

    runner().quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: padded encodings have the documented length, with padding only
/// at the end.
#[test]
fn padding_matches_input_length() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(data: Vec<u8>) -> bool {
        let n = data.len();
        let b64 = base64::encode(&data).unwrap();
        let b64_pad = b64.bytes().rev().take_while(|&c| c == b'=').count();
        let b32 = base32::encode(&data).unwrap();
        let b32_pad = b32.bytes().rev().take_while(|&c| c == b'=').count();

        b64.len() == n.div_ceil(3) * 4
            && b64_pad == [0, 2, 1][n % 3]
            && !b64.trim_end_matches('=').contains('=')
            && b32.len() == n.div_ceil(5) * 8
            && b32_pad == [0, 6, 4, 3, 1][n % 5]
            && !b32.trim_end_matches('=').contains('=')
            && base16::encode(&data).unwrap().len() == 2 * n
    }

    runner().quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: Base58 writes one `1` per leading zero byte and restores them.
#[test]
fn base58_preserves_leading_zeros() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(zeros: u8, rest: Vec<u8>) -> bool {
        let zeros = usize::from(zeros % 16);
        let mut data = alloc::vec![0u8; zeros];
        data.extend(rest.iter().skip_while(|&&b| b == 0));

        let text = base58::encode(&data).unwrap();
        text.bytes().take_while(|&c| c == b'1').count() == zeros
            && base58::decode(text.as_bytes()).unwrap() == data
    }

    runner().quickcheck(prop as fn(u8, Vec<u8>) -> bool);
}

/// Property: Base16 decoding ignores digit case.
#[test]
fn base16_decoding_is_case_insensitive() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(data: Vec<u8>) -> bool {
        let upper = base16::encode(&data).unwrap();
        base16::decode(upper.to_ascii_lowercase().as_bytes()).unwrap() == data
    }

    runner().quickcheck(prop as fn(Vec<u8>) -> bool);
}
