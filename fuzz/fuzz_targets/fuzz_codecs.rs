#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcodec::{
    ConversionMode, Encoding, HexDumpOptions, format_hex_dump, is_valid_utf8, utf8_to_utf16,
    utf16_to_utf8, utf32_to_utf8,
};

#[derive(Debug, Arbitrary)]
enum Input<'a> {
    /// Raw bytes fed to every decoder, which must reject or accept without
    /// panicking.
    Decode(&'a [u8]),
    /// Bytes that every encoder must round-trip.
    RoundTrip(&'a [u8]),
    /// Arbitrary UTF-16 units.
    Utf16(Vec<u16>),
    /// Arbitrary UTF-32 units.
    Utf32(Vec<u32>),
    HexDump(&'a [u8], bool, usize),
}

fuzz_target!(|input: Input<'_>| {
    match input {
        Input::Decode(data) => {
            for encoding in Encoding::ALL {
                if let Ok(decoded) = encoding.decode(data) {
                    // Whatever decodes must encode again.
                    encoding.encode(&decoded).unwrap();
                }
            }
            let strict = utf8_to_utf16(data, ConversionMode::Strict);
            assert_eq!(strict.is_ok(), is_valid_utf8(data));
            assert_eq!(strict.is_ok(), std::str::from_utf8(data).is_ok());
            let lenient = utf8_to_utf16(data, ConversionMode::Lenient).unwrap();
            let expected: Vec<u16> = String::from_utf8_lossy(data).encode_utf16().collect();
            assert_eq!(lenient, expected);
        }
        Input::RoundTrip(data) => {
            for encoding in Encoding::ALL {
                let text = encoding.encode(data).unwrap();
                assert_eq!(encoding.decode(text.as_bytes()).unwrap(), data, "{encoding}");
            }
        }
        Input::Utf16(units) => {
            let lenient = utf16_to_utf8(&units, ConversionMode::Lenient).unwrap();
            assert!(is_valid_utf8(&lenient));
            if let Ok(strict) = utf16_to_utf8(&units, ConversionMode::Strict) {
                assert_eq!(strict, lenient);
            }
        }
        Input::Utf32(units) => {
            let lenient = utf32_to_utf8(&units, ConversionMode::Lenient).unwrap();
            assert!(is_valid_utf8(&lenient));
            let valid = units.iter().all(|&u| char::from_u32(u).is_some());
            assert_eq!(utf32_to_utf8(&units, ConversionMode::Strict).is_ok(), valid);
        }
        Input::HexDump(data, uppercase, start_offset) => {
            let out = format_hex_dump(data, HexDumpOptions { uppercase, start_offset });
            assert_eq!(out.lines().count(), data.len().div_ceil(16));
        }
    }
});
