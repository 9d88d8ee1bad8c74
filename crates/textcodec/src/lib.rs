//! Text encoding toolkit: UTF-8/16/32 transcoding with strict or lenient
//! handling of ill-formed input, byte-to-text codecs (Base16, Base32,
//! Base58, Base64, Base85, Base91), URL percent-encoding and hex dumps.
//!
//! Every codec borrows its input and returns a freshly allocated output, or a
//! [`CodecError`] naming what went wrong and where. Nothing is written on
//! failure.
//!
//! ```rust
//! use textcodec::{ConversionMode, base64, utf8_to_utf16, utf16_to_utf8};
//!
//! let units = utf8_to_utf16("h€llo 😀".as_bytes(), ConversionMode::Strict).unwrap();
//! let bytes = utf16_to_utf8(&units, ConversionMode::Strict).unwrap();
//! assert_eq!(bytes, "h€llo 😀".as_bytes());
//!
//! let text = base64::encode(&bytes).unwrap();
//! assert_eq!(base64::decode(text.as_bytes()).unwrap(), bytes);
//! ```
//!
//! # Features
//!
//! - `std` (default): [`hex_dump`] to standard output and
//!   [`write_hex_dump`] for any `std::io::Write`.
//! - `serde`: `Serialize`/`Deserialize` for [`ConversionMode`],
//!   [`HexDumpOptions`] and [`Encoding`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod encoding;
mod error;
mod hexdump;
mod options;
mod radix;
mod utf;

pub mod url;

#[cfg(test)]
mod tests;

pub use encoding::{Encoding, UnknownEncoding};
pub use error::{CodecError, ErrorKind, Result};
#[cfg(feature = "std")]
pub use hexdump::{hex_dump, write_hex_dump};
pub use hexdump::{BYTES_PER_ROW, format_hex_dump, write_hex_dump_fmt};
pub use options::{ConversionMode, HexDumpOptions};
pub use radix::{base16, base32, base58, base64, base85, base91};
pub use utf::{
    MAX_SCALAR, REPLACEMENT_CHARACTER, is_valid_utf8, utf8_to_utf16, utf8_to_utf32,
    utf16_to_utf8, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16, validate_utf8,
};
