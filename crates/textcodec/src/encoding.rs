use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    error::Result,
    radix::{base16, base32, base58, base64, base85, base91},
    url,
};

/// A byte-to-text codec chosen at runtime.
///
/// ```rust
/// use textcodec::Encoding;
///
/// let encoding: Encoding = "Base64".parse().unwrap();
/// let text = encoding.encode(b"Man").unwrap();
/// assert_eq!(text, "TWFu");
/// assert_eq!(encoding.decode(text.as_bytes()).unwrap(), b"Man");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// [`base16`]
    Base16,
    /// [`base32`]
    Base32,
    /// [`base58`]
    Base58,
    /// [`base64`]
    Base64,
    /// [`base85`]
    Base85,
    /// [`base91`]
    Base91,
    /// [`url`]
    Url,
}

impl Encoding {
    /// Every encoding, in declaration order.
    pub const ALL: [Encoding; 7] = [
        Self::Base16,
        Self::Base32,
        Self::Base58,
        Self::Base64,
        Self::Base85,
        Self::Base91,
        Self::Url,
    ];

    /// Canonical lowercase name, as accepted by [`str::parse`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base16 => "base16",
            Self::Base32 => "base32",
            Self::Base58 => "base58",
            Self::Base64 => "base64",
            Self::Base85 => "base85",
            Self::Base91 => "base91",
            Self::Url => "url",
        }
    }

    /// Encodes `src` with this codec.
    ///
    /// # Errors
    ///
    /// See the codec module's `encode`.
    pub fn encode(self, src: &[u8]) -> Result<String> {
        match self {
            Self::Base16 => base16::encode(src),
            Self::Base32 => base32::encode(src),
            Self::Base58 => base58::encode(src),
            Self::Base64 => base64::encode(src),
            Self::Base85 => base85::encode(src),
            Self::Base91 => base91::encode(src),
            Self::Url => url::encode(src),
        }
    }

    /// Decodes `src` with this codec.
    ///
    /// # Errors
    ///
    /// See the codec module's `decode`.
    pub fn decode(self, src: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Base16 => base16::decode(src),
            Self::Base32 => base32::decode(src),
            Self::Base58 => base58::decode(src),
            Self::Base64 => base64::decode(src),
            Self::Base85 => base85::decode(src),
            Self::Base91 => base91::decode(src),
            Self::Url => url::decode(src),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Encoding::from_str`] for a name no codec answers to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown encoding {0:?}")]
pub struct UnknownEncoding(pub String);

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    /// Matches canonical names and a few aliases (`hex`, `ascii85`,
    /// `percent`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALIASES: [(&str, Encoding); 3] = [
            ("hex", Encoding::Base16),
            ("ascii85", Encoding::Base85),
            ("percent", Encoding::Url),
        ];
        Self::ALL
            .iter()
            .map(|&encoding| (encoding.name(), encoding))
            .chain(ALIASES)
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, encoding)| encoding)
            .ok_or_else(|| UnknownEncoding(s.into()))
    }
}
