/// How a UTF transcoder treats ill-formed input.
///
/// # Examples
///
/// ```rust
/// use textcodec::{ConversionMode, utf16_to_utf8};
///
/// // A lone high surrogate.
/// let units = [0x0061, 0xD800, 0x0062];
/// assert!(utf16_to_utf8(&units, ConversionMode::Strict).is_err());
/// assert_eq!(
///     utf16_to_utf8(&units, ConversionMode::Lenient).unwrap(),
///     "a\u{FFFD}b".as_bytes()
/// );
/// ```
///
/// # Default
///
/// [`ConversionMode::Strict`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConversionMode {
    /// Reject malformed sequences and lone surrogates with an error.
    #[default]
    Strict,
    /// Substitute `U+FFFD` for each ill-formed sequence and continue.
    Lenient,
}

impl ConversionMode {
    /// Whether this is [`ConversionMode::Lenient`].
    #[must_use]
    pub fn is_lenient(self) -> bool {
        matches!(self, Self::Lenient)
    }
}

/// Layout options for the hex dump formatter.
///
/// The defaults reproduce the canonical layout: lowercase digits and offsets
/// counted from zero.
///
/// ```rust
/// use textcodec::{HexDumpOptions, format_hex_dump};
///
/// let out = format_hex_dump(b"hi", HexDumpOptions { start_offset: 0x40, ..Default::default() });
/// assert!(out.starts_with("00000040  68 69 "));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexDumpOptions {
    /// Render the offset column and octets with `A-F` instead of `a-f`.
    ///
    /// # Default
    ///
    /// `false`
    pub uppercase: bool,

    /// Value added to every printed offset, for dumping a window of a larger
    /// buffer.
    ///
    /// # Default
    ///
    /// `0`
    pub start_offset: usize,
}
