use thiserror::Error;

/// Error returned by every fallible codec in this crate.
///
/// A codec either returns its complete output or a `CodecError`; no partial
/// output is ever handed back.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct CodecError {
    pub(crate) kind: ErrorKind,
    pub(crate) offset: usize,
}

impl CodecError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        log::trace!("codec rejected input: {kind} at offset {offset}");
        Self { kind, offset }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Index, in input code units, of the unit where the failure was
    /// detected. For length checks this is the input length; for allocation
    /// failures it is the number of output units already written.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The category of a [`CodecError`].
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A byte that is not legal at this position: an illegal UTF-8 lead or
    /// continuation byte, or a character outside a radix alphabet.
    #[error("invalid byte 0x{0:02X}")]
    InvalidByte(u8),
    /// A `%` escape not followed by two hexadecimal digits.
    #[error("malformed percent escape")]
    InvalidEscape,
    /// Padding where none is allowed, or a padding length no encoder emits.
    #[error("invalid padding")]
    InvalidPadding,
    /// A surrogate code unit or scalar that does not form a valid pair.
    #[error("unpaired surrogate 0x{0:04X}")]
    UnpairedSurrogate(u32),
    /// A UTF-8 sequence encoding a surrogate (`ED A0..BF ..`).
    #[error("UTF-8 encoded surrogate")]
    EncodedSurrogate,
    /// The input length is not a multiple of the codec's block size.
    #[error("input length {len} is not a multiple of {multiple}")]
    SizeMismatch {
        /// Length of the rejected input.
        len: usize,
        /// Required block size.
        multiple: usize,
    },
    /// A UTF-8 sequence that uses more bytes than its scalar needs.
    #[error("overlong UTF-8 sequence")]
    Overlong,
    /// A scalar above `U+10FFFF`.
    #[error("code point 0x{0:X} out of range")]
    OutOfRange(u32),
    /// The input ended inside a multi-unit sequence, group or escape.
    #[error("unexpected end of input")]
    Truncated,
    /// The output buffer could not be allocated or grown.
    #[error("allocation failed")]
    AllocationFailed,
}

impl ErrorKind {
    pub(crate) fn at(self, offset: usize) -> CodecError {
        CodecError::new(self, offset)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
