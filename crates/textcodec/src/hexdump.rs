//! Canonical hex dump rendering.
//!
//! Each row covers sixteen bytes:
//!
//! ```text
//! 00000000  48 65 6c 6c 6f 0a                                |Hello.|
//! ```
//!
//! The offset is at least eight hex digits. Every byte position takes three
//! columns (two digits and a space), positions past the end of the data are
//! blank, one more space separates them from the panel, and the panel between
//! the bars shows printable ASCII (`0x20` to
//! `0x7E`) as itself and everything else as `.`. Empty input renders nothing.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::options::HexDumpOptions;

/// Bytes shown per row.
pub const BYTES_PER_ROW: usize = 16;

/// Width of a row with an eight-digit offset, newline included.
const ROW_WIDTH: usize = 8 + 2 + 3 * BYTES_PER_ROW + 2 + BYTES_PER_ROW + 2;

fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

fn write_row<W: Write>(out: &mut W, offset: usize, row: &[u8], uppercase: bool) -> fmt::Result {
    if uppercase {
        write!(out, "{offset:08X}  ")?;
    } else {
        write!(out, "{offset:08x}  ")?;
    }
    for &byte in row {
        if uppercase {
            write!(out, "{byte:02X} ")?;
        } else {
            write!(out, "{byte:02x} ")?;
        }
    }
    for _ in row.len()..BYTES_PER_ROW {
        out.write_str("   ")?;
    }
    out.write_str(" |")?;
    for &byte in row {
        out.write_char(if is_printable(byte) { char::from(byte) } else { '.' })?;
    }
    out.write_str("|\n")
}

/// Renders `data` into any [`core::fmt::Write`] sink.
///
/// # Errors
///
/// Whatever the sink returns.
pub fn write_hex_dump_fmt<W: Write>(out: &mut W, data: &[u8], options: HexDumpOptions) -> fmt::Result {
    for (index, row) in data.chunks(BYTES_PER_ROW).enumerate() {
        let offset = options.start_offset.wrapping_add(index * BYTES_PER_ROW);
        write_row(out, offset, row, options.uppercase)?;
    }
    Ok(())
}

/// Renders `data` into a new `String`.
///
/// ```rust
/// use textcodec::{HexDumpOptions, format_hex_dump};
///
/// assert_eq!(
///     format_hex_dump(b"AB\n", HexDumpOptions::default()),
///     "00000000  41 42 0a                                         |AB.|\n"
/// );
/// ```
#[must_use]
pub fn format_hex_dump(data: &[u8], options: HexDumpOptions) -> String {
    let rows = data.len().div_ceil(BYTES_PER_ROW);
    let mut out = String::with_capacity(rows.saturating_mul(ROW_WIDTH));
    let written = write_hex_dump_fmt(&mut out, data, options);
    debug_assert!(written.is_ok(), "fmt::Write for String never fails");
    out
}

#[cfg(feature = "std")]
mod io {
    use core::fmt;
    use std::io::{self, Write};

    use super::write_hex_dump_fmt;
    use crate::options::HexDumpOptions;

    /// Forwards `fmt::Write` into an `io::Write`, keeping the I/O error that
    /// `fmt::Error` cannot carry.
    struct Adapter<'a, W> {
        inner: &'a mut W,
        error: Option<io::Error>,
    }

    impl<W: Write> fmt::Write for Adapter<'_, W> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.inner.write_all(s.as_bytes()).map_err(|err| {
                self.error = Some(err);
                fmt::Error
            })
        }
    }

    /// Writes the hex dump of `data` to `out` in the default layout.
    ///
    /// # Errors
    ///
    /// The first error `out` returns.
    pub fn write_hex_dump<W: Write>(out: &mut W, data: &[u8]) -> io::Result<()> {
        let mut adapter = Adapter { inner: out, error: None };
        match write_hex_dump_fmt(&mut adapter, data, HexDumpOptions::default()) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => Err(adapter
                .error
                .unwrap_or_else(|| io::Error::other("formatter error"))),
        }
    }

    /// Writes the hex dump of `data` to standard output.
    ///
    /// # Errors
    ///
    /// Any error writing to or flushing standard output.
    pub fn hex_dump(data: &[u8]) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        write_hex_dump(&mut out, data)?;
        out.flush()
    }

}

#[cfg(feature = "std")]
pub use io::{hex_dump, write_hex_dump};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(format_hex_dump(b"", HexDumpOptions::default()), "");
    }

    #[test]
    fn full_row_has_fixed_width() {
        let data: [u8; 16] = core::array::from_fn(|i| b'a' + i as u8);
        let out = format_hex_dump(&data, HexDumpOptions::default());
        assert_eq!(out.len(), ROW_WIDTH);
        assert!(out.ends_with(" |abcdefghijklmnop|\n"));
    }

    #[test]
    fn panel_is_separated_by_a_space() {
        let expected = std::format!("00000000  41 {} |A|\n", "   ".repeat(15));
        assert_eq!(format_hex_dump(b"A", HexDumpOptions::default()), expected);
        let full = format_hex_dump(&[0x41; 16], HexDumpOptions::default());
        assert!(full.contains("41  |AAAA"));
    }

    #[test]
    fn partial_rows_keep_the_panel_aligned() {
        let out = format_hex_dump(&[0x41; 17], HexDumpOptions::default());
        let rows: std::vec::Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].find('|'), rows[1].find('|'));
        assert!(rows[1].starts_with("00000010  41 "));
        assert!(rows[1].ends_with("|A|"));
    }

    #[test]
    fn non_printable_bytes_become_dots() {
        let out = format_hex_dump(&[0x1F, 0x20, 0x7E, 0x7F, 0xFF], HexDumpOptions::default());
        assert!(out.ends_with("|. ~..|\n"));
    }

    #[test]
    fn honours_uppercase_and_start_offset() {
        let options = HexDumpOptions {
            uppercase: true,
            start_offset: 0xABC0,
        };
        let out = format_hex_dump(&[0xBE, 0xEF], options);
        assert!(out.starts_with("0000ABC0  BE EF "));
    }
}
