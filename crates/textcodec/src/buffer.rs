//! Output buffers handed back to callers.
//!
//! Two allocation contracts cover every codec:
//!
//! - **Exact**: the output length is known before the first byte is written
//!   (Base16 is `2 * n`, Base64 is `4 * ceil(n / 3)`). [`OutputBuffer::exact`]
//!   reserves precisely that much and never grows.
//! - **Growable**: the output length depends on the data (UTF transcoding,
//!   URL encoding). [`OutputBuffer::growable`] starts from an estimate and
//!   doubles its capacity whenever it fills up. [`OutputBuffer::finish`]
//!   shrinks the allocation to the written length before ownership moves to
//!   the caller.
//!
//! All reservations go through `try_reserve_exact`, so running out of memory
//! surfaces as [`ErrorKind::AllocationFailed`] instead of an abort. Anything
//! allocated before the failure is released when the buffer is dropped.

use alloc::{string::String, vec::Vec};

use crate::error::{CodecError, ErrorKind, Result};

/// Smallest capacity a growable buffer starts with.
const MIN_CAPACITY: usize = 16;

#[derive(Debug)]
pub(crate) struct OutputBuffer<T> {
    data: Vec<T>,
}

impl<T: Copy> OutputBuffer<T> {
    /// Reserves exactly `len` units.
    pub(crate) fn exact(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| alloc_failed(0))?;
        Ok(Self { data })
    }

    /// Reserves at least `estimate` units; the buffer grows on demand.
    pub(crate) fn growable(estimate: usize) -> Result<Self> {
        Self::exact(estimate.max(MIN_CAPACITY))
    }

    #[inline]
    pub(crate) fn push(&mut self, unit: T) -> Result<()> {
        if self.data.len() == self.data.capacity() {
            self.grow(1)?;
        }
        self.data.push(unit);
        Ok(())
    }

    pub(crate) fn extend_from_slice(&mut self, units: &[T]) -> Result<()> {
        if self.data.capacity() - self.data.len() < units.len() {
            self.grow(units.len())?;
        }
        self.data.extend_from_slice(units);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Doubles the capacity, or more if `additional` units would not fit.
    fn grow(&mut self, additional: usize) -> Result<()> {
        let len = self.data.len();
        let needed = len.checked_add(additional).ok_or_else(|| alloc_failed(len))?;
        let target = self
            .data
            .capacity()
            .saturating_mul(2)
            .max(needed)
            .max(MIN_CAPACITY);
        self.data
            .try_reserve_exact(target - len)
            .map_err(|_| alloc_failed(len))
    }

    /// Shrinks the allocation to the written length and hands it over.
    pub(crate) fn finish(mut self) -> Vec<T> {
        self.data.shrink_to_fit();
        self.data
    }
}

impl OutputBuffer<u8> {
    /// Allocates `len` zero bytes, for codecs that work in place.
    pub(crate) fn zeroed(len: usize) -> Result<Self> {
        let mut buf = Self::exact(len)?;
        buf.data.resize(len, 0);
        Ok(buf)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Finishes a buffer that only ever received ASCII alphabet bytes.
    pub(crate) fn finish_ascii(self) -> String {
        let bytes = self.finish();
        debug_assert!(bytes.is_ascii(), "encoder wrote a non-ASCII byte");
        // SAFETY: callers only push bytes taken from their ASCII alphabets
        // (and `%`/hex digits), so the contents are valid UTF-8.
        unsafe { String::from_utf8_unchecked(bytes) }
    }
}

fn alloc_failed(written: usize) -> CodecError {
    ErrorKind::AllocationFailed.at(written)
}
