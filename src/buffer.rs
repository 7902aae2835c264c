use alloc::boxed::Box;
use core::ffi::{c_char, CStr};
use core::mem;

use crate::cstr;
use crate::error::NulBufError;
use crate::heap;

const GROWTH_NUMERATOR: usize = 3;
const GROWTH_DENOMINATOR: usize = 2;
const GROWTH_PAD: usize = 8;

/// An owned, growable byte buffer that is always NUL-terminated.
///
/// `data` holds `capacity + 1` bytes and `data[len]` is always zero.
pub struct NulBuf {
    data: Box<[u8]>,
    len: usize,
}

impl NulBuf {
    /// Creates an empty buffer: zero length, zero capacity, one terminator byte.
    ///
    /// The one-byte allocation bypasses the fallible heap path, like
    /// `Box::new`, so `take` and `Default` never fail.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Box::new([0]),
            len: 0,
        }
    }

    /// Creates a buffer holding `bytes` up to their first zero byte.
    ///
    /// The allocation is exact: `capacity() == len()`.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::AllocationFailure` if the heap refuses the request.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NulBufError> {
        let content = cstr::terminated(bytes);
        let mut data = heap::allocate_with_terminator(content.len())?;
        data[..content.len()].copy_from_slice(content);
        Ok(Self {
            data,
            len: content.len(),
        })
    }

    /// Creates a buffer from a C string pointer.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::InvalidArgument` if `ptr` is null, or
    /// `NulBufError::AllocationFailure` if the heap refuses the request.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must satisfy the contract of [`CStr::from_ptr`].
    pub unsafe fn from_ptr(ptr: *const c_char) -> Result<Self, NulBufError> {
        // SAFETY: forwarded to the caller.
        let bytes = unsafe { cstr::ptr_bytes(ptr, "from_ptr") }?;
        Self::from_bytes(bytes)
    }

    /// Creates an empty buffer that can hold `capacity` bytes without
    /// reallocating.
    ///
    /// # Errors
    ///
    /// Returns an allocation-class error if the heap refuses the request.
    pub fn with_capacity(capacity: usize) -> Result<Self, NulBufError> {
        Ok(Self {
            data: heap::allocate_with_terminator(capacity)?,
            len: 0,
        })
    }

    /// Deep copy sized to the content, not to the source capacity.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::AllocationFailure` if the heap refuses the request.
    pub fn try_clone(&self) -> Result<Self, NulBufError> {
        let mut data = heap::allocate_zeroed(self.len + 1)?;
        data.copy_from_slice(self.as_bytes_with_nul());
        Ok(Self {
            data,
            len: self.len,
        })
    }

    /// Moves the contents out, leaving `self` as the empty buffer.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Copy assignment. On error `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::AllocationFailure` if the copy cannot be allocated.
    pub fn assign_from(&mut self, other: &NulBuf) -> Result<(), NulBufError> {
        let mut tmp = other.try_clone()?;
        self.swap(&mut tmp);
        Ok(())
    }

    /// Move assignment: `self` takes over `other`, which is left empty.
    pub fn assign_take(&mut self, other: &mut NulBuf) {
        let mut tmp = other.take();
        self.swap(&mut tmp);
    }

    pub fn swap(&mut self, other: &mut NulBuf) {
        mem::swap(self, other);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The content, terminator excluded.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The content followed by its terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..=self.len]
    }

    /// C string view. Stops at the first zero byte, which is the terminator
    /// unless a zero byte was stored as content.
    ///
    /// # Panics
    ///
    /// May panic if the terminator invariant is broken (internal validation failure).
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul())
            .expect("Terminator maintained after every mutation")
    }

    /// Pointer for foreign C string consumers. Valid until the next mutation
    /// or until the buffer is dropped.
    #[must_use]
    pub fn as_ptr(&self) -> *const c_char {
        self.data.as_ptr().cast()
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&u8, NulBufError> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    /// Checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut u8, NulBufError> {
        self.check_index(index)?;
        Ok(&mut self.data[index])
    }

    fn check_index(&self, index: usize) -> Result<(), NulBufError> {
        if index >= self.len {
            Err(NulBufError::OutOfRange {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Empties the buffer. The allocation is kept, so refilling up to the
    /// current capacity does not allocate.
    pub fn clear(&mut self) {
        self.len = 0;
        self.data[0] = 0;
    }

    /// Replaces the contents with `bytes` up to their first zero byte.
    ///
    /// Reuses the allocation when the new content fits; otherwise builds a
    /// fresh buffer and swaps it in, so `self` is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::AllocationFailure` if a larger allocation is needed
    /// and the heap refuses it.
    pub fn assign(&mut self, bytes: &[u8]) -> Result<(), NulBufError> {
        let content = cstr::terminated(bytes);
        if content.len() > self.capacity() {
            let mut tmp = Self::from_bytes(content)?;
            self.swap(&mut tmp);
            return Ok(());
        }
        self.data[..content.len()].copy_from_slice(content);
        self.set_len(content.len());
        Ok(())
    }

    /// [`assign`](Self::assign) from a C string pointer.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::InvalidArgument` if `ptr` is null, otherwise as
    /// [`assign`](Self::assign).
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must satisfy the contract of [`CStr::from_ptr`] and
    /// must not point into this buffer.
    pub unsafe fn assign_ptr(&mut self, ptr: *const c_char) -> Result<(), NulBufError> {
        // SAFETY: forwarded to the caller.
        let bytes = unsafe { cstr::ptr_bytes(ptr, "assign_ptr") }?;
        self.assign(bytes)
    }

    /// Appends one byte, growing the allocation per the growth policy.
    ///
    /// # Errors
    ///
    /// Returns an allocation-class error if growth is needed and fails;
    /// `self` is unchanged in that case.
    pub fn push(&mut self, byte: u8) -> Result<(), NulBufError> {
        let desired = self.len_plus(1)?;
        self.ensure_capacity_for(desired)?;
        self.data[self.len] = byte;
        self.set_len(desired);
        Ok(())
    }

    /// Appends `bytes` up to their first zero byte.
    ///
    /// # Errors
    ///
    /// Returns an allocation-class error if growth is needed and fails;
    /// `self` is unchanged in that case.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), NulBufError> {
        let content = cstr::terminated(bytes);
        let desired = self.len_plus(content.len())?;
        self.ensure_capacity_for(desired)?;
        self.data[self.len..desired].copy_from_slice(content);
        self.set_len(desired);
        Ok(())
    }

    /// [`append`](Self::append) from a C string pointer.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::InvalidArgument` if `ptr` is null, otherwise as
    /// [`append`](Self::append).
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must satisfy the contract of [`CStr::from_ptr`] and
    /// must not point into this buffer.
    pub unsafe fn append_ptr(&mut self, ptr: *const c_char) -> Result<(), NulBufError> {
        // SAFETY: forwarded to the caller.
        let bytes = unsafe { cstr::ptr_bytes(ptr, "append_ptr") }?;
        self.append(bytes)
    }

    /// Grows the capacity to exactly `new_capacity` if it is currently smaller.
    /// Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns an allocation-class error if the heap refuses the request;
    /// `self` is unchanged in that case.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), NulBufError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        log::trace!(
            "nulbuf grow: capacity {} -> {}",
            self.capacity(),
            new_capacity
        );
        self.reallocate(new_capacity)
    }

    /// Releases unused capacity so that `capacity() == len()`.
    ///
    /// # Errors
    ///
    /// Returns `NulBufError::AllocationFailure` if the heap refuses the smaller
    /// allocation; `self` is unchanged in that case.
    pub fn shrink_to_fit(&mut self) -> Result<(), NulBufError> {
        if self.capacity() == self.len {
            return Ok(());
        }
        log::trace!(
            "nulbuf shrink: capacity {} -> {}",
            self.capacity(),
            self.len
        );
        self.reallocate(self.len)
    }

    fn reallocate(&mut self, capacity: usize) -> Result<(), NulBufError> {
        let mut data = heap::allocate_with_terminator(capacity)?;
        data[..=self.len].copy_from_slice(self.as_bytes_with_nul());
        self.data = data;
        Ok(())
    }

    /// Length after adding `extra` bytes.
    pub(crate) fn len_plus(&self, extra: usize) -> Result<usize, NulBufError> {
        self.len
            .checked_add(extra)
            .ok_or(NulBufError::CapacityOverflow {
                requested: self.len,
            })
    }

    /// Grows per the growth policy until `desired` bytes fit.
    pub(crate) fn ensure_capacity_for(&mut self, desired: usize) -> Result<(), NulBufError> {
        let capacity = self.capacity();
        if desired <= capacity {
            return Ok(());
        }
        self.reserve(grown_capacity(capacity, desired))
    }

    fn set_len(&mut self, len: usize) {
        self.len = len;
        self.data[len] = 0;
    }
}

/// First allocation is exact; after that `capacity * 3 / 2 + 8`, raised to
/// `desired` if still short.
fn grown_capacity(capacity: usize, desired: usize) -> usize {
    if capacity == 0 {
        return desired;
    }
    capacity
        .checked_mul(GROWTH_NUMERATOR)
        .map(|c| c / GROWTH_DENOMINATOR)
        .and_then(|c| c.checked_add(GROWTH_PAD))
        .map_or(desired, |c| c.max(desired))
}

impl Default for NulBuf {
    fn default() -> Self {
        Self::new()
    }
}
