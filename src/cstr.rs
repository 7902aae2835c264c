//! Primitives over terminator-delimited byte sequences.
//!
//! A terminated sequence is read up to its first zero byte. A slice without a
//! zero byte is treated as terminated at its end.

use alloc::boxed::Box;
use core::ffi::{c_char, CStr};

use crate::error::NulBufError;
use crate::heap;

/// Number of bytes before the first terminator.
#[must_use]
pub fn terminated_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// The content of a terminated sequence, without its terminator.
#[must_use]
pub fn terminated(bytes: &[u8]) -> &[u8] {
    &bytes[..terminated_len(bytes)]
}

/// Length of the sequence behind a C string pointer.
///
/// # Errors
///
/// Returns `NulBufError::InvalidArgument` if `ptr` is null.
///
/// # Safety
///
/// A non-null `ptr` must satisfy the contract of [`CStr::from_ptr`].
pub unsafe fn ptr_len(ptr: *const c_char) -> Result<usize, NulBufError> {
    // SAFETY: forwarded to the caller.
    unsafe { ptr_bytes(ptr, "ptr_len") }.map(<[u8]>::len)
}

/// Borrows the content behind a C string pointer, rejecting null.
///
/// # Safety
///
/// A non-null `ptr` must satisfy the contract of [`CStr::from_ptr`], and the
/// sequence must outlive `'a`.
pub(crate) unsafe fn ptr_bytes<'a>(
    ptr: *const c_char,
    operation: &'static str,
) -> Result<&'a [u8], NulBufError> {
    if ptr.is_null() {
        return Err(NulBufError::InvalidArgument { operation });
    }
    // SAFETY: non-null, rest forwarded to the caller.
    Ok(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Copies the terminated content of `src` and a terminator into `dst`.
///
/// Returns the written content, terminator excluded.
///
/// # Errors
///
/// Returns `NulBufError::InsufficientSpace` if `dst` is shorter than the
/// content plus one byte. `dst` is untouched in that case.
pub fn copy_terminated<'d>(dst: &'d mut [u8], src: &[u8]) -> Result<&'d mut [u8], NulBufError> {
    let content = terminated(src);
    let required = content.len() + 1;
    if dst.len() < required {
        return Err(NulBufError::InsufficientSpace {
            required,
            available: dst.len(),
        });
    }
    dst[..content.len()].copy_from_slice(content);
    dst[content.len()] = 0;
    Ok(&mut dst[..content.len()])
}

/// Appends the terminated content of `src` after the terminated content of
/// `dst`, then writes a terminator.
///
/// Returns the whole combined content, terminator excluded.
///
/// # Errors
///
/// Returns `NulBufError::InsufficientSpace` if `dst` has no terminator or
/// cannot hold the combined content plus one byte. `dst` is untouched in that
/// case.
pub fn cat_terminated<'d>(dst: &'d mut [u8], src: &[u8]) -> Result<&'d mut [u8], NulBufError> {
    let start = terminated_len(dst);
    if start == dst.len() {
        return Err(NulBufError::InsufficientSpace {
            required: dst.len() + 1,
            available: dst.len(),
        });
    }
    let content = terminated(src);
    let end = start + content.len();
    if end >= dst.len() {
        return Err(NulBufError::InsufficientSpace {
            required: end + 1,
            available: dst.len(),
        });
    }
    dst[start..end].copy_from_slice(content);
    dst[end] = 0;
    Ok(&mut dst[..end])
}

/// Copies the terminated content of `src` into a fresh allocation of exactly
/// `len + 1` bytes.
///
/// # Errors
///
/// Returns `NulBufError::AllocationFailure` if the heap refuses the request.
pub fn duplicate_terminated(src: &[u8]) -> Result<Box<[u8]>, NulBufError> {
    let content = terminated(src);
    let mut copy = heap::allocate_with_terminator(content.len())?;
    copy[..content.len()].copy_from_slice(content);
    Ok(copy)
}
