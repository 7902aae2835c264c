//! Raw allocation from the global heap.
//!
//! Every allocation made by the crate goes through [`allocate_zeroed`], so a
//! refused request surfaces as a [`NulBufError`] instead of an abort. The one
//! exception is the single terminator byte of an empty buffer from
//! `NulBuf::new`, which is infallible and not counted by `failpoint`.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::NulBufError;

/// Allocates room for `capacity` content bytes plus the terminator slot.
pub(crate) fn allocate_with_terminator(capacity: usize) -> Result<Box<[u8]>, NulBufError> {
    let size = capacity
        .checked_add(1)
        .ok_or(NulBufError::CapacityOverflow {
            requested: capacity,
        })?;
    allocate_zeroed(size)
}

/// Allocates exactly `size` zeroed bytes.
pub(crate) fn allocate_zeroed(size: usize) -> Result<Box<[u8]>, NulBufError> {
    #[cfg(test)]
    failpoint::check(size)?;

    let mut bytes = Vec::new();
    if bytes.try_reserve_exact(size).is_err() {
        log::debug!("heap refused an allocation of {size} bytes");
        return Err(NulBufError::AllocationFailure { requested: size });
    }
    bytes.resize(size, 0);
    Ok(bytes.into_boxed_slice())
}
