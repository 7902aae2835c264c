//! Concatenation and standard trait integration for [`NulBuf`].

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ffi::CStr;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Index, IndexMut};

use crate::buffer::NulBuf;
use crate::error::NulBufError;

/// A new buffer holding `lhs` followed by `rhs` up to its first zero byte.
///
/// The left operand is copied, never modified.
///
/// # Errors
///
/// Returns an allocation-class error if the result cannot be allocated.
pub fn concat(lhs: &NulBuf, rhs: &[u8]) -> Result<NulBuf, NulBufError> {
    let mut out = lhs.try_clone()?;
    out.append(rhs)?;
    Ok(out)
}

impl Add<&NulBuf> for &NulBuf {
    type Output = Result<NulBuf, NulBufError>;

    fn add(self, rhs: &NulBuf) -> Self::Output {
        concat(self, rhs.as_bytes())
    }
}

impl Add<&[u8]> for &NulBuf {
    type Output = Result<NulBuf, NulBufError>;

    fn add(self, rhs: &[u8]) -> Self::Output {
        concat(self, rhs)
    }
}

impl Add<&str> for &NulBuf {
    type Output = Result<NulBuf, NulBufError>;

    fn add(self, rhs: &str) -> Self::Output {
        concat(self, rhs.as_bytes())
    }
}

/// Appends in place, reusing the left operand's allocation.
impl Add<&[u8]> for NulBuf {
    type Output = Result<NulBuf, NulBufError>;

    fn add(mut self, rhs: &[u8]) -> Self::Output {
        self.append(rhs)?;
        Ok(self)
    }
}

impl Clone for NulBuf {
    /// Infallible copy; panics on allocation failure. Use
    /// [`NulBuf::try_clone`] to observe the failure instead.
    #[allow(clippy::expect_used)]
    fn clone(&self) -> Self {
        self.try_clone().expect("Out of memory while cloning NulBuf")
    }

    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        self.swap(&mut tmp);
    }
}

impl Extend<u8> for NulBuf {
    /// Grows per the growth policy. Panics on allocation failure.
    #[allow(clippy::expect_used)]
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let wanted = self
            .len_plus(lower)
            .expect("Out of memory while extending NulBuf");
        self.ensure_capacity_for(wanted)
            .expect("Out of memory while extending NulBuf");
        for byte in iter {
            self.push(byte).expect("Out of memory while extending NulBuf");
        }
    }
}

impl Index<usize> for NulBuf {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }
}

impl IndexMut<usize> for NulBuf {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[allow(clippy::expect_used)]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        let length = self.len();
        assert!(
            index < length,
            "Index {index} out of bounds for buffer of length {length}"
        );
        self.at_mut(index).expect("Index checked above")
    }
}

impl fmt::Debug for NulBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl fmt::Write for NulBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Zero bytes in `s` would end the append early and lose the rest.
        if s.as_bytes().contains(&0) {
            return Err(fmt::Error);
        }
        self.append(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl PartialEq for NulBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for NulBuf {}

impl PartialEq<[u8]> for NulBuf {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for NulBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for NulBuf {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<str> for NulBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for NulBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for NulBuf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NulBuf {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for NulBuf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for NulBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for NulBuf {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for NulBuf {
    type Error = NulBufError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        NulBuf::from_bytes(bytes)
    }
}

impl TryFrom<&str> for NulBuf {
    type Error = NulBufError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        NulBuf::from_bytes(s.as_bytes())
    }
}

impl TryFrom<&CStr> for NulBuf {
    type Error = NulBufError;

    fn try_from(s: &CStr) -> Result<Self, Self::Error> {
        NulBuf::from_bytes(s.to_bytes())
    }
}
