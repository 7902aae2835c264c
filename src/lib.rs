#![no_std]

//! `NulBuf`: an owned, growable byte buffer that is always NUL-terminated.
//!
//! `NulBuf` owns a single heap allocation of `capacity + 1` bytes. The content
//! occupies the first `len` bytes and the byte at `len` is always zero, so the
//! buffer can be handed to C string consumers at any time without copying.
//!
//! The crate is byte-oriented: there is no encoding awareness, and inputs are
//! read as terminator-delimited sequences (a slice is read up to its first zero
//! byte, or to its end if it has none).
//!
//! # Invariants
//!
//! After every public operation returns:
//! - `len() <= capacity()`
//! - the byte at `len()` is zero
//! - the allocation exists, even for the empty buffer (one terminator byte)
//!
//! Capacity only changes through [`NulBuf::reserve`], [`NulBuf::shrink_to_fit`]
//! and the growth performed by `push`/`append`; it never shrinks implicitly.
//!
//! # Errors
//!
//! Every allocating operation is fallible and reports a refused request as
//! [`NulBufError::AllocationFailure`] (or [`NulBufError::CapacityOverflow`]
//! when the size arithmetic itself overflows). Failed operations leave the
//! buffer exactly as it was.
//!
//! ```
//! # use nulbuf::NulBuf;
//! let mut s = NulBuf::from_bytes(b"ab").unwrap();
//! assert_eq!((s.len(), s.capacity()), (2, 2));
//!
//! s.reserve(8).unwrap();
//! s.append(b"cd").unwrap();
//! s.push(b'e').unwrap();
//! assert_eq!(s, "abcde");
//! assert_eq!(s.capacity(), 8);
//!
//! s.shrink_to_fit().unwrap();
//! assert_eq!(s.capacity(), 5);
//! assert_eq!(s.as_c_str(), c"abcde");
//! ```
//!
//! # Growth
//!
//! `push` and `append` grow the allocation when needed. The first allocation
//! of an empty buffer is exact. Later ones grow to `capacity * 3 / 2 + 8`, or
//! to the requested size if that is larger, which keeps repeated pushes
//! amortized O(1).
//!
//! # Ownership
//!
//! A plain Rust move transfers the allocation without copying. When the source
//! must stay usable, [`NulBuf::take`] moves the contents out and leaves the
//! empty buffer behind:
//!
//! ```
//! # use nulbuf::NulBuf;
//! let mut a = NulBuf::from_bytes(b"hello").unwrap();
//! let b = a.take();
//! assert_eq!(b, "hello");
//! assert!(a.is_empty());
//!
//! a.append(b"again").unwrap();
//! assert_eq!(a, "again");
//! ```
//!
//! Copies are explicit. [`NulBuf::assign_from`] builds the copy first and then
//! swaps it in, so a failed copy leaves the target untouched.
//!
//! # Concatenation
//!
//! `&NulBuf + rhs` produces a new buffer and leaves the left operand alone.
//! The result is a `Result` because the new buffer has to be allocated:
//!
//! ```
//! # use nulbuf::NulBuf;
//! let hello = NulBuf::from_bytes(b"Hello").unwrap();
//! let greeting = (&hello + ", world").unwrap();
//! assert_eq!(greeting, "Hello, world");
//! assert_eq!(hello, "Hello");
//! ```
//!
//! # Terminated-sequence helpers
//!
//! The [`cstr`] module carries the primitives over terminated byte sequences
//! (length, copy, concatenation into a caller buffer, duplication).
//!
//! # `no_std` Compatibility
//!
//! The crate needs only `core` and `alloc`. Enable the optional `std` feature
//! to get `std::error::Error` on [`NulBufError`]:
//! ```toml
//! [dependencies]
//! nulbuf = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
pub mod cstr;
mod error;
mod heap;
mod ops;

pub use buffer::NulBuf;
pub use error::NulBufError;
pub use ops::concat;
