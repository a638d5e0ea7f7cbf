//! A fixed-capacity, non-wrapping byte buffer over caller-supplied storage.
//!
//! [`LinearBuffer`] appends at a write offset, consumes from a read offset and
//! exposes the unread bytes between the two as one contiguous slice. It never
//! wraps: space freed by consumption is reclaimed lazily, by sliding the unread
//! bytes back to the start of the storage only when a push would not otherwise
//! fit.
//!
//! ```rust
//! use linearbuffer::LinearBuffer;
//!
//! let mut storage = [0u8; 16];
//! let mut buf = LinearBuffer::new(&mut storage[..]).unwrap();
//!
//! assert_eq!(buf.push(b"0123456789"), 10);
//! assert_eq!(buf.discard(10), 10);
//!
//! // Only 6 bytes remain at the tail, but the consumed head is reclaimed.
//! assert_eq!(buf.push(b"hello, world"), 12);
//! assert_eq!(buf.peek(), b"hello, world");
//! ```
//!
//! Writes and reads that cannot be satisfied in full are truncated, and the
//! returned count is the only signal. Callers that would rather fail use
//! [`LinearBuffer::push_exact`] and [`LinearBuffer::pop_exact`].

#![no_std]
#![forbid(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
#[cfg(feature = "std")]
mod io;
mod linear_buffer;
mod trace;


pub use error::BufferError;
pub use linear_buffer::LinearBuffer;

/// Staging buffer for audio sample bytes.
///
/// Same type and behaviour as [`LinearBuffer`]; the name only documents the
/// call site.
pub type AudioStack<S> = LinearBuffer<S>;
