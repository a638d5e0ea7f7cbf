use thiserror::Error;

/// Errors reported by [`LinearBuffer`](crate::LinearBuffer).
///
/// Truncated pushes and pops are not errors: [`push`](crate::LinearBuffer::push)
/// and [`pop`](crate::LinearBuffer::pop) report them through their return
/// value. Only construction and the `*_exact` variants fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The caller passed an argument the buffer cannot be built from.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A strict push did not fit into the free space.
    #[error("insufficient space: requested {requested} bytes, {available} available")]
    InsufficientSpace {
        /// Bytes the caller asked to push.
        requested: usize,
        /// Free space at the time of the call.
        available: usize,
    },
    /// A strict pop asked for more bytes than are buffered.
    #[error("insufficient data: requested {requested} bytes, {available} available")]
    InsufficientData {
        /// Bytes the caller asked to pop.
        requested: usize,
        /// Unread bytes at the time of the call.
        available: usize,
    },
}
