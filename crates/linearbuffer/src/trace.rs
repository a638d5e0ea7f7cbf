//! Structured logging hooks, compiled to no-ops without the `tracing` feature.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Unread bytes were slid to the front of the storage.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn compacted(moved: usize, reclaimed: usize) {
    trace!(
        target: "linearbuffer",
        operation = "compact",
        moved,
        reclaimed,
        "compacted {moved} bytes, reclaimed {reclaimed}"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn compacted(_moved: usize, _reclaimed: usize) {}

/// A push was truncated because the buffer filled up.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn short_write(requested: usize, written: usize) {
    debug!(
        target: "linearbuffer",
        operation = "push",
        requested,
        written,
        "short write: {written} of {requested} bytes"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn short_write(_requested: usize, _written: usize) {}

/// A pop returned fewer bytes than asked for.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn short_read(requested: usize, popped: usize) {
    trace!(
        target: "linearbuffer",
        operation = "pop",
        requested,
        popped,
        "short read: {popped} of {requested} bytes"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn short_read(_requested: usize, _popped: usize) {}

/// A strict operation refused to run.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn rejected(operation: &'static str, requested: usize, available: usize) {
    debug!(
        target: "linearbuffer",
        operation,
        requested,
        available,
        "{operation} rejected: {requested} requested, {available} available"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn rejected(_operation: &'static str, _requested: usize, _available: usize) {}
