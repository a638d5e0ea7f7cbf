use core::fmt;

use crate::{error::BufferError, trace};

/// A fixed-capacity byte buffer that appends at the tail and consumes from the
/// head without ever wrapping.
///
/// The buffer borrows or owns caller-supplied storage `S` (a `&mut [u8]`, an
/// array, a `Vec<u8>`, ...) and tracks two offsets into it:
///
/// ```text
/// 0           read            write          capacity
/// |  consumed  |    unread     |     tail      |
/// ```
///
/// Unread bytes always sit contiguously in `read..write`. Consumed space at the
/// head is reclaimed lazily: only when a push does not fit into the tail are
/// the unread bytes moved back to offset zero.
pub struct LinearBuffer<S> {
    storage: S,
    read: usize,
    write: usize,
}

impl<S> LinearBuffer<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Binds a new, empty buffer to `storage`.
    ///
    /// The capacity is the length of the storage and never changes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `storage` is empty.
    pub fn new(storage: S) -> Result<Self, BufferError> {
        if storage.as_ref().is_empty() {
            return Err(BufferError::InvalidArgument(
                "backing storage must not be empty",
            ));
        }

        Ok(Self {
            storage,
            read: 0,
            write: 0,
        })
    }

    /// Empties the buffer, rewinding both offsets to the start of the storage.
    ///
    /// The stored bytes are left in place.
    pub fn reset(&mut self) {
        self.read = 0;
        self.write = 0;
    }

    /// Releases the backing storage.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Total number of bytes the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().len()
    }

    /// Number of unread bytes.
    #[inline]
    pub fn data_len(&self) -> usize {
        self.write - self.read
    }

    /// Number of bytes that can still be pushed, counting reclaimable head
    /// space.
    #[inline]
    pub fn free_space(&self) -> usize {
        self.capacity() - self.data_len()
    }

    /// Number of bytes that can be pushed without compacting.
    #[inline]
    pub fn tail_space(&self) -> usize {
        self.capacity() - self.write
    }

    /// Returns `true` if there are no unread bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Returns `true` if no further byte can be pushed.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.data_len() == self.capacity()
    }

    /// Appends as much of `data` as fits and returns the number of bytes
    /// written.
    ///
    /// If the tail cannot take all of `data` and bytes have been consumed from
    /// the head, the unread bytes are first moved to the start of the storage.
    /// Whatever still does not fit is dropped: a return value smaller than
    /// `data.len()` means the buffer is now full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linearbuffer::LinearBuffer;
    ///
    /// let mut buf = LinearBuffer::new([0u8; 4]).unwrap();
    /// assert_eq!(buf.push(b"abc"), 3);
    /// assert_eq!(buf.push(b"def"), 1);
    /// assert!(buf.is_full());
    /// assert_eq!(buf.peek(), b"abcd");
    /// ```
    #[must_use = "a short write silently drops the bytes that did not fit"]
    pub fn push(&mut self, data: &[u8]) -> usize {
        if data.len() <= self.tail_space() {
            self.append(data);
            return data.len();
        }

        self.compact();

        let written = data.len().min(self.tail_space());
        self.append(&data[..written]);
        if written < data.len() {
            trace::short_write(data.len(), written);
        }
        written
    }

    /// Appends all of `data` or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InsufficientSpace`] and leaves the buffer
    /// untouched if `data` is larger than [`free_space`](Self::free_space).
    pub fn push_exact(&mut self, data: &[u8]) -> Result<(), BufferError> {
        let available = self.free_space();
        if data.len() > available {
            trace::rejected("push", data.len(), available);
            return Err(BufferError::InsufficientSpace {
                requested: data.len(),
                available,
            });
        }

        let written = self.push(data);
        debug_assert_eq!(written, data.len(), "free space must absorb the push");
        Ok(())
    }

    /// Consumes up to `max_len` unread bytes and returns how many were
    /// consumed.
    ///
    /// When `out` is given, the consumed bytes are copied to its front and the
    /// count is further limited to `out.len()`. With `None` the bytes are
    /// simply skipped. Popping never reclaims space by itself; that happens on
    /// a later [`push`](Self::push).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linearbuffer::LinearBuffer;
    ///
    /// let mut buf = LinearBuffer::new([0u8; 8]).unwrap();
    /// assert_eq!(buf.push(b"frame"), 5);
    ///
    /// let mut out = [0u8; 8];
    /// assert_eq!(buf.pop(Some(&mut out), 3), 3);
    /// assert_eq!(&out[..3], b"fra");
    /// assert_eq!(buf.pop(None, 10), 2);
    /// assert!(buf.is_empty());
    /// ```
    pub fn pop(&mut self, out: Option<&mut [u8]>, max_len: usize) -> usize {
        let mut count = max_len.min(self.data_len());
        if let Some(out) = out {
            count = count.min(out.len());
            let start = self.read;
            out[..count].copy_from_slice(&self.storage.as_ref()[start..start + count]);
        }

        self.read += count;
        if count < max_len {
            trace::short_read(max_len, count);
        }
        count
    }

    /// Fills as much of `out` as there is data for.
    pub fn pop_into(&mut self, out: &mut [u8]) -> usize {
        let len = out.len();
        self.pop(Some(out), len)
    }

    /// Skips up to `len` unread bytes.
    pub fn discard(&mut self, len: usize) -> usize {
        self.pop(None, len)
    }

    /// Fills all of `out` or consumes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InsufficientData`] and leaves the buffer
    /// untouched if fewer than `out.len()` bytes are buffered.
    pub fn pop_exact(&mut self, out: &mut [u8]) -> Result<(), BufferError> {
        let available = self.data_len();
        if out.len() > available {
            trace::rejected("pop", out.len(), available);
            return Err(BufferError::InsufficientData {
                requested: out.len(),
                available,
            });
        }

        self.pop_into(out);
        Ok(())
    }

    /// Returns the unread bytes without consuming them.
    #[inline]
    pub fn peek(&self) -> &[u8] {
        &self.storage.as_ref()[self.read..self.write]
    }

    /// Asserts the offset invariants, panicking on violation.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        assert!(self.read <= self.write, "read offset passed write offset");
        assert!(
            self.write <= self.capacity(),
            "write offset passed end of storage"
        );
        assert_eq!(self.data_len() + self.free_space(), self.capacity());
    }

    #[cfg(test)]
    pub(crate) fn offsets(&self) -> (usize, usize) {
        (self.read, self.write)
    }

    fn compact(&mut self) {
        if self.read == 0 {
            return;
        }

        let (read, write) = (self.read, self.write);
        // `copy_within` is a memmove; source and destination may overlap.
        self.storage.as_mut().copy_within(read..write, 0);
        trace::compacted(write - read, read);
        self.read = 0;
        self.write = write - read;
    }

    fn append(&mut self, data: &[u8]) {
        let end = self.write + data.len();
        self.storage.as_mut()[self.write..end].copy_from_slice(data);
        self.write = end;
    }
}

impl<S> fmt::Debug for LinearBuffer<S>
where
    S: AsRef<[u8]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearBuffer")
            .field("capacity", &self.storage.as_ref().len())
            .field("read", &self.read)
            .field("write", &self.write)
            .finish()
    }
}
