//! `std::io` adapters.
//!
//! Writes go through [`LinearBuffer::push`], so a full buffer reports
//! `Ok(0)`. Reads go through [`LinearBuffer::pop_into`], so an empty buffer
//! reads as end of stream. `write_all` and `read_exact` map to the strict
//! variants and leave the buffer untouched when they fail.

use std::io;

use crate::{BufferError, LinearBuffer};

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        let kind = match err {
            BufferError::InvalidArgument(_) => io::ErrorKind::InvalidInput,
            BufferError::InsufficientSpace { .. } => io::ErrorKind::WriteZero,
            BufferError::InsufficientData { .. } => io::ErrorKind::UnexpectedEof,
        };
        io::Error::new(kind, err)
    }
}

impl<S> io::Write for LinearBuffer<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.push(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        Ok(self.push_exact(buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S> io::Read for LinearBuffer<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.pop_into(buf))
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        Ok(self.pop_exact(buf)?)
    }
}

impl<S> io::BufRead for LinearBuffer<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.peek())
    }

    fn consume(&mut self, amt: usize) {
        self.discard(amt);
    }
}
