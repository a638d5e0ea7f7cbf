#![expect(missing_docs)]

use std::io::{self, BufRead, Cursor, Read, Write};

use linearbuffer::{BufferError, LinearBuffer};

#[test]
fn write_truncates_and_reports_zero_when_full() {
    let mut buf = LinearBuffer::new([0u8; 8]).unwrap();

    assert_eq!(buf.write(b"0123456789").unwrap(), 8);
    assert_eq!(buf.write(b"x").unwrap(), 0);
    assert_eq!(buf.write(b"").unwrap(), 0);
    buf.flush().unwrap();
    assert_eq!(buf.peek(), b"01234567");
}

#[test]
fn write_all_is_all_or_nothing() {
    let mut buf = LinearBuffer::new([0u8; 8]).unwrap();
    buf.write_all(b"abcde").unwrap();

    let err = buf.write_all(b"fghi").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    assert_eq!(buf.peek(), b"abcde");
}

#[test]
fn read_drains_and_signals_end_of_stream() {
    let mut buf = LinearBuffer::new([0u8; 8]).unwrap();
    buf.write_all(b"abc").unwrap();

    let mut out = [0u8; 8];
    assert_eq!(buf.read(&mut out).unwrap(), 3);
    assert_eq!(&out[..3], b"abc");
    assert_eq!(buf.read(&mut out).unwrap(), 0);
}

#[test]
fn read_exact_reports_unexpected_eof() {
    let mut buf = LinearBuffer::new([0u8; 8]).unwrap();
    buf.write_all(b"ab").unwrap();

    let mut out = [0u8; 3];
    let err = buf.read_exact(&mut out).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(buf.peek(), b"ab");
}

#[test]
fn buf_read_splits_lines_in_place() {
    let mut buf = LinearBuffer::new([0u8; 32]).unwrap();
    buf.write_all(b"alpha\nbeta\ngam").unwrap();

    let mut line = String::new();
    assert_eq!(buf.read_line(&mut line).unwrap(), 6);
    assert_eq!(line, "alpha\n");

    line.clear();
    assert_eq!(buf.read_line(&mut line).unwrap(), 5);
    assert_eq!(line, "beta\n");

    // The unterminated tail is returned as-is at end of stream.
    line.clear();
    assert_eq!(buf.read_line(&mut line).unwrap(), 3);
    assert_eq!(line, "gam");
    assert!(buf.is_empty());
}

#[test]
fn stages_a_stream_through_a_small_buffer() {
    let payload = b"one\ntwo\nthree\nfour\nfive\n";
    let mut source = Cursor::new(&payload[..]);
    let mut buf = LinearBuffer::new([0u8; 8]).unwrap();
    let mut frames = Vec::new();

    loop {
        let mut chunk = [0u8; 3];
        let n = source.read(&mut chunk).unwrap();
        assert_eq!(buf.write(&chunk[..n]).unwrap(), n);

        while let Some(end) = buf.peek().iter().position(|&b| b == b'\n') {
            frames.push(String::from_utf8(buf.peek()[..end].to_vec()).unwrap());
            buf.consume(end + 1);
        }
        if n == 0 {
            break;
        }
    }

    assert_eq!(frames, ["one", "two", "three", "four", "five"]);
    assert!(buf.is_empty());
}

#[test]
fn buffer_errors_map_to_io_kinds() {
    let cases = [
        (
            BufferError::InvalidArgument("empty"),
            io::ErrorKind::InvalidInput,
        ),
        (
            BufferError::InsufficientSpace {
                requested: 2,
                available: 1,
            },
            io::ErrorKind::WriteZero,
        ),
        (
            BufferError::InsufficientData {
                requested: 2,
                available: 1,
            },
            io::ErrorKind::UnexpectedEof,
        ),
    ];

    for (err, kind) in cases {
        let io_err = io::Error::from(err);
        assert_eq!(io_err.kind(), kind);
        assert_eq!(io_err.to_string(), err.to_string());
    }
}
