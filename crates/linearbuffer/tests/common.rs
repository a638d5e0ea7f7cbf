#![allow(missing_docs)]
#![allow(dead_code)]

use std::fmt::Write;

use linearbuffer::LinearBuffer;

/// One call in a scripted session.
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    Push(&'a [u8]),
    PushExact(&'a [u8]),
    Pop(usize),
    PopExact(usize),
    Discard(usize),
    Peek,
    Reset,
}

pub const HELLO: &[u8] = b"Hello, Linear Buffer!\0";
pub const SECOND: &[u8] = b"This is a second message.\0";

pub fn status<S>(buf: &LinearBuffer<S>) -> String
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    format!(
        "Size={}, DataLen={}, SpaceLeft={}, Tail={}",
        buf.capacity(),
        buf.data_len(),
        buf.free_space(),
        buf.tail_space()
    )
}

/// Runs `steps` against `buf`, rendering one line per step followed by the
/// buffer status after it.
pub fn run_session<S>(buf: &mut LinearBuffer<S>, steps: &[Step<'_>]) -> String
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    let mut out = String::new();
    writeln!(out, "init => {}", status(buf)).unwrap();
    for step in steps {
        let action = match *step {
            Step::Push(data) => format!("push {} -> {}", data.len(), buf.push(data)),
            Step::PushExact(data) => match buf.push_exact(data) {
                Ok(()) => format!("push_exact {} -> ok", data.len()),
                Err(err) => format!("push_exact {} -> {err}", data.len()),
            },
            Step::Pop(n) => {
                let mut dst = vec![0u8; n];
                let popped = buf.pop(Some(&mut dst), n);
                format!("pop {n} -> {popped} {:?}", text(&dst[..popped]))
            }
            Step::PopExact(n) => {
                let mut dst = vec![0u8; n];
                match buf.pop_exact(&mut dst) {
                    Ok(()) => format!("pop_exact {n} -> ok {:?}", text(&dst)),
                    Err(err) => format!("pop_exact {n} -> {err}"),
                }
            }
            Step::Discard(n) => format!("discard {n} -> {}", buf.discard(n)),
            Step::Peek => format!("peek -> {} {:?}", buf.data_len(), text(buf.peek())),
            Step::Reset => {
                buf.reset();
                "reset".to_owned()
            }
        };
        writeln!(out, "{action} => {}", status(buf)).unwrap();
    }
    out
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .to_owned()
}
