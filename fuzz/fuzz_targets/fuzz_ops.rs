#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linearbuffer::LinearBuffer;

#[derive(Debug, Arbitrary)]
enum Op {
    Push(Vec<u8>),
    PushExact(Vec<u8>),
    Pop { max_len: u16, out_len: u16 },
    PopExact(u16),
    Discard(u16),
    Peek,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u16,
    ops: Vec<Op>,
}

/// Replays `ops` against a buffer and a bounded `VecDeque` model, asserting
/// that both agree after every step.
fn run(input: Input) {
    let capacity = usize::from(input.capacity % 1024);
    let Ok(mut buf) = LinearBuffer::new(vec![0u8; capacity]) else {
        assert_eq!(capacity, 0, "only empty storage may be rejected");
        return;
    };
    let mut model: VecDeque<u8> = VecDeque::with_capacity(capacity);

    for op in input.ops {
        match op {
            Op::Push(data) => {
                let expected = data.len().min(capacity - model.len());
                assert_eq!(buf.push(&data), expected);
                model.extend(&data[..expected]);
            }
            Op::PushExact(data) => {
                let fits = data.len() <= capacity - model.len();
                assert_eq!(buf.push_exact(&data).is_ok(), fits);
                if fits {
                    model.extend(&data);
                }
            }
            Op::Pop { max_len, out_len } => {
                let (max_len, out_len) = (usize::from(max_len), usize::from(out_len));
                let mut out = vec![0u8; out_len];
                let popped = buf.pop(Some(&mut out), max_len);
                let take = max_len.min(out_len).min(model.len());
                assert_eq!(popped, take);
                assert!(out[..popped].iter().eq(model.drain(..take).collect::<Vec<_>>().iter()));
            }
            Op::PopExact(len) => {
                let mut out = vec![0u8; usize::from(len)];
                let fits = out.len() <= model.len();
                assert_eq!(buf.pop_exact(&mut out).is_ok(), fits);
                if fits {
                    assert!(out.iter().eq(model.drain(..out.len()).collect::<Vec<_>>().iter()));
                }
            }
            Op::Discard(len) => {
                let expected = usize::from(len).min(model.len());
                assert_eq!(buf.discard(usize::from(len)), expected);
                model.drain(..expected);
            }
            Op::Peek => {
                let before = buf.peek().to_vec();
                assert_eq!(buf.peek(), &before[..]);
            }
            Op::Reset => {
                buf.reset();
                model.clear();
            }
        }

        buf.check_invariants();
        assert!(buf.peek().iter().eq(model.iter()));
    }
}

fuzz_target!(|input: Input| run(input));
