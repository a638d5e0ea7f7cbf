//! Walks a 128-byte [`LinearBuffer`] through the basic lifecycle and prints
//! its status after every step.
//!
//! Two NUL-terminated messages are pushed, inspected in place with `peek`,
//! popped back out in order, and finally a pop against the drained buffer
//! shows that short reads are reported through the count rather than as an
//! error.
//!
//! Run with
//!
//! ```bash
//! cargo run -p linearbuffer --example demo
//! ```

use std::process::ExitCode;

use linearbuffer::LinearBuffer;

fn print_status<S>(buf: &LinearBuffer<S>)
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    println!(
        "Buffer status: Size={}, DataLen={}, SpaceLeft={}",
        buf.capacity(),
        buf.data_len(),
        buf.free_space()
    );
}

fn as_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .to_owned()
}

fn main() -> ExitCode {
    println!("Linear Buffer Demonstration");
    println!("===========================\n");

    let mut storage = [0u8; 128];

    println!("1. Initializing buffer...");
    let mut buf = match LinearBuffer::new(&mut storage[..]) {
        Ok(buf) => buf,
        Err(err) => {
            eprintln!("Failed to initialize buffer: {err}");
            return ExitCode::FAILURE;
        }
    };
    print_status(&buf);
    println!();

    println!("2. Pushing data into buffer...");
    let first = b"Hello, Linear Buffer!\0";
    if let Err(err) = buf.push_exact(first) {
        eprintln!("Failed to push data: {err}");
        return ExitCode::FAILURE;
    }
    print_status(&buf);
    println!();

    println!("3. Peeking at buffer contents...");
    let peeked = buf.peek();
    println!("Peeked data ({} bytes): {:?}", peeked.len(), as_text(peeked));
    print_status(&buf);
    println!();

    println!("4. Pushing more data...");
    let second = b"This is a second message.\0";
    if let Err(err) = buf.push_exact(second) {
        eprintln!("Failed to push second message: {err}");
        return ExitCode::FAILURE;
    }
    print_status(&buf);
    println!();

    let mut out = [0u8; 128];

    println!("5. Popping first message...");
    let popped = buf.pop(Some(&mut out), first.len());
    println!("Popped data: {:?}", as_text(&out[..popped]));
    print_status(&buf);
    println!();

    println!("6. Showing remaining data...");
    let peeked = buf.peek();
    println!("Remaining data ({} bytes): {:?}", peeked.len(), as_text(peeked));
    print_status(&buf);
    println!();

    println!("7. Popping remaining data...");
    let popped = buf.pop(Some(&mut out), second.len());
    println!("Popped data: {:?}", as_text(&out[..popped]));
    print_status(&buf);
    println!();

    println!("8. Trying to pop from empty buffer...");
    if buf.pop(Some(&mut out), 1) == 0 {
        println!("Nothing to pop: buffer is empty");
    } else {
        eprintln!("Unexpected data in a drained buffer!");
        return ExitCode::FAILURE;
    }
    print_status(&buf);
    println!();

    println!("Demo completed successfully!");
    ExitCode::SUCCESS
}
