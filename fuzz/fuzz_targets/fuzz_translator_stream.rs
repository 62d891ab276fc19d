#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use tandykey_core::keymap::ALT_FKEY_SENTINEL;
use tandykey_core::{Translator, TxQueue};

/// Upper bound on the number of raw bytes per testcase.
const MAX_BYTES: usize = 2048;

/// Drain a couple of bytes after each write, the way the transmit tick
/// would, so both the full-queue and the flowing cases get exercised.
const DRAIN_POPS_PER_BYTE: usize = 2;

#[derive(Debug)]
struct Input {
    bytes: Vec<u8>,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=MAX_BYTES)?;
        let mut bytes = u.bytes(len)?.to_vec();
        // Alt+backslash legitimately emits a bare 0xFC; keep backslash out
        // of the stream so every sentinel in the output is a function-key
        // prefix that must carry its digit.
        for b in &mut bytes {
            if *b == 0x5D {
                *b = 0x00;
            }
        }
        Ok(Self { bytes })
    }
}

fn run(input: &Input) -> Vec<u8> {
    let queue = TxQueue::new();
    let mut translator = Translator::new();
    let mut out = Vec::new();
    for &b in &input.bytes {
        translator.consume(b, &queue);
        for _ in 0..DRAIN_POPS_PER_BYTE {
            if let Some(popped) = queue.try_pop() {
                out.push(popped);
            }
        }
    }
    while let Some(popped) = queue.try_pop() {
        out.push(popped);
    }

    for (i, &b) in out.iter().enumerate() {
        if b == ALT_FKEY_SENTINEL {
            assert!(
                matches!(out.get(i + 1), Some(d) if d.is_ascii_digit()),
                "dangling sentinel at {i}"
            );
        }
    }
    out
}

fuzz_target!(|input: Input| {
    let a = run(&input);
    let b = run(&input);
    assert_eq!(a, b);
});
