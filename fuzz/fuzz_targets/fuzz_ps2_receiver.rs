#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use tandykey_core::Ps2Receiver;

/// Upper bound on the number of clock edges per testcase.
const MAX_EDGES: usize = 4096;

#[derive(Debug)]
struct Input {
    edges: Vec<bool>,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=MAX_EDGES)?;
        let mut edges = Vec::with_capacity(len);
        for _ in 0..len {
            edges.push(u.arbitrary()?);
        }
        Ok(Self { edges })
    }
}

fn run(input: &Input) -> Vec<u8> {
    let mut rx = Ps2Receiver::new();
    let mut out = Vec::new();
    for &level in &input.edges {
        if let Some(byte) = rx.clock_edge(level) {
            out.push(byte);
        }
    }
    // A frame needs 11 edges, so arbitrary edge soup can never produce more
    // bytes than that.
    assert!(out.len() <= input.edges.len() / 11);
    out
}

fuzz_target!(|input: Input| {
    let a = run(&input);
    let b = run(&input);
    assert_eq!(a, b);
});
