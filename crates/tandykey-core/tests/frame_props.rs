use proptest::prelude::*;
use tandykey_core::ps2::{frame_bits, Ps2Receiver};

fn feed(rx: &mut Ps2Receiver, levels: &[bool]) -> Vec<u8> {
    levels.iter().filter_map(|&l| rx.clock_edge(l)).collect()
}

proptest! {
    /// Every well-framed 11-bit frame decodes to exactly its 8 data bits,
    /// whatever the parity bit says.
    #[test]
    fn valid_frames_decode_regardless_of_parity(byte: u8, parity: bool) {
        let mut rx = Ps2Receiver::new();
        let mut levels = frame_bits(byte);
        levels[9] = parity;
        prop_assert_eq!(feed(&mut rx, &levels), vec![byte]);
    }

    /// A frame with a low stop bit produces nothing, and the very next valid
    /// frame still decodes: completion always clears the window.
    #[test]
    fn malformed_frame_is_dropped_and_framing_resynchronizes(bad: u8, good: u8) {
        let mut rx = Ps2Receiver::new();
        let mut levels = frame_bits(bad);
        levels[10] = false;
        prop_assert_eq!(feed(&mut rx, &levels), vec![]);
        prop_assert_eq!(feed(&mut rx, &frame_bits(good)), vec![good]);
    }

    /// Back-to-back frames decode independently.
    #[test]
    fn consecutive_frames_decode_in_order(bytes: Vec<u8>) {
        let mut rx = Ps2Receiver::new();
        let mut out = Vec::new();
        for &b in &bytes {
            out.extend(feed(&mut rx, &frame_bits(b)));
        }
        prop_assert_eq!(out, bytes);
    }
}
