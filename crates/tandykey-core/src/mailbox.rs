use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Single-slot handoff from the PS/2 edge context to the polling loop.
///
/// A byte posted before the previous one was taken overwrites it; the
/// producer never blocks. At most one byte is ever pending. One producer
/// and one consumer context only.
#[derive(Debug, Default)]
pub struct Mailbox {
    slot: AtomicU8,
    ready: AtomicBool,
}

impl Mailbox {
    pub fn new() -> Self {
        Self {
            slot: AtomicU8::new(0),
            ready: AtomicBool::new(false),
        }
    }

    /// Posts a byte, replacing any unconsumed one.
    pub fn post(&self, byte: u8) {
        self.slot.store(byte, Ordering::Relaxed);
        self.ready.store(true, Ordering::Release);
    }

    /// Takes the pending byte, if any, clearing the ready flag.
    pub fn take(&self) -> Option<u8> {
        if self.ready.swap(false, Ordering::Acquire) {
            Some(self.slot.load(Ordering::Relaxed))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_on_empty_returns_none() {
        let mb = Mailbox::new();
        assert_eq!(mb.take(), None);
    }

    #[test]
    fn posted_byte_is_taken_once() {
        let mb = Mailbox::new();
        mb.post(0x1C);
        assert_eq!(mb.take(), Some(0x1C));
        assert_eq!(mb.take(), None);
    }

    #[test]
    fn second_post_overwrites_an_unconsumed_byte() {
        let mb = Mailbox::new();
        mb.post(0x1C);
        mb.post(0x32);
        assert_eq!(mb.take(), Some(0x32));
        assert_eq!(mb.take(), None);
    }
}
