//! Dual-protocol transmit engine.
//!
//! One tick counter and one shift register drive both output encodings, so
//! their bit boundaries stay aligned by construction. The tick rate is 4x
//! the serial baud rate; a byte occupies 40 ticks (10 bit times of 4 ticks:
//! start, 8 data bits LSB first, stop / end-of-data).

use crate::ring::TxQueue;

/// Ticks per transmitted byte.
const TICKS_PER_BYTE: u8 = 40;

/// First tick of the end-of-data bit time.
const END_OF_DATA_TICK: u8 = 36;

/// Tick-driven bit-banger for the Tandy keyboard wire format and an 8-N-1
/// serial line.
///
/// The Tandy side presents each data bit, pulses the clock high, then
/// re-asserts data high while the clock falls; the receiving flip-flop
/// latches the clock level on that data rise, which is how the final
/// clock-low data pulse (ticks 36..39) signals end-of-data. The serial side
/// holds its line at the bit value for the full 4-tick bit time derived
/// from the same counter.
#[derive(Debug)]
pub struct TransmitEngine {
    tick: u8,
    shifter: u8,
    tandy_clock: bool,
    tandy_data: bool,
    serial_tx: bool,
}

impl TransmitEngine {
    pub fn new() -> Self {
        Self {
            tick: 0,
            shifter: 0,
            // Idle levels: Tandy clock low, Tandy data high, serial mark.
            tandy_clock: false,
            tandy_data: true,
            serial_tx: true,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.tick == 0
    }

    pub fn tandy_clock(&self) -> bool {
        self.tandy_clock
    }

    pub fn tandy_data(&self) -> bool {
        self.tandy_data
    }

    pub fn serial_tx(&self) -> bool {
        self.serial_tx
    }

    /// Advances the engine by one tick.
    ///
    /// In Idle, a byte is started only when the queue has one and
    /// `host_ready` is true; otherwise the engine waits, re-checking every
    /// tick with no timeout. Once started, a byte always runs its full 40
    /// ticks.
    pub fn tick(&mut self, queue: &TxQueue, host_ready: bool) {
        if self.tick == 0 {
            if host_ready {
                if let Some(byte) = queue.try_pop() {
                    self.shifter = byte;
                    self.serial_tx = false; // start bit
                    self.tick = 1;
                }
            }
            return;
        }

        if self.tick < 4 {
            // Start bit continues on the serial side; the Tandy side idles
            // one bit time before its first data bit.
            self.tick += 1;
            return;
        }

        match self.tick & 3 {
            0 => {
                if self.tick < END_OF_DATA_TICK {
                    let bit = self.shifter & 1 != 0;
                    self.tandy_data = bit;
                    self.serial_tx = bit;
                    self.shifter >>= 1;
                } else {
                    // End-of-data pulse begins; serial stop bit.
                    self.tandy_data = false;
                    self.serial_tx = true;
                }
            }
            1 => {
                // The clock stays low through end-of-data.
                if self.tick < END_OF_DATA_TICK {
                    self.tandy_clock = true;
                }
            }
            2 => {
                // Data returns high, latching the current clock level into
                // the host's end-of-data flip-flop: clock high means data
                // bit, clock low means end-of-data.
                self.tandy_data = true;
            }
            3 => {
                self.tandy_clock = false;
            }
            _ => unreachable!(),
        }

        self.tick += 1;
        if self.tick >= TICKS_PER_BYTE {
            self.tick = 0;
        }
    }
}

impl Default for TransmitEngine {
    fn default() -> Self {
        Self::new()
    }
}
