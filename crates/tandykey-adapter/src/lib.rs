#![forbid(unsafe_code)]

//! Wires the protocol components into one adapter with the three execution
//! contexts the hardware provides: the PS/2 clock-edge interrupt, the
//! periodic transmit tick, and the polled main loop.

mod leds;

pub use leds::StatusLeds;

use tandykey_core::ps2::frame_bits;
use tandykey_core::{Mailbox, Ps2Receiver, TransmitEngine, Translator, TxQueue};

/// Nominal serial baud rate. Kept within the PS/2 clock range so the shared
/// timing also suits the Tandy side; 4x oversampling at this rate is about
/// the practical ceiling for an 8 MHz microcontroller.
pub const DEFAULT_BAUD: u32 = 14_400;

/// Compile-time-style configuration: one baud rate, from which every other
/// timing is derived. The Tandy clock rate and the serial baud co-vary by
/// construction; they cannot be configured independently.
#[derive(Debug, Clone, Copy)]
pub struct AdapterConfig {
    pub baud: u32,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self { baud: DEFAULT_BAUD }
    }
}

impl AdapterConfig {
    /// Transmit tick rate: 4 ticks per bit time.
    pub fn tick_hz(&self) -> u32 {
        self.baud * 4
    }

    /// Timer reload value for a given CPU clock, the value the firmware
    /// would program into its tick timer.
    pub fn timer_period(&self, cpu_hz: u32) -> u32 {
        cpu_hz / self.tick_hz()
    }
}

/// The PS/2-to-Tandy keyboard adapter.
///
/// Entry points map one-to-one onto the hardware's contexts:
/// [`Adapter::ps2_clock_edge`] is the edge interrupt, [`Adapter::tick`] the
/// timer interrupt, [`Adapter::poll`] one pass of the main loop. Output pin
/// levels are exposed as getters; the host's ready/busy handshake line is an
/// input set via [`Adapter::set_host_ready`].
#[derive(Debug)]
pub struct Adapter {
    receiver: Ps2Receiver,
    mailbox: Mailbox,
    translator: Translator,
    queue: TxQueue,
    engine: TransmitEngine,
    leds: StatusLeds,
    host_ready: bool,
}

impl Adapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            receiver: Ps2Receiver::new(),
            mailbox: Mailbox::new(),
            translator: Translator::new(),
            queue: TxQueue::new(),
            engine: TransmitEngine::new(),
            leds: StatusLeds::new(&config),
            host_ready: false,
        }
    }

    /// Falling edge on the PS/2 clock line; `data_high` is the data-line
    /// level sampled at the edge.
    pub fn ps2_clock_edge(&mut self, data_high: bool) {
        if let Some(byte) = self.receiver.clock_edge(data_high) {
            self.mailbox.post(byte);
        }
    }

    /// Feeds a whole 11-bit frame for `scancode`, edge by edge.
    pub fn inject_scancode(&mut self, scancode: u8) {
        for level in frame_bits(scancode) {
            self.ps2_clock_edge(level);
        }
    }

    /// One pass of the main loop: consume a pending mailbox byte, if any.
    pub fn poll(&mut self) {
        if let Some(byte) = self.mailbox.take() {
            self.translator.consume(byte, &self.queue);
        }
    }

    /// One transmit-timer tick at 4x baud.
    pub fn tick(&mut self) {
        let was_idle = self.engine.is_idle();
        self.engine.tick(&self.queue, self.host_ready);
        let is_idle = self.engine.is_idle();
        if was_idle != is_idle {
            self.leds.set_activity(!is_idle);
        }
        self.leds.tick(self.translator.caps_lock());
    }

    /// Level of the host's ready/busy handshake line.
    pub fn set_host_ready(&mut self, ready: bool) {
        self.host_ready = ready;
    }

    pub fn tandy_clock(&self) -> bool {
        self.engine.tandy_clock()
    }

    pub fn tandy_data(&self) -> bool {
        self.engine.tandy_data()
    }

    pub fn serial_tx(&self) -> bool {
        self.engine.serial_tx()
    }

    pub fn activity_led(&self) -> bool {
        self.leds.activity()
    }

    pub fn heartbeat_led(&self) -> bool {
        self.leds.heartbeat()
    }

    pub fn caps_lock(&self) -> bool {
        self.translator.caps_lock()
    }

    /// Translated bytes waiting for transmission.
    pub fn pending_output_len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for Adapter {
    fn default() -> Self {
        Self::new(AdapterConfig::default())
    }
}
