//! Scancode-to-output translation.

use crate::keymap::{self, KeyClass, MapEntry, ALT_FKEY_SENTINEL};
use crate::ring::TxQueue;

/// Marks the following scancode as a key release.
pub const RELEASE_PREFIX: u8 = 0xF0;
/// Marks the following scancode as an extended key.
pub const EXTENDED_PREFIX: u8 = 0xE0;

/// Modifier-key state.
///
/// Left and right instances of each modifier are tracked separately so that
/// releasing one side leaves the other held. Caps lock keeps a second flag,
/// `press_latched`, set on the press that toggles it and cleared only on
/// release: typematic auto-repeat of a held caps key re-delivers the press
/// code, and the latch keeps those repeats from toggling again.
#[derive(Debug, Default, Clone, Copy)]
pub struct Modifiers {
    pub left_shift: bool,
    pub right_shift: bool,
    pub left_ctrl: bool,
    pub right_ctrl: bool,
    pub left_alt: bool,
    pub right_alt: bool,
    pub caps_lock: bool,
    press_latched: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift(&self) -> bool {
        self.left_shift || self.right_shift
    }

    pub fn ctrl(&self) -> bool {
        self.left_ctrl || self.right_ctrl
    }

    pub fn alt(&self) -> bool {
        self.left_alt || self.right_alt
    }

    /// Applies a modifier-key press. Returns false if `code` is not a
    /// modifier.
    fn press(&mut self, code: u16) -> bool {
        match code {
            keymap::LEFT_SHIFT => self.left_shift = true,
            keymap::RIGHT_SHIFT => self.right_shift = true,
            keymap::LEFT_CTRL => self.left_ctrl = true,
            keymap::RIGHT_CTRL => self.right_ctrl = true,
            keymap::LEFT_ALT => self.left_alt = true,
            keymap::RIGHT_ALT => self.right_alt = true,
            keymap::CAPS_LOCK => {
                if !self.press_latched {
                    self.caps_lock = !self.caps_lock;
                    self.press_latched = true;
                }
            }
            _ => return false,
        }
        true
    }

    /// Applies a modifier-key release. Returns false if `code` is not a
    /// modifier.
    fn release(&mut self, code: u16) -> bool {
        match code {
            keymap::LEFT_SHIFT => self.left_shift = false,
            keymap::RIGHT_SHIFT => self.right_shift = false,
            keymap::LEFT_CTRL => self.left_ctrl = false,
            keymap::RIGHT_CTRL => self.right_ctrl = false,
            keymap::LEFT_ALT => self.left_alt = false,
            keymap::RIGHT_ALT => self.right_alt = false,
            keymap::CAPS_LOCK => self.press_latched = false,
            _ => return false,
        }
        true
    }
}

/// Stateful decoder from validated raw scancode bytes to output bytes.
///
/// Consumes one byte per pass and pushes resolved output onto the transmit
/// queue. Unrecognized codes, releases of non-modifier keys and queue-full
/// drops are all silent; there is no error path.
#[derive(Debug, Default)]
pub struct Translator {
    mods: Modifiers,
    prev: u8,
    prev2: u8,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.mods
    }

    pub fn caps_lock(&self) -> bool {
        self.mods.caps_lock
    }

    /// Processes one raw byte from the mailbox.
    pub fn consume(&mut self, byte: u8, out: &TxQueue) {
        if byte != RELEASE_PREFIX && byte != EXTENDED_PREFIX {
            // A release of an extended key arrives as E0 F0 xx, so when the
            // immediately preceding byte is the release prefix the extended
            // flag has to be read from one byte further back.
            let extended = if self.prev == RELEASE_PREFIX {
                self.prev2 == EXTENDED_PREFIX
            } else {
                self.prev == EXTENDED_PREFIX
            };
            let release = self.prev == RELEASE_PREFIX;
            let code = (extended as u16) << 8 | byte as u16;

            if release {
                self.mods.release(code);
            } else if let Some(entry) = keymap::lookup(code) {
                self.emit(entry, out);
            } else {
                self.mods.press(code);
            }
        }

        self.prev2 = self.prev;
        self.prev = byte;
    }

    fn emit(&self, entry: &MapEntry, out: &TxQueue) {
        let resolved = self.resolve(entry);
        if let KeyClass::Function { digit } = entry.class {
            if resolved == ALT_FKEY_SENTINEL {
                // Sentinel and digit stand or fall together; a full queue
                // must never leave the prefix without its digit.
                out.try_push_pair(resolved, digit);
                return;
            }
        }
        out.try_push(resolved);
    }

    fn resolve(&self, entry: &MapEntry) -> u8 {
        let caps_swap = self.mods.caps_lock && entry.class == KeyClass::Letter;
        if self.mods.ctrl() {
            entry.ctrl
        } else if self.mods.alt() {
            entry.alt
        } else if self.mods.shift() {
            if caps_swap {
                entry.plain
            } else {
                entry.shift
            }
        } else if caps_swap {
            entry.shift
        } else {
            entry.plain
        }
    }
}
