//! Fixed scancode-to-output table.
//!
//! Key codes are 11 bits: bit 8 is the `0xE0` extended-prefix flag, the low
//! 8 bits the scancode itself, so extended and plain keys never collide.
//! Each entry carries one output byte per modifier context; resolution
//! priority and the caps-lock letter swap live in [`crate::translate`].

/// Byte emitted for Alt + function key; the host expects the key's ASCII
/// digit to follow it immediately.
pub const ALT_FKEY_SENTINEL: u8 = 0xFC;

pub const LEFT_SHIFT: u16 = 0x012;
pub const RIGHT_SHIFT: u16 = 0x059;
pub const LEFT_CTRL: u16 = 0x014;
pub const RIGHT_CTRL: u16 = 0x114;
pub const LEFT_ALT: u16 = 0x011;
pub const RIGHT_ALT: u16 = 0x111;
pub const CAPS_LOCK: u16 = 0x058;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// A–Z: caps lock swaps the shift and plain columns.
    Letter,
    /// Keys whose output is a control code in every context.
    Control,
    /// Main-area digits and punctuation.
    Symbol,
    Keypad,
    /// F1–F10: Alt resolves to [`ALT_FKEY_SENTINEL`] followed by `digit`.
    Function { digit: u8 },
}

#[derive(Debug, Clone, Copy)]
pub struct MapEntry {
    pub code: u16,
    pub class: KeyClass,
    pub ctrl: u8,
    pub shift: u8,
    pub alt: u8,
    pub plain: u8,
}

const fn letter(code: u16, upper: u8) -> MapEntry {
    MapEntry {
        code,
        class: KeyClass::Letter,
        ctrl: upper - 0x40,
        shift: upper,
        alt: upper + 0x80,
        plain: upper + 0x20,
    }
}

const fn control(code: u16, byte: u8) -> MapEntry {
    MapEntry {
        code,
        class: KeyClass::Control,
        ctrl: byte,
        shift: byte,
        alt: byte,
        plain: byte,
    }
}

const fn symbol(code: u16, ctrl: u8, shift: u8, alt: u8, plain: u8) -> MapEntry {
    MapEntry {
        code,
        class: KeyClass::Symbol,
        ctrl,
        shift,
        alt,
        plain,
    }
}

const fn keypad(code: u16, byte: u8) -> MapEntry {
    MapEntry {
        code,
        class: KeyClass::Keypad,
        ctrl: byte,
        shift: byte,
        alt: byte,
        plain: byte,
    }
}

const fn fkey(code: u16, digit: u8, byte: u8) -> MapEntry {
    MapEntry {
        code,
        class: KeyClass::Function { digit },
        ctrl: byte,
        shift: byte,
        alt: ALT_FKEY_SENTINEL,
        plain: byte,
    }
}

pub static KEYMAP: [MapEntry; 83] = [
    letter(0x01C, b'A'),
    letter(0x032, b'B'),
    letter(0x021, b'C'),
    letter(0x023, b'D'),
    letter(0x024, b'E'),
    letter(0x02B, b'F'),
    letter(0x034, b'G'),
    letter(0x033, b'H'),
    letter(0x043, b'I'),
    letter(0x03B, b'J'),
    letter(0x042, b'K'),
    letter(0x04B, b'L'),
    letter(0x03A, b'M'),
    letter(0x031, b'N'),
    letter(0x044, b'O'),
    letter(0x04D, b'P'),
    letter(0x015, b'Q'),
    letter(0x02D, b'R'),
    letter(0x01B, b'S'),
    letter(0x02C, b'T'),
    letter(0x03C, b'U'),
    letter(0x02A, b'V'),
    letter(0x01D, b'W'),
    letter(0x022, b'X'),
    letter(0x035, b'Y'),
    letter(0x01A, b'Z'),
    control(0x05A, 0x0D), // enter
    control(0x029, 0x20), // space
    control(0x066, 0x08), // backspace
    control(0x00D, 0x09), // tab
    control(0x076, 0x1B), // esc
    //     code   ctrl  shift alt   plain
    symbol(0x045, 0x7C, 0x29, 0xB0, 0x30), // 0 )
    symbol(0x016, 0xA1, 0x21, 0xB1, 0x31), // 1 !
    symbol(0x01E, 0xC0, 0x40, 0xB2, 0x32), // 2 @
    symbol(0x026, 0xA3, 0x23, 0xB3, 0x33), // 3 #
    symbol(0x025, 0xA4, 0x24, 0xB4, 0x34), // 4 $
    symbol(0x02E, 0xA5, 0x25, 0xB5, 0x35), // 5 %
    symbol(0x036, 0x7E, 0x5E, 0xB6, 0x36), // 6 ^
    symbol(0x03D, 0xA6, 0x26, 0xB7, 0x37), // 7 &
    symbol(0x03E, 0xAA, 0x2A, 0xB8, 0x38), // 8 *
    symbol(0x046, 0x5C, 0x28, 0xB9, 0x39), // 9 (
    symbol(0x052, 0xA2, 0x22, 0xA7, 0x27), // ' "
    symbol(0x041, 0xBC, 0x3C, 0xAC, 0x2C), // , <
    symbol(0x04E, 0x7F, 0x5F, 0xAD, 0x2D), // - _
    symbol(0x049, 0xBE, 0x3E, 0xAE, 0x2E), // . >
    symbol(0x04A, 0xBF, 0x3F, 0xAF, 0x2F), // / ?
    symbol(0x04C, 0xBA, 0x3A, 0xBB, 0x3B), // ; :
    symbol(0x055, 0xAB, 0x2B, 0xBD, 0x3D), // = +
    symbol(0x054, 0xDB, 0x7B, 0xFB, 0x5B), // [ {
    symbol(0x05D, 0xDC, 0x7C, 0xFC, 0x5C), // \ |
    symbol(0x05B, 0xDD, 0x7D, 0xFD, 0x5D), // ] }
    keypad(0x070, b'0'),
    keypad(0x069, b'1'),
    keypad(0x072, b'2'),
    keypad(0x07A, b'3'),
    keypad(0x06B, b'4'),
    keypad(0x073, b'5'),
    keypad(0x074, b'6'),
    keypad(0x06C, b'7'),
    keypad(0x075, b'8'),
    keypad(0x07D, b'9'),
    keypad(0x07C, b'*'),
    keypad(0x079, b'+'),
    keypad(0x07B, b'-'),
    keypad(0x071, b'.'),
    keypad(0x14A, b'/'),
    keypad(0x15A, 0x0D), // keypad enter
    control(0x16B, 0x1C), // left arrow
    control(0x174, 0x1D), // right arrow
    control(0x175, 0x1E), // up arrow
    control(0x172, 0x1F), // down arrow
    control(0x169, 0x03), // end, sent as break
    control(0x07E, 0x00), // scroll lock
    fkey(0x009, b'0', 0x00), // F10
    fkey(0x005, b'1', 0x01), // F1
    fkey(0x006, b'2', 0x02), // F2
    fkey(0x004, b'3', 0x04), // F3
    fkey(0x00C, b'4', 0x0C), // F4
    fkey(0x003, b'5', 0x15), // F5
    fkey(0x00B, b'6', 0x10), // F6
    fkey(0x083, b'7', 0x0E), // F7
    fkey(0x00A, b'8', 0x13), // F8
    fkey(0x001, b'9', 0x1A), // F9
];

pub fn lookup(code: u16) -> Option<&'static MapEntry> {
    KEYMAP.iter().find(|entry| entry.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, a) in KEYMAP.iter().enumerate() {
            for b in &KEYMAP[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate code {:#05x}", a.code);
            }
        }
    }

    #[test]
    fn modifier_codes_are_not_in_the_table() {
        for code in [
            LEFT_SHIFT, RIGHT_SHIFT, LEFT_CTRL, RIGHT_CTRL, LEFT_ALT, RIGHT_ALT, CAPS_LOCK,
        ] {
            assert!(lookup(code).is_none(), "{code:#05x} should not map");
        }
    }

    #[test]
    fn function_key_digits_cover_zero_through_nine() {
        let mut digits: Vec<u8> = KEYMAP
            .iter()
            .filter_map(|e| match e.class {
                KeyClass::Function { digit } => Some(digit),
                _ => None,
            })
            .collect();
        digits.sort_unstable();
        assert_eq!(digits, (b'0'..=b'9').collect::<Vec<_>>());
    }

    #[test]
    fn only_function_keys_resolve_alt_to_the_sentinel() {
        // Alt+backslash also produces 0xFC on the wire; the digit suffix must
        // still be reserved for the function keys.
        for entry in &KEYMAP {
            if entry.alt == ALT_FKEY_SENTINEL {
                match entry.class {
                    KeyClass::Function { .. } => {}
                    KeyClass::Symbol => assert_eq!(entry.code, 0x05D),
                    other => panic!("unexpected sentinel on {other:?}"),
                }
            }
        }
    }

    #[test]
    fn letter_columns_follow_ascii() {
        let a = lookup(0x01C).unwrap();
        assert_eq!((a.ctrl, a.shift, a.alt, a.plain), (0x01, 0x41, 0xC1, 0x61));
        let z = lookup(0x01A).unwrap();
        assert_eq!((z.ctrl, z.shift, z.alt, z.plain), (0x1A, 0x5A, 0xDA, 0x7A));
    }
}
