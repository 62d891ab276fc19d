#![forbid(unsafe_code)]

pub mod keymap;
pub mod mailbox;
pub mod ps2;
pub mod ring;
pub mod translate;
pub mod tx;

pub use mailbox::Mailbox;
pub use ps2::Ps2Receiver;
pub use ring::TxQueue;
pub use translate::{Modifiers, Translator};
pub use tx::TransmitEngine;
