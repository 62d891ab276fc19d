#![forbid(unsafe_code)]

//! Simulation harness: feeds PS/2 scancode bytes through the adapter and
//! prints the bytes recovered from the serial output waveform.

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tandykey_adapter::{Adapter, AdapterConfig, DEFAULT_BAUD};

#[derive(Debug, Parser)]
#[command(
    about = "Drives a simulated PS/2-to-Tandy keyboard adapter and decodes its serial output"
)]
struct Args {
    /// Scancode bytes in hex, e.g. `12 1c f0 12` for shift-a.
    scancodes: Vec<String>,

    /// Read whitespace-separated hex scancode bytes from stdin instead.
    #[arg(long, conflicts_with = "scancodes")]
    stdin: bool,

    /// Serial baud rate; the Tandy clock rate is derived from the same
    /// tick counter and cannot be set independently.
    #[arg(long, default_value_t = DEFAULT_BAUD)]
    baud: u32,

    /// Dump the per-tick wire trace to stderr.
    #[arg(long)]
    trace: bool,
}

fn parse_hex_bytes<I>(words: I) -> Result<Vec<u8>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| {
            let word = word.as_ref();
            u8::from_str_radix(word.trim_start_matches("0x"), 16)
                .with_context(|| format!("bad scancode byte {word:?}"))
        })
        .collect()
}

/// One captured tick of the three output lines.
#[derive(Debug, Clone, Copy)]
struct TickLevels {
    tandy_clock: bool,
    tandy_data: bool,
    serial: bool,
}

/// Feeds every scancode as an 11-bit frame, polling after each and leaving
/// the transmit engine enough ticks to drain what the frame produced (a
/// frame yields at most two output bytes of 40 ticks each).
fn run_session(adapter: &mut Adapter, scancodes: &[u8]) -> Vec<TickLevels> {
    adapter.set_host_ready(true);
    let mut trace = Vec::new();
    for &code in scancodes {
        adapter.inject_scancode(code);
        adapter.poll();
        for _ in 0..80 {
            adapter.tick();
            trace.push(TickLevels {
                tandy_clock: adapter.tandy_clock(),
                tandy_data: adapter.tandy_data(),
                serial: adapter.serial_tx(),
            });
        }
    }
    trace
}

/// Reconstructs 8-N-1 bytes from the serial line levels: a low tick opens a
/// frame, the eight data bits sit one bit time (4 ticks) apart, and the
/// frame closes on the stop bit.
fn decode_serial(trace: &[TickLevels]) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut i = 0;
    while i < trace.len() {
        if trace[i].serial {
            i += 1;
            continue;
        }
        let mut byte = 0u8;
        for bit in 0..8 {
            if trace[i + 4 * (bit + 1)].serial {
                byte |= 1 << bit;
            }
        }
        bytes.push(byte);
        i += 40;
    }
    bytes
}

fn printable(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        ".".to_string()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scancodes = if args.stdin {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        parse_hex_bytes(input.split_whitespace())?
    } else {
        parse_hex_bytes(&args.scancodes)?
    };
    if scancodes.is_empty() {
        bail!("no scancodes given; pass hex bytes or --stdin");
    }

    let config = AdapterConfig { baud: args.baud };
    println!(
        "baud {} (tick rate {} Hz, timer period {} cycles at 8 MHz)",
        config.baud,
        config.tick_hz(),
        config.timer_period(8_000_000)
    );

    let mut adapter = Adapter::new(config);
    let trace = run_session(&mut adapter, &scancodes);

    if args.trace {
        for (i, t) in trace.iter().enumerate() {
            eprintln!(
                "{i:6}  clk {}  dta {}  txd {}",
                t.tandy_clock as u8, t.tandy_data as u8, t.serial as u8
            );
        }
    }

    for byte in decode_serial(&trace) {
        println!("{byte:#04x}  {}", printable(byte));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_words_parse_with_and_without_prefix() {
        assert_eq!(
            parse_hex_bytes(["12", "0x1c", "F0"]).unwrap(),
            vec![0x12, 0x1C, 0xF0]
        );
        assert!(parse_hex_bytes(["zz"]).is_err());
        assert!(parse_hex_bytes(["100"]).is_err());
    }

    #[test]
    fn session_decodes_a_shifted_letter() {
        let mut adapter = Adapter::default();
        let trace = run_session(&mut adapter, &[0x12, 0x1C, 0xF0, 0x12]);
        assert_eq!(decode_serial(&trace), vec![0x41]);
    }

    #[test]
    fn session_decodes_an_alt_function_key_pair() {
        let mut adapter = Adapter::default();
        let trace = run_session(&mut adapter, &[0x11, 0x05]);
        assert_eq!(decode_serial(&trace), vec![0xFC, b'1']);
    }
}
