//! Per-MCU pinout resolution
//!
//! Maps a pin index to its board-designated function using an externally
//! supplied table keyed by MCU identifier. Independent of the prober; the
//! two are only joined by pin index at the reporting boundary.

pub mod table;

pub use table::{MAX_PINOUT_ENTRIES, PinoutTable, UNKNOWN_FUNCTION};

/// Longest label `pin_label` can produce ("GPIO255")
pub const MAX_LABEL_LEN: usize = 8;

/// Extract the MCU identifier from a platform-reported machine string
///
/// Board variants append descriptive suffixes after the core identifier
/// ("ESP32 rev3", "RP2350 Pico 2 W"); only the token before the first
/// whitespace is the table lookup key.
pub fn normalize_mcu_id(machine: &str) -> &str {
    machine.split_whitespace().next().unwrap_or("")
}

/// Build the table label for a pin index
///
/// The scheme is fixed: `GPIO{index}`.
pub fn pin_label(pin: u8) -> heapless::String<MAX_LABEL_LEN> {
    let mut label = heapless::String::new();
    // Cannot overflow: "GPIO" plus at most three digits fits the capacity.
    let _ = core::fmt::write(&mut label, format_args!("GPIO{}", pin));
    label
}
