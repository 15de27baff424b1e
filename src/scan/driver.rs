//! Scan driver
//!
//! Iterates every pin index the board declares, probes each one, classifies
//! the readings, and joins in the pinout resolution when a table was
//! supplied. One bad pin never stops the scan.

use heapless::Vec;

use crate::log_warn;
use crate::pinout::{PinoutTable, normalize_mcu_id};
use crate::platform::traits::Platform;
use crate::platform::traits::SystemInfo;

use super::classify::{Verdict, classify};
use super::probe::{ProbeResult, probe};

/// Upper bound on pin indices a single scan can record
pub const MAX_SCAN_PINS: usize = 64;

/// Everything the scan produced for one pin index
#[derive(Debug, Clone, Copy)]
pub struct ScanRecord<'t> {
    /// Pin index the record belongs to
    pub pin: u8,
    /// Raw probe outcome
    pub result: ProbeResult,
    /// Verdict over the observations; `None` when the pin was unavailable
    pub verdict: Option<Verdict>,
    /// Resolved pin function; `None` when no pinout table was supplied
    pub function: Option<&'t str>,
}

/// Probe and resolve every pin the board declares
///
/// The loop bound is the board descriptor's `pin_count`, an explicit
/// configuration value. Indices the package does not implement come back as
/// unavailable records; the scan always runs to completion.
pub fn scan_all<'t, P: Platform>(
    platform: &mut P,
    table: Option<&PinoutTable<'t>>,
) -> Vec<ScanRecord<'t>, MAX_SCAN_PINS> {
    let mut pin_count = platform.board().pin_count;
    if usize::from(pin_count) > MAX_SCAN_PINS {
        log_warn!(
            "board declares {} pins, scanning first {}",
            pin_count,
            MAX_SCAN_PINS
        );
        pin_count = MAX_SCAN_PINS as u8;
    }

    // Resolve functions up front: the machine string borrows the platform,
    // which the probe loop needs mutably.
    let mut functions: Vec<Option<&'t str>, MAX_SCAN_PINS> = Vec::new();
    {
        let machine = platform.sysinfo().machine().unwrap_or("");
        let mcu_id = normalize_mcu_id(machine);
        for pin in 0..pin_count {
            let _ = functions.push(table.map(|t| t.resolve(mcu_id, pin)));
        }
    }

    let mut records = Vec::new();
    for pin in 0..pin_count {
        let result = probe(platform, pin);
        let verdict = match &result {
            ProbeResult::Observed(observations) => Some(classify(observations)),
            ProbeResult::Unavailable(_) => None,
        };
        let _ = records.push(ScanRecord {
            pin,
            result,
            verdict,
            function: functions[usize::from(pin)],
        });
    }
    records
}
