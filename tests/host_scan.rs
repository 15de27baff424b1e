//! End-to-end scan scenarios against the mock platform.
//!
//! Build with `--features mock`; without it this file compiles to nothing,
//! the same way the embedded integration tests are feature-gated.

#![cfg(feature = "mock")]

use pinscan::pinout::{PinoutTable, UNKNOWN_FUNCTION, normalize_mcu_id};
use pinscan::platform::mock::{MockPlatform, PinBehavior};
use pinscan::platform::traits::Platform;
use pinscan::report;
use pinscan::scan::{ProbeFailure, ProbeResult, Verdict, scan_all};

const PINOUTS: &str = include_str!("../data/pinouts.ini");

#[test]
fn board_variant_suffix_does_not_break_resolution() {
    // Scenario A from the design notes: the machine string carries a
    // variant suffix, the table is keyed by the bare MCU identifier.
    let table = PinoutTable::parse("[ESP32]\nGPIO2 = Boot strap\n");
    let mcu_id = normalize_mcu_id("ESP32 rev3");
    assert_eq!(table.resolve(mcu_id, 2), "Boot strap");
    assert_eq!(table.resolve(mcu_id, 5), UNKNOWN_FUNCTION);
}

#[test]
fn full_scan_joins_probe_and_pinout_by_index() {
    let table = PinoutTable::parse("[MOCK]\nGPIO0 = UART0 TX\nGPIO7 = Status LED\n");
    let mut platform = MockPlatform::new().with_behavior(1, PinBehavior::StuckLow);

    let records = scan_all(&mut platform, Some(&table));
    assert_eq!(records.len(), usize::from(platform.board().pin_count));

    assert_eq!(records[0].verdict, Some(Verdict::Nominal));
    assert_eq!(records[0].function, Some("UART0 TX"));

    // Anomalous readings are reported verbatim, not just as a failure.
    assert_eq!(records[1].verdict, Some(Verdict::Anomalous));
    match records[1].result {
        ProbeResult::Observed(obs) => {
            assert_eq!(obs.pull_up, Some(false));
            assert_eq!(obs.pull_down, Some(false));
            assert_eq!(obs.drive_high, Some(false));
            assert_eq!(obs.drive_low, Some(false));
        }
        ProbeResult::Unavailable(failure) => panic!("unexpected failure: {failure:?}"),
    }

    assert_eq!(records[7].function, Some("Status LED"));
    assert_eq!(records[2].function, Some(UNKNOWN_FUNCTION));
}

#[test]
fn scan_survives_a_board_declaring_more_pins_than_exist() {
    // Scenario C: the loop bound covers indices the package rejects.
    let mut platform = MockPlatform::new().with_pin_count(40);
    let records = scan_all(&mut platform, None);
    assert_eq!(records.len(), 40);
    assert_eq!(
        records[39].result,
        ProbeResult::Unavailable(ProbeFailure::InvalidPin)
    );
    assert_eq!(records[0].verdict, Some(Verdict::Nominal));
}

#[test]
fn missing_pinout_source_resolves_everything_unknown() {
    // Scenario D: no pinout resource behaves as an empty table.
    let table = PinoutTable::from_source(None);
    let mut platform = MockPlatform::new();
    let records = scan_all(&mut platform, Some(&table));
    assert!(records.iter().all(|r| r.function == Some(UNKNOWN_FUNCTION)));
}

#[test]
fn shipped_pinout_data_parses_and_resolves() {
    let table = PinoutTable::parse(PINOUTS);
    assert!(!table.is_empty());
    assert_eq!(table.resolve("RP2350", 0), "UART0 TX");
    assert_eq!(table.resolve("ESP32", 2), "Boot strap / on-board LED");
    assert_eq!(table.resolve("RP2350", 15), UNKNOWN_FUNCTION);
}

#[test]
fn report_covers_mixed_outcomes() {
    let table = PinoutTable::parse("[MOCK]\nGPIO0 = UART0 TX\n");
    let mut platform = MockPlatform::new()
        .with_pin_count(31)
        .with_behavior(2, PinBehavior::StuckHigh)
        .with_behavior(3, PinBehavior::NoPullControl);

    let mut out = heapless::String::<4096>::new();
    report::write_system_report(&mut out, platform.sysinfo()).unwrap();
    let records = scan_all(&mut platform, Some(&table));
    report::write_scan_report(&mut out, &records).unwrap();

    assert!(out.contains("Machine: MOCK rev0"));
    assert!(out.contains("Pin 0 [UART0 TX]: PULL_UP=1 PULL_DOWN=0 OUT_HIGH=1 OUT_LOW=0 -> nominal"));
    assert!(out.contains("Pin 2 [Unknown]: PULL_UP=1 PULL_DOWN=1 OUT_HIGH=1 OUT_LOW=1 -> anomalous"));
    assert!(out.contains("Pin 3 [Unknown]: PULL_UP=- PULL_DOWN=- OUT_HIGH=1 OUT_LOW=0 -> indeterminate"));
    assert!(out.contains("Pin 30 [Unknown]: unavailable (invalid pin)"));
    assert!(out.contains("31 pins scanned: 28 nominal, 1 anomalous, 1 indeterminate, 1 unavailable"));
}
