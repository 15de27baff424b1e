//! Pin capability scanning
//!
//! The prober drives one pin through the fixed four-step electrical
//! sequence, the classifier turns the readings into a verdict, and the
//! driver runs both across every pin the board declares.

pub mod classify;
pub mod driver;
pub mod probe;

pub use classify::{Verdict, classify};
pub use driver::{MAX_SCAN_PINS, ScanRecord, scan_all};
pub use probe::{PinObservations, ProbeFailure, ProbeResult, ProbeStep, probe};
