//! Human-readable report formatting
//!
//! Renders system information and scan records through [`core::fmt::Write`],
//! so the same formatting feeds a defmt sink on hardware and plain strings
//! in host tests. Unsupported system queries render as "NA"; absent pin
//! readings render as "-".

use core::fmt::{self, Write};

use crate::platform::traits::SystemInfo;
use crate::scan::{PinObservations, ProbeResult, ScanRecord, Verdict};

/// Write the system information section
pub fn write_system_report<W: Write, S: SystemInfo>(w: &mut W, sys: &S) -> fmt::Result {
    writeln!(w, "=== MCU Specifications ===")?;
    writeln!(w, "Firmware Version: {}", sys.firmware_version())?;
    writeln!(w, "Machine: {}", sys.machine().unwrap_or("NA"))?;
    writeln!(w, "Processor: {}", sys.processor().unwrap_or("NA"))?;
    writeln!(w, "Release Version: {}", sys.release().unwrap_or("NA"))?;

    match sys.free_memory() {
        Some(bytes) => writeln!(w, "RAM Free: {} bytes", bytes)?,
        None => writeln!(w, "RAM Free: NA")?,
    }
    match sys.flash_stats() {
        Some(stats) => writeln!(w, "Flash Size: {} bytes", stats.total_bytes())?,
        None => writeln!(w, "Flash Size: NA")?,
    }
    match sys.clock_hz() {
        Some(hz) => writeln!(w, "Frequency: {} Hz", hz)?,
        None => writeln!(w, "Frequency: NA")?,
    }
    match sys.uptime_ms() {
        Some(ms) => writeln!(w, "Uptime: {} seconds since boot", ms / 1000)?,
        None => writeln!(w, "Uptime: NA")?,
    }
    Ok(())
}

fn reading(level: Option<bool>) -> &'static str {
    match level {
        Some(true) => "1",
        Some(false) => "0",
        None => "-",
    }
}

fn write_observations<W: Write>(w: &mut W, observations: &PinObservations) -> fmt::Result {
    write!(
        w,
        "PULL_UP={} PULL_DOWN={} OUT_HIGH={} OUT_LOW={}",
        reading(observations.pull_up),
        reading(observations.pull_down),
        reading(observations.drive_high),
        reading(observations.drive_low),
    )
}

/// Write one scan record as a single line
pub fn write_scan_record<W: Write>(w: &mut W, record: &ScanRecord<'_>) -> fmt::Result {
    write!(w, "Pin {}", record.pin)?;
    if let Some(function) = record.function {
        write!(w, " [{}]", function)?;
    }
    match &record.result {
        ProbeResult::Observed(observations) => {
            write!(w, ": ")?;
            write_observations(w, observations)?;
            if let Some(verdict) = record.verdict {
                write!(w, " -> {}", verdict)?;
            }
            writeln!(w)
        }
        ProbeResult::Unavailable(failure) => writeln!(w, ": unavailable ({})", failure),
    }
}

/// Write the full scan section: one line per pin plus a summary
pub fn write_scan_report<W: Write>(w: &mut W, records: &[ScanRecord<'_>]) -> fmt::Result {
    writeln!(w, "=== Pin Diagnostic Report ===")?;

    let mut nominal = 0usize;
    let mut anomalous = 0usize;
    let mut indeterminate = 0usize;
    let mut unavailable = 0usize;

    for record in records {
        write_scan_record(w, record)?;
        match record.verdict {
            Some(Verdict::Nominal) => nominal += 1,
            Some(Verdict::Anomalous) => anomalous += 1,
            Some(Verdict::Indeterminate) => indeterminate += 1,
            None => unavailable += 1,
        }
    }

    writeln!(
        w,
        "{} pins scanned: {} nominal, {} anomalous, {} indeterminate, {} unavailable",
        records.len(),
        nominal,
        anomalous,
        indeterminate,
        unavailable
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockPlatform, MockSystemInfo, PinBehavior};
    use crate::scan::{ProbeFailure, scan_all};

    type ReportBuf = heapless::String<2048>;

    #[test]
    fn system_report_renders_na_for_unsupported_queries() {
        let sys = MockSystemInfo {
            machine: None,
            free_memory: None,
            clock_hz: None,
            ..MockSystemInfo::default()
        };
        let mut out = ReportBuf::new();
        write_system_report(&mut out, &sys).unwrap();

        assert!(out.contains("Machine: NA"));
        assert!(out.contains("RAM Free: NA"));
        assert!(out.contains("Frequency: NA"));
        assert!(out.contains("Processor: mock-core"));
        assert!(out.contains("Uptime: 12 seconds since boot"));
    }

    #[test]
    fn nominal_record_renders_readings_and_verdict() {
        let mut platform = MockPlatform::new();
        let records = scan_all(&mut platform, None);

        let mut out = ReportBuf::new();
        write_scan_record(&mut out, &records[0]).unwrap();
        assert_eq!(
            out.as_str(),
            "Pin 0: PULL_UP=1 PULL_DOWN=0 OUT_HIGH=1 OUT_LOW=0 -> nominal\n"
        );
    }

    #[test]
    fn absent_readings_render_as_dashes() {
        let mut platform = MockPlatform::new().with_behavior(1, PinBehavior::NoPullControl);
        let records = scan_all(&mut platform, None);

        let mut out = ReportBuf::new();
        write_scan_record(&mut out, &records[1]).unwrap();
        assert_eq!(
            out.as_str(),
            "Pin 1: PULL_UP=- PULL_DOWN=- OUT_HIGH=1 OUT_LOW=0 -> indeterminate\n"
        );
    }

    #[test]
    fn unavailable_record_names_the_reason() {
        let record = ScanRecord {
            pin: 40,
            result: ProbeResult::Unavailable(ProbeFailure::InvalidPin),
            verdict: None,
            function: None,
        };
        let mut out = ReportBuf::new();
        write_scan_record(&mut out, &record).unwrap();
        assert_eq!(out.as_str(), "Pin 40: unavailable (invalid pin)\n");
    }

    #[test]
    fn summary_counts_every_category() {
        let mut platform = MockPlatform::new()
            .with_pin_count(32)
            .with_behavior(2, PinBehavior::StuckHigh)
            .with_behavior(3, PinBehavior::NoPullControl);
        let records = scan_all(&mut platform, None);

        let mut out = heapless::String::<4096>::new();
        write_scan_report(&mut out, &records).unwrap();
        assert!(out.contains(
            "32 pins scanned: 28 nominal, 1 anomalous, 1 indeterminate, 2 unavailable"
        ));
    }
}
