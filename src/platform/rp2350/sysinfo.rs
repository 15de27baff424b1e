//! RP2350 system information

use crate::platform::traits::{FlashStats, SystemInfo};

/// RP2350 system information provider
///
/// Free-memory and flash statistics have no portable source on this target
/// (no allocator, no filesystem), so those queries report unsupported.
#[derive(Debug, Default)]
pub struct Rp2350SystemInfo;

impl SystemInfo for Rp2350SystemInfo {
    fn firmware_version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn machine(&self) -> Option<&str> {
        Some("RP2350 Pico 2 W")
    }

    fn processor(&self) -> Option<&str> {
        Some("Cortex-M33")
    }

    fn release(&self) -> Option<&str> {
        None
    }

    fn free_memory(&self) -> Option<u32> {
        None
    }

    fn flash_stats(&self) -> Option<FlashStats> {
        None
    }

    fn clock_hz(&self) -> Option<u32> {
        Some(embassy_rp::clocks::clk_sys_freq())
    }

    fn uptime_ms(&self) -> Option<u64> {
        Some(embassy_time::Instant::now().as_millis())
    }
}
