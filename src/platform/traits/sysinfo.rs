//! System information interface
//!
//! Single-read platform queries: firmware version, machine identifiers,
//! memory and flash counters, clock frequency, uptime. Every query a platform
//! cannot answer returns `None` and is reported as "NA" by the report layer;
//! a missing reading never fails the caller.

/// Filesystem/flash block statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashStats {
    /// Size of one block in bytes
    pub block_size: u32,
    /// Total number of blocks
    pub block_count: u32,
}

impl FlashStats {
    /// Total flash size in bytes
    pub fn total_bytes(&self) -> u64 {
        u64::from(self.block_size) * u64::from(self.block_count)
    }
}

/// System information trait
///
/// Each method is one direct platform read with no side effects.
pub trait SystemInfo {
    /// Firmware/application version string
    fn firmware_version(&self) -> &str;

    /// Machine string as reported by the platform (e.g. "RP2350 Pico 2 W").
    ///
    /// The token before the first whitespace is the MCU identifier used as
    /// the pinout table lookup key.
    fn machine(&self) -> Option<&str>;

    /// Processor/core name
    fn processor(&self) -> Option<&str>;

    /// Platform release/SDK version
    fn release(&self) -> Option<&str>;

    /// Free RAM in bytes
    fn free_memory(&self) -> Option<u32>;

    /// Flash block statistics
    fn flash_stats(&self) -> Option<FlashStats>;

    /// System clock frequency in Hz
    fn clock_hz(&self) -> Option<u32>;

    /// Milliseconds since boot
    fn uptime_ms(&self) -> Option<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_stats_total_does_not_overflow_u32() {
        let stats = FlashStats {
            block_size: 4096,
            block_count: 2_000_000,
        };
        assert_eq!(stats.total_bytes(), 4096 * 2_000_000u64);
    }
}
