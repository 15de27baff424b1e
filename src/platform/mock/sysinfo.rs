//! Mock system information for testing

use crate::platform::traits::{FlashStats, SystemInfo};

/// Mock system information provider
///
/// Every field is public so tests can script supported and unsupported
/// queries per scenario.
#[derive(Debug, Clone)]
pub struct MockSystemInfo {
    pub machine: Option<&'static str>,
    pub processor: Option<&'static str>,
    pub release: Option<&'static str>,
    pub free_memory: Option<u32>,
    pub flash: Option<FlashStats>,
    pub clock_hz: Option<u32>,
    pub uptime_ms: Option<u64>,
}

impl Default for MockSystemInfo {
    fn default() -> Self {
        Self {
            machine: Some("MOCK rev0"),
            processor: Some("mock-core"),
            release: Some("0.0-test"),
            free_memory: Some(192 * 1024),
            flash: Some(FlashStats {
                block_size: 4096,
                block_count: 512,
            }),
            clock_hz: Some(125_000_000),
            uptime_ms: Some(12_345),
        }
    }
}

impl SystemInfo for MockSystemInfo {
    fn firmware_version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn machine(&self) -> Option<&str> {
        self.machine
    }

    fn processor(&self) -> Option<&str> {
        self.processor
    }

    fn release(&self) -> Option<&str> {
        self.release
    }

    fn free_memory(&self) -> Option<u32> {
        self.free_memory
    }

    fn flash_stats(&self) -> Option<FlashStats> {
        self.flash
    }

    fn clock_hz(&self) -> Option<u32> {
        self.clock_hz
    }

    fn uptime_ms(&self) -> Option<u64> {
        self.uptime_ms
    }
}
