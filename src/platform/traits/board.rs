//! Board description data
//!
//! Static facts about the board under test. The scan loop bound comes from
//! here rather than from hardware detection: packages of the same MCU differ
//! in how many pins they bond out, and the platform implementation is the
//! place that knows.

/// Board-level configuration data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardDescriptor {
    /// Human-readable board name (e.g. "Pico 2 W")
    pub name: &'static str,
    /// Number of GPIO indices the scan driver iterates (0..pin_count)
    pub pin_count: u8,
}
