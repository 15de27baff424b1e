//! Mock Platform implementation for testing

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::{BoardDescriptor, Platform},
};

use super::{MockGpio, MockSystemInfo, PinBehavior};
use crate::platform::traits::{GpioInterface, GpioMode};

/// Mock Platform implementation
///
/// Provides scriptable peripheral behavior for hardware-free testing. Pins
/// default to [`PinBehavior::Healthy`]; individual pins can be rescripted,
/// and the board descriptor's pin count can exceed the number of pins the
/// "package" implements to exercise invalid-pin handling.
#[derive(Debug)]
pub struct MockPlatform {
    board: BoardDescriptor,
    sysinfo: MockSystemInfo,
    behaviors: [PinBehavior; Self::PIN_SLOTS],
    claimed: [bool; Self::PIN_SLOTS],
    released_modes: [Option<GpioMode>; Self::PIN_SLOTS],
}

impl MockPlatform {
    /// Number of pins the mock package implements (valid indices 0..30)
    pub const PIN_SLOTS: usize = 30;

    /// Highest valid GPIO number
    pub const MAX_GPIO: u8 = Self::PIN_SLOTS as u8 - 1;

    /// Create a new mock platform with all pins healthy
    pub fn new() -> Self {
        Self {
            board: BoardDescriptor {
                name: "MockBoard",
                pin_count: Self::PIN_SLOTS as u8,
            },
            sysinfo: MockSystemInfo::default(),
            behaviors: [PinBehavior::Healthy; Self::PIN_SLOTS],
            claimed: [false; Self::PIN_SLOTS],
            released_modes: [None; Self::PIN_SLOTS],
        }
    }

    /// Mode a pin was in when it was last released, if it ever was
    pub fn last_released_mode(&self, pin: u8) -> Option<GpioMode> {
        self.released_modes
            .get(usize::from(pin))
            .copied()
            .flatten()
    }

    /// Set the number of pin indices the scan driver will iterate
    ///
    /// May exceed [`Self::PIN_SLOTS`]; the surplus indices are rejected as
    /// invalid pins, the way a smaller package rejects indices the loop
    /// bound still covers.
    pub fn with_pin_count(mut self, pin_count: u8) -> Self {
        self.board.pin_count = pin_count;
        self
    }

    /// Script the electrical behavior of one pin
    pub fn with_behavior(mut self, pin: u8, behavior: PinBehavior) -> Self {
        self.behaviors[usize::from(pin)] = behavior;
        self
    }

    /// Replace the reported machine string (or withdraw it with `None`)
    pub fn with_machine(mut self, machine: Option<&'static str>) -> Self {
        self.sysinfo.machine = machine;
        self
    }

    /// Mutable access to the scripted system information
    pub fn sysinfo_mut(&mut self) -> &mut MockSystemInfo {
        &mut self.sysinfo
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Gpio = MockGpio;
    type Sys = MockSystemInfo;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn board(&self) -> &BoardDescriptor {
        &self.board
    }

    fn claim_pin(&mut self, pin: u8) -> Result<Self::Gpio> {
        let idx = usize::from(pin);
        if idx >= Self::PIN_SLOTS {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        if self.claimed[idx] {
            return Err(PlatformError::Gpio(GpioError::PinInUse));
        }
        self.claimed[idx] = true;
        Ok(MockGpio::new(self.behaviors[idx]))
    }

    fn release_pin(&mut self, pin: u8, gpio: Self::Gpio) {
        let idx = usize::from(pin);
        if let Some(slot) = self.claimed.get_mut(idx) {
            *slot = false;
            self.released_modes[idx] = Some(gpio.mode());
        }
    }

    fn sysinfo(&self) -> &Self::Sys {
        &self.sysinfo
    }
}
