//! GPIO interface trait
//!
//! This module defines the GPIO (General Purpose Input/Output) interface that
//! platform implementations must provide.

use crate::platform::Result;

/// GPIO pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioMode {
    /// Input mode (high impedance), the safe parking configuration
    Input,
    /// Input mode with pull-up resistor
    InputPullUp,
    /// Input mode with pull-down resistor
    InputPullDown,
    /// Output mode (push-pull)
    OutputPushPull,
}

/// GPIO interface trait
///
/// Platform implementations must provide this interface for GPIO control.
///
/// # Safety Invariants
///
/// - Only one owner per GPIO pin instance
/// - No concurrent access to the same GPIO pin from multiple contexts
/// - Pin number must be valid for the platform
pub trait GpioInterface {
    /// Query whether this pin can be configured into `mode`
    ///
    /// The answer is fixed per platform and pin; callers consult it once
    /// before attempting a reconfiguration instead of probing the hardware
    /// with speculative `set_mode` calls.
    fn supports(&self, mode: GpioMode) -> bool;

    /// Reconfigure the pin into `mode`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::UnsupportedMode)` if the pin
    /// cannot take the requested configuration, or
    /// `PlatformError::Gpio(GpioError::HardwareFault)` if the hardware
    /// rejected a supported one.
    fn set_mode(&mut self, mode: GpioMode) -> Result<()>;

    /// Set GPIO pin high (logic level 1)
    ///
    /// Only valid in output modes.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_high(&mut self) -> Result<()>;

    /// Set GPIO pin low (logic level 0)
    ///
    /// Only valid in output modes.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin
    /// is not configured as an output.
    fn set_low(&mut self) -> Result<()>;

    /// Read GPIO pin state
    ///
    /// Returns `true` if the pin is high, `false` if low.
    ///
    /// Valid in both input and output modes; in output modes this reads the
    /// level actually present on the pad, not the requested drive level.
    fn read(&mut self) -> bool;

    /// Get current GPIO pin mode
    fn mode(&self) -> GpioMode;
}
