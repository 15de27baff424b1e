//! RP2350 GPIO implementation
//!
//! Wraps an `embassy-rp` [`Flex`] pin, which allows runtime reconfiguration
//! between input and output with selectable pulls, exactly the shape the
//! probe sequence needs.

use embassy_rp::gpio::{Flex, Pull};

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
};

/// RP2350 GPIO implementation
pub struct Rp2350Gpio {
    pin: Flex<'static>,
    mode: GpioMode,
}

impl Rp2350Gpio {
    /// Wrap a flex pin, parked as plain input
    pub(crate) fn new(mut pin: Flex<'static>) -> Self {
        pin.set_pull(Pull::None);
        pin.set_as_input();
        Self {
            pin,
            mode: GpioMode::Input,
        }
    }

    /// Restore the safe parking configuration (high-impedance input)
    pub(crate) fn park(&mut self) {
        self.pin.set_pull(Pull::None);
        self.pin.set_as_input();
        self.mode = GpioMode::Input;
    }
}

impl GpioInterface for Rp2350Gpio {
    fn supports(&self, _mode: GpioMode) -> bool {
        // Every RP2350 GPIO has pull resistors and SIO output drive.
        true
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        match mode {
            GpioMode::Input => {
                self.pin.set_pull(Pull::None);
                self.pin.set_as_input();
            }
            GpioMode::InputPullUp => {
                self.pin.set_pull(Pull::Up);
                self.pin.set_as_input();
            }
            GpioMode::InputPullDown => {
                self.pin.set_pull(Pull::Down);
                self.pin.set_as_input();
            }
            GpioMode::OutputPushPull => {
                self.pin.set_pull(Pull::None);
                self.pin.set_as_output();
            }
        }
        self.mode = mode;
        Ok(())
    }

    fn set_high(&mut self) -> Result<()> {
        if self.mode != GpioMode::OutputPushPull {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        if self.mode != GpioMode::OutputPushPull {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.pin.set_low();
        Ok(())
    }

    fn read(&mut self) -> bool {
        // Reads the pad input buffer, so in output mode this is the level
        // actually present on the pin, not the requested drive level.
        self.pin.is_high()
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
