//! Mock GPIO implementation for testing

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
};

/// Scripted electrical behavior of one mock pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinBehavior {
    /// Electrically sound pin: follows its pull resistors and drive level
    Healthy,
    /// Reads HIGH regardless of configuration (e.g. short to the supply rail)
    StuckHigh,
    /// Reads LOW regardless of configuration (e.g. short to ground)
    StuckLow,
    /// Pin without internal pull resistors; pull modes are unsupported
    NoPullControl,
    /// Reconfiguring into the given mode fails with a hardware fault
    FailsMode(GpioMode),
}

/// Mock GPIO implementation
///
/// Tracks mode and drive level, and derives `read` from the scripted
/// behavior the way a real unconnected pin would respond.
#[derive(Debug)]
pub struct MockGpio {
    behavior: PinBehavior,
    mode: GpioMode,
    driven_high: bool,
}

impl MockGpio {
    /// Create a new mock pin with the given behavior, parked as plain input
    pub fn new(behavior: PinBehavior) -> Self {
        Self {
            behavior,
            mode: GpioMode::Input,
            driven_high: false,
        }
    }
}

impl GpioInterface for MockGpio {
    fn supports(&self, mode: GpioMode) -> bool {
        match self.behavior {
            PinBehavior::NoPullControl => {
                !matches!(mode, GpioMode::InputPullUp | GpioMode::InputPullDown)
            }
            _ => true,
        }
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        if !self.supports(mode) {
            return Err(PlatformError::Gpio(GpioError::UnsupportedMode));
        }
        if self.behavior == PinBehavior::FailsMode(mode) {
            return Err(PlatformError::Gpio(GpioError::HardwareFault));
        }
        self.mode = mode;
        Ok(())
    }

    fn set_high(&mut self) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull => {
                self.driven_high = true;
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn set_low(&mut self) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull => {
                self.driven_high = false;
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn read(&mut self) -> bool {
        match self.behavior {
            PinBehavior::StuckHigh => true,
            PinBehavior::StuckLow => false,
            _ => match self.mode {
                GpioMode::Input => false,
                GpioMode::InputPullUp => true,
                GpioMode::InputPullDown => false,
                GpioMode::OutputPushPull => self.driven_high,
            },
        }
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_pin_follows_pulls_and_drive() {
        let mut gpio = MockGpio::new(PinBehavior::Healthy);

        gpio.set_mode(GpioMode::InputPullUp).unwrap();
        assert!(gpio.read());

        gpio.set_mode(GpioMode::InputPullDown).unwrap();
        assert!(!gpio.read());

        gpio.set_mode(GpioMode::OutputPushPull).unwrap();
        gpio.set_high().unwrap();
        assert!(gpio.read());
        gpio.set_low().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn stuck_pin_ignores_configuration() {
        let mut gpio = MockGpio::new(PinBehavior::StuckHigh);
        gpio.set_mode(GpioMode::InputPullDown).unwrap();
        assert!(gpio.read());

        gpio.set_mode(GpioMode::OutputPushPull).unwrap();
        gpio.set_low().unwrap();
        assert!(gpio.read());
    }

    #[test]
    fn drive_requires_output_mode() {
        let mut gpio = MockGpio::new(PinBehavior::Healthy);
        gpio.set_mode(GpioMode::InputPullUp).unwrap();
        assert_eq!(
            gpio.set_high(),
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        );
        assert_eq!(
            gpio.set_low(),
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        );
    }

    #[test]
    fn no_pull_control_rejects_pull_modes() {
        let mut gpio = MockGpio::new(PinBehavior::NoPullControl);
        assert!(!gpio.supports(GpioMode::InputPullUp));
        assert!(!gpio.supports(GpioMode::InputPullDown));
        assert!(gpio.supports(GpioMode::OutputPushPull));
        assert_eq!(
            gpio.set_mode(GpioMode::InputPullUp),
            Err(PlatformError::Gpio(GpioError::UnsupportedMode))
        );
    }

    #[test]
    fn fails_mode_reports_hardware_fault() {
        let mut gpio = MockGpio::new(PinBehavior::FailsMode(GpioMode::OutputPushPull));
        gpio.set_mode(GpioMode::InputPullUp).unwrap();
        assert_eq!(
            gpio.set_mode(GpioMode::OutputPushPull),
            Err(PlatformError::Gpio(GpioError::HardwareFault))
        );
    }
}
