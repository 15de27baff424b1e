//! RP2350 Platform implementation

use embassy_rp::gpio::Flex;

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::{BoardDescriptor, Platform},
};

use super::{Rp2350Gpio, Rp2350SystemInfo};

/// Number of GPIO pins bonded out on the RP2350 QFN-60 (Pico 2 W)
pub const GPIO_COUNT: usize = 30;

/// RP2350 Platform implementation
///
/// All GPIO are converted to runtime-reconfigurable flex pins at init and
/// held in a slot table; claiming moves the handle out, releasing parks it
/// and puts it back. A missing slot is a pin someone else currently owns.
pub struct Rp2350Platform {
    board: BoardDescriptor,
    sysinfo: Rp2350SystemInfo,
    slots: [Option<Rp2350Gpio>; GPIO_COUNT],
}

impl Platform for Rp2350Platform {
    type Gpio = Rp2350Gpio;
    type Sys = Rp2350SystemInfo;

    /// Initialize the platform
    ///
    /// Must be called at most once per boot: it takes the HAL's peripheral
    /// singletons.
    fn init() -> Result<Self> {
        let p = embassy_rp::init(Default::default());

        let slots = [
            Some(Rp2350Gpio::new(Flex::new(p.PIN_0))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_1))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_2))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_3))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_4))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_5))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_6))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_7))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_8))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_9))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_10))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_11))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_12))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_13))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_14))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_15))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_16))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_17))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_18))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_19))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_20))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_21))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_22))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_23))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_24))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_25))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_26))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_27))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_28))),
            Some(Rp2350Gpio::new(Flex::new(p.PIN_29))),
        ];

        Ok(Self {
            board: BoardDescriptor {
                name: "Pico 2 W",
                pin_count: GPIO_COUNT as u8,
            },
            sysinfo: Rp2350SystemInfo,
            slots,
        })
    }

    fn board(&self) -> &BoardDescriptor {
        &self.board
    }

    fn claim_pin(&mut self, pin: u8) -> Result<Self::Gpio> {
        let idx = usize::from(pin);
        if idx >= self.slots.len() {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        self.slots[idx]
            .take()
            .ok_or(PlatformError::Gpio(GpioError::PinInUse))
    }

    fn release_pin(&mut self, pin: u8, mut gpio: Self::Gpio) {
        gpio.park();
        if let Some(slot) = self.slots.get_mut(usize::from(pin)) {
            *slot = Some(gpio);
        }
    }

    fn sysinfo(&self) -> &Self::Sys {
        &self.sysinfo
    }
}
