//! RP2350 (Pico 2 W) platform implementation

mod gpio;
mod platform;
mod sysinfo;

pub use gpio::Rp2350Gpio;
pub use platform::{GPIO_COUNT, Rp2350Platform};
pub use sysinfo::Rp2350SystemInfo;
